//! Request lifecycle for filtered listing fetches.
//!
//! Fetches may overlap. Every call to [`ListingQueryExecutor::apply`] takes a
//! new sequence number and only the result carrying the latest number is
//! committed; anything older is dropped when it arrives.

use crate::catalog::ListingRecord;
use crate::filter::FilterCriteria;
use crate::query::{QueryEncodingError, SerializedQuery};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestSeq(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PendingQuery {
    pub seq: RequestSeq,
    pub query: SerializedQuery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    Applied,
    /// A newer request was started after this one.
    Stale,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListingQueryExecutor {
    next_seq: u64,
    latest: Option<RequestSeq>,
    latest_criteria: Option<FilterCriteria>,
    applied_criteria: Option<FilterCriteria>,
    status: QueryStatus,
    results: Vec<ListingRecord>,
    error: Option<String>,
    window_reset_generation: u64,
}

impl ListingQueryExecutor {
    /// Starts a new request for `criteria`. Encoding failures leave the
    /// executor untouched.
    pub fn apply(&mut self, criteria: &FilterCriteria) -> Result<PendingQuery, QueryEncodingError> {
        let query = SerializedQuery::from_criteria(criteria)?;
        self.next_seq += 1;
        let seq = RequestSeq(self.next_seq);
        self.latest = Some(seq);
        self.latest_criteria = Some(criteria.clone());
        self.status = QueryStatus::Loading;
        Ok(PendingQuery { seq, query })
    }

    pub fn commit(&mut self, seq: RequestSeq, result: Result<Vec<ListingRecord>, String>) -> CommitOutcome {
        if self.latest != Some(seq) {
            return CommitOutcome::Stale;
        }
        match result {
            Ok(records) => {
                self.results = records;
                self.error = None;
                self.status = QueryStatus::Success;
                self.applied_criteria = self.latest_criteria.clone();
                self.window_reset_generation += 1;
            }
            Err(message) => {
                // previous results stay visible
                self.error = Some(message);
                self.status = QueryStatus::Failure;
            }
        }
        CommitOutcome::Applied
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn status(&self) -> QueryStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == QueryStatus::Loading
    }

    pub fn results(&self) -> &[ListingRecord] {
        &self.results
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// A successful fetch that matched nothing.
    pub fn is_empty_result(&self) -> bool {
        self.status == QueryStatus::Success && self.results.is_empty()
    }

    pub fn latest_seq(&self) -> Option<RequestSeq> {
        self.latest
    }

    pub fn applied_criteria(&self) -> Option<&FilterCriteria> {
        self.applied_criteria.as_ref()
    }

    /// Bumped on every committed success; carousels showing the results
    /// go back to index 0 when it changes.
    pub fn window_reset_generation(&self) -> u64 {
        self.window_reset_generation
    }
}
