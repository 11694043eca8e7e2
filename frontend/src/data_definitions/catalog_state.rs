//! Filter draft plus listing results, shared by the catalog pages.

use common::executor::{CommitOutcome, ListingQueryExecutor};
use common::filter::{FilterCriteria, FilterStore, PanelState};
use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::api::catalog_api::fetch_listings;

#[derive(Clone, Copy)]
pub struct CatalogState {
    pub draft: Signal<FilterStore>,
    pub panels: Signal<PanelState>,
    pub executor: Signal<ListingQueryExecutor>,
    /// Filters that could not be turned into a query.
    pub query_error: Signal<Option<String>>,
    pub apply_filters: Callback<()>,
    pub clear_filters: Callback<()>,
    pub revert_draft: Callback<()>,
    pub dismiss_error: Callback<()>,
}

/// Provides [`CatalogState`] to the subtree and fetches once on mount.
/// Every clear bumps the draft's generation, which fetches again.
pub fn use_catalog_state_provider(initial: FilterCriteria) -> CatalogState {
    let mut draft = use_signal(move || FilterStore::new(initial));
    let mut panels = use_signal(PanelState::default);
    let mut executor = use_signal(ListingQueryExecutor::default);
    let mut query_error = use_signal(|| None::<String>);

    let run_query = use_callback(move |criteria: FilterCriteria| {
        let pending = match executor.write().apply(&criteria) {
            Ok(pending) => pending,
            Err(e) => {
                tracing::warn!("filters not applied: {}", e);
                query_error.set(Some(e.to_string()));
                return;
            }
        };
        query_error.set(None);
        tracing::info!("listing query #{} with {} params", pending.seq.0, pending.query.len());
        spawn(async move {
            let result = fetch_listings(pending.query).await.map_err(|e| e.to_string());
            if let Err(e) = &result {
                tracing::error!("listing query #{} failed: {}", pending.seq.0, e);
            }
            if executor.write().commit(pending.seq, result) == CommitOutcome::Stale {
                tracing::debug!("dropped stale listing response #{}", pending.seq.0);
            }
        });
    });

    let clear_generation = use_memo(move || draft.read().clear_generation());
    use_effect(move || {
        let _ = clear_generation();
        run_query(draft.peek().snapshot());
    });

    let apply_filters = use_callback(move |_: ()| {
        run_query(draft.peek().snapshot());
        panels.write().close();
    });
    let clear_filters = use_callback(move |_: ()| {
        draft.write().clear();
        panels.write().close();
    });
    let revert_draft = use_callback(move |_: ()| {
        let applied = executor.peek().applied_criteria().cloned();
        if let Some(applied) = applied {
            draft.write().load(applied);
        }
        panels.write().close();
    });
    let dismiss_error = use_callback(move |_: ()| {
        executor.write().dismiss_error();
        query_error.set(None);
    });

    use_context_provider(move || CatalogState {
        draft,
        panels,
        executor,
        query_error,
        apply_filters,
        clear_filters,
        revert_draft,
        dismiss_error,
    })
}
