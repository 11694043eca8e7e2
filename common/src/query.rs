//! Flat string encoding of filter criteria for the listing endpoint.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::filter::{FilterCriteria, FilterDimension, PriceRange};

/// Joins multi-select values. Listing values may contain a single comma.
pub const FILTER_VALUE_DELIMITER: &str = ",,";

const DELIMITER_CHAR: char = ',';

pub const MIN_PRICE_KEY: &str = "minPrice";
pub const MAX_PRICE_KEY: &str = "maxPrice";
pub const LUXURY_KEY: &str = "isLuxury";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryEncodingError {
    /// The value can't be told apart from a delimiter-joined list.
    AmbiguousValue { dimension: FilterDimension, value: String },
}

impl std::fmt::Display for QueryEncodingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AmbiguousValue { dimension, value } => write!(
                f,
                "{} value {:?} is empty, contains {:?} or starts or ends with a comma",
                dimension.display_name(),
                value,
                FILTER_VALUE_DELIMITER
            ),
        }
    }
}

impl std::error::Error for QueryEncodingError {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SerializedQuery(pub BTreeMap<String, String>);

impl SerializedQuery {
    /// Encodes the criteria. Empty dimensions are left out, the price range
    /// only appears when narrowed and `isLuxury` is always present.
    pub fn from_criteria(criteria: &FilterCriteria) -> Result<Self, QueryEncodingError> {
        let mut map = BTreeMap::new();
        for dimension in FilterDimension::ALL {
            let values = criteria.values(dimension);
            if values.is_empty() {
                continue;
            }
            if let Some(bad) = values.iter().find(|v| is_ambiguous(v)) {
                return Err(QueryEncodingError::AmbiguousValue { dimension, value: bad.clone() });
            }
            let joined = values.iter().map(|v| v.as_str()).collect::<Vec<_>>().join(FILTER_VALUE_DELIMITER);
            map.insert(dimension.wire_key().to_string(), joined);
        }
        if !criteria.price_range.is_full_range() {
            map.insert(MIN_PRICE_KEY.to_string(), criteria.price_range.min.to_string());
            map.insert(MAX_PRICE_KEY.to_string(), criteria.price_range.max.to_string());
        }
        map.insert(LUXURY_KEY.to_string(), criteria.is_luxury.to_string());
        Ok(Self(map))
    }

    /// Decodes back into criteria. Unknown keys are ignored, missing ones default.
    pub fn to_criteria(&self) -> FilterCriteria {
        let mut criteria = FilterCriteria::default();
        for dimension in FilterDimension::ALL {
            if let Some(raw) = self.0.get(dimension.wire_key()) {
                *criteria.values_mut(dimension) = split_values(raw);
            }
        }
        let defaults = PriceRange::default();
        let min = self.parse_number(MIN_PRICE_KEY).unwrap_or(defaults.min);
        let max = self.parse_number(MAX_PRICE_KEY).unwrap_or(defaults.max);
        criteria.price_range = PriceRange { min, max }.normalized();
        criteria.is_luxury = self.0.get(LUXURY_KEY).map(|v| v == "true").unwrap_or(false);
        criteria
    }

    fn parse_number(&self, key: &str) -> Option<u32> {
        self.0.get(key).and_then(|v| v.parse().ok())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|v| v.as_str())
    }

    pub fn as_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// True when joining and splitting could move the value's commas into a
/// neighbour, or drop the value entirely.
pub fn is_ambiguous(value: &str) -> bool {
    value.is_empty()
        || value.contains(FILTER_VALUE_DELIMITER)
        || value.starts_with(DELIMITER_CHAR)
        || value.ends_with(DELIMITER_CHAR)
}

pub fn split_values(raw: &str) -> BTreeSet<String> {
    raw.split(FILTER_VALUE_DELIMITER)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}
