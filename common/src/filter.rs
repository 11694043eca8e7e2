//! Filter criteria and the store that mutates them.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub const PRICE_FLOOR: u32 = 1;
pub const PRICE_CEILING: u32 = 100;

/// The multi-select filter dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FilterDimension {
    PropertyType,
    Bedroom,
    ConstructionStatus,
    Brand,
}

impl FilterDimension {
    pub const ALL: [FilterDimension; 4] = [
        FilterDimension::PropertyType,
        FilterDimension::Bedroom,
        FilterDimension::ConstructionStatus,
        FilterDimension::Brand,
    ];

    /// Query key used by the listing endpoint.
    pub fn wire_key(self) -> &'static str {
        match self {
            FilterDimension::PropertyType => "property_Type",
            FilterDimension::Bedroom => "property_Bedroom",
            FilterDimension::ConstructionStatus => "property_Construction_status",
            FilterDimension::Brand => "brand_name",
        }
    }

    pub fn from_wire_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.wire_key() == key)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            FilterDimension::PropertyType => "Property Type",
            FilterDimension::Bedroom => "Bedroom",
            FilterDimension::ConstructionStatus => "Construction Status",
            FilterDimension::Brand => "Brands",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self { min: PRICE_FLOOR, max: PRICE_CEILING }
    }
}

impl PriceRange {
    /// Moves the lower handle; it can't pass the current upper handle.
    pub fn with_min(self, min: u32) -> Self {
        let upper = self.max.clamp(PRICE_FLOOR, PRICE_CEILING);
        Self { min: min.clamp(PRICE_FLOOR, upper), max: upper }
    }

    /// Moves the upper handle; it can't drop below the current lower handle.
    pub fn with_max(self, max: u32) -> Self {
        let lower = self.min.clamp(PRICE_FLOOR, PRICE_CEILING);
        Self { min: lower, max: max.clamp(lower, PRICE_CEILING) }
    }

    /// Restores `1 <= min <= max <= 100` for ranges that came from outside.
    pub fn normalized(self) -> Self {
        let min = self.min.clamp(PRICE_FLOOR, PRICE_CEILING);
        let max = self.max.clamp(min, PRICE_CEILING);
        Self { min, max }
    }

    pub fn is_full_range(&self) -> bool {
        self.min == PRICE_FLOOR && self.max == PRICE_CEILING
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FilterCriteria {
    pub property_types: BTreeSet<String>,
    pub bedroom_counts: BTreeSet<String>,
    pub construction_statuses: BTreeSet<String>,
    pub brand_names: BTreeSet<String>,
    pub price_range: PriceRange,
    pub is_luxury: bool,
}

impl FilterCriteria {
    pub fn luxury() -> Self {
        Self { is_luxury: true, ..Default::default() }
    }

    pub fn values(&self, dimension: FilterDimension) -> &BTreeSet<String> {
        match dimension {
            FilterDimension::PropertyType => &self.property_types,
            FilterDimension::Bedroom => &self.bedroom_counts,
            FilterDimension::ConstructionStatus => &self.construction_statuses,
            FilterDimension::Brand => &self.brand_names,
        }
    }

    pub fn values_mut(&mut self, dimension: FilterDimension) -> &mut BTreeSet<String> {
        match dimension {
            FilterDimension::PropertyType => &mut self.property_types,
            FilterDimension::Bedroom => &mut self.bedroom_counts,
            FilterDimension::ConstructionStatus => &mut self.construction_statuses,
            FilterDimension::Brand => &mut self.brand_names,
        }
    }
}

/// Holds the draft criteria edited by the filter panel.
///
/// The store never talks to the network; the listing executor takes a
/// [`FilterStore::snapshot`] when the user applies the filters.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterStore {
    criteria: FilterCriteria,
    clear_generation: u64,
}

impl FilterStore {
    pub fn new(criteria: FilterCriteria) -> Self {
        Self { criteria, clear_generation: 0 }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn toggle(&mut self, dimension: FilterDimension, value: impl Into<String>) {
        let value = value.into();
        let entry = self.criteria.values_mut(dimension);
        if !entry.remove(&value) {
            entry.insert(value);
        }
    }

    pub fn contains(&self, dimension: FilterDimension, value: &str) -> bool {
        self.criteria.values(dimension).contains(value)
    }

    pub fn has_selection(&self, dimension: FilterDimension) -> bool {
        !self.criteria.values(dimension).is_empty()
    }

    pub fn set_price_min(&mut self, min: u32) {
        self.criteria.price_range = self.criteria.price_range.with_min(min);
    }

    pub fn set_price_max(&mut self, max: u32) {
        self.criteria.price_range = self.criteria.price_range.with_max(max);
    }

    /// Moves both handles: min is clamped against the current max first,
    /// then max against the resulting min.
    pub fn set_price_range(&mut self, min: u32, max: u32) {
        self.set_price_min(min);
        self.set_price_max(max);
    }

    pub fn price_filtered(&self) -> bool {
        !self.criteria.price_range.is_full_range()
    }

    pub fn set_luxury(&mut self, flag: bool) {
        self.criteria.is_luxury = flag;
    }

    pub fn toggle_luxury(&mut self) {
        self.criteria.is_luxury = !self.criteria.is_luxury;
    }

    pub fn snapshot(&self) -> FilterCriteria {
        self.criteria.clone()
    }

    /// Replaces the draft with previously applied criteria.
    pub fn load(&mut self, mut criteria: FilterCriteria) {
        criteria.price_range = criteria.price_range.normalized();
        self.criteria = criteria;
    }

    /// Resets to empty criteria. The generation bump tells observers to re-fetch.
    pub fn clear(&mut self) {
        self.criteria = FilterCriteria::default();
        self.clear_generation += 1;
    }

    pub fn clear_generation(&self) -> u64 {
        self.clear_generation
    }
}

/// Sub-panels of the filter dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivePanel {
    Budget,
    Bedroom,
    ConstructionStatus,
    Brand,
}

impl ActivePanel {
    pub fn dimension(self) -> Option<FilterDimension> {
        match self {
            ActivePanel::Budget => None,
            ActivePanel::Bedroom => Some(FilterDimension::Bedroom),
            ActivePanel::ConstructionStatus => Some(FilterDimension::ConstructionStatus),
            ActivePanel::Brand => Some(FilterDimension::Brand),
        }
    }
}

/// At most one sub-panel is open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelState {
    active: Option<ActivePanel>,
}

impl PanelState {
    pub fn active(&self) -> Option<ActivePanel> {
        self.active
    }

    pub fn is_open(&self, panel: ActivePanel) -> bool {
        self.active == Some(panel)
    }

    pub fn toggle(&mut self, panel: ActivePanel) {
        self.active = if self.is_open(panel) { None } else { Some(panel) };
    }

    pub fn close(&mut self) {
        self.active = None;
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn toggle_keeps_value_only_for_odd_counts() {
        let mut store = FilterStore::default();
        let sequence = ["Villa", "Apartment", "Villa", "Plot", "Villa", "Plot"];
        for value in sequence {
            store.toggle(FilterDimension::PropertyType, value);
        }
        for value in ["Villa", "Apartment", "Plot"] {
            let count = sequence.iter().filter(|v| **v == value).count();
            assert_eq!(store.contains(FilterDimension::PropertyType, value), count % 2 == 1, "{value}");
        }
    }

    #[test]
    fn toggle_only_touches_its_dimension() {
        let mut store = FilterStore::default();
        store.toggle(FilterDimension::Bedroom, "3 BHK");
        assert!(store.has_selection(FilterDimension::Bedroom));
        assert!(!store.has_selection(FilterDimension::PropertyType));
        assert!(!store.has_selection(FilterDimension::Brand));
    }

    #[test]
    fn min_above_max_is_pulled_back() {
        let mut store = FilterStore::default();
        store.set_price_max(40);
        store.set_price_min(70);
        assert_eq!(store.criteria().price_range, PriceRange { min: 40, max: 40 });
    }

    #[test]
    fn max_below_min_is_pushed_up() {
        let mut store = FilterStore::default();
        store.set_price_min(30);
        store.set_price_max(10);
        assert_eq!(store.criteria().price_range, PriceRange { min: 30, max: 30 });
    }

    #[test]
    fn price_range_stays_in_bounds() {
        let mut store = FilterStore::default();
        store.set_price_range(0, 500);
        assert_eq!(store.criteria().price_range, PriceRange { min: 1, max: 100 });
        assert!(!store.price_filtered());

        store.set_price_range(80, 20);
        let range = store.criteria().price_range;
        assert!(range.min <= range.max);
        assert_eq!(range, PriceRange { min: 80, max: 80 });
    }

    #[test]
    fn load_repairs_inverted_range() {
        let mut store = FilterStore::default();
        let mut criteria = FilterCriteria::default();
        criteria.price_range = PriceRange { min: 90, max: 0 };
        store.load(criteria);
        assert_eq!(store.criteria().price_range, PriceRange { min: 90, max: 90 });
    }

    #[test]
    fn clear_resets_and_bumps_generation() {
        let mut store = FilterStore::default();
        store.toggle(FilterDimension::Brand, "Skyline");
        store.set_luxury(true);
        store.set_price_range(10, 20);
        store.clear();
        assert_eq!(store.snapshot(), FilterCriteria::default());
        assert_eq!(store.clear_generation(), 1);
    }

    #[test]
    fn snapshot_is_detached() {
        let mut store = FilterStore::default();
        store.toggle(FilterDimension::Brand, "Skyline");
        let snap = store.snapshot();
        store.toggle(FilterDimension::Brand, "Skyline");
        assert!(snap.brand_names.contains("Skyline"));
        assert!(!store.has_selection(FilterDimension::Brand));
    }

    #[test]
    fn wire_keys_round_trip() {
        for dimension in FilterDimension::ALL {
            assert_eq!(FilterDimension::from_wire_key(dimension.wire_key()), Some(dimension));
        }
        assert_eq!(FilterDimension::from_wire_key("isLuxury"), None);
    }

    #[test]
    fn only_one_panel_open() {
        let mut panels = PanelState::default();
        panels.toggle(ActivePanel::Budget);
        assert!(panels.is_open(ActivePanel::Budget));
        panels.toggle(ActivePanel::Brand);
        assert_eq!(panels.active(), Some(ActivePanel::Brand));
        panels.toggle(ActivePanel::Brand);
        assert_eq!(panels.active(), None);
    }
}
