//! Choices offered by the filter panel. Brand choices come from the CMS.

use common::filter::FilterDimension;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterOption {
    pub text: &'static str,
    pub value: &'static str,
}

const fn opt(text: &'static str, value: &'static str) -> FilterOption {
    FilterOption { text, value }
}

pub const PROPERTY_TYPES: &[FilterOption] = &[
    opt("Apartment", "Apartment"),
    opt("Independent House", "Independent House"),
    opt("Villa", "Villa"),
    opt("Penthouse", "Penthouse"),
    opt("Plot", "Plot"),
    opt("Commercial Office", "Commercial Office"),
];

pub const BEDROOMS: &[FilterOption] = &[
    opt("1 BHK", "1"),
    opt("2 BHK", "2"),
    opt("3 BHK", "3"),
    opt("4 BHK", "4"),
    opt("5+ BHK", "5+"),
];

pub const CONSTRUCTION_STATUSES: &[FilterOption] = &[
    opt("Ready to move", "Ready to move"),
    opt("Under construction", "Under construction"),
    opt("New launch", "New launch"),
];

/// Static choices for a dimension; `None` for brands.
pub fn static_options(dimension: FilterDimension) -> Option<&'static [FilterOption]> {
    match dimension {
        FilterDimension::PropertyType => Some(PROPERTY_TYPES),
        FilterDimension::Bedroom => Some(BEDROOMS),
        FilterDimension::ConstructionStatus => Some(CONSTRUCTION_STATUSES),
        FilterDimension::Brand => None,
    }
}
