//! Filterable listing pages.

use common::filter::FilterCriteria;
use dioxus::prelude::*;

use crate::components::catalog_components::filter_panel::FilterPanel;
use crate::components::catalog_components::listing_grid::ListingGrid;
use crate::data_definitions::catalog_state::use_catalog_state_provider;

#[component]
pub fn PropertiesPage() -> Element {
    rsx! {
        Title { "Properties - Buy" }
        CatalogRootComponent { initial: FilterCriteria::default() }
    }
}

/// Same catalog with the luxury flag preselected.
#[component]
pub fn LuxuryPage() -> Element {
    rsx! {
        Title { "Properties - Luxury" }
        CatalogRootComponent { initial: FilterCriteria::luxury() }
    }
}

#[component]
fn CatalogRootComponent(initial: FilterCriteria) -> Element {
    use_catalog_state_provider(initial);

    rsx! {
        div {
            id: "x-catalog-container",
            style: "
                display: flex;
                flex-direction: column;
                gap: 24px;
                width: 100%;
                padding: 36px 40px;
                box-sizing: border-box;
            ",
            FilterPanel {}
            ListingGrid {}
        }
    }
}
