//! Result grid for the applied filters.

use common::carousel::CarouselController;
use common::executor::QueryStatus;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdClose};

use crate::components::catalog_components::listing_card::ListingCard;
use crate::components::catalog_components::pager_buttons::PagerButtons;
use crate::components::suspend_boundary::LoadingIndicator;
use crate::data_definitions::catalog_state::CatalogState;

const RESULTS_VISIBLE: usize = 6;

#[component]
pub fn ListingGrid() -> Element {
    let state = use_context::<CatalogState>();
    let executor = state.executor;
    let status = use_memo(move || executor.read().status());
    let error = use_memo(move || {
        state.query_error.read().clone().or_else(|| executor.read().error().map(|e| e.to_string()))
    });
    let results = use_memo(move || executor.read().results().to_vec());
    let generation = use_memo(move || executor.read().window_reset_generation());

    let mut controller = use_signal(|| CarouselController::new(RESULTS_VISIBLE));
    use_effect(move || {
        let _ = generation();
        let total = results.read().len();
        let mut controller = controller.write();
        controller.set_total(total);
        controller.reset();
    });

    let visible = use_memo(move || controller.read().visible(&results.read()).to_vec());
    let can_retreat = use_memo(move || controller.read().can_retreat());
    let can_advance = use_memo(move || controller.read().can_advance());

    rsx! {
        div {
            id: "x-listing-grid",
            style: "
                display: flex;
                flex-direction: column;
                gap: 16px;
                width: 100%;
            ",

            if let Some(error) = error() {
                div {
                    style: "
                        display: flex;
                        flex-direction: row;
                        align-items: center;
                        gap: 10px;
                        color: darkred;
                        border: 1px solid red;
                        border-radius: 5px;
                        padding: 10px;
                    ",
                    span { style: "flex-grow: 1;", "{error}" }
                    button {
                        style: "background: none; border: none; cursor: pointer;",
                        title: "Dismiss",
                        onclick: move |_| state.dismiss_error.call(()),
                        Icon { icon: MdClose, style: "width: 18px; height: 18px;" }
                    }
                }
            }

            if status() == QueryStatus::Loading {
                LoadingIndicator {}
            }

            if executor.read().is_empty_result() {
                div {
                    style: "font-size: 20px; font-weight: 300; color: rgb(75, 87, 112); padding: 20px;",
                    "No properties match these filters."
                }
            }

            div {
                style: "
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
                    gap: 20px;
                ",
                for listing in visible() {
                    ListingCard { key: "{listing.id}", listing }
                }
            }

            PagerButtons {
                can_retreat: can_retreat(),
                can_advance: can_advance(),
                on_retreat: move |_| controller.write().retreat(),
                on_advance: move |_| controller.write().advance(),
            }
        }
    }
}
