//! Filter dropdown: property type checkboxes, sub-panels, apply and clear.

use common::filter::{ActivePanel, FilterDimension, PRICE_CEILING, PRICE_FLOOR};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_navigation_icons::{MdArrowDropDown, MdClose}, md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank}}};

use crate::api::catalog_api::fetch_brands;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::suspend_boundary::SuspendWrapper;
use crate::data_definitions::catalog_state::CatalogState;
use crate::data_definitions::filter_options::{PROPERTY_TYPES, static_options};
use crate::routes::Route;

const PANELS: [ActivePanel; 4] = [ActivePanel::Budget, ActivePanel::Bedroom, ActivePanel::ConstructionStatus, ActivePanel::Brand];

fn panel_label(panel: ActivePanel) -> &'static str {
    match panel.dimension() {
        Some(dimension) => dimension.display_name(),
        None => "Budget",
    }
}

#[component]
pub fn FilterPanel() -> Element {
    let state = use_context::<CatalogState>();
    let mut draft = state.draft;
    let is_luxury = use_memo(move || draft.read().criteria().is_luxury);
    let luxury_border = use_memo(move || if is_luxury() { "#C0392B" } else { "#8F90A6" });
    let panel_open = use_memo(move || state.panels.read().active().is_some());

    rsx! {
        div {
            id: "x-filter-panel",
            style: "
                position: relative;
                display: flex;
                flex-direction: column;
                gap: 12px;
                width: 100%;
                padding: 16px 20px;
                background: white;
                border-radius: 16px;
                box-shadow: 0 0 10px 0 rgba(0, 0, 0, 0.1);
                box-sizing: border-box;
            ",

            if panel_open() {
                div {
                    style: "
                        position: fixed;
                        top: 0px;
                        left: 0px;
                        z-index: 10;
                        width: 100vw;
                        height: 100vh;
                        background-color: rgba(0,0,0,0.05);
                    ",
                    onclick: move |_| state.revert_draft.call(()),
                }
            }

            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 16px; z-index: 11;",
                h3 { style: "margin: 0px; font-weight: 500; flex-grow: 1;", "{FilterDimension::PropertyType.display_name()}" }
                button {
                    style: "
                        display: flex;
                        align-items: center;
                        gap: 4px;
                        padding: 4px 12px;
                        border-radius: 1000px;
                        border: 1px solid {luxury_border()};
                        background: white;
                        cursor: pointer;
                    ",
                    onclick: move |_| draft.write().toggle_luxury(),
                    "Luxury"
                    if is_luxury() {
                        Icon { icon: MdClose, style: "width: 16px; height: 16px;" }
                    }
                }
                button {
                    style: "color: #2563EB; background: none; border: none; cursor: pointer;",
                    onclick: move |_| state.apply_filters.call(()),
                    "Apply Filter"
                }
                button {
                    style: "color: #C0392B; background: none; border: none; cursor: pointer;",
                    onclick: move |_| state.clear_filters.call(()),
                    "Clear"
                }
            }

            div {
                style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 8px; font-size: 14px; color: #8F90A6;",
                for option in PROPERTY_TYPES.iter().copied() {
                    FilterCheckbox {
                        key: "{option.value}",
                        dimension: FilterDimension::PropertyType,
                        value: option.value.to_string(),
                        text: option.text.to_string(),
                    }
                }
            }

            p {
                style: "margin: 0px; padding-bottom: 12px; border-bottom: 2px solid #DCDCEB;",
                "For any special requirement? "
                span {
                    style: "color: #C0392B;",
                    Link { to: Route::ContactPage {}, "Contact Us" }
                }
            }

            div {
                style: "display: flex; flex-direction: row; gap: 8px; flex-wrap: wrap; z-index: 11;",
                for panel in PANELS {
                    PanelButton { key: "{panel:?}", panel }
                }
            }

            if let Some(panel) = state.panels.read().active() {
                div {
                    style: "z-index: 11; color: #8F90A6;",
                    h3 { style: "color: black; font-weight: 600;", "{panel_label(panel)}" }
                    {
                        match panel.dimension() {
                            None => rsx! { BudgetSliders {} },
                            Some(FilterDimension::Brand) => rsx! { SuspendWrapper { BrandChips {} } },
                            Some(dimension) => rsx! { StaticChips { dimension } },
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PanelButton(panel: ActivePanel) -> Element {
    let state = use_context::<CatalogState>();
    let mut panels = state.panels;
    let is_open = use_memo(move || panels.read().is_open(panel));
    let is_filtered = use_memo(move || {
        let draft = state.draft.read();
        match panel.dimension() {
            Some(dimension) => draft.has_selection(dimension),
            None => draft.price_filtered(),
        }
    });
    let border_color = use_memo(move || if is_filtered() { "rgba(192,57,43,0.9)" } else { "rgba(0,0,0,0.3)" });
    let background = use_memo(move || if is_open() { "#F5F6F8" } else { "white" });

    rsx! {
        button {
            onclick: move |_| panels.write().toggle(panel),
            style: "
                cursor: pointer;
                display: flex;
                align-items: center;
                gap: 6px;
                border: 2px solid {border_color()};
                border-radius: 1000px;
                background-color: {background()};
                padding: 6px 12px;
                font-size: 14px;
                white-space: nowrap;
            ",
            "{panel_label(panel)}"
            Icon { icon: MdArrowDropDown, style: "width: 20px; height: 20px;" }
        }
    }
}

#[component]
fn FilterCheckbox(dimension: FilterDimension, value: String, text: String) -> Element {
    let state = use_context::<CatalogState>();
    let mut draft = state.draft;
    let checked_value = value.clone();
    let is_checked = use_memo(move || draft.read().contains(dimension, &checked_value));

    rsx! {
        div {
            style: "display: flex; flex-direction: row; align-items: center; gap: 8px; cursor: pointer;",
            onclick: move |_| draft.write().toggle(dimension, value.clone()),
            if is_checked() {
                Icon { icon: MdCheckBox, style: "width: 20px; height: 20px; color: #C0392B;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 20px; height: 20px;" }
            }
            span { "{text}" }
        }
    }
}

#[component]
fn FilterChip(dimension: FilterDimension, value: String, text: String) -> Element {
    let state = use_context::<CatalogState>();
    let mut draft = state.draft;
    let checked_value = value.clone();
    let is_selected = use_memo(move || draft.read().contains(dimension, &checked_value));
    let border_color = use_memo(move || if is_selected() { "#C0392B" } else { "#8F90A6" });
    let background = use_memo(move || if is_selected() { "rgba(192,57,43,0.1)" } else { "white" });

    rsx! {
        button {
            style: "
                display: flex;
                align-items: center;
                gap: 6px;
                padding: 6px 12px;
                border-radius: 1000px;
                border: 1px solid {border_color()};
                background: {background()};
                cursor: pointer;
                font-size: 14px;
            ",
            onclick: move |_| draft.write().toggle(dimension, value.clone()),
            if is_selected() {
                Icon { icon: MdClose, style: "width: 16px; height: 16px;" }
            }
            "{text}"
        }
    }
}

#[component]
fn StaticChips(dimension: FilterDimension) -> Element {
    let options = static_options(dimension).unwrap_or_default();
    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 8px;",
            for option in options.iter().copied() {
                FilterChip {
                    key: "{option.value}",
                    dimension,
                    value: option.value.to_string(),
                    text: option.text.to_string(),
                }
            }
        }
    }
}

#[component]
fn BrandChips() -> Element {
    let brands = use_resource(move || fetch_brands()).suspend()?.cloned();
    let brands = match brands {
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Ok(b) => b,
    };
    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 8px;",
            for brand in brands {
                FilterChip {
                    key: "{brand.id}",
                    dimension: FilterDimension::Brand,
                    value: brand.name.clone(),
                    text: brand.name.clone(),
                }
            }
        }
    }
}

#[component]
fn BudgetSliders() -> Element {
    let state = use_context::<CatalogState>();
    let mut draft = state.draft;
    let range = use_memo(move || draft.read().criteria().price_range);

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 8px; max-width: 400px;",
            span { "₹{range().min} Cr - ₹{range().max} Cr" }
            label {
                "Min "
                input {
                    r#type: "range",
                    min: "{PRICE_FLOOR}",
                    max: "{PRICE_CEILING}",
                    value: "{range().min}",
                    oninput: move |e| {
                        if let Ok(v) = e.value().parse::<u32>() {
                            draft.write().set_price_min(v);
                        }
                    },
                }
            }
            label {
                "Max "
                input {
                    r#type: "range",
                    min: "{PRICE_FLOOR}",
                    max: "{PRICE_CEILING}",
                    value: "{range().max}",
                    oninput: move |e| {
                        if let Ok(v) = e.value().parse::<u32>() {
                            draft.write().set_price_max(v);
                        }
                    },
                }
            }
        }
    }
}
