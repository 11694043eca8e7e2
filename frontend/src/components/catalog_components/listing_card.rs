//! Property card used by the result grid and the brand strip.

use common::catalog::{ListingRecord, PLACEHOLDER_IMAGE};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_communication_icons::MdLocationOn};

use crate::routes::Route;

#[component]
pub fn ListingCard(
    listing: ReadSignal<ListingRecord>,
    #[props(default)]
    image_index: usize,
    #[props(default)]
    on_hover_start: Option<Callback<()>>,
    #[props(default)]
    on_hover_end: Option<Callback<()>>,
) -> Element {
    // out of range falls back to the cover
    let image = {
        let listing = listing.read();
        listing
            .images
            .get(image_index)
            .map(|s| s.as_str())
            .or(listing.cover_image())
            .unwrap_or(PLACEHOLDER_IMAGE)
            .to_string()
    };
    let listing_id = listing.read().id;
    let location = listing.read().location.clone();
    let description = listing.read().description.clone();
    let brand_name = listing.read().brand_name.clone();
    let features = listing.read().features.clone();

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 8px;
                width: 100%;
                min-width: 220px;
                background: white;
                border: 1px solid rgba(0,0,0,0.1);
                border-radius: 12px;
                overflow: hidden;
                cursor: pointer;
            ",
            onmouseenter: move |_| {
                if let Some(cb) = on_hover_start {
                    cb(());
                }
            },
            onmouseleave: move |_| {
                if let Some(cb) = on_hover_end {
                    cb(());
                }
            },
            onclick: move |_| {
                navigator().push(Route::ListingDetailPage { listing_id });
            },

            img {
                src: "{image}",
                alt: "{location}",
                style: "width: 100%; height: 180px; object-fit: cover;",
            }
            div {
                style: "padding: 0px 12px 12px 12px; display: flex; flex-direction: column; gap: 6px;",
                div {
                    style: "display: flex; flex-direction: row; align-items: center; gap: 4px; font-weight: 500;",
                    Icon { icon: MdLocationOn, style: "width: 16px; height: 16px; color: #C0392B;" }
                    "{location}"
                }
                if let Some(brand_name) = brand_name {
                    span { style: "font-size: 12px; color: #8F90A6;", "{brand_name}" }
                }
                p {
                    style: "
                        font-size: 13px;
                        color: rgb(75, 87, 112);
                        margin: 0px;
                        max-height: 54px;
                        overflow: hidden;
                    ",
                    "{description}"
                }
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 4px;",
                    for feature in features {
                        span {
                            key: "{feature.id}",
                            style: "font-size: 11px; padding: 2px 8px; border-radius: 10px; background: #F5F6F8;",
                            "{feature.label}"
                        }
                    }
                }
            }
        }
    }
}
