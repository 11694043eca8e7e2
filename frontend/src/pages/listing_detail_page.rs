use common::carousel::CarouselController;
use common::catalog::{ListingRecord, PLACEHOLDER_IMAGE};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_communication_icons::MdLocationOn};

use crate::api::catalog_api::fetch_listing;
use crate::components::catalog_components::contact_form::ContactForm;
use crate::components::catalog_components::pager_buttons::PagerButtons;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::suspend_boundary::SuspendWrapper;

/// Single listing with its gallery and an enquiry form.
#[component]
pub fn ListingDetailPage(listing_id: u64) -> Element {
    rsx! {
        Title { "Properties - Listing {listing_id}" }
        div {
            id: "x-detail-container",
            style: "
                display: flex;
                flex-direction: column;
                gap: 32px;
                width: 100%;
                padding: 36px 40px;
                box-sizing: border-box;
            ",
            SuspendWrapper {
                ListingDetail { listing_id }
            }
            div {
                style: "display: flex; justify-content: center;",
                ContactForm { listing_id }
            }
        }
    }
}

#[component]
fn ListingDetail(listing_id: ReadSignal<u64>) -> Element {
    let listing = use_resource(move || fetch_listing(listing_id())).suspend()?.cloned();
    match listing {
        Err(e) => rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Ok(listing) => rsx! { ListingDetailView { listing } },
    }
}

#[component]
fn ListingDetailView(listing: ReadSignal<ListingRecord>) -> Element {
    let mut gallery = use_signal(|| CarouselController::new(1));
    use_effect(move || {
        let total = listing.read().images.len();
        gallery.write().set_total(total);
    });
    let image = use_memo(move || {
        let listing = listing.read();
        gallery
            .read()
            .visible(&listing.images)
            .first()
            .cloned()
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())
    });
    let record = listing.read().clone();

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                gap: 32px;
                background: white;
                border-radius: 16px;
                padding: 24px;
            ",
            div {
                style: "display: flex; flex-direction: column; gap: 12px; flex: 1 1 480px;",
                img {
                    src: "{image}",
                    alt: "{record.location}",
                    style: "width: 100%; max-height: 480px; object-fit: cover; border-radius: 12px;",
                }
                PagerButtons {
                    can_retreat: gallery.read().can_retreat(),
                    can_advance: gallery.read().can_advance(),
                    on_retreat: move |_| gallery.write().retreat(),
                    on_advance: move |_| gallery.write().advance(),
                }
            }
            div {
                style: "display: flex; flex-direction: column; gap: 12px; flex: 1 1 320px;",
                h1 {
                    style: "display: flex; align-items: center; gap: 6px; margin: 0px; font-weight: 500;",
                    Icon { icon: MdLocationOn, style: "width: 28px; height: 28px; color: #C0392B;" }
                    "{record.location}"
                }
                if let Some(brand_name) = record.brand_name.clone() {
                    span { style: "color: #8F90A6;", "by {brand_name}" }
                }
                if record.is_luxury {
                    span {
                        style: "width: fit-content; padding: 2px 10px; border-radius: 1000px; border: 1px solid #C0392B; color: #C0392B; font-size: 12px;",
                        "Luxury"
                    }
                }
                p { style: "color: rgb(75, 87, 112); white-space: pre-line;", "{record.description}" }
                ul {
                    for feature in record.features.clone() {
                        li { key: "{feature.id}", "{feature.label}" }
                    }
                }
            }
        }
    }
}
