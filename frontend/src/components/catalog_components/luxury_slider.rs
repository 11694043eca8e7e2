//! Full-width slider over the luxury listings, one slide at a time.
//! Both arrows stay visible and wrap around at the ends.

use common::carousel::CarouselController;
use common::catalog::LuxurySlide;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_communication_icons::MdLocationOn};

use crate::api::catalog_api::fetch_luxury_listings;
use crate::components::catalog_components::pager_buttons::PagerButtons;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::suspend_boundary::SuspendWrapper;
use crate::routes::Route;

#[component]
pub fn LuxurySlider() -> Element {
    rsx! {
        div {
            id: "x-luxury-slider",
            style: "width: 100%; min-height: 420px; border-radius: 20px; overflow: hidden;",
            SuspendWrapper {
                LuxurySliderLoader {}
            }
        }
    }
}

#[component]
fn LuxurySliderLoader() -> Element {
    let listings = use_resource(move || fetch_luxury_listings()).suspend()?.cloned();
    let listings = match listings {
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Ok(l) => l,
    };
    let slides = listings.iter().map(LuxurySlide::from).collect::<Vec<_>>();
    if slides.is_empty() {
        return rsx! {};
    }
    rsx! { LuxurySliderView { slides } }
}

#[component]
fn LuxurySliderView(slides: ReadSignal<Vec<LuxurySlide>>) -> Element {
    let mut controller = use_signal(|| CarouselController::new(1));
    use_effect(move || {
        let total = slides.read().len();
        controller.write().set_total(total);
    });
    let slide = use_memo(move || controller.read().visible(&slides.read()).first().cloned());

    let Some(slide) = slide() else {
        return rsx! {};
    };
    let listing_id = slide.id;

    rsx! {
        div {
            style: "
                position: relative;
                display: flex;
                flex-direction: column;
                justify-content: flex-end;
                gap: 12px;
                width: 100%;
                height: 420px;
                padding: 32px;
                box-sizing: border-box;
                color: white;
                background-image: linear-gradient(to top, rgba(0,0,0,0.7), rgba(0,0,0,0)), url('{slide.image_url}');
                background-size: cover;
                background-position: center;
            ",
            h2 { style: "margin: 0px; font-size: 32px; font-weight: 500;", "{slide.title}" }
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 4px;",
                Icon { icon: MdLocationOn, style: "width: 18px; height: 18px;" }
                "{slide.location}"
            }
            p { style: "margin: 0px; max-width: 600px; max-height: 72px; overflow: hidden;", "{slide.description}" }
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 16px;",
                button {
                    style: "padding: 8px 20px; border-radius: 1000px; border: 1px solid white; background: none; color: white; cursor: pointer;",
                    onclick: move |_| {
                        navigator().push(Route::ListingDetailPage { listing_id });
                    },
                    "View Property"
                }
                div { style: "flex-grow: 1;" }
                PagerButtons {
                    can_retreat: controller.read().can_cycle(),
                    can_advance: controller.read().can_cycle(),
                    on_retreat: move |_| controller.write().retreat(),
                    on_advance: move |_| controller.write().advance(),
                }
            }
        }
    }
}
