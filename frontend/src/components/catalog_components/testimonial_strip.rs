//! "People trust us" video strip, three at a time.

use common::carousel::{CarouselController, TESTIMONIAL_STRIP_VISIBLE};
use common::catalog::TestimonialRecord;
use dioxus::prelude::*;

use crate::api::catalog_api::fetch_testimonials;
use crate::components::catalog_components::pager_buttons::PagerButtons;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::suspend_boundary::SuspendWrapper;

#[component]
pub fn TestimonialStrip() -> Element {
    rsx! {
        div {
            id: "x-testimonial-strip",
            style: "display: flex; flex-direction: column; gap: 20px; width: 100%;",
            h2 { style: "margin: 0px; font-weight: 500; text-align: center;", "People Trust Us" }
            SuspendWrapper {
                TestimonialLoader {}
            }
        }
    }
}

#[component]
fn TestimonialLoader() -> Element {
    let testimonials = use_resource(move || fetch_testimonials()).suspend()?.cloned();
    match testimonials {
        Err(e) => rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Ok(testimonials) => rsx! { TestimonialView { testimonials } },
    }
}

#[component]
fn TestimonialView(testimonials: ReadSignal<Vec<TestimonialRecord>>) -> Element {
    let mut controller = use_signal(|| CarouselController::new(TESTIMONIAL_STRIP_VISIBLE));
    // only one video plays at a time
    let mut playing = use_signal(|| None::<u64>);
    use_effect(move || {
        let total = testimonials.read().len();
        controller.write().set_total(total);
    });
    let visible = use_memo(move || controller.read().visible(&testimonials.read()).to_vec());

    rsx! {
        div {
            style: "
                display: grid;
                grid-template-columns: repeat({TESTIMONIAL_STRIP_VISIBLE}, 1fr);
                gap: 20px;
                width: 100%;
            ",
            for testimonial in visible() {
                TestimonialTile {
                    key: "{testimonial.id}",
                    is_playing: playing() == Some(testimonial.id),
                    on_toggle: move |id: u64| {
                        let next = if playing() == Some(id) { None } else { Some(id) };
                        playing.set(next);
                    },
                    testimonial,
                }
            }
        }
        PagerButtons {
            can_retreat: controller.read().can_retreat(),
            can_advance: controller.read().can_advance(),
            on_retreat: move |_| controller.write().retreat(),
            on_advance: move |_| controller.write().advance(),
        }
    }
}

#[component]
fn TestimonialTile(testimonial: TestimonialRecord, is_playing: bool, on_toggle: Callback<u64>) -> Element {
    let id = testimonial.id;
    rsx! {
        div {
            style: "
                position: relative;
                border-radius: 16px;
                overflow: hidden;
                background: black;
                cursor: pointer;
            ",
            onclick: move |_| on_toggle(id),
            // separate branches so a tile that stops playing gets a fresh element
            if is_playing {
                video {
                    src: "{testimonial.video_url}",
                    autoplay: true,
                    controls: true,
                    playsinline: true,
                    style: "width: 100%; height: 320px; object-fit: cover;",
                }
            } else {
                video {
                    src: "{testimonial.video_url}",
                    preload: "metadata",
                    playsinline: true,
                    style: "width: 100%; height: 320px; object-fit: cover;",
                }
            }
            div {
                style: "
                    position: absolute;
                    bottom: 12px;
                    left: 12px;
                    color: white;
                    display: flex;
                    flex-direction: column;
                ",
                span { style: "font-weight: 500;", "{testimonial.title}" }
                span { style: "font-size: 12px;", "{testimonial.designation}" }
            }
        }
    }
}
