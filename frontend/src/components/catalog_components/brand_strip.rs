//! Brand carousel with the selected brand's listings underneath.
//!
//! Both the brand row and the listing pager advance on their own every
//! [`AUTO_ADVANCE_INTERVAL`](common::auto_advance::AUTO_ADVANCE_INTERVAL)
//! once they hold more items than fit. Any move, manual or automatic,
//! restarts the countdown from the new position.

use common::auto_advance::{AutoAdvancePolicy, HOVER_IMAGE_INTERVAL};
use common::carousel::{BRAND_STRIP_VISIBLE, CarouselController, DEFAULT_BRAND_INDEX, DetailPager, ImageCycler, default_selection};
use common::catalog::{BrandRecord, PLACEHOLDER_IMAGE};
use dioxus::prelude::*;

use crate::api::catalog_api::fetch_brands;
use crate::components::catalog_components::listing_card::ListingCard;
use crate::components::catalog_components::pager_buttons::PagerButtons;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::suspend_boundary::SuspendWrapper;
use crate::data_definitions::timers::{after, every, use_timer_slots};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum StripTimer {
    BrandAdvance,
    ListingAdvance,
    HoverImages(u64),
}

#[component]
pub fn BrandStrip() -> Element {
    rsx! {
        div {
            id: "x-brand-strip",
            style: "
                display: flex;
                flex-direction: column;
                gap: 24px;
                width: 100%;
                padding: 32px;
                background: #1C212D;
                border-radius: 20px;
                box-sizing: border-box;
                color: white;
            ",
            h2 { style: "margin: 0px; font-weight: 500;", "Our Brands" }
            SuspendWrapper {
                BrandStripLoader {}
            }
        }
    }
}

#[component]
fn BrandStripLoader() -> Element {
    let brands = use_resource(move || fetch_brands()).suspend()?.cloned();
    match brands {
        Err(e) => rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Ok(brands) => rsx! { BrandStripView { brands } },
    }
}

#[component]
fn BrandStripView(brands: ReadSignal<Vec<BrandRecord>>) -> Element {
    let mut controller = use_signal(|| CarouselController::new(BRAND_STRIP_VISIBLE));
    let mut pager = use_signal(DetailPager::<u64>::default);
    let mut cycler = use_signal(ImageCycler::<u64>::default);
    let timers = use_timer_slots::<StripTimer>();

    use_effect(move || {
        let total = brands.read().len();
        controller.write().set_total(total);
    });

    use_effect(move || {
        let brands = brands.read();
        if pager.peek().primary().is_some() {
            return;
        }
        if let Some(brand) = default_selection(brands.len(), DEFAULT_BRAND_INDEX).and_then(|i| brands.get(i)) {
            pager.write().select_primary(brand.id, brand.listings.len());
        }
    });

    let brand_policy = AutoAdvancePolicy::new(BRAND_STRIP_VISIBLE);
    let brand_timers = timers.clone();
    use_effect(move || {
        let window = controller.read().window();
        let decision = brand_policy.on_position(window.start_index, window.total_count);
        brand_timers.borrow_mut().apply(StripTimer::BrandAdvance, decision, || {
            after(brand_policy.interval, move || controller.write().advance())
        });
    });

    let listing_policy = AutoAdvancePolicy::new(1);
    let listing_timers = timers.clone();
    use_effect(move || {
        let decision = {
            let pager = pager.read();
            listing_policy.on_position(pager.current(), pager.total())
        };
        listing_timers.borrow_mut().apply(StripTimer::ListingAdvance, decision, || {
            after(listing_policy.interval, move || pager.write().advance())
        });
    });

    let visible_brands = use_memo(move || controller.read().visible(&brands.read()).to_vec());
    let selected_brand = use_memo(move || {
        let pager = pager.read();
        let id = pager.primary().copied()?;
        brands.read().iter().find(|b| b.id == id).cloned()
    });
    let current_listing = use_memo(move || {
        let brand = selected_brand()?;
        brand.listings.get(pager.read().current()).cloned()
    });

    let mut hovered = use_signal(|| None::<u64>);
    let hover_start_timers = timers.clone();
    let on_hover_start = use_callback(move |_: ()| {
        let Some(listing) = current_listing() else { return };
        let count = listing.images.len();
        if count < 2 {
            return;
        }
        let id = listing.id;
        hovered.set(Some(id));
        hover_start_timers.borrow_mut().arm(
            StripTimer::HoverImages(id),
            every(HOVER_IMAGE_INTERVAL, move || {
                cycler.write().cycle(id, count);
            }),
        );
    });
    let hover_end_timers = timers.clone();
    let on_hover_end = use_callback(move |_: ()| {
        let Some(id) = hovered.take() else { return };
        hover_end_timers.borrow_mut().disarm(&StripTimer::HoverImages(id));
        cycler.write().forget(&id);
    });

    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; gap: 16px;",
            div {
                style: "
                    display: grid;
                    grid-template-columns: repeat({BRAND_STRIP_VISIBLE}, 1fr);
                    gap: 16px;
                    width: 100%;
                ",
                for brand in visible_brands() {
                    BrandTile {
                        key: "{brand.id}",
                        brand: brand.clone(),
                        selected: pager.read().primary() == Some(&brand.id),
                        on_select: move |(id, total): (u64, usize)| pager.write().select_primary(id, total),
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

        if let Some(brand) = selected_brand() {
            div {
                style: "display: flex; flex-direction: column; align-items: center; gap: 16px;",
                h3 { style: "margin: 0px; font-weight: 400;", "Properties by {brand.name}" }
                if let Some(listing) = current_listing() {
                    div {
                        style: "width: 100%; max-width: 420px; color: black;",
                        ListingCard {
                            key: "{listing.id}",
                            image_index: cycler.read().current(&listing.id),
                            listing: listing.clone(),
                            on_hover_start,
                            on_hover_end,
                        }
                    }
                } else {
                    p { "No properties listed yet." }
                }
                PagerButtons {
                    can_retreat: pager.read().can_retreat(),
                    can_advance: pager.read().can_advance(),
                    on_retreat: move |_| pager.write().retreat(),
                    on_advance: move |_| pager.write().advance(),
                }
            }
        }
    }
}

#[component]
fn BrandTile(brand: BrandRecord, selected: bool, on_select: Callback<(u64, usize)>) -> Element {
    let logo = if brand.logo_url.is_empty() { PLACEHOLDER_IMAGE.to_string() } else { brand.logo_url.clone() };
    let border = if selected { "2px solid #C0392B" } else { "2px solid transparent" };
    let id = brand.id;
    let total = brand.listings.len();

    rsx! {
        button {
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 8px;
                padding: 12px;
                border: {border};
                border-radius: 12px;
                background: rgba(255,255,255,0.05);
                color: white;
                cursor: pointer;
            ",
            onclick: move |_| on_select((id, total)),
            img { src: "{logo}", alt: "{brand.name}", style: "width: 100%; height: 60px; object-fit: contain;" }
            span { style: "font-size: 13px;", "{brand.name}" }
        }
    }
}
