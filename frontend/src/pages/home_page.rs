use dioxus::prelude::*;

use crate::components::catalog_components::brand_strip::BrandStrip;
use crate::components::catalog_components::contact_form::ContactForm;
use crate::components::catalog_components::luxury_slider::LuxurySlider;
use crate::components::catalog_components::testimonial_strip::TestimonialStrip;
use crate::routes::Route;

/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Properties - Home" }
        div {
            id: "x-home-container",
            style: "
                display: flex;
                flex-direction: column;
                gap: 40px;
                width: 100%;
                padding: 36px 40px;
                box-sizing: border-box;
            ",

            LuxurySlider {}

            div {
                style: "display: flex; flex-direction: row; gap: 20px; flex-wrap: wrap;",
                BrowseCard {
                    to: Route::PropertiesPage {},
                    title: "Browse properties",
                    text: "Filter by type, budget, bedrooms and builder.",
                }
                BrowseCard {
                    to: Route::LuxuryPage {},
                    title: "Luxury collection",
                    text: "Hand-picked premium homes.",
                }
            }

            BrandStrip {}
            TestimonialStrip {}

            div {
                style: "display: flex; justify-content: center;",
                ContactForm {}
            }
        }
    }
}

#[component]
fn BrowseCard(to: Route, title: String, text: String) -> Element {
    rsx! {
        Link {
            to,
            div {
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 8px;
                    min-width: 280px;
                    padding: 24px;
                    background: white;
                    border-radius: 16px;
                    box-shadow: 0 0 10px 0 rgba(0, 0, 0, 0.1);
                    color: black;
                ",
                h3 { style: "margin: 0px; font-weight: 500;", "{title}" }
                p { style: "margin: 0px; color: rgb(75, 87, 112);", "{text}" }
            }
        }
    }
}
