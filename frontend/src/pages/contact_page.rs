use dioxus::prelude::*;

use crate::components::catalog_components::contact_form::ContactForm;

#[component]
pub fn ContactPage() -> Element {
    rsx! {
        Title { "Properties - Contact" }
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 20px;
                width: 100%;
                padding: 36px 40px;
                box-sizing: border-box;
            ",
            h1 { style: "font-size: 32px; font-weight: 500; margin: 0px;", "Talk to us" }
            p {
                style: "margin: 0px; color: rgb(75, 87, 112);",
                "Tell us what you are looking for and our team will call you back."
            }
            ContactForm {}
        }
    }
}
