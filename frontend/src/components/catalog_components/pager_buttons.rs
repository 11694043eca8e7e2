//! Previous / next arrows shared by the carousels.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdArrowBack, MdArrowForward}};

/// Each arrow is only rendered while its move is possible.
#[component]
pub fn PagerButtons(can_retreat: bool, can_advance: bool, on_retreat: Callback<()>, on_advance: Callback<()>) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: center;
                gap: 16px;
            ",
            if can_retreat {
                NavigationButton {
                    label: "Previous".to_string(),
                    onclick: move |_| on_retreat(()),
                    Icon { icon: MdArrowBack, style: "width: 20px; height: 20px;" }
                }
            }
            if can_advance {
                NavigationButton {
                    label: "Next".to_string(),
                    onclick: move |_| on_advance(()),
                    Icon { icon: MdArrowForward, style: "width: 20px; height: 20px;" }
                }
            }
        }
    }
}

#[component]
fn NavigationButton(label: String, onclick: EventHandler<MouseEvent>, children: Element) -> Element {
    rsx! {
        button {
            title: "{label}",
            aria_label: "{label}",
            style: "
                display: flex;
                align-items: center;
                justify-content: center;
                width: 40px;
                height: 40px;
                border-radius: 50%;
                border: 1px solid rgba(0,0,0,0.2);
                background: white;
                cursor: pointer;
            ",
            onclick: move |e| onclick.call(e),
            {children}
        }
    }
}
