use dioxus::prelude::*;

use crate::components::error_boundary::ComponentErrorBoundary;

/// Suspense plus a component error boundary around CMS-backed sections.
#[component]
pub fn SuspendWrapper(children: Element) -> Element {
    rsx! {
        SuspenseBoundary {
            fallback: |_s: SuspenseContext| rsx! {
                div {
                    width: "100%",
                    display: "flex",
                    align_items: "center",
                    justify_content: "center",
                    LoadingIndicator {}
                }
            },
            ComponentErrorBoundary {
                children
            }
        }
    }
}

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            style: "color: rgb(75, 87, 112); font-size: 18px; font-weight: 300; padding: 16px;",
            "Loading..."
        }
    }
}
