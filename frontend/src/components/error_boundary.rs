//! Error boundaries for page-level and component-level failures.

use dioxus::logger::tracing;
use dioxus::prelude::*;

/// Catches anything a page throws and offers a way back home.
#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                tracing::error!("render failure inside {}: {:?}", boundary_name, err.error());
                rsx! {
                    div {
                        style: "
                            display: flex;
                            flex-direction: column;
                            gap: 16px;
                            margin: 40px;
                            padding: 24px;
                            border: 1px solid red;
                            border-radius: 10px;
                            background: white;
                        ",
                        h1 { style: "color: darkred; font-size: 36px; margin: 0px;", "Something went wrong" }
                        p { style: "color: darkred; margin: 0px;", "Section: {boundary_name}" }
                        pre {
                            style: "color: black; text-wrap: auto; max-height: 300px; overflow-y: auto;",
                            "{err:#?}"
                        }
                        a { href: "/", style: "color: #2563EB; font-size: 18px;", "Back to the home page" }
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(e) => format!("{:#?}", e.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            style: "color: #2563EB; border: 1px solid #2563EB; background: white; padding: 6px 14px; border-radius: 1000px; cursor: pointer;",
                            onclick: move |_| err.clear_errors(),
                            "Try again"
                        }
                    }
                }
            },
            div {
                width: "100%",
                {children}
            }
        }
    }
}

/// Inline error box used where a fetch failed.
#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            width: "100%",
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            justify_content: "center",
            gap: "8px",
            padding: "16px",

            h3 { style: "color: darkred; margin: 0px;", "Could not load this section" }
            pre {
                style: "color: darkred; border: 1px solid red; padding: 10px; border-radius: 5px; text-wrap: auto; max-width: 500px; max-height: 200px; overflow-y: auto;",
                "{error_txt}"
            }
            {children}
        }
    }
}
