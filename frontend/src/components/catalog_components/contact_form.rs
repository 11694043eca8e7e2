//! Contact form with per-field error messages.

use common::contact::{ContactFormState, ContactSubmission, SubmissionError, SubmissionOutcome};
use dioxus::logger::tracing;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_communication_icons::MdPhone};

use crate::api::catalog_api::submit_contact;

const INTENTS: [&str; 3] = ["Buy", "Sell", "Rent"];

#[component]
pub fn ContactForm(#[props(default)] listing_id: Option<u64>) -> Element {
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut i_want_to = use_signal(String::new);
    let mut notes = use_signal(String::new);
    let mut form_state = use_signal(ContactFormState::default);

    let field_error = move |field: &str| -> Option<String> {
        form_state.read().error().and_then(|e| e.for_field(field)).map(|m| m.to_string())
    };

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        if form_state.read().is_submitting() {
            return;
        }
        let submission = ContactSubmission {
            first_name: first_name.read().trim().to_string(),
            last_name: last_name.read().trim().to_string(),
            // anything that is not a number is treated as missing
            phone: phone.read().trim().parse::<u64>().unwrap_or(0),
            i_want_to: i_want_to.read().clone(),
            notes: notes.read().trim().to_string(),
            listing_id,
        };
        if let Err(error) = submission.validate() {
            form_state.write().finish(SubmissionOutcome::Rejected(error));
            return;
        }
        form_state.write().begin();
        spawn(async move {
            let outcome = match submit_contact(submission).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::error!("contact submission failed: {}", e);
                    SubmissionOutcome::Rejected(SubmissionError::generic())
                }
            };
            if matches!(outcome, SubmissionOutcome::Accepted(_)) {
                first_name.set(String::new());
                last_name.set(String::new());
                phone.set(String::new());
                i_want_to.set(String::new());
                notes.set(String::new());
            }
            form_state.write().finish(outcome);
        });
    };

    let general_error = form_state.read().error().map(|e| e.message.clone());
    let success = form_state.read().success_message().map(|m| m.to_string());
    let submitting = form_state.read().is_submitting();

    rsx! {
        form {
            id: "x-contact-form",
            style: "
                display: flex;
                flex-direction: column;
                gap: 12px;
                width: 100%;
                max-width: 560px;
                padding: 24px;
                background: white;
                border-radius: 16px;
                box-shadow: 0 0 10px 0 rgba(0, 0, 0, 0.1);
                box-sizing: border-box;
            ",
            onsubmit: on_submit,

            h2 {
                style: "display: flex; align-items: center; gap: 8px; margin: 0px; font-weight: 500;",
                Icon { icon: MdPhone, style: "width: 24px; height: 24px;" }
                "Get in touch"
            }

            div {
                style: "display: flex; flex-direction: row; gap: 12px;",
                FormField {
                    label: "First name",
                    error: field_error("first_name"),
                    input {
                        name: "first_name",
                        value: "{first_name}",
                        oninput: move |e| first_name.set(e.value()),
                        style: INPUT_STYLE,
                    }
                }
                FormField {
                    label: "Last name",
                    error: field_error("last_name"),
                    input {
                        name: "last_name",
                        value: "{last_name}",
                        oninput: move |e| last_name.set(e.value()),
                        style: INPUT_STYLE,
                    }
                }
            }
            FormField {
                label: "Phone",
                error: field_error("phone"),
                input {
                    name: "phone",
                    r#type: "tel",
                    inputmode: "numeric",
                    value: "{phone}",
                    oninput: move |e| phone.set(e.value()),
                    style: INPUT_STYLE,
                }
            }
            FormField {
                label: "I want to",
                error: field_error("I_want_to"),
                select {
                    name: "I_want_to",
                    value: "{i_want_to}",
                    onchange: move |e| i_want_to.set(e.value()),
                    style: INPUT_STYLE,
                    option { value: "", disabled: true, selected: i_want_to.read().is_empty(), "Choose one" }
                    for intent in INTENTS {
                        option { key: "{intent}", value: "{intent}", "{intent}" }
                    }
                }
            }
            FormField {
                label: "Notes",
                error: field_error("Notes"),
                textarea {
                    name: "Notes",
                    value: "{notes}",
                    oninput: move |e| notes.set(e.value()),
                    style: "{INPUT_STYLE} min-height: 80px;",
                }
            }

            if let Some(message) = success {
                p { style: "color: green; margin: 0px;", "{message}" }
            } else if let Some(message) = general_error {
                p { style: "color: darkred; margin: 0px;", "{message}" }
            }

            button {
                r#type: "submit",
                disabled: submitting,
                style: "
                    padding: 10px 20px;
                    border-radius: 1000px;
                    border: none;
                    background: #C0392B;
                    color: white;
                    cursor: pointer;
                ",
                if submitting { "Sending..." } else { "Submit" }
            }
        }
    }
}

const INPUT_STYLE: &str = "width: 100%; padding: 8px; border: 1px solid #DCDCEB; border-radius: 8px; box-sizing: border-box;";

#[component]
fn FormField(label: String, #[props(!optional)] error: Option<String>, children: Element) -> Element {
    rsx! {
        label {
            style: "display: flex; flex-direction: column; gap: 4px; flex-grow: 1; font-size: 14px; color: rgb(75, 87, 112);",
            "{label}"
            {children}
            if let Some(error) = error {
                span { style: "color: darkred; font-size: 12px;", "{error}" }
            }
        }
    }
}
