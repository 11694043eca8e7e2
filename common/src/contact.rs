//! Contact form submission models and form lifecycle.

use serde::{Deserialize, Serialize};

pub const SUBMISSION_THANK_YOU: &str = "Thank you for contacting us. We will get back to you soon!";
pub const GENERIC_SUBMISSION_FAILURE: &str = "Failed to submit contact form";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ContactSubmission {
    pub first_name: String,
    pub last_name: String,
    pub phone: u64,
    #[serde(rename = "I_want_to")]
    pub i_want_to: String,
    #[serde(rename = "Notes")]
    pub notes: String,
    #[serde(rename = "listing_Id", skip_serializing_if = "Option::is_none", default)]
    pub listing_id: Option<u64>,
}

impl ContactSubmission {
    /// Required-field check run before anything is sent.
    pub fn validate(&self) -> Result<(), SubmissionError> {
        let mut field_errors = Vec::new();
        if self.first_name.trim().is_empty() {
            field_errors.push(FieldError::new("first_name", "First name is required"));
        }
        if self.last_name.trim().is_empty() {
            field_errors.push(FieldError::new("last_name", "Last name is required"));
        }
        if self.phone == 0 {
            field_errors.push(FieldError::new("phone", "Phone number is required"));
        }
        if self.i_want_to.trim().is_empty() {
            field_errors.push(FieldError::new("I_want_to", "Please tell us what you want to do"));
        }
        if field_errors.is_empty() {
            Ok(())
        } else {
            Err(SubmissionError { message: field_errors[0].message.clone(), field_errors })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Wire name of the offending field.
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionError {
    pub message: String,
    pub field_errors: Vec<FieldError>,
}

impl SubmissionError {
    pub fn generic() -> Self {
        Self { message: GENERIC_SUBMISSION_FAILURE.to_string(), field_errors: vec![] }
    }

    pub fn for_field(&self, field: &str) -> Option<&str> {
        self.field_errors.iter().find(|e| e.field == field).map(|e| e.message.as_str())
    }
}

impl std::fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReceipt {
    pub id: u64,
}

/// What the server made of a submission. Rejections keep their field errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionOutcome {
    Accepted(ContactReceipt),
    Rejected(SubmissionError),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContactFormState {
    #[default]
    Idle,
    Submitting,
    Submitted { receipt: ContactReceipt, message: String },
    Failed(SubmissionError),
}

impl ContactFormState {
    pub fn begin(&mut self) {
        *self = ContactFormState::Submitting;
    }

    pub fn finish(&mut self, outcome: SubmissionOutcome) {
        *self = match outcome {
            SubmissionOutcome::Accepted(receipt) => ContactFormState::Submitted {
                receipt,
                message: SUBMISSION_THANK_YOU.to_string(),
            },
            SubmissionOutcome::Rejected(error) => ContactFormState::Failed(error),
        };
    }

    pub fn reset(&mut self) {
        *self = ContactFormState::Idle;
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, ContactFormState::Submitting)
    }

    pub fn error(&self) -> Option<&SubmissionError> {
        match self {
            ContactFormState::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn success_message(&self) -> Option<&str> {
        match self {
            ContactFormState::Submitted { message, .. } => Some(message),
            _ => None,
        }
    }
}
