//! Contact form submission.

use common::contact::{ContactReceipt, ContactSubmission, SubmissionError, SubmissionOutcome};
use serde::Deserialize;

use crate::cms_utils::strapi_utils::{CmsClient, StrapiEnvelope};
use crate::error::CatalogError;

pub const CONTACTS_PATH: &str = "/api/contacts";

#[derive(Debug, Deserialize)]
struct CreatedContact {
    id: u64,
}

pub async fn submit_contact(client: &CmsClient, submission: &ContactSubmission) -> Result<ContactReceipt, CatalogError> {
    submission.validate().map_err(CatalogError::Rejected)?;
    let created = client.post_data::<_, StrapiEnvelope<CreatedContact>>(CONTACTS_PATH, submission).await?;
    tracing::info!("contact {} created (listing: {:?})", created.data.id, submission.listing_id);
    Ok(ContactReceipt { id: created.data.id })
}

/// Folds every failure into a rejection the form can show.
pub async fn submit_contact_outcome(client: &CmsClient, submission: &ContactSubmission) -> SubmissionOutcome {
    match submit_contact(client, submission).await {
        Ok(receipt) => SubmissionOutcome::Accepted(receipt),
        Err(CatalogError::Rejected(error)) => {
            tracing::warn!("contact rejected: {}", error);
            SubmissionOutcome::Rejected(error)
        }
        Err(e) => {
            tracing::error!("contact submission failed: {:#?}", e);
            SubmissionOutcome::Rejected(SubmissionError::generic())
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CmsConfig;
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn submission() -> ContactSubmission {
        ContactSubmission {
            first_name: "Kabir".to_string(),
            last_name: "Shah".to_string(),
            phone: 9812345678,
            i_want_to: "Buy".to_string(),
            notes: "Evening calls".to_string(),
            listing_id: Some(7),
        }
    }

    #[tokio::test]
    async fn accepted_submission_returns_receipt() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/contacts"))
            .and(body_partial_json(serde_json::json!({ "data": { "I_want_to": "Buy", "listing_Id": 7 } })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": { "id": 31, "first_name": "Kabir" },
                "meta": {}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = CmsClient::new(CmsConfig { api_url: server.uri(), ..CmsConfig::default() }).unwrap();
        let outcome = submit_contact_outcome(&client, &submission()).await;
        assert_eq!(outcome, SubmissionOutcome::Accepted(ContactReceipt { id: 31 }));
    }

    #[tokio::test]
    async fn validation_errors_come_back_per_field() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/contacts"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "data": null,
                "error": {
                    "status": 400,
                    "name": "ValidationError",
                    "message": "Invalid phone",
                    "details": { "errors": [{ "path": ["phone"], "message": "phone is too short", "name": "ValidationError" }] }
                }
            })))
            .mount(&server)
            .await;

        let client = CmsClient::new(CmsConfig { api_url: server.uri(), ..CmsConfig::default() }).unwrap();
        let SubmissionOutcome::Rejected(error) = submit_contact_outcome(&client, &submission()).await else {
            panic!("expected rejection");
        };
        assert_eq!(error.for_field("phone"), Some("phone is too short"));
        assert_eq!(error.message, "phone is too short");
    }

    #[tokio::test]
    async fn unstructured_failure_is_generic() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/contacts"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&server)
            .await;

        let client = CmsClient::new(CmsConfig { api_url: server.uri(), ..CmsConfig::default() }).unwrap();
        let outcome = submit_contact_outcome(&client, &submission()).await;
        assert_eq!(outcome, SubmissionOutcome::Rejected(SubmissionError::generic()));
    }

    #[tokio::test]
    async fn incomplete_form_never_leaves_the_client() {
        let server = MockServer::start().await;
        Mock::given(method("POST")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;

        let client = CmsClient::new(CmsConfig { api_url: server.uri(), ..CmsConfig::default() }).unwrap();
        let mut incomplete = submission();
        incomplete.first_name.clear();
        let err = submit_contact(&client, &incomplete).await.unwrap_err();
        match err {
            CatalogError::Rejected(e) => assert_eq!(e.for_field("first_name"), Some("First name is required")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
