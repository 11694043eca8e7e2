//! Client API calls for the property catalog.

use common::catalog::{BrandRecord, ListingRecord, SiteHeader, TestimonialRecord};
use common::contact::{ContactSubmission, SubmissionOutcome};
use common::query::SerializedQuery;
use dioxus::prelude::*;

#[cfg(feature = "server")]
fn server_error(e: backend::CatalogError) -> ServerFnError {
    ServerFnError::ServerError { message: e.to_string(), code: e.status_code(), details: None }
}

#[cfg(feature = "server")]
fn client_error(e: anyhow::Error) -> ServerFnError {
    ServerFnError::ServerError { message: format!("{e:#}"), code: 500, details: None }
}

#[server]
pub async fn fetch_listings(query: SerializedQuery) -> Result<Vec<ListingRecord>, ServerFnError> {
    let client = backend::get_cms_client().map_err(client_error)?;
    let x = backend::api::listings::fetch_listings(client, &query).await;
    x.map_err(server_error)
}

#[server]
pub async fn fetch_luxury_listings() -> Result<Vec<ListingRecord>, ServerFnError> {
    let client = backend::get_cms_client().map_err(client_error)?;
    let x = backend::api::listings::fetch_luxury_listings(client).await;
    x.map_err(server_error)
}

#[server]
pub async fn fetch_listing(listing_id: u64) -> Result<ListingRecord, ServerFnError> {
    let client = backend::get_cms_client().map_err(client_error)?;
    let x = backend::api::listings::fetch_listing(client, listing_id).await;
    x.map_err(server_error)
}

#[server]
pub async fn fetch_brands() -> Result<Vec<BrandRecord>, ServerFnError> {
    let client = backend::get_cms_client().map_err(client_error)?;
    let x = backend::api::brands::fetch_brands(client).await;
    x.map_err(server_error)
}

#[server]
pub async fn fetch_testimonials() -> Result<Vec<TestimonialRecord>, ServerFnError> {
    let client = backend::get_cms_client().map_err(client_error)?;
    let x = backend::api::testimonials::fetch_testimonials(client).await;
    x.map_err(server_error)
}

#[server]
pub async fn fetch_header() -> Result<SiteHeader, ServerFnError> {
    let client = backend::get_cms_client().map_err(client_error)?;
    let x = backend::api::site_header::fetch_header(client).await;
    x.map_err(server_error)
}

/// Rejections come back as `Ok(SubmissionOutcome::Rejected)` so the form
/// keeps its per-field messages.
#[server]
pub async fn submit_contact(submission: ContactSubmission) -> Result<SubmissionOutcome, ServerFnError> {
    let client = backend::get_cms_client().map_err(client_error)?;
    Ok(backend::api::contact::submit_contact_outcome(client, &submission).await)
}
