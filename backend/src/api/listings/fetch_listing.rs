use common::catalog::ListingRecord;

use crate::api::listings::{LISTINGS_PATH, RawListing};
use crate::cms_utils::strapi_utils::{CmsClient, StrapiEnvelope};
use crate::error::CatalogError;

pub async fn fetch_listing(client: &CmsClient, listing_id: u64) -> Result<ListingRecord, CatalogError> {
    let params = vec![
        ("populate".to_string(), "*".to_string()),
        ("filters[id][$eq]".to_string(), listing_id.to_string()),
    ];
    let envelope = client.get_json::<StrapiEnvelope<Vec<RawListing>>>(LISTINGS_PATH, &params).await?;
    envelope
        .data
        .into_iter()
        .find(|raw| raw.id == listing_id)
        .map(|raw| raw.normalize(client))
        .ok_or_else(|| CatalogError::NotFound(format!("listing {listing_id}")))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CmsConfig;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn missing_listing_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/property-items"))
            .and(query_param("filters[id][$eq]", "42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": [] })))
            .mount(&server)
            .await;

        let client = CmsClient::new(CmsConfig { api_url: server.uri(), ..CmsConfig::default() }).unwrap();
        let err = fetch_listing(&client, 42).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn returns_the_matching_listing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/property-items"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{ "id": 42, "property_Location": "Juhu" }]
            })))
            .mount(&server)
            .await;

        let client = CmsClient::new(CmsConfig { api_url: server.uri(), ..CmsConfig::default() }).unwrap();
        let record = fetch_listing(&client, 42).await.expect("fetch listing");
        assert_eq!(record.location, "Juhu");
    }
}
