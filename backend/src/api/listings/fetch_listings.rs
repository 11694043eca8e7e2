//! Filtered listing reads.

use common::{catalog::ListingRecord, filter::FilterCriteria, query::SerializedQuery};

use crate::api::listings::{LISTINGS_PATH, RawListing};
use crate::cms_utils::strapi_utils::{CmsClient, StrapiEnvelope, note_truncation, populate_all};
use crate::error::CatalogError;

/// Sends the serialized filters as flat query fields next to the populate
/// parameters, one field per non-empty dimension.
pub async fn fetch_listings(client: &CmsClient, query: &SerializedQuery) -> Result<Vec<ListingRecord>, CatalogError> {
    let mut params = populate_all();
    params.extend(query.as_pairs().map(|(k, v)| (k.to_string(), v.to_string())));

    let envelope = client.get_json::<StrapiEnvelope<Vec<RawListing>>>(LISTINGS_PATH, &params).await?;
    note_truncation("listings", envelope.data.len(), &envelope.meta);
    let records = envelope.data.into_iter().map(|raw| raw.normalize(client)).collect::<Vec<_>>();
    tracing::info!("fetched {} listings for {} filter fields", records.len(), query.len());
    Ok(records)
}

/// Listings for the luxury slider.
pub async fn fetch_luxury_listings(client: &CmsClient) -> Result<Vec<ListingRecord>, CatalogError> {
    let query = SerializedQuery::from_criteria(&FilterCriteria::luxury())?;
    fetch_listings(client, &query).await
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CmsConfig;
    use common::filter::FilterDimension;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> CmsClient {
        CmsClient::new(CmsConfig {
            api_url: server.uri(),
            asset_base_url: "https://cdn.example.com".to_string(),
            request_timeout: Duration::from_secs(5),
            cache_ttl: Duration::ZERO,
        }).unwrap()
    }

    #[tokio::test]
    async fn sends_filters_and_normalizes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/property-items"))
            .and(query_param("property_Type", "Apartment,,Villa"))
            .and(query_param("isLuxury", "false"))
            .and(query_param("populate", "*"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [
                    {
                        "id": 1,
                        "property_Images": [{ "url": "/uploads/one.jpg" }],
                        "property_Location": "Whitefield",
                        "propertyFeature": [{ "id": 5, "item": "Gym" }],
                        "brand": { "brand_name": "Skyline" }
                    },
                    { "id": 2, "property_Location": "Baner" }
                ],
                "meta": { "pagination": { "page": 1, "pageSize": 100, "pageCount": 1, "total": 2 } }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut criteria = FilterCriteria::default();
        criteria.values_mut(FilterDimension::PropertyType).insert("Villa".to_string());
        criteria.values_mut(FilterDimension::PropertyType).insert("Apartment".to_string());
        let query = SerializedQuery::from_criteria(&criteria).unwrap();

        let records = fetch_listings(&client_for(&server), &query).await.expect("fetch listings");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].images, vec!["https://cdn.example.com/uploads/one.jpg".to_string()]);
        assert_eq!(records[0].features[0].label, "Gym");
        assert_eq!(records[1].location, "Baner");
        assert_eq!(records[1].brand_name, None);
    }

    #[tokio::test]
    async fn empty_collection_is_not_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/property-items"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": [], "meta": {} })))
            .mount(&server)
            .await;

        let query = SerializedQuery::from_criteria(&FilterCriteria::default()).unwrap();
        let records = fetch_listings(&client_for(&server), &query).await.expect("fetch listings");
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn server_error_is_typed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/property-items"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&server)
            .await;

        let query = SerializedQuery::from_criteria(&FilterCriteria::default()).unwrap();
        let err = fetch_listings(&client_for(&server), &query).await.unwrap_err();
        match err {
            CatalogError::Server { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "maintenance");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/property-items"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let query = SerializedQuery::from_criteria(&FilterCriteria::default()).unwrap();
        let err = fetch_listings(&client_for(&server), &query).await.unwrap_err();
        assert!(matches!(err, CatalogError::Decode(_)));
    }

    #[tokio::test]
    async fn luxury_listings_set_the_flag() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/property-items"))
            .and(query_param("isLuxury", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{ "id": 8, "isLuxury": true }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let records = fetch_luxury_listings(&client_for(&server)).await.expect("fetch luxury");
        assert_eq!(records.len(), 1);
        assert!(records[0].is_luxury);
    }

    #[tokio::test]
    async fn repeated_reads_hit_the_cache() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/property-items"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": [{ "id": 1 }] })))
            .expect(1)
            .mount(&server)
            .await;

        let client = CmsClient::new(CmsConfig {
            api_url: server.uri(),
            cache_ttl: Duration::from_secs(60),
            ..CmsConfig::default()
        }).unwrap();
        let query = SerializedQuery::from_criteria(&FilterCriteria::default()).unwrap();
        let first = fetch_listings(&client, &query).await.expect("first read");
        let second = fetch_listings(&client, &query).await.expect("second read");
        assert_eq!(first, second);
    }
}
