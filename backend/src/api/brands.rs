//! Brand collection with the listings each brand owns.

use common::catalog::BrandRecord;
use serde::{Deserialize, Serialize};

use crate::api::listings::RawListing;
use crate::cms_utils::strapi_utils::{COLLECTION_PAGE_SIZE, CmsClient, StrapiEnvelope, StrapiMedia, note_truncation};
use crate::error::CatalogError;

pub const BRANDS_PATH: &str = "/api/brands";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawBrand {
    id: u64,
    #[serde(rename = "brand_ID", default)]
    brand_id: Option<String>,
    #[serde(default)]
    brand_name: String,
    #[serde(default)]
    brand_logo: Option<StrapiMedia>,
    #[serde(default)]
    brand_relations: Option<Vec<RawListing>>,
}

fn brand_params() -> Vec<(String, String)> {
    vec![
        ("populate[brand_logo]".to_string(), "true".to_string()),
        ("populate[brand_relations][populate]".to_string(), "*".to_string()),
        ("pagination[pageSize]".to_string(), COLLECTION_PAGE_SIZE.to_string()),
    ]
}

pub async fn fetch_brands(client: &CmsClient) -> Result<Vec<BrandRecord>, CatalogError> {
    let envelope = client.get_json::<StrapiEnvelope<Vec<RawBrand>>>(BRANDS_PATH, &brand_params()).await?;
    note_truncation("brands", envelope.data.len(), &envelope.meta);
    let brands = envelope
        .data
        .into_iter()
        .map(|raw| {
            let listings = raw
                .brand_relations
                .unwrap_or_default()
                .into_iter()
                .map(|l| l.normalize_with_brand(client, Some(raw.brand_name.as_str())))
                .collect();
            BrandRecord {
                id: raw.id,
                brand_id: raw.brand_id.unwrap_or_default(),
                logo_url: raw.brand_logo.map(|m| client.asset_url(&m.url)).unwrap_or_default(),
                name: raw.brand_name,
                listings,
            }
        })
        .collect::<Vec<_>>();
    Ok(brands)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CmsConfig;
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn listings_point_back_to_their_brand() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/brands"))
            .and(query_param("populate[brand_logo]", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [
                    {
                        "id": 1,
                        "brand_ID": "SKY",
                        "brand_name": "Skyline",
                        "brand_logo": { "url": "/uploads/skyline.svg" },
                        "brand_relations": [
                            { "id": 10, "property_Location": "Andheri", "property_Images": [{ "url": "/uploads/10.jpg" }] },
                            { "id": 11, "property_Location": "Bandra" }
                        ]
                    },
                    { "id": 2, "brand_name": "Harbour", "brand_logo": null, "brand_relations": null }
                ]
            })))
            .mount(&server)
            .await;

        let client = CmsClient::new(CmsConfig { api_url: server.uri(), asset_base_url: server.uri(), ..CmsConfig::default() }).unwrap();
        let brands = fetch_brands(&client).await.expect("fetch brands");
        assert_eq!(brands.len(), 2);
        assert_eq!(brands[0].brand_id, "SKY");
        assert_eq!(brands[0].logo_url, format!("{}/uploads/skyline.svg", server.uri()));
        assert_eq!(brands[0].listings.len(), 2);
        assert!(brands[0].listings.iter().all(|l| l.brand_name.as_deref() == Some("Skyline")));
        assert_eq!(brands[1].logo_url, "");
        assert!(brands[1].listings.is_empty());
    }
}
