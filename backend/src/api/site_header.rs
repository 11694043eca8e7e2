use common::catalog::{NavLink, SiteHeader};
use serde::{Deserialize, Serialize};

use crate::cms_utils::strapi_utils::{CmsClient, StrapiEnvelope, StrapiMedia};
use crate::error::CatalogError;

pub const HEADER_PATH: &str = "/api/header";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct RawHeader {
    #[serde(default)]
    header_container: Option<RawHeaderContainer>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct RawHeaderContainer {
    #[serde(rename = "LogoLink", default)]
    logo_link: Option<RawLogoLink>,
    #[serde(rename = "navLinks", default)]
    nav_links: Option<Vec<NavLink>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct RawLogoLink {
    #[serde(default)]
    image: Option<StrapiMedia>,
}

pub async fn fetch_header(client: &CmsClient) -> Result<SiteHeader, CatalogError> {
    let params = vec![
        ("populate[header_container][populate][LogoLink][populate]".to_string(), "image".to_string()),
        ("populate[header_container][populate][navLinks]".to_string(), "true".to_string()),
    ];
    let envelope = client.get_json::<StrapiEnvelope<Option<RawHeader>>>(HEADER_PATH, &params).await?;
    let container = envelope.data.unwrap_or_default().header_container.unwrap_or_default();
    let logo_path = container.logo_link.and_then(|l| l.image).map(|m| m.url).unwrap_or_default();
    Ok(SiteHeader {
        logo_url: client.asset_url(&logo_path),
        nav_links: container.nav_links.unwrap_or_default(),
    })
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CmsConfig;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn reads_logo_and_links() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/header"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {
                    "header_container": {
                        "LogoLink": { "image": { "url": "/uploads/logo.png" } },
                        "navLinks": [
                            { "id": 1, "label": "Home", "link": "/" },
                            { "id": 2, "label": "Luxury", "link": "/luxury" }
                        ]
                    }
                }
            })))
            .mount(&server)
            .await;

        let client = CmsClient::new(CmsConfig { api_url: server.uri(), asset_base_url: server.uri(), ..CmsConfig::default() }).unwrap();
        let header = fetch_header(&client).await.expect("fetch header");
        assert_eq!(header.logo_url, format!("{}/uploads/logo.png", server.uri()));
        assert_eq!(header.nav_links.len(), 2);
        assert_eq!(header.nav_links[1].link, "/luxury");
    }

    #[tokio::test]
    async fn unpublished_header_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/header"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": null })))
            .mount(&server)
            .await;

        let client = CmsClient::new(CmsConfig { api_url: server.uri(), ..CmsConfig::default() }).unwrap();
        let header = fetch_header(&client).await.expect("fetch header");
        assert_eq!(header, SiteHeader::default());
    }
}
