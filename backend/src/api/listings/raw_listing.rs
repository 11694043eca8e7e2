use common::catalog::{ListingFeature, ListingRecord};
use serde::{Deserialize, Serialize};

use crate::cms_utils::strapi_utils::{CmsClient, StrapiMedia};

/// A property item as Strapi returns it.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RawListing {
    pub id: u64,
    #[serde(rename = "property_Images", default)]
    pub images: Option<Vec<StrapiMedia>>,
    #[serde(rename = "property_Location", default)]
    pub location: Option<String>,
    #[serde(rename = "property_Description", default)]
    pub description: Option<String>,
    #[serde(rename = "propertyFeature", default)]
    pub features: Option<Vec<RawFeature>>,
    #[serde(default)]
    pub brand: Option<RawBrandRef>,
    #[serde(rename = "isLuxury", default)]
    pub is_luxury: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawFeature {
    pub id: u64,
    #[serde(default)]
    pub item: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawBrandRef {
    #[serde(default)]
    pub brand_name: String,
}

impl RawListing {
    pub fn normalize(self, client: &CmsClient) -> ListingRecord {
        self.normalize_with_brand(client, None)
    }

    /// `owner` names the brand when the listing is nested under one and
    /// carries no brand relation of its own.
    pub fn normalize_with_brand(self, client: &CmsClient, owner: Option<&str>) -> ListingRecord {
        let images = self
            .images
            .unwrap_or_default()
            .into_iter()
            .map(|m| client.asset_url(&m.url))
            .filter(|u| !u.is_empty())
            .collect();
        let features = self
            .features
            .unwrap_or_default()
            .into_iter()
            .map(|f| ListingFeature { id: f.id, label: f.item })
            .collect();
        let brand_name = self
            .brand
            .map(|b| b.brand_name)
            .filter(|n| !n.is_empty())
            .or_else(|| owner.map(|o| o.to_string()));
        ListingRecord {
            id: self.id,
            images,
            location: self.location.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            features,
            brand_name,
            is_luxury: self.is_luxury.unwrap_or(false),
        }
    }
}
