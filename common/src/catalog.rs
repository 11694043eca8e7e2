//! Flat view models for catalog records.

use serde::{Deserialize, Serialize};

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.jpg";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Hash, Eq, PartialOrd, Ord)]
pub struct ListingFeature {
    pub id: u64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ListingRecord {
    pub id: u64,
    pub images: Vec<String>,
    pub location: String,
    pub description: String,
    pub features: Vec<ListingFeature>,
    /// Name of the owning brand, if the record came with one.
    pub brand_name: Option<String>,
    pub is_luxury: bool,
}

impl ListingRecord {
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(|s| s.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BrandRecord {
    pub id: u64,
    pub brand_id: String,
    pub name: String,
    pub logo_url: String,
    pub listings: Vec<ListingRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestimonialRecord {
    pub id: u64,
    pub title: String,
    pub designation: String,
    pub video_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub id: u64,
    pub label: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SiteHeader {
    pub logo_url: String,
    pub nav_links: Vec<NavLink>,
}

/// One card of the luxury slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LuxurySlide {
    pub id: u64,
    pub title: String,
    pub location: String,
    pub description: String,
    pub image_url: String,
}

impl From<&ListingRecord> for LuxurySlide {
    fn from(listing: &ListingRecord) -> Self {
        Self {
            id: listing.id,
            title: listing.brand_name.clone().unwrap_or_default(),
            location: listing.location.clone(),
            description: listing.description.clone(),
            image_url: listing.cover_image().unwrap_or(PLACEHOLDER_IMAGE).to_string(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luxury_slide_falls_back_to_placeholder() {
        let listing = ListingRecord {
            id: 4,
            location: "Gurugram".to_string(),
            ..Default::default()
        };
        let slide = LuxurySlide::from(&listing);
        assert_eq!(slide.image_url, PLACEHOLDER_IMAGE);
        assert_eq!(slide.title, "");
        assert_eq!(slide.location, "Gurugram");
    }

    #[test]
    fn luxury_slide_uses_brand_and_first_image() {
        let listing = ListingRecord {
            id: 9,
            images: vec!["https://cdn/a.jpg".to_string(), "https://cdn/b.jpg".to_string()],
            brand_name: Some("Skyline".to_string()),
            ..Default::default()
        };
        let slide = LuxurySlide::from(&listing);
        assert_eq!(slide.title, "Skyline");
        assert_eq!(slide.image_url, "https://cdn/a.jpg");
    }
}
