use common::catalog::TestimonialRecord;
use serde::{Deserialize, Serialize};

use crate::cms_utils::strapi_utils::{CmsClient, StrapiEnvelope, StrapiMedia, note_truncation, populate_all};
use crate::error::CatalogError;

pub const TESTIMONIALS_PATH: &str = "/api/people-trust-uses";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawTestimonial {
    id: u64,
    #[serde(rename = "People_Trust_Us_title", default)]
    title: Option<String>,
    #[serde(rename = "People_Trust_Us_designation", default)]
    designation: Option<String>,
    #[serde(rename = "People_Trust_Us_video", default)]
    video: Option<StrapiMedia>,
}

/// Testimonials without a video are skipped; the strip only plays videos.
pub async fn fetch_testimonials(client: &CmsClient) -> Result<Vec<TestimonialRecord>, CatalogError> {
    let envelope = client.get_json::<StrapiEnvelope<Vec<RawTestimonial>>>(TESTIMONIALS_PATH, &populate_all()).await?;
    note_truncation("testimonials", envelope.data.len(), &envelope.meta);
    let records = envelope
        .data
        .into_iter()
        .filter_map(|raw| {
            let video_url = client.asset_url(&raw.video?.url);
            if video_url.is_empty() {
                return None;
            }
            Some(TestimonialRecord {
                id: raw.id,
                title: raw.title.unwrap_or_default(),
                designation: raw.designation.unwrap_or_default(),
                video_url,
            })
        })
        .collect();
    Ok(records)
}
