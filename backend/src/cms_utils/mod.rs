//! Strapi plumbing shared by the API calls.

pub mod asset_url;
pub mod response_cache;
pub mod strapi_utils;
