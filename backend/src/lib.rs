//! Catalog data client for the Strapi content API.

pub mod api;
pub mod cms_utils;
pub mod config;
pub mod error;

pub use cms_utils::strapi_utils::{CmsClient, get_cms_client};
pub use config::CmsConfig;
pub use error::CatalogError;
