//! Listing endpoints and module exports.

mod raw_listing;
pub use raw_listing::RawListing;

mod fetch_listings;
pub use fetch_listings::{fetch_listings, fetch_luxury_listings};

mod fetch_listing;
pub use fetch_listing::fetch_listing;

pub const LISTINGS_PATH: &str = "/api/property-items";
