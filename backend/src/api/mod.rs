//! CMS read and write calls, normalized into the shared view models.

pub mod listings;
pub mod brands;
pub mod testimonials;
pub mod site_header;
pub mod contact;
