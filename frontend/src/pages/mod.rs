pub mod home_page;
pub mod properties_page;
pub mod listing_detail_page;
pub mod contact_page;
