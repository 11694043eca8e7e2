pub mod pager_buttons;
pub mod listing_card;
pub mod filter_panel;
pub mod listing_grid;
pub mod brand_strip;
pub mod luxury_slider;
pub mod testimonial_strip;
pub mod contact_form;
