pub mod catalog_state;
pub mod filter_options;
pub mod timers;
