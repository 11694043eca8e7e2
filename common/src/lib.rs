//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod catalog;
pub mod filter;
pub mod query;
pub mod executor;
pub mod carousel;
pub mod auto_advance;
pub mod contact;
