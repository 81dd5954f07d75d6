//! HTTP handlers
//!
//! Axum request handlers for the viewer.

pub mod feed;

pub use feed::{delete_post, get_feed};
