//! Domain entities
//!
//! Pure domain models for the feed. These mirror the backend's JSON shapes.

pub mod post;

pub use post::{Author, FeedEnvelope, Post, PostId};
