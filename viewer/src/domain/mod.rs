//! Domain layer
//!
//! Contains the feed data model with no external dependencies.
//! - `entities`: Domain models for posts and the feed envelope
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
