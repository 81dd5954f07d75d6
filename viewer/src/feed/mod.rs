//! Feed module
//!
//! HTML rendering of the feed page and its post cards.

pub mod renderer;

pub use renderer::{render_feed, render_feed_with_notice, OnDelete};
