//! Application layer
//!
//! Use cases over the posts port. A `FeedView` is the state of one page.

pub mod feed_view;

pub use feed_view::{FeedState, FeedView};
