//! HTTP adapter
//!
//! reqwest implementation of the posts API port.

pub mod client;

pub use client::HttpPostsApi;
