//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! The HTTP adapter itself is exercised against a wiremock backend instead.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
