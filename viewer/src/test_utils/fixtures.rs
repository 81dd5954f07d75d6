//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{Author, Post, PostId};

/// Create a test post without an image
pub fn test_post(id: i64, username: &str, title: &str) -> Post {
    Post {
        id: PostId(id),
        author: Author {
            username: username.to_string(),
        },
        title: title.to_string(),
        image: None,
        text: None,
    }
}

/// Create a test post carrying an image URL
pub fn test_post_with_image(id: i64, username: &str, title: &str, image: &str) -> Post {
    Post {
        image: Some(image.to_string()),
        ..test_post(id, username, title)
    }
}

/// The two-post feed used across tests: alice first, then bob
pub fn test_feed() -> Vec<Post> {
    vec![
        test_post(1, "alice", "Hello"),
        test_post_with_image(2, "bob", "Band practice", "http://x/y.png"),
    ]
}
