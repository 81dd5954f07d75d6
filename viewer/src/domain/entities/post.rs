//! Post domain entity
//!
//! Posts live in the backend (source of truth). This entity is the
//! viewer's read-only view of one feed item.

use serde::{Deserialize, Serialize};

/// Backend identifier of a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub i64);

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Author of a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub username: String,
}

/// A post in the feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub author: Author,
    pub title: String,
    /// Image URL, `null` when the post has no image
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Top-level body of `GET api/posts/`
///
/// The backend wraps the list in a paginated envelope; only `results`
/// is read.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedEnvelope {
    pub results: Vec<Post>,
}
