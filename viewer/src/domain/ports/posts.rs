//! Posts API port trait
//!
//! Defines the interface for talking to the posts backend.

use async_trait::async_trait;

use crate::domain::entities::{Post, PostId};
use crate::error::PostsApiError;

/// Posts backend client trait
#[async_trait]
pub trait PostsApi: Send + Sync {
    /// Fetch the feed (`GET api/posts/`), in backend order
    async fn list_posts(&self) -> Result<Vec<Post>, PostsApiError>;

    /// Delete a post (`DELETE api/posts/{id}/`)
    async fn delete_post(&self, id: PostId) -> Result<(), PostsApiError>;
}
