//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.
//! They store data in memory and record calls so tests can verify behavior.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Post, PostId};
use crate::domain::ports::PostsApi;
use crate::error::PostsApiError;

// ============================================================================
// In-Memory Posts API
// ============================================================================

#[derive(Default)]
pub struct InMemoryPostsApi {
    posts: Arc<RwLock<Vec<Post>>>,
    list_failure: Option<u16>,
    delete_failure: Option<u16>,
    list_calls: AtomicUsize,
    deleted: Arc<RwLock<Vec<PostId>>>,
}

impl InMemoryPostsApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with posts, in feed order
    pub fn with_posts(self, posts: Vec<Post>) -> Self {
        *self.posts.write().unwrap() = posts;
        self
    }

    /// Make `list_posts` answer with the given backend status
    pub fn failing_list(mut self, status: u16) -> Self {
        self.list_failure = Some(status);
        self
    }

    /// Make `delete_post` answer with the given backend status
    pub fn failing_delete(mut self, status: u16) -> Self {
        self.delete_failure = Some(status);
        self
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn deleted(&self) -> Vec<PostId> {
        self.deleted.read().unwrap().clone()
    }
}

#[async_trait]
impl PostsApi for InMemoryPostsApi {
    async fn list_posts(&self) -> Result<Vec<Post>, PostsApiError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(status) = self.list_failure {
            return Err(PostsApiError::Api {
                status,
                message: "Server Error".to_string(),
            });
        }

        Ok(self.posts.read().unwrap().clone())
    }

    async fn delete_post(&self, id: PostId) -> Result<(), PostsApiError> {
        if let Some(status) = self.delete_failure {
            return Err(PostsApiError::Api {
                status,
                message: "Delete refused".to_string(),
            });
        }

        let mut posts = self.posts.write().unwrap();
        let before = posts.len();
        posts.retain(|p| p.id != id);
        if posts.len() == before {
            return Err(PostsApiError::Api {
                status: 404,
                message: format!("Post {} not found", id),
            });
        }

        self.deleted.write().unwrap().push(id);
        Ok(())
    }
}
