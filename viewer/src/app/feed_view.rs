//! Feed view
//!
//! The view session behind one page render. A view fetches the feed once
//! when it is mounted; loading the page again starts a new view.

use std::sync::Arc;

use crate::domain::entities::Post;
use crate::domain::ports::PostsApi;

/// Result of loading the feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedState {
    /// Mounted but the fetch has not completed
    Loading,
    /// Posts in backend order
    Loaded(Vec<Post>),
    /// The fetch failed; carries a short user-facing message.
    /// The full error only goes to the log.
    Failed(String),
}

impl FeedState {
    /// Posts to display. Empty unless the feed loaded.
    pub fn posts(&self) -> &[Post] {
        match self {
            FeedState::Loaded(posts) => posts,
            FeedState::Loading | FeedState::Failed(_) => &[],
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FeedState::Failed(_))
    }
}

/// View state for one page session
pub struct FeedView {
    api: Arc<dyn PostsApi>,
    state: FeedState,
    mounted: bool,
}

impl FeedView {
    pub fn new(api: Arc<dyn PostsApi>) -> Self {
        Self {
            api,
            state: FeedState::Loading,
            mounted: false,
        }
    }

    /// Initial display. Only the first call fetches.
    pub async fn mount(&mut self) -> &FeedState {
        if !self.mounted {
            self.mounted = true;
            self.fetch().await;
        }
        &self.state
    }

    pub fn state(&self) -> &FeedState {
        &self.state
    }

    pub fn into_state(self) -> FeedState {
        self.state
    }

    async fn fetch(&mut self) {
        self.state = match self.api.list_posts().await {
            Ok(posts) => {
                tracing::debug!("Loaded {} posts", posts.len());
                FeedState::Loaded(posts)
            }
            Err(e) => {
                tracing::warn!("Failed to load feed: {}", e);
                FeedState::Failed(e.summary())
            }
        };
    }
}
