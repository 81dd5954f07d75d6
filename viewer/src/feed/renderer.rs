//! Feed renderer
//!
//! Renders the feed page and post cards to HTML with askama templates.
//! Output is HTML-escaped by the templates.

use askama::Template;

use crate::app::FeedState;
use crate::domain::entities::{Post, PostId};

/// Delete capability handed to the post card.
///
/// Maps a post id to the target its delete control submits to. Without one
/// the control is rendered inert.
pub type OnDelete<'a> = &'a dyn Fn(PostId) -> String;

#[derive(Template)]
#[template(path = "components/post.html")]
struct PostCard<'a> {
    post: &'a Post,
    delete_action: Option<String>,
}

#[derive(Template)]
#[template(path = "pages/feed.html")]
struct FeedPage<'a> {
    loading: bool,
    error: Option<&'a str>,
    /// Banner shown above the feed, e.g. a refused delete
    notice: Option<&'a str>,
    /// Pre-rendered post cards, in feed order
    posts: Vec<String>,
}

/// Render a single post card
pub fn render_post(post: &Post, on_delete: Option<OnDelete<'_>>) -> askama::Result<String> {
    PostCard {
        post,
        delete_action: on_delete.map(|action| action(post.id)),
    }
    .render()
}

/// Render the full feed page for a view state
pub fn render_feed(state: &FeedState, on_delete: Option<OnDelete<'_>>) -> askama::Result<String> {
    render_feed_with_notice(state, on_delete, None)
}

/// Render the feed page with a notice banner above it
pub fn render_feed_with_notice(
    state: &FeedState,
    on_delete: Option<OnDelete<'_>>,
    notice: Option<&str>,
) -> askama::Result<String> {
    let page = match state {
        FeedState::Loading => FeedPage {
            loading: true,
            error: None,
            notice,
            posts: Vec::new(),
        },
        FeedState::Failed(message) => FeedPage {
            loading: false,
            error: Some(message.as_str()),
            notice,
            posts: Vec::new(),
        },
        FeedState::Loaded(posts) => FeedPage {
            loading: false,
            error: None,
            notice,
            posts: posts
                .iter()
                .map(|post| render_post(post, on_delete))
                .collect::<askama::Result<Vec<_>>>()?,
        },
    };

    page.render()
}
