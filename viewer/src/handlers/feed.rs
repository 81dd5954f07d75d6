//! Feed handlers
//!
//! The feed page and the delete action wired into its post cards.
//! Supports content negotiation: Accept: application/json for JSON, otherwise HTML.

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};

use crate::app::{FeedState, FeedView};
use crate::domain::entities::PostId;
use crate::error::{AppError, ErrorResponse};
use crate::feed::{render_feed, render_feed_with_notice, OnDelete};
use crate::AppState;

/// Check if the client wants JSON response
fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false)
}

/// Target of a post card's delete control
fn delete_action(id: PostId) -> String {
    format!("/posts/{}/delete", id)
}

/// GET /
///
/// Mounts a fresh view, which fetches the feed once, and renders it.
/// - Accept: application/json → the loaded posts as JSON
/// - Otherwise → HTML page
///
/// A failed load answers 502 with the error view.
pub async fn get_feed(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let mut view = FeedView::new(state.posts_api.clone());
    view.mount().await;

    let status = if view.state().is_failed() {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::OK
    };
    let feed = view.into_state();

    if wants_json(&headers) {
        return Ok(match &feed {
            FeedState::Failed(message) => (
                status,
                Json(ErrorResponse {
                    error: "Could not load posts".to_string(),
                    details: Some(message.clone()),
                }),
            )
                .into_response(),
            _ => Json(feed.posts()).into_response(),
        });
    }

    let on_delete: OnDelete<'_> = &delete_action;
    let html = render_feed(&feed, Some(on_delete))?;

    Ok((status, Html(html)).into_response())
}

/// POST /posts/:id/delete
///
/// Forwards the delete to the backend, then sends the browser back to the feed.
/// A refused delete re-renders the feed with a notice, or answers the JSON
/// error body when the client asked for JSON.
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let id = PostId(id);
    let err = match state.posts_api.delete_post(id).await {
        Ok(()) => {
            tracing::info!("Deleted post {}", id);
            return Ok(Redirect::to("/").into_response());
        }
        Err(e) => e,
    };

    if wants_json(&headers) {
        return Err(err.into());
    }

    tracing::warn!("Failed to delete post {}: {}", id, err);

    let mut view = FeedView::new(state.posts_api.clone());
    view.mount().await;
    let feed = view.into_state();

    let notice = format!("Could not delete post: {}", err.summary());
    let on_delete: OnDelete<'_> = &delete_action;
    let html = render_feed_with_notice(&feed, Some(on_delete), Some(&notice))?;

    Ok((err.http_status(), Html(html)).into_response())
}
