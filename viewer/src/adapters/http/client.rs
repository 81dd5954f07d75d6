//! Posts backend HTTP client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::entities::{FeedEnvelope, Post, PostId};
use crate::domain::ports::PostsApi;
use crate::error::PostsApiError;

/// Implementation of the posts API client over HTTP
pub struct HttpPostsApi {
    http: Client,
    base_url: String,
}

impl HttpPostsApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, PostsApiError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PostsApiError::Client(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, PostsApiError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| PostsApiError::Deserialization(e.to_string()))
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(PostsApiError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }

    async fn handle_empty_response(
        &self,
        response: reqwest::Response,
    ) -> Result<(), PostsApiError> {
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(PostsApiError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl PostsApi for HttpPostsApi {
    async fn list_posts(&self) -> Result<Vec<Post>, PostsApiError> {
        let url = self.api_url("/posts/");
        tracing::debug!("GET {}", url);

        let response = self.http.get(&url).send().await?;
        let envelope: FeedEnvelope = self.handle_response(response).await?;

        Ok(envelope.results)
    }

    async fn delete_post(&self, id: PostId) -> Result<(), PostsApiError> {
        let url = self.api_url(&format!("/posts/{}/", id));
        tracing::debug!("DELETE {}", url);

        let response = self.http.delete(&url).send().await?;
        self.handle_empty_response(response).await
    }
}
