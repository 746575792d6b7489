//! Remote data gateway
//!
//! Every call degrades to a neutral value instead of returning an error: list
//! endpoints yield an empty `Vec`, object endpoints yield `None`, and the two
//! side-effecting calls (`bootstrap`, `like_post`) return `()` because callers
//! deliberately ignore their outcome.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::Config;
use crate::schema::{parse_list, Me, Post, Story};

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("malformed payload: {0}")]
    Decode(String),
}

/// Access to the AIgram backend, as seen by view controllers.
#[async_trait(?Send)]
pub trait DataGateway {
    /// Best-effort priming request. The caller discards success and failure alike.
    async fn bootstrap(&self);

    async fn get_stories(&self) -> Vec<Story>;

    async fn get_feed(&self, limit: Option<u32>) -> Vec<Post>;

    /// Current user's profile, or `None` when it can't be loaded.
    async fn get_me(&self) -> Option<Me>;

    /// Best-effort like request. The caller discards success and failure alike.
    async fn like_post(&self, id: &str);
}

/// [`DataGateway`] over HTTP/JSON.
#[derive(Clone, Debug)]
pub struct HttpGateway {
    base_url: String,
    http: reqwest::Client,
}

impl HttpGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.backend_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_value(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<serde_json::Value, GatewayError> {
        debug!("GET {}", path);
        let resp = self.http.get(self.url(path)).query(query).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(GatewayError::Status(status.as_u16()));
        }

        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| GatewayError::Decode(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        let value = self.get_value(path, &[]).await?;
        serde_json::from_value(value).map_err(|e| GatewayError::Decode(e.to_string()))
    }

    async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, GatewayError> {
        let value = self.get_value(path, query).await?;
        parse_list(value).ok_or_else(|| GatewayError::Decode("expected a JSON array".to_string()))
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<(), GatewayError> {
        let resp = request.send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(GatewayError::Status(status.as_u16()));
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl DataGateway for HttpGateway {
    async fn bootstrap(&self) {
        debug!("GET /api/bootstrap");
        if let Err(e) = self.send(self.http.get(self.url("/api/bootstrap"))).await {
            debug!("Bootstrap failed (ignored): {}", e);
        }
    }

    async fn get_stories(&self) -> Vec<Story> {
        self.get_list("/api/stories", &[])
            .await
            .unwrap_or_else(|e| {
                warn!("Stories unavailable: {}", e);
                Vec::new()
            })
    }

    async fn get_feed(&self, limit: Option<u32>) -> Vec<Post> {
        let query: Vec<(&str, String)> = limit
            .map(|limit| vec![("limit", limit.to_string())])
            .unwrap_or_default();

        self.get_list("/api/feed", &query).await.unwrap_or_else(|e| {
            warn!("Feed unavailable: {}", e);
            Vec::new()
        })
    }

    async fn get_me(&self) -> Option<Me> {
        match self.get_json::<Option<Me>>("/api/me").await {
            Ok(me) => me,
            Err(e) => {
                warn!("Profile unavailable: {}", e);
                None
            }
        }
    }

    async fn like_post(&self, id: &str) {
        let path = format!("/api/like/{}", urlencoding::encode(id));
        debug!("POST {}", path);
        if let Err(e) = self.send(self.http.post(self.url(&path))).await {
            debug!("Like for {} failed (ignored): {}", id, e);
        }
    }
}
