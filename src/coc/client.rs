//! HTTP client for the Clash of Clans API.

use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use async_trait::async_trait;
use tracing::{debug, warn};

use crate::coc::models::{ClanRecord, PlayerRecord};
use crate::coc::tag::{EntityKind, EntityTag};
use crate::common::error::{ApiError, ApiResult};
use crate::config::types::ApiConfig;

/// Read access to player and clan records.
///
/// Implementations do not re-check the tag prefix; callers validate first.
#[async_trait]
pub trait StatsApi: Send + Sync {
    async fn fetch_player(&self, tag: &EntityTag) -> ApiResult<PlayerRecord>;

    async fn fetch_clan(&self, tag: &EntityTag) -> ApiResult<ClanRecord>;
}

/// Bearer-authenticated client for the public REST API.
#[derive(Debug, Clone)]
pub struct CocClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl CocClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("clashbot/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    pub fn from_config(config: &ApiConfig) -> ApiResult<Self> {
        Self::new(config.base_url.clone(), config.key.clone())
    }

    /// `{base}/{players|clans}/{encoded tag}`
    pub fn entity_url(&self, kind: EntityKind, tag: &EntityTag) -> String {
        format!("{}/{}/{}", self.base_url, kind.path_segment(), tag.encoded())
    }

    async fn fetch_entity<T: DeserializeOwned>(
        &self,
        kind: EntityKind,
        tag: &EntityTag,
    ) -> ApiResult<T> {
        let url = self.entity_url(kind, tag);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.api_key)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                warn!("{} lookup for {} failed: {}", kind.noun(), tag, e);
                ApiError::from(e)
            })?;

        match response.status() {
            StatusCode::OK => {
                let body = response.text().await?;
                serde_json::from_str(&body).map_err(|e| {
                    warn!("{} record for {} did not decode: {}", kind.noun(), tag, e);
                    ApiError::from(e)
                })
            }
            StatusCode::NOT_FOUND => {
                debug!("{} {} not found", kind.noun(), tag);
                Err(ApiError::NotFound)
            }
            status => {
                warn!("{} lookup for {} returned {}", kind.noun(), tag, status);
                Err(ApiError::Unexpected(status.as_u16()))
            }
        }
    }
}

#[async_trait]
impl StatsApi for CocClient {
    async fn fetch_player(&self, tag: &EntityTag) -> ApiResult<PlayerRecord> {
        self.fetch_entity(EntityKind::Player, tag).await
    }

    async fn fetch_clan(&self, tag: &EntityTag) -> ApiResult<ClanRecord> {
        self.fetch_entity(EntityKind::Clan, tag).await
    }
}
