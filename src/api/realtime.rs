//! Passthrough to the OpenAI realtime sessions API.
//!
//! The browser never sees the server's API key: it asks this endpoint for an
//! ephemeral session and gets back whatever the upstream API returned.

use super::{ApiError, AppState};
use crate::config::{Config, ConfigError};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{info, instrument, warn};

const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(20);
const SESSIONS_PATH: &str = "/v1/realtime/sessions";

pub struct RealtimeProxy {
    http: reqwest::Client,
    api_key: Option<String>,
    sessions_url: String,
    model: String,
}

impl RealtimeProxy {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(UPSTREAM_TIMEOUT)
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(Self {
            http,
            api_key: config.openai_api_key.clone(),
            sessions_url: format!("{}{}", config.openai_base_url, SESSIONS_PATH),
            model: config.realtime_model.clone(),
        })
    }

    /// Requests an ephemeral realtime session.
    ///
    /// Any non-200 upstream answer is returned as [`ApiError::Upstream`] with the
    /// upstream status and body text untouched.
    #[instrument(skip(self), fields(model = %self.model))]
    pub async fn create_session(&self) -> Result<Value, ApiError> {
        let api_key = self.api_key.as_deref().ok_or(ApiError::MissingApiKey)?;

        let response = self
            .http
            .post(&self.sessions_url)
            .bearer_auth(api_key)
            .json(&json!({ "model": self.model }))
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await?;
            warn!(%status, "Realtime session request rejected upstream");
            return Err(ApiError::Upstream { status, body });
        }

        let session = response.json().await?;
        info!("Realtime session created");
        Ok(session)
    }
}

/// `POST /realtime/ephemeral`
pub async fn create_ephemeral_session(
    State(state): State<AppState>,
) -> Result<Json<Value>, ApiError> {
    Ok(Json(state.realtime.create_session().await?))
}
