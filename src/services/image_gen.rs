//! Avatar image generation.
//!
//! Sends a free-text prompt plus a fixed child-friendly style template
//! and returns the first inline image payload as a data URI. Failures
//! are typed; the avatar manager turns them into a user notice and keeps
//! the previous avatar.

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use crate::config::ImageServiceConfig;
use crate::services::error::ServiceError;

#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    #[serde(rename = "inlineData")]
    inline_data: Option<InlineData>,
}

#[derive(Deserialize)]
struct InlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    /// Base64 payload, as delivered by the service.
    data: String,
}

/// Client for the image-generation service.
#[derive(Clone)]
pub struct ImageGenClient {
    client: Client,
    config: ImageServiceConfig,
    api_key: Option<String>,
}

impl ImageGenClient {
    pub fn new(config: ImageServiceConfig, offline: bool) -> Self {
        let api_key = if offline {
            None
        } else {
            std::env::var(&config.api_key_env).ok().filter(|k| !k.is_empty())
        };
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds as u64))
            .build()
            .unwrap_or_default();
        Self {
            client,
            config,
            api_key,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Generate an avatar for `prompt`. Returns the first usable image
    /// as a `data:` URI.
    pub async fn generate(&self, prompt: &str) -> Result<String, ServiceError> {
        let api_key = self.api_key.as_deref().ok_or(ServiceError::NotConfigured)?;

        let styled = format!("{prompt}{}", self.config.style_suffix);
        let body = json!({
            "contents": [{ "parts": [{ "text": styled }] }],
        });

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model,
        );

        tracing::debug!(model = %self.config.model, "requesting avatar image");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ServiceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let api: ApiResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::Parse(e.to_string()))?;

        let image = api
            .candidates
            .into_iter()
            .flat_map(|c| c.content.parts)
            .find_map(|p| p.inline_data)
            .ok_or_else(|| ServiceError::Parse("no image part in response".to_string()))?;

        Ok(format!("data:{};base64,{}", image.mime_type, image.data))
    }
}
