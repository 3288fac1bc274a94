//! Word-info lookup for the current practice character.
//!
//! Asks a Gemini-style endpoint for exactly four string fields under a
//! strict JSON response schema. The public entry point never fails: any
//! transport, parse, or validation problem yields deterministic fallback
//! content so the info card always has something to show.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;

use crate::config::WordServiceConfig;
use crate::services::error::ServiceError;

/// Per-character enrichment shown on the info card. Ephemeral: fetched
/// each time a character becomes current, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordInfo {
    pub word: String,
    pub pinyin: String,
    pub meaning: String,
    #[serde(rename = "exampleSentence")]
    pub example_sentence: String,
}

impl WordInfo {
    /// Deterministic local fallback used whenever the service cannot
    /// deliver a complete answer.
    pub fn fallback(character: &str) -> WordInfo {
        WordInfo {
            word: character.to_string(),
            pinyin: "載入中...".to_string(),
            meaning: "這是一個很有趣的中文字！".to_string(),
            example_sentence: format!("我們一起來寫「{character}」吧！"),
        }
    }

    fn complete(self) -> Result<WordInfo, ServiceError> {
        if self.word.is_empty() {
            return Err(ServiceError::Incomplete("word"));
        }
        if self.pinyin.is_empty() {
            return Err(ServiceError::Incomplete("pinyin"));
        }
        if self.meaning.is_empty() {
            return Err(ServiceError::Incomplete("meaning"));
        }
        if self.example_sentence.is_empty() {
            return Err(ServiceError::Incomplete("exampleSentence"));
        }
        Ok(self)
    }
}

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
    #[serde(default)]
    text: Option<String>,
}

/// Client for the word-info service.
#[derive(Clone)]
pub struct WordInfoClient {
    client: Client,
    config: WordServiceConfig,
    api_key: Option<String>,
}

impl WordInfoClient {
    /// Build a client. The API key is resolved from the configured
    /// environment variable; when absent (or in offline mode) every
    /// fetch resolves to the fallback immediately.
    pub fn new(config: WordServiceConfig, offline: bool) -> Self {
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

    /// Fetch enrichment for `character`. Never errors: failures collapse
    /// to [`WordInfo::fallback`].
    pub async fn fetch_info(&self, character: &str) -> WordInfo {
        match self.request(character).await {
            Ok(info) => info,
            Err(err) => {
                tracing::warn!(character, error = %err, "word-info fetch failed, using fallback");
                WordInfo::fallback(character)
            }
        }
    }

    async fn request(&self, character: &str) -> Result<WordInfo, ServiceError> {
        let api_key = self.api_key.as_deref().ok_or(ServiceError::NotConfigured)?;

        let prompt = format!(
            "請針對小學一年級的小朋友，解釋漢字「{character}」。\
             包含拼音、簡單意思、以及一個充滿童趣的例句。"
        );
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "word": { "type": "STRING" },
                        "pinyin": { "type": "STRING" },
                        "meaning": { "type": "STRING" },
                        "exampleSentence": { "type": "STRING" },
                    },
                    "required": ["word", "pinyin", "meaning", "exampleSentence"],
                },
            },
        });

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model,
        );

        tracing::debug!(character, model = %self.config.model, "requesting word info");

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

        let text = api
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().find_map(|p| p.text))
            .ok_or_else(|| ServiceError::Parse("no text part in response".to_string()))?;

        let info: WordInfo = serde_json::from_str(&text)
            .map_err(|e| ServiceError::Parse(format!("word info body: {e}")))?;
        info.complete()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_embeds_the_character() {
        let info = WordInfo::fallback("水");
        assert_eq!(info.word, "水");
        assert!(info.example_sentence.contains('水'));
    }

    #[test]
    fn incomplete_response_is_rejected() {
        let info = WordInfo {
            word: "山".to_string(),
            pinyin: String::new(),
            meaning: "mountain".to_string(),
            example_sentence: "我看見一座山。".to_string(),
        };
        assert!(matches!(
            info.complete(),
            Err(ServiceError::Incomplete("pinyin"))
        ));
    }

    #[test]
    fn structured_payload_parses_with_camel_case_field() {
        let raw = r#"{"word":"火","pinyin":"huǒ","meaning":"燃燒的光與熱","exampleSentence":"營火晚會的火好漂亮！"}"#;
        let info: WordInfo = serde_json::from_str(raw).unwrap();
        assert_eq!(info.example_sentence, "營火晚會的火好漂亮！");
        assert!(info.complete().is_ok());
    }
}
