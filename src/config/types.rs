use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub word_service: WordServiceConfig,
    #[serde(default)]
    pub image_service: ImageServiceConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Word-info lookup service (Gemini-compatible generateContent endpoint).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordServiceConfig {
    /// Base URL for the API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model used for word explanations.
    #[serde(default = "default_word_model")]
    pub model: String,
    /// Environment variable holding the API key. Keys are resolved from
    /// the environment at client construction, never stored in config.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
}

impl Default for WordServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_word_model(),
            api_key_env: default_api_key_env(),
            timeout_seconds: default_timeout(),
        }
    }
}

/// Avatar image generation service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageServiceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model used for avatar generation.
    #[serde(default = "default_image_model")]
    pub model: String,
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Fixed style template appended to every avatar prompt.
    #[serde(default = "default_style_suffix")]
    pub style_suffix: String,
    #[serde(default = "default_image_timeout")]
    pub timeout_seconds: u32,
}

impl Default for ImageServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_image_model(),
            api_key_env: default_api_key_env(),
            style_suffix: default_style_suffix(),
            timeout_seconds: default_image_timeout(),
        }
    }
}

/// Local persistence locations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Override for the data directory. Defaults to the platform data dir.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_word_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_image_model() -> String {
    "gemini-2.5-flash-image".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_style_suffix() -> String {
    "，畫成可愛的卡通頭像，色彩明亮，適合小朋友".to_string()
}

fn default_timeout() -> u32 {
    20
}

fn default_image_timeout() -> u32 {
    60
}
