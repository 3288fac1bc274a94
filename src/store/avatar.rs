//! Persisted profile avatar.
//!
//! The avatar is a single optional image stored inline as a data URI. It
//! can come from a local file upload or from the image-generation
//! service; a failed generation leaves the previous avatar untouched.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use image::ImageFormat;
use thiserror::Error;

use crate::store::backend::StorageBackend;

/// Storage key for the serialized avatar data URI.
pub const AVATAR_KEY: &str = "profile_avatar";

/// Errors reported to the user from avatar operations.
#[derive(Debug, Error)]
pub enum AvatarError {
    #[error("請先輸入頭像描述")]
    EmptyPrompt,

    #[error("頭像正在生成中，請稍等")]
    GenerationInFlight,

    #[error("不支援的圖片格式（只支援 PNG 和 JPEG）")]
    UnsupportedImage,
}

/// Result of a completed generation request.
#[derive(Debug, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// New avatar stored.
    Updated,
    /// Generation failed; previous avatar (or absence) kept.
    Failed(String),
    /// Completion for a superseded request; ignored.
    Stale,
}

pub struct AvatarManager<S: StorageBackend> {
    storage: S,
    data_uri: Option<String>,
    /// Token of the outstanding generation, if any.
    pending: Option<u64>,
    next_token: u64,
}

impl<S: StorageBackend> AvatarManager<S> {
    /// Load the persisted avatar, if any. A stored value that is not a
    /// data URI is treated as absent.
    pub fn load(storage: S) -> Self {
        let data_uri = storage.get(AVATAR_KEY).filter(|v| {
            let ok = v.starts_with("data:");
            if !ok {
                tracing::warn!("malformed avatar record, ignoring");
            }
            ok
        });
        Self {
            storage,
            data_uri,
            pending: None,
            next_token: 0,
        }
    }

    pub fn data_uri(&self) -> Option<&str> {
        self.data_uri.as_deref()
    }

    pub fn has_avatar(&self) -> bool {
        self.data_uri.is_some()
    }

    /// True while a generation request is outstanding.
    pub fn is_generating(&self) -> bool {
        self.pending.is_some()
    }

    /// Store an uploaded image. The bytes are sniffed for PNG/JPEG and
    /// encoded inline.
    pub fn set_from_upload(&mut self, bytes: &[u8]) -> Result<(), AvatarError> {
        let mime = match image::guess_format(bytes) {
            Ok(ImageFormat::Png) => "image/png",
            Ok(ImageFormat::Jpeg) => "image/jpeg",
            _ => return Err(AvatarError::UnsupportedImage),
        };
        let uri = format!("data:{mime};base64,{}", BASE64.encode(bytes));
        self.data_uri = Some(uri);
        self.persist();
        Ok(())
    }

    /// Begin a generation request. Rejected while a prior request is
    /// outstanding or when the prompt is empty. Returns the token the
    /// completion must carry.
    pub fn begin_generation(&mut self, prompt: &str) -> Result<u64, AvatarError> {
        if self.pending.is_some() {
            return Err(AvatarError::GenerationInFlight);
        }
        if prompt.trim().is_empty() {
            return Err(AvatarError::EmptyPrompt);
        }
        self.next_token += 1;
        self.pending = Some(self.next_token);
        Ok(self.next_token)
    }

    /// Record the outcome of a generation request. Completions whose
    /// token no longer matches the outstanding request are discarded.
    pub fn complete_generation(
        &mut self,
        token: u64,
        result: Result<String, String>,
    ) -> GenerationOutcome {
        if self.pending != Some(token) {
            return GenerationOutcome::Stale;
        }
        self.pending = None;
        match result {
            Ok(data_uri) => {
                self.data_uri = Some(data_uri);
                self.persist();
                GenerationOutcome::Updated
            }
            Err(message) => {
                tracing::warn!(error = %message, "avatar generation failed");
                GenerationOutcome::Failed(message)
            }
        }
    }

    /// Remove the stored avatar.
    pub fn clear(&mut self) {
        self.data_uri = None;
        self.storage.remove(AVATAR_KEY);
    }

    fn persist(&mut self) {
        if let Some(uri) = self.data_uri.clone() {
            self.storage.set(AVATAR_KEY, &uri);
        }
    }
}
