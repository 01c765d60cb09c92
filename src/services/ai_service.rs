use thiserror::Error;

use crate::models::ImagePayload;

/// One instruction for the model, optionally paired with an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRequest {
    pub prompt: String,
    pub image: Option<ImagePayload>,
}

impl ModelRequest {
    pub fn text(prompt: String) -> Self {
        Self {
            prompt,
            image: None,
        }
    }

    pub fn with_image(prompt: String, image: ImagePayload) -> Self {
        Self {
            prompt,
            image: Some(image),
        }
    }
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{message} (HTTP {status})")]
    Rejected { status: u16, message: String },
    #[error("could not decode model response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("model returned no text")]
    EmptyResponse,
}

impl ModelError {
    /// Endpoint rejected the call because the configured key is wrong.
    pub fn is_invalid_credential(&self) -> bool {
        self.to_string().contains("API key not valid")
    }
}

/// Trait for generative model backends (Gemini, or a mock in tests)
#[async_trait::async_trait]
pub trait ModelClient: Send + Sync {
    /// Sends the request and returns the model's raw reply text.
    async fn generate(&self, request: ModelRequest) -> Result<String, ModelError>;
}
