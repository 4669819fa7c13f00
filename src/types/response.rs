use serde::Serialize;
use utoipa::ToSchema;

/// Message-only response body, also used for error payloads
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable message
    #[schema(example = "Earthquake 9999 not found.")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
