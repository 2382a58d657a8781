//! The `{message}` envelope used by confirmation and error responses.

use serde::{Deserialize, Serialize};

/// Plain message envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
