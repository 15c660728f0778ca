//! Shared wire types used across all domain modules.

use crate::error::SdkError;
use serde::{Deserialize, Serialize};

// ─── BaseResponse ────────────────────────────────────────────────────────────

/// Generic `{ success, message, data }` envelope returned by the JSON endpoints.
///
/// `T` is the endpoint-specific payload. Call sites that don't care about the
/// shape can leave it as the default `serde_json::Value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseResponse<T = serde_json::Value> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: T,
}

impl<T> BaseResponse<T> {
    /// Unwrap the payload, turning `success: false` into [`SdkError::Api`].
    pub fn into_data(self) -> Result<T, SdkError> {
        if self.success {
            Ok(self.data)
        } else {
            Err(SdkError::Api {
                message: self.message,
            })
        }
    }
}
