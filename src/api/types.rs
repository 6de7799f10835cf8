//! API request and response types
//!
//! Framework-agnostic; the same shapes serve `tiny_http` today and any
//! other adapter later.

use serde::{Deserialize, Serialize};

use super::error::ApiError;

/// Standard response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Response data, present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error details, present on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorData>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Wrap successful response data.
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Wrap an error.
    #[must_use]
    pub fn failure(error: &ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiErrorData {
                code: error.code.as_str().to_string(),
                message: error.message.clone(),
            }),
        }
    }
}

/// Serialized error details
#[derive(Debug, Serialize)]
pub struct ApiErrorData {
    /// Stable error code string
    pub code: String,
    /// Human-readable message
    pub message: String,
}

/// Request body for a legality check
#[derive(Debug, Deserialize)]
pub struct LegalityRequest {
    /// Base64 encoded entity data
    pub pokemon: String,
    /// Generation token, mapped the same way as the CLI flag
    pub generation: String,
}

/// Request body for auto-legalization
#[derive(Debug, Deserialize)]
pub struct LegalizeRequest {
    /// Base64 encoded entity data
    pub pokemon: String,
    /// Generation token, mapped the same way as the CLI flag
    pub generation: String,
    /// Target version token; required, unlike the generation it is not
    /// defaulted when absent
    #[serde(default)]
    pub version: Option<String>,
}
