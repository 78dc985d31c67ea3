//! JSON envelope shared by every response body.

use serde::{Deserialize, Serialize};

/// Version tag stamped on every envelope.
pub const API_VERSION: &str = "v1";

/// `{"success": <message>, "data": <payload>, "api_version": "v1"}`.
///
/// `success` carries the human-readable message for both outcomes; `data`
/// is omitted when there is no payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiResponse<T> {
    #[serde(rename = "success")]
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn with_data(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
            api_version: Some(API_VERSION.to_string()),
        }
    }
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
            api_version: Some(API_VERSION.to_string()),
        }
    }
}
