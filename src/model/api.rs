use serde::{Deserialize, Serialize};

/// Envelope wrapping every successful response body.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub status_code: u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn new(status_code: u16, message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            success: true,
            status_code,
            message: message.into(),
            data,
        }
    }
}

/// Envelope wrapping every error response body.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDto {
    pub success: bool,
    pub status_code: u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_details: Option<ErrorDetailsDto>,
}

impl ErrorDto {
    pub fn new(
        status_code: u16,
        message: impl Into<String>,
        error_details: Option<ErrorDetailsDto>,
    ) -> Self {
        Self {
            success: false,
            status_code,
            message: message.into(),
            error_details,
        }
    }
}

/// Extra context attached to an error: either the offending request field or a hint.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum ErrorDetailsDto {
    Field { field: String, message: String },
    Message(String),
}

/// Request body carrying a single resource id, used by booking, cancellation and
/// role-change endpoints.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct IdDto {
    #[serde(default)]
    pub id: Option<String>,
}
