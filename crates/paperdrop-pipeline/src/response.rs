//! Webhook response body.

use paperdrop_core::errors::PipelineError;
use serde::Serialize;

/// `{"status":"ok","uploaded":..}` or `{"status":"error","message":..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploaded: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip)]
    http_status: u16,
}

impl WebhookResponse {
    pub fn ok(uploaded: impl Into<String>) -> Self {
        Self {
            status: "ok",
            uploaded: Some(uploaded.into()),
            message: None,
            http_status: 200,
        }
    }

    /// 400 for request errors, 500 for everything downstream. The message is
    /// the error's own text.
    pub fn from_error(error: &PipelineError) -> Self {
        Self {
            status: "error",
            uploaded: None,
            message: Some(error.to_string()),
            http_status: if error.is_input_error() { 400 } else { 500 },
        }
    }

    /// 500 for failures outside the pipeline itself, such as a worker panic.
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            uploaded: None,
            message: Some(message.into()),
            http_status: 500,
        }
    }

    pub fn http_status(&self) -> u16 {
        self.http_status
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
