//! Webhook request body and its parsed form.

use std::sync::OnceLock;

use paperdrop_core::errors::{PipelineError, PipelineResult};
use regex::Regex;
use serde::{Deserialize, Deserializer};

/// Raw webhook body. Every field is optional and string-typed; JSON booleans
/// and numbers are accepted and rendered to text.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WebhookRequest {
    #[serde(deserialize_with = "flex_string")]
    pub text: Option<String>,
    #[serde(deserialize_with = "flex_string")]
    pub prefix: Option<String>,
    #[serde(deserialize_with = "flex_string")]
    pub compress: Option<String>,
    #[serde(deserialize_with = "flex_string")]
    pub manage: Option<String>,
    #[serde(deserialize_with = "flex_string")]
    pub archive: Option<String>,
    #[serde(deserialize_with = "flex_string")]
    pub rm_dir: Option<String>,
}

impl WebhookRequest {
    /// Parse a body leniently: anything that is not a JSON object of the
    /// expected shape becomes the empty request.
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }
}

fn flex_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Bool(b)) => Some(b.to_string()),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// A validated ingestion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestRequest {
    pub url: String,
    /// Trimmed; empty means no prefix.
    pub prefix: String,
    pub compress: bool,
    pub manage: bool,
    pub archive: bool,
    /// Remote directory override; `None` uses the configured default.
    pub rm_dir: Option<String>,
}

impl IngestRequest {
    /// Build from a webhook body. Fails with `NoUrl` when the message text
    /// holds no `http(s)://` token.
    pub fn from_webhook(body: &WebhookRequest) -> PipelineResult<Self> {
        let url = body
            .text
            .as_deref()
            .and_then(extract_url)
            .ok_or(PipelineError::NoUrl)?;
        Ok(Self {
            url: url.to_string(),
            prefix: body.prefix.as_deref().unwrap_or_default().trim().to_string(),
            compress: parse_flag(body.compress.as_deref()),
            manage: parse_flag(body.manage.as_deref()),
            archive: parse_flag(body.archive.as_deref()),
            rm_dir: body
                .rm_dir
                .as_deref()
                .map(str::trim)
                .filter(|dir| !dir.is_empty())
                .map(str::to_string),
        })
    }
}

fn url_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"https?://\S+").expect("url pattern is a valid regex"))
}

/// First `http://` or `https://` token in `text`, up to the next whitespace.
pub fn extract_url(text: &str) -> Option<&str> {
    url_pattern().find(text).map(|m| m.as_str())
}

/// Boolean-ish flag: `true`, `1` or `yes` in any case; anything else is false.
pub fn parse_flag(value: Option<&str>) -> bool {
    value.is_some_and(|v| {
        v.eq_ignore_ascii_case("true") || v == "1" || v.eq_ignore_ascii_case("yes")
    })
}
