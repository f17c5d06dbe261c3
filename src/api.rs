use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The only `status` value the service treats as success; everything else
/// (including `"warning"`) takes the failure path.
pub const STATUS_SUCCESS: &str = "success";

/// Chat id the service substitutes when none is supplied.
pub const DEFAULT_TEST_CHAT_ID: &str = "123456789";

/// Returned by `/set_webhook` and `/delete_webhook`.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookActionResult {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub is_https: Option<bool>,
    #[serde(default)]
    pub webhook_url: Option<String>,
}

impl WebhookActionResult {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

/// Returned by `/webhook_info`. The envelope mirrors the platform API
/// passthrough: the service wraps the upstream `getWebhookInfo` reply.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookInfo {
    pub status: String,
    #[serde(default)]
    pub webhook_info: Option<WebhookInfoEnvelope>,
    #[serde(default)]
    pub message: Option<String>,
}

impl WebhookInfo {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }

    pub fn details(&self) -> Option<&WebhookDetails> {
        self.webhook_info.as_ref().map(|envelope| &envelope.result)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebhookInfoEnvelope {
    pub result: WebhookDetails,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebhookDetails {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub has_custom_certificate: bool,
    #[serde(default)]
    pub pending_update_count: u64,
    /// Unix seconds of the last delivery failure, if any.
    #[serde(default)]
    pub last_error_date: Option<i64>,
    #[serde(default)]
    pub last_error_message: Option<String>,
}

impl WebhookDetails {
    /// The registered URL; the platform reports an empty string when no
    /// webhook is set, which counts as absent.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.is_empty())
    }
}

/// Simulated-message payload POSTed to `/test_bot`.
#[derive(Debug, Clone, Serialize)]
pub struct TestMessageRequest {
    pub chat_id: String,
    pub message: String,
    /// RFC 3339 timestamp taken at submission time.
    pub date: String,
}

/// Returned by `/test_bot`. `response` is left untyped: the bot echoes an
/// arbitrary object and only `text` has dedicated rendering.
#[derive(Debug, Clone, Deserialize)]
pub struct TestMessageResult {
    pub status: String,
    #[serde(default)]
    pub response: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl TestMessageResult {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}
