use crate::api::{TestMessageResult, WebhookActionResult, WebhookInfo};
use chrono::{Local, TimeZone};
use colored::Colorize;

/// Visual weight of a banner, mirroring the alert classes of the web
/// dashboard this tool replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Danger,
}

impl Severity {
    fn tag(self) -> &'static str {
        match self {
            Severity::Success => "OK",
            Severity::Info => "INFO",
            Severity::Warning => "WARN",
            Severity::Danger => "ERROR",
        }
    }
}

/// One rendered outcome. Exactly one banner occupies the status region at a
/// time; publishing a new one discards the previous content.
#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub severity: Severity,
    pub title: String,
    pub body: String,
}

impl Banner {
    fn new(severity: Severity, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            severity,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Paint a banner for the terminal. Body lines are indented under the
/// severity-colored heading.
pub fn paint(banner: &Banner, color: bool) -> String {
    let heading = format!("[{}] {}", banner.severity.tag(), banner.title);
    let heading = if color {
        match banner.severity {
            Severity::Success => heading.green().bold().to_string(),
            Severity::Info => heading.cyan().bold().to_string(),
            Severity::Warning => heading.yellow().bold().to_string(),
            Severity::Danger => heading.red().bold().to_string(),
        }
    } else {
        heading
    };
    if banner.body.is_empty() {
        return heading;
    }
    let body = banner
        .body
        .lines()
        .map(|line| format!("  {line}"))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{heading}\n{body}")
}

pub fn render_set_result(result: &WebhookActionResult) -> Banner {
    if result.is_success() {
        // The service reports 'Webhook set to: <url>'; splitting on ': ' is a
        // compatibility shim for that fixed format. A message that does not
        // match shows the literal 'undefined', as the old dashboard did.
        let message = result.message.as_deref().unwrap_or_default();
        let url = message.split(": ").nth(1).unwrap_or("undefined");
        return Banner::new(
            Severity::Success,
            "Webhook set successfully.",
            format!("Webhook URL: {url}"),
        );
    }

    if result.is_https == Some(false) {
        let message = result.message.as_deref().unwrap_or_default();
        let url = result.webhook_url.as_deref().unwrap_or("undefined");
        let body = format!(
            "{message}\n\
             Why this happens: Telegram requires all webhook URLs to use HTTPS.\n\
             Current URL: {url}\n\
             Solutions:\n\
             - Deploy this application to a hosting service that offers HTTPS\n\
             - Use a tunnel service like ngrok to expose your local server via HTTPS\n\
             - For testing only: use getUpdates polling instead of webhooks"
        );
        return Banner::new(Severity::Warning, "HTTPS Required!", body);
    }

    Banner::new(
        Severity::Danger,
        "Error!",
        result.message.clone().unwrap_or_default(),
    )
}

pub fn render_delete_result(result: &WebhookActionResult) -> Banner {
    if result.is_success() {
        Banner::new(Severity::Success, "Webhook deleted successfully.", "")
    } else {
        Banner::new(
            Severity::Danger,
            "Error!",
            result.message.clone().unwrap_or_default(),
        )
    }
}

pub fn render_info(info: &WebhookInfo) -> Banner {
    if !info.is_success() {
        return Banner::new(
            Severity::Danger,
            "Error!",
            info.message.clone().unwrap_or_default(),
        );
    }

    let details = match info.details() {
        Some(details) if details.url().is_some() => details,
        _ => {
            return Banner::new(
                Severity::Warning,
                "No webhook set!",
                "Use 'set' to register a webhook.",
            );
        }
    };

    let body = format!(
        "{:<24}{}\n{:<24}{}\n{:<24}{}\n{:<24}{}\n{:<24}{}",
        "URL",
        details.url().unwrap_or_default(),
        "Has Custom Certificate",
        if details.has_custom_certificate { "Yes" } else { "No" },
        "Pending Update Count",
        details.pending_update_count,
        "Last Error Date",
        format_error_date(details.last_error_date),
        "Last Error Message",
        details.last_error_message.as_deref().unwrap_or("None"),
    );
    Banner::new(Severity::Info, "Webhook Information", body)
}

pub fn render_test_result(result: &TestMessageResult) -> Banner {
    if result.is_success() {
        let body = match &result.response {
            Some(response) if !response.is_null() => {
                match response.get("text").and_then(|text| text.as_str()) {
                    Some(text) if !text.is_empty() => text.to_string(),
                    _ => serde_json::to_string_pretty(response)
                        .unwrap_or_else(|_| response.to_string()),
                }
            }
            _ => "No response content".to_string(),
        };
        Banner::new(Severity::Success, "Message processed successfully", body)
    } else {
        Banner::new(
            Severity::Danger,
            "Error:",
            result
                .message
                .clone()
                .unwrap_or_else(|| "Unknown error occurred".to_string()),
        )
    }
}

/// Banner for failures that happen before a structured response is obtained
/// (connection refused, malformed JSON). Used by every action.
pub fn render_transport_error(err: &anyhow::Error) -> Banner {
    Banner::new(Severity::Danger, "Error!", format!("{err:#}"))
}

fn format_error_date(secs: Option<i64>) -> String {
    secs.and_then(|secs| Local.timestamp_opt(secs, 0).single())
        .map(|date| date.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "None".to_string())
}
