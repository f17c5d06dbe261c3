use crate::api::{TestMessageRequest, DEFAULT_TEST_CHAT_ID};
use crate::client::DashboardClient;
use crate::render;
use crate::status::StatusRegion;
use anyhow::{bail, Result};
use chrono::Utc;
use log::warn;
use std::sync::atomic::{AtomicBool, Ordering};

/// The four dashboard actions, each with its own busy flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SetWebhook,
    WebhookInfo,
    DeleteWebhook,
    TestMessage,
}

impl Action {
    fn index(self) -> usize {
        match self {
            Action::SetWebhook => 0,
            Action::WebhookInfo => 1,
            Action::DeleteWebhook => 2,
            Action::TestMessage => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Action::SetWebhook => "set webhook",
            Action::WebhookInfo => "webhook info",
            Action::DeleteWebhook => "delete webhook",
            Action::TestMessage => "test message",
        }
    }
}

/// What to send through the bot: one of the dashboard's preset messages or
/// free text. Free text must be non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestMessage {
    Start,
    Help,
    Greeting,
    Custom(String),
}

impl TestMessage {
    pub fn text(&self) -> Result<String> {
        match self {
            TestMessage::Start => Ok("/start".to_string()),
            TestMessage::Help => Ok("/help".to_string()),
            TestMessage::Greeting => Ok("Hello, bot!".to_string()),
            TestMessage::Custom(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    bail!("Please enter a custom message");
                }
                Ok(trimmed.to_string())
            }
        }
    }
}

/// Drives the four actions against the service and publishes every outcome
/// into the shared status region.
///
/// Each action holds its busy flag for exactly the in-flight window, the
/// terminal analogue of a disabled button: a trigger while the flag is held
/// is rejected, and the flag is released on every exit path via a drop
/// guard. Flags are per action, so two different actions can be in flight
/// at once, racing for the status region.
pub struct DashboardController {
    client: DashboardClient,
    status: StatusRegion,
    busy: [AtomicBool; 4],
}

impl DashboardController {
    pub fn new(client: DashboardClient) -> Self {
        Self {
            client,
            status: StatusRegion::new(),
            busy: [
                AtomicBool::new(false),
                AtomicBool::new(false),
                AtomicBool::new(false),
                AtomicBool::new(false),
            ],
        }
    }

    pub fn status(&self) -> &StatusRegion {
        &self.status
    }

    pub fn is_busy(&self, action: Action) -> bool {
        self.busy[action.index()].load(Ordering::SeqCst)
    }

    /// Startup fetch: populate the region once without user interaction,
    /// the equivalent of the old dashboard's simulated click on load.
    pub async fn init(&self) {
        self.get_webhook_info().await;
    }

    /// Returns false when the action was rejected because it is already in
    /// flight; the pending request still completes and still publishes.
    pub async fn set_webhook(&self) -> bool {
        let Some(_guard) = self.claim(Action::SetWebhook) else {
            return false;
        };
        let banner = match self.client.set_webhook().await {
            Ok(result) => render::render_set_result(&result),
            Err(err) => render::render_transport_error(&err),
        };
        self.status.publish(banner);
        true
    }

    pub async fn get_webhook_info(&self) -> bool {
        let Some(_guard) = self.claim(Action::WebhookInfo) else {
            return false;
        };
        let banner = match self.client.webhook_info().await {
            Ok(info) => render::render_info(&info),
            Err(err) => render::render_transport_error(&err),
        };
        self.status.publish(banner);
        true
    }

    /// Confirmation happens at the call site; reaching this method means the
    /// user already agreed (or confirmation was bypassed).
    pub async fn delete_webhook(&self) -> bool {
        let Some(_guard) = self.claim(Action::DeleteWebhook) else {
            return false;
        };
        let banner = match self.client.delete_webhook().await {
            Ok(result) => render::render_delete_result(&result),
            Err(err) => render::render_transport_error(&err),
        };
        self.status.publish(banner);
        true
    }

    /// A blank chat id falls back to the shared test id. Validation runs
    /// before the busy flag is claimed and before any network call.
    pub async fn send_test_message(&self, chat_id: &str, message: &TestMessage) -> Result<bool> {
        let text = message.text()?;
        let Some(_guard) = self.claim(Action::TestMessage) else {
            return Ok(false);
        };
        let chat_id = match chat_id.trim() {
            "" => DEFAULT_TEST_CHAT_ID,
            trimmed => trimmed,
        };
        let request = TestMessageRequest {
            chat_id: chat_id.to_string(),
            message: text,
            date: Utc::now().to_rfc3339(),
        };
        let banner = match self.client.send_test_message(&request).await {
            Ok(result) => render::render_test_result(&result),
            Err(err) => render::render_transport_error(&err),
        };
        self.status.publish(banner);
        Ok(true)
    }

    fn claim(&self, action: Action) -> Option<BusyGuard<'_>> {
        let flag = &self.busy[action.index()];
        if flag
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            Some(BusyGuard { flag })
        } else {
            warn!("{} already in flight, trigger ignored", action.label());
            None
        }
    }
}

struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}
