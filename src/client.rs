use crate::api::{TestMessageRequest, TestMessageResult, WebhookActionResult, WebhookInfo};
use anyhow::{Context, Result};
use log::debug;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

/// HTTP client for the four dashboard endpoints of the bot service.
///
/// Application failures arrive as JSON bodies with non-2xx statuses, so the
/// response is parsed regardless of status code; only transport problems
/// (connection failure, non-JSON body) surface as errors. No retries and no
/// client-side timeout: a hung request keeps its action busy until the
/// transport itself gives up.
#[derive(Clone)]
pub struct DashboardClient {
    client: Client,
    base: Url,
}

impl DashboardClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url).context("invalid dashboard base URL")?;
        Ok(Self {
            client: Client::new(),
            base,
        })
    }

    pub async fn set_webhook(&self) -> Result<WebhookActionResult> {
        self.get_json("/set_webhook").await
    }

    pub async fn webhook_info(&self) -> Result<WebhookInfo> {
        self.get_json("/webhook_info").await
    }

    pub async fn delete_webhook(&self) -> Result<WebhookActionResult> {
        self.get_json("/delete_webhook").await
    }

    pub async fn send_test_message(
        &self,
        request: &TestMessageRequest,
    ) -> Result<TestMessageResult> {
        let url = self.endpoint("/test_bot");
        debug!("POST {url}");
        let resp = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .context("test_bot request failed")?;
        resp.json()
            .await
            .context("failed to parse test_bot response")
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path);
        debug!("GET {url}");
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("{path} request failed"))?;
        resp.json()
            .await
            .with_context(|| format!("failed to parse {path} response"))
    }

    fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base.clone();
        url.set_path(path);
        url.set_query(None);
        url
    }
}
