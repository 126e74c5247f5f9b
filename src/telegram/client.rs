//! Telegram Bot API client.

use super::types::{Update, UpdatesEnvelope};
use super::{MessageSink, SinkError};
use crate::config::TelegramConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, instrument};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
/// Slack on top of the server-side long-poll wait so the HTTP call outlives it.
const POLL_SLACK: Duration = Duration::from_secs(10);

/// Client for the Bot API: outbound messages and update polling.
pub struct TelegramClient {
    http: Client,
    api_url: String,
    token: String,
}

impl TelegramClient {
    /// Create a new Telegram client from configuration.
    pub fn new(config: &TelegramConfig) -> Result<Self, SinkError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            token: config.bot_token.clone(),
        })
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_url, self.token, method)
    }

    /// Fetch pending updates, waiting server-side up to `timeout_secs`.
    #[instrument(skip(self))]
    pub async fn get_updates(
        &self,
        offset: i64,
        timeout_secs: u64,
    ) -> Result<Vec<Update>, SinkError> {
        let response = self
            .http
            .get(self.method_url("getUpdates"))
            .query(&[("offset", offset.to_string()), ("timeout", timeout_secs.to_string())])
            .timeout(Duration::from_secs(timeout_secs) + POLL_SLACK)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SinkError::Status(status));
        }

        let envelope: UpdatesEnvelope = response.json().await?;
        debug!(count = envelope.result.len(), "Fetched updates");
        Ok(envelope.result)
    }
}

#[async_trait]
impl MessageSink for TelegramClient {
    /// POST the message with HTML parse mode; any status other than 200 is
    /// a delivery failure.
    #[instrument(skip(self, text))]
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), SinkError> {
        let response = self
            .http
            .post(self.method_url("sendMessage"))
            .json(&json!({
                "chat_id": chat_id,
                "text": text,
                "parse_mode": "HTML",
            }))
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(SinkError::Status(status));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> TelegramClient {
        TelegramClient::new(&TelegramConfig {
            bot_token: "test-token".to_string(),
            api_url: server.uri(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_send_message_posts_html_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/bottest-token/sendMessage"))
            .and(body_json(json!({
                "chat_id": 42,
                "text": "hello",
                "parse_mode": "HTML",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        test_client(&server).send_message(42, "hello").await.unwrap();
    }

    #[tokio::test]
    async fn test_send_message_non_200_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/bottest-token/sendMessage"))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({"ok": false})))
            .mount(&server)
            .await;

        let err = test_client(&server).send_message(42, "hello").await.unwrap_err();
        assert!(matches!(err, SinkError::Status(status) if status.as_u16() == 403));
    }

    #[tokio::test]
    async fn test_get_updates_parses_batch() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/bottest-token/getUpdates"))
            .and(query_param("offset", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ok": true,
                "result": [
                    {"update_id": 5, "message": {"chat": {"id": 1}, "text": "/help"}},
                    {"update_id": 6}
                ]
            })))
            .mount(&server)
            .await;

        let updates = test_client(&server).get_updates(5, 0).await.unwrap();
        assert_eq!(updates.len(), 2);
        assert_eq!(updates[0].update_id, 5);
        assert!(updates[1].message.is_none());
    }
}
