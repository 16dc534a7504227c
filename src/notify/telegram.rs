//! Telegram Bot API client.

use anyhow::Result;
use async_trait::async_trait;
use log::debug;

use crate::http::HttpClient;

use super::{Notifier, SendMessage, SendOutcome};

/// Public Telegram Bot API.
pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

pub struct TelegramBot {
    http_client: HttpClient,
    api_url: String,
    token: String,
}

impl TelegramBot {
    /// A missing token is kept as an empty string; the service answers with
    /// an error status in that case.
    pub fn new(http_client: HttpClient, api_url: &str, token: Option<String>) -> Self {
        Self {
            http_client,
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.unwrap_or_default(),
        }
    }

    fn send_message_url(&self) -> String {
        format!("{}/bot{}/sendMessage", self.api_url, self.token)
    }
}

#[async_trait]
impl Notifier for TelegramBot {
    #[tracing::instrument(skip(self, message))]
    async fn send_message(&self, message: &SendMessage) -> Result<SendOutcome> {
        debug!(
            "Sending {} bytes to {}/bot***/sendMessage",
            message.text.len(),
            self.api_url
        );

        let response = self
            .http_client
            .post_json(&self.send_message_url(), message)
            .await?;

        if response.is_ok() {
            Ok(SendOutcome::Delivered)
        } else {
            Ok(SendOutcome::Rejected {
                status: response.status,
                body: response.body,
            })
        }
    }
}
