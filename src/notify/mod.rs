//! Chat notification delivery.

mod telegram;

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

pub use telegram::{DEFAULT_API_URL, TelegramBot};

/// How the chat service should render the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum ParseMode {
    /// Legacy Markdown, not MarkdownV2.
    #[default]
    Markdown,
}

/// Body of a `sendMessage` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendMessage {
    /// Sent as `null` when unset; the service rejects it.
    pub chat_id: Option<String>,
    pub text: String,
    pub parse_mode: ParseMode,
}

impl SendMessage {
    pub fn markdown(chat_id: Option<String>, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            text: text.into(),
            parse_mode: ParseMode::Markdown,
        }
    }
}

/// Result of a delivery attempt that reached the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    Delivered,
    Rejected { status: u16, body: String },
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver one message. Transport failures are errors; any answer from
    /// the service is an outcome.
    async fn send_message(&self, message: &SendMessage) -> Result<SendOutcome>;
}
