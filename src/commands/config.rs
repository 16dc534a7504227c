//! Configuration for both commands.
//!
//! Values come from CLI overrides first, then the process environment via
//! `Runtime`, then built-in defaults.

use std::path::PathBuf;

use crate::runtime::Runtime;
use crate::{notify, provider};

/// Default message file, produced by the upstream report step.
pub const MESSAGE_FILE: &str = "telegram_msg.txt";

/// Configuration for fetching the latest release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestConfig {
    /// GitHub API base URL
    pub api_url: String,
    /// GitHub token for authentication (from GITHUB_TOKEN env var)
    pub token: Option<String>,
}

impl LatestConfig {
    pub fn load<R: Runtime + ?Sized>(runtime: &R, api_url: Option<String>) -> Self {
        let token = runtime.env_var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty());
        Self {
            api_url: api_url.unwrap_or_else(|| provider::DEFAULT_API_URL.to_string()),
            token,
        }
    }
}

/// Configuration for sending the pre-generated message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendConfig {
    /// Telegram Bot API base URL
    pub api_url: String,
    /// TELEGRAM_BOT_TOKEN, not validated
    pub bot_token: Option<String>,
    /// TELEGRAM_CHAT_ID, not validated
    pub chat_id: Option<String>,
    /// File holding the message text
    pub message_file: PathBuf,
}

impl SendConfig {
    pub fn load<R: Runtime + ?Sized>(
        runtime: &R,
        api_url: Option<String>,
        message_file: Option<PathBuf>,
    ) -> Self {
        Self {
            api_url: api_url.unwrap_or_else(|| notify::DEFAULT_API_URL.to_string()),
            bot_token: runtime.env_var("TELEGRAM_BOT_TOKEN").ok(),
            chat_id: runtime.env_var("TELEGRAM_CHAT_ID").ok(),
            message_file: message_file.unwrap_or_else(|| PathBuf::from(MESSAGE_FILE)),
        }
    }
}
