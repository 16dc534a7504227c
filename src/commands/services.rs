//! Service factory for building command dependencies.

use std::time::Duration;

use anyhow::Result;
use log::debug;
use reqwest::{
    Client,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};

use crate::{http::HttpClient, notify::TelegramBot, provider::GitHubProvider};

use super::config::{LatestConfig, SendConfig};

/// Upper bound for each request, connect and body included.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Build an HTTP client with optional authentication token
pub fn build_http_client(token: Option<&str>) -> Result<HttpClient> {
    let mut headers = HeaderMap::new();

    if let Some(token) = token {
        let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", token))?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);
        debug!("HTTP client configured with authentication");
    }

    let client = Client::builder()
        .user_agent("relbot-cli")
        .default_headers(headers)
        .timeout(REQUEST_TIMEOUT)
        .build()?;

    Ok(HttpClient::new(client))
}

/// Build the GitHub provider from configuration
pub fn build_provider(config: &LatestConfig) -> Result<GitHubProvider> {
    let http_client = build_http_client(config.token.as_deref())?;
    Ok(GitHubProvider::from_http_client(http_client, &config.api_url))
}

/// Build the Telegram bot from configuration
pub fn build_notifier(config: &SendConfig) -> Result<TelegramBot> {
    // The bot token travels in the URL path, not in a header.
    let http_client = build_http_client(None)?;
    Ok(TelegramBot::new(
        http_client,
        &config.api_url,
        config.bot_token.clone(),
    ))
}
