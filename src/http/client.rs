//! Thin JSON-over-HTTP wrapper around a shared reqwest `Client`.

use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Status and body of a response whose status is left for the caller to judge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// HTTP client for the single request each command makes.
///
/// Requests are sent exactly once. Timeouts and default headers come from
/// the wrapped `Client`.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Returns a reference to the underlying reqwest Client.
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Performs a GET request and deserializes the JSON response.
    /// Any non-2xx status is an error.
    #[tracing::instrument(skip(self))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET JSON from {}...", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to send request")?;

        let result = response
            .error_for_status()?
            .json::<T>()
            .await
            .context("Failed to parse JSON response")?;

        Ok(result)
    }

    /// Performs a POST request with a JSON body.
    ///
    /// Only transport failures are errors; the status and raw body are
    /// returned whatever the status is. Errors never carry the URL, which
    /// may hold credentials.
    #[tracing::instrument(skip(self, url, body))]
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<RawResponse> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to send request")?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to read response body")?;
        debug!("POST answered with status {}", status);

        Ok(RawResponse { status, body })
    }
}
