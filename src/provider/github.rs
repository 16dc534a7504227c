//! GitHub provider implementation.

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
#[cfg(test)]
use reqwest::Client;

use crate::http::HttpClient;

use super::{Provider, Release, ReleaseAsset, RepoId, version_from_tag};

/// Public GitHub REST API.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// GitHub API response types (internal).
mod api {
    use serde::Deserialize;

    #[derive(Deserialize, Debug)]
    pub struct Release {
        pub tag_name: String,
        #[serde(default)]
        pub name: Option<String>,
        #[serde(default)]
        pub published_at: Option<String>,
        #[serde(default)]
        pub assets: Option<Vec<Asset>>,
    }

    #[derive(Deserialize, Debug)]
    pub struct Asset {
        pub name: String,
        pub size: u64,
        pub browser_download_url: String,
    }
}

/// GitHub provider implementation.
pub struct GitHubProvider {
    http_client: HttpClient,
    api_url: String,
}

impl GitHubProvider {
    /// Create a new GitHub provider with default API URL.
    #[cfg(test)]
    pub fn new(client: Client) -> Self {
        Self::with_api_url(client, DEFAULT_API_URL)
    }

    /// Create a new GitHub provider with custom API URL.
    #[cfg(test)]
    pub fn with_api_url(client: Client, api_url: &str) -> Self {
        Self::from_http_client(HttpClient::new(client), api_url)
    }

    /// Create from an existing HttpClient.
    pub fn from_http_client(http_client: HttpClient, api_url: &str) -> Self {
        Self {
            http_client,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    fn latest_release_url(&self, repo: &RepoId) -> String {
        format!(
            "{}/repos/{}/{}/releases/latest",
            self.api_url, repo.owner, repo.repo
        )
    }
}

#[async_trait]
impl Provider for GitHubProvider {
    #[tracing::instrument(skip(self))]
    async fn get_latest_release(&self, repo: &RepoId) -> Result<Release> {
        let url = self.latest_release_url(repo);
        debug!("Fetching latest release of {} from {}...", repo, url);

        let release: api::Release = self
            .http_client
            .get_json(&url)
            .await
            .with_context(|| format!("Failed to fetch latest release of {}", repo))?;

        Ok(release.into())
    }
}

impl From<api::Release> for Release {
    fn from(r: api::Release) -> Self {
        Release {
            version: version_from_tag(&r.tag_name).to_string(),
            tag_name: r.tag_name,
            name: r.name.unwrap_or_default(),
            published_at: r.published_at.unwrap_or_default(),
            assets: r
                .assets
                .unwrap_or_default()
                .into_iter()
                .map(|a| a.into())
                .collect(),
        }
    }
}

impl From<api::Asset> for ReleaseAsset {
    fn from(a: api::Asset) -> Self {
        ReleaseAsset {
            name: a.name,
            download_url: a.browser_download_url,
            size: a.size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo() -> RepoId {
        RepoId::new("test-owner", "test-repo")
    }

    #[test]
    fn test_custom_api_url_drops_trailing_slash() {
        let custom = GitHubProvider::with_api_url(Client::new(), "https://custom.api/");
        assert_eq!(
            custom.latest_release_url(&repo()),
            "https://custom.api/repos/test-owner/test-repo/releases/latest"
        );
    }

    #[test]
    fn test_latest_release_url() {
        let provider = GitHubProvider::new(Client::new());
        assert_eq!(
            provider.latest_release_url(&repo()),
            "https://api.github.com/repos/test-owner/test-repo/releases/latest"
        );
    }

    #[test]
    fn test_release_conversion() {
        let api_release = api::Release {
            tag_name: "v1.0.0".into(),
            name: Some("Release 1.0".into()),
            published_at: Some("2024-01-01T00:00:00Z".into()),
            assets: Some(vec![api::Asset {
                name: "tool-linux-amd64".into(),
                size: 1024,
                browser_download_url: "https://example.com/tool-linux-amd64".into(),
            }]),
        };

        let release: Release = api_release.into();
        assert_eq!(release.tag_name, "v1.0.0");
        assert_eq!(release.version, "1.0.0");
        assert_eq!(release.name, "Release 1.0");
        assert_eq!(release.published_at, "2024-01-01T00:00:00Z");
        assert_eq!(
            release.assets,
            vec![ReleaseAsset {
                name: "tool-linux-amd64".into(),
                download_url: "https://example.com/tool-linux-amd64".into(),
                size: 1024,
            }]
        );
    }

    #[tokio::test]
    async fn test_get_latest_release() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/repos/test-owner/test-repo/releases/latest")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "tag_name": "v1.2.3",
                    "name": "Spring release",
                    "published_at": "2024-03-01T12:00:00Z",
                    "prerelease": false,
                    "assets": [
                        {
                            "name": "app-x86_64.zip",
                            "size": 2048,
                            "browser_download_url": "https://example.com/app-x86_64.zip"
                        },
                        {
                            "name": "app-aarch64.tar.gz",
                            "size": 1024,
                            "browser_download_url": "https://example.com/app-aarch64.tar.gz"
                        }
                    ]
                }"#,
            )
            .create_async()
            .await;

        let provider = GitHubProvider::with_api_url(Client::new(), &url);
        let release = provider.get_latest_release(&repo()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(release.tag_name, "v1.2.3");
        assert_eq!(release.version, "1.2.3");
        assert_eq!(release.name, "Spring release");
        assert_eq!(release.published_at, "2024-03-01T12:00:00Z");
        let names: Vec<&str> = release.assets.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["app-x86_64.zip", "app-aarch64.tar.gz"]);
        assert_eq!(release.assets[0].size, 2048);
    }

    #[tokio::test]
    async fn test_get_latest_release_minimal() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/repos/test-owner/test-repo/releases/latest")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{ "tag_name": "2024.05", "name": null, "published_at": null }"#)
            .create_async()
            .await;

        let provider = GitHubProvider::with_api_url(Client::new(), &url);
        let release = provider.get_latest_release(&repo()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(
            release,
            Release {
                tag_name: "2024.05".into(),
                version: "2024.05".into(),
                name: String::new(),
                published_at: String::new(),
                assets: vec![],
            }
        );
    }

    #[tokio::test]
    async fn test_get_latest_release_not_found() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/repos/test-owner/test-repo/releases/latest")
            .with_status(404)
            .with_body(r#"{"message": "Not Found"}"#)
            .create_async()
            .await;

        let provider = GitHubProvider::with_api_url(Client::new(), &url);
        let err = provider.get_latest_release(&repo()).await.unwrap_err();

        mock.assert_async().await;
        let msg = format!("{:#}", err);
        assert!(msg.contains("test-owner/test-repo"));
        assert!(msg.contains("404"));
    }

    #[tokio::test]
    async fn test_get_latest_release_missing_tag_is_error() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let _mock = server
            .mock("GET", "/repos/test-owner/test-repo/releases/latest")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{ "name": "untagged" }"#)
            .create_async()
            .await;

        let provider = GitHubProvider::with_api_url(Client::new(), &url);
        assert!(provider.get_latest_release(&repo()).await.is_err());
    }

    #[tokio::test]
    async fn test_free_get_latest_release_on_404_is_none() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/repos/nobody/nothing/releases/latest")
            .with_status(404)
            .create_async()
            .await;

        let provider = GitHubProvider::with_api_url(Client::new(), &url);
        let release = crate::provider::get_latest_release(&provider, "nobody", "nothing").await;

        mock.assert_async().await;
        assert!(release.is_none());
    }
}
