use anyhow::Result;
use log::debug;

use crate::{
    asset::{Pattern, find_asset_by_pattern},
    provider::{Provider, Release, get_latest_release},
    runtime::Runtime,
};

use super::config::LatestConfig;
use super::services::build_provider;

/// Print the latest release of `owner/repo`, or the asset matching `patterns`.
///
/// Returns the process exit code: 1 when the fetch fails or when patterns
/// were given and nothing matched, 0 otherwise.
#[tracing::instrument(skip(runtime, api_url))]
pub async fn latest_release<R: Runtime>(
    runtime: &R,
    owner: &str,
    repo: &str,
    patterns: Vec<String>,
    api_url: Option<String>,
) -> Result<i32> {
    let config = LatestConfig::load(runtime, api_url);
    debug!("Using API URL: {}", config.api_url);
    let provider = build_provider(&config)?;
    Ok(run(&provider, owner, repo, patterns).await)
}

#[tracing::instrument(skip(provider))]
pub async fn run<P: Provider + ?Sized>(
    provider: &P,
    owner: &str,
    repo: &str,
    patterns: Vec<String>,
) -> i32 {
    let Some(release) = get_latest_release(provider, owner, repo).await else {
        return 1;
    };

    println!("Latest version: {}", release.tag_name);

    match pattern_from_args(patterns) {
        Some(pattern) => print_matching_asset(&release, pattern),
        None => {
            print_assets(&release);
            0
        }
    }
}

/// No patterns means "list everything"; one is a plain substring; more are
/// alternatives. Empty arguments count as absent.
fn pattern_from_args(mut patterns: Vec<String>) -> Option<Pattern> {
    patterns.retain(|p| !p.is_empty());
    match patterns.len() {
        0 => None,
        1 => patterns.pop().map(Pattern::One),
        _ => Some(Pattern::Any(patterns)),
    }
}

fn print_matching_asset(release: &Release, pattern: Pattern) -> i32 {
    match find_asset_by_pattern(&release.assets, pattern.clone()) {
        Some(asset) => {
            println!("Asset: {}", asset.name);
            println!("Download URL: {}", asset.download_url);
            0
        }
        None => {
            eprintln!("No asset matching pattern '{}' found", pattern);
            1
        }
    }
}

fn print_assets(release: &Release) {
    for asset in &release.assets {
        println!("- {}: {}", asset.name, asset.download_url);
    }
}
