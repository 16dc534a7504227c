//! Asset selection by file-name pattern.

use std::fmt;

use crate::provider::ReleaseAsset;

/// One substring, or an ordered list of alternatives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    One(String),
    Any(Vec<String>),
}

impl Pattern {
    /// The pattern as an ordered list of substrings.
    pub fn as_slice(&self) -> &[String] {
        match self {
            Pattern::One(p) => std::slice::from_ref(p),
            Pattern::Any(ps) => ps,
        }
    }

    fn matches(&self, name: &str) -> bool {
        self.as_slice().iter().any(|p| name.contains(p.as_str()))
    }
}

impl From<&str> for Pattern {
    fn from(p: &str) -> Self {
        Pattern::One(p.to_string())
    }
}

impl From<String> for Pattern {
    fn from(p: String) -> Self {
        Pattern::One(p)
    }
}

impl From<Vec<String>> for Pattern {
    fn from(ps: Vec<String>) -> Self {
        Pattern::Any(ps)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_slice().join(", "))
    }
}

/// Returns the first asset, in slice order, whose name contains any of the
/// pattern's substrings. Matching is case-sensitive.
pub fn find_asset_by_pattern<'a>(
    assets: &'a [ReleaseAsset],
    pattern: impl Into<Pattern>,
) -> Option<&'a ReleaseAsset> {
    let pattern = pattern.into();
    assets.iter().find(|asset| pattern.matches(&asset.name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(name: &str) -> ReleaseAsset {
        ReleaseAsset {
            name: name.to_string(),
            download_url: format!("https://example.com/download/{}", name),
            size: 100,
        }
    }

    fn names(list: &[&str]) -> Vec<ReleaseAsset> {
        list.iter().map(|n| asset(n)).collect()
    }

    #[test]
    fn test_find_single_pattern() {
        let assets = names(&["app-x86_64.zip", "app-aarch64.tar.gz"]);
        let found = find_asset_by_pattern(&assets, "aarch64").unwrap();
        assert_eq!(found.name, "app-aarch64.tar.gz");
        assert_eq!(
            found.download_url,
            "https://example.com/download/app-aarch64.tar.gz"
        );
    }

    #[test]
    fn test_asset_order_wins_over_pattern_order() {
        let assets = names(&["tool-linux.tar.gz", "tool-macos.zip"]);
        let pattern = vec!["macos".to_string(), "linux".to_string()];
        let found = find_asset_by_pattern(&assets, pattern).unwrap();
        assert_eq!(found.name, "tool-linux.tar.gz");
    }

    #[test]
    fn test_later_pattern_matches_when_earlier_misses() {
        let assets = names(&["tool.exe", "tool-arm64.deb"]);
        let pattern = vec!["aarch64".to_string(), "arm64".to_string()];
        let found = find_asset_by_pattern(&assets, pattern).unwrap();
        assert_eq!(found.name, "tool-arm64.deb");
    }

    #[test]
    fn test_first_of_several_matches_is_returned() {
        let assets = names(&["a-linux-1", "a-linux-2"]);
        let found = find_asset_by_pattern(&assets, "linux").unwrap();
        assert_eq!(found.name, "a-linux-1");
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let assets = names(&["App-Linux.zip"]);
        assert!(find_asset_by_pattern(&assets, "linux").is_none());
        assert!(find_asset_by_pattern(&assets, "Linux").is_some());
    }

    #[test]
    fn test_no_match_and_empty_inputs() {
        let assets = names(&["app-x86_64.zip"]);
        assert!(find_asset_by_pattern(&assets, "riscv").is_none());
        assert!(find_asset_by_pattern(&[], "x86_64").is_none());
        assert!(find_asset_by_pattern(&assets, Vec::<String>::new()).is_none());
    }

    #[test]
    fn test_pattern_display() {
        assert_eq!(Pattern::from("aarch64").to_string(), "aarch64");
        assert_eq!(
            Pattern::from(vec!["arm64".to_string(), "aarch64".to_string()]).to_string(),
            "arm64, aarch64"
        );
    }
}
