//! Release API documents and the release value object built from them.

use serde::{Deserialize, Serialize};

use super::version::normalize_tag;

/// A release asset. Does not contain all fields.
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseAsset {
    pub name: String,
    pub browser_download_url: String,
}

/// A release as returned by `GET /repos/{owner}/{repo}/releases/latest`.
/// Does not contain all fields.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubRelease {
    pub tag_name: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

impl GitHubRelease {
    /// Find the download URL of the asset named exactly `asset_name`.
    pub fn asset_url(&self, asset_name: &str) -> Option<&str> {
        self.assets
            .iter()
            .find(|asset| asset.name == asset_name)
            .map(|asset| asset.browser_download_url.as_str())
    }
}

/// The latest published release, reduced to what the update pipeline needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseInfo {
    /// Version with the leading `v` of the tag stripped.
    pub version: String,
    /// Download URL of the packaged artifact, empty when the release has none.
    pub download_url: String,
    /// Publication timestamp as reported by the API.
    pub published_at: String,
    /// Release notes.
    pub description: String,
    /// Release notes (same source as `description`).
    pub changelog: String,
}

impl ReleaseInfo {
    /// Build release info from an API document, selecting the asset by name.
    ///
    /// A release without a matching asset still yields info, with an empty
    /// download URL.
    pub fn from_release(release: &GitHubRelease, asset_name: &str) -> Self {
        let notes = release.body.clone().unwrap_or_default();

        Self {
            version: normalize_tag(&release.tag_name),
            download_url: release.asset_url(asset_name).unwrap_or_default().to_string(),
            published_at: release.published_at.clone().unwrap_or_default(),
            description: notes.clone(),
            changelog: notes,
        }
    }

    /// Whether an installable package is attached to the release.
    pub fn has_package(&self) -> bool {
        !self.download_url.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn release_json(tag: &str, assets: &str) -> String {
        format!(
            r#"{{
                "tag_name": "{}",
                "body": "Fixed things",
                "published_at": "2024-03-01T10:00:00Z",
                "html_url": "https://github.com/acme/widget/releases/tag/{}",
                "assets": {}
            }}"#,
            tag, tag, assets
        )
    }

    #[test]
    fn parses_release_document() {
        let json = release_json("v2.3.0", "[]");
        let release: GitHubRelease = serde_json::from_str(&json).unwrap();

        assert_eq!(release.tag_name, "v2.3.0");
        assert_eq!(release.body.as_deref(), Some("Fixed things"));
        assert!(release.assets.is_empty());
    }

    #[test]
    fn missing_tag_name_is_rejected() {
        let result = serde_json::from_str::<GitHubRelease>(r#"{"body": "x", "assets": []}"#);
        assert!(result.is_err());
    }

    #[test]
    fn missing_optional_fields_default() {
        let release: GitHubRelease =
            serde_json::from_str(r#"{"tag_name": "1.0.0", "body": null}"#).unwrap();
        let info = ReleaseInfo::from_release(&release, "widget.zip");

        assert_eq!(info.version, "1.0.0");
        assert_eq!(info.description, "");
        assert_eq!(info.published_at, "");
        assert_eq!(info.download_url, "");
    }

    #[test]
    fn version_is_normalized() {
        let release: GitHubRelease = serde_json::from_str(&release_json("v2.3.0", "[]")).unwrap();
        let info = ReleaseInfo::from_release(&release, "widget.zip");

        assert_eq!(info.version, "2.3.0");
    }

    #[test]
    fn selects_asset_by_exact_name() {
        let assets = r#"[
            {"name": "other.zip", "browser_download_url": "https://x/other.zip"},
            {"name": "expected.zip", "browser_download_url": "https://x/expected.zip"}
        ]"#;
        let release: GitHubRelease = serde_json::from_str(&release_json("v1.0.4", assets)).unwrap();
        let info = ReleaseInfo::from_release(&release, "expected.zip");

        assert_eq!(info.download_url, "https://x/expected.zip");
        assert!(info.has_package());
    }

    #[test]
    fn no_matching_asset_yields_empty_url() {
        let assets = r#"[{"name": "other.zip", "browser_download_url": "https://x/other.zip"}]"#;
        let release: GitHubRelease = serde_json::from_str(&release_json("v1.0.4", assets)).unwrap();
        let info = ReleaseInfo::from_release(&release, "expected.zip");

        assert_eq!(info.download_url, "");
        assert!(!info.has_package());
    }

    #[test]
    fn asset_name_match_is_case_sensitive() {
        let assets = r#"[{"name": "Expected.zip", "browser_download_url": "https://x/E.zip"}]"#;
        let release: GitHubRelease = serde_json::from_str(&release_json("v1.0.4", assets)).unwrap();

        assert!(release.asset_url("expected.zip").is_none());
    }

    #[test]
    fn description_and_changelog_share_the_body() {
        let release: GitHubRelease = serde_json::from_str(&release_json("v1.0.4", "[]")).unwrap();
        let info = ReleaseInfo::from_release(&release, "widget.zip");

        assert_eq!(info.description, "Fixed things");
        assert_eq!(info.changelog, info.description);
    }
}
