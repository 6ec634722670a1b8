use crate::error::{JpdataError, Result};
use crate::utils::fs;
use regex::Regex;
use std::path::Path;
use std::process::Command;

const USER_AGENT: &str = concat!("jpdata/", env!("CARGO_PKG_VERSION"));

/// Extract the release tag from a resolved redirect URL of the form
/// `.../releases/tag/<tag>`.
pub fn parse_release_tag(resolved_url: &str) -> Result<String> {
    // Unwrap is fine, the pattern is a compile-time constant.
    let pattern = Regex::new(r"^.*/releases/tag/(?P<tag>.+)$").unwrap();
    pattern
        .captures(resolved_url.trim())
        .and_then(|caps| caps.name("tag"))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| JpdataError::TagNotFound {
            url: resolved_url.to_string(),
        })
}

/// Build the download URL for a named asset of a tagged release.
pub fn asset_url(repo: &str, release_tag: &str, asset_name: &str) -> String {
    format!("{repo}/releases/download/{release_tag}/{asset_name}")
}

pub struct GitHubClient;

impl Default for GitHubClient {
    fn default() -> Self {
        Self
    }
}

impl GitHubClient {
    pub fn new() -> Self {
        Self
    }

    /// Resolve the latest release tag of a repository by following the
    /// `/releases/latest/` redirect and parsing the effective URL.
    pub fn resolve_latest_tag(&self, repo: &str) -> Result<String> {
        let url = format!("{repo}/releases/latest/");

        let output = Command::new("curl")
            .arg("-L") // Follow redirects
            .arg("-s") // Silent
            .arg("-o")
            .arg(null_device())
            .arg("-w")
            .arg("%{url_effective}")
            .arg("-H")
            .arg(format!("User-Agent: {USER_AGENT}"))
            .arg(&url)
            .output()?;

        if !output.status.success() {
            return Err(JpdataError::DownloadError { url });
        }

        let resolved_url = String::from_utf8_lossy(&output.stdout).into_owned();
        parse_release_tag(&resolved_url)
    }

    /// Fetch a URL to a local file, creating parent directories as needed.
    pub fn download_file(&self, url: &str, destination: &Path) -> Result<()> {
        println!("Downloading from {url}...");

        fs::ensure_parent_exists(destination)?;

        let output = Command::new("curl")
            .arg("-L") // Follow redirects
            .arg("-s") // Silent
            .arg("-f") // Fail on HTTP errors
            .arg("-H")
            .arg(format!("User-Agent: {USER_AGENT}"))
            .arg("-o")
            .arg(destination)
            .arg(url)
            .output()?;

        if !output.status.success() {
            return Err(JpdataError::DownloadError {
                url: url.to_string(),
            });
        }

        println!("Downloaded to {destination:?}");
        Ok(())
    }
}

fn null_device() -> &'static str {
    if cfg!(windows) {
        "NUL"
    } else {
        "/dev/null"
    }
}
