use crate::core::catalog::Release;
use crate::core::github::{self, GitHubClient};
use crate::core::{extract, manifest};
use crate::error::Result;
use std::path::Path;

/// Download and extract every release in the catalog, doing only the steps
/// that are still missing unless `overwrite` forces a full refresh.
pub fn fetch_datasets(overwrite: bool) -> Result<()> {
    let catalog = manifest::load_catalog(Path::new("."))?;
    let client = GitHubClient::new();

    for release in &catalog.releases {
        if overwrite {
            download_latest(&client, release)?;
            extract_release(release, true)?;
        } else if !release.downloaded() {
            download_latest(&client, release)?;
            extract_release(release, false)?;
        } else if !release.extracted() {
            extract_release(release, false)?;
        } else {
            println!("{} is up to date", release.repo);
        }
    }

    Ok(())
}

fn download_latest(client: &GitHubClient, release: &Release) -> Result<()> {
    println!("Resolving latest release of {}...", release.repo);
    let release_tag = client.resolve_latest_tag(&release.repo)?;
    println!("Latest release: {release_tag}");

    for asset in &release.assets {
        let asset_name = asset.resolved_name(&release_tag);
        let url = github::asset_url(&release.repo, &release_tag, &asset_name);
        client.download_file(&url, &asset.archive_path)?;
    }

    Ok(())
}

fn extract_release(release: &Release, force: bool) -> Result<()> {
    for asset in &release.assets {
        extract::lazy_extract(&asset.archive_path, &asset.extracted_path, force)?;
    }
    Ok(())
}
