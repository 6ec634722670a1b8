use crate::core::manifest;
use crate::error::Result;
use std::path::Path;

/// Report downloaded/extracted state for every catalog entry. No network
/// access and no side effects.
pub fn show_status() -> Result<()> {
    let catalog = manifest::load_catalog(Path::new("."))?;

    println!("Releases:");
    for release in &catalog.releases {
        println!("  {}", release.repo);
        for asset in &release.assets {
            println!("    {} {}", state_marker(asset.downloaded()), asset.name);
            println!(
                "      downloaded: {}  extracted: {}",
                yes_no(asset.downloaded()),
                yes_no(asset.extracted())
            );
        }
    }

    if !catalog.archives.is_empty() {
        println!();
        println!("Local archives:");
        for archive in &catalog.archives {
            println!(
                "  {} {:?}",
                state_marker(archive.extracted_path.is_file()),
                archive.archive_path
            );
            println!(
                "      downloaded: {}  extracted: {}",
                yes_no(archive.archive_path.is_file()),
                yes_no(archive.extracted_path.is_file())
            );
        }
    }

    Ok(())
}

fn state_marker(done: bool) -> &'static str {
    if done {
        "✅"
    } else {
        "❌"
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
