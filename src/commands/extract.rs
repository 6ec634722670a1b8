use crate::core::{extract, manifest};
use crate::error::Result;
use std::path::Path;

/// Extract the catalog's out-of-band archives that are present on disk.
///
/// These archives are obtained manually (e.g. Tatoeba exports), so a missing
/// archive is not an error; it is reported and skipped.
pub fn extract_archives(overwrite: bool) -> Result<()> {
    let catalog = manifest::load_catalog(Path::new("."))?;

    for archive in &catalog.archives {
        if archive.archive_path.is_file() {
            extract::lazy_extract(&archive.archive_path, &archive.extracted_path, overwrite)?;
        } else {
            println!(
                "Skipping {:?}, archive not downloaded",
                archive.archive_path
            );
        }
    }

    Ok(())
}
