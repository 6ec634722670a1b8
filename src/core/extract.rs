//! Single-member archive extraction.
//!
//! Every archive in the catalog wraps exactly one file. Extraction pulls
//! that member out and writes it to the destination path, skipping archives
//! whose destination already exists unless forced.

use crate::error::{JpdataError, Result};
use crate::utils::fs;
use bzip2::read::BzDecoder;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tar::Archive;
use zip::ZipArchive;

/// Extract the single member of `archive_path` to `destination`.
///
/// Lazy: a no-op when the destination file already exists, unless `force`
/// is set. The archive format is chosen by file extension.
pub fn lazy_extract(archive_path: &Path, destination: &Path, force: bool) -> Result<()> {
    if destination.is_file() && !force {
        println!("Skipping {archive_path:?}, already extracted");
        return Ok(());
    }

    let extension = archive_path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or_else(|| JpdataError::UnsupportedArchive {
            path: archive_path.to_path_buf(),
        })?;

    println!("Extracting {archive_path:?} to {destination:?}");

    let contents = match extension {
        "zip" => read_zip_member(archive_path)?,
        "tar" => read_tar_member(File::open(archive_path)?, archive_path)?,
        "bz2" => read_tar_member(BzDecoder::new(File::open(archive_path)?), archive_path)?,
        "gz" | "tgz" => read_tar_member(GzDecoder::new(File::open(archive_path)?), archive_path)?,
        _ => {
            return Err(JpdataError::UnsupportedArchive {
                path: archive_path.to_path_buf(),
            })
        }
    };

    fs::ensure_parent_exists(destination)?;
    std::fs::write(destination, contents)?;
    Ok(())
}

fn read_zip_member(archive_path: &Path) -> Result<Vec<u8>> {
    let file = File::open(archive_path)?;
    let mut archive = ZipArchive::new(file).map_err(|_| JpdataError::ExtractionError {
        path: archive_path.to_path_buf(),
    })?;

    if archive.len() != 1 {
        return Err(JpdataError::MultipleMembers {
            path: archive_path.to_path_buf(),
            count: archive.len(),
        });
    }

    let mut member = archive
        .by_index(0)
        .map_err(|_| JpdataError::ExtractionError {
            path: archive_path.to_path_buf(),
        })?;
    let mut contents = Vec::new();
    member.read_to_end(&mut contents)?;
    Ok(contents)
}

fn read_tar_member<R: Read>(reader: R, archive_path: &Path) -> Result<Vec<u8>> {
    let mut archive = Archive::new(reader);
    let mut contents = None;
    let mut count = 0;

    for entry in archive.entries()? {
        let mut entry = entry?;
        count += 1;
        if count == 1 {
            let mut buffer = Vec::new();
            entry.read_to_end(&mut buffer)?;
            contents = Some(buffer);
        }
    }

    match (contents, count) {
        (Some(contents), 1) => Ok(contents),
        _ => Err(JpdataError::MultipleMembers {
            path: archive_path.to_path_buf(),
            count,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn write_zip(path: &Path, members: &[(&str, &[u8])]) {
        let file = File::create(path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        for (name, contents) in members {
            writer
                .start_file(*name, zip::write::SimpleFileOptions::default())
                .unwrap();
            writer.write_all(contents).unwrap();
        }
        writer.finish().unwrap();
    }

    fn append_member(builder: &mut tar::Builder<impl Write>, name: &str, contents: &[u8]) {
        let mut header = tar::Header::new_gnu();
        header.set_size(contents.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder.append_data(&mut header, name, contents).unwrap();
    }

    fn write_tar(path: &Path, members: &[(&str, &[u8])]) {
        let mut builder = tar::Builder::new(File::create(path).unwrap());
        for (name, contents) in members {
            append_member(&mut builder, name, contents);
        }
        builder.finish().unwrap();
    }

    fn write_tar_bz2(path: &Path, members: &[(&str, &[u8])]) {
        let encoder =
            bzip2::write::BzEncoder::new(File::create(path).unwrap(), bzip2::Compression::default());
        let mut builder = tar::Builder::new(encoder);
        for (name, contents) in members {
            append_member(&mut builder, name, contents);
        }
        builder.into_inner().unwrap().finish().unwrap();
    }

    #[test]
    fn test_extracts_single_member_zip() {
        let temp = tempfile::tempdir().unwrap();
        let archive = temp.path().join("data.zip");
        let dest = temp.path().join("out/data.json");
        write_zip(&archive, &[("data.json", b"{\"words\": []}")]);

        lazy_extract(&archive, &dest, false).unwrap();

        assert_eq!(std::fs::read(&dest).unwrap(), b"{\"words\": []}");
    }

    #[test]
    fn test_extracts_single_member_tar() {
        let temp = tempfile::tempdir().unwrap();
        let archive = temp.path().join("indices.tar");
        let dest = temp.path().join("out/indices.csv");
        write_tar(&archive, &[("indices.csv", b"1,2,3\n")]);

        lazy_extract(&archive, &dest, false).unwrap();

        assert_eq!(std::fs::read(&dest).unwrap(), b"1,2,3\n");
    }

    #[test]
    fn test_extracts_single_member_tar_bz2() {
        let temp = tempfile::tempdir().unwrap();
        let archive = temp.path().join("indices.tar.bz2");
        let dest = temp.path().join("out/indices.csv");
        write_tar_bz2(&archive, &[("indices.csv", b"4,5,6\n")]);

        lazy_extract(&archive, &dest, false).unwrap();

        assert_eq!(std::fs::read(&dest).unwrap(), b"4,5,6\n");
    }

    #[test]
    fn test_rejects_multi_member_zip() {
        let temp = tempfile::tempdir().unwrap();
        let archive = temp.path().join("data.zip");
        let dest = temp.path().join("data.json");
        write_zip(&archive, &[("a.json", b"a"), ("b.json", b"b")]);

        let err = lazy_extract(&archive, &dest, false).unwrap_err();
        assert!(matches!(err, JpdataError::MultipleMembers { count: 2, .. }));
        assert!(!dest.exists());
    }

    #[test]
    fn test_rejects_multi_member_tar() {
        let temp = tempfile::tempdir().unwrap();
        let archive = temp.path().join("data.tar");
        let dest = temp.path().join("data.csv");
        write_tar(&archive, &[("a.csv", b"a"), ("b.csv", b"b")]);

        let err = lazy_extract(&archive, &dest, false).unwrap_err();
        assert!(matches!(err, JpdataError::MultipleMembers { count: 2, .. }));
    }

    #[test]
    fn test_rejects_unknown_extension() {
        let temp = tempfile::tempdir().unwrap();
        let archive = temp.path().join("data.rar");
        std::fs::write(&archive, b"not an archive").unwrap();

        let err = lazy_extract(&archive, &temp.path().join("out"), false).unwrap_err();
        assert!(matches!(err, JpdataError::UnsupportedArchive { .. }));
    }

    #[test]
    fn test_skips_existing_destination() {
        let temp = tempfile::tempdir().unwrap();
        let archive = temp.path().join("data.zip");
        let dest = temp.path().join("data.json");
        write_zip(&archive, &[("data.json", b"new contents")]);
        std::fs::write(&dest, b"old contents").unwrap();

        lazy_extract(&archive, &dest, false).unwrap();

        assert_eq!(std::fs::read(&dest).unwrap(), b"old contents");
    }

    #[test]
    fn test_force_overwrites_existing_destination() {
        let temp = tempfile::tempdir().unwrap();
        let archive = temp.path().join("data.zip");
        let dest = temp.path().join("data.json");
        write_zip(&archive, &[("data.json", b"new contents")]);
        std::fs::write(&dest, b"old contents").unwrap();

        lazy_extract(&archive, &dest, true).unwrap();

        assert_eq!(std::fs::read(&dest).unwrap(), b"new contents");
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let temp = tempfile::tempdir().unwrap();
        let archive = temp.path().join("data.zip");
        let dest = temp.path().join("data.json");
        write_zip(&archive, &[("data.json", b"{\"ok\": true}")]);

        lazy_extract(&archive, &dest, false).unwrap();
        lazy_extract(&archive, &dest, false).unwrap();

        assert_eq!(std::fs::read(&dest).unwrap(), b"{\"ok\": true}");
    }
}
