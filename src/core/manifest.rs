use crate::core::catalog::{Asset, Catalog, LocalArchive, Release};
use crate::error::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE: &str = "jpdata.toml";

/// Optional on-disk override of the built-in dataset catalog.
#[derive(Debug, Deserialize)]
pub struct Manifest {
    #[serde(default, rename = "release")]
    pub releases: Vec<ManifestRelease>,
    #[serde(default, rename = "archive")]
    pub archives: Vec<ManifestArchive>,
}

#[derive(Debug, Deserialize)]
pub struct ManifestRelease {
    pub repo: String,
    #[serde(rename = "asset")]
    pub assets: Vec<ManifestAsset>,
}

#[derive(Debug, Deserialize)]
pub struct ManifestAsset {
    pub name: String,
    pub archive: PathBuf,
    pub extracted: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct ManifestArchive {
    pub path: PathBuf,
    pub extracted: PathBuf,
}

impl Manifest {
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn into_catalog(self) -> Catalog {
        Catalog {
            releases: self
                .releases
                .into_iter()
                .map(|release| Release {
                    repo: release.repo,
                    assets: release
                        .assets
                        .into_iter()
                        .map(|asset| Asset {
                            name: asset.name,
                            archive_path: asset.archive,
                            extracted_path: asset.extracted,
                        })
                        .collect(),
                })
                .collect(),
            archives: self
                .archives
                .into_iter()
                .map(|archive| LocalArchive {
                    archive_path: archive.path,
                    extracted_path: archive.extracted,
                })
                .collect(),
        }
    }
}

/// Load the catalog from `jpdata.toml` in `dir`, falling back to the
/// built-in list when no manifest exists. Relative catalog paths are
/// resolved against `dir`.
pub fn load_catalog(dir: &Path) -> Result<Catalog> {
    let manifest_path = dir.join(MANIFEST_FILE);

    if !manifest_path.exists() {
        return Ok(Catalog::builtin().rooted_at(dir));
    }

    let contents = std::fs::read_to_string(&manifest_path)?;
    Ok(Manifest::parse(&contents)?.into_catalog().rooted_at(dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const EXAMPLE: &str = r#"
[[release]]
repo = "https://github.com/scriptin/jmdict-simplified"

[[release.asset]]
name = "jmdict-eng-$tag.json.zip"
archive = "third-party/jmdict-eng.zip"
extracted = "public/jmdict-eng.json"

[[archive]]
path = "third-party/tatoeba/jpn_eng_pairs.zip"
extracted = "public/tatoeba/jpn_eng_pairs.tsv"
"#;

    #[test]
    fn test_parse_manifest() {
        let catalog = Manifest::parse(EXAMPLE).unwrap().into_catalog();

        assert_eq!(catalog.releases.len(), 1);
        assert_eq!(
            catalog.releases[0].repo,
            "https://github.com/scriptin/jmdict-simplified"
        );
        assert_eq!(
            catalog.releases[0].assets[0].name,
            "jmdict-eng-$tag.json.zip"
        );
        assert_eq!(catalog.archives.len(), 1);
        assert_eq!(
            catalog.archives[0].extracted_path,
            PathBuf::from("public/tatoeba/jpn_eng_pairs.tsv")
        );
    }

    #[test]
    fn test_parse_rejects_missing_fields() {
        assert!(Manifest::parse("[[release]]\n").is_err());
    }

    #[test]
    fn test_load_catalog_falls_back_to_builtin() {
        let temp = tempfile::tempdir().unwrap();
        let catalog = load_catalog(temp.path()).unwrap();
        assert_eq!(catalog.releases.len(), Catalog::builtin().releases.len());
    }

    #[test]
    fn test_load_catalog_reads_manifest() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::write(temp.path().join(MANIFEST_FILE), EXAMPLE).unwrap();

        let catalog = load_catalog(temp.path()).unwrap();
        assert_eq!(catalog.releases.len(), 1);
        assert!(catalog.releases[0].assets[0]
            .archive_path
            .starts_with(temp.path()));
    }
}
