//! The dataset catalog: which GitHub releases and local archives jpdata
//! manages, and where their files live on disk.

use std::path::{Path, PathBuf};

/// A single downloadable file attached to a GitHub release.
///
/// `name` may contain a `$tag` placeholder that is substituted with the
/// resolved release tag before building the download URL.
#[derive(Debug, Clone)]
pub struct Asset {
    pub name: String,
    pub archive_path: PathBuf,
    pub extracted_path: PathBuf,
}

impl Asset {
    pub fn new(name: &str, archive_path: &str, extracted_path: &str) -> Self {
        Self {
            name: name.to_string(),
            archive_path: PathBuf::from(archive_path),
            extracted_path: PathBuf::from(extracted_path),
        }
    }

    pub fn resolved_name(&self, release_tag: &str) -> String {
        self.name.replace("$tag", release_tag)
    }

    pub fn downloaded(&self) -> bool {
        self.archive_path.is_file()
    }

    pub fn extracted(&self) -> bool {
        self.extracted_path.is_file()
    }
}

/// A tagged publication of one or more assets on GitHub.
#[derive(Debug, Clone)]
pub struct Release {
    pub repo: String,
    pub assets: Vec<Asset>,
}

impl Release {
    pub fn new(repo: &str, assets: Vec<Asset>) -> Self {
        Self {
            repo: repo.to_string(),
            assets,
        }
    }

    pub fn downloaded(&self) -> bool {
        self.assets.iter().all(Asset::downloaded)
    }

    pub fn extracted(&self) -> bool {
        self.assets.iter().all(Asset::extracted)
    }
}

/// An archive obtained out of band (no release endpoint), paired with its
/// extraction destination.
#[derive(Debug, Clone)]
pub struct LocalArchive {
    pub archive_path: PathBuf,
    pub extracted_path: PathBuf,
}

impl LocalArchive {
    pub fn new(archive_path: &str, extracted_path: &str) -> Self {
        Self {
            archive_path: PathBuf::from(archive_path),
            extracted_path: PathBuf::from(extracted_path),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    pub releases: Vec<Release>,
    pub archives: Vec<LocalArchive>,
}

impl Catalog {
    /// The built-in dataset list, used when no manifest overrides it.
    pub fn builtin() -> Self {
        Self {
            releases: vec![
                Release::new(
                    "https://github.com/scriptin/jmdict-simplified",
                    vec![Asset::new(
                        "jmdict-eng-$tag.json.zip",
                        "third-party/jmdict-simplified/jmdict-eng.zip",
                        "public/jmdict-simplified/jmdict-eng.json",
                    )],
                ),
                Release::new(
                    "https://github.com/scriptin/jmdict-simplified",
                    vec![Asset::new(
                        "kanjidic2-en-$tag.json.zip",
                        "third-party/jmdict-simplified/kanjidic2-en.zip",
                        "public/jmdict-simplified/kanjidic2-en.json",
                    )],
                ),
                Release::new(
                    "https://github.com/mwhirls/tanaka-corpus-json",
                    vec![Asset::new(
                        "jpn-eng-examples.zip",
                        "third-party/tanaka-corpus-json/jpn-eng-examples.zip",
                        "public/tanaka-corpus-json/jpn-eng-examples.json",
                    )],
                ),
            ],
            archives: vec![
                LocalArchive::new(
                    "third-party/tatoeba/jpn_eng_pairs.zip",
                    "public/tatoeba/jpn_eng_pairs.tsv",
                ),
                LocalArchive::new(
                    "third-party/tatoeba/jpn_indices.tar.bz2",
                    "public/tatoeba/jpn_indices.csv",
                ),
            ],
        }
    }

    /// Resolve paths in the catalog against a base directory.
    pub fn rooted_at(mut self, base: &Path) -> Self {
        for release in &mut self.releases {
            for asset in &mut release.assets {
                asset.archive_path = base.join(&asset.archive_path);
                asset.extracted_path = base.join(&asset.extracted_path);
            }
        }
        for archive in &mut self.archives {
            archive.archive_path = base.join(&archive.archive_path);
            archive.extracted_path = base.join(&archive.extracted_path);
        }
        self
    }
}
