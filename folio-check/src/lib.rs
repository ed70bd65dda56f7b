//! Content validation for folio sites
//!
//! Walks a content root laid out as one directory per collection and checks
//! every Markdown entry against its collection schema. This is the gate that
//! keeps malformed entries away from the gallery.

use folio_common::{parse_entry, Collection, ContentError, Illustration, Project};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that stop a content check
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Content directory {0:?} does not exist")]
    MissingRoot(PathBuf),
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// An entry rejected by its collection schema
#[derive(Debug)]
pub struct EntryFailure {
    pub collection: Collection,
    pub path: PathBuf,
    pub error: ContentError,
}

/// Outcome of checking a content directory
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Number of entries read
    pub checked: usize,
    pub failures: Vec<EntryFailure>,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Check every collection under `root`.
///
/// A missing collection directory is treated as an empty collection.
pub fn check_content_dir(root: &Path) -> Result<CheckReport, CheckError> {
    if !root.is_dir() {
        return Err(CheckError::MissingRoot(root.to_path_buf()));
    }

    let mut report = CheckReport::default();
    for collection in Collection::ALL {
        let dir = root.join(collection.dir_name());
        if !dir.is_dir() {
            warn!("No {} directory in {:?}", collection.dir_name(), root);
            continue;
        }

        for path in markdown_files(&dir)? {
            let source = fs::read_to_string(&path).map_err(|source| CheckError::Io {
                path: path.clone(),
                source,
            })?;
            let slug = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or_default();

            report.checked += 1;
            match check_entry(collection, slug, &source) {
                Ok(()) => debug!("{:?} ok", path),
                Err(error) => report.failures.push(EntryFailure {
                    collection,
                    path,
                    error,
                }),
            }
        }
    }

    Ok(report)
}

/// Validate one entry against its collection schema.
pub fn check_entry(collection: Collection, slug: &str, source: &str) -> Result<(), ContentError> {
    match collection {
        Collection::Illustrations => parse_entry::<Illustration>(slug, source).map(|_| ()),
        Collection::Projects => parse_entry::<Project>(slug, source).map(|_| ()),
    }
}

/// `*.md` files directly inside `dir`, sorted by path
fn markdown_files(dir: &Path) -> Result<Vec<PathBuf>, CheckError> {
    let entries = fs::read_dir(dir).map_err(|source| CheckError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|source| CheckError::Io {
                path: dir.to_path_buf(),
                source,
            })?
            .path();
        if path.is_file() && is_markdown_file(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("md"))
        .unwrap_or(false)
}
