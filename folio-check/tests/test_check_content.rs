use folio_check::{check_content_dir, check_entry, CheckError};
use folio_common::{Collection, ContentError};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const VALID_ILLUSTRATION: &str = "---\n\
title: Owl Study\n\
date: 2024-02-19\n\
image: /images/owl.jpg\n\
tags: [ink, birds]\n\
---\n";

const VALID_PROJECT: &str = "---\n\
title: Field Guide\n\
description: Forty ink plates.\n\
date: 2023-10-15\n\
coverImage: /images/guide.jpg\n\
tags: [book]\n\
featured: true\n\
---\n";

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

#[test]
fn test_valid_content_passes() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "illustrations/owl-study.md", VALID_ILLUSTRATION);
    write(dir.path(), "projects/field-guide.md", VALID_PROJECT);

    let report = check_content_dir(dir.path()).unwrap();
    assert_eq!(report.checked, 2);
    assert!(report.is_ok());
}

#[test]
fn test_missing_required_field_is_reported() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "illustrations/owl-study.md", VALID_ILLUSTRATION);
    write(
        dir.path(),
        "illustrations/untitled.md",
        "---\ndate: 2024-01-01\nimage: a.jpg\ntags: []\n---\n",
    );

    let report = check_content_dir(dir.path()).unwrap();
    assert_eq!(report.checked, 2);
    assert_eq!(report.failures.len(), 1);

    let failure = &report.failures[0];
    assert_eq!(failure.collection, Collection::Illustrations);
    assert!(failure.path.ends_with("untitled.md"));
    assert!(matches!(failure.error, ContentError::Schema(_)));
}

#[test]
fn test_project_schema_applies_to_projects_dir() {
    let dir = TempDir::new().unwrap();
    // Valid illustration frontmatter lacks the project's description and coverImage
    write(dir.path(), "projects/not-a-project.md", VALID_ILLUSTRATION);

    let report = check_content_dir(dir.path()).unwrap();
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].collection, Collection::Projects);
}

#[test]
fn test_non_markdown_files_are_ignored() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "illustrations/owl-study.md", VALID_ILLUSTRATION);
    write(dir.path(), "illustrations/.DS_Store", "junk");
    write(dir.path(), "illustrations/owl.jpg", "not really a jpeg");

    let report = check_content_dir(dir.path()).unwrap();
    assert_eq!(report.checked, 1);
    assert!(report.is_ok());
}

#[test]
fn test_missing_collection_dirs_count_as_empty() {
    let dir = TempDir::new().unwrap();
    let report = check_content_dir(dir.path()).unwrap();
    assert_eq!(report.checked, 0);
    assert!(report.is_ok());
}

#[test]
fn test_missing_root_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");
    assert!(matches!(
        check_content_dir(&missing),
        Err(CheckError::MissingRoot(_))
    ));
}

#[test]
fn test_check_entry_without_frontmatter() {
    assert!(matches!(
        check_entry(Collection::Illustrations, "x", "# heading only\n"),
        Err(ContentError::MissingFrontmatter)
    ));
}

#[test]
fn test_unreadable_entry_is_an_error_not_a_skip() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "illustrations/owl-study.md", VALID_ILLUSTRATION);
    let path = dir.path().join("illustrations/broken.md");
    fs::write(&path, [0xff, 0xfe, 0x00, 0x2d]).unwrap();

    match check_content_dir(dir.path()) {
        Err(CheckError::Io { path: failed, .. }) => assert!(failed.ends_with("broken.md")),
        other => panic!("expected an I/O error, got {other:?}"),
    }
}
