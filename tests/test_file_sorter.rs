//! Integration tests for the directory reorganizer.

use personal_assistant::sorter::FileCategory;
use personal_assistant::FileSorter;
use std::fs;
use std::path::Path;

fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), name.as_bytes()).unwrap();
}

#[test]
fn test_sort_files_into_category_folders() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["a.JPG", "b.mp3", "c.txt", "d.zip", "e.xyz", "f.mkv", "Makefile"] {
        touch(dir.path(), name);
    }
    fs::create_dir(dir.path().join("projects")).unwrap();
    touch(&dir.path().join("projects"), "nested.png");

    let report = FileSorter::new(dir.path()).sort_files().unwrap();

    assert_eq!(report.total(), 7);
    assert_eq!(report.count(FileCategory::Others), 2);
    assert_eq!(report.count(FileCategory::Images), 1);

    let root = dir.path();
    assert!(root.join("images/a.JPG").exists());
    assert!(root.join("audio/b.mp3").exists());
    assert!(root.join("documents/c.txt").exists());
    assert!(root.join("archives/d.zip").exists());
    assert!(root.join("others/e.xyz").exists());
    assert!(root.join("others/Makefile").exists());
    assert!(root.join("video/f.mkv").exists());

    // Sub-directories are left alone
    assert!(root.join("projects/nested.png").exists());
    assert!(!root.join("images/nested.png").exists());
}

#[test]
fn test_name_clash_gets_suffix() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("images")).unwrap();
    touch(&dir.path().join("images"), "photo.png");
    touch(dir.path(), "photo.png");

    FileSorter::new(dir.path()).sort_files().unwrap();

    assert!(dir.path().join("images/photo.png").exists());
    assert!(dir.path().join("images/photo_1.png").exists());
    assert!(!dir.path().join("photo.png").exists());
}

#[test]
fn test_second_pass_moves_nothing() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "song.ogg");

    let sorter = FileSorter::new(dir.path());
    assert_eq!(sorter.sort_files().unwrap().total(), 1);

    let again = sorter.sort_files().unwrap();
    assert_eq!(again.total(), 0);
    assert_eq!(again.to_string(), "Sorted 0 file(s)");
}

#[test]
fn test_missing_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = FileSorter::new(dir.path().join("absent"))
        .sort_files()
        .unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}
