//! File discovery for the spreadsheet inspector
//!
//! Finds the first file with a given extension in a directory, in
//! directory-listing order. When nothing matches, callers fall back to
//! printing the full listing via [`list_dir`].

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SkuscanError;

/// Return the first file in `dir` whose extension matches `ext`
/// (case-insensitive), or `None` if no file matches.
///
/// A nonexistent or unreadable directory surfaces as an IO error.
pub fn find_first_with_extension(
    dir: &Path,
    ext: &str,
) -> Result<Option<PathBuf>, SkuscanError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(ext));
        if matches {
            log::debug!("Matched {:?} for extension {}", path, ext);
            return Ok(Some(path));
        }
    }
    Ok(None)
}

/// List the entry names of `dir`, in directory-listing order.
pub fn list_dir(dir: &Path) -> Result<Vec<String>, SkuscanError> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        names.push(entry?.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_finds_matching_file() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("catalog.xlsx")).unwrap();

        let found = find_first_with_extension(dir.path(), "xlsx").unwrap();
        let found = found.expect("should find the spreadsheet");
        assert_eq!(found.file_name().unwrap(), "catalog.xlsx");
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("CATALOG.XLSX")).unwrap();

        let found = find_first_with_extension(dir.path(), "xlsx").unwrap();
        assert!(found.is_some());
    }

    #[test]
    fn test_returns_none_when_no_match() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("readme.txt")).unwrap();

        let found = find_first_with_extension(dir.path(), "xlsx").unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn test_found_name_comes_from_actual_listing() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("readme.txt")).unwrap();
        File::create(dir.path().join("data.xlsx")).unwrap();

        let found = find_first_with_extension(dir.path(), "xlsx")
            .unwrap()
            .unwrap();
        let listing = list_dir(dir.path()).unwrap();
        let name = found.file_name().unwrap().to_string_lossy().into_owned();
        assert!(listing.contains(&name));
    }

    #[test]
    fn test_directories_are_skipped() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("nested.xlsx")).unwrap();

        let found = find_first_with_extension(dir.path(), "xlsx").unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let result = find_first_with_extension(Path::new("no/such/dir"), "xlsx");
        assert!(matches!(result, Err(SkuscanError::Io(_))));
    }

    #[test]
    fn test_list_dir_returns_all_entries() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("readme.txt")).unwrap();
        File::create(dir.path().join("notes.md")).unwrap();

        let mut names = list_dir(dir.path()).unwrap();
        names.sort();
        assert_eq!(names, vec!["notes.md", "readme.txt"]);
    }
}
