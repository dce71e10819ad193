//! Centralized input path checks.

use std::path::{Path, PathBuf};

use crate::config::WORKBOOK_EXTENSION;

/// Input validation error types
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("File '{}' is not an {WORKBOOK_EXTENSION} file", .0.display())]
    NotWorkbook(PathBuf),
    #[error("Folder not found: {}", .0.display())]
    FolderNotFound(PathBuf),
}

/// Whether the file name ends in `.xlsx`.
///
/// The match is case-sensitive, so `REPORT.XLSX` is not accepted.
///
/// # Examples
///
/// ```
/// use cgi_annotator::utils::validation::has_workbook_extension;
/// use std::path::Path;
///
/// assert!(has_workbook_extension(Path::new("cohort/variants.xlsx")));
/// assert!(!has_workbook_extension(Path::new("variants.xls")));
/// assert!(!has_workbook_extension(Path::new("variants.csv")));
/// ```
#[must_use]
pub fn has_workbook_extension(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(WORKBOOK_EXTENSION))
}

/// Check that `path` exists and names an `.xlsx` file.
///
/// # Errors
///
/// Returns `ValidationError::NotFound` if nothing exists at `path`, or
/// `ValidationError::NotWorkbook` if the extension is wrong.
pub fn validate_workbook_path(path: &Path) -> Result<(), ValidationError> {
    if !path.exists() {
        return Err(ValidationError::NotFound(path.to_path_buf()));
    }
    if !has_workbook_extension(path) {
        return Err(ValidationError::NotWorkbook(path.to_path_buf()));
    }
    Ok(())
}

/// Check that `path` is an existing directory.
///
/// # Errors
///
/// Returns `ValidationError::FolderNotFound` otherwise.
pub fn validate_folder_path(path: &Path) -> Result<(), ValidationError> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(ValidationError::FolderNotFound(path.to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_extension_is_case_sensitive() {
        assert!(has_workbook_extension(Path::new("a.xlsx")));
        assert!(!has_workbook_extension(Path::new("a.XLSX")));
        assert!(!has_workbook_extension(Path::new("a.xlsx.bak")));
        assert!(!has_workbook_extension(Path::new("xlsx")));
    }

    #[test]
    fn test_missing_path_is_reported_before_extension() {
        let err = validate_workbook_path(Path::new("/nonexistent/dir/input.csv")).unwrap_err();
        assert!(matches!(err, ValidationError::NotFound(_)));
    }

    #[test]
    fn test_wrong_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("variants.csv");
        std::fs::write(&path, "Genomic Alteration\n").unwrap();
        let err = validate_workbook_path(&path).unwrap_err();
        assert!(matches!(err, ValidationError::NotWorkbook(_)));
    }

    #[test]
    fn test_folder_validation() {
        let dir = TempDir::new().unwrap();
        assert!(validate_folder_path(dir.path()).is_ok());
        assert!(matches!(
            validate_folder_path(Path::new("/nonexistent/folder")),
            Err(ValidationError::FolderNotFound(_))
        ));
    }
}
