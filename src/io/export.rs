//! Save a laid-out quote as a PDF file.
//!
//! The file name is fixed; only the target directory varies. Bytes go to a
//! temporary file in the same directory first and are renamed into place, so
//! a failed export leaves any previous quote untouched.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::info;

use crate::error::AppError;
use crate::report::pdf::render_pdf;
use crate::report::{REPORT_FILENAME, ReportDocument};

/// Path the quote PDF is written to inside `dir`.
pub fn report_path(dir: &Path) -> PathBuf {
    dir.join(REPORT_FILENAME)
}

/// Serialize `doc` and write it to `dir`, replacing any previous quote.
pub fn write_report_pdf(dir: &Path, doc: &ReportDocument) -> Result<PathBuf, AppError> {
    if !dir.as_os_str().is_empty() && !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| {
            AppError::new(2, format!("Failed to create output dir '{}': {e}", dir.display()))
        })?;
    }
    if dir.is_file() {
        return Err(AppError::new(
            2,
            format!("Expected a directory, got a file: {}", dir.display()),
        ));
    }

    let path = report_path(dir);
    let bytes = render_pdf(doc);

    let parent = if dir.as_os_str().is_empty() {
        Path::new(".")
    } else {
        dir
    };
    let mut tmp = NamedTempFile::new_in(parent).map_err(|e| {
        AppError::new(2, format!("Failed to create temp file in '{}': {e}", parent.display()))
    })?;
    tmp.write_all(&bytes)
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| AppError::new(2, format!("Failed to write quote PDF: {e}")))?;
    tmp.persist(&path).map_err(|e| {
        AppError::new(2, format!("Failed to save quote PDF '{}': {}", path.display(), e.error))
    })?;

    info!(path = %path.display(), bytes = bytes.len(), pages = doc.pages, "quote exported");
    Ok(path)
}
