//! Read/write quote JSON files.
//!
//! Quote JSON is the machine-readable companion of the PDF:
//! - the request as entered (code, modality, participants)
//! - the resolved standard and derived prices
//! - the four comparative tiers

use std::fs::File;
use std::path::Path;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{Complexity, QuoteRequest, QuoteResult, Standard, VariantSet};
use crate::error::AppError;

/// Standard as recorded in a quote file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotedStandard {
    pub code: String,
    pub name: String,
    pub complexity: Complexity,
}

impl From<&Standard> for QuotedStandard {
    fn from(s: &Standard) -> Self {
        Self {
            code: s.code.to_string(),
            name: s.name.to_string(),
            complexity: s.complexity,
        }
    }
}

/// A saved quote (JSON).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteFile {
    pub tool: String,
    pub generated_at: DateTime<Local>,
    pub request: QuoteRequest,
    pub standard: Option<QuotedStandard>,
    pub result: QuoteResult,
    pub variants: VariantSet,
}

impl QuoteFile {
    pub fn new(
        request: &QuoteRequest,
        standard: Option<&Standard>,
        result: QuoteResult,
        variants: VariantSet,
    ) -> Self {
        Self {
            tool: "cotiza".to_string(),
            generated_at: Local::now(),
            request: request.clone(),
            standard: standard.map(QuotedStandard::from),
            result,
            variants,
        }
    }
}

/// Write a quote JSON file.
pub fn write_quote_json(path: &Path, quote: &QuoteFile) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create quote JSON '{}': {e}", path.display())))?;
    serde_json::to_writer_pretty(file, quote)
        .map_err(|e| AppError::new(2, format!("Failed to write quote JSON: {e}")))?;
    info!(path = %path.display(), "quote JSON written");
    Ok(())
}

/// Read a quote JSON file.
pub fn read_quote_json(path: &Path) -> Result<QuoteFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open quote JSON '{}': {e}", path.display())))?;
    let quote: QuoteFile =
        serde_json::from_reader(file).map_err(|e| AppError::new(2, format!("Invalid quote JSON: {e}")))?;
    Ok(quote)
}
