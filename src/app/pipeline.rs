//! The quote pipeline shared by every front-end command.
//!
//! `QuoteRequest -> compute_quote -> compute_variants -> (optional) build_report`
//!
//! Each step is pure; only `export_quote` touches the filesystem.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::catalog::CatalogStore;
use crate::domain::{QuoteRequest, QuoteResult, VariantSet};
use crate::error::AppError;
use crate::quote::{Selection, compute_variants, quote_selection, resolve};
use crate::report::{ReportDocument, build_report};

/// All computed values for one request.
#[derive(Debug, Clone)]
pub struct QuoteRun {
    pub request: QuoteRequest,
    /// `None` when the request is incomplete or names an unknown standard.
    pub selection: Option<Selection>,
    pub result: QuoteResult,
    pub variants: VariantSet,
}

impl QuoteRun {
    pub fn is_complete(&self) -> bool {
        self.selection.is_some() && self.result.is_complete()
    }
}

/// Price a request and derive its comparative tiers.
pub fn run_quote(catalog: &CatalogStore, request: QuoteRequest) -> QuoteRun {
    let selection = resolve(catalog, &request);
    let result = selection
        .as_ref()
        .map(|s| quote_selection(catalog, s))
        .unwrap_or_default();
    let variants = compute_variants(result.unit_price);

    debug!(
        standard = request.standard.as_deref().unwrap_or(""),
        modality = request.modality.map(|m| m.key()).unwrap_or(""),
        participants = request.participants,
        unit_price = result.unit_price,
        total_price = result.total_price,
        "quote computed"
    );

    QuoteRun {
        request,
        selection,
        result,
        variants,
    }
}

/// Lay out the quote document, if the run is complete.
pub fn build_document(run: &QuoteRun) -> Option<ReportDocument> {
    let selection = run.selection.as_ref()?;
    build_report(
        Some(selection.standard),
        Some(selection.modality),
        selection.participants,
        &run.result,
        &run.variants,
    )
}

/// Run the full pipeline and save the PDF into `dir`.
///
/// Incomplete requests export nothing and return `Ok(None)`.
pub fn export_quote(
    catalog: &CatalogStore,
    request: QuoteRequest,
    dir: &Path,
) -> Result<Option<PathBuf>, AppError> {
    let run = run_quote(catalog, request);
    let Some(doc) = build_document(&run) else {
        info!("incomplete selection; nothing exported");
        return Ok(None);
    };
    crate::io::export::write_report_pdf(dir, &doc).map(Some)
}
