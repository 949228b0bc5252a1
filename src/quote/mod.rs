//! Quote calculation: request → unit price, total, inclusion flag.
//!
//! Both operations here are pure. An incomplete request is not an error: it
//! prices at zero and the caller treats it as "nothing to quote yet".

use tracing::debug;

use crate::catalog::CatalogStore;
use crate::domain::{Modality, QuoteRequest, QuoteResult, Standard};

pub mod variants;

pub use variants::compute_variants;

/// A request whose three inputs are all present and usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub standard: &'static Standard,
    pub modality: Modality,
    pub participants: u32,
}

/// Resolve a request against the catalog.
///
/// Returns `None` for an unknown or missing standard, a missing modality, or
/// zero participants.
pub fn resolve(catalog: &CatalogStore, request: &QuoteRequest) -> Option<Selection> {
    let standard = request
        .standard
        .as_deref()
        .and_then(|code| catalog.standard_by_code(code))?;
    let modality = request.modality?;
    if request.participants == 0 {
        return None;
    }
    Some(Selection {
        standard,
        modality,
        participants: request.participants,
    })
}

/// Price a request.
pub fn compute_quote(catalog: &CatalogStore, request: &QuoteRequest) -> QuoteResult {
    let Some(selection) = resolve(catalog, request) else {
        debug!(?request, "incomplete selection; zero quote");
        return QuoteResult::default();
    };
    quote_selection(catalog, &selection)
}

/// Price an already-resolved selection.
pub fn quote_selection(catalog: &CatalogStore, selection: &Selection) -> QuoteResult {
    let unit_price = catalog.unit_price(selection.standard.complexity, selection.modality);
    if unit_price == 0 {
        return QuoteResult::default();
    }
    QuoteResult {
        unit_price,
        total_price: unit_price * u64::from(selection.participants),
        includes_onsite_kit: selection.modality.includes_onsite_kit(),
    }
}
