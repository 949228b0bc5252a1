//! Domain types used throughout the quote pipeline.
//!
//! This module defines:
//!
//! - catalog vocabulary (`Standard`, `Complexity`, `Modality`)
//! - the transient request (`QuoteRequest`)
//! - derived values (`QuoteResult`, `VariantSet`, `VariantTier`)

pub mod types;

pub use types::*;
