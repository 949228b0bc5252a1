//! Comparative tier prices derived from the full unit price.
//!
//! Ratios are product policy and fixed (percent of the CONOCER + DC-3 price):
//!
//! | tier              | ratio |
//! |-------------------|-------|
//! | CONOCER + DC-3    | 100   |
//! | solo CONOCER      | 85    |
//! | solo DC-3         | 65    |
//! | sin certificación | 50    |
//!
//! Rounding is half-up, computed in integers so half values are exact.

use crate::domain::VariantSet;

const CONOCER_ONLY_PCT: u64 = 85;
const DC3_ONLY_PCT: u64 = 65;
const NO_CERTIFICATION_PCT: u64 = 50;

/// Derive the four comparative prices. A zero unit price yields all zeros.
pub fn compute_variants(unit_price: u64) -> VariantSet {
    if unit_price == 0 {
        return VariantSet::default();
    }
    VariantSet {
        no_certification: pct_round_half_up(unit_price, NO_CERTIFICATION_PCT),
        dc3_only: pct_round_half_up(unit_price, DC3_ONLY_PCT),
        conocer_only: pct_round_half_up(unit_price, CONOCER_ONLY_PCT),
        conocer_plus_dc3: unit_price,
    }
}

/// `round(value * pct / 100)` with ties rounded up.
fn pct_round_half_up(value: u64, pct: u64) -> u64 {
    let scaled = u128::from(value) * u128::from(pct);
    ((scaled + 50) / 100) as u64
}
