//! Text bar chart of the comparative tiers.
//!
//! Bars are scaled against the largest tier (or 1 when everything is zero),
//! so the output is deterministic and safe for golden tests.

use crate::domain::VariantSet;
use crate::report::format::fmt_thousands;

const LABEL_WIDTH: usize = 17;
const BAR: char = '█';

/// Widest bar the chart will draw; larger requests are clamped.
pub const MAX_CHART_WIDTH: usize = 200;

/// Render one bar per tier, `width` columns for the longest bar.
pub fn render_variant_chart(variants: &VariantSet, width: usize) -> String {
    let width = width.clamp(1, MAX_CHART_WIDTH);
    let tiers = variants.tiers();
    let max = tiers.iter().map(|(_, v)| *v).max().unwrap_or(0).max(1);

    let mut out = String::from("Comparativo por participante (MXN)\n");
    for (tier, value) in tiers {
        let bar: String = std::iter::repeat_n(BAR, bar_len(value, max, width)).collect();
        out.push_str(&format!(
            "{:<LABEL_WIDTH$} {bar:<width$} {:>7}\n",
            tier.label(),
            fmt_thousands(value),
        ));
    }
    out
}

/// `value / max * width`, rounded to the nearest column (ties down).
fn bar_len(value: u64, max: u64, width: usize) -> usize {
    let scaled = u128::from(value) * width as u128;
    let max = u128::from(max);
    ((scaled * 2 + max - 1) / (max * 2)) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::compute_variants;

    #[test]
    fn chart_golden_snapshot() {
        let txt = render_variant_chart(&compute_variants(6200), 20);
        let expected = concat!(
            "Comparativo por participante (MXN)\n",
            "Sin certificación ██████████             3,100\n",
            "Solo DC-3         █████████████          4,030\n",
            "Solo CONOCER      █████████████████      5,270\n",
            "CONOCER + DC-3    ████████████████████   6,200\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn zero_variants_draw_empty_bars() {
        let txt = render_variant_chart(&VariantSet::default(), 10);
        assert_eq!(txt.lines().count(), 5);
        assert!(!txt.contains(BAR));
    }

    #[test]
    fn oversized_width_is_clamped() {
        let txt = render_variant_chart(&compute_variants(6200), usize::MAX);
        let full = txt.lines().last().unwrap();
        assert_eq!(full.chars().filter(|&c| c == BAR).count(), MAX_CHART_WIDTH);
    }
}
