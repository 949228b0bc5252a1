//! Text formatting shared by the PDF layout and terminal output.
//!
//! We keep formatting code in one place so the pricing code stays free of
//! presentation details and output changes are localized.

use crate::catalog::CatalogStore;
use crate::domain::{Modality, QuoteResult, Standard, VariantSet};

/// Group digits in thousands with commas: `18600` → `18,600`.
pub fn fmt_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Currency amount as printed on quotes: `$6,200 MXN`.
pub fn fmt_mxn(value: u64) -> String {
    format!("${} MXN", fmt_thousands(value))
}

pub fn standard_line(standard: &Standard) -> String {
    format!(
        "Estándar: {} – {} ({})",
        standard.code,
        standard.name,
        standard.complexity.display_name()
    )
}

pub fn modality_line(modality: Modality) -> String {
    format!("Modalidad: {}", modality.label())
}

pub fn participants_line(participants: u32) -> String {
    format!("Número de participantes: {participants}")
}

pub fn unit_price_line(unit_price: u64) -> String {
    format!(
        "Precio unitario (CONOCER + DC-3, todo incluido): {}",
        fmt_mxn(unit_price)
    )
}

pub fn total_line(total_price: u64) -> String {
    format!("Total inversión: {}", fmt_mxn(total_price))
}

/// Comparative lines without the bullet marker, in display order.
pub fn variant_lines(variants: &VariantSet) -> Vec<String> {
    variants
        .tiers()
        .iter()
        .map(|(tier, price)| format!("{}: {}", tier.label(), fmt_mxn(*price)))
        .collect()
}

/// Format the quote for the terminal.
pub fn format_quote_summary(
    standard: &Standard,
    modality: Modality,
    participants: u32,
    result: &QuoteResult,
    variants: &VariantSet,
) -> String {
    let mut out = String::new();

    out.push_str("=== Cotización CONOCER & DC-3 ===\n");
    out.push_str(&standard_line(standard));
    out.push('\n');
    out.push_str(&modality_line(modality));
    out.push('\n');
    out.push_str(&participants_line(participants));
    out.push('\n');
    out.push_str(&unit_price_line(result.unit_price));
    out.push('\n');
    out.push_str(&total_line(result.total_price));
    out.push('\n');

    out.push_str("\nComparativo por participante:\n");
    for line in variant_lines(variants) {
        out.push_str(&format!("- {line}\n"));
    }

    out
}

/// Format the catalog as a table (code, complexity, prices per modality).
pub fn format_standards(catalog: &CatalogStore) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<10} {:<6} {:>11} {:>11} {:>11}  {}\n",
        "code", "tier", "presencial", "hibrido", "virtual", "name"
    ));
    out.push_str(&format!(
        "{:-<10} {:-<6} {:-<11} {:-<11} {:-<11}  {:-<4}\n",
        "", "", "", "", "", ""
    ));

    for s in catalog.standards() {
        let prices: Vec<String> = Modality::ALL
            .iter()
            .map(|&m| fmt_thousands(catalog.unit_price(s.complexity, m)))
            .collect();
        out.push_str(&format!(
            "{:<10} {:<6} {:>11} {:>11} {:>11}  {}\n",
            s.code,
            s.complexity.display_name(),
            prices[0],
            prices[1],
            prices[2],
            s.name
        ));
    }

    out
}
