//! Shared domain types.
//!
//! Everything here is a small value type. Catalog entries are `'static` and
//! borrowed; requests and results are `Copy`-cheap and recomputed on every
//! input change.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Complexity tier of a competency standard. Selects the row of the rate table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl Complexity {
    pub const ALL: [Complexity; 3] = [Complexity::Low, Complexity::Medium, Complexity::High];

    /// Label printed on quotes (`Baja`, `Media`, `Alta`).
    pub fn display_name(self) -> &'static str {
        match self {
            Complexity::Low => "Baja",
            Complexity::Medium => "Media",
            Complexity::High => "Alta",
        }
    }
}

/// Delivery mode of the training.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    /// On-site delivery.
    Presencial,
    /// One on-site session plus the online platform.
    Hibrido,
    /// Online platform only.
    Virtual,
}

impl Modality {
    pub const ALL: [Modality; 3] = [Modality::Presencial, Modality::Hibrido, Modality::Virtual];

    /// Whether the on-site training kit (and integrated travel costs) is bundled.
    ///
    /// Only modalities with an on-site component carry it.
    pub fn includes_onsite_kit(self) -> bool {
        matches!(self, Modality::Presencial | Modality::Hibrido)
    }

    /// Fixed label used on quotes.
    pub fn label(self) -> &'static str {
        match self {
            Modality::Presencial => "Presencial (incluye viáticos + dummie)",
            Modality::Hibrido => "Híbrido (1 presencial + plataforma + dummie)",
            Modality::Virtual => "Virtual (solo plataforma)",
        }
    }

    /// Short name, as accepted on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Modality::Presencial => "presencial",
            Modality::Hibrido => "hibrido",
            Modality::Virtual => "virtual",
        }
    }
}

/// A certifiable competency standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Standard {
    pub code: &'static str,
    pub name: &'static str,
    pub complexity: Complexity,
}

/// The three inputs supplied by the front end.
///
/// `None` models "nothing selected yet"; a zero participant count is tolerated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub standard: Option<String>,
    pub modality: Option<Modality>,
    pub participants: u32,
}

impl QuoteRequest {
    pub fn new(standard: Option<&str>, modality: Option<Modality>, participants: u32) -> Self {
        Self {
            standard: standard.map(str::to_string),
            modality,
            participants,
        }
    }
}

/// Derived price for a request. The all-zero value means "incomplete selection".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteResult {
    pub unit_price: u64,
    pub total_price: u64,
    pub includes_onsite_kit: bool,
}

impl QuoteResult {
    pub fn is_complete(&self) -> bool {
        self.unit_price > 0
    }
}

/// One of the four comparative price points, ordered from least to most
/// credentialing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantTier {
    NoCertification,
    Dc3Only,
    ConocerOnly,
    ConocerPlusDc3,
}

impl VariantTier {
    pub const ALL: [VariantTier; 4] = [
        VariantTier::NoCertification,
        VariantTier::Dc3Only,
        VariantTier::ConocerOnly,
        VariantTier::ConocerPlusDc3,
    ];

    pub fn label(self) -> &'static str {
        match self {
            VariantTier::NoCertification => "Sin certificación",
            VariantTier::Dc3Only => "Solo DC-3",
            VariantTier::ConocerOnly => "Solo CONOCER",
            VariantTier::ConocerPlusDc3 => "CONOCER + DC-3",
        }
    }
}

/// Comparative per-participant prices derived from the full unit price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantSet {
    pub no_certification: u64,
    pub dc3_only: u64,
    pub conocer_only: u64,
    pub conocer_plus_dc3: u64,
}

impl VariantSet {
    pub fn get(&self, tier: VariantTier) -> u64 {
        match tier {
            VariantTier::NoCertification => self.no_certification,
            VariantTier::Dc3Only => self.dc3_only,
            VariantTier::ConocerOnly => self.conocer_only,
            VariantTier::ConocerPlusDc3 => self.conocer_plus_dc3,
        }
    }

    /// Tiers with their prices, in display order.
    pub fn tiers(&self) -> [(VariantTier, u64); 4] {
        VariantTier::ALL.map(|tier| (tier, self.get(tier)))
    }
}
