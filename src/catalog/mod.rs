//! Static reference data: the standards list and the rate table.
//!
//! The catalog is compiled in and validated once, on first access through
//! [`catalog`]. After that every lookup is infallible in practice: an unknown
//! standard code is "no selection", never an error.

use std::collections::HashSet;
use std::sync::OnceLock;

use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::{Complexity, Modality, Standard};
use crate::error::CatalogError;

/// Per-participant price for one complexity × modality pair (whole MXN).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RateEntry {
    pub complexity: Complexity,
    pub modality: Modality,
    pub price: u64,
}

const fn rate(complexity: Complexity, modality: Modality, price: u64) -> RateEntry {
    RateEntry {
        complexity,
        modality,
        price,
    }
}

const fn standard(code: &'static str, name: &'static str, complexity: Complexity) -> Standard {
    Standard {
        code,
        name,
        complexity,
    }
}

pub const STANDARDS: &[Standard] = &[
    standard("EC0680", "Supervisión en seguridad industrial", Complexity::Low),
    standard("EC0449.01", "Gestión de los Servicios Preventivos SST", Complexity::Medium),
    standard("EC0861", "Gestión de la seguridad integral", Complexity::High),
    standard("EC1080", "Asesoría normativa en seguridad, salud y ambiente", Complexity::High),
    standard("EC0397", "Vigilancia del cumplimiento de la normatividad", Complexity::High),
    standard("EC0889", "Estudios de riesgo en procesos industriales", Complexity::High),
    standard("EC1183", "Trabajo seguro en alturas", Complexity::Medium),
];

/// Full price (CONOCER + DC-3, everything included) per participant.
pub const RATES: &[RateEntry] = &[
    rate(Complexity::Low, Modality::Presencial, 6200),
    rate(Complexity::Low, Modality::Hibrido, 6600),
    rate(Complexity::Low, Modality::Virtual, 4800),
    rate(Complexity::Medium, Modality::Presencial, 7900),
    rate(Complexity::Medium, Modality::Hibrido, 8400),
    rate(Complexity::Medium, Modality::Virtual, 6200),
    rate(Complexity::High, Modality::Presencial, 9500),
    rate(Complexity::High, Modality::Hibrido, 9900),
    rate(Complexity::High, Modality::Virtual, 7400),
];

/// Read-only view over a standards list and a rate table.
#[derive(Debug, Clone, Copy)]
pub struct CatalogStore {
    standards: &'static [Standard],
    rates: &'static [RateEntry],
}

impl CatalogStore {
    /// Build a catalog and check it for completeness.
    pub fn new(
        standards: &'static [Standard],
        rates: &'static [RateEntry],
    ) -> Result<Self, CatalogError> {
        let store = Self { standards, rates };
        store.validate()?;
        Ok(store)
    }

    /// Check the catalog invariants.
    ///
    /// - at least one standard, no duplicate codes
    /// - every complexity × modality pair has exactly one rate
    /// - every rate is positive
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.standards.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for s in self.standards {
            if !seen.insert(s.code) {
                return Err(CatalogError::DuplicateCode(s.code.to_string()));
            }
        }

        let mut pairs = HashSet::new();
        for r in self.rates {
            if !pairs.insert((r.complexity, r.modality)) {
                return Err(CatalogError::DuplicateRate {
                    complexity: r.complexity,
                    modality: r.modality,
                });
            }
        }

        for complexity in Complexity::ALL {
            for modality in Modality::ALL {
                match self.rate(complexity, modality) {
                    None => return Err(CatalogError::MissingRate { complexity, modality }),
                    Some(0) => return Err(CatalogError::NonPositiveRate { complexity, modality }),
                    Some(_) => {}
                }
            }
        }

        debug!(
            standards = self.standards.len(),
            rates = self.rates.len(),
            "catalog validated"
        );
        Ok(())
    }

    /// All standards, in catalog order.
    pub fn standards(&self) -> &'static [Standard] {
        self.standards
    }

    /// Look up a standard by its exact code. Unknown codes yield `None`.
    pub fn standard_by_code(&self, code: &str) -> Option<&'static Standard> {
        self.standards.iter().find(|s| s.code == code)
    }

    /// Per-participant price for a complexity × modality pair.
    ///
    /// A validated catalog always has the pair; on an unvalidated one a
    /// missing pair prices at 0, which downstream reads as "no selection".
    pub fn unit_price(&self, complexity: Complexity, modality: Modality) -> u64 {
        match self.rate(complexity, modality) {
            Some(price) => price,
            None => {
                warn!(?complexity, ?modality, "no rate for pair");
                0
            }
        }
    }

    fn rate(&self, complexity: Complexity, modality: Modality) -> Option<u64> {
        self.rates
            .iter()
            .find(|r| r.complexity == complexity && r.modality == modality)
            .map(|r| r.price)
    }
}

static CATALOG: OnceLock<Result<CatalogStore, CatalogError>> = OnceLock::new();

/// The process-wide built-in catalog, validated on first access.
pub fn catalog() -> Result<&'static CatalogStore, CatalogError> {
    CATALOG
        .get_or_init(|| CatalogStore::new(STANDARDS, RATES))
        .as_ref()
        .map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        let store = catalog().unwrap();
        assert_eq!(store.standards().len(), 7);
    }

    #[test]
    fn lookup_by_code() {
        let store = catalog().unwrap();
        let s = store.standard_by_code("EC0861").unwrap();
        assert_eq!(s.complexity, Complexity::High);
        assert_eq!(store.standard_by_code("EC0449.01").unwrap().code, "EC0449.01");
        assert!(store.standard_by_code(" EC0449.01 ").is_none());
        assert!(store.standard_by_code("ec0680").is_none());
        assert!(store.standard_by_code("EC9999").is_none());
        assert!(store.standard_by_code("").is_none());
    }

    #[test]
    fn rate_table_values() {
        let store = catalog().unwrap();
        assert_eq!(store.unit_price(Complexity::Low, Modality::Presencial), 6200);
        assert_eq!(store.unit_price(Complexity::Medium, Modality::Hibrido), 8400);
        assert_eq!(store.unit_price(Complexity::High, Modality::Virtual), 7400);
    }

    #[test]
    fn missing_pair_is_rejected() {
        const PARTIAL: &[RateEntry] = &[
            rate(Complexity::Low, Modality::Presencial, 6200),
            rate(Complexity::Low, Modality::Hibrido, 6600),
        ];
        let err = CatalogStore::new(STANDARDS, PARTIAL).unwrap_err();
        assert_eq!(
            err,
            CatalogError::MissingRate {
                complexity: Complexity::Low,
                modality: Modality::Virtual,
            }
        );
    }

    #[test]
    fn zero_price_is_rejected() {
        const ZERO: &[RateEntry] = &[
            rate(Complexity::Low, Modality::Presencial, 0),
            rate(Complexity::Low, Modality::Hibrido, 6600),
            rate(Complexity::Low, Modality::Virtual, 4800),
            rate(Complexity::Medium, Modality::Presencial, 7900),
            rate(Complexity::Medium, Modality::Hibrido, 8400),
            rate(Complexity::Medium, Modality::Virtual, 6200),
            rate(Complexity::High, Modality::Presencial, 9500),
            rate(Complexity::High, Modality::Hibrido, 9900),
            rate(Complexity::High, Modality::Virtual, 7400),
        ];
        let err = CatalogStore::new(STANDARDS, ZERO).unwrap_err();
        assert!(matches!(err, CatalogError::NonPositiveRate { .. }));
    }

    #[test]
    fn duplicate_rate_pair_is_rejected() {
        const DOUBLED: &[RateEntry] = &[
            rate(Complexity::Low, Modality::Presencial, 6200),
            rate(Complexity::Low, Modality::Hibrido, 6600),
            rate(Complexity::Low, Modality::Virtual, 4800),
            rate(Complexity::Medium, Modality::Presencial, 7900),
            rate(Complexity::Medium, Modality::Hibrido, 8400),
            rate(Complexity::Medium, Modality::Virtual, 6200),
            rate(Complexity::High, Modality::Presencial, 9500),
            rate(Complexity::High, Modality::Hibrido, 9900),
            rate(Complexity::High, Modality::Virtual, 7400),
            rate(Complexity::Low, Modality::Presencial, 1),
        ];
        let err = CatalogStore::new(STANDARDS, DOUBLED).unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateRate {
                complexity: Complexity::Low,
                modality: Modality::Presencial,
            }
        );
    }

    #[test]
    fn duplicate_code_is_rejected() {
        const DUPES: &[Standard] = &[
            standard("EC0680", "A", Complexity::Low),
            standard("EC0680", "B", Complexity::High),
        ];
        let err = CatalogStore::new(DUPES, RATES).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateCode("EC0680".to_string()));
        assert_eq!(CatalogStore::new(&[], RATES).unwrap_err(), CatalogError::Empty);
    }
}
