use cotizador_conocer::catalog::{STANDARDS, catalog};
use cotizador_conocer::domain::{Modality, QuoteRequest, QuoteResult, VariantSet, VariantTier};
use cotizador_conocer::quote::{compute_quote, compute_variants};
use cotizador_conocer::report::{BlockRole, build_report};
use proptest::prelude::*;

fn modality() -> impl Strategy<Value = Modality> {
    prop_oneof![
        Just(Modality::Presencial),
        Just(Modality::Hibrido),
        Just(Modality::Virtual),
    ]
}

fn standard_code() -> impl Strategy<Value = &'static str> {
    prop::sample::select(STANDARDS.iter().map(|s| s.code).collect::<Vec<_>>())
}

proptest! {
    #[test]
    fn full_tier_equals_unit_price(code in standard_code(), m in modality()) {
        let q = compute_quote(catalog().unwrap(), &QuoteRequest::new(Some(code), Some(m), 1));
        prop_assert_eq!(compute_variants(q.unit_price).conocer_plus_dc3, q.unit_price);
    }

    #[test]
    fn tiers_are_monotonic(p in 1u64..10_000_000) {
        let v = compute_variants(p);
        prop_assert!(v.no_certification <= v.dc3_only);
        prop_assert!(v.dc3_only <= v.conocer_only);
        prop_assert!(v.conocer_only <= v.conocer_plus_dc3);
        prop_assert_eq!(v.conocer_plus_dc3, p);
    }

    #[test]
    fn total_is_linear_in_participants(code in standard_code(), m in modality(), n in 0u32..10_000) {
        let store = catalog().unwrap();
        let one = compute_quote(store, &QuoteRequest::new(Some(code), Some(m), 1));
        let many = compute_quote(store, &QuoteRequest::new(Some(code), Some(m), n));
        prop_assert_eq!(many.total_price, one.unit_price * u64::from(n));
    }

    #[test]
    fn onsite_kit_iff_not_virtual(code in standard_code(), m in modality(), n in 1u32..500) {
        let q = compute_quote(catalog().unwrap(), &QuoteRequest::new(Some(code), Some(m), n));
        prop_assert_eq!(q.includes_onsite_kit, m != Modality::Virtual);
    }

    #[test]
    fn missing_field_yields_zero(code in standard_code(), m in modality(), n in 0u32..500, which in 0usize..3) {
        let request = match which {
            0 => QuoteRequest::new(None, Some(m), n),
            1 => QuoteRequest::new(Some(code), None, n),
            _ => QuoteRequest::new(Some(code), Some(m), 0),
        };
        prop_assert_eq!(compute_quote(catalog().unwrap(), &request), QuoteResult::default());
    }

    #[test]
    fn complete_reports_have_one_total_and_four_tiers(code in standard_code(), m in modality(), n in 1u32..1_000) {
        let store = catalog().unwrap();
        let q = compute_quote(store, &QuoteRequest::new(Some(code), Some(m), n));
        let v = compute_variants(q.unit_price);
        let doc = build_report(store.standard_by_code(code), Some(m), n, &q, &v).unwrap();

        prop_assert_eq!(doc.lines_with_role(BlockRole::TotalPrice).count(), 1);
        let tiers: Vec<VariantTier> = doc
            .lines
            .iter()
            .filter_map(|l| match l.role {
                BlockRole::ComparativeBullet(t) => Some(t),
                _ => None,
            })
            .collect();
        prop_assert_eq!(tiers, VariantTier::ALL.to_vec());
    }
}

#[test]
fn zero_unit_price_zero_tiers() {
    assert_eq!(compute_variants(0), VariantSet::default());
}

#[test]
fn reference_quote_ec0680_presencial() {
    let q = compute_quote(
        catalog().unwrap(),
        &QuoteRequest::new(Some("EC0680"), Some(Modality::Presencial), 3),
    );
    assert_eq!(q.unit_price, 6200);
    assert_eq!(q.total_price, 18600);
    assert_eq!(
        compute_variants(q.unit_price),
        VariantSet {
            no_certification: 3100,
            dc3_only: 4030,
            conocer_only: 5270,
            conocer_plus_dc3: 6200,
        }
    );
}
