//! Sizing engine: fill-rate rules, area aggregation, commercial-size lookup,
//! and compliance assessment per NBR 5410 (6.2.11.1.6).
//!
//! Every function here is pure; results are recomputed from scratch on any
//! input change rather than kept in sync incrementally.

use raceway_catalog::sizes_for;
use raceway_core::{Cable, CalculationResult, CommercialSize, RacewayType};

use std::f64::consts::PI;

/// External cross-sectional area of a round cable: π·(d/2)².
pub fn circle_area(diameter: f64) -> f64 {
    PI * (diameter / 2.0).powi(2)
}

/// Maximum occupation fraction as a step function of the total individual
/// conductor count (NBR 5410 rules):
/// 1 cable → 53%, 2 cables → 31%, 3 or more → 40%.
///
/// A count of zero has no meaningful limit; `perform_calculations` skips the
/// division in that case.
pub fn fill_rate_limit(total_cables: u32) -> f64 {
    match total_cables {
        1 => 0.53,
        2 => 0.31,
        _ => 0.40,
    }
}

/// Aggregate the bill of materials into the derived sizing figures.
///
/// `reserve_percent` is the user's extra-capacity margin in percent (0–50);
/// zero means no reserve. Pure and idempotent: identical inputs produce
/// bit-identical results.
pub fn perform_calculations(cables: &[Cable], reserve_percent: f64) -> CalculationResult {
    let mut total_area = 0.0;
    let mut total_count = 0u32;

    for cable in cables {
        total_area += circle_area(cable.diameter) * cable.quantity as f64;
        total_count += cable.quantity;
    }

    let rate_limit = fill_rate_limit(total_count);

    // Area required by the cables, divided by the allowed fill rate.
    let mut min_required_area = if total_count > 0 {
        total_area / rate_limit
    } else {
        0.0
    };

    if reserve_percent > 0.0 {
        min_required_area *= 1.0 + reserve_percent / 100.0;
    }

    CalculationResult {
        total_cable_area: total_area,
        total_cable_count: total_count,
        fill_rate_limit: rate_limit,
        min_required_area,
    }
}

/// Smallest catalog size whose usable area covers `min_area`.
///
/// Returns None when `min_area` is zero (empty bill of materials — a normal
/// state, not an error). When the requirement exceeds the whole catalog the
/// largest entry is returned as a best-effort fallback; callers that care
/// can detect the shortfall via [`assess_compliance`] on the returned size.
pub fn suggest_commercial_size(
    min_area: f64,
    ty: RacewayType,
) -> Option<&'static CommercialSize> {
    if min_area == 0.0 {
        return None;
    }
    let list = sizes_for(ty);
    list.iter()
        .find(|size| size.area >= min_area)
        .or_else(|| list.last())
}

/// Occupation check of a calculation against the active raceway size — the
/// suggested one or a manual override, whichever is currently simulated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Compliance {
    /// total cable area / usable size area.
    pub occupation: f64,
    /// Fill-rate ceiling the occupation is judged against.
    pub limit: f64,
    /// occupation ≤ limit.
    pub compliant: bool,
    /// Usable area minus cable area (mm²); negative when physically overfull.
    pub free_area: f64,
}

/// Judge a size against the computed requirement. Works for any catalog
/// entry, not just the ideal suggestion (manual-override contract).
pub fn assess_compliance(result: &CalculationResult, size: &CommercialSize) -> Compliance {
    let occupation = if size.area > 0.0 {
        result.total_cable_area / size.area
    } else {
        0.0
    };
    Compliance {
        occupation,
        limit: result.fill_rate_limit,
        compliant: occupation <= result.fill_rate_limit,
        free_area: size.area - result.total_cable_area,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raceway_catalog::{category_by_id, draft_cable, size_by_id, CONDUIT_SIZES, TRAY_SIZES};
    use raceway_core::CableList;

    /// Build a list from (section, quantity, diameter-override) triples in
    /// the flexible 750V family.
    fn list_of(entries: &[(f64, u32, Option<f64>)]) -> CableList {
        let cat = category_by_id("cabo_uni_750v").unwrap();
        let mut list = CableList::new();
        for &(section, quantity, diameter) in entries {
            let draft = draft_cable(cat, section, quantity, diameter).unwrap();
            list.add(draft).unwrap();
        }
        list
    }

    #[test]
    fn test_fill_rate_bands() {
        assert_eq!(fill_rate_limit(1), 0.53);
        assert_eq!(fill_rate_limit(2), 0.31);
        assert_eq!(fill_rate_limit(3), 0.40);
        assert_eq!(fill_rate_limit(4), 0.40);
        assert_eq!(fill_rate_limit(100), 0.40);
    }

    #[test]
    fn test_single_cable_10mm() {
        // One 10mm cable: area 78.54mm², limit 53%, required ≈ 148.2mm².
        let list = list_of(&[(2.5, 1, Some(10.0))]);
        let result = perform_calculations(list.cables(), 0.0);
        assert_eq!(result.total_cable_count, 1);
        assert!((result.total_cable_area - 78.5398).abs() < 1e-3);
        assert_eq!(result.fill_rate_limit, 0.53);
        assert!((result.min_required_area - 148.188).abs() < 1e-2);
    }

    #[test]
    fn test_two_cables_6mm() {
        // Two 6mm cables: area 2·π·9 ≈ 56.55mm², limit 31%, ≈ 182.4mm².
        let list = list_of(&[(2.5, 2, Some(6.0))]);
        let result = perform_calculations(list.cables(), 0.0);
        assert_eq!(result.total_cable_count, 2);
        assert!((result.total_cable_area - 56.5487).abs() < 1e-3);
        assert_eq!(result.fill_rate_limit, 0.31);
        assert!((result.min_required_area - 182.415).abs() < 1e-2);
    }

    #[test]
    fn test_five_conductors_use_40_percent() {
        // Band depends only on the count, not on diameters.
        let list = list_of(&[(2.5, 2, None), (10.0, 3, None)]);
        let result = perform_calculations(list.cables(), 0.0);
        assert_eq!(result.total_cable_count, 5);
        assert_eq!(result.fill_rate_limit, 0.40);
    }

    #[test]
    fn test_total_area_sums_per_quantity() {
        let list = list_of(&[(2.5, 3, Some(4.0)), (6.0, 2, Some(8.0))]);
        let result = perform_calculations(list.cables(), 0.0);
        let expected = 3.0 * circle_area(4.0) + 2.0 * circle_area(8.0);
        assert!((result.total_cable_area - expected).abs() < 1e-12);
        assert_eq!(result.total_cable_count, 5);
    }

    #[test]
    fn test_empty_list_yields_zero() {
        let result = perform_calculations(&[], 20.0);
        assert_eq!(result.total_cable_count, 0);
        assert_eq!(result.total_cable_area, 0.0);
        assert_eq!(result.min_required_area, 0.0);
    }

    #[test]
    fn test_idempotent() {
        let list = list_of(&[(4.0, 2, None), (16.0, 1, None)]);
        let a = perform_calculations(list.cables(), 20.0);
        let b = perform_calculations(list.cables(), 20.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_reserve_monotonic() {
        let list = list_of(&[(4.0, 3, None)]);
        let mut prev = 0.0;
        for reserve in (0..=50).step_by(5) {
            let result = perform_calculations(list.cables(), reserve as f64);
            assert!(
                result.min_required_area >= prev,
                "required area decreased at reserve {}%",
                reserve
            );
            prev = result.min_required_area;
        }
        // 20% reserve is exactly a 1.2 multiplier.
        let base = perform_calculations(list.cables(), 0.0);
        let with_reserve = perform_calculations(list.cables(), 20.0);
        assert!((with_reserve.min_required_area - base.min_required_area * 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_suggest_first_fitting_size() {
        // 5000mm² requirement lands exactly on the 100x50 tray.
        let size = suggest_commercial_size(5000.0, RacewayType::Tray).unwrap();
        assert_eq!(size.id, "cke_100_50");
        // Just above it, the next entry by area.
        let size = suggest_commercial_size(5000.1, RacewayType::Tray).unwrap();
        assert_eq!(size.id, "cke_200_50");
        // Conduit catalog: 400mm² needs a 1" DN 25.
        let size = suggest_commercial_size(400.0, RacewayType::Conduit).unwrap();
        assert_eq!(size.id, "dn_25");
    }

    #[test]
    fn test_suggest_minimal_area_across_catalog() {
        // First-fit on an ascending catalog must return the smallest entry
        // that covers the requirement, including around tied areas
        // (200x50 and 100x100 are both 10000mm²).
        for catalog in [TRAY_SIZES, CONDUIT_SIZES] {
            let ty = match catalog[0].dims {
                raceway_core::RacewayDims::Tray { .. } => RacewayType::Tray,
                raceway_core::RacewayDims::Conduit { .. } => RacewayType::Conduit,
            };
            for required in catalog.iter().flat_map(|s| [s.area - 0.5, s.area]) {
                let suggested = suggest_commercial_size(required, ty).unwrap();
                let minimal = catalog
                    .iter()
                    .filter(|s| s.area >= required)
                    .map(|s| s.area)
                    .fold(f64::INFINITY, f64::min);
                assert_eq!(
                    suggested.area, minimal,
                    "{} suggested for {:.1} mm² is not the minimal fit",
                    suggested.id, required
                );
            }
        }
    }

    #[test]
    fn test_suggest_none_for_empty() {
        assert!(suggest_commercial_size(0.0, RacewayType::Tray).is_none());
        assert!(suggest_commercial_size(0.0, RacewayType::Conduit).is_none());
    }

    #[test]
    fn test_suggest_falls_back_to_largest() {
        let size = suggest_commercial_size(1e9, RacewayType::Tray).unwrap();
        assert_eq!(size.id, TRAY_SIZES.last().unwrap().id);
        let size = suggest_commercial_size(1e9, RacewayType::Conduit).unwrap();
        assert_eq!(size.id, CONDUIT_SIZES.last().unwrap().id);
        // The fallback is detectable only by comparing areas.
        assert!(size.area < 1e9);
    }

    #[test]
    fn test_compliance_against_override() {
        let list = list_of(&[(2.5, 2, Some(6.0))]);
        let result = perform_calculations(list.cables(), 0.0);

        // The suggested conduit is compliant with room to spare.
        let ideal = suggest_commercial_size(result.min_required_area, RacewayType::Conduit).unwrap();
        let ok = assess_compliance(&result, ideal);
        assert!(ok.compliant);
        assert!(ok.free_area > 0.0);

        // A manual override down to DN 15 (201.06mm²) with five 6mm cables
        // puts occupation at ~70%, breaching the 40% band.
        let list = list_of(&[(2.5, 5, Some(6.0))]);
        let result = perform_calculations(list.cables(), 0.0);
        let small = size_by_id(RacewayType::Conduit, "dn_15").unwrap();
        let bad = assess_compliance(&result, small);
        assert!((bad.occupation - 5.0 * circle_area(6.0) / 201.06).abs() < 1e-9);
        assert!(!bad.compliant);
    }
}
