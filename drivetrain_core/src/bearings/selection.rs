//! Catalog search.
//!
//! Both searches keep rows that satisfy the requirement, then take the
//! smallest bore among survivors (first listed on a tie). The catalog is
//! immutable, so identical requests always return identical specs.

use tracing::{debug, warn};

use super::catalog::CatalogRow;
use super::{BearingSpec, BearingType};
use crate::errors::{require_finite, CalcError, CalcResult};
use crate::outcome::Outcome;

/// Pick the smallest-bore bearing with `bore >= bore_required_m` and
/// `C >= rating_required_kn`.
///
/// Returns [`Outcome::NoMatch`] with [`fallback_for_bore`] when no row
/// qualifies.
pub fn select_bearing(
    bearing_type: BearingType,
    bore_required_m: f64,
    rating_required_kn: f64,
) -> CalcResult<Outcome<BearingSpec>> {
    check_bore(bore_required_m)?;
    require_finite("rating_required_kn", rating_required_kn)?;

    let found = smallest_bore(
        bearing_type
            .catalog()
            .iter()
            .filter(|r| r.c >= rating_required_kn)
            .filter(|r| r.d >= bore_required_m),
    );
    Ok(finish(bearing_type, bore_required_m, found))
}

/// Pick the smallest-bore bearing with `bore >= bore_required_m`, ignoring
/// load ratings.
pub fn resize_for_bearings(bearing_type: BearingType, bore_required_m: f64) -> CalcResult<Outcome<BearingSpec>> {
    check_bore(bore_required_m)?;

    let found = smallest_bore(bearing_type.catalog().iter().filter(|r| r.d >= bore_required_m));
    Ok(finish(bearing_type, bore_required_m, found))
}

/// Oversized placeholder used when the catalog has no adequate row.
///
/// | required bore | bore | facewidth | mass |
/// |---|---|---|---|
/// | < 2.0 m | 2.0 | 2.0 | 5000 |
/// | < 2.5 m | 2.5 | 2.5 | 7000 |
/// | < 3.0 m | 3.0 | 3.0 | 9000 |
/// | otherwise | 5.0 | 4.0 | 15000 |
///
/// Ratings are zero. The outer diameter is a nominal `1.25 × bore`.
pub fn fallback_for_bore(bearing_type: BearingType, bore_required_m: f64) -> BearingSpec {
    let (bore_m, facewidth_m, mass_kg) = if bore_required_m < 2.0 {
        (2.0, 2.0, 5000.0)
    } else if bore_required_m < 2.5 {
        (2.5, 2.5, 7000.0)
    } else if bore_required_m < 3.0 {
        (3.0, 3.0, 9000.0)
    } else {
        (5.0, 4.0, 15000.0)
    };

    BearingSpec {
        bearing_type,
        bore_m,
        outer_diameter_m: 1.25 * bore_m,
        facewidth_m,
        dynamic_rating_kn: 0.0,
        static_rating_kn: 0.0,
        mass_kg,
    }
}

fn check_bore(bore_required_m: f64) -> CalcResult<()> {
    if !bore_required_m.is_finite() || bore_required_m < 0.0 {
        return Err(CalcError::invalid_input(
            "bore_required_m",
            bore_required_m.to_string(),
            "Required bore must be a finite, non-negative diameter",
        ));
    }
    Ok(())
}

fn smallest_bore<'a>(rows: impl Iterator<Item = &'a CatalogRow>) -> Option<&'a CatalogRow> {
    // Equal bores keep the earlier row
    rows.fold(None, |best: Option<&CatalogRow>, r| match best {
        Some(b) if b.d <= r.d => Some(b),
        _ => Some(r),
    })
}

fn finish(bearing_type: BearingType, bore_required_m: f64, found: Option<&CatalogRow>) -> Outcome<BearingSpec> {
    match found {
        Some(row) => {
            debug!(bearing = %bearing_type, bore = row.d, facewidth = row.b, "catalog match");
            Outcome::Converged(BearingSpec::from_row(bearing_type, row))
        }
        None => {
            let fallback = fallback_for_bore(bearing_type, bore_required_m);
            warn!(
                bearing = %bearing_type,
                bore_required = bore_required_m,
                fallback_bore = fallback.bore_m,
                "no suitable catalog bearing, using oversized fallback"
            );
            Outcome::NoMatch { fallback }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::OutcomeStatus;

    #[test]
    fn test_srb_rated_selection() {
        let pick = select_bearing(BearingType::Srb, 0.6, 5000.0).unwrap();
        assert_eq!(pick.status(), OutcomeStatus::Converged);
        let spec = pick.into_value();
        assert_eq!(spec.bore_m, 0.6);
        assert_eq!(spec.outer_diameter_m, 0.87);
        assert_eq!(spec.facewidth_m, 0.272);
        assert_eq!(spec.dynamic_rating_kn, 8150.0);
        assert_eq!(spec.static_rating_kn, 17000.0);
        assert_eq!(spec.mass_kg, 520.0);
    }

    #[test]
    fn test_oversized_bore_falls_back() {
        let pick = resize_for_bearings(BearingType::Srb, 6.0).unwrap();
        assert_eq!(pick.status(), OutcomeStatus::NoMatch);
        let spec = pick.into_value();
        assert_eq!((spec.bore_m, spec.facewidth_m, spec.mass_kg), (5.0, 4.0, 15000.0));
        assert_eq!(spec.dynamic_rating_kn, 0.0);
    }

    #[test]
    fn test_fallback_thresholds() {
        let t = BearingType::Crb;
        assert_eq!(fallback_for_bore(t, 1.99).bore_m, 2.0);
        assert_eq!(fallback_for_bore(t, 2.0).bore_m, 2.5);
        assert_eq!(fallback_for_bore(t, 2.7).mass_kg, 9000.0);
        assert_eq!(fallback_for_bore(t, 3.0).facewidth_m, 4.0);
    }

    #[test]
    fn test_rating_too_high_falls_back() {
        let pick = select_bearing(BearingType::Rb, 0.5, 1.0e6).unwrap();
        assert_eq!(pick.status(), OutcomeStatus::NoMatch);
        assert_eq!(pick.value().bore_m, 2.0);
    }

    #[test]
    fn test_bore_only_ignores_rating() {
        // Smallest SRB bore at or above 0.95 is the first 0.95 row
        let spec = resize_for_bearings(BearingType::Srb, 0.95).unwrap().into_value();
        assert_eq!(spec.bore_m, 0.95);
        assert_eq!(spec.facewidth_m, 0.3);
    }

    #[test]
    fn test_tie_keeps_first_listed_row() {
        let spec = resize_for_bearings(BearingType::Carb, 0.29).unwrap().into_value();
        assert_eq!(spec.bore_m, 0.3);
        assert_eq!(spec.outer_diameter_m, 0.5);
    }

    #[test]
    fn test_rejects_nan_bore() {
        assert!(resize_for_bearings(BearingType::Srb, f64::NAN).is_err());
        assert!(select_bearing(BearingType::Srb, -0.1, 0.0).is_err());
    }

    mod proptests {
        use super::super::*;
        use proptest::prelude::*;

        fn any_type() -> impl Strategy<Value = BearingType> {
            prop::sample::select(BearingType::ALL.to_vec())
        }

        proptest! {
            #[test]
            fn selection_is_idempotent(t in any_type(), bore in 0.0f64..6.0, rating in 0.0f64..40_000.0) {
                let first = select_bearing(t, bore, rating).unwrap();
                let second = select_bearing(t, bore, rating).unwrap();
                prop_assert_eq!(first, second);
            }

            #[test]
            fn selected_bore_covers_requirement(t in any_type(), bore in 0.0f64..3.0) {
                let spec = resize_for_bearings(t, bore).unwrap().into_value();
                prop_assert!(spec.bore_m >= bore);
            }
        }
    }
}
