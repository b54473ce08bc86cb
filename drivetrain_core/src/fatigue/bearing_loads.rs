//! # Main Bearing Load Spectra
//!
//! Turns the rotor load ranges into radial/axial load histories at each
//! main bearing, then into a required dynamic rating and a catalog pick.
//!
//! Stochastic reactions follow from the pitching and yawing moment ranges
//! over the bearing span; the deterministic part is the static weight
//! reaction, added to the vertical component by magnitude.
//!
//! ```text
//! 3-point / 4-point upwind bearing
//!   Fz1 = -My / L          Fy1 = Mz / L
//!   det = (W_gb·L_gb - W_lss·L/2 - W_r·(L + L_rb)) / L
//!   Fr  = sqrt((|Fz1| + |det|)² + Fy1²)
//!   Fa  = Fx·cos γ + (W_r + W_lss)·sin γ       (zero for 4-point upwind)
//!
//! 4-point downwind bearing
//!   Fy2 = -Mz / L_mb
//!   Fz2 = -(W_lss·2/3·L_mb - My) / L_mb + (W_lss + W_sd + W_gb)·cos γ - W_r
//!   Fr2 = sqrt(Fy2² + (Fz2 + |-W_r·L_rb + W_lss/2 + W_gb·L_gb / L_mb|)²)
//!   Fa2 = Fx·cos γ + (W_r + W_lss)·sin γ
//! ```
//!
//! Bearings see one load cycle per rotor revolution, so cycle counts and
//! the required life are both divided by the blade count.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::spectrum::FatigueSpectrum;
use crate::bearings::{required_dynamic_rating, select_bearing, BearingSpec, BearingType};
use crate::errors::{require_positive, CalcResult};
use crate::geometry::{hollow_frustum_weight, ShaftGeometry};
use crate::loads::LoadCase;
use crate::outcome::Outcome;
use crate::solver::GEARBOX_OFFSET_M;

/// Radial and axial load history at one bearing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BearingLoadSpectrum {
    /// Radial load per point (N)
    pub radial_n: Vec<f64>,

    /// Axial load per point (N)
    pub axial_n: Vec<f64>,

    /// Bearing cycle counts, parallel to the loads
    pub counts: Vec<f64>,

    /// Required life in revolutions
    pub life_revolutions: f64,
}

/// A rated catalog pick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatedSelection {
    /// Minimum dynamic rating the spectrum demands (kN)
    pub required_rating_kn: f64,
    pub bearing: Outcome<BearingSpec>,
}

impl BearingLoadSpectrum {
    pub fn required_rating(&self, bearing_type: BearingType) -> CalcResult<f64> {
        required_dynamic_rating(
            bearing_type,
            &self.radial_n,
            &self.axial_n,
            &self.counts,
            self.life_revolutions,
        )
    }

    /// Smallest catalog bearing of `bearing_type` with bore at least
    /// `bore_m` that carries this spectrum.
    pub fn select(&self, bearing_type: BearingType, bore_m: f64) -> CalcResult<RatedSelection> {
        let required_rating_kn = self.required_rating(bearing_type)?;
        let bearing = select_bearing(bearing_type, bore_m, required_rating_kn)?;
        debug!(
            bearing = %bearing_type,
            bore_required = bore_m,
            rating_required = required_rating_kn,
            status = bearing.status().label(),
            "rated bearing selection"
        );
        Ok(RatedSelection {
            required_rating_kn,
            bearing,
        })
    }

    fn with_loads(spectrum: &FatigueSpectrum, radial_n: Vec<f64>, axial_n: Vec<f64>) -> Self {
        BearingLoadSpectrum {
            radial_n,
            axial_n,
            counts: spectrum.bearing_counts(),
            life_revolutions: spectrum.rotor_revolutions(),
        }
    }
}

/// Upwind main bearing loads over span `span_m`.
///
/// `with_axial` is false for the 4-point upwind bearing, which floats
/// axially.
fn upwind_loads(
    spectrum: &FatigueSpectrum,
    case: &LoadCase,
    shaft_weight_n: f64,
    span_m: f64,
    with_axial: bool,
) -> BearingLoadSpectrum {
    let w_r = case.rotor_weight_n;
    let l_rb = case.hub_to_bearing_m;
    let determ =
        (case.gearbox_weight_n * GEARBOX_OFFSET_M - shaft_weight_n * 0.5 * span_m - w_r * (span_m + l_rb)) / span_m;

    let radial = spectrum
        .my_nm
        .iter()
        .zip(&spectrum.mz_nm)
        .map(|(my, mz)| {
            let fz = -my / span_m;
            let fy = mz / span_m;
            (fz.abs() + determ.abs()).hypot(fy)
        })
        .collect();
    let axial = if with_axial {
        spectrum
            .fx_n
            .iter()
            .map(|fx| fx * case.cos_tilt() + (w_r + shaft_weight_n) * case.sin_tilt())
            .collect()
    } else {
        vec![0.0; spectrum.len()]
    };

    BearingLoadSpectrum::with_loads(spectrum, radial, axial)
}

/// Load spectrum at the single main bearing of a 3-point shaft.
///
/// `shaft` carries the fatigue-sized upwind diameter; the shaft weight is
/// taken over the main span.
pub fn three_point_bearing_loads(
    spectrum: &FatigueSpectrum,
    case: &LoadCase,
    shaft: &ShaftGeometry,
    density_kg_m3: f64,
) -> CalcResult<BearingLoadSpectrum> {
    require_positive("main_span_m", shaft.main_span_m)?;
    let w_lss = hollow_frustum_weight(
        shaft.outer_upwind_m,
        shaft.outer_downwind_m,
        shaft.inner_m,
        shaft.main_span_m,
        density_kg_m3,
    );
    Ok(upwind_loads(spectrum, case, w_lss, shaft.main_span_m, true))
}

/// Load spectra at the upwind and downwind main bearings of a 4-point
/// shaft, in that order.
pub fn four_point_bearing_loads(
    spectrum: &FatigueSpectrum,
    case: &LoadCase,
    shaft: &ShaftGeometry,
    density_kg_m3: f64,
) -> CalcResult<(BearingLoadSpectrum, BearingLoadSpectrum)> {
    let l_mb = shaft.main_span_m;
    require_positive("main_span_m", l_mb)?;

    let d_med = shaft.outer_second_station_m();
    let w_lss = hollow_frustum_weight(shaft.outer_upwind_m, d_med, shaft.inner_m, l_mb, density_kg_m3);
    let upwind = upwind_loads(spectrum, case, w_lss, l_mb, false);

    let (cos_t, sin_t) = (case.cos_tilt(), case.sin_tilt());
    let w_r = case.rotor_weight_n;
    let offset = (-w_r * case.hub_to_bearing_m + 0.5 * w_lss + case.gearbox_weight_n * GEARBOX_OFFSET_M / l_mb).abs();
    let hanging = (w_lss + case.shrink_disc_weight_n + case.gearbox_weight_n) * cos_t - w_r;

    let radial = spectrum
        .my_nm
        .iter()
        .zip(&spectrum.mz_nm)
        .map(|(my, mz)| {
            let fy = -mz / l_mb;
            let fz = -(w_lss * 2.0 / 3.0 * l_mb - my) / l_mb + hanging;
            fy.hypot(fz + offset)
        })
        .collect();
    let axial = spectrum
        .fx_n
        .iter()
        .map(|fx| fx * cos_t + (w_r + w_lss) * sin_t)
        .collect();
    let downwind = BearingLoadSpectrum::with_loads(spectrum, radial, axial);

    Ok((upwind, downwind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fatigue::spectrum::synthesize_spectrum;
    use crate::fatigue::spectrum::tests::reference_turbine;
    use crate::outcome::OutcomeStatus;
    use crate::solver::test_support::reference_case;
    use approx::assert_relative_eq;

    fn three_point_shaft() -> ShaftGeometry {
        ShaftGeometry {
            outer_upwind_m: 1.129,
            outer_mid_m: None,
            outer_downwind_m: 0.95912,
            inner_m: 0.1129,
            hub_to_bearing_m: 1.912,
            main_span_m: 1.05,
            gearbox_span_m: 0.0,
        }
    }

    #[test]
    fn test_three_point_reference_rating() {
        let sp = synthesize_spectrum(&reference_turbine()).unwrap();
        let case = reference_case(117_830.0);
        let loads = three_point_bearing_loads(&sp, &case, &three_point_shaft(), 7800.0).unwrap();
        assert_eq!(loads.radial_n.len(), sp.len());
        assert_relative_eq!(loads.life_revolutions, sp.lifetime_cycles / 3.0, max_relative = 1e-12);

        let pick = loads.select(BearingType::Srb, 1.129).unwrap();
        assert_relative_eq!(pick.required_rating_kn, 19_720.0316, max_relative = 1e-6);
        assert_eq!(pick.bearing.status(), OutcomeStatus::Converged);
        let spec = pick.bearing.into_value();
        assert_eq!(spec.bore_m, 1.25);
        assert_eq!(spec.mass_kg, 2840.0);
        assert!(spec.dynamic_rating_kn >= pick.required_rating_kn);
    }

    #[test]
    fn test_three_point_rating_by_family() {
        let sp = synthesize_spectrum(&reference_turbine()).unwrap();
        let case = reference_case(117_830.0);
        let loads = three_point_bearing_loads(&sp, &case, &three_point_shaft(), 7800.0).unwrap();
        assert_relative_eq!(loads.required_rating(BearingType::Trb1).unwrap(), 17_976.4978, max_relative = 1e-6);
        // Nothing in the single-row tapered table carries that
        assert_eq!(loads.select(BearingType::Trb1, 1.129).unwrap().bearing.status(), OutcomeStatus::NoMatch);
        // Toroidal bearings cannot take the thrust
        assert!(loads.required_rating(BearingType::Carb).is_err());
    }

    #[test]
    fn test_deterministic_reaction_raises_radial_load() {
        let sp = synthesize_spectrum(&reference_turbine()).unwrap();
        let light = three_point_bearing_loads(&sp, &reference_case(0.0), &three_point_shaft(), 7800.0).unwrap();
        let heavy = three_point_bearing_loads(&sp, &reference_case(117_830.0), &three_point_shaft(), 7800.0).unwrap();
        assert!(light.radial_n.iter().zip(&heavy.radial_n).all(|(l, h)| h > l));
    }

    #[test]
    fn test_four_point_upwind_has_no_axial_load() {
        let sp = synthesize_spectrum(&reference_turbine()).unwrap();
        let case = reference_case(117_830.0);
        let shaft = ShaftGeometry {
            outer_upwind_m: 1.1,
            outer_mid_m: Some(0.75),
            outer_downwind_m: 0.6,
            inner_m: 0.11,
            hub_to_bearing_m: 1.912,
            main_span_m: 3.05,
            gearbox_span_m: 0.5,
        };
        let (up, down) = four_point_bearing_loads(&sp, &case, &shaft, 7800.0).unwrap();
        assert!(up.axial_n.iter().all(|a| *a == 0.0));
        assert!(down.axial_n.iter().all(|a| *a > 0.0));
        assert_eq!(up.counts, down.counts);
        assert!(up.required_rating(BearingType::Carb).is_ok());
    }

    #[test]
    fn test_zero_span_rejected() {
        let sp = synthesize_spectrum(&reference_turbine()).unwrap();
        let mut shaft = three_point_shaft();
        shaft.main_span_m = 0.0;
        assert!(three_point_bearing_loads(&sp, &reference_case(0.0), &shaft, 7800.0).is_err());
    }
}
