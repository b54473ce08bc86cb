//! # 3-Point Suspension
//!
//! One main bearing at `L_rb` from the hub; the gearbox trunnions react
//! the remainder of the rotor loads a distance `L_bg` further downwind.
//! The modelled shaft runs from the hub (x = 0) through the bearing
//! (x = L_rb) to the shrink disc (x = L_rb + L).
//!
//! ```text
//!   hub            MB                 shrink disc      trunnions
//!    |<--- L_rb --->|<------ L -------->|                  |
//!    F, M, W_r      F_mb                W_sd          (L_bg from MB)
//! ```
//!
//! The slope controlling convergence is the one at the downwind end of
//! the span, compared against the main bearing's allowable misalignment.

use std::f64::consts::PI;

use tracing::{debug, warn};

use super::{bore_for_peak, bored_diameter, peak, sample_moments, StaticProblem, StaticSizing};
use super::{GEARBOX_HEIGHT_M, GEARBOX_OFFSET_M};
use crate::bearings::BearingType;
use crate::errors::CalcResult;
use crate::geometry::{area_moment, frustum_volume, hollow_frustum_weight, ShaftGeometry};
use crate::outcome::Outcome;
use crate::units::G_GRAV;

/// Size a 3-point shaft for `bearing`.
///
/// Returns [`Outcome::Capped`] when the span reaches `length_cap_m` before
/// the slope matches the allowable value; the geometry is then a lower
/// bound.
pub fn solve_three_point(problem: &StaticProblem<'_>, bearing: BearingType) -> CalcResult<Outcome<StaticSizing>> {
    problem.validate()?;

    let case = problem.case;
    let settings = problem.settings;
    let rho = problem.material.density_kg_m3;
    let e_mod = problem.material.youngs_modulus_pa;
    let limit = problem.allowable_slope(bearing);
    let n = settings.points_per_segment;

    let (fy, fz) = (case.rotor.fy_n, case.rotor.fz_n);
    let (my, mz) = (case.rotor.my_nm, case.rotor.mz_nm);
    let (cos_t, sin_t) = (case.cos_tilt(), case.sin_tilt());
    let w_r = case.rotor_weight_n;
    let w_sd = case.shrink_disc_weight_n;
    let w_gb = case.gearbox_weight_n;
    let l_rb = case.hub_to_bearing_m;
    let l_bg = problem.bearing_to_gearbox_m;

    let mut d_max = 1.0;
    let mut d_min = 0.2;
    let mut d_in = 0.0;
    let mut length = settings.initial_length_m;
    let mut length_next = 0.0;
    let mut slope = 0.0;
    let mut check = f64::INFINITY;
    let mut iterations = 0;

    while check > settings.tolerance && length_next < problem.length_cap_m {
        if length_next > 0.0 {
            length = length_next;
        }
        let l = length;

        // Self-weight of the previous iterate, spread uniformly over the span
        let w = frustum_volume(d_max, d_min, l) * rho * G_GRAV;

        let f_mb_y = mz / l_bg - fy * (l_bg + l_rb) / l_bg;
        let f_mb_z = (-my
            + w_r * (cos_t * (l_rb + l_bg) + sin_t * GEARBOX_HEIGHT_M)
            + w * (l_bg - l / 2.0) * cos_t
            + w_sd * cos_t * (l_bg - l)
            - w_gb * cos_t * GEARBOX_OFFSET_M
            - fz * cos_t * (l_bg + l_rb))
            / l_bg;

        let overhang = sample_moments(0.0, l_rb, n, |x| {
            (-my + w_r * cos_t * x + 0.5 * w / l * x * x - fz * x, -mz - fy * x)
        });
        let span = sample_moments(l_rb, l_rb + l, n, |x| {
            (
                -fz * x - my + w_r * cos_t * x - f_mb_z * (x - l_rb) + 0.5 * w / l * x * x,
                -mz - f_mb_y * (x - l_rb) - fy * x,
            )
        });

        let m_peak = peak(&overhang).max(peak(&span));
        let m_end = span.last().copied().unwrap_or(0.0);
        d_in = bore_for_peak(m_peak, problem);
        d_max = bored_diameter(m_peak, d_in, problem);
        d_min = bored_diameter(m_end, d_in, problem);

        // Updated hollow span plus solid overhang, smeared over hub-to-disc
        let w_n = hollow_frustum_weight(d_max, d_min, d_in, l, rho) + PI / 4.0 * d_max * d_max * l_rb * rho * G_GRAV;
        let q = w_n / (l + l_rb);

        let deflection = |z: f64| {
            -fz * z.powi(3) / 6.0 + w_r * cos_t * z.powi(3) / 6.0 - my * z * z / 2.0
                - f_mb_z * (z - l_rb).powi(3) / 6.0
                + q / 24.0 * z.powi(4)
        };
        let c1 = -(deflection(l_rb + l) - deflection(l_rb)) / l;
        let rotation = |z: f64| {
            -fz * z * z / 2.0 + w_r * cos_t * z * z / 2.0 - my * z - f_mb_z * (z - l_rb).powi(2) / 2.0
                + q / 6.0 * z.powi(3)
                + c1
        };

        slope = rotation(l_rb + l) / (e_mod * area_moment(d_max, d_in));
        check = (slope.abs() - limit).abs();
        length_next = l + settings.length_step_m;
        iterations += 1;

        debug!(iteration = iterations, length = l, slope, check, d_max, "3-point slope iteration");
    }

    let sizing = StaticSizing {
        geometry: ShaftGeometry {
            outer_upwind_m: d_max,
            outer_mid_m: None,
            outer_downwind_m: d_min,
            inner_m: d_in,
            hub_to_bearing_m: l_rb,
            main_span_m: length,
            gearbox_span_m: 0.0,
        },
        stepped_span_m: length_next,
        slope_rad: slope,
        slope_limit_rad: limit,
        iterations,
    };
    sizing.geometry.validate()?;

    if check <= settings.tolerance {
        Ok(Outcome::Converged(sizing))
    } else {
        warn!(
            bearing = %bearing,
            length = length,
            slope,
            limit,
            "3-point span reached its cap before the slope limit"
        );
        Ok(Outcome::capped(
            sizing,
            format!(
                "span cap {:.3} m reached; slope {:.5} rad vs {} limit {:.5} rad",
                problem.length_cap_m,
                slope.abs(),
                bearing,
                limit
            ),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::ShaftMaterial;
    use crate::outcome::OutcomeStatus;
    use crate::solver::test_support::{reference_case, reference_length_cap};
    use crate::solver::{SolverSettings, Topology};
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn solve(bearing: BearingType) -> Outcome<StaticSizing> {
        let case = reference_case(0.0);
        let material = ShaftMaterial::default();
        let settings = SolverSettings::default();
        let problem = StaticProblem {
            case: &case,
            material: &material,
            settings: &settings,
            shaft_ratio: 0.1,
            length_cap_m: reference_length_cap(),
            bearing_to_gearbox_m: Topology::ThreePoint.bearing_to_gearbox_m(5000.0, 1.912),
        };
        solve_three_point(&problem, bearing).unwrap()
    }

    #[test]
    fn test_tapered_bearing_converges() {
        let out = solve(BearingType::Trb1);
        assert_eq!(out.status(), OutcomeStatus::Converged);
        let s = out.value();
        assert_eq!(s.iterations, 12);
        assert_relative_eq!(s.geometry.main_span_m, 1.05, epsilon = 1e-9);
        assert_relative_eq!(s.stepped_span_m, 1.10, epsilon = 1e-9);
        assert_relative_eq!(s.geometry.outer_upwind_m, 1.01476, max_relative = 1e-5);
        assert_relative_eq!(s.geometry.outer_downwind_m, 0.95912, max_relative = 1e-5);
        assert_relative_eq!(s.slope_rad, 7.8513e-4, max_relative = 1e-4);
    }

    #[test]
    fn test_converged_slope_within_limit() {
        for bearing in [BearingType::Trb1, BearingType::Crb, BearingType::Rb] {
            let out = solve(bearing);
            assert!(out.is_converged(), "{bearing} should converge");
            let s = out.value();
            assert!(s.slope_rad.abs() <= bearing.slope_limit().0 + 1e-4);
            assert!(s.geometry.inner_m < s.geometry.outer_downwind_m);
        }
    }

    #[test]
    fn test_self_aligning_bearing_hits_length_cap() {
        // SRB allows 0.078 rad: the span grows until the layout stops it
        let out = solve(BearingType::Srb);
        assert_eq!(out.status(), OutcomeStatus::Capped);
        let s = out.value();
        assert_eq!(s.iterations, 73);
        assert!(s.stepped_span_m >= reference_length_cap());
        assert_relative_eq!(s.geometry.main_span_m, 4.1, epsilon = 1e-9);
    }

    #[test]
    fn test_stiffer_limit_gives_shorter_span() {
        let trb = solve(BearingType::Trb1).into_value();
        let crb = solve(BearingType::Crb).into_value();
        assert!(trb.geometry.main_span_m < crb.geometry.main_span_m);
    }

    #[test]
    fn test_rejects_bad_ratio() {
        let case = reference_case(0.0);
        let material = ShaftMaterial::default();
        let settings = SolverSettings::default();
        let problem = StaticProblem {
            case: &case,
            material: &material,
            settings: &settings,
            shaft_ratio: 1.2,
            length_cap_m: 4.0,
            bearing_to_gearbox_m: 6.11,
        };
        assert!(solve_three_point(&problem, BearingType::Srb).is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn prop_bore_stays_inside_shaft(ratio in 0.0f64..0.9, my_scale in 0.2f64..2.0) {
            let mut case = reference_case(0.0);
            case.rotor.my_nm *= my_scale;
            let material = ShaftMaterial::default();
            let settings = SolverSettings::default();
            let problem = StaticProblem {
                case: &case,
                material: &material,
                settings: &settings,
                shaft_ratio: ratio,
                length_cap_m: reference_length_cap(),
                bearing_to_gearbox_m: Topology::ThreePoint.bearing_to_gearbox_m(5000.0, 1.912),
            };
            let g = solve_three_point(&problem, BearingType::Trb1).unwrap().into_value().geometry;
            prop_assert!(g.inner_m < g.outer_downwind_m);
            prop_assert!(g.inner_m < g.outer_upwind_m);
            prop_assert!(g.validate().is_ok());
        }
    }
}
