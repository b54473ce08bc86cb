//! # Palmgren-Miner Damage
//!
//! Damage at one shaft station for a candidate outer diameter:
//!
//! ```text
//! σ_alt(N_i) = sqrt( (σ_bend + σ_axial)² + 3·τ² )      stochastic ranges
//! σ_mean     = sqrt( σ_axial,mean² + 3·τ_mean² )       steady thrust/torque
//! D          = ∫ N / N_fail(goodman(σ_alt, -σ_mean)) dN
//!            + N_rotor / N_fail(goodman(σ_det, -σ_mean))
//! ```
//!
//! The integral uses composite Simpson over the log-spaced cycle axis. The
//! deterministic term is the once-per-revolution gravity bending.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::sn_curve::{goodman, SnCurve};
use super::spectrum::FatigueSpectrum;
use super::DamageResult;
use crate::errors::{require_positive, CalcResult};
use crate::geometry::{annulus_area, area_moment, hollow_frustum_weight, polar_moment};
use crate::integrate::simpson;
use crate::outcome::Outcome;
use crate::solver::GEARBOX_OFFSET_M;
use crate::units::Radians;

/// Which main bearing seat is being checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Station {
    /// Upwind bearing: full bending, bore follows the candidate diameter
    Upwind { shaft_ratio: f64 },
    /// Downwind bearing of a 4-point shaft: no stochastic bending, fixed bore
    Downwind { inner_m: f64 },
}

impl Station {
    fn inner_diameter(&self, outer_m: f64) -> f64 {
        match *self {
            Station::Upwind { shaft_ratio } => shaft_ratio * outer_m,
            Station::Downwind { inner_m } => inner_m,
        }
    }
}

/// Loads and geometry shared by every diameter the fatigue loop tries.
#[derive(Debug, Clone, Copy)]
pub struct DamageContext<'a> {
    pub spectrum: &'a FatigueSpectrum,
    pub curve: SnCurve,
    pub ultimate_strength_pa: f64,
    pub density_kg_m3: f64,
    pub tilt: Radians,
    pub rotor_weight_n: f64,
    pub gearbox_weight_n: f64,
    pub hub_to_bearing_m: f64,

    /// Outer diameter at the far end of the span, for the shaft weight (m)
    pub companion_diameter_m: f64,

    /// Span whose weight adds to the axial mean load (m)
    pub span_m: f64,
}

impl DamageContext<'_> {
    /// Shaft weight between the candidate station and its companion (N).
    pub fn shaft_weight(&self, outer_m: f64, inner_m: f64) -> f64 {
        hollow_frustum_weight(outer_m, self.companion_diameter_m, inner_m, self.span_m, self.density_kg_m3)
    }
}

/// Cumulative damage at `station` for outer diameter `outer_m`.
pub fn accumulate_damage(outer_m: f64, ctx: &DamageContext<'_>, station: Station) -> DamageResult {
    let sp = ctx.spectrum;
    let (cos_t, sin_t) = (ctx.tilt.0.cos(), ctx.tilt.0.sin());
    let d = outer_m;
    let d_in = station.inner_diameter(d);
    let i = area_moment(d, d_in);
    let j = polar_moment(d, d_in);
    let area = annulus_area(d, d_in);
    let w_lss = ctx.shaft_weight(d, d_in);

    let mean_normal = sp.fx_mean_n / area * cos_t + (ctx.rotor_weight_n + w_lss) * sin_t;
    let mean_shear = sp.mx_mean_nm * d / (2.0 * j);
    let mean_stress = (mean_normal.powi(2) + 3.0 * mean_shear.powi(2)).sqrt();
    let equivalent = |alt: f64| goodman(alt, -mean_stress, ctx.ultimate_strength_pa);

    let density: Vec<f64> = (0..sp.len())
        .map(|k| {
            let bend = match station {
                Station::Upwind { .. } => sp.my_nm[k].hypot(sp.mz_nm[k]) * d / (2.0 * i),
                Station::Downwind { .. } => 0.0,
            };
            let shear = (sp.mx_nm[k] * d / (2.0 * j)).abs();
            let normal = sp.fx_n[k] / area * cos_t;
            let alt = ((bend + normal).powi(2) + 3.0 * shear * shear).sqrt();
            sp.cycles[k] / ctx.curve.cycles_to_failure(equivalent(alt))
        })
        .collect();
    let mut damage = simpson(&density, &sp.cycles);

    let deterministic = match station {
        Station::Upwind { .. } => (ctx.rotor_weight_n * cos_t * ctx.hub_to_bearing_m * d / (2.0 * i)).abs(),
        Station::Downwind { .. } => (ctx.gearbox_weight_n * GEARBOX_OFFSET_M * d / (2.0 * i)).abs(),
    };
    let det_equivalent = equivalent(deterministic);
    if det_equivalent > 0.0 {
        damage += sp.rotor_revolutions() / ctx.curve.cycles_to_failure(det_equivalent);
    }

    DamageResult {
        damage,
        diameter_m: d,
        converged: damage < 1.0,
    }
}

/// Grow the diameter from `start_m` in `step_m` increments until damage
/// drops below one or the diameter reaches `cap_m`.
pub fn size_for_fatigue(
    start_m: f64,
    cap_m: f64,
    step_m: f64,
    ctx: &DamageContext<'_>,
    station: Station,
) -> CalcResult<Outcome<DamageResult>> {
    require_positive("fatigue.start_diameter_m", start_m)?;
    require_positive("fatigue.diameter_step_m", step_m)?;

    let mut d = start_m;
    let mut steps = 0usize;
    let result = loop {
        let r = accumulate_damage(d, ctx, station);
        if r.converged || d >= cap_m {
            break r;
        }
        d += step_m;
        steps += 1;
    };

    debug!(diameter = result.diameter_m, damage = result.damage, steps, "fatigue diameter loop finished");
    if result.converged {
        Ok(Outcome::Converged(result))
    } else {
        warn!(
            diameter = result.diameter_m,
            damage = result.damage,
            "fatigue diameter cap reached with damage above one"
        );
        Ok(Outcome::capped(
            result,
            format!("diameter cap {:.3} m reached with damage {:.3}", cap_m, result.damage),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fatigue::spectrum::synthesize_spectrum;
    use crate::fatigue::spectrum::tests::reference_turbine;
    use crate::units::{Degrees, G_GRAV};
    use approx::assert_relative_eq;

    fn ctx(spectrum: &FatigueSpectrum) -> DamageContext<'_> {
        DamageContext {
            spectrum,
            curve: SnCurve::fit(700.0e6, None).unwrap(),
            ultimate_strength_pa: 700.0e6,
            density_kg_m3: 7800.0,
            tilt: Degrees(5.0).into(),
            rotor_weight_n: 117_830.0 * G_GRAV,
            gearbox_weight_n: 0.0,
            hub_to_bearing_m: 1.912,
            companion_diameter_m: 0.95912,
            span_m: 1.05,
        }
    }

    #[test]
    fn test_damage_falls_with_diameter() {
        let sp = synthesize_spectrum(&reference_turbine()).unwrap();
        let c = ctx(&sp);
        let station = Station::Upwind { shaft_ratio: 0.1 };
        let small = accumulate_damage(0.8, &c, station);
        let large = accumulate_damage(1.2, &c, station);
        assert!(small.damage > large.damage);
        assert_eq!(large.diameter_m, 1.2);
    }

    #[test]
    fn test_reference_damage_value() {
        let sp = synthesize_spectrum(&reference_turbine()).unwrap();
        let r = accumulate_damage(1.0, &ctx(&sp), Station::Upwind { shaft_ratio: 0.1 });
        assert_relative_eq!(r.damage, REFERENCE_DAMAGE_AT_1M, max_relative = 1e-6);
    }

    #[test]
    fn test_size_for_fatigue_converges_below_unit_damage() {
        let sp = synthesize_spectrum(&reference_turbine()).unwrap();
        let c = ctx(&sp);
        let out = size_for_fatigue(0.5, 1.5, 0.001, &c, Station::Upwind { shaft_ratio: 0.1 }).unwrap();
        assert!(out.is_converged());
        let r = out.value();
        assert!(r.damage < 1.0);
        assert_relative_eq!(r.diameter_m, 1.129, epsilon = 1e-6);
        // One step smaller would still fail
        assert!(accumulate_damage(r.diameter_m - 0.001, &c, Station::Upwind { shaft_ratio: 0.1 }).damage >= 1.0);
    }

    #[test]
    fn test_cap_reported() {
        let sp = synthesize_spectrum(&reference_turbine()).unwrap();
        let c = ctx(&sp);
        let out = size_for_fatigue(0.3, 0.31, 0.001, &c, Station::Upwind { shaft_ratio: 0.1 }).unwrap();
        assert!(!out.is_converged());
        assert!(out.value().diameter_m >= 0.31);
    }

    #[test]
    fn test_downwind_station_ignores_bending() {
        let sp = synthesize_spectrum(&reference_turbine()).unwrap();
        let c = ctx(&sp);
        let up = accumulate_damage(0.7, &c, Station::Upwind { shaft_ratio: 0.1 });
        let down = accumulate_damage(0.7, &c, Station::Downwind { inner_m: 0.07 });
        assert!(down.damage < up.damage);
    }

    const REFERENCE_DAMAGE_AT_1M: f64 = 21.892400027636;
}
