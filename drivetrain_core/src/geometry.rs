//! # Shaft Geometry
//!
//! Section properties and the static diameter rule shared by the beam
//! solvers, the fatigue loop and the mass finalizer.
//!
//! The shaft is a hollow frustum: outer diameter tapers from the upwind
//! bearing to the downwind end while the bore is a constant fraction of
//! the largest outer diameter.
//!
//! ## Static diameter rule
//!
//! ```text
//! D = ( 16·n / (π·Sy) · sqrt( 4·(M·k)² + 3·(Mx·k)² ) )^(1/3)
//! ```
//!
//! with `M` and `Mx` in kN·m, `k` the kN·m → in·lb factor, `Sy` in psi, and
//! `D` in inches (converted back to m). A bore of diameter `D_in` is then
//! allowed for by `D' = (D⁴ + D_in⁴)^(1/4)`, which keeps the section modulus
//! of the solid shaft.
//!
//! ## Example
//!
//! ```rust
//! use drivetrain_core::geometry::{required_outer_diameter, with_bore};
//! use drivetrain_core::materials::ShaftMaterial;
//!
//! let steel = ShaftMaterial::default();
//! let solid = required_outer_diameter(16.0e6, 330_770.0, &steel);
//! let hollow = with_bore(solid, 0.1 * solid);
//! assert!(hollow > solid);
//! assert!((solid - 0.9639).abs() < 1e-3);
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::ShaftMaterial;
use crate::units::{InchPounds, Inches, KiloNewtonMeters, Meters, G_GRAV};

// =============================================================================
// Diameter rules
// =============================================================================

/// Solid-shaft outer diameter (m) for bending moment `moment_nm` and torque
/// `torque_nm`.
pub fn required_outer_diameter(moment_nm: f64, torque_nm: f64, material: &ShaftMaterial) -> f64 {
    let m: InchPounds = KiloNewtonMeters::from_newton_meters(moment_nm).into();
    let t: InchPounds = KiloNewtonMeters::from_newton_meters(torque_nm).into();
    let stress_term = (4.0 * m.0 * m.0 + 3.0 * t.0 * t.0).sqrt();
    let d = Inches((16.0 * material.shaft_safety_factor / PI / material.yield_strength_psi * stress_term).cbrt());
    Meters::from(d).0
}

/// Outer diameter with the same section modulus once a bore is drilled.
pub fn with_bore(outer_m: f64, inner_m: f64) -> f64 {
    (outer_m.powi(4) + inner_m.powi(4)).powf(0.25)
}

// =============================================================================
// Section properties
// =============================================================================

/// Second moment of area of a hollow circle (m⁴).
pub fn area_moment(outer_m: f64, inner_m: f64) -> f64 {
    PI / 64.0 * (outer_m.powi(4) - inner_m.powi(4))
}

/// Polar moment of a hollow circle (m⁴).
pub fn polar_moment(outer_m: f64, inner_m: f64) -> f64 {
    2.0 * area_moment(outer_m, inner_m)
}

/// Annulus area (m²).
pub fn annulus_area(outer_m: f64, inner_m: f64) -> f64 {
    PI / 4.0 * (outer_m * outer_m - inner_m * inner_m)
}

/// Volume of a solid conical frustum (m³).
pub fn frustum_volume(d1_m: f64, d2_m: f64, length_m: f64) -> f64 {
    PI / 12.0 * (d1_m * d1_m + d2_m * d2_m + d1_m * d2_m) * length_m
}

/// Weight of a hollow frustum with a constant bore (N).
pub fn hollow_frustum_weight(d1_m: f64, d2_m: f64, inner_m: f64, length_m: f64, density: f64) -> f64 {
    (frustum_volume(d1_m, d2_m, length_m) - PI / 4.0 * inner_m * inner_m * length_m) * density * G_GRAV
}

// =============================================================================
// Shaft geometry
// =============================================================================

/// Diameters and spans of a sized shaft.
///
/// For the 3-point topology `main_span_m` is the bearing to shrink-disc
/// length and `gearbox_span_m` is zero. For the 4-point topology
/// `main_span_m` is the distance between the main bearings and
/// `gearbox_span_m` the downwind bearing to gearbox distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShaftGeometry {
    /// Outer diameter at the upwind main bearing (m)
    pub outer_upwind_m: f64,

    /// Outer diameter at the downwind main bearing (m); 4-point only
    pub outer_mid_m: Option<f64>,

    /// Outer diameter at the downwind end of the modelled span (m)
    pub outer_downwind_m: f64,

    /// Bore diameter (m)
    pub inner_m: f64,

    /// Hub centre to upwind main bearing (m)
    pub hub_to_bearing_m: f64,

    pub main_span_m: f64,

    pub gearbox_span_m: f64,
}

impl ShaftGeometry {
    /// Diameter at the station carrying the second bearing: the mid-station
    /// diameter for 4-point, the downwind end for 3-point.
    pub fn outer_second_station_m(&self) -> f64 {
        self.outer_mid_m.unwrap_or(self.outer_downwind_m)
    }

    /// Enforce `D_in < D_out` at every station.
    pub fn validate(&self) -> CalcResult<()> {
        let smallest = self
            .outer_mid_m
            .map_or(self.outer_downwind_m, |mid| mid.min(self.outer_downwind_m))
            .min(self.outer_upwind_m);
        if !(self.inner_m >= 0.0 && self.inner_m < smallest) {
            return Err(CalcError::calculation_failed(
                "shaft_geometry",
                format!("bore {:.4} m is not smaller than outer diameter {:.4} m", self.inner_m, smallest),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_diameter_rule_scales_with_cube_root() {
        let steel = ShaftMaterial::default();
        let d1 = required_outer_diameter(1.0e6, 0.0, &steel);
        let d8 = required_outer_diameter(8.0e6, 0.0, &steel);
        assert_relative_eq!(d8 / d1, 2.0, max_relative = 1e-12);
    }

    #[test]
    fn test_diameter_rule_reference_value() {
        // 16·2.5/(π·66000)·2·8850.745 in³, cube root, to m
        let steel = ShaftMaterial::default();
        let expected = (16.0 * 2.5 / PI / 66_000.0 * 2.0 * 8850.745454036f64).cbrt() * 0.0254000508001;
        assert_relative_eq!(required_outer_diameter(1000.0, 0.0, &steel), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_bore_correction() {
        assert_relative_eq!(with_bore(1.0, 0.0), 1.0);
        assert_relative_eq!(with_bore(1.0, 1.0), 2f64.powf(0.25));
    }

    #[test]
    fn test_section_properties() {
        assert_relative_eq!(area_moment(2.0, 0.0), PI / 4.0);
        assert_relative_eq!(polar_moment(2.0, 0.0), PI / 2.0);
        assert_relative_eq!(annulus_area(2.0, 1.0), 0.75 * PI);
        // Cylinder: frustum with equal ends
        assert_relative_eq!(frustum_volume(2.0, 2.0, 3.0), 3.0 * PI, max_relative = 1e-12);
        assert_relative_eq!(hollow_frustum_weight(2.0, 2.0, 2.0, 3.0, 7800.0), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_geometry_rejects_oversized_bore() {
        let g = ShaftGeometry {
            outer_upwind_m: 0.8,
            outer_mid_m: Some(0.5),
            outer_downwind_m: 0.6,
            inner_m: 0.55,
            hub_to_bearing_m: 1.9,
            main_span_m: 2.0,
            gearbox_span_m: 0.5,
        };
        assert!(g.validate().is_err());
        assert_eq!(g.outer_second_station_m(), 0.5);
        let ok = ShaftGeometry { inner_m: 0.08, ..g };
        assert!(ok.validate().is_ok());
    }
}
