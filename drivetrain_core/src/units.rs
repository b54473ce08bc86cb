//! # Unit Types
//!
//! Lightweight newtype wrappers for the handful of unit conversions the
//! sizing rules depend on. Inputs and outputs are SI (m, N, N·m, kg, Pa)
//! and use plain `f64` fields with a unit suffix in the name; the
//! wrappers here exist where a conversion actually happens.
//!
//! ## Mixed unit systems
//!
//! The static shaft-diameter rule is an empirical fit carried over from
//! US practice: moments enter in in·lb, yield strength in psi, and the
//! resulting diameter comes out in inches. [`KiloNewtonMeters`] and
//! [`Inches`] make those hops explicit.
//!
//! ## Example
//!
//! ```rust
//! use drivetrain_core::units::{ArcMinutes, Degrees, Radians};
//!
//! let tilt: Radians = Degrees(5.0).into();
//! assert!((tilt.0 - 0.0872664626).abs() < 1e-9);
//!
//! let limit: Radians = ArcMinutes(3.0).into();
//! assert!(limit.0 < tilt.0);
//! ```

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

// ============================================================================
// Physical Constants
// ============================================================================

/// Gravitational acceleration (m/s²)
pub const G_GRAV: f64 = 9.81;

/// 1 kN·m expressed in in·lb
pub const U_KNM_INLB: f64 = 8850.745454036;

/// 1 in expressed in m
pub const U_IN_M: f64 = 0.0254000508001;

/// Seconds in a (365-day) year
pub const SECONDS_PER_YEAR: f64 = 365.0 * 24.0 * 60.0 * 60.0;

// ============================================================================
// Angle Units
// ============================================================================

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

/// Angle in minutes of arc (1/60 degree)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArcMinutes(pub f64);

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Radians(deg.0 / 180.0 * PI)
    }
}

impl From<ArcMinutes> for Radians {
    fn from(arcmin: ArcMinutes) -> Self {
        Radians(arcmin.0 / 60.0 / 180.0 * PI)
    }
}

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        Degrees(rad.0 * 180.0 / PI)
    }
}

// ============================================================================
// Moment and Length (static diameter rule)
// ============================================================================

/// Moment in kN·m
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtonMeters(pub f64);

/// Moment in in·lb
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InchPounds(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl KiloNewtonMeters {
    /// Convert a moment given in N·m
    pub fn from_newton_meters(nm: f64) -> Self {
        KiloNewtonMeters(nm / 1000.0)
    }
}

impl From<KiloNewtonMeters> for InchPounds {
    fn from(knm: KiloNewtonMeters) -> Self {
        InchPounds(knm.0 * U_KNM_INLB)
    }
}

impl From<Inches> for Meters {
    fn from(inches: Inches) -> Self {
        Meters(inches.0 * U_IN_M)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_angle_conversions() {
        let r: Radians = Degrees(180.0).into();
        assert_relative_eq!(r.0, PI, epsilon = 1e-12);

        let r: Radians = ArcMinutes(60.0).into();
        let one_deg: Radians = Degrees(1.0).into();
        assert_relative_eq!(r.0, one_deg.0, epsilon = 1e-15);

        let back: Degrees = Radians(PI / 2.0).into();
        assert_relative_eq!(back.0, 90.0, epsilon = 1e-12);
    }

    #[test]
    fn test_moment_and_length_conversions() {
        let m: InchPounds = KiloNewtonMeters::from_newton_meters(1000.0).into();
        assert_relative_eq!(m.0, U_KNM_INLB);

        let len: Meters = Inches(100.0).into();
        assert_relative_eq!(len.0, 2.54000508001, epsilon = 1e-12);
    }
}
