//! Rotor loads and the derived shaft load case.
//!
//! Loads are expressed in the hub coordinate frame:
//!
//! - `x` along the (tilted) shaft axis, positive downwind
//! - `z` vertical, `y` completing the right-handed frame
//!
//! [`RotorLoads`] is what the caller supplies. [`LoadCase`] adds the
//! component self-weights and the geometry the beam solver needs. A load
//! case is built once per sizing call and never mutated; the solvers
//! derive the shaft self-weight afresh at every iterate.
//!
//! # Example
//!
//! ```
//! use drivetrain_core::loads::{LoadCase, RotorLoads};
//! use drivetrain_core::units::Degrees;
//!
//! let rotor = RotorLoads {
//!     fx_n: 599_610.0,
//!     fz_n: -842_710.0,
//!     my_nm: -16_665_000.0,
//!     ..Default::default()
//! };
//! let case = LoadCase::builder(rotor, 1.912, Degrees(5.0).into())
//!     .shrink_disc_mass(1666.5)
//!     .build();
//! assert!((case.shrink_disc_weight_n - 16_348.365).abs() < 1e-6);
//! ```

pub mod estimators;

use serde::{Deserialize, Serialize};

use crate::errors::{require_finite, CalcResult};
use crate::units::{Radians, G_GRAV};

pub use estimators::{
    estimate_flange_length, estimate_hub_to_bearing, estimate_pitch_moment, estimate_rotor_mass,
    estimate_yaw_moment,
};

/// Extreme rotor forces and moments at the hub centre.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RotorLoads {
    /// Axial thrust Fx (N)
    pub fx_n: f64,
    /// Lateral force Fy (N)
    pub fy_n: f64,
    /// Vertical force Fz (N)
    pub fz_n: f64,
    /// Torque Mx (N·m)
    pub mx_nm: f64,
    /// Pitching moment My (N·m)
    pub my_nm: f64,
    /// Yawing moment Mz (N·m)
    pub mz_nm: f64,
}

impl RotorLoads {
    pub fn validate(&self) -> CalcResult<()> {
        require_finite("rotor_loads.fx_n", self.fx_n)?;
        require_finite("rotor_loads.fy_n", self.fy_n)?;
        require_finite("rotor_loads.fz_n", self.fz_n)?;
        require_finite("rotor_loads.mx_nm", self.mx_nm)?;
        require_finite("rotor_loads.my_nm", self.my_nm)?;
        require_finite("rotor_loads.mz_nm", self.mz_nm)?;
        Ok(())
    }

    /// Fill zero pitching/yawing moments from the rotor mass.
    ///
    /// Only applies when `rotor_mass_kg > 0`; user-supplied non-zero moments
    /// are kept.
    pub fn with_estimated_moments(mut self, rotor_mass_kg: f64, hub_to_bearing_m: f64) -> Self {
        if rotor_mass_kg > 0.0 && self.my_nm == 0.0 {
            self.my_nm = estimate_pitch_moment(rotor_mass_kg, hub_to_bearing_m);
        }
        if rotor_mass_kg > 0.0 && self.mz_nm == 0.0 {
            self.mz_nm = estimate_yaw_moment(rotor_mass_kg, hub_to_bearing_m);
        }
        self
    }
}

/// Everything the beam solvers need besides the shaft itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadCase {
    pub rotor: RotorLoads,

    /// Rotor weight acting at the hub (N)
    pub rotor_weight_n: f64,

    pub gearbox_weight_n: f64,

    pub carrier_weight_n: f64,

    pub shrink_disc_weight_n: f64,

    /// Shaft tilt from horizontal
    pub tilt: Radians,

    /// Hub centre to upwind main bearing, L_rb (m)
    pub hub_to_bearing_m: f64,
}

impl LoadCase {
    /// Start a load case with no component weights.
    pub fn builder(rotor: RotorLoads, hub_to_bearing_m: f64, tilt: Radians) -> LoadCaseBuilder {
        LoadCaseBuilder {
            case: LoadCase {
                rotor,
                rotor_weight_n: 0.0,
                gearbox_weight_n: 0.0,
                carrier_weight_n: 0.0,
                shrink_disc_weight_n: 0.0,
                tilt,
                hub_to_bearing_m,
            },
        }
    }

    pub fn cos_tilt(&self) -> f64 {
        self.tilt.0.cos()
    }

    pub fn sin_tilt(&self) -> f64 {
        self.tilt.0.sin()
    }

    /// Copy of this case with a different rotor weight.
    pub fn with_rotor_weight(mut self, rotor_weight_n: f64) -> Self {
        self.rotor_weight_n = rotor_weight_n;
        self
    }
}

/// Builder converting component masses (kg) to weights (N).
#[derive(Debug, Clone, Copy)]
pub struct LoadCaseBuilder {
    case: LoadCase,
}

impl LoadCaseBuilder {
    pub fn rotor_mass(mut self, kg: f64) -> Self {
        self.case.rotor_weight_n = kg * G_GRAV;
        self
    }

    pub fn gearbox_mass(mut self, kg: f64) -> Self {
        self.case.gearbox_weight_n = kg * G_GRAV;
        self
    }

    pub fn carrier_mass(mut self, kg: f64) -> Self {
        self.case.carrier_weight_n = kg * G_GRAV;
        self
    }

    pub fn shrink_disc_mass(mut self, kg: f64) -> Self {
        self.case.shrink_disc_weight_n = kg * G_GRAV;
        self
    }

    pub fn build(self) -> LoadCase {
        self.case
    }
}
