//! # Fatigue Checks
//!
//! Lifetime fatigue of the shaft at its main bearing seats, and the rated
//! bearing selection that follows from it.
//!
//! - [`spectrum`] - DS 472 lifetime load spectrum from turbine and climate
//! - [`sn_curve`] - S-N line and Goodman mean-stress correction
//! - [`damage`] - Palmgren-Miner damage and the diameter growth loop
//! - [`bearing_loads`] - radial/axial bearing load histories and ratings
//! - [`known_loads`] - the same checks driven by measured load ranges
//!
//! ## Example
//!
//! ```rust,no_run
//! use drivetrain_core::fatigue::{synthesize_spectrum, FatigueParams, TurbineParams};
//!
//! let turbine = TurbineParams {
//!     rotor_diameter_m: 126.0,
//!     rated_rpm: 12.1,
//!     machine_rating_kw: 5000.0,
//!     drivetrain_efficiency: 0.95,
//!     fatigue: FatigueParams::default(),
//! };
//! let spectrum = synthesize_spectrum(&turbine).unwrap();
//! println!("{:.3e} lifetime cycles", spectrum.lifetime_cycles);
//! ```

pub mod bearing_loads;
pub mod damage;
pub mod known_loads;
pub mod sn_curve;
pub mod spectrum;

use serde::{Deserialize, Serialize};

pub use bearing_loads::{four_point_bearing_loads, three_point_bearing_loads, BearingLoadSpectrum, RatedSelection};
pub use damage::{accumulate_damage, size_for_fatigue, DamageContext, Station};
pub use known_loads::{known_load_damage, size_for_known_loads, KnownLoadContext, KnownLoadSpectra, LoadDistribution};
pub use sn_curve::{goodman, SnCurve};
pub use spectrum::{synthesize_spectrum, FatigueParams, FatigueSpectrum, IecClass, TurbineParams};

/// Cumulative damage at one candidate diameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageResult {
    /// Miner sum
    pub damage: f64,
    /// Outer diameter evaluated (m)
    pub diameter_m: f64,
    /// Whether the damage criterion is met
    pub converged: bool,
}
