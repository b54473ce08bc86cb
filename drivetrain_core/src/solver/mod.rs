//! # Static Beam-Deflection Sizing
//!
//! Finds shaft spans and diameters such that the shaft slope at a main
//! bearing equals the bearing family's allowable misalignment.
//!
//! The shaft is an Euler-Bernoulli beam loaded by the rotor forces and
//! moments at the hub, its own (tapered) weight, the shrink disc, and the
//! bearing reactions. Each iterate:
//!
//! 1. solves the determinate reactions in closed form
//! 2. samples the resultant bending moment along every segment
//! 3. sizes the outer diameter from the peak moment and the end moment
//! 4. integrates the moment twice to get the slope at the bearing
//!
//! The span then grows by a fixed step until the slope is within
//! tolerance of the limit or the span reaches its geometric cap.
//!
//! - [`three_point`] - one main bearing, gearbox trunnions take the rest
//! - [`four_point`] - two main bearings, nested span search

pub mod four_point;
pub mod three_point;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bearings::BearingType;
use crate::errors::{require_positive, CalcError, CalcResult};
use crate::geometry::{required_outer_diameter, with_bore, ShaftGeometry};
use crate::integrate::linspace;
use crate::loads::LoadCase;
use crate::materials::ShaftMaterial;
use crate::outcome::Outcome;

pub use four_point::solve_four_point;
pub use three_point::solve_three_point;

/// Gearbox centre height above the trunnion line (m).
pub const GEARBOX_HEIGHT_M: f64 = 1.0;

/// Gearbox centre offset from the trunnions along the shaft (m).
pub const GEARBOX_OFFSET_M: f64 = 0.0;

// =============================================================================
// TOPOLOGY
// =============================================================================

/// Drivetrain suspension layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Topology {
    /// One main bearing; the gearbox trunnions form the other two supports
    ThreePoint,
    /// Two main bearings carry the shaft; the gearbox only takes torque
    FourPoint,
}

impl Topology {
    pub fn display_name(&self) -> &'static str {
        match self {
            Topology::ThreePoint => "3-point suspension",
            Topology::FourPoint => "4-point suspension",
        }
    }

    /// Main bearing to gearbox reaction distance L_bg (m).
    pub fn bearing_to_gearbox_m(&self, machine_rating_kw: f64, hub_to_bearing_m: f64) -> f64 {
        match self {
            Topology::ThreePoint => 6.11 * machine_rating_kw / 5000.0,
            Topology::FourPoint => 6.11 - hub_to_bearing_m,
        }
    }

    /// Flange-mass multiplier applied to the frustum model.
    pub fn mass_factor(&self) -> f64 {
        match self {
            Topology::ThreePoint => 1.35,
            Topology::FourPoint => 1.33,
        }
    }

    pub fn diameter_cap_m(&self, settings: &SolverSettings) -> f64 {
        match self {
            Topology::ThreePoint => settings.diameter_cap_three_point_m,
            Topology::FourPoint => settings.diameter_cap_four_point_m,
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topology::ThreePoint => write!(f, "three-point"),
            Topology::FourPoint => write!(f, "four-point"),
        }
    }
}

impl FromStr for Topology {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "three-point" | "3pt" | "3" => Ok(Topology::ThreePoint),
            "four-point" | "4pt" | "4" => Ok(Topology::FourPoint),
            other => Err(CalcError::invalid_input(
                "topology",
                other,
                "Expected three-point or four-point",
            )),
        }
    }
}

// =============================================================================
// SETTINGS
// =============================================================================

/// Step sizes, tolerances and caps for every bounded search in the crate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    /// Slope convergence tolerance (rad)
    pub tolerance: f64,

    /// Outer span step (m)
    pub length_step_m: f64,

    /// Gearbox-side span step in the 4-point inner loop (m)
    pub inner_step_m: f64,

    /// Maximum inner iterations per outer 4-point step
    pub inner_iteration_cap: usize,

    /// First span tried by each search (m)
    pub initial_length_m: f64,

    /// Fatigue diameter increment (m)
    pub diameter_step_m: f64,

    pub diameter_cap_three_point_m: f64,

    pub diameter_cap_four_point_m: f64,

    /// Diameter cap for checks driven by known load distributions (m)
    pub known_loads_diameter_cap_m: f64,

    /// Moment sample stations per beam segment
    pub points_per_segment: usize,
}

impl Default for SolverSettings {
    fn default() -> Self {
        SolverSettings {
            tolerance: 1e-4,
            length_step_m: 0.05,
            inner_step_m: 0.0025,
            inner_iteration_cap: 2,
            initial_length_m: 0.5,
            diameter_step_m: 0.001,
            diameter_cap_three_point_m: 1.5,
            diameter_cap_four_point_m: 5.0,
            known_loads_diameter_cap_m: 5.0,
            points_per_segment: 101,
        }
    }
}

impl SolverSettings {
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("settings.tolerance", self.tolerance)?;
        require_positive("settings.length_step_m", self.length_step_m)?;
        require_positive("settings.inner_step_m", self.inner_step_m)?;
        require_positive("settings.initial_length_m", self.initial_length_m)?;
        require_positive("settings.diameter_step_m", self.diameter_step_m)?;
        require_positive("settings.diameter_cap_three_point_m", self.diameter_cap_three_point_m)?;
        require_positive("settings.diameter_cap_four_point_m", self.diameter_cap_four_point_m)?;
        require_positive("settings.known_loads_diameter_cap_m", self.known_loads_diameter_cap_m)?;
        if self.points_per_segment < 2 {
            return Err(CalcError::invalid_input(
                "settings.points_per_segment",
                self.points_per_segment.to_string(),
                "Need at least two stations per segment",
            ));
        }
        if self.inner_iteration_cap == 0 {
            return Err(CalcError::invalid_input(
                "settings.inner_iteration_cap",
                "0",
                "Inner loop must run at least once",
            ));
        }
        Ok(())
    }
}

// =============================================================================
// PROBLEM / RESULT
// =============================================================================

/// Everything one static solve needs.
#[derive(Debug, Clone, Copy)]
pub struct StaticProblem<'a> {
    pub case: &'a LoadCase,
    pub material: &'a ShaftMaterial,
    pub settings: &'a SolverSettings,

    /// Bore to outer diameter ratio, in [0, 1)
    pub shaft_ratio: f64,

    /// Longest span the nacelle layout allows (m)
    pub length_cap_m: f64,

    /// Main bearing to gearbox reaction distance L_bg (m)
    pub bearing_to_gearbox_m: f64,
}

impl StaticProblem<'_> {
    fn validate(&self) -> CalcResult<()> {
        self.settings.validate()?;
        self.material.validate()?;
        self.case.rotor.validate()?;
        require_positive("hub_to_bearing_m", self.case.hub_to_bearing_m)?;
        require_positive("bearing_to_gearbox_m", self.bearing_to_gearbox_m)?;
        if !(0.0..1.0).contains(&self.shaft_ratio) {
            return Err(CalcError::invalid_input(
                "shaft_ratio",
                self.shaft_ratio.to_string(),
                "Bore ratio must lie in [0, 1)",
            ));
        }
        if !self.length_cap_m.is_finite() || self.length_cap_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "length_cap_m",
                self.length_cap_m.to_string(),
                "Overhang and gearbox position leave no room for the shaft",
            ));
        }
        Ok(())
    }

    /// Allowable slope at a bearing after the bearing safety factor.
    fn allowable_slope(&self, bearing: BearingType) -> f64 {
        bearing.slope_limit().0 / self.material.bearing_safety_factor
    }
}

/// Static sizing of one topology.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StaticSizing {
    pub geometry: ShaftGeometry,

    /// Main span after the final step. Shaft length is built from this,
    /// shaft mass from `geometry.main_span_m`.
    pub stepped_span_m: f64,

    /// Slope at the controlling bearing on the last iterate (rad)
    pub slope_rad: f64,

    /// Allowable slope at the controlling bearing (rad)
    pub slope_limit_rad: f64,

    pub iterations: usize,
}

/// Run the solver for `topology`. `downwind` is ignored for 3-point.
pub fn solve_static(
    problem: &StaticProblem<'_>,
    topology: Topology,
    upwind: BearingType,
    downwind: BearingType,
) -> CalcResult<Outcome<StaticSizing>> {
    match topology {
        Topology::ThreePoint => solve_three_point(problem, upwind),
        Topology::FourPoint => solve_four_point(problem, upwind, downwind),
    }
}

// =============================================================================
// SHARED HELPERS
// =============================================================================

/// Resultant bending moment `|(My, Mz)|` at evenly spaced stations.
fn sample_moments(start: f64, end: f64, n: usize, moments: impl Fn(f64) -> (f64, f64)) -> Vec<f64> {
    linspace(start, end, n)
        .into_iter()
        .map(|x| {
            let (my, mz) = moments(x);
            my.hypot(mz)
        })
        .collect()
}

fn peak(values: &[f64]) -> f64 {
    values.iter().copied().fold(0.0, f64::max)
}

/// Size an outer diameter from a moment and apply the bore correction.
fn bored_diameter(moment_nm: f64, inner_m: f64, problem: &StaticProblem<'_>) -> f64 {
    let solid = required_outer_diameter(moment_nm, problem.case.rotor.mx_nm, problem.material);
    with_bore(solid, inner_m)
}

/// Bore from the solid diameter at the peak moment.
fn bore_for_peak(peak_moment_nm: f64, problem: &StaticProblem<'_>) -> f64 {
    problem.shaft_ratio * required_outer_diameter(peak_moment_nm, problem.case.rotor.mx_nm, problem.material)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::loads::RotorLoads;
    use crate::units::{Degrees, G_GRAV};

    /// 5 MW reference rotor loads.
    pub fn reference_loads() -> RotorLoads {
        RotorLoads {
            fx_n: 599_610.0,
            fy_n: 186_780.0,
            fz_n: -842_710.0,
            mx_nm: 330_770.0,
            my_nm: -16_665_000.0,
            mz_nm: 2_896_300.0,
        }
    }

    pub fn reference_case(rotor_mass_kg: f64) -> LoadCase {
        LoadCase::builder(reference_loads(), 1.912, Degrees(5.0).into())
            .rotor_mass(rotor_mass_kg)
            .carrier_mass(8000.0)
            .shrink_disc_mass(1666.5)
            .build()
    }

    /// `overhang - L_rb + (gearbox_cm.x - gearbox_length / 2)` for the
    /// reference nacelle.
    pub fn reference_length_cap() -> f64 {
        5.0 - 1.912 + (1.8 - 1.512 / 2.0)
    }

    #[test]
    fn test_reference_case_weights() {
        let case = reference_case(0.0);
        assert_eq!(case.rotor_weight_n, 0.0);
        assert!((case.shrink_disc_weight_n - 1666.5 * G_GRAV).abs() < 1e-9);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topology_parse_and_display() {
        assert_eq!("three-point".parse::<Topology>().unwrap(), Topology::ThreePoint);
        assert_eq!("4PT".parse::<Topology>().unwrap(), Topology::FourPoint);
        assert!("five-point".parse::<Topology>().is_err());
        assert_eq!(Topology::FourPoint.to_string(), "four-point");
        let json = serde_json::to_string(&Topology::ThreePoint).unwrap();
        assert_eq!(json, "\"three-point\"");
    }

    #[test]
    fn test_layout_distances() {
        assert!((Topology::ThreePoint.bearing_to_gearbox_m(5000.0, 1.912) - 6.11).abs() < 1e-12);
        assert!((Topology::FourPoint.bearing_to_gearbox_m(5000.0, 1.912) - 4.198).abs() < 1e-12);
    }

    #[test]
    fn test_default_settings_valid() {
        assert!(SolverSettings::default().validate().is_ok());
        let bad = SolverSettings {
            points_per_segment: 1,
            ..Default::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_sample_moments_endpoints() {
        let m = sample_moments(0.0, 2.0, 5, |x| (3.0 * x, 4.0 * x));
        assert_eq!(m.len(), 5);
        assert!((m[4] - 10.0).abs() < 1e-12);
        assert_eq!(peak(&m), m[4]);
    }
}
