//! # Design Studies
//!
//! A `Study` is the root container for a set of drivetrain design points.
//! Studies serialize to `.dts` files as human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Study
//! ├── meta: StudyMetadata (version, engineer, study id, timestamps)
//! ├── base: DrivetrainInput (the configuration sweeps start from)
//! └── points: HashMap<Uuid, DesignPoint> (inputs and last results)
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use drivetrain_core::study::{Study, SweepParameter};
//! use drivetrain_core::sizing::DrivetrainInput;
//! use drivetrain_core::solver::Topology;
//!
//! let mut study = Study::new("Jane Engineer", "LSS-042", DrivetrainInput::reference_5mw(Topology::FourPoint));
//! study.sweep(SweepParameter::Overhang, &[4.5, 5.0, 5.5]).unwrap();
//!
//! let summary = study.evaluate_all();
//! println!("{} sized, {} failed", summary.succeeded, summary.failed);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::{CalcError, CalcResult};
use crate::sizing::{size_drivetrain, DrivetrainInput, FatigueCheck, SizingResult};

/// Current schema version for .dts files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root study container.
///
/// Points are stored in a flat UUID-keyed map; [`Study::sorted_ids`] gives
/// the stable order used for evaluation and reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Study {
    pub meta: StudyMetadata,

    /// Configuration new sweeps are derived from
    pub base: DrivetrainInput,

    pub points: HashMap<Uuid, DesignPoint>,
}

impl Study {
    /// Create an empty study around `base`.
    ///
    /// ```rust
    /// use drivetrain_core::study::Study;
    /// use drivetrain_core::sizing::DrivetrainInput;
    ///
    /// let study = Study::new("John Doe", "LSS-001", DrivetrainInput::default());
    /// assert_eq!(study.meta.engineer, "John Doe");
    /// assert_eq!(study.point_count(), 0);
    /// ```
    pub fn new(engineer: impl Into<String>, study_id: impl Into<String>, base: DrivetrainInput) -> Self {
        let now = Utc::now();
        Study {
            meta: StudyMetadata {
                version: SCHEMA_VERSION.to_string(),
                engineer: engineer.into(),
                study_id: study_id.into(),
                description: String::new(),
                created: now,
                modified: now,
            },
            base,
            points: HashMap::new(),
        }
    }

    /// Add a design point; returns its id.
    pub fn add_point(&mut self, input: DrivetrainInput) -> Uuid {
        let id = Uuid::new_v4();
        self.points.insert(id, DesignPoint::new(input));
        self.touch();
        id
    }

    pub fn remove_point(&mut self, id: &Uuid) -> Option<DesignPoint> {
        let point = self.points.remove(id);
        if point.is_some() {
            self.touch();
        }
        point
    }

    pub fn get_point(&self, id: &Uuid) -> Option<&DesignPoint> {
        self.points.get(id)
    }

    /// Mutable access marks the study as modified.
    pub fn get_point_mut(&mut self, id: &Uuid) -> Option<&mut DesignPoint> {
        if self.points.contains_key(id) {
            self.meta.modified = Utc::now();
            self.points.get_mut(id)
        } else {
            None
        }
    }

    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Point ids in evaluation order.
    pub fn sorted_ids(&self) -> Vec<Uuid> {
        let mut ids: Vec<Uuid> = self.points.keys().copied().collect();
        ids.sort();
        ids
    }

    /// Add one point per value, each a copy of `base` with `parameter` set.
    ///
    /// Nothing is added if any value is rejected.
    pub fn sweep(&mut self, parameter: SweepParameter, values: &[f64]) -> CalcResult<Vec<Uuid>> {
        if values.is_empty() {
            return Err(CalcError::missing_field("sweep.values"));
        }
        let inputs = values
            .iter()
            .map(|&v| {
                let mut input = self.base.clone();
                parameter.apply(&mut input, v)?;
                input.label = format!("{} {}={}", self.base.label, parameter, v);
                Ok(input)
            })
            .collect::<CalcResult<Vec<_>>>()?;
        Ok(inputs.into_iter().map(|input| self.add_point(input)).collect())
    }

    /// Size every point in parallel, storing results on the points.
    pub fn evaluate_all(&mut self) -> EvaluationSummary {
        let ids = self.sorted_ids();
        let evaluated: Vec<(Uuid, CalcResult<SizingResult>)> = ids
            .par_iter()
            .filter_map(|id| self.points.get(id).map(|p| (*id, size_drivetrain(&p.input))))
            .collect();

        let now = Utc::now();
        let mut summary = EvaluationSummary::default();
        for (id, outcome) in evaluated {
            let Some(point) = self.points.get_mut(&id) else {
                continue;
            };
            point.evaluated = Some(now);
            match outcome {
                Ok(result) => {
                    summary.succeeded += 1;
                    if !result.is_fully_converged() {
                        summary.with_warnings += 1;
                    }
                    point.result = Some(result);
                    point.error = None;
                }
                Err(e) => {
                    warn!(point = %id, label = %point.input.label, error = %e, "design point failed");
                    summary.failed += 1;
                    point.result = None;
                    point.error = Some(e.to_string());
                }
            }
        }
        self.touch();
        info!(
            study = %self.meta.study_id,
            succeeded = summary.succeeded,
            failed = summary.failed,
            with_warnings = summary.with_warnings,
            "study evaluated"
        );
        summary
    }
}

impl Default for Study {
    fn default() -> Self {
        Study::new("", "", DrivetrainInput::default())
    }
}

/// Study metadata stored in the file header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    pub engineer: String,

    /// Study or job number
    pub study_id: String,

    #[serde(default)]
    pub description: String,

    pub created: DateTime<Utc>,

    pub modified: DateTime<Utc>,
}

/// One configuration in a study and its last evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignPoint {
    pub input: DrivetrainInput,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<SizingResult>,

    /// Error message from the last failed evaluation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(default)]
    pub evaluated: Option<DateTime<Utc>>,
}

impl DesignPoint {
    pub fn new(input: DrivetrainInput) -> Self {
        DesignPoint {
            input,
            result: None,
            error: None,
            evaluated: None,
        }
    }
}

/// Counts from [`Study::evaluate_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EvaluationSummary {
    pub succeeded: usize,
    pub failed: usize,
    /// Succeeded but with a capped search or catalog fallback
    pub with_warnings: usize,
}

/// Input a sweep varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SweepParameter {
    /// Hub to tower centre distance (m)
    Overhang,
    /// Bore to outer diameter ratio
    ShaftRatio,
    /// Fatigue design life (years); needs a fatigue check
    DesignLife,
    /// Shaft tilt (degrees)
    Tilt,
}

impl SweepParameter {
    pub const ALL: [SweepParameter; 4] = [
        SweepParameter::Overhang,
        SweepParameter::ShaftRatio,
        SweepParameter::DesignLife,
        SweepParameter::Tilt,
    ];

    /// Set this parameter on `input`.
    pub fn apply(&self, input: &mut DrivetrainInput, value: f64) -> CalcResult<()> {
        if !value.is_finite() {
            return Err(CalcError::invalid_input(self.to_string(), value.to_string(), "Sweep value must be finite"));
        }
        match self {
            SweepParameter::Overhang => input.overhang_m = value,
            SweepParameter::ShaftRatio => input.shaft_ratio = value,
            SweepParameter::Tilt => input.tilt_deg = value,
            SweepParameter::DesignLife => match &mut input.fatigue {
                FatigueCheck::Parameterized(params) => params.design_life_years = value,
                FatigueCheck::KnownLoads { climate, .. } => climate.design_life_years = value,
                FatigueCheck::Off => {
                    return Err(CalcError::invalid_input(
                        "design-life",
                        value.to_string(),
                        "Design life only matters with a fatigue check enabled",
                    ))
                }
            },
        }
        Ok(())
    }
}

impl fmt::Display for SweepParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SweepParameter::Overhang => "overhang",
            SweepParameter::ShaftRatio => "shaft-ratio",
            SweepParameter::DesignLife => "design-life",
            SweepParameter::Tilt => "tilt",
        };
        write!(f, "{name}")
    }
}

impl FromStr for SweepParameter {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        SweepParameter::ALL
            .into_iter()
            .find(|p| p.to_string() == wanted)
            .ok_or_else(|| {
                CalcError::invalid_input(
                    "sweep.parameter",
                    s,
                    "Expected overhang, shaft-ratio, design-life or tilt",
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::Topology;

    fn static_base() -> DrivetrainInput {
        DrivetrainInput {
            fatigue: FatigueCheck::Off,
            ..DrivetrainInput::reference_5mw(Topology::ThreePoint)
        }
    }

    #[test]
    fn test_study_creation() {
        let study = Study::new("John Doe", "LSS-001", static_base());
        assert_eq!(study.meta.engineer, "John Doe");
        assert_eq!(study.meta.study_id, "LSS-001");
        assert_eq!(study.meta.version, SCHEMA_VERSION);
        assert_eq!(study.point_count(), 0);
    }

    #[test]
    fn test_add_remove_point() {
        let mut study = Study::new("Engineer", "LSS-001", static_base());
        let id = study.add_point(static_base());
        assert_eq!(study.point_count(), 1);
        assert!(study.get_point(&id).is_some());
        assert!(study.remove_point(&id).is_some());
        assert!(study.remove_point(&id).is_none());
        assert_eq!(study.point_count(), 0);
    }

    #[test]
    fn test_sweep_sets_parameter() {
        let mut study = Study::new("Engineer", "LSS-002", static_base());
        let ids = study.sweep(SweepParameter::Tilt, &[4.0, 6.0]).unwrap();
        assert_eq!(ids.len(), 2);
        let tilts: Vec<f64> = ids.iter().map(|id| study.get_point(id).unwrap().input.tilt_deg).collect();
        assert_eq!(tilts, vec![4.0, 6.0]);
        assert!(study.get_point(&ids[0]).unwrap().input.label.contains("tilt=4"));
    }

    #[test]
    fn test_design_life_sweep_needs_fatigue() {
        let mut study = Study::new("Engineer", "LSS-003", static_base());
        assert!(study.sweep(SweepParameter::DesignLife, &[20.0, 25.0]).is_err());
        assert_eq!(study.point_count(), 0);

        study.base.fatigue = FatigueCheck::Parameterized(Default::default());
        let ids = study.sweep(SweepParameter::DesignLife, &[25.0]).unwrap();
        match &study.get_point(&ids[0]).unwrap().input.fatigue {
            FatigueCheck::Parameterized(p) => assert_eq!(p.design_life_years, 25.0),
            other => panic!("unexpected fatigue mode {other:?}"),
        }
    }

    #[test]
    fn test_evaluate_all_records_results_and_errors() {
        let mut study = Study::new("Engineer", "LSS-004", static_base());
        let ids = study.sweep(SweepParameter::ShaftRatio, &[0.1, 0.2, 1.5]).unwrap();
        let summary = study.evaluate_all();
        assert_eq!(summary.succeeded, 2);
        assert_eq!(summary.failed, 1);

        let bad = study.get_point(&ids[2]).unwrap();
        assert!(bad.result.is_none());
        assert!(bad.error.as_deref().unwrap().contains("shaft_ratio"));
        let good = study.get_point(&ids[0]).unwrap();
        assert!(good.evaluated.is_some());
        assert!(good.result.as_ref().unwrap().mass.mass_kg > 0.0);
    }

    #[test]
    fn test_overhang_sweep_lengthens_capped_shaft() {
        let mut study = Study::new("Engineer", "LSS-005", static_base());
        let ids = study.sweep(SweepParameter::Overhang, &[5.0, 5.5]).unwrap();
        study.evaluate_all();
        let length = |id: &Uuid| study.get_point(id).unwrap().result.as_ref().unwrap().mass.length_m;
        // SRB spans run to the layout cap, which grows with the overhang
        assert!(length(&ids[1]) > length(&ids[0]));
    }

    #[test]
    fn test_parameter_parsing() {
        assert_eq!("shaft_ratio".parse::<SweepParameter>().unwrap(), SweepParameter::ShaftRatio);
        assert_eq!("Design-Life".parse::<SweepParameter>().unwrap(), SweepParameter::DesignLife);
        assert!("yaw".parse::<SweepParameter>().is_err());
    }

    #[test]
    fn test_study_serialization() {
        let mut study = Study::new("Jane Engineer", "LSS-042", static_base());
        study.add_point(static_base());
        let json = serde_json::to_string_pretty(&study).unwrap();
        assert!(json.contains("Jane Engineer"));
        assert!(json.contains("three-point"));

        let roundtrip: Study = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.meta.study_id, "LSS-042");
        assert_eq!(roundtrip.point_count(), 1);
    }
}
