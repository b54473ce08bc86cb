//! # drivetrain_core - Low-Speed Shaft and Main Bearing Sizing
//!
//! `drivetrain_core` sizes the low-speed shaft of a geared wind turbine and
//! picks its main bearings. All inputs and outputs are JSON/TOML
//! serializable so configurations and results can be stored, diffed and
//! passed between tools.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: sizing is a pure function of a [`DrivetrainInput`]
//! - **Honest searches**: every bounded search returns an [`Outcome`] saying
//!   whether it converged, hit its cap, or fell back off-catalog
//! - **Rich Errors**: structured [`CalcError`] values, not strings
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use drivetrain_core::{size_drivetrain, DrivetrainInput};
//! use drivetrain_core::solver::Topology;
//!
//! let input = DrivetrainInput::reference_5mw(Topology::FourPoint);
//! let result = size_drivetrain(&input).unwrap();
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! println!("{json}");
//! ```
//!
//! ## Modules
//!
//! - [`sizing`] - end-to-end sizing of one drivetrain
//! - [`solver`] - static slope-driven 3-point and 4-point solvers
//! - [`fatigue`] - load spectrum, S-N damage and rated bearing loads
//! - [`bearings`] - main bearing catalog, life factors and selection
//! - [`finalize`] - shaft mass, centre of mass and inertia
//! - [`loads`] - rotor load case and regression estimates
//! - [`geometry`] - shaft cross-section and frustum helpers
//! - [`materials`] - shaft steel properties
//! - [`study`] - multi-point design studies with parallel evaluation
//! - [`file_io`] - study and input files with atomic saves and locking
//! - [`units`], [`integrate`], [`outcome`], [`errors`] - shared plumbing

pub mod bearings;
pub mod errors;
pub mod fatigue;
#[cfg(not(target_arch = "wasm32"))]
pub mod file_io;
pub mod finalize;
pub mod geometry;
pub mod integrate;
pub mod loads;
pub mod materials;
pub mod outcome;
pub mod sizing;
pub mod solver;
pub mod study;
pub mod units;

pub use errors::{CalcError, CalcResult};
#[cfg(not(target_arch = "wasm32"))]
pub use file_io::{load_input, load_study, save_study, FileLock};
pub use outcome::{Outcome, OutcomeStatus};
pub use sizing::{size_drivetrain, DrivetrainInput, FatigueCheck, SizingResult};
pub use study::{Study, StudyMetadata, SweepParameter};
