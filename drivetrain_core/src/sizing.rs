//! # Drivetrain Sizing
//!
//! Top-level sizing of the low-speed shaft and its main bearings for one
//! drivetrain configuration.
//!
//! ## Flow
//!
//! 1. Fill estimated inputs (hub-to-bearing distance, flange length,
//!    rotor mass and moments where the caller left zeros)
//! 2. Static slope-driven sizing for the chosen [`Topology`]
//! 3. Optional fatigue check ([`FatigueCheck`]) growing the bearing seat
//!    diameters until the Miner sum is met, with rated bearing selection
//! 4. Catalog bearing selection and final mass properties
//!
//! Every bounded search reports how it ended. A capped span or diameter,
//! or a catalog fallback, shows up in [`SizingResult::warnings`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use drivetrain_core::sizing::{size_drivetrain, DrivetrainInput, FatigueCheck};
//! use drivetrain_core::solver::Topology;
//!
//! let mut input = DrivetrainInput::reference_5mw(Topology::ThreePoint);
//! input.fatigue = FatigueCheck::Off;
//!
//! let result = size_drivetrain(&input).unwrap();
//! println!("Shaft mass: {:.0} kg", result.mass.mass_kg);
//! println!("Shaft length: {:.3} m", result.mass.length_m);
//! for w in result.warnings() {
//!     println!("warning: {w}");
//! }
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::bearings::{resize_for_bearings, select_bearing, BearingSpec, BearingType};
use crate::errors::{require_finite, require_positive, CalcError, CalcResult};
use crate::fatigue::{
    four_point_bearing_loads, size_for_fatigue, size_for_known_loads, synthesize_spectrum, three_point_bearing_loads,
    DamageContext, DamageResult, FatigueParams, KnownLoadContext, KnownLoadSpectra, SnCurve, Station, TurbineParams,
};
use crate::finalize::{finalize, MassProperties, NacelleLayout};
use crate::geometry::ShaftGeometry;
use crate::loads::estimators::{or_estimate, MIN_ROTOR_MASS_KG};
use crate::loads::{estimate_flange_length, estimate_hub_to_bearing, estimate_rotor_mass, LoadCase, RotorLoads};
use crate::materials::ShaftMaterial;
use crate::outcome::{Outcome, OutcomeStatus};
use crate::solver::{solve_static, SolverSettings, StaticProblem, StaticSizing, Topology};
use crate::units::{Degrees, Radians, G_GRAV};

// =============================================================================
// INPUT
// =============================================================================

/// Which fatigue check runs after static sizing.
///
/// ```toml
/// [fatigue]
/// mode = "parameterized"
/// iec_class = "B"
/// design_life_years = 20.0
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum FatigueCheck {
    /// Static sizing only; bearings picked by bore alone
    #[default]
    Off,
    /// Synthesized lifetime spectrum from turbine class and climate
    Parameterized(FatigueParams),
    /// Caller-supplied range distributions per rotor load channel
    KnownLoads {
        spectra: KnownLoadSpectra,
        /// Climate and service life, used for the bearing life and S-N slope
        #[serde(default)]
        climate: FatigueParams,
    },
}

impl FatigueCheck {
    pub fn label(&self) -> &'static str {
        match self {
            FatigueCheck::Off => "off",
            FatigueCheck::Parameterized(_) => "parameterized",
            FatigueCheck::KnownLoads { .. } => "known-loads",
        }
    }
}

/// One drivetrain configuration to size.
///
/// Zero-valued `hub_to_bearing_m`, `flange_length_m` and `rotor_mass_kg`
/// are filled from regressions on rotor diameter and rating.
///
/// ## TOML Example
///
/// ```toml
/// label = "5MW 3-point"
/// topology = "three-point"
/// rotor_diameter_m = 126.0
/// rated_rpm = 12.1
/// machine_rating_kw = 5000.0
/// tilt_deg = 5.0
/// shaft_ratio = 0.1
/// upwind_bearing = "SRB"
/// downwind_bearing = "SRB"
/// gearbox_cm_m = [1.8, 0.0, 0.756]
/// gearbox_length_m = 1.512
///
/// [rotor]
/// fx_n = 599610.0
/// my_nm = -16665000.0
///
/// [fatigue]
/// mode = "off"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrivetrainInput {
    /// User label for reports
    pub label: String,

    pub topology: Topology,

    /// Extreme rotor loads at the hub
    pub rotor: RotorLoads,

    pub rotor_diameter_m: f64,

    pub rated_rpm: f64,

    pub machine_rating_kw: f64,

    pub drivetrain_efficiency: f64,

    /// Rotor mass; zero to estimate where a rotor weight is needed (kg)
    pub rotor_mass_kg: f64,

    /// Shaft tilt from horizontal (degrees)
    pub tilt_deg: f64,

    /// Bore to outer diameter ratio
    pub shaft_ratio: f64,

    pub upwind_bearing: BearingType,

    /// Second main bearing (4-point), or the gearbox-side seat (3-point)
    pub downwind_bearing: BearingType,

    pub gearbox_mass_kg: f64,

    /// Gearbox centre of mass in the nacelle frame (m)
    pub gearbox_cm_m: [f64; 3],

    pub gearbox_length_m: f64,

    pub carrier_mass_kg: f64,

    pub shrink_disc_mass_kg: f64,

    /// Hub flange length; zero to estimate (m)
    pub flange_length_m: f64,

    /// Hub centre to tower centre (m)
    pub overhang_m: f64,

    /// Hub centre to upwind main bearing; zero to estimate (m)
    pub hub_to_bearing_m: f64,

    pub fatigue: FatigueCheck,

    pub material: ShaftMaterial,

    pub settings: SolverSettings,
}

impl Default for DrivetrainInput {
    fn default() -> Self {
        DrivetrainInput::reference_5mw(Topology::ThreePoint)
    }
}

impl DrivetrainInput {
    /// The NREL 5 MW class reference drivetrain.
    pub fn reference_5mw(topology: Topology) -> Self {
        let rotor_diameter_m = 126.0;
        DrivetrainInput {
            label: format!("5MW reference ({topology})"),
            topology,
            rotor: RotorLoads {
                fx_n: 599_610.0,
                fy_n: 186_780.0,
                fz_n: -842_710.0,
                mx_nm: 330_770.0,
                my_nm: -16_665_000.0,
                mz_nm: 2_896_300.0,
            },
            rotor_diameter_m,
            rated_rpm: 12.1,
            machine_rating_kw: 5000.0,
            drivetrain_efficiency: 0.95,
            rotor_mass_kg: 0.0,
            tilt_deg: 5.0,
            shaft_ratio: 0.1,
            upwind_bearing: BearingType::Srb,
            downwind_bearing: BearingType::Srb,
            gearbox_mass_kg: 40_000.0,
            gearbox_cm_m: [1.8, 0.0, 0.756],
            gearbox_length_m: 0.012 * rotor_diameter_m,
            carrier_mass_kg: 8000.0,
            shrink_disc_mass_kg: 333.3 * 5.0,
            flange_length_m: 0.5,
            overhang_m: 5.0,
            hub_to_bearing_m: 1.912,
            fatigue: FatigueCheck::Parameterized(FatigueParams::default()),
            material: ShaftMaterial::default(),
            settings: SolverSettings::default(),
        }
    }

    pub fn validate(&self) -> CalcResult<()> {
        self.rotor.validate()?;
        self.material.validate()?;
        self.settings.validate()?;
        require_positive("rotor_diameter_m", self.rotor_diameter_m)?;
        require_positive("rated_rpm", self.rated_rpm)?;
        require_positive("machine_rating_kw", self.machine_rating_kw)?;
        require_positive("drivetrain_efficiency", self.drivetrain_efficiency)?;
        require_positive("gearbox_length_m", self.gearbox_length_m)?;
        require_positive("overhang_m", self.overhang_m)?;
        require_finite("tilt_deg", self.tilt_deg)?;
        for (field, v) in [
            ("rotor_mass_kg", self.rotor_mass_kg),
            ("gearbox_mass_kg", self.gearbox_mass_kg),
            ("carrier_mass_kg", self.carrier_mass_kg),
            ("shrink_disc_mass_kg", self.shrink_disc_mass_kg),
            ("flange_length_m", self.flange_length_m),
            ("hub_to_bearing_m", self.hub_to_bearing_m),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(CalcError::invalid_input(field, v.to_string(), "Must be zero (estimate) or positive"));
            }
        }
        if !(0.0..1.0).contains(&self.shaft_ratio) {
            return Err(CalcError::invalid_input(
                "shaft_ratio",
                self.shaft_ratio.to_string(),
                "Bore ratio must lie in [0, 1)",
            ));
        }
        match &self.fatigue {
            FatigueCheck::Off => Ok(()),
            FatigueCheck::Parameterized(params) => params.validate(),
            FatigueCheck::KnownLoads { spectra, .. } => spectra.validate(),
        }
    }

    pub fn tilt(&self) -> Radians {
        Degrees(self.tilt_deg).into()
    }

    /// Hub-to-bearing distance after estimation (m).
    pub fn resolved_hub_to_bearing_m(&self) -> f64 {
        or_estimate(self.hub_to_bearing_m, 0.0, || estimate_hub_to_bearing(self.rotor_diameter_m))
    }

    pub fn resolved_flange_length_m(&self) -> f64 {
        or_estimate(self.flange_length_m, 0.0, || estimate_flange_length(self.rotor_diameter_m))
    }

    /// Turbine operating point for the spectrum synthesizer.
    pub fn turbine_params(&self, fatigue: FatigueParams) -> TurbineParams {
        TurbineParams {
            rotor_diameter_m: self.rotor_diameter_m,
            rated_rpm: self.rated_rpm,
            machine_rating_kw: self.machine_rating_kw,
            drivetrain_efficiency: self.drivetrain_efficiency,
            fatigue,
        }
    }

    /// Longest main span the nacelle leaves room for (m).
    pub fn length_cap_m(&self) -> f64 {
        self.overhang_m - self.resolved_hub_to_bearing_m() + (self.gearbox_cm_m[0] - self.gearbox_length_m / 2.0)
    }

    fn layout(&self) -> NacelleLayout {
        NacelleLayout {
            gearbox_cm_m: self.gearbox_cm_m,
            gearbox_length_m: self.gearbox_length_m,
            flange_length_m: self.resolved_flange_length_m(),
            shrink_disc_mass_kg: self.shrink_disc_mass_kg,
        }
    }

    /// Load case for the static solve. The 3-point solver takes the rotor
    /// mass as given; the 4-point solver estimates it when zero.
    fn static_case(&self, l_rb: f64) -> LoadCase {
        let rotor_mass = match self.topology {
            Topology::ThreePoint => self.rotor_mass_kg,
            Topology::FourPoint => or_estimate(self.rotor_mass_kg, 0.0, || estimate_rotor_mass(self.machine_rating_kw)),
        };
        LoadCase::builder(self.rotor.with_estimated_moments(self.rotor_mass_kg, l_rb), l_rb, self.tilt())
            .rotor_mass(rotor_mass)
            .gearbox_mass(self.gearbox_mass_kg)
            .carrier_mass(self.carrier_mass_kg)
            .shrink_disc_mass(self.shrink_disc_mass_kg)
            .build()
    }

    /// Rotor weight for the fatigue path (N).
    fn fatigue_rotor_weight_n(&self) -> f64 {
        or_estimate(self.rotor_mass_kg, MIN_ROTOR_MASS_KG, || estimate_rotor_mass(self.machine_rating_kw)) * G_GRAV
    }
}

// =============================================================================
// RESULT
// =============================================================================

/// A main bearing with its selection outcome and position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedBearing {
    pub selection: Outcome<BearingSpec>,

    /// Dynamic rating the fatigue spectrum demanded (kN); `None` when the
    /// bearing was picked by bore alone
    pub required_rating_kn: Option<f64>,

    /// Bearing centre in the nacelle frame (m)
    pub location_m: [f64; 3],
}

impl PlacedBearing {
    pub fn spec(&self) -> &BearingSpec {
        self.selection.value()
    }
}

/// Fatigue loop outcomes per bearing seat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FatigueSummary {
    /// Which check ran ("parameterized" or "known-loads")
    pub mode: String,

    pub upwind: Outcome<DamageResult>,

    /// Downwind seat loop; 4-point only
    pub downwind: Option<Outcome<DamageResult>>,
}

/// Everything the sizing produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizingResult {
    pub label: String,

    pub topology: Topology,

    /// Static slope-driven sizing as solved
    pub static_sizing: Outcome<StaticSizing>,

    pub fatigue: Option<FatigueSummary>,

    /// Final shaft geometry after any fatigue growth
    pub geometry: ShaftGeometry,

    pub upwind_bearing: PlacedBearing,

    /// Second main bearing; 4-point only
    pub downwind_bearing: Option<PlacedBearing>,

    /// Gearbox-side seat of a 3-point shaft, used for the mass model only
    pub gearbox_seat: Option<Outcome<BearingSpec>>,

    pub mass: MassProperties,
}

impl SizingResult {
    /// True when every search converged and every bearing came from the
    /// catalog.
    pub fn is_fully_converged(&self) -> bool {
        self.warnings().is_empty()
    }

    /// One line per capped search or catalog fallback.
    pub fn warnings(&self) -> Vec<String> {
        let mut out = Vec::new();
        if let Outcome::Capped { reason, .. } = &self.static_sizing {
            out.push(format!("static sizing capped: {reason}"));
        }
        if let Some(f) = &self.fatigue {
            if let Outcome::Capped { reason, .. } = &f.upwind {
                out.push(format!("upwind fatigue capped: {reason}"));
            }
            if let Some(Outcome::Capped { reason, .. }) = &f.downwind {
                out.push(format!("downwind fatigue capped: {reason}"));
            }
        }
        let bearings = [Some(&self.upwind_bearing), self.downwind_bearing.as_ref()];
        for (name, b) in ["upwind", "downwind"].iter().zip(bearings) {
            if let Some(b) = b {
                if b.selection.status() == OutcomeStatus::NoMatch {
                    out.push(format!(
                        "{name} bearing: no {} catalog row, using {:.2} m fallback",
                        b.spec().bearing_type,
                        b.spec().bore_m
                    ));
                }
            }
        }
        if let Some(Outcome::NoMatch { fallback }) = &self.gearbox_seat {
            out.push(format!(
                "gearbox seat: no {} catalog row, using {:.2} m fallback",
                fallback.bearing_type, fallback.bore_m
            ));
        }
        out
    }
}

// =============================================================================
// SIZING
// =============================================================================

/// Bearing picks before placement.
struct Selections {
    upwind: Outcome<BearingSpec>,
    upwind_rating_kn: Option<f64>,
    second: Outcome<BearingSpec>,
    second_rating_kn: Option<f64>,
}

/// Size the shaft and main bearings for `input`.
pub fn size_drivetrain(input: &DrivetrainInput) -> CalcResult<SizingResult> {
    input.validate()?;

    let l_rb = input.resolved_hub_to_bearing_m();
    let case = input.static_case(l_rb);
    let problem = StaticProblem {
        case: &case,
        material: &input.material,
        settings: &input.settings,
        shaft_ratio: input.shaft_ratio,
        length_cap_m: input.length_cap_m(),
        bearing_to_gearbox_m: input.topology.bearing_to_gearbox_m(input.machine_rating_kw, l_rb),
    };
    let static_sizing = solve_static(&problem, input.topology, input.upwind_bearing, input.downwind_bearing)?;
    let sized = *static_sizing.value();
    debug!(
        status = static_sizing.status().label(),
        span = sized.geometry.main_span_m,
        d_max = sized.geometry.outer_upwind_m,
        "static sizing finished"
    );

    let (geometry, fatigue, picks) = match &input.fatigue {
        FatigueCheck::Off => (sized.geometry, None, select_by_bore(input, &sized.geometry)?),
        FatigueCheck::Parameterized(params) => parameterized_check(input, &case, &sized, params)?,
        FatigueCheck::KnownLoads { spectra, climate } => known_loads_check(input, &sized, spectra, climate)?,
    };

    let final_sizing = StaticSizing { geometry, ..sized };
    let mass = finalize(
        input.topology,
        &final_sizing,
        picks.upwind.value(),
        picks.second.value(),
        &input.layout(),
        input.tilt(),
        input.material.density_kg_m3,
    )?;

    let upwind_bearing = PlacedBearing {
        selection: picks.upwind,
        required_rating_kn: picks.upwind_rating_kn,
        location_m: mass.upwind_bearing_m,
    };
    let (downwind_bearing, gearbox_seat) = match (input.topology, mass.downwind_bearing_m) {
        (Topology::FourPoint, Some(location_m)) => (
            Some(PlacedBearing {
                selection: picks.second,
                required_rating_kn: picks.second_rating_kn,
                location_m,
            }),
            None,
        ),
        _ => (None, Some(picks.second)),
    };

    let result = SizingResult {
        label: input.label.clone(),
        topology: input.topology,
        static_sizing,
        fatigue,
        geometry,
        upwind_bearing,
        downwind_bearing,
        gearbox_seat,
        mass,
    };

    info!(
        label = %result.label,
        topology = %result.topology,
        mass_kg = result.mass.mass_kg,
        length_m = result.mass.length_m,
        upwind_bore_m = result.upwind_bearing.spec().bore_m,
        warnings = result.warnings().len(),
        "drivetrain sized"
    );
    Ok(result)
}

/// Bore-only picks: upwind seat and the second station.
fn select_by_bore(input: &DrivetrainInput, geometry: &ShaftGeometry) -> CalcResult<Selections> {
    Ok(Selections {
        upwind: resize_for_bearings(input.upwind_bearing, geometry.outer_upwind_m)?,
        upwind_rating_kn: None,
        second: resize_for_bearings(input.downwind_bearing, geometry.outer_second_station_m())?,
        second_rating_kn: None,
    })
}

type CheckOutput = (ShaftGeometry, Option<FatigueSummary>, Selections);

fn parameterized_check(
    input: &DrivetrainInput,
    case: &LoadCase,
    sized: &StaticSizing,
    params: &FatigueParams,
) -> CalcResult<CheckOutput> {
    let spectrum = synthesize_spectrum(&input.turbine_params(*params))?;
    let curve = SnCurve::fit(input.material.ultimate_strength_pa, Some(params.fatigue_exponent))?;
    let fatigue_case = case.with_rotor_weight(input.fatigue_rotor_weight_n());
    let g = sized.geometry;
    let settings = &input.settings;
    let cap = input.topology.diameter_cap_m(settings);

    let ctx = DamageContext {
        spectrum: &spectrum,
        curve,
        ultimate_strength_pa: input.material.ultimate_strength_pa,
        density_kg_m3: input.material.density_kg_m3,
        tilt: case.tilt,
        rotor_weight_n: fatigue_case.rotor_weight_n,
        gearbox_weight_n: fatigue_case.gearbox_weight_n,
        hub_to_bearing_m: fatigue_case.hub_to_bearing_m,
        companion_diameter_m: g.outer_second_station_m(),
        span_m: g.main_span_m,
    };
    let upwind_station = Station::Upwind {
        shaft_ratio: input.shaft_ratio,
    };
    let upwind = size_for_fatigue(g.outer_upwind_m, cap, settings.diameter_step_m, &ctx, upwind_station)?;
    let d_max = upwind.value().diameter_m;
    let d_in = input.shaft_ratio * d_max;

    let density = input.material.density_kg_m3;
    match input.topology {
        Topology::ThreePoint => {
            let geometry = ShaftGeometry {
                outer_upwind_m: d_max,
                inner_m: d_in,
                ..g
            };
            geometry.validate()?;
            let loads = three_point_bearing_loads(&spectrum, &fatigue_case, &geometry, density)?;
            let rated = loads.select(input.upwind_bearing, d_max)?;
            let picks = Selections {
                upwind: rated.bearing,
                upwind_rating_kn: Some(rated.required_rating_kn),
                second: resize_for_bearings(input.downwind_bearing, geometry.outer_downwind_m)?,
                second_rating_kn: None,
            };
            let summary = FatigueSummary {
                mode: input.fatigue.label().to_string(),
                upwind,
                downwind: None,
            };
            Ok((geometry, Some(summary), picks))
        }
        Topology::FourPoint => {
            let down_ctx = DamageContext {
                companion_diameter_m: d_max,
                ..ctx
            };
            let d_med_static = g.outer_second_station_m();
            let downwind = size_for_fatigue(
                d_med_static,
                cap,
                settings.diameter_step_m,
                &down_ctx,
                Station::Downwind { inner_m: d_in },
            )?;
            let geometry = ShaftGeometry {
                outer_upwind_m: d_max,
                outer_mid_m: Some(downwind.value().diameter_m),
                inner_m: d_in,
                ..g
            };
            geometry.validate()?;

            let (up_loads, down_loads) = four_point_bearing_loads(&spectrum, &fatigue_case, &geometry, density)?;
            let up = up_loads.select(input.upwind_bearing, d_max)?;
            let down = down_loads.select(input.downwind_bearing, geometry.outer_second_station_m())?;
            let picks = Selections {
                upwind: up.bearing,
                upwind_rating_kn: Some(up.required_rating_kn),
                second: down.bearing,
                second_rating_kn: Some(down.required_rating_kn),
            };
            let summary = FatigueSummary {
                mode: input.fatigue.label().to_string(),
                upwind,
                downwind: Some(downwind),
            };
            Ok((geometry, Some(summary), picks))
        }
    }
}

fn known_loads_check(
    input: &DrivetrainInput,
    sized: &StaticSizing,
    spectra: &KnownLoadSpectra,
    climate: &FatigueParams,
) -> CalcResult<CheckOutput> {
    let curve = SnCurve::fit(input.material.ultimate_strength_pa, Some(climate.fatigue_exponent))?;
    let l_rb = input.resolved_hub_to_bearing_m();
    let ctx = KnownLoadContext {
        spectra,
        curve,
        hub_to_bearing_m: l_rb,
    };
    let g = sized.geometry;
    let settings = &input.settings;
    let cap = settings.known_loads_diameter_cap_m;
    let step = settings.diameter_step_m;

    let upwind = size_for_known_loads(
        g.outer_upwind_m,
        cap,
        step,
        &ctx,
        Station::Upwind {
            shaft_ratio: input.shaft_ratio,
        },
    )?;
    let d_max = upwind.value().diameter_m;
    let d_in = input.shaft_ratio * d_max;
    let life = spectra.life_revolutions(climate, input.rated_rpm);
    let blades = climate.blade_count;
    let span = g.main_span_m;

    let up_rating = spectra.upwind_rating(input.upwind_bearing, span, l_rb, blades, life)?;
    let up_pick = select_bearing(input.upwind_bearing, d_max, up_rating)?;

    match input.topology {
        Topology::ThreePoint => {
            let geometry = ShaftGeometry {
                outer_upwind_m: d_max,
                inner_m: d_in,
                ..g
            };
            geometry.validate()?;
            let picks = Selections {
                upwind: up_pick,
                upwind_rating_kn: Some(up_rating),
                second: resize_for_bearings(input.downwind_bearing, geometry.outer_downwind_m)?,
                second_rating_kn: None,
            };
            let summary = FatigueSummary {
                mode: input.fatigue.label().to_string(),
                upwind,
                downwind: None,
            };
            Ok((geometry, Some(summary), picks))
        }
        Topology::FourPoint => {
            let downwind = size_for_known_loads(
                g.outer_second_station_m(),
                cap,
                step,
                &ctx,
                Station::Downwind { inner_m: d_in },
            )?;
            let d_med = downwind.value().diameter_m;
            let geometry = ShaftGeometry {
                outer_upwind_m: d_max,
                outer_mid_m: Some(d_med),
                inner_m: d_in,
                ..g
            };
            geometry.validate()?;
            let down_rating = spectra.downwind_rating(input.downwind_bearing, span, l_rb, blades, life)?;
            let picks = Selections {
                upwind: up_pick,
                upwind_rating_kn: Some(up_rating),
                second: select_bearing(input.downwind_bearing, d_med, down_rating)?,
                second_rating_kn: Some(down_rating),
            };
            let summary = FatigueSummary {
                mode: input.fatigue.label().to_string(),
                upwind,
                downwind: Some(downwind),
            };
            Ok((geometry, Some(summary), picks))
        }
    }
}
