//! # Drivetrain CLI
//!
//! Command-line front end for low-speed shaft and main bearing sizing.
//!
//! ```text
//! drivetrain size turbine.toml            # human-readable report
//! drivetrain size turbine.toml --json     # SizingResult as JSON
//! drivetrain select --bearing SRB --bore 1.1 --rating 12000
//! drivetrain spectrum turbine.toml
//! drivetrain template --topology four-point > turbine.toml
//! drivetrain study new sweep.dts --engineer "J. Doe" --id LSS-7 --base turbine.toml
//! drivetrain study sweep sweep.dts --parameter overhang --values 4.5,5,5.5
//! drivetrain study run sweep.dts
//! ```
//!
//! Errors are printed to stderr as JSON and the process exits non-zero.
//! Set `RUST_LOG` or pass `--verbose` for solver logging.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use drivetrain_core::bearings::{resize_for_bearings, select_bearing, BearingSpec, BearingType};
use drivetrain_core::errors::{CalcError, CalcResult};
use drivetrain_core::fatigue::{synthesize_spectrum, FatigueParams};
use drivetrain_core::file_io::{load_input, load_study, save_study, FileLock};
use drivetrain_core::sizing::{size_drivetrain, DrivetrainInput, FatigueCheck, SizingResult};
use drivetrain_core::solver::Topology;
use drivetrain_core::study::{Study, SweepParameter};
use drivetrain_core::{Outcome, OutcomeStatus};

const RULE: &str = "═══════════════════════════════════════════════";

#[derive(Parser)]
#[command(name = "drivetrain", version, about = "Wind turbine low-speed shaft and main bearing sizing")]
struct Cli {
    /// Debug-level solver logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Size one drivetrain from a TOML or JSON input file
    Size {
        input: PathBuf,
        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Look up a catalog bearing by bore and optional dynamic rating
    Select {
        #[arg(long)]
        bearing: BearingType,
        /// Minimum bore (m)
        #[arg(long)]
        bore: f64,
        /// Minimum dynamic rating (kN)
        #[arg(long)]
        rating: Option<f64>,
    },
    /// Print the synthesized lifetime load spectrum for an input file
    Spectrum { input: PathBuf },
    /// Print the 5 MW reference input
    Template {
        #[arg(long, default_value = "three-point")]
        topology: Topology,
        #[arg(long, value_enum, default_value_t = Format::Toml)]
        format: Format,
    },
    /// Multi-point design studies
    Study {
        #[command(subcommand)]
        command: StudyCommand,
    },
}

#[derive(Subcommand)]
enum StudyCommand {
    /// Create an empty study file
    New {
        path: PathBuf,
        #[arg(long, default_value = "")]
        engineer: String,
        #[arg(long, default_value = "")]
        id: String,
        /// Base input; the 5 MW reference when omitted
        #[arg(long)]
        base: Option<PathBuf>,
    },
    /// Add design points varying one parameter of the base input
    Sweep {
        path: PathBuf,
        #[arg(long)]
        parameter: SweepParameter,
        #[arg(long, value_delimiter = ',', required = true)]
        values: Vec<f64>,
        #[arg(long, default_value = "cli")]
        user: String,
    },
    /// Evaluate every design point and save the results
    Run {
        path: PathBuf,
        #[arg(long, default_value = "cli")]
        user: String,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Toml,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!("{json}");
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn run(command: Command) -> CalcResult<()> {
    match command {
        Command::Size { input, json } => {
            let input = load_input(&input)?;
            let result = size_drivetrain(&input)?;
            if json {
                println!("{}", to_json(&result)?);
            } else {
                print_sizing(&input, &result);
            }
            Ok(())
        }
        Command::Select { bearing, bore, rating } => {
            let pick = match rating {
                Some(kn) => select_bearing(bearing, bore, kn)?,
                None => resize_for_bearings(bearing, bore)?,
            };
            print_selection(&pick);
            Ok(())
        }
        Command::Spectrum { input } => {
            let input = load_input(&input)?;
            print_spectrum(&input)
        }
        Command::Template { topology, format } => {
            let input = DrivetrainInput::reference_5mw(topology);
            let text = match format {
                Format::Toml => toml::to_string_pretty(&input).map_err(|e| CalcError::serialization(e.to_string()))?,
                Format::Json => to_json(&input)?,
            };
            println!("{text}");
            Ok(())
        }
        Command::Study { command } => run_study(command),
    }
}

fn run_study(command: StudyCommand) -> CalcResult<()> {
    match command {
        StudyCommand::New {
            path,
            engineer,
            id,
            base,
        } => {
            let base = match base {
                Some(p) => load_input(&p)?,
                None => DrivetrainInput::default(),
            };
            let study = Study::new(engineer, id, base);
            save_study(&study, &path)?;
            println!("Created {}", path.display());
            Ok(())
        }
        StudyCommand::Sweep {
            path,
            parameter,
            values,
            user,
        } => with_locked_study(&path, &user, |study| {
            let ids = study.sweep(parameter, &values)?;
            println!("Added {} design points ({parameter})", ids.len());
            Ok(())
        }),
        StudyCommand::Run { path, user, json } => with_locked_study(&path, &user, |study| {
            let summary = study.evaluate_all();
            if json {
                println!("{}", to_json(&*study)?);
            } else {
                print_study(study);
            }
            println!(
                "{} sized, {} failed, {} with warnings",
                summary.succeeded, summary.failed, summary.with_warnings
            );
            Ok(())
        }),
    }
}

/// Lock, load, modify, save.
fn with_locked_study(path: &Path, user: &str, f: impl FnOnce(&mut Study) -> CalcResult<()>) -> CalcResult<()> {
    let lock = FileLock::acquire(path, user)?;
    let mut study = load_study(path)?;
    f(&mut study)?;
    save_study(&study, lock.study_path())?;
    debug!(path = %path.display(), "study updated");
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> CalcResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| CalcError::serialization(e.to_string()))
}

fn status_icon(status: OutcomeStatus) -> &'static str {
    match status {
        OutcomeStatus::Converged => "[OK]",
        OutcomeStatus::Capped => "[CAPPED]",
        OutcomeStatus::NoMatch => "[FALLBACK]",
    }
}

fn bearing_line(spec: &BearingSpec) -> String {
    format!(
        "{} d={:.3} m  D={:.3} m  B={:.3} m  C={:.0} kN  {:.0} kg",
        spec.bearing_type, spec.bore_m, spec.outer_diameter_m, spec.facewidth_m, spec.dynamic_rating_kn, spec.mass_kg
    )
}

fn print_sizing(input: &DrivetrainInput, r: &SizingResult) {
    let g = &r.geometry;
    println!("{RULE}");
    println!("  LOW-SPEED SHAFT SIZING: {}", r.label);
    println!("{RULE}");
    println!();
    println!("Input:");
    println!("  Topology:  {}", r.topology.display_name());
    println!(
        "  Turbine:   {:.0} kW, D={:.1} m, {:.1} rpm",
        input.machine_rating_kw, input.rotor_diameter_m, input.rated_rpm
    );
    println!("  Bearings:  {} / {}", input.upwind_bearing, input.downwind_bearing);
    println!("  Fatigue:   {}", input.fatigue.label());
    println!();

    let s = r.static_sizing.value();
    println!("Static sizing: {}", status_icon(r.static_sizing.status()));
    println!("  Main span:  {:.3} m (stepped {:.3} m)", g.main_span_m, s.stepped_span_m);
    println!("  Slope:      {:.3e} / {:.3e} rad", s.slope_rad, s.slope_limit_rad);
    println!("  Iterations: {}", s.iterations);
    println!();

    if let Some(f) = &r.fatigue {
        println!("Fatigue ({}):", f.mode);
        let up = f.upwind.value();
        println!(
            "  Upwind seat:   D={:.4} m  damage={:.3} {}",
            up.diameter_m,
            up.damage,
            status_icon(f.upwind.status())
        );
        if let Some(down) = &f.downwind {
            let d = down.value();
            println!(
                "  Downwind seat: D={:.4} m  damage={:.3} {}",
                d.diameter_m,
                d.damage,
                status_icon(down.status())
            );
        }
        println!();
    }

    println!("Shaft:");
    println!("  D upwind:   {:.4} m", g.outer_upwind_m);
    if let Some(mid) = g.outer_mid_m {
        println!("  D mid:      {:.4} m", mid);
    }
    println!("  D downwind: {:.4} m", g.outer_downwind_m);
    println!("  Bore:       {:.4} m", g.inner_m);
    println!();

    println!("Main bearings:");
    let up = &r.upwind_bearing;
    println!("  Upwind:   {} {}", bearing_line(up.spec()), status_icon(up.selection.status()));
    if let Some(kn) = up.required_rating_kn {
        println!("            required C={kn:.0} kN");
    }
    if let Some(down) = &r.downwind_bearing {
        println!("  Downwind: {} {}", bearing_line(down.spec()), status_icon(down.selection.status()));
        if let Some(kn) = down.required_rating_kn {
            println!("            required C={kn:.0} kN");
        }
    }
    if let Some(seat) = &r.gearbox_seat {
        println!("  GB seat:  {} {}", bearing_line(seat.value()), status_icon(seat.status()));
    }
    println!();

    let m = &r.mass;
    println!("Mass properties:");
    println!("  Mass:    {:.0} kg", m.mass_kg);
    println!("  Length:  {:.3} m", m.length_m);
    println!("  CM:      ({:.3}, {:.3}, {:.3}) m", m.cm_m[0], m.cm_m[1], m.cm_m[2]);
    println!(
        "  Inertia: ({:.0}, {:.0}, {:.0}) kg·m²",
        m.inertia_kgm2[0], m.inertia_kgm2[1], m.inertia_kgm2[2]
    );
    println!();

    println!("{RULE}");
    let warnings = r.warnings();
    if warnings.is_empty() {
        println!("  RESULT: CONVERGED");
    } else {
        println!("  RESULT: {} WARNING(S)", warnings.len());
        for w in &warnings {
            println!("  - {w}");
        }
    }
    println!("{RULE}");
}

fn print_selection(pick: &Outcome<BearingSpec>) {
    println!("{} {}", bearing_line(pick.value()), status_icon(pick.status()));
    if pick.status() == OutcomeStatus::NoMatch {
        println!("No catalog row qualifies; the line above is an oversized placeholder.");
    }
}

fn print_spectrum(input: &DrivetrainInput) -> CalcResult<()> {
    let params = match &input.fatigue {
        FatigueCheck::Parameterized(p) => *p,
        FatigueCheck::KnownLoads { climate, .. } => *climate,
        FatigueCheck::Off => FatigueParams::default(),
    };
    let sp = synthesize_spectrum(&input.turbine_params(params))?;
    println!("{RULE}");
    println!("  LIFETIME LOAD SPECTRUM ({} points)", sp.len());
    println!("{RULE}");
    println!("  Lifetime cycles: {:.3e}", sp.lifetime_cycles);
    println!("  Mean thrust:     {:.0} N", sp.fx_mean_n);
    println!("  Mean torque:     {:.0} N·m", sp.mx_mean_nm);
    println!();
    println!("  {:>12} {:>12} {:>12} {:>12} {:>12}", "N", "Fx [N]", "Mx [N·m]", "My [N·m]", "Mz [N·m]");
    let stride = (sp.len() / 20).max(1);
    for k in (0..sp.len()).step_by(stride) {
        println!(
            "  {:>12.3e} {:>12.0} {:>12.0} {:>12.0} {:>12.0}",
            sp.cycles[k], sp.fx_n[k], sp.mx_nm[k], sp.my_nm[k], sp.mz_nm[k]
        );
    }
    Ok(())
}

fn print_study(study: &Study) {
    println!("{RULE}");
    println!("  STUDY {} ({} points)", study.meta.study_id, study.point_count());
    println!("{RULE}");
    for id in study.sorted_ids() {
        let Some(point) = study.get_point(&id) else {
            continue;
        };
        match (&point.result, &point.error) {
            (Some(r), _) => println!(
                "  {:<40} {:>9.0} kg {:>7.3} m  {}",
                point.input.label,
                r.mass.mass_kg,
                r.mass.length_m,
                if r.is_fully_converged() { "[OK]" } else { "[WARN]" }
            ),
            (None, Some(err)) => println!("  {:<40} [ERROR] {err}", point.input.label),
            (None, None) => println!("  {:<40} not evaluated", point.input.label),
        }
    }
}
