//! # Fatigue Load Spectrum
//!
//! Synthesizes a lifetime rotor load history from turbine class and wind
//! climate, following the DS 472 standardized-range method.
//!
//! ```text
//! N_f      = avail · (B·rpm/60) · T_life · (e^-(V_in/A)^k - e^-(V_out/A)^k)
//! β        = 0.11 · k_b · (I_t + 0.1) · (A + 4.4)
//! N_i      = logspace(log N_f - (2k_b - 0.18)/β, log N_f, 100)
//! F_Δ(N_i) = β·(log N_f - log N_i) + 0.18        (0 once ≥ 2k_b)
//! ```
//!
//! Each channel range is `F_Δ` times a reference load built from the
//! blade-pressure term `p_o` and an empirical log-linear factor in rotor
//! diameter. Steady thrust and torque are carried separately as means.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{require_positive, CalcError, CalcResult};
use crate::integrate::logspace;
use crate::units::SECONDS_PER_YEAR;

/// Points in a synthesized spectrum.
pub const SPECTRUM_POINTS: usize = 100;

/// Rotor pressure factor (all blades together).
const K_B: f64 = 2.5;

const AIR_DENSITY: f64 = 1.225;

/// Standardized ranges at (or within rounding of) `2·k_b` are clipped.
const RANGE_CLIP_TOLERANCE: f64 = 1e-9;

/// IEC 61400-1 turbulence class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IecClass {
    A,
    #[default]
    B,
    C,
}

impl IecClass {
    /// Reference turbulence intensity `I_t`.
    pub fn turbulence_intensity(&self) -> f64 {
        match self {
            IecClass::A => 0.18,
            IecClass::B => 0.14,
            IecClass::C => 0.12,
        }
    }
}

impl std::str::FromStr for IecClass {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(IecClass::A),
            "B" => Ok(IecClass::B),
            "C" => Ok(IecClass::C),
            other => Err(CalcError::invalid_input("iec_class", other, "Expected A, B or C")),
        }
    }
}

/// Site climate and service assumptions for the fatigue path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FatigueParams {
    pub iec_class: IecClass,

    /// Weibull scale A (m/s)
    pub weibull_scale_mps: f64,

    /// Weibull shape k
    pub weibull_shape: f64,

    pub cut_in_mps: f64,

    pub rated_wind_mps: f64,

    pub cut_out_mps: f64,

    pub design_life_years: f64,

    pub blade_count: u32,

    /// Fraction of time the turbine is available, in (0, 1]
    pub availability: f64,

    /// Wöhler exponent override; zero fits the S-N curve from strength
    pub fatigue_exponent: f64,
}

impl Default for FatigueParams {
    fn default() -> Self {
        FatigueParams {
            iec_class: IecClass::B,
            weibull_scale_mps: 9.0,
            weibull_shape: 2.2,
            cut_in_mps: 3.5,
            rated_wind_mps: 11.5,
            cut_out_mps: 25.0,
            design_life_years: 20.0,
            blade_count: 3,
            availability: 0.95,
            fatigue_exponent: 0.0,
        }
    }
}

impl FatigueParams {
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("fatigue.weibull_scale_mps", self.weibull_scale_mps)?;
        require_positive("fatigue.weibull_shape", self.weibull_shape)?;
        require_positive("fatigue.rated_wind_mps", self.rated_wind_mps)?;
        require_positive("fatigue.design_life_years", self.design_life_years)?;
        if self.blade_count == 0 {
            return Err(CalcError::invalid_input("fatigue.blade_count", "0", "Rotor needs at least one blade"));
        }
        if !(self.availability > 0.0 && self.availability <= 1.0) {
            return Err(CalcError::invalid_input(
                "fatigue.availability",
                self.availability.to_string(),
                "Availability must lie in (0, 1]",
            ));
        }
        if !(self.cut_in_mps >= 0.0 && self.cut_in_mps < self.cut_out_mps) {
            return Err(CalcError::invalid_input(
                "fatigue.cut_in_mps",
                format!("{} (cut-out {})", self.cut_in_mps, self.cut_out_mps),
                "Cut-in speed must be non-negative and below cut-out",
            ));
        }
        Ok(())
    }

    /// Weibull probability of a wind speed between cut-in and cut-out.
    pub fn operating_probability(&self) -> f64 {
        let exceed = |v: f64| (-(v / self.weibull_scale_mps).powf(self.weibull_shape)).exp();
        exceed(self.cut_in_mps) - exceed(self.cut_out_mps)
    }

    fn design_life_seconds(&self) -> f64 {
        self.design_life_years * SECONDS_PER_YEAR
    }

    /// Rotor revolutions over the design life; zero when any of the climate
    /// parameters is missing.
    pub fn lifetime_revolutions(&self, rated_rpm: f64) -> f64 {
        if self.availability == 0.0
            || rated_rpm == 0.0
            || self.design_life_years == 0.0
            || self.cut_out_mps == 0.0
            || self.weibull_scale_mps == 0.0
        {
            return 0.0;
        }
        self.availability * rated_rpm / 60.0 * self.design_life_seconds() * self.operating_probability()
    }
}

/// Turbine operating point plus climate: everything the synthesizer needs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TurbineParams {
    pub rotor_diameter_m: f64,
    pub rated_rpm: f64,
    pub machine_rating_kw: f64,
    pub drivetrain_efficiency: f64,
    pub fatigue: FatigueParams,
}

impl TurbineParams {
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("rotor_diameter_m", self.rotor_diameter_m)?;
        require_positive("rated_rpm", self.rated_rpm)?;
        require_positive("machine_rating_kw", self.machine_rating_kw)?;
        require_positive("drivetrain_efficiency", self.drivetrain_efficiency)?;
        self.fatigue.validate()
    }

    /// Rated shaft torque (N·m).
    pub fn rated_torque_nm(&self) -> f64 {
        self.machine_rating_kw * 1000.0 / self.drivetrain_efficiency / (self.rated_rpm * PI / 30.0)
    }
}

/// Lifetime load-range history.
///
/// All range vectors are parallel to `cycles`, which is strictly
/// increasing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FatigueSpectrum {
    /// Cumulative cycle counts N_i
    pub cycles: Vec<f64>,

    /// Thrust ranges (N)
    pub fx_n: Vec<f64>,

    /// Torque ranges (N·m)
    pub mx_nm: Vec<f64>,

    /// Pitching moment ranges (N·m)
    pub my_nm: Vec<f64>,

    /// Yawing moment ranges (N·m)
    pub mz_nm: Vec<f64>,

    /// Steady thrust (N)
    pub fx_mean_n: f64,

    /// Steady torque (N·m)
    pub mx_mean_nm: f64,

    /// Blade-passing cycles over the design life, N_f
    pub lifetime_cycles: f64,

    pub blade_count: u32,
}

impl FatigueSpectrum {
    /// Rotor revolutions over the design life (`N_f / B`).
    pub fn rotor_revolutions(&self) -> f64 {
        self.lifetime_cycles / f64::from(self.blade_count)
    }

    /// Cycle counts seen by a bearing (`N_i / B`).
    pub fn bearing_counts(&self) -> Vec<f64> {
        let b = f64::from(self.blade_count);
        self.cycles.iter().map(|n| n / b).collect()
    }

    pub fn len(&self) -> usize {
        self.cycles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cycles.is_empty()
    }
}

/// Empirical range factors for `(Fx, Mx, My, Mz)` at a rotor diameter.
fn channel_factors(rotor_diameter_m: f64) -> (f64, f64, f64, f64) {
    let ln_d = rotor_diameter_m.ln();
    (
        0.3649 * ln_d - 1.074,
        0.0799 * ln_d - 0.2577,
        0.172 * ln_d - 0.5943,
        0.1659 * ln_d - 0.5795,
    )
}

/// Build the lifetime spectrum for `params`.
pub fn synthesize_spectrum(params: &TurbineParams) -> CalcResult<FatigueSpectrum> {
    params.validate()?;
    let fat = &params.fatigue;

    let radius = params.rotor_diameter_m / 2.0;
    let rpm = params.rated_rpm;
    let blades = f64::from(fat.blade_count);
    let tsr = rpm / 30.0 * PI * radius / fat.rated_wind_mps;
    let p_o = 4.0 / 3.0
        * AIR_DENSITY
        * ((4.0 * PI * rpm / 60.0 * radius / 3.0).powi(2) + fat.rated_wind_mps.powi(2))
        * (PI * radius / (blades * tsr * (tsr * tsr + 1.0).sqrt()));

    let blade_passing_hz = blades * rpm / 60.0;
    let n_f = fat.availability * blade_passing_hz * fat.design_life_seconds() * fat.operating_probability();
    if n_f.is_nan() || n_f <= 1.0 {
        return Err(CalcError::invalid_input(
            "fatigue",
            format!("N_f = {n_f:.3e}"),
            "Climate and availability give no operating cycles",
        ));
    }

    let beta = 0.11 * K_B * (fat.iec_class.turbulence_intensity() + 0.1) * (fat.weibull_scale_mps + 4.4);
    let log_nf = n_f.log10();
    let cycles = logspace(log_nf - (2.0 * K_B - 0.18) / beta, log_nf, SPECTRUM_POINTS);
    let standard_range: Vec<f64> = cycles
        .iter()
        .map(|n| {
            let f = beta * (log_nf - n.log10()) + 0.18;
            if f >= 2.0 * K_B - RANGE_CLIP_TOLERANCE {
                0.0
            } else {
                f
            }
        })
        .collect();

    let (fx_f, mx_f, my_f, mz_f) = channel_factors(params.rotor_diameter_m);
    let scale = |k: f64| -> Vec<f64> { standard_range.iter().map(|f| f * k).collect() };

    let spectrum = FatigueSpectrum {
        fx_n: scale(0.5 * p_o * radius * fx_f),
        mx_nm: scale(0.45 * p_o * radius.powi(2) * mx_f),
        my_nm: scale(0.33 * p_o * 0.8 * radius.powi(2) * my_f),
        mz_nm: scale(0.33 * p_o * 0.8 * radius.powi(2) * mz_f),
        cycles,
        fx_mean_n: 0.5 * p_o * radius * blades * fx_f,
        mx_mean_nm: 0.5 * params.rated_torque_nm() * mx_f,
        lifetime_cycles: n_f,
        blade_count: fat.blade_count,
    };

    debug!(n_f, p_o, beta, "synthesized fatigue spectrum");
    Ok(spectrum)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use approx::assert_relative_eq;

    pub(crate) fn reference_turbine() -> TurbineParams {
        TurbineParams {
            rotor_diameter_m: 126.0,
            rated_rpm: 12.1,
            machine_rating_kw: 5000.0,
            drivetrain_efficiency: 0.95,
            fatigue: FatigueParams::default(),
        }
    }

    #[test]
    fn test_reference_spectrum_scalars() {
        let sp = synthesize_spectrum(&reference_turbine()).unwrap();
        assert_eq!(sp.len(), SPECTRUM_POINTS);
        assert_relative_eq!(sp.lifetime_cycles, 319_817_544.0775, max_relative = 1e-9);
        assert_relative_eq!(sp.rotor_revolutions(), 319_817_544.0775 / 3.0, max_relative = 1e-9);
        assert_relative_eq!(sp.cycles[0], 1134.69638105, max_relative = 1e-8);
        assert_relative_eq!(*sp.cycles.last().unwrap(), sp.lifetime_cycles, max_relative = 1e-12);
        assert_relative_eq!(sp.fx_mean_n, 428_326.9367, max_relative = 1e-8);
        assert_relative_eq!(sp.mx_mean_nm, 267_328.2264, max_relative = 1e-8);
    }

    #[test]
    fn test_reference_spectrum_ranges() {
        let sp = synthesize_spectrum(&reference_turbine()).unwrap();
        // First point sits on the 2·k_b clip and carries no range
        assert_eq!(sp.fx_n[0], 0.0);
        assert_eq!(sp.my_nm[0], 0.0);
        assert_relative_eq!(sp.fx_n[1], 706_926.9287, max_relative = 1e-8);
        assert_relative_eq!(sp.mx_nm[1], 7_469_185.849, max_relative = 1e-8);
        assert_relative_eq!(sp.my_nm[1], 8_086_487.531, max_relative = 1e-8);
        assert_relative_eq!(sp.mz_nm[1], 7_586_016.900, max_relative = 1e-8);
        assert_relative_eq!(sp.fx_n[99], 25_699.6162, max_relative = 1e-8);
    }

    #[test]
    fn test_cycles_strictly_increasing_and_ranges_decreasing() {
        let sp = synthesize_spectrum(&reference_turbine()).unwrap();
        assert!(sp.cycles.windows(2).all(|w| w[1] > w[0]));
        assert!(sp.my_nm[1..].windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn test_turbulence_class_widens_spectrum() {
        let mut params = reference_turbine();
        params.fatigue.iec_class = IecClass::A;
        let a = synthesize_spectrum(&params).unwrap();
        assert_relative_eq!(a.cycles[0], 6814.819052624893, max_relative = 1e-8);
    }

    #[test]
    fn test_longer_life_more_cycles() {
        let mut params = reference_turbine();
        params.fatigue.design_life_years = 25.0;
        let sp = synthesize_spectrum(&params).unwrap();
        assert_relative_eq!(sp.lifetime_cycles, 399_771_930.0969, max_relative = 1e-9);
    }

    #[test]
    fn test_rejects_bad_climate() {
        let mut params = reference_turbine();
        params.fatigue.cut_in_mps = 30.0;
        assert!(synthesize_spectrum(&params).is_err());
        let mut params = reference_turbine();
        params.fatigue.blade_count = 0;
        assert!(synthesize_spectrum(&params).is_err());
        assert!("D".parse::<IecClass>().is_err());
        assert_eq!(" a ".parse::<IecClass>().unwrap(), IecClass::A);
    }
}
