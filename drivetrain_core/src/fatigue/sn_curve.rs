//! # S-N Curve
//!
//! Log-log stress-life line `N = (S / a)^(1/b)` for the shaft steel.
//!
//! Without an explicit exponent the line passes through
//!
//! - `(10³ cycles, S_m = 0.9·S_ut)`, the bending strength at low cycles
//! - `(5×10⁸ cycles, S_e)`, the modified endurance strength
//!
//! with `S_e = C_size·C_surf·C_temp·C_reliab·C_envir·0.5·S_ut`. The Marin
//! factors assume a machined shaft over 10 in, normal temperature, 99%
//! reliability and an enclosed environment.

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcResult};

const LOW_CYCLE_COUNT: f64 = 1.0e3;
const ENDURANCE_CYCLE_COUNT: f64 = 5.0e8;

const C_SIZE: f64 = 0.6;
const C_TEMP: f64 = 1.0;
const C_RELIABILITY: f64 = 0.814;
const C_ENVIRONMENT: f64 = 1.0;

/// Fitted S-N line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnCurve {
    /// Intercept: stress at one cycle (Pa)
    pub a: f64,
    /// Slope of log S against log N (negative)
    pub b: f64,
}

impl SnCurve {
    /// Fit the curve for ultimate strength `ultimate_pa`.
    ///
    /// `fatigue_exponent` (Wöhler `m`) overrides the fitted slope with
    /// `b = -1/|m|` when non-zero.
    pub fn fit(ultimate_pa: f64, fatigue_exponent: Option<f64>) -> CalcResult<Self> {
        require_positive("ultimate_strength_pa", ultimate_pa)?;

        let s_m = 0.9 * ultimate_pa;
        let b = match fatigue_exponent.filter(|m| *m != 0.0) {
            Some(m) => {
                require_positive("fatigue_exponent", m.abs())?;
                -1.0 / m.abs()
            }
            None => {
                let z = LOW_CYCLE_COUNT.log10() - ENDURANCE_CYCLE_COUNT.log10();
                (s_m / endurance_strength(ultimate_pa)).log10() / z
            }
        };

        Ok(SnCurve {
            a: s_m / LOW_CYCLE_COUNT.powf(b),
            b,
        })
    }

    /// Cycles to failure at stress amplitude `stress_pa`.
    ///
    /// Zero stress gives infinite life.
    pub fn cycles_to_failure(&self, stress_pa: f64) -> f64 {
        (stress_pa / self.a).powf(1.0 / self.b)
    }

    /// Wöhler exponent `m = -1/b`.
    pub fn wohler_exponent(&self) -> f64 {
        -1.0 / self.b
    }
}

/// Modified endurance strength `S_e` (Pa).
pub fn endurance_strength(ultimate_pa: f64) -> f64 {
    let c_surface = 4.51 * (ultimate_pa / 1.0e6).powf(-0.265);
    C_SIZE * c_surface * C_TEMP * C_RELIABILITY * C_ENVIRONMENT * 0.5 * ultimate_pa
}

/// Goodman-equivalent fully reversed amplitude.
///
/// Tensile mean stress is positive. A compressive (negative) mean lowers
/// the equivalent amplitude.
pub fn goodman(alternating_pa: f64, mean_pa: f64, ultimate_pa: f64) -> f64 {
    alternating_pa / (1.0 - mean_pa / ultimate_pa)
}
