//! # Required Dynamic Rating
//!
//! Converts a spectrum of radial/axial bearing loads into the minimum basic
//! dynamic rating `C_min` a catalog bearing must carry to survive the design
//! life:
//!
//! ```text
//! P     = F_r + Y1·F_a          if max F_a / max F_r <= e
//!       = X2·F_r + Y2·F_a       otherwise
//! P_eq  = ( ∫ P^p dN / (N_last - N_first) )^(1/p)
//! C_min = P_eq · (L / 1e6)^(1/p) / 1000      [kN]
//! ```
//!
//! where `L` is the bearing life in revolutions and the integral is taken
//! with composite Simpson's rule over the cycle counts.

use serde::{Deserialize, Serialize};

use super::BearingType;
use crate::errors::{CalcError, CalcResult};
use crate::integrate::simpson;

/// Equivalent-load factors and life exponent for one bearing family.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LifeFactors {
    /// Axial/radial ratio separating the two load formulas
    pub e: f64,
    /// Axial factor when `Fa/Fr <= e`
    pub y1: f64,
    /// Radial factor when `Fa/Fr > e`
    pub x2: f64,
    /// Axial factor when `Fa/Fr > e`
    pub y2: f64,
    /// Life exponent (10/3 for roller bearings, 3 for ball bearings)
    pub p: f64,
}

impl LifeFactors {
    pub fn for_type(bearing_type: BearingType) -> Self {
        let (e, y1, x2, y2, p) = match bearing_type {
            BearingType::Carb => (1.0, 0.0, 1.0, 0.0, 10.0 / 3.0),
            BearingType::Srb => (0.32, 2.1, 0.67, 3.1, 10.0 / 3.0),
            BearingType::Trb1 => (0.37, 0.0, 0.4, 1.6, 10.0 / 3.0),
            BearingType::Crb => (0.2, 0.0, 0.92, 0.6, 10.0 / 3.0),
            BearingType::Trb2 => (0.4, 2.5, 0.4, 1.75, 10.0 / 3.0),
            BearingType::Rb => (0.4, 1.6, 0.75, 2.15, 3.0),
        };
        LifeFactors { e, y1, x2, y2, p }
    }

    /// `(radial, axial)` multipliers for a given reference axial/radial ratio.
    fn multipliers(&self, axial_ratio: f64) -> (f64, f64) {
        if axial_ratio <= self.e {
            (1.0, self.y1)
        } else {
            (self.x2, self.y2)
        }
    }

    fn rating_from_equivalent(&self, p_eq: f64, life_revolutions: f64) -> f64 {
        p_eq * (life_revolutions / 1.0e6).powf(1.0 / self.p) / 1000.0
    }
}

/// Minimum dynamic rating (kN) for a radial/axial load spectrum.
///
/// `radial_n`, `axial_n` and `counts` are parallel arrays; `counts` must be
/// strictly increasing. `life_revolutions` is the required life.
///
/// # Errors
///
/// - `InvalidInput` when array lengths differ or fewer than two points
/// - `InvalidInput` for a CARB bearing under any axial load
/// - `InvalidInput` for a CRB bearing with axial/radial ratio of 0.5 or more
pub fn required_dynamic_rating(
    bearing_type: BearingType,
    radial_n: &[f64],
    axial_n: &[f64],
    counts: &[f64],
    life_revolutions: f64,
) -> CalcResult<f64> {
    let n = counts.len();
    if n < 2 || radial_n.len() != n || axial_n.len() != n {
        return Err(CalcError::invalid_input(
            "bearing_loads",
            format!("{} radial, {} axial, {} counts", radial_n.len(), axial_n.len(), n),
            "Load and cycle-count arrays must have equal length of at least 2",
        ));
    }

    let fa_max = max_of(axial_n);
    let fr_max = max_of(radial_n);
    check_axial_capacity(bearing_type, fa_max, fr_max, min_of(axial_n), min_of(radial_n))?;

    let factors = bearing_type.life_factors();
    let (kr, ka) = factors.multipliers(fa_max / fr_max);
    let p_pow: Vec<f64> = radial_n
        .iter()
        .zip(axial_n)
        .map(|(fr, fa)| (kr * fr + ka * fa).powf(factors.p))
        .collect();

    let span = counts[n - 1] - counts[0];
    let p_eq = (simpson(&p_pow, counts) / span).powf(1.0 / factors.p);
    Ok(factors.rating_from_equivalent(p_eq, life_revolutions))
}

/// One bearing load component with its own cycle-count distribution.
#[derive(Debug, Clone, Copy)]
pub struct LoadChannel<'a> {
    pub loads: &'a [f64],
    pub counts: &'a [f64],
}

/// Radial components of a bearing reaction, split by the rotor load that
/// causes them.
#[derive(Debug, Clone, Copy)]
pub struct RadialChannels<'a> {
    pub fy_from_fy: LoadChannel<'a>,
    pub fz_from_fz: LoadChannel<'a>,
    pub fz_from_my: LoadChannel<'a>,
    pub fy_from_mz: LoadChannel<'a>,
}

/// Minimum dynamic rating (kN) when each rotor load channel has its own
/// measured range distribution.
///
/// The equivalent load is the sum of per-channel p-norms. The reference
/// radial load combines the channel maxima vectorially:
/// `Fr_ref = sqrt((Fy_Fy + Fy_Mz)² + (Fz_Fz + Fz_My)²)`.
pub fn channel_sum_dynamic_rating(
    bearing_type: BearingType,
    axial: Option<LoadChannel<'_>>,
    radial: RadialChannels<'_>,
    life_revolutions: f64,
) -> CalcResult<f64> {
    let factors = bearing_type.life_factors();

    let fa_ref = axial.map(|a| max_of(a.loads)).unwrap_or(0.0);
    let fr_ref = ((max_of(radial.fy_from_fy.loads) + max_of(radial.fy_from_mz.loads)).powi(2)
        + (max_of(radial.fz_from_fz.loads) + max_of(radial.fz_from_my.loads)).powi(2))
    .sqrt();
    if bearing_type == BearingType::Carb && fa_ref > 0.0 {
        return Err(axial_error(bearing_type, fa_ref, fr_ref));
    }

    let (kr, ka) = factors.multipliers(fa_ref / fr_ref);
    let mut p_eq = axial.map(|a| channel_norm(a, ka, factors.p)).unwrap_or(0.0);
    for ch in [radial.fy_from_fy, radial.fz_from_fz, radial.fz_from_my, radial.fy_from_mz] {
        p_eq += channel_norm(ch, kr, factors.p);
    }

    Ok(factors.rating_from_equivalent(p_eq, life_revolutions))
}

fn channel_norm(ch: LoadChannel<'_>, scale: f64, p: f64) -> f64 {
    let span = max_of(ch.counts) - min_of(ch.counts);
    if ch.loads.len() < 2 || ch.loads.len() != ch.counts.len() || span <= 0.0 {
        return 0.0;
    }
    let y: Vec<f64> = ch.loads.iter().map(|l| (scale * l).abs().powf(p)).collect();
    (simpson(&y, ch.counts) / span).powf(1.0 / p)
}

fn check_axial_capacity(bearing_type: BearingType, fa_max: f64, fr_max: f64, fa_min: f64, fr_min: f64) -> CalcResult<()> {
    match bearing_type {
        BearingType::Carb if fa_max > 0.0 => Err(axial_error(bearing_type, fa_max, fr_max)),
        BearingType::Crb if fa_max / fr_max >= 0.5 || fa_min / fr_min >= 0.5 => {
            Err(axial_error(bearing_type, fa_max, fr_max))
        }
        _ => Ok(()),
    }
}

fn axial_error(bearing_type: BearingType, fa: f64, fr: f64) -> CalcError {
    CalcError::invalid_input(
        format!("{}.axial_load", bearing_type.code()),
        format!("Fa = {:.0} N, Fr = {:.0} N", fa, fr),
        format!("Axial load too large for a {} bearing", bearing_type.display_name()),
    )
}

fn max_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

fn min_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}
