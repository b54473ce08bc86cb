//! # Known Load Distributions
//!
//! Fatigue check against measured (or externally simulated) rotor load
//! ranges. Each of the six rotor channels carries its own range
//! distribution and cycle counts; each contributes an independent damage
//! term against a section capacity scaled from the S-N intercept `a`:
//!
//! | Channel | Capacity |
//! |---|---|
//! | Fx | `a·A` |
//! | Fy, Fz | `a·π(D⁴-d⁴) / (64·D·L_rb)` |
//! | Mx | `a·π(D⁴-d⁴) / (32·√3·D)` |
//! | My, Mz | `a·π(D⁴-d⁴) / (64·D)` |
//!
//! Cycles to failure per range are `(ult / (range/2))^m` with `m = -1/b`.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::damage::Station;
use super::sn_curve::SnCurve;
use super::spectrum::FatigueParams;
use super::DamageResult;
use crate::bearings::rating::{channel_sum_dynamic_rating, LoadChannel, RadialChannels};
use crate::bearings::BearingType;
use crate::errors::{require_positive, CalcError, CalcResult};
use crate::geometry::annulus_area;
use crate::integrate::simpson;
use crate::outcome::Outcome;

/// Count threshold above which the thrust channel is taken to span the
/// whole rotor life.
const LIFE_COUNT_THRESHOLD: f64 = 1.0e6;

/// Load ranges with the number of cycles at each.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadDistribution {
    pub ranges: Vec<f64>,
    pub counts: Vec<f64>,
}

impl LoadDistribution {
    pub fn new(ranges: Vec<f64>, counts: Vec<f64>) -> Self {
        LoadDistribution { ranges, counts }
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    fn validate(&self, channel: &str) -> CalcResult<()> {
        if self.is_empty() && self.counts.is_empty() {
            return Ok(());
        }
        if self.ranges.len() != self.counts.len() || self.ranges.len() < 2 {
            return Err(CalcError::invalid_input(
                format!("known_loads.{channel}"),
                format!("{} ranges, {} counts", self.ranges.len(), self.counts.len()),
                "Ranges and counts must be parallel with at least two points",
            ));
        }
        if self.ranges.iter().chain(&self.counts).any(|v| !v.is_finite()) {
            return Err(CalcError::invalid_input(
                format!("known_loads.{channel}"),
                "non-finite",
                "Ranges and counts must be finite",
            ));
        }
        if let Some(w) = self.counts.windows(2).find(|w| w[1] <= w[0]) {
            return Err(CalcError::invalid_input(
                format!("known_loads.{channel}.counts"),
                format!("{} then {}", w[0], w[1]),
                "Cycle counts must be strictly increasing",
            ));
        }
        Ok(())
    }

    /// Miner sum against capacity `ultimate`; zero when the channel is
    /// empty, the capacity vanishes or any count is zero.
    fn damage(&self, ultimate: f64, exponent: f64) -> f64 {
        if self.is_empty() || ultimate == 0.0 || self.counts.iter().any(|n| *n == 0.0) {
            return 0.0;
        }
        let density: Vec<f64> = self
            .ranges
            .iter()
            .zip(&self.counts)
            .map(|(range, n)| (n / (ultimate / (0.5 * range)).powf(exponent)).abs())
            .collect();
        simpson(&density, &self.counts)
    }

    fn scaled(&self, factor: f64) -> Vec<f64> {
        self.ranges.iter().map(|r| r * factor).collect()
    }

    fn per_revolution(&self, blades: f64) -> Vec<f64> {
        self.counts.iter().map(|n| n / blades).collect()
    }

    fn max_count(&self) -> f64 {
        self.counts.iter().copied().fold(0.0, f64::max)
    }
}

/// Range distributions for all six rotor load channels.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KnownLoadSpectra {
    pub fx: LoadDistribution,
    pub fy: LoadDistribution,
    pub fz: LoadDistribution,
    pub mx: LoadDistribution,
    pub my: LoadDistribution,
    pub mz: LoadDistribution,
}

impl KnownLoadSpectra {
    pub fn validate(&self) -> CalcResult<()> {
        for (name, ch) in self.channels() {
            ch.validate(name)?;
        }
        if self.channels().iter().all(|(_, ch)| ch.is_empty()) {
            return Err(CalcError::missing_field("known_loads"));
        }
        Ok(())
    }

    fn channels(&self) -> [(&'static str, &LoadDistribution); 6] {
        [
            ("fx", &self.fx),
            ("fy", &self.fy),
            ("fz", &self.fz),
            ("mx", &self.mx),
            ("my", &self.my),
            ("mz", &self.mz),
        ]
    }

    /// Required bearing life in revolutions.
    ///
    /// The climate parameters decide when they are complete. Otherwise the
    /// thrust counts are used if they exceed a million, else the pitching
    /// moment counts.
    pub fn life_revolutions(&self, fatigue: &FatigueParams, rated_rpm: f64) -> f64 {
        let from_climate = fatigue.lifetime_revolutions(rated_rpm);
        if from_climate > 0.0 {
            return from_climate;
        }
        let blades = f64::from(fatigue.blade_count.max(1));
        let fx_max = self.fx.max_count();
        if fx_max > LIFE_COUNT_THRESHOLD {
            fx_max / blades
        } else {
            self.my.max_count() / blades
        }
    }

    /// Minimum dynamic rating (kN) at the upwind main bearing over span
    /// `span_m`. The upwind bearing takes no thrust.
    pub fn upwind_rating(
        &self,
        bearing_type: BearingType,
        span_m: f64,
        hub_to_bearing_m: f64,
        blade_count: u32,
        life_revolutions: f64,
    ) -> CalcResult<f64> {
        require_positive("main_span_m", span_m)?;
        let lever = (span_m + hub_to_bearing_m) / span_m;
        let fy_fy = self.fy.scaled(-lever);
        let fz_fz = self.fz.scaled(lever);
        let fz_my = self.my.scaled(1.0 / span_m);
        let fy_mz = self.mz.scaled(1.0 / span_m);
        self.rate(bearing_type, None, [fy_fy, fz_fz, fz_my, fy_mz], blade_count, life_revolutions)
    }

    /// Minimum dynamic rating (kN) at the downwind main bearing, which
    /// also carries the full thrust.
    pub fn downwind_rating(
        &self,
        bearing_type: BearingType,
        span_m: f64,
        hub_to_bearing_m: f64,
        blade_count: u32,
        life_revolutions: f64,
    ) -> CalcResult<f64> {
        require_positive("main_span_m", span_m)?;
        let lever = hub_to_bearing_m / span_m;
        let fy_fy = self.fy.scaled(lever);
        let fz_fz = self.fz.scaled(lever);
        let fz_my = self.my.scaled(1.0 / span_m);
        let fy_mz = self.mz.scaled(1.0 / span_m);
        self.rate(
            bearing_type,
            Some(&self.fx),
            [fy_fy, fz_fz, fz_my, fy_mz],
            blade_count,
            life_revolutions,
        )
    }

    fn rate(
        &self,
        bearing_type: BearingType,
        axial: Option<&LoadDistribution>,
        [fy_fy, fz_fz, fz_my, fy_mz]: [Vec<f64>; 4],
        blade_count: u32,
        life_revolutions: f64,
    ) -> CalcResult<f64> {
        let blades = f64::from(blade_count.max(1));
        let axial_counts = axial.map(|a| a.per_revolution(blades));
        let (n_fy, n_fz) = (self.fy.per_revolution(blades), self.fz.per_revolution(blades));
        let (n_my, n_mz) = (self.my.per_revolution(blades), self.mz.per_revolution(blades));

        let axial_channel = axial.zip(axial_counts.as_deref()).map(|(a, counts)| LoadChannel {
            loads: &a.ranges,
            counts,
        });
        let radial = RadialChannels {
            fy_from_fy: LoadChannel {
                loads: &fy_fy,
                counts: &n_fy,
            },
            fz_from_fz: LoadChannel {
                loads: &fz_fz,
                counts: &n_fz,
            },
            fz_from_my: LoadChannel {
                loads: &fz_my,
                counts: &n_my,
            },
            fy_from_mz: LoadChannel {
                loads: &fy_mz,
                counts: &n_mz,
            },
        };
        channel_sum_dynamic_rating(bearing_type, axial_channel, radial, life_revolutions)
    }
}

/// Fixed inputs to the known-load damage loop.
#[derive(Debug, Clone, Copy)]
pub struct KnownLoadContext<'a> {
    pub spectra: &'a KnownLoadSpectra,
    pub curve: SnCurve,
    pub hub_to_bearing_m: f64,
}

/// Damage at `station` for outer diameter `outer_m`.
///
/// The downwind station of a 4-point shaft only sees thrust and torque.
pub fn known_load_damage(outer_m: f64, ctx: &KnownLoadContext<'_>, station: Station) -> DamageResult {
    let d = outer_m;
    let d_in = match station {
        Station::Upwind { shaft_ratio } => shaft_ratio * d,
        Station::Downwind { inner_m } => inner_m,
    };
    let a = ctx.curve.a;
    let m = ctx.curve.wohler_exponent();
    let section = PI * (d.powi(4) - d_in.powi(4));
    let s = ctx.spectra;

    let fx_ult = a * annulus_area(d, d_in);
    let mx_ult = a * section / (32.0 * 3f64.sqrt() * d);
    let mut damage = s.fx.damage(fx_ult, m) + s.mx.damage(mx_ult, m);

    if let Station::Upwind { .. } = station {
        let fyz_ult = a * section / (64.0 * d) / ctx.hub_to_bearing_m;
        let myz_ult = a * section / (64.0 * d);
        damage += s.fy.damage(fyz_ult, m) + s.fz.damage(fyz_ult, m);
        damage += s.my.damage(myz_ult, m) + s.mz.damage(myz_ult, m);
    }

    DamageResult {
        damage,
        diameter_m: d,
        converged: (0.0..=1.0).contains(&damage),
    }
}

/// Grow the diameter from `start_m` until the known-load damage is at most
/// one or the diameter reaches `cap_m`.
pub fn size_for_known_loads(
    start_m: f64,
    cap_m: f64,
    step_m: f64,
    ctx: &KnownLoadContext<'_>,
    station: Station,
) -> CalcResult<Outcome<DamageResult>> {
    require_positive("fatigue.start_diameter_m", start_m)?;
    require_positive("fatigue.diameter_step_m", step_m)?;
    require_positive("hub_to_bearing_m", ctx.hub_to_bearing_m)?;
    ctx.spectra.validate()?;

    let mut d = start_m;
    let result = loop {
        let r = known_load_damage(d, ctx, station);
        if r.converged || d >= cap_m {
            break r;
        }
        d += step_m;
    };

    debug!(diameter = result.diameter_m, damage = result.damage, "known-load diameter loop finished");
    if result.converged {
        Ok(Outcome::Converged(result))
    } else {
        warn!(diameter = result.diameter_m, damage = result.damage, "known-load diameter cap reached");
        Ok(Outcome::capped(
            result,
            format!("diameter cap {:.3} m reached with damage {:.3}", cap_m, result.damage),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrate::logspace;
    use approx::assert_relative_eq;

    fn channel(peak: f64) -> LoadDistribution {
        let counts = logspace(3.0, 8.0, 21);
        let ranges = counts.iter().map(|n| peak * (1.0 - n.log10() / 9.0)).collect();
        LoadDistribution::new(ranges, counts)
    }

    fn spectra() -> KnownLoadSpectra {
        KnownLoadSpectra {
            fx: channel(8.0e5),
            fy: channel(2.0e5),
            fz: channel(3.0e5),
            mx: channel(6.0e6),
            my: channel(1.0e7),
            mz: channel(8.0e6),
        }
    }

    fn ctx(s: &KnownLoadSpectra) -> KnownLoadContext<'_> {
        KnownLoadContext {
            spectra: s,
            curve: SnCurve::fit(700.0e6, Some(4.0)).unwrap(),
            hub_to_bearing_m: 1.912,
        }
    }

    #[test]
    fn test_single_channel_damage_matches_closed_form() {
        // Constant range R, counts 1..3: ∫ n / (ult / (R/2))^m dn = 4 (R/2/ult)^m
        let only_fx = KnownLoadSpectra {
            fx: LoadDistribution::new(vec![2.0e6; 3], vec![1.0, 2.0, 3.0]),
            ..Default::default()
        };
        let c = ctx(&only_fx);
        let d = 0.5;
        let ult = c.curve.a * annulus_area(d, 0.0);
        let r = known_load_damage(d, &c, Station::Upwind { shaft_ratio: 0.0 });
        assert_relative_eq!(r.damage, 4.0 * (1.0e6 / ult).powi(4), max_relative = 1e-9);
    }

    #[test]
    fn test_zero_count_skips_channel() {
        let mut s = spectra();
        let full = known_load_damage(0.4, &ctx(&s), Station::Upwind { shaft_ratio: 0.1 }).damage;
        s.my.counts[0] = 0.0;
        let partial = known_load_damage(0.4, &ctx(&s), Station::Upwind { shaft_ratio: 0.1 }).damage;
        assert!(partial < full);
    }

    #[test]
    fn test_downwind_station_ignores_bending_channels() {
        let s = spectra();
        let c = ctx(&s);
        let up = known_load_damage(0.4, &c, Station::Upwind { shaft_ratio: 0.1 });
        let down = known_load_damage(0.4, &c, Station::Downwind { inner_m: 0.04 });
        assert!(down.damage < up.damage);
        let no_bending = KnownLoadSpectra {
            fx: s.fx.clone(),
            mx: s.mx.clone(),
            ..Default::default()
        };
        let down_only = known_load_damage(0.4, &ctx(&no_bending), Station::Downwind { inner_m: 0.04 });
        assert_relative_eq!(down.damage, down_only.damage, max_relative = 1e-12);
    }

    #[test]
    fn test_size_loop_stops_at_unit_damage() {
        let s = spectra();
        let c = ctx(&s);
        let out = size_for_known_loads(0.1, 5.0, 0.001, &c, Station::Upwind { shaft_ratio: 0.1 }).unwrap();
        assert!(out.is_converged());
        let r = out.value();
        assert!(r.damage <= 1.0);
        assert!(known_load_damage(r.diameter_m - 0.001, &c, Station::Upwind { shaft_ratio: 0.1 }).damage > 1.0);
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            KnownLoadSpectra::default().validate().unwrap_err().error_code(),
            "MISSING_FIELD"
        );
        let mut s = spectra();
        s.fy.counts.pop();
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_counts_must_increase() {
        let mut s = spectra();
        s.fx.ranges.reverse();
        s.fx.counts.reverse();
        let err = s.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        let c = ctx(&s);
        assert!(size_for_known_loads(0.1, 5.0, 0.001, &c, Station::Upwind { shaft_ratio: 0.1 }).is_err());

        let mut repeated = spectra();
        repeated.mz.counts[4] = repeated.mz.counts[3];
        assert!(repeated.validate().is_err());
    }

    #[test]
    fn test_negative_damage_is_not_converged() {
        // Descending counts integrate to a negative sum
        let only_fx = KnownLoadSpectra {
            fx: LoadDistribution::new(vec![2.0e6; 3], vec![3.0, 2.0, 1.0]),
            ..Default::default()
        };
        let r = known_load_damage(0.5, &ctx(&only_fx), Station::Upwind { shaft_ratio: 0.0 });
        assert!(r.damage < 0.0);
        assert!(!r.converged);
    }

    #[test]
    fn test_life_falls_back_to_counts() {
        let s = spectra();
        let climate = FatigueParams::default();
        assert_relative_eq!(s.life_revolutions(&climate, 12.1), climate.lifetime_revolutions(12.1));
        let no_climate = FatigueParams {
            availability: 0.0,
            ..Default::default()
        };
        assert_relative_eq!(s.life_revolutions(&no_climate, 12.1), 1.0e8 / 3.0, max_relative = 1e-12);
    }

    #[test]
    fn test_bearing_ratings() {
        let s = spectra();
        let up = s.upwind_rating(BearingType::Srb, 2.0, 1.912, 3, 1.0e8).unwrap();
        let down = s.downwind_rating(BearingType::Srb, 2.0, 1.912, 3, 1.0e8).unwrap();
        assert!(up > 0.0 && down > 0.0);
        // Upwind has no thrust, so a toroidal bearing is fine there
        assert!(s.upwind_rating(BearingType::Carb, 2.0, 1.912, 3, 1.0e8).is_ok());
        assert!(s.downwind_rating(BearingType::Carb, 2.0, 1.912, 3, 1.0e8).is_err());
    }
}
