//! # Main Bearings
//!
//! Bearing families, their catalog data and the two selection paths:
//!
//! - [`select_bearing`] - smallest bore satisfying both a bore and a
//!   dynamic-rating requirement (fatigue-checked designs)
//! - [`resize_for_bearings`] - smallest bore satisfying the bore alone
//!   (fatigue check disabled)
//!
//! Either path falls back to a conservative oversized placeholder when no
//! catalog row qualifies, reported as [`Outcome::NoMatch`](crate::outcome::Outcome).
//!
//! ## Example
//!
//! ```rust
//! use drivetrain_core::bearings::{select_bearing, BearingType};
//!
//! let pick = select_bearing(BearingType::Srb, 0.6, 5000.0).unwrap();
//! assert!(pick.is_converged());
//! assert_eq!(pick.value().mass_kg, 520.0);
//! ```

mod catalog;
pub mod rating;
mod selection;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;
use crate::units::{ArcMinutes, Degrees, Radians};

pub use rating::{required_dynamic_rating, LifeFactors};
pub use selection::{fallback_for_bore, resize_for_bearings, select_bearing};

use catalog::CatalogRow;

// =============================================================================
// BEARING TYPE
// =============================================================================

/// Main bearing family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BearingType {
    /// Toroidal roller bearing (non-locating, no axial capacity)
    #[serde(rename = "CARB")]
    Carb,
    /// Spherical roller bearing (self-aligning)
    #[serde(rename = "SRB")]
    Srb,
    /// Tapered roller bearing, single row
    #[serde(rename = "TRB1")]
    Trb1,
    /// Cylindrical roller bearing
    #[serde(rename = "CRB")]
    Crb,
    /// Tapered roller bearing, double row
    #[serde(rename = "TRB2")]
    Trb2,
    /// Radial ball bearing
    #[serde(rename = "RB")]
    Rb,
}

impl BearingType {
    pub const ALL: [BearingType; 6] = [
        BearingType::Carb,
        BearingType::Srb,
        BearingType::Trb1,
        BearingType::Crb,
        BearingType::Trb2,
        BearingType::Rb,
    ];

    /// Catalog code ("SRB", "TRB1", ...)
    pub fn code(&self) -> &'static str {
        match self {
            BearingType::Carb => "CARB",
            BearingType::Srb => "SRB",
            BearingType::Trb1 => "TRB1",
            BearingType::Crb => "CRB",
            BearingType::Trb2 => "TRB2",
            BearingType::Rb => "RB",
        }
    }

    /// Get display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            BearingType::Carb => "Toroidal roller (CARB)",
            BearingType::Srb => "Spherical roller",
            BearingType::Trb1 => "Tapered roller, single row",
            BearingType::Crb => "Cylindrical roller",
            BearingType::Trb2 => "Tapered roller, double row",
            BearingType::Rb => "Radial ball",
        }
    }

    /// Allowable angular misalignment at the bearing station.
    pub fn slope_limit(&self) -> Radians {
        match self {
            BearingType::Trb1 | BearingType::Trb2 => ArcMinutes(3.0).into(),
            BearingType::Crb => ArcMinutes(4.0).into(),
            BearingType::Srb => Radians(0.078),
            BearingType::Rb => Radians(0.002),
            BearingType::Carb => Degrees(0.5).into(),
        }
    }

    /// Equivalent-load factors and life exponent for this family.
    pub fn life_factors(&self) -> LifeFactors {
        LifeFactors::for_type(*self)
    }

    pub(crate) fn catalog(&self) -> &'static [CatalogRow] {
        match self {
            BearingType::Carb => catalog::CARB,
            BearingType::Srb => catalog::SRB,
            BearingType::Trb1 => catalog::TRB1,
            BearingType::Crb => catalog::CRB,
            BearingType::Trb2 => catalog::TRB2,
            BearingType::Rb => catalog::RB,
        }
    }
}

impl fmt::Display for BearingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for BearingType {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        BearingType::ALL
            .iter()
            .copied()
            .find(|t| t.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CalcError::unknown_bearing_type(s))
    }
}

// =============================================================================
// BEARING SPEC
// =============================================================================

/// A physical bearing picked from the catalog (or a fallback placeholder).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BearingSpec {
    pub bearing_type: BearingType,

    /// Bore diameter d (m)
    pub bore_m: f64,

    /// Outer diameter D (m)
    pub outer_diameter_m: f64,

    /// Facewidth B (m)
    pub facewidth_m: f64,

    /// Basic dynamic load rating C (kN); zero for fallbacks
    pub dynamic_rating_kn: f64,

    /// Basic static load rating C0 (kN); zero for fallbacks
    pub static_rating_kn: f64,

    pub mass_kg: f64,
}

impl BearingSpec {
    pub(crate) fn from_row(bearing_type: BearingType, row: &CatalogRow) -> Self {
        BearingSpec {
            bearing_type,
            bore_m: row.d,
            outer_diameter_m: row.outer,
            facewidth_m: row.b,
            dynamic_rating_kn: row.c,
            static_rating_kn: row.c0,
            mass_kg: row.mass,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_codes() {
        assert_eq!("SRB".parse::<BearingType>().unwrap(), BearingType::Srb);
        assert_eq!(" trb2 ".parse::<BearingType>().unwrap(), BearingType::Trb2);
        let err = "XRB".parse::<BearingType>().unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_BEARING_TYPE");
    }

    #[test]
    fn test_display_round_trips() {
        for t in BearingType::ALL {
            assert_eq!(t.to_string().parse::<BearingType>().unwrap(), t);
        }
    }

    #[test]
    fn test_serde_uses_catalog_codes() {
        let json = serde_json::to_string(&BearingType::Trb1).unwrap();
        assert_eq!(json, "\"TRB1\"");
    }

    #[test]
    fn test_slope_limits_distinct_per_family() {
        assert_relative_eq!(BearingType::Trb1.slope_limit().0, 8.726646259971648e-4, epsilon = 1e-15);
        assert_eq!(BearingType::Trb1.slope_limit(), BearingType::Trb2.slope_limit());
        assert_relative_eq!(BearingType::Crb.slope_limit().0, 1.1635528346628864e-3, epsilon = 1e-15);
        assert_eq!(BearingType::Srb.slope_limit(), Radians(0.078));
        assert_eq!(BearingType::Rb.slope_limit(), Radians(0.002));
        assert_relative_eq!(BearingType::Carb.slope_limit().0, 8.726646259971648e-3, epsilon = 1e-15);
    }
}
