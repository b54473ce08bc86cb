//! # Shaft Material
//!
//! Property set for the low-speed shaft. The default is a large-diameter
//! quenched-and-tempered 34CrNiMo6 forging, the usual main-shaft steel.
//!
//! Note the deliberate unit mix: `yield_strength_psi` feeds the empirical
//! static diameter rule (see [`crate::geometry::required_outer_diameter`]),
//! while `ultimate_strength_pa` feeds the SI fatigue model.
//!
//! ## Example
//!
//! ```rust
//! use drivetrain_core::materials::ShaftMaterial;
//!
//! let steel = ShaftMaterial::default();
//! assert_eq!(steel.density_kg_m3, 7800.0);
//! assert_eq!(steel.ultimate_strength_pa, 700.0e6);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcError, CalcResult};

/// Elastic, strength and safety data for the shaft steel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShaftMaterial {
    /// Young's modulus (Pa)
    pub youngs_modulus_pa: f64,

    /// Density (kg/m³)
    pub density_kg_m3: f64,

    /// Yield strength used by the static diameter rule (psi)
    pub yield_strength_psi: f64,

    /// Ultimate tensile strength used by the S-N curve (Pa)
    pub ultimate_strength_pa: f64,

    /// Safety factor on the static diameter rule (AGMA peak-load factor)
    pub shaft_safety_factor: f64,

    /// Safety factor dividing the allowable bearing slope
    pub bearing_safety_factor: f64,
}

impl Default for ShaftMaterial {
    fn default() -> Self {
        ShaftMaterial {
            youngs_modulus_pa: 2.1e11,
            density_kg_m3: 7800.0,
            yield_strength_psi: 66_000.0,
            ultimate_strength_pa: 700.0e6,
            shaft_safety_factor: 2.5,
            bearing_safety_factor: 1.0,
        }
    }
}

impl ShaftMaterial {
    /// Validate all properties are positive and finite.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("material.youngs_modulus_pa", self.youngs_modulus_pa)?;
        require_positive("material.density_kg_m3", self.density_kg_m3)?;
        require_positive("material.yield_strength_psi", self.yield_strength_psi)?;
        require_positive("material.ultimate_strength_pa", self.ultimate_strength_pa)?;
        require_positive("material.shaft_safety_factor", self.shaft_safety_factor)?;
        if !self.bearing_safety_factor.is_finite() || self.bearing_safety_factor < 1.0 {
            return Err(CalcError::invalid_input(
                "material.bearing_safety_factor",
                self.bearing_safety_factor.to_string(),
                "Bearing slope safety factor must be at least 1.0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(ShaftMaterial::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let m: ShaftMaterial = toml::from_str("ultimate_strength_pa = 800.0e6").unwrap();
        assert_eq!(m.ultimate_strength_pa, 800.0e6);
        assert_eq!(m.youngs_modulus_pa, 2.1e11);
    }

    #[test]
    fn test_rejects_low_bearing_factor() {
        let m = ShaftMaterial {
            bearing_safety_factor: 0.5,
            ..Default::default()
        };
        assert_eq!(m.validate().unwrap_err().error_code(), "INVALID_INPUT");
    }
}
