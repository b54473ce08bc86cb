//! Regression estimates for inputs the caller may leave at zero.
//!
//! All fits come from the NREL 5 MW class reference drivetrains and are
//! only meaningful in the 1.5 to 10 MW range.

/// Rotor mass below which a supplied value is treated as absent (kg).
pub const MIN_ROTOR_MASS_KG: f64 = 100.0;

/// Rotor mass from machine rating: `23.566 × rating` (kg).
pub fn estimate_rotor_mass(machine_rating_kw: f64) -> f64 {
    23.566 * machine_rating_kw
}

/// Hub centre to upwind main bearing from rotor diameter (m).
pub fn estimate_hub_to_bearing(rotor_diameter_m: f64) -> f64 {
    0.007835 * rotor_diameter_m + 0.9642
}

/// Shaft flange length from rotor diameter (m).
pub fn estimate_flange_length(rotor_diameter_m: f64) -> f64 {
    let d = rotor_diameter_m / 100.0;
    0.3 * d * d - 0.1 * d + 0.4
}

/// Pitching moment My from rotor overhang weight (N·m).
pub fn estimate_pitch_moment(rotor_mass_kg: f64, hub_to_bearing_m: f64) -> f64 {
    59.7 * rotor_mass_kg * hub_to_bearing_m
}

/// Yawing moment Mz from rotor overhang weight (N·m).
pub fn estimate_yaw_moment(rotor_mass_kg: f64, hub_to_bearing_m: f64) -> f64 {
    53.846 * rotor_mass_kg * hub_to_bearing_m
}

/// Use `value` if it is above `threshold`, otherwise `estimate()`.
pub(crate) fn or_estimate(value: f64, threshold: f64, estimate: impl FnOnce() -> f64) -> f64 {
    if value > threshold {
        value
    } else {
        estimate()
    }
}
