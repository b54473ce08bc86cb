//! # Mass Properties
//!
//! Final shaft mass, length, centre of mass and inertia once the bearing
//! seats are fixed.
//!
//! The shaft between the seats is a frustum on the selected bearing bores
//! with a constant bore removed. Each seat contributes a cylinder one
//! facewidth long. A topology factor accounts for the flange.
//!
//! Positions are in the nacelle frame with the origin at the tower top.
//! The shaft axis runs upwind from the gearbox flange (`downwind end`) at
//! the tilt angle, so a point a distance `s` along the shaft sits at
//! `downwind + s·(-cos γ, 0, sin γ)`.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::bearings::BearingSpec;
use crate::errors::{require_finite, require_positive, CalcResult};
use crate::solver::{StaticSizing, Topology};
use crate::units::Radians;

/// Centre of mass of the bare shaft along its length, from solid models.
const CM_FRACTION_OF_LENGTH: f64 = 0.65;

/// Gearbox placement and the parts hung on the downwind shaft end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NacelleLayout {
    /// Gearbox centre of mass (m)
    pub gearbox_cm_m: [f64; 3],

    pub gearbox_length_m: f64,

    /// Hub flange length added to the shaft (m)
    pub flange_length_m: f64,

    pub shrink_disc_mass_kg: f64,
}

impl NacelleLayout {
    /// Downwind end of the shaft: gearbox centre minus half its length.
    pub fn downwind_end(&self) -> [f64; 3] {
        let [x, y, z] = self.gearbox_cm_m;
        [x - self.gearbox_length_m / 2.0, y, z]
    }

    pub fn validate(&self) -> CalcResult<()> {
        for (i, c) in self.gearbox_cm_m.iter().enumerate() {
            require_finite(&format!("gearbox_cm_m[{i}]"), *c)?;
        }
        require_positive("gearbox_length_m", self.gearbox_length_m)?;
        require_finite("flange_length_m", self.flange_length_m)?;
        require_finite("shrink_disc_mass_kg", self.shrink_disc_mass_kg)?;
        Ok(())
    }
}

/// Mass, centre of mass and principal inertia of the finished shaft,
/// shrink disc included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MassProperties {
    pub mass_kg: f64,

    /// Overall length including bearing seats and flange (m)
    pub length_m: f64,

    pub cm_m: [f64; 3],

    /// `[I_xx, I_yy, I_zz]` about the centre of mass (kg·m²)
    pub inertia_kgm2: [f64; 3],

    /// Upwind main bearing centre (m)
    pub upwind_bearing_m: [f64; 3],

    /// Downwind main bearing centre (m); 4-point only
    pub downwind_bearing_m: Option<[f64; 3]>,
}

/// Compute the final mass properties.
///
/// `second_seat` is the downwind main bearing for 4-point, and for 3-point
/// the gearbox-side seat sized from the downwind end diameter. It carries
/// no placement in the 3-point case.
pub fn finalize(
    topology: Topology,
    sizing: &StaticSizing,
    upwind: &BearingSpec,
    second_seat: &BearingSpec,
    layout: &NacelleLayout,
    tilt: Radians,
    density_kg_m3: f64,
) -> CalcResult<MassProperties> {
    layout.validate()?;
    require_positive("density_kg_m3", density_kg_m3)?;

    let g = &sizing.geometry;
    let (da, fw1) = (upwind.bore_m, upwind.facewidth_m);
    let (db, fw2) = (second_seat.bore_m, second_seat.facewidth_m);
    let d_in = g.inner_m;
    let span = g.main_span_m;
    let seats = (fw1 + fw2) / 2.0;

    let shaft_mass = topology.mass_factor()
        * (PI / 3.0 * (da * da + db * db + da * db) * (span - seats) * density_kg_m3 / 4.0
            + PI / 4.0 * (da * da - d_in * d_in) * density_kg_m3 * fw1
            + PI / 4.0 * (db * db - d_in * d_in) * density_kg_m3 * fw2
            - PI / 4.0 * d_in * d_in * density_kg_m3 * (span + seats));
    let length = sizing.stepped_span_m + seats + layout.flange_length_m;

    let downwind = layout.downwind_end();
    let along = |s: f64| -> [f64; 3] {
        [
            downwind[0] - s * tilt.0.cos(),
            downwind[1],
            downwind[2] + s * tilt.0.sin(),
        ]
    };

    let (upwind_bearing_m, downwind_bearing_m) = match topology {
        Topology::ThreePoint => (along(span), None),
        Topology::FourPoint => (along(sizing.stepped_span_m + fw2 / 2.0), Some(along(fw2 / 2.0))),
    };

    let bare_cm = along(CM_FRACTION_OF_LENGTH * length);
    let m_sd = layout.shrink_disc_mass_kg;
    let mass = shaft_mass + m_sd;
    let cm_m = [
        (bare_cm[0] * shaft_mass + downwind[0] * m_sd) / mass,
        bare_cm[1],
        (bare_cm[2] * shaft_mass + downwind[2] * m_sd) / mass,
    ];

    let d_out = match topology {
        Topology::ThreePoint => da,
        Topology::FourPoint => g.outer_upwind_m,
    };
    let i_axial = mass * (d_in * d_in + d_out * d_out) / 8.0;
    let i_transverse = mass * (d_in * d_in + d_out * d_out + 4.0 / 3.0 * length * length) / 16.0;

    Ok(MassProperties {
        mass_kg: mass,
        length_m: length,
        cm_m,
        inertia_kgm2: [i_axial, i_transverse, i_transverse],
        upwind_bearing_m,
        downwind_bearing_m,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bearings::{resize_for_bearings, BearingType};
    use crate::geometry::ShaftGeometry;
    use crate::units::Degrees;
    use approx::assert_relative_eq;

    fn layout() -> NacelleLayout {
        NacelleLayout {
            gearbox_cm_m: [1.8, 0.0, 0.756],
            gearbox_length_m: 1.512,
            flange_length_m: 0.5,
            shrink_disc_mass_kg: 1666.5,
        }
    }

    fn capped_three_point() -> StaticSizing {
        StaticSizing {
            geometry: ShaftGeometry {
                outer_upwind_m: 1.0144153984727244,
                outer_mid_m: None,
                outer_downwind_m: 0.7667871728591714,
                inner_m: 0.1014390039672668,
                hub_to_bearing_m: 1.912,
                main_span_m: 4.1,
                gearbox_span_m: 0.0,
            },
            stepped_span_m: 4.15,
            slope_rad: 0.0019392,
            slope_limit_rad: 0.078,
            iterations: 73,
        }
    }

    #[test]
    fn test_three_point_reference_properties() {
        let s = capped_three_point();
        let up = resize_for_bearings(BearingType::Srb, s.geometry.outer_upwind_m).unwrap().into_value();
        let seat = resize_for_bearings(BearingType::Srb, s.geometry.outer_downwind_m).unwrap().into_value();
        assert_eq!((up.bore_m, seat.bore_m), (1.06, 0.8));

        let p = finalize(Topology::ThreePoint, &s, &up, &seat, &layout(), Degrees(5.0).into(), 7800.0).unwrap();
        assert_relative_eq!(p.mass_kg, 32_354.0896, max_relative = 1e-6);
        assert_relative_eq!(p.length_m, 4.8565, max_relative = 1e-9);
        assert_relative_eq!(p.upwind_bearing_m[0], -3.040398262, max_relative = 1e-6);
        assert_relative_eq!(p.upwind_bearing_m[2], 1.113338545, max_relative = 1e-6);
        assert!(p.downwind_bearing_m.is_none());
        assert_relative_eq!(p.cm_m[0], -1.938734306, max_relative = 1e-6);
        assert_relative_eq!(p.cm_m[2], 1.016955438, max_relative = 1e-6);
        assert_relative_eq!(p.inertia_kgm2[0], 4585.7468, max_relative = 1e-6);
        assert_relative_eq!(p.inertia_kgm2[1], 65_883.737, max_relative = 1e-6);
        assert_eq!(p.inertia_kgm2[1], p.inertia_kgm2[2]);
    }

    #[test]
    fn test_four_point_bearing_placement() {
        let s = StaticSizing {
            geometry: ShaftGeometry {
                outer_upwind_m: 1.0522601522631922,
                outer_mid_m: Some(0.6876551977150231),
                outer_downwind_m: 0.6875936403568096,
                inner_m: 0.1052233847403419,
                hub_to_bearing_m: 1.912,
                main_span_m: 3.05,
                gearbox_span_m: 0.5,
            },
            stepped_span_m: 3.1,
            slope_rad: 7.756e-4,
            slope_limit_rad: 8.7266e-4,
            iterations: 52,
        };
        let up = resize_for_bearings(BearingType::Trb1, 1.0522601522631922).unwrap().into_value();
        let down = resize_for_bearings(BearingType::Trb1, 0.6876551977150231).unwrap().into_value();
        let tilt: Radians = Degrees(5.0).into();
        let p = finalize(Topology::FourPoint, &s, &up, &down, &layout(), tilt, 7800.0).unwrap();

        assert_relative_eq!(p.mass_kg, 25_366.12247 + 1666.5, max_relative = 1e-6);
        assert_relative_eq!(p.length_m, 3.1 + (0.073 + 0.113) / 2.0 + 0.5, max_relative = 1e-9);
        let downwind = layout().downwind_end();
        let bearing2 = p.downwind_bearing_m.unwrap();
        assert_relative_eq!(downwind[0] - bearing2[0], 0.0565 * tilt.0.cos(), max_relative = 1e-9);
        assert_relative_eq!(downwind[0] - p.upwind_bearing_m[0], 3.1565 * tilt.0.cos(), max_relative = 1e-9);
        // Inertia uses the shaft diameter, not the bearing bore
        let expected = p.mass_kg * (0.1052233847403419f64.powi(2) + 1.0522601522631922f64.powi(2)) / 8.0;
        assert_relative_eq!(p.inertia_kgm2[0], expected, max_relative = 1e-12);
    }

    #[test]
    fn test_shrink_disc_pulls_cm_downwind() {
        let s = capped_three_point();
        let up = resize_for_bearings(BearingType::Srb, 1.02).unwrap().into_value();
        let seat = resize_for_bearings(BearingType::Srb, 0.77).unwrap().into_value();
        let tilt: Radians = Degrees(5.0).into();
        let mut light = layout();
        light.shrink_disc_mass_kg = 0.0;
        let with = finalize(Topology::ThreePoint, &s, &up, &seat, &layout(), tilt, 7800.0).unwrap();
        let without = finalize(Topology::ThreePoint, &s, &up, &seat, &light, tilt, 7800.0).unwrap();
        assert!(with.cm_m[0] > without.cm_m[0]);
        assert_relative_eq!(with.mass_kg - without.mass_kg, 1666.5, max_relative = 1e-9);
    }
}
