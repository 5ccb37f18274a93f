//! # Geometry Resolver
//!
//! Turns a room's raw dimensions and opening counts into the measured
//! quantities the aggregator prices: net wall area, ceiling area,
//! baseboard run, and crown run.
//!
//! The resolver is total. Non-finite or negative scalars are scrubbed to
//! zero before use, and the two subtraction results (wall area, baseboard
//! run) clamp to zero, so a half-typed form can never produce a negative
//! quantity or a NaN that poisons downstream totals.

use serde::{Deserialize, Serialize};

use crate::rooms::{CeilingType, Room};
use crate::settings::GeometryConstants;
use crate::units::{LinFt, SqFt};

/// Replace a non-finite or negative scalar with zero.
fn scrub(value: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        0.0
    }
}

/// Measured quantities for one room, with the intermediate figures the
/// editor screen displays alongside the totals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct RoomGeometry {
    /// Wall perimeter at the floor (LF)
    pub perimeter_lf: LinFt,
    /// Effective wall height: eave height, or the eave/peak average for
    /// cathedral ceilings
    pub wall_height_ft: f64,
    /// Perimeter times effective height, before deductions
    pub gross_wall_sqft: SqFt,
    /// Window, door, and closet-opening deductions (opening + trim ring)
    pub opening_deductions_sqft: SqFt,
    /// Closet cavity wall area added when interiors are included
    pub closet_wall_sqft: SqFt,
    /// Net paintable wall area (clamped at zero)
    pub wall_area_sqft: SqFt,

    /// Cathedral slope multiplier applied to the ceiling plane (1.0 flat)
    pub slope_multiplier: f64,
    /// Closet cavity ceiling area added when interiors are included
    pub closet_ceiling_sqft: SqFt,
    /// Ceiling area including slope and closet cavities
    pub ceiling_area_sqft: SqFt,

    /// Baseboard run: perimeter minus door and closet openings (clamped),
    /// plus closet cavity runs when interiors are included
    pub baseboard_lf: LinFt,
    /// Crown run: the full perimeter
    pub crown_lf: LinFt,
}

impl RoomGeometry {
    /// Measure a room against the nominal opening dimensions.
    ///
    /// `include_closet_interiors` is the already-resolved verdict from
    /// [`crate::pricing::SurfaceInclusions`]; cavity surfaces only exist
    /// in the measurement when the interiors are being painted.
    pub fn measure(
        room: &Room,
        constants: &GeometryConstants,
        include_closet_interiors: bool,
    ) -> Self {
        let length = scrub(room.length_ft);
        let width = scrub(room.width_ft);
        let height = scrub(room.height_ft);
        let peak = scrub(room.cathedral_peak_ft);

        let singles = room.single_door_closets as f64;
        let doubles = room.double_door_closets as f64;
        let single_w = constants.closet_single_width_ft();
        let double_w = constants.closet_double_width_ft();

        let perimeter = 2.0 * (length + width);

        // A peak below the eave is treated as a flat ceiling at eave height.
        let cathedral = room.ceiling_type == CeilingType::Cathedral;
        let wall_height = if cathedral {
            (height + peak.max(height)) / 2.0
        } else {
            height
        };
        let gross_wall = perimeter * wall_height;

        let deductions = room.window_count as f64 * constants.window_deduction_sqft()
            + room.door_count as f64 * constants.door_deduction_sqft()
            + singles * constants.closet_deduction_sqft(single_w)
            + doubles * constants.closet_deduction_sqft(double_w);

        // Cavity walls rise to the eave, not the cathedral average.
        let closet_wall = if include_closet_interiors {
            singles * constants.closet_cavity_wall_sqft(single_w, height)
                + doubles * constants.closet_cavity_wall_sqft(double_w, height)
        } else {
            0.0
        };
        let wall_area = (gross_wall - deductions).max(0.0) + closet_wall;

        let base_ceiling = match room.manual_area_sqft.map(scrub) {
            Some(manual) if manual > 0.0 => manual,
            _ => length * width,
        };
        let slope = if cathedral && width > 0.0 {
            let rise = (peak - height).max(0.0);
            let run = width / 2.0;
            (1.0 + (rise / run).powi(2)).sqrt()
        } else {
            1.0
        };
        let closet_ceiling = if include_closet_interiors {
            singles * constants.closet_cavity_ceiling_sqft(single_w)
                + doubles * constants.closet_cavity_ceiling_sqft(double_w)
        } else {
            0.0
        };
        let ceiling_area = base_ceiling * slope + closet_ceiling;

        // Doors and closet openings interrupt the baseboard; the casing
        // stands in for it on both sides of each opening. Windows do not
        // reach the floor and leave the run intact.
        let door_gap = constants.door_width_ft + 2.0 * constants.door_trim_width_in / 12.0;
        let closet_gap = |opening: f64| opening + 2.0 * constants.closet_casing_width_in / 12.0;
        let mut baseboard = (perimeter
            - room.door_count as f64 * door_gap
            - singles * closet_gap(single_w)
            - doubles * closet_gap(double_w))
        .max(0.0);
        if include_closet_interiors {
            baseboard += singles * constants.closet_single_baseboard_lf
                + doubles * constants.closet_double_baseboard_lf;
        }

        RoomGeometry {
            perimeter_lf: LinFt(perimeter),
            wall_height_ft: wall_height,
            gross_wall_sqft: SqFt(gross_wall),
            opening_deductions_sqft: SqFt(deductions),
            closet_wall_sqft: SqFt(closet_wall),
            wall_area_sqft: SqFt(wall_area),
            slope_multiplier: slope,
            closet_ceiling_sqft: SqFt(closet_ceiling),
            ceiling_area_sqft: SqFt(ceiling_area),
            baseboard_lf: LinFt(baseboard),
            crown_lf: LinFt(perimeter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::GeometryConstants;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_plain_flat_room() {
        // 12x10x8, no openings: walls 352, ceiling 120, baseboard 44
        let room = Room::new("Office", 12.0, 10.0, 8.0);
        let g = RoomGeometry::measure(&room, &GeometryConstants::default(), false);
        assert!(close(g.perimeter_lf.value(), 44.0));
        assert!(close(g.gross_wall_sqft.value(), 352.0));
        assert!(close(g.wall_area_sqft.value(), 352.0));
        assert!(close(g.ceiling_area_sqft.value(), 120.0));
        assert!(close(g.baseboard_lf.value(), 44.0));
        assert!(close(g.crown_lf.value(), 44.0));
        assert_eq!(g.slope_multiplier, 1.0);
    }

    #[test]
    fn test_opening_deductions() {
        let mut room = Room::new("Living Room", 20.0, 15.0, 9.0);
        room.window_count = 2;
        room.door_count = 1;
        let g = RoomGeometry::measure(&room, &GeometryConstants::default(), false);

        // 630 gross - 2 windows (16.083333) - 1 door (24.775833)
        assert!(close(g.gross_wall_sqft.value(), 630.0));
        assert!(close(g.opening_deductions_sqft.value(), 56.9425));
        assert!(close(g.wall_area_sqft.value(), 573.0575));
        // Baseboard loses the door width plus casing both sides
        assert!(close(g.baseboard_lf.value(), 70.0 - (3.0 + 7.0 / 12.0)));
    }

    #[test]
    fn test_cathedral_ceiling() {
        let mut room = Room::new("Master", 18.0, 14.0, 10.0);
        room.ceiling_type = CeilingType::Cathedral;
        room.cathedral_peak_ft = 12.0;
        let g = RoomGeometry::measure(&room, &GeometryConstants::default(), false);

        // Walls use the eave/peak average height
        assert!(close(g.wall_height_ft, 11.0));
        assert!(close(g.gross_wall_sqft.value(), 704.0));
        // Ceiling plane stretches by sqrt(1 + (2/7)^2)
        let slope = (1.0f64 + (2.0 / 7.0_f64).powi(2)).sqrt();
        assert!(close(g.slope_multiplier, slope));
        assert!(close(g.ceiling_area_sqft.value(), 252.0 * slope));
    }

    #[test]
    fn test_cathedral_peak_below_eave_is_flat() {
        let mut room = Room::new("Odd", 16.0, 12.0, 10.0);
        room.ceiling_type = CeilingType::Cathedral;
        room.cathedral_peak_ft = 8.0;
        let g = RoomGeometry::measure(&room, &GeometryConstants::default(), false);
        assert!(close(g.wall_height_ft, 10.0));
        assert_eq!(g.slope_multiplier, 1.0);
    }

    #[test]
    fn test_closet_cavity_additions() {
        let mut room = Room::new("Master", 18.0, 14.0, 10.0);
        room.single_door_closets = 1;
        room.double_door_closets = 1;
        let k = GeometryConstants::default();

        let excluded = RoomGeometry::measure(&room, &k, false);
        let included = RoomGeometry::measure(&room, &k, true);

        // Deductions apply either way; cavities only when included
        assert!(close(excluded.closet_wall_sqft.value(), 0.0));
        assert!(close(included.closet_wall_sqft.value(), 65.0 + 90.0));
        assert!(close(included.closet_ceiling_sqft.value(), 15.0));
        assert!(close(
            included.baseboard_lf.value(),
            excluded.baseboard_lf.value() + 19.0
        ));
        assert!(close(
            excluded.opening_deductions_sqft.value(),
            included.opening_deductions_sqft.value()
        ));
    }

    #[test]
    fn test_manual_area_override() {
        let mut room = Room::new("L-Shape", 20.0, 12.0, 8.0);
        room.manual_area_sqft = Some(180.0);
        let g = RoomGeometry::measure(&room, &GeometryConstants::default(), false);
        assert!(close(g.ceiling_area_sqft.value(), 180.0));
        // Walls still come from the entered perimeter
        assert!(close(g.gross_wall_sqft.value(), 512.0));
    }

    #[test]
    fn test_overdeduction_clamps_wall_area_to_zero() {
        // A tiny room with more openings than wall: deductions exceed the
        // 98 sqft gross, but three door gaps leave 3.25 LF of baseboard
        let mut room = Room::new("Nook", 4.0, 3.0, 7.0);
        room.window_count = 4;
        room.door_count = 3;
        let g = RoomGeometry::measure(&room, &GeometryConstants::default(), false);
        assert_eq!(g.wall_area_sqft.value(), 0.0);
        assert!(close(g.baseboard_lf.value(), 14.0 - 3.0 * (3.0 + 7.0 / 12.0)));
    }

    #[test]
    fn test_door_gaps_exceeding_perimeter_clamp_baseboard() {
        // Five door gaps (17.9 LF) against a 14 LF perimeter
        let mut room = Room::new("Vestibule", 4.0, 3.0, 7.0);
        room.door_count = 5;
        let g = RoomGeometry::measure(&room, &GeometryConstants::default(), false);
        assert_eq!(g.baseboard_lf.value(), 0.0);
        assert_eq!(g.wall_area_sqft.value(), 0.0);
    }

    #[test]
    fn test_garbage_input_scrubbed() {
        let mut room = Room::new("Bad", f64::NAN, -10.0, f64::INFINITY);
        room.window_count = 1;
        let g = RoomGeometry::measure(&room, &GeometryConstants::default(), false);
        assert!(g.wall_area_sqft.value().is_finite());
        assert_eq!(g.wall_area_sqft.value(), 0.0);
        assert_eq!(g.ceiling_area_sqft.value(), 0.0);
        assert_eq!(g.baseboard_lf.value(), 0.0);
    }
}
