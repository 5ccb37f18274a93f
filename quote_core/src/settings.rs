//! # Rate Table and Geometry Constants
//!
//! Two read-only parameter objects supplied to every engine call:
//!
//! - [`PricingSettings`] - labor rates, multipliers, paint prices, and
//!   coverage constants. The shipped defaults were calibrated against the
//!   verification quote data.
//! - [`GeometryConstants`] - nominal opening dimensions (doors, windows,
//!   closets) and trim face widths. These are user-adjustable assumptions
//!   held by an external settings store; the engine never hard-codes them.
//!
//! A missing or zero rate simply prices that category at zero - a caller
//! configuration concern, not an engine fault.

use serde::{Deserialize, Serialize};

/// Per-project rate table: labor, multipliers, paint prices, coverage.
///
/// All labor rates are one-coat rates; a second coat is priced via
/// `second_coat_multiplier` rather than literal double labor, reflecting
/// the lower marginal cost of a repeat pass.
///
/// ## JSON Example
///
/// ```json
/// {
///   "labor_walls_per_sqft": 0.59,
///   "labor_ceilings_per_sqft": 0.89,
///   "labor_baseboard_per_lf": 0.75,
///   "labor_per_door": 235.63,
///   "second_coat_multiplier": 1.4,
///   "wall_paint_per_gallon": 35.0,
///   "wall_coverage_sqft_per_gallon": 350.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingSettings {
    // === Area labor ($/sqft) ===
    pub labor_walls_per_sqft: f64,
    pub labor_ceilings_per_sqft: f64,

    // === Run labor ($/LF) ===
    pub labor_baseboard_per_lf: f64,
    pub labor_crown_per_lf: f64,
    pub labor_handrail_per_lf: f64,

    // === Flat per-unit labor ($) ===
    /// Full door system: slab both faces, frame, and casing
    pub labor_per_door: f64,
    pub labor_per_window: f64,
    pub labor_per_jamb: f64,
    pub labor_per_closet: f64,
    pub labor_per_riser: f64,
    pub labor_per_spindle: f64,
    pub labor_fireplace_mantel: f64,

    // === Labor multipliers ===
    /// Applied to area/run labor when a category gets two or more coats
    pub second_coat_multiplier: f64,
    /// Applied to wall labor when the room has an accent wall
    pub accent_wall_multiplier: f64,

    // === Paint prices ($/gallon) ===
    pub wall_paint_per_gallon: f64,
    pub ceiling_paint_per_gallon: f64,
    pub trim_paint_per_gallon: f64,
    pub primer_per_gallon: f64,

    // === Coverage (sqft/gallon) ===
    pub wall_coverage_sqft_per_gallon: f64,
    pub ceiling_coverage_sqft_per_gallon: f64,
    pub trim_coverage_sqft_per_gallon: f64,
    pub primer_coverage_sqft_per_gallon: f64,
}

impl Default for PricingSettings {
    fn default() -> Self {
        PricingSettings {
            labor_walls_per_sqft: 0.59,
            labor_ceilings_per_sqft: 0.89,
            labor_baseboard_per_lf: 0.75,
            labor_crown_per_lf: 2.25,
            labor_handrail_per_lf: 2.00,
            labor_per_door: 235.63,
            labor_per_window: 22.86,
            labor_per_jamb: 20.00,
            labor_per_closet: 39.25,
            labor_per_riser: 6.00,
            labor_per_spindle: 4.50,
            labor_fireplace_mantel: 110.00,
            second_coat_multiplier: 1.4,
            accent_wall_multiplier: 1.25,
            wall_paint_per_gallon: 35.0,
            ceiling_paint_per_gallon: 30.0,
            trim_paint_per_gallon: 40.0,
            primer_per_gallon: 25.0,
            wall_coverage_sqft_per_gallon: 350.0,
            ceiling_coverage_sqft_per_gallon: 350.0,
            trim_coverage_sqft_per_gallon: 400.0,
            primer_coverage_sqft_per_gallon: 300.0,
        }
    }
}

/// Nominal opening dimensions and trim face widths.
///
/// Linear dimensions are in feet except where the field name says inches;
/// trim and casing widths come from the settings UI in inches and are
/// converted to feet at the point of use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConstants {
    /// Nominal window width (ft)
    pub window_width_ft: f64,
    /// Nominal window height (ft)
    pub window_height_ft: f64,
    /// Window trim face width (in)
    pub window_trim_width_in: f64,

    /// Nominal door width (ft)
    pub door_width_ft: f64,
    /// Nominal door height (ft)
    pub door_height_ft: f64,
    /// Door trim face width (in)
    pub door_trim_width_in: f64,

    /// Single closet opening width (in)
    pub closet_single_width_in: f64,
    /// Double closet opening width (in)
    pub closet_double_width_in: f64,
    /// Closet casing face width (in)
    pub closet_casing_width_in: f64,
    /// Closet cavity depth (ft)
    pub closet_cavity_depth_ft: f64,
    /// Baseboard run inside a single closet cavity (LF)
    pub closet_single_baseboard_lf: f64,
    /// Baseboard run inside a double closet cavity (LF)
    pub closet_double_baseboard_lf: f64,

    /// Baseboard face width (in)
    pub baseboard_width_in: f64,
    /// Crown moulding face width (in)
    pub crown_width_in: f64,
}

impl Default for GeometryConstants {
    fn default() -> Self {
        GeometryConstants {
            window_width_ft: 3.0,
            window_height_ft: 4.0,
            window_trim_width_in: 3.5,
            door_width_ft: 3.0,
            door_height_ft: 6.67,
            door_trim_width_in: 3.5,
            closet_single_width_in: 30.0,
            closet_double_width_in: 60.0,
            closet_casing_width_in: 2.5,
            closet_cavity_depth_ft: 2.0,
            closet_single_baseboard_lf: 7.0,
            closet_double_baseboard_lf: 12.0,
            baseboard_width_in: 4.0,
            crown_width_in: 4.0,
        }
    }
}

impl GeometryConstants {
    /// Single closet opening width in feet
    pub fn closet_single_width_ft(&self) -> f64 {
        self.closet_single_width_in / 12.0
    }

    /// Double closet opening width in feet
    pub fn closet_double_width_ft(&self) -> f64 {
        self.closet_double_width_in / 12.0
    }

    /// Paintable trim ring around one window: full perimeter times face width
    pub fn window_casing_sqft(&self) -> f64 {
        2.0 * (self.window_width_ft + self.window_height_ft) * (self.window_trim_width_in / 12.0)
    }

    /// Wall-area deduction for one window: glass opening plus trim ring
    pub fn window_deduction_sqft(&self) -> f64 {
        self.window_width_ft * self.window_height_ft + self.window_casing_sqft()
    }

    /// Paintable trim ring around one door.
    ///
    /// Three exposed sides only - the bottom edge carries no trim.
    pub fn door_casing_sqft(&self) -> f64 {
        (2.0 * self.door_height_ft + self.door_width_ft) * (self.door_trim_width_in / 12.0)
    }

    /// Wall-area deduction for one door: opening plus trim ring
    pub fn door_deduction_sqft(&self) -> f64 {
        self.door_width_ft * self.door_height_ft + self.door_casing_sqft()
    }

    /// Paintable casing ring around a closet opening of the given width (ft)
    pub fn closet_casing_sqft(&self, opening_width_ft: f64) -> f64 {
        (2.0 * self.door_height_ft + opening_width_ft) * (self.closet_casing_width_in / 12.0)
    }

    /// Wall-area deduction for a closet opening of the given width (ft)
    pub fn closet_deduction_sqft(&self, opening_width_ft: f64) -> f64 {
        opening_width_ft * self.door_height_ft + self.closet_casing_sqft(opening_width_ft)
    }

    /// Cavity wall area for a closet: back wall plus the two side walls.
    ///
    /// The door-opening wall is not painted.
    pub fn closet_cavity_wall_sqft(&self, opening_width_ft: f64, wall_height_ft: f64) -> f64 {
        (opening_width_ft + 2.0 * self.closet_cavity_depth_ft) * wall_height_ft
    }

    /// Cavity ceiling area for a closet (always flat)
    pub fn closet_cavity_ceiling_sqft(&self, opening_width_ft: f64) -> f64 {
        opening_width_ft * self.closet_cavity_depth_ft
    }
}
