//! # Pricing Aggregator
//!
//! [`PricingSummary::calculate`] is the engine entry point: it resolves
//! the inclusion flags, measures the room, and prices labor and materials
//! in one pass. The same call backs the live editor preview and the cached
//! totals on a saved room, so the two can never disagree.
//!
//! Pricing rules:
//!
//! - Gallons per category are `quantity x coats / coverage`, rounded up to
//!   the half gallon the paint store actually sells.
//! - Area and run labor take the second-coat multiplier when that
//!   category's coat count is two or more; flat per-item labor never does.
//!   Coat counts come from the room unless the quote carries a uniform
//!   override.
//! - Door and window labor is flat per item. Jambs are charged per door,
//!   and only when both the doors and jambs categories resolve on.
//! - Trim paint pools every casing and face the trim brush touches:
//!   window and door casings (behind the trim switch and the per-opening
//!   category), closet casings (behind the trim switch), baseboard face,
//!   and crown face.
//! - Door slabs are painted on both faces at trim coverage and price.
//! - A vetoed category contributes exactly zero dollars and gallons, but
//!   its measured quantities still appear on the summary.
//! - The grand total is rounded to whole dollars exactly once, from the
//!   unrounded labor and materials sum.

use serde::{Deserialize, Serialize};

use crate::pricing::geometry::RoomGeometry;
use crate::pricing::inclusions::SurfaceInclusions;
use crate::project::ProjectDefaults;
use crate::quote::QuoteBuilder;
use crate::rooms::Room;
use crate::settings::{GeometryConstants, PricingSettings};
use crate::units::{Dollars, Gallons, LinFt, SqFt};

/// Purchased paint by category, already rounded to half gallons.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct GallonUsage {
    pub walls: Gallons,
    pub ceilings: Gallons,
    pub trim: Gallons,
    pub doors: Gallons,
    pub primer: Gallons,
}

impl GallonUsage {
    pub fn total(&self) -> Gallons {
        self.walls + self.ceilings + self.trim + self.doors + self.primer
    }
}

/// Labor dollars by category, rounded to cents for display.
///
/// The summary's `labor_total` is computed from the unrounded figures, so
/// the breakdown may differ from it by a cent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct LaborBreakdown {
    pub walls: Dollars,
    pub ceilings: Dollars,
    pub baseboard: Dollars,
    pub crown_moulding: Dollars,
    pub windows: Dollars,
    pub doors: Dollars,
    pub jambs: Dollars,
    pub closet_interiors: Dollars,
    pub stairs_and_rails: Dollars,
    pub fireplace: Dollars,
}

/// The complete priced result for one room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingSummary {
    /// Resolved category verdicts
    pub inclusions: SurfaceInclusions,
    /// Measured quantities with display intermediates
    pub geometry: RoomGeometry,
    pub windows_count: u32,
    pub doors_count: u32,
    pub gallons: GallonUsage,
    pub labor: LaborBreakdown,
    /// Labor sum at cent precision
    pub labor_total: Dollars,
    /// Paint cost at cent precision
    pub materials_total: Dollars,
    /// Labor plus materials, rounded once to whole dollars
    pub grand_total: Dollars,
}

impl PricingSummary {
    pub fn wall_area_sqft(&self) -> SqFt {
        self.geometry.wall_area_sqft
    }

    pub fn ceiling_area_sqft(&self) -> SqFt {
        self.geometry.ceiling_area_sqft
    }

    pub fn baseboard_lf(&self) -> LinFt {
        self.geometry.baseboard_lf
    }

    pub fn crown_lf(&self) -> LinFt {
        self.geometry.crown_lf
    }

    /// Price one room.
    ///
    /// Pure and total: no state, no I/O, no panics, the same inputs always
    /// produce the same summary.
    pub fn calculate(
        room: &Room,
        defaults: &ProjectDefaults,
        quote: &QuoteBuilder,
        pricing: &PricingSettings,
        constants: &GeometryConstants,
    ) -> Self {
        let inclusions = SurfaceInclusions::resolve(room, defaults, quote);
        let geometry = RoomGeometry::measure(room, constants, inclusions.closet_interiors);

        let coats = |room_coats: u32| quote.coats_override.unwrap_or(room_coats);
        let coats_walls = coats(room.coats_walls);
        let coats_ceiling = coats(room.coats_ceiling);
        let coats_trim = coats(room.coats_trim);
        let coats_doors = coats(room.coats_doors);
        let coat_mult = |c: u32| {
            if c >= 2 {
                pricing.second_coat_multiplier
            } else {
                1.0
            }
        };

        let wall_area = geometry.wall_area_sqft.value();
        let ceiling_area = geometry.ceiling_area_sqft.value();
        let baseboard = geometry.baseboard_lf.value();
        let crown = geometry.crown_lf.value();
        let windows = room.window_count as f64;
        let doors = room.door_count as f64;
        let closets = room.closet_count() as f64;
        let handrail = if room.handrail_lf.is_finite() && room.handrail_lf > 0.0 {
            room.handrail_lf
        } else {
            0.0
        };

        // === Labor ===
        let accent = if inclusions.accent_wall {
            pricing.accent_wall_multiplier
        } else {
            1.0
        };
        let labor_walls = if inclusions.walls {
            wall_area * pricing.labor_walls_per_sqft * coat_mult(coats_walls) * accent
        } else {
            0.0
        };
        let labor_ceilings = if inclusions.ceilings {
            ceiling_area * pricing.labor_ceilings_per_sqft * coat_mult(coats_ceiling)
        } else {
            0.0
        };
        let labor_baseboard = if inclusions.baseboards {
            baseboard * pricing.labor_baseboard_per_lf * coat_mult(coats_trim)
        } else {
            0.0
        };
        let labor_crown = if inclusions.crown_moulding {
            crown * pricing.labor_crown_per_lf * coat_mult(coats_trim)
        } else {
            0.0
        };
        let labor_windows = if inclusions.windows {
            windows * pricing.labor_per_window
        } else {
            0.0
        };
        let labor_doors = if inclusions.doors {
            doors * pricing.labor_per_door
        } else {
            0.0
        };
        let labor_jambs = if inclusions.doors && inclusions.jambs {
            doors * pricing.labor_per_jamb
        } else {
            0.0
        };
        let labor_closets = if inclusions.closet_interiors {
            closets * pricing.labor_per_closet
        } else {
            0.0
        };
        let labor_stairs = room.stair_risers as f64 * pricing.labor_per_riser
            + room.spindles as f64 * pricing.labor_per_spindle
            + handrail * pricing.labor_handrail_per_lf;
        let labor_fireplace = if room.has_fireplace {
            pricing.labor_fireplace_mantel
        } else {
            0.0
        };

        let labor_raw = labor_walls
            + labor_ceilings
            + labor_baseboard
            + labor_crown
            + labor_windows
            + labor_doors
            + labor_jambs
            + labor_closets
            + labor_stairs
            + labor_fireplace;

        // === Materials ===
        let gallons_walls = if inclusions.walls {
            Gallons::ceil_to_half(
                wall_area * coats_walls as f64 / pricing.wall_coverage_sqft_per_gallon,
            )
        } else {
            Gallons(0.0)
        };
        let gallons_ceilings = if inclusions.ceilings {
            Gallons::ceil_to_half(
                ceiling_area * coats_ceiling as f64 / pricing.ceiling_coverage_sqft_per_gallon,
            )
        } else {
            Gallons(0.0)
        };

        let mut trim_area = 0.0;
        if inclusions.trim {
            if inclusions.windows {
                trim_area += windows * constants.window_casing_sqft();
            }
            if inclusions.doors {
                trim_area += doors * constants.door_casing_sqft();
            }
            trim_area += room.single_door_closets as f64
                * constants.closet_casing_sqft(constants.closet_single_width_ft())
                + room.double_door_closets as f64
                    * constants.closet_casing_sqft(constants.closet_double_width_ft());
        }
        if inclusions.baseboards {
            trim_area += baseboard * constants.baseboard_width_in / 12.0;
        }
        if inclusions.crown_moulding {
            trim_area += crown * constants.crown_width_in / 12.0;
        }
        let gallons_trim = Gallons::ceil_to_half(
            trim_area * coats_trim as f64 / pricing.trim_coverage_sqft_per_gallon,
        );

        let gallons_doors = if inclusions.doors {
            let slab_area = doors * 2.0 * constants.door_width_ft * constants.door_height_ft;
            Gallons::ceil_to_half(
                slab_area * coats_doors as f64 / pricing.trim_coverage_sqft_per_gallon,
            )
        } else {
            Gallons(0.0)
        };

        let gallons_primer = if quote.include_primer && inclusions.walls {
            Gallons::ceil_to_half(wall_area / pricing.primer_coverage_sqft_per_gallon)
        } else {
            Gallons(0.0)
        };

        let materials_raw = gallons_walls.value() * pricing.wall_paint_per_gallon
            + gallons_ceilings.value() * pricing.ceiling_paint_per_gallon
            + (gallons_trim + gallons_doors).value() * pricing.trim_paint_per_gallon
            + gallons_primer.value() * pricing.primer_per_gallon;

        PricingSummary {
            inclusions,
            geometry,
            windows_count: room.window_count,
            doors_count: room.door_count,
            gallons: GallonUsage {
                walls: gallons_walls,
                ceilings: gallons_ceilings,
                trim: gallons_trim,
                doors: gallons_doors,
                primer: gallons_primer,
            },
            labor: LaborBreakdown {
                walls: Dollars::to_cents(labor_walls),
                ceilings: Dollars::to_cents(labor_ceilings),
                baseboard: Dollars::to_cents(labor_baseboard),
                crown_moulding: Dollars::to_cents(labor_crown),
                windows: Dollars::to_cents(labor_windows),
                doors: Dollars::to_cents(labor_doors),
                jambs: Dollars::to_cents(labor_jambs),
                closet_interiors: Dollars::to_cents(labor_closets),
                stairs_and_rails: Dollars::to_cents(labor_stairs),
                fireplace: Dollars::to_cents(labor_fireplace),
            },
            labor_total: Dollars::to_cents(labor_raw),
            materials_total: Dollars::to_cents(materials_raw),
            grand_total: Dollars::to_whole(labor_raw + materials_raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote_all_on() -> QuoteBuilder {
        let mut q = QuoteBuilder::new();
        q.include_walls = Some(true);
        q.include_ceilings = Some(true);
        q.include_trim = Some(true);
        q.include_windows = Some(true);
        q.include_doors = Some(true);
        q.include_jambs = Some(true);
        q.include_baseboard = Some(true);
        q.include_closet_interiors = Some(true);
        q
    }

    fn living_room() -> Room {
        let mut r = Room::new("Living Room", 20.0, 15.0, 9.0);
        r.window_count = 2;
        r.door_count = 1;
        r.coats_walls = 2;
        r.paint_trim = Some(true);
        r.paint_baseboard = Some(true);
        r.paint_windows = Some(true);
        r.paint_doors = Some(true);
        r.paint_jambs = Some(true);
        r
    }

    fn master_bedroom() -> Room {
        let mut r = Room::new("Master Bedroom", 18.0, 14.0, 10.0);
        r.ceiling_type = crate::rooms::CeilingType::Cathedral;
        r.cathedral_peak_ft = 12.0;
        r.window_count = 3;
        r.door_count = 2;
        r.single_door_closets = 1;
        r.double_door_closets = 1;
        r.paint_doors = Some(false);
        r.include_closet_interior = Some(true);
        r.coats_walls = 2;
        r.coats_ceiling = 2;
        r
    }

    fn office() -> Room {
        let mut r = Room::new("Office", 12.0, 10.0, 8.0);
        r.window_count = 1;
        r.door_count = 1;
        r.paint_windows = Some(false);
        r.paint_doors = Some(true);
        r.paint_trim = Some(false);
        r.paint_baseboard = Some(false);
        r.coats_doors = 2;
        r
    }

    fn estimate(room: &Room) -> PricingSummary {
        PricingSummary::calculate(
            room,
            &ProjectDefaults::default(),
            &quote_all_on(),
            &PricingSettings::default(),
            &GeometryConstants::default(),
        )
    }

    #[test]
    fn test_living_room_regression() {
        let s = estimate(&living_room());
        assert!((s.wall_area_sqft().value() - 573.0575).abs() < 1e-4);
        assert_eq!(s.gallons.walls, Gallons(3.5));
        assert_eq!(s.gallons.ceilings, Gallons(1.0));
        assert_eq!(s.gallons.trim, Gallons(0.5));
        assert_eq!(s.gallons.doors, Gallons(0.5));
        assert_eq!(s.gallons.primer, Gallons(0.0));
        assert_eq!(s.labor_total, Dollars(1091.51));
        assert_eq!(s.materials_total, Dollars(192.5));
        assert_eq!(s.grand_total, Dollars(1284.0));
    }

    #[test]
    fn test_master_bedroom_regression() {
        let s = estimate(&master_bedroom());
        // Door veto: measured but not priced
        assert!(!s.inclusions.doors);
        assert_eq!(s.doors_count, 2);
        assert_eq!(s.labor.doors, Dollars(0.0));
        assert_eq!(s.labor.jambs, Dollars(0.0));
        assert_eq!(s.gallons.doors, Gallons(0.0));
        // Closet interiors add cavity surfaces and flat labor
        assert!(s.inclusions.closet_interiors);
        assert_eq!(s.labor.closet_interiors, Dollars(78.5));
        assert!((s.wall_area_sqft().value() - 704.0525).abs() < 1e-4);
        assert!((s.ceiling_area_sqft().value() - 277.08396).abs() < 1e-4);
        assert_eq!(s.gallons.walls, Gallons(4.5));
        assert_eq!(s.gallons.ceilings, Gallons(2.0));
        assert_eq!(s.gallons.trim, Gallons(0.5));
        assert_eq!(s.labor_total, Dollars(1124.5));
        assert_eq!(s.materials_total, Dollars(237.5));
        assert_eq!(s.grand_total, Dollars(1362.0));
    }

    #[test]
    fn test_office_regression() {
        let s = estimate(&office());
        assert!(!s.inclusions.windows);
        assert!(!s.inclusions.trim);
        assert!(!s.inclusions.baseboards);
        assert_eq!(s.labor.windows, Dollars(0.0));
        assert_eq!(s.labor.baseboard, Dollars(0.0));
        assert_eq!(s.gallons.trim, Gallons(0.0));
        // Flat door labor is not coat-multiplied, but door paint is
        assert_eq!(s.labor.doors, Dollars(235.63));
        assert_eq!(s.gallons.doors, Gallons(0.5));
        assert_eq!(s.labor.jambs, Dollars(20.0));
        assert_eq!(s.labor_total, Dollars(546.0));
        assert_eq!(s.materials_total, Dollars(70.0));
        assert_eq!(s.grand_total, Dollars(616.0));
    }

    #[test]
    fn test_fixture_house_total() {
        let total: f64 = [living_room(), master_bedroom(), office()]
            .iter()
            .map(|r| estimate(r).grand_total.value())
            .sum();
        assert_eq!(total, 3262.0);
    }

    #[test]
    fn test_same_input_same_output() {
        let room = master_bedroom();
        assert_eq!(estimate(&room), estimate(&room));
    }

    #[test]
    fn test_veto_contributes_exactly_zero() {
        let mut with_doors = living_room();
        with_doors.paint_doors = None;
        let mut without_doors = with_doors.clone();
        without_doors.paint_doors = Some(false);

        let a = estimate(&with_doors);
        let b = estimate(&without_doors);

        // Geometry is unchanged; only door and jamb pricing disappears
        assert_eq!(a.geometry.wall_area_sqft, b.geometry.wall_area_sqft);
        assert_eq!(a.geometry.baseboard_lf, b.geometry.baseboard_lf);
        assert_eq!(b.labor.doors, Dollars(0.0));
        assert_eq!(b.gallons.doors, Gallons(0.0));
        assert!(b.grand_total.value() < a.grand_total.value());
    }

    #[test]
    fn test_coats_override_replaces_room_counts() {
        let room = living_room(); // coats_walls = 2
        let mut quote = quote_all_on();
        quote.coats_override = Some(1);

        let s = PricingSummary::calculate(
            &room,
            &ProjectDefaults::default(),
            &quote,
            &PricingSettings::default(),
            &GeometryConstants::default(),
        );
        // 573.0575 * 0.59 with no second-coat multiplier
        assert_eq!(s.labor.walls, Dollars(338.1));
        assert_eq!(s.gallons.walls, Gallons(2.0));
    }

    #[test]
    fn test_primer_over_included_walls() {
        let room = office();
        let quote = quote_all_on().with_primer(true);
        let s = PricingSummary::calculate(
            &room,
            &ProjectDefaults::default(),
            &quote,
            &PricingSettings::default(),
            &GeometryConstants::default(),
        );
        // 311.14 sqft / 300 sqft per gallon, one coat
        assert_eq!(s.gallons.primer, Gallons(1.5));
        assert_eq!(s.grand_total, Dollars(654.0));

        // Primer rides the walls verdict
        let mut no_walls = office();
        no_walls.paint_walls = Some(false);
        let s = PricingSummary::calculate(
            &no_walls,
            &ProjectDefaults::default(),
            &quote,
            &PricingSettings::default(),
            &GeometryConstants::default(),
        );
        assert_eq!(s.gallons.primer, Gallons(0.0));
    }

    #[test]
    fn test_accent_wall_multiplier() {
        let mut plain = Room::new("Dining", 14.0, 12.0, 9.0);
        plain.has_accent_wall = Some(true);
        let s = estimate(&plain);
        // 468 sqft * 0.59 * 1.25
        assert!(s.inclusions.accent_wall);
        assert_eq!(s.labor.walls, Dollars(345.15));
    }

    #[test]
    fn test_stair_and_fireplace_extras() {
        let mut hall = Room::new("Stair Hall", 12.0, 8.0, 9.0);
        hall.stair_risers = 13;
        hall.spindles = 24;
        hall.handrail_lf = 15.0;
        hall.has_fireplace = true;
        let s = estimate(&hall);
        // 13 * 6.00 + 24 * 4.50 + 15 * 2.00
        assert_eq!(s.labor.stairs_and_rails, Dollars(216.0));
        assert_eq!(s.labor.fireplace, Dollars(110.0));
    }

    #[test]
    fn test_crown_moulding_opt_in() {
        let mut room = Room::new("Parlor", 16.0, 13.0, 9.0);
        let base = estimate(&room);
        assert_eq!(base.labor.crown_moulding, Dollars(0.0));

        room.has_crown_moulding = Some(true);
        let s = estimate(&room);
        // 58 LF perimeter * 2.25
        assert_eq!(s.labor.crown_moulding, Dollars(130.5));
        assert!(s.gallons.trim.value() >= base.gallons.trim.value());
    }

    #[test]
    fn test_garbage_room_prices_to_zero_area() {
        let room = Room::new("Bad", f64::NAN, -1.0, f64::INFINITY);
        let s = estimate(&room);
        assert_eq!(s.wall_area_sqft().value(), 0.0);
        assert_eq!(s.gallons.walls, Gallons(0.0));
        assert_eq!(s.grand_total, Dollars(0.0));
    }
}
