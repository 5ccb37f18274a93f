//! # Inclusion Resolver
//!
//! Collapses the three tiers of paint flags (project defaults, quote
//! settings, room overrides) into one set of booleans for a single room.
//!
//! Resolution is veto-first: an explicit `false` at any tier excludes the
//! category no matter what the other tiers say. With no veto, any explicit
//! `true` includes it. With no opinion anywhere, the category default
//! applies: the standard repaint surfaces (walls, ceilings, trim,
//! baseboards, windows, doors, jambs, closet interiors) default on, the
//! upsell surfaces (crown moulding, accent walls) default off.

use serde::{Deserialize, Serialize};

use crate::project::ProjectDefaults;
use crate::quote::QuoteBuilder;
use crate::rooms::Room;

/// Combine one category's flags across the three tiers.
///
/// Pure and total: any explicit `false` vetoes, any explicit `true`
/// enables, all-`None` falls back to `default_on`.
pub fn combine_tiers(
    project: Option<bool>,
    quote: Option<bool>,
    room: Option<bool>,
    default_on: bool,
) -> bool {
    let tiers = [project, quote, room];
    if tiers.contains(&Some(false)) {
        return false;
    }
    if tiers.contains(&Some(true)) {
        return true;
    }
    default_on
}

/// The resolved per-category verdicts for one room.
///
/// Carried on [`crate::pricing::PricingSummary`] so a screen can show why
/// a line item priced at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SurfaceInclusions {
    pub walls: bool,
    pub ceilings: bool,
    pub trim: bool,
    pub baseboards: bool,
    pub windows: bool,
    pub doors: bool,
    pub jambs: bool,
    pub crown_moulding: bool,
    pub accent_wall: bool,
    pub closet_interiors: bool,
}

impl SurfaceInclusions {
    /// Resolve every category for one room.
    ///
    /// Closet interiors are additionally forced off when the room has no
    /// closets, regardless of the flags.
    pub fn resolve(room: &Room, defaults: &ProjectDefaults, quote: &QuoteBuilder) -> Self {
        SurfaceInclusions {
            walls: combine_tiers(
                defaults.paint_walls,
                quote.include_walls,
                room.paint_walls,
                true,
            ),
            ceilings: combine_tiers(
                defaults.paint_ceilings,
                quote.include_ceilings,
                room.paint_ceilings,
                true,
            ),
            trim: combine_tiers(
                defaults.paint_trim,
                quote.include_trim,
                room.paint_trim,
                true,
            ),
            baseboards: combine_tiers(
                defaults.paint_baseboard,
                quote.include_baseboard,
                room.paint_baseboard,
                true,
            ),
            windows: combine_tiers(
                defaults.paint_windows,
                quote.include_windows,
                room.paint_windows,
                true,
            ),
            doors: combine_tiers(
                defaults.paint_doors,
                quote.include_doors,
                room.paint_doors,
                true,
            ),
            jambs: combine_tiers(
                defaults.paint_jambs,
                quote.include_jambs,
                room.paint_jambs,
                true,
            ),
            crown_moulding: combine_tiers(
                defaults.crown_moulding,
                quote.include_crown_moulding,
                room.has_crown_moulding,
                false,
            ),
            accent_wall: combine_tiers(
                defaults.accent_walls,
                quote.include_accent_walls,
                room.has_accent_wall,
                false,
            ),
            closet_interiors: room.has_closet()
                && combine_tiers(
                    defaults.closet_interiors,
                    quote.include_closet_interiors,
                    room.include_closet_interior,
                    true,
                ),
        }
    }
}
