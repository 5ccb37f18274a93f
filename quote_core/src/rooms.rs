//! # Room Records
//!
//! The [`Room`] struct is the per-room input to the estimate engine. The
//! engine treats it as read-only for a single call; the editor screen
//! merges live form state over the stored room before each call.
//!
//! Every paint flag on the room is an `Option<bool>`: `None` means "no
//! opinion, defer to the quote and project tiers", while an explicit value
//! overrides them (an explicit `false` vetoes the category - see
//! [`crate::pricing::inclusions`]).
//!
//! The cached total fields (`gallon_usage`, `labor_total`, ...) are a
//! denormalization for fast list rendering. They are only ever written from
//! a [`PricingSummary`] via [`Room::apply_summary`], so the stored figures
//! cannot diverge from the preview.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{QuoteError, QuoteResult};
use crate::pricing::PricingSummary;

/// Ceiling profile of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CeilingType {
    /// Horizontal ceiling at wall height
    #[default]
    Flat,
    /// Sloped ceiling rising from eave height to a central peak
    Cathedral,
}

impl CeilingType {
    pub const ALL: [CeilingType; 2] = [CeilingType::Flat, CeilingType::Cathedral];

    pub fn display_name(&self) -> &'static str {
        match self {
            CeilingType::Flat => "Flat",
            CeilingType::Cathedral => "Cathedral",
        }
    }

    pub fn is_cathedral(&self) -> bool {
        matches!(self, CeilingType::Cathedral)
    }
}

impl std::fmt::Display for CeilingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

fn default_floor() -> u8 {
    1
}

fn one_coat() -> u32 {
    1
}

/// A single room to be estimated.
///
/// ## JSON Example
///
/// ```json
/// {
///   "id": "7f2c1a9e-0000-0000-0000-000000000000",
///   "name": "Living Room",
///   "length_ft": 20.0,
///   "width_ft": 15.0,
///   "height_ft": 9.0,
///   "window_count": 2,
///   "door_count": 1,
///   "paint_doors": true,
///   "coats_walls": 2
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    // === Identity ===
    pub id: Uuid,
    pub name: String,

    // === Geometry ===
    /// Room length (ft)
    pub length_ft: f64,
    /// Room width (ft)
    pub width_ft: f64,
    /// Wall/eave height (ft), resolved per-floor by the caller
    pub height_ft: f64,
    /// Manual ceiling-area override (sqft); replaces length x width when
    /// present and positive
    #[serde(default)]
    pub manual_area_sqft: Option<f64>,
    /// Which floor the room is on (1-based)
    #[serde(default = "default_floor")]
    pub floor: u8,
    #[serde(default)]
    pub ceiling_type: CeilingType,
    /// Peak height (ft); meaningful only for cathedral ceilings
    #[serde(default)]
    pub cathedral_peak_ft: f64,

    // === Openings ===
    #[serde(default)]
    pub window_count: u32,
    #[serde(default)]
    pub door_count: u32,
    #[serde(default)]
    pub single_door_closets: u32,
    #[serde(default)]
    pub double_door_closets: u32,

    // === Room-tier paint overrides (None = defer upstream) ===
    #[serde(default)]
    pub paint_walls: Option<bool>,
    #[serde(default)]
    pub paint_ceilings: Option<bool>,
    #[serde(default)]
    pub paint_trim: Option<bool>,
    #[serde(default)]
    pub paint_windows: Option<bool>,
    #[serde(default)]
    pub paint_doors: Option<bool>,
    #[serde(default)]
    pub paint_jambs: Option<bool>,
    #[serde(default)]
    pub paint_baseboard: Option<bool>,
    #[serde(default)]
    pub has_crown_moulding: Option<bool>,
    #[serde(default)]
    pub has_accent_wall: Option<bool>,
    #[serde(default)]
    pub include_closet_interior: Option<bool>,

    // === Coat counts ===
    #[serde(default = "one_coat")]
    pub coats_walls: u32,
    #[serde(default = "one_coat")]
    pub coats_ceiling: u32,
    #[serde(default = "one_coat")]
    pub coats_trim: u32,
    #[serde(default = "one_coat")]
    pub coats_doors: u32,

    // === Stair and fireplace extras ===
    #[serde(default)]
    pub stair_risers: u32,
    #[serde(default)]
    pub spindles: u32,
    #[serde(default)]
    pub handrail_lf: f64,
    #[serde(default)]
    pub has_fireplace: bool,

    // === Cached totals (written only via apply_summary) ===
    #[serde(default)]
    pub gallon_usage: f64,
    #[serde(default)]
    pub labor_total: f64,
    #[serde(default)]
    pub materials_total: f64,
    #[serde(default)]
    pub grand_total: f64,
}

impl Room {
    /// Create a room with the given name and dimensions; everything else
    /// starts at its deferred/zero default.
    pub fn new(name: impl Into<String>, length_ft: f64, width_ft: f64, height_ft: f64) -> Self {
        Room {
            id: Uuid::new_v4(),
            name: name.into(),
            length_ft,
            width_ft,
            height_ft,
            manual_area_sqft: None,
            floor: 1,
            ceiling_type: CeilingType::Flat,
            cathedral_peak_ft: 0.0,
            window_count: 0,
            door_count: 0,
            single_door_closets: 0,
            double_door_closets: 0,
            paint_walls: None,
            paint_ceilings: None,
            paint_trim: None,
            paint_windows: None,
            paint_doors: None,
            paint_jambs: None,
            paint_baseboard: None,
            has_crown_moulding: None,
            has_accent_wall: None,
            include_closet_interior: None,
            coats_walls: 1,
            coats_ceiling: 1,
            coats_trim: 1,
            coats_doors: 1,
            stair_risers: 0,
            spindles: 0,
            handrail_lf: 0.0,
            has_fireplace: false,
            gallon_usage: 0.0,
            labor_total: 0.0,
            materials_total: 0.0,
            grand_total: 0.0,
        }
    }

    /// Total closet count (single + double)
    pub fn closet_count(&self) -> u32 {
        self.single_door_closets + self.double_door_closets
    }

    /// Convenience flag: true iff either closet count is positive
    pub fn has_closet(&self) -> bool {
        self.closet_count() > 0
    }

    /// Validate input for form feedback.
    ///
    /// The engine itself never calls this - it degrades malformed numbers
    /// to a zero-area room instead of erroring - but the editor screen
    /// wants structured messages to surface next to fields.
    pub fn validate(&self) -> QuoteResult<()> {
        for (field, value) in [
            ("length_ft", self.length_ft),
            ("width_ft", self.width_ft),
            ("height_ft", self.height_ft),
        ] {
            if !value.is_finite() {
                return Err(QuoteError::invalid_input(
                    field,
                    value.to_string(),
                    "Dimension must be a finite number",
                ));
            }
            if value < 0.0 {
                return Err(QuoteError::invalid_input(
                    field,
                    value.to_string(),
                    "Dimension cannot be negative",
                ));
            }
        }
        if self.ceiling_type.is_cathedral() && self.cathedral_peak_ft <= self.height_ft {
            return Err(QuoteError::invalid_input(
                "cathedral_peak_ft",
                self.cathedral_peak_ft.to_string(),
                "Peak height must exceed eave height for a cathedral ceiling",
            ));
        }
        Ok(())
    }

    /// Write the cached totals from a freshly computed summary.
    ///
    /// This is the only mutation path for the cached fields, so the stored
    /// figures always come from the same aggregator that produced the
    /// on-screen preview.
    pub fn apply_summary(&mut self, summary: &PricingSummary) {
        self.gallon_usage = summary.gallons.total().value();
        self.labor_total = summary.labor_total.value();
        self.materials_total = summary.materials_total.value();
        self.grand_total = summary.grand_total.value();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_creation() {
        let room = Room::new("Office", 12.0, 10.0, 8.0);
        assert_eq!(room.name, "Office");
        assert_eq!(room.floor, 1);
        assert_eq!(room.coats_walls, 1);
        assert!(room.paint_walls.is_none());
        assert!(!room.has_closet());
    }

    #[test]
    fn test_closet_count() {
        let mut room = Room::new("Bedroom", 14.0, 12.0, 8.0);
        room.single_door_closets = 1;
        room.double_door_closets = 1;
        assert_eq!(room.closet_count(), 2);
        assert!(room.has_closet());
    }

    #[test]
    fn test_validate_rejects_negative() {
        let mut room = Room::new("Bad", 12.0, 10.0, 8.0);
        room.width_ft = -4.0;
        let err = room.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_validate_rejects_nan() {
        let mut room = Room::new("Bad", 12.0, 10.0, 8.0);
        room.length_ft = f64::NAN;
        assert!(room.validate().is_err());
    }

    #[test]
    fn test_validate_cathedral_peak() {
        let mut room = Room::new("Loft", 16.0, 12.0, 10.0);
        room.ceiling_type = CeilingType::Cathedral;
        room.cathedral_peak_ft = 9.0; // below eave
        assert!(room.validate().is_err());

        room.cathedral_peak_ft = 13.0;
        assert!(room.validate().is_ok());
    }

    #[test]
    fn test_serde_defaults_fill_in() {
        let json = r#"{
            "id": "7f2c1a9e-1234-5678-9abc-def012345678",
            "name": "Den",
            "length_ft": 11.0,
            "width_ft": 9.0,
            "height_ft": 8.0
        }"#;
        let room: Room = serde_json::from_str(json).unwrap();
        assert_eq!(room.coats_walls, 1);
        assert_eq!(room.ceiling_type, CeilingType::Flat);
        assert!(room.paint_doors.is_none());
        assert_eq!(room.grand_total, 0.0);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let mut room = Room::new("Master", 18.0, 14.0, 10.0);
        room.ceiling_type = CeilingType::Cathedral;
        room.cathedral_peak_ft = 12.0;
        room.paint_doors = Some(false);
        let json = serde_json::to_string(&room).unwrap();
        let roundtrip: Room = serde_json::from_str(&json).unwrap();
        assert_eq!(room, roundtrip);
    }
}
