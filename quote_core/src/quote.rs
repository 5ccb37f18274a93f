//! # Quote-Tier Settings
//!
//! [`QuoteBuilder`] holds everything the estimator decides at the quote
//! level rather than per room: category include flags, which floors and
//! rooms are in scope, the primer switch, and an optional project-wide
//! coat override.
//!
//! Like the room flags, the category flags are `Option<bool>`: `None`
//! defers to the project tier and the category default, an explicit value
//! participates in [`crate::pricing::inclusions::combine_tiers`].

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::rooms::Room;

fn default_true() -> bool {
    true
}

/// Quote-level category flags and scope selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteBuilder {
    // === Category flags (None = no opinion) ===
    pub include_walls: Option<bool>,
    pub include_ceilings: Option<bool>,
    pub include_trim: Option<bool>,
    pub include_windows: Option<bool>,
    pub include_doors: Option<bool>,
    pub include_jambs: Option<bool>,
    pub include_baseboard: Option<bool>,
    pub include_crown_moulding: Option<bool>,
    pub include_accent_walls: Option<bool>,
    pub include_closet_interiors: Option<bool>,

    // === Floor scope ===
    #[serde(default = "default_true")]
    pub include_floor_1: bool,
    #[serde(default = "default_true")]
    pub include_floor_2: bool,
    #[serde(default = "default_true")]
    pub include_floor_3: bool,
    #[serde(default = "default_true")]
    pub include_floor_4: bool,
    #[serde(default = "default_true")]
    pub include_floor_5: bool,

    // === Room scope ===
    /// When true, every room on an included floor is in scope and
    /// `included_room_ids` is ignored
    #[serde(default = "default_true")]
    pub include_all_rooms: bool,
    pub included_room_ids: Vec<Uuid>,

    // === Extras ===
    /// Price one coat of primer over included wall area
    pub include_primer: bool,
    /// When set, replaces every per-room coat count uniformly
    pub coats_override: Option<u32>,
}

impl Default for QuoteBuilder {
    fn default() -> Self {
        QuoteBuilder {
            include_walls: None,
            include_ceilings: None,
            include_trim: None,
            include_windows: None,
            include_doors: None,
            include_jambs: None,
            include_baseboard: None,
            include_crown_moulding: None,
            include_accent_walls: None,
            include_closet_interiors: None,
            include_floor_1: true,
            include_floor_2: true,
            include_floor_3: true,
            include_floor_4: true,
            include_floor_5: true,
            include_all_rooms: true,
            included_room_ids: Vec::new(),
            include_primer: false,
            coats_override: None,
        }
    }
}

impl QuoteBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the primer switch (builder style)
    pub fn with_primer(mut self, include: bool) -> Self {
        self.include_primer = include;
        self
    }

    /// Set a uniform coat override (builder style)
    pub fn with_coats_override(mut self, coats: u32) -> Self {
        self.coats_override = Some(coats);
        self
    }

    /// Whether a given floor number is in scope.
    ///
    /// Floors beyond the five switches are always in scope; the switches
    /// exist for the common residential case.
    pub fn includes_floor(&self, floor: u8) -> bool {
        match floor {
            1 => self.include_floor_1,
            2 => self.include_floor_2,
            3 => self.include_floor_3,
            4 => self.include_floor_4,
            5 => self.include_floor_5,
            _ => true,
        }
    }

    /// Whether a room passes both the floor scope and the room selection.
    pub fn room_in_scope(&self, room: &Room) -> bool {
        if !self.includes_floor(room.floor) {
            return false;
        }
        self.include_all_rooms || self.included_room_ids.contains(&room.id)
    }
}
