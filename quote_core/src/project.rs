//! # Project Container
//!
//! A [`Project`] owns everything one estimate job needs: the rooms, the
//! project-tier paint defaults, the quote-tier settings, the rate table,
//! and the geometry constants. It is a plain serde struct; where it is
//! stored is the caller's concern.
//!
//! The container never prices anything itself. Cached room totals are
//! refreshed by re-running [`PricingSummary::calculate`], so the engine
//! stays the single source of truth for every number the project holds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::errors::{QuoteError, QuoteResult};
use crate::pricing::PricingSummary;
use crate::quote::QuoteBuilder;
use crate::rooms::Room;
use crate::settings::{GeometryConstants, PricingSettings};
use crate::units::Dollars;

/// Current project schema version.
///
/// Bump the major component on breaking field changes; loading rejects a
/// file whose major differs.
pub const SCHEMA_VERSION: &str = "1.0.0";

fn major_version(version: &str) -> &str {
    version.split('.').next().unwrap_or(version)
}

/// Project identity and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    pub name: String,
    #[serde(default)]
    pub client_name: Option<String>,
    pub version: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl ProjectMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        ProjectMetadata {
            name: name.into(),
            client_name: None,
            version: SCHEMA_VERSION.to_string(),
            created_at: now,
            modified_at: now,
        }
    }
}

/// Project-tier paint flags.
///
/// The broadest of the three tiers: these apply to every room unless a
/// quote or room flag overrides them. All default to `None` so a fresh
/// project defers entirely to the category defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProjectDefaults {
    pub paint_walls: Option<bool>,
    pub paint_ceilings: Option<bool>,
    pub paint_trim: Option<bool>,
    pub paint_baseboard: Option<bool>,
    pub paint_windows: Option<bool>,
    pub paint_doors: Option<bool>,
    pub paint_jambs: Option<bool>,
    pub crown_moulding: Option<bool>,
    pub accent_walls: Option<bool>,
    pub closet_interiors: Option<bool>,
}

/// One estimate job: rooms plus all three settings tiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub metadata: ProjectMetadata,
    pub defaults: ProjectDefaults,
    pub quote: QuoteBuilder,
    pub pricing: PricingSettings,
    pub geometry: GeometryConstants,
    pub rooms: HashMap<Uuid, Room>,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Project {
            metadata: ProjectMetadata::new(name),
            defaults: ProjectDefaults::default(),
            quote: QuoteBuilder::new(),
            pricing: PricingSettings::default(),
            geometry: GeometryConstants::default(),
            rooms: HashMap::new(),
        }
    }

    /// Update the modified timestamp
    pub fn touch(&mut self) {
        self.metadata.modified_at = Utc::now();
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Add a room and return its id
    pub fn add_room(&mut self, room: Room) -> Uuid {
        let id = room.id;
        self.rooms.insert(id, room);
        self.touch();
        id
    }

    pub fn remove_room(&mut self, room_id: &Uuid) -> QuoteResult<Room> {
        let room = self
            .rooms
            .remove(room_id)
            .ok_or_else(|| QuoteError::room_not_found(room_id.to_string()))?;
        self.touch();
        Ok(room)
    }

    pub fn get_room(&self, room_id: &Uuid) -> QuoteResult<&Room> {
        self.rooms
            .get(room_id)
            .ok_or_else(|| QuoteError::room_not_found(room_id.to_string()))
    }

    pub fn get_room_mut(&mut self, room_id: &Uuid) -> QuoteResult<&mut Room> {
        self.rooms
            .get_mut(room_id)
            .ok_or_else(|| QuoteError::room_not_found(room_id.to_string()))
    }

    /// Price one room with the project's current settings.
    pub fn estimate(&self, room: &Room) -> PricingSummary {
        PricingSummary::calculate(
            room,
            &self.defaults,
            &self.quote,
            &self.pricing,
            &self.geometry,
        )
    }

    /// Re-run the aggregator for one room and write its cached totals.
    pub fn refresh_room_summary(&mut self, room_id: &Uuid) -> QuoteResult<()> {
        let summary = self.estimate(self.get_room(room_id)?);
        self.get_room_mut(room_id)?.apply_summary(&summary);
        self.touch();
        Ok(())
    }

    /// Refresh the cached totals on every room.
    pub fn refresh_all_summaries(&mut self) {
        let summaries: Vec<(Uuid, PricingSummary)> = self
            .rooms
            .values()
            .map(|room| (room.id, self.estimate(room)))
            .collect();
        for (id, summary) in summaries {
            if let Some(room) = self.rooms.get_mut(&id) {
                room.apply_summary(&summary);
            }
        }
        self.touch();
    }

    /// Rooms passing the quote's floor and selection scope.
    pub fn rooms_in_scope(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values().filter(|r| self.quote.room_in_scope(r))
    }

    /// Sum of the whole-dollar room totals for every in-scope room.
    pub fn project_total(&self) -> Dollars {
        Dollars(
            self.rooms_in_scope()
                .map(|r| self.estimate(r).grand_total.value())
                .sum(),
        )
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> QuoteResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| QuoteError::SerializationError {
            reason: e.to_string(),
        })
    }

    /// Deserialize from JSON, rejecting an incompatible schema major.
    pub fn from_json(json: &str) -> QuoteResult<Self> {
        let project: Project =
            serde_json::from_str(json).map_err(|e| QuoteError::SerializationError {
                reason: e.to_string(),
            })?;
        if major_version(&project.metadata.version) != major_version(SCHEMA_VERSION) {
            return Err(QuoteError::VersionMismatch {
                file_version: project.metadata.version.clone(),
                expected_version: SCHEMA_VERSION.to_string(),
            });
        }
        Ok(project)
    }
}
