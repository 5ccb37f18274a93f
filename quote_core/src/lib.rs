//! # quote_core - House Painting Estimate Engine
//!
//! `quote_core` is the computational heart of Brushquote. It turns a room's
//! raw dimensions and a three-tier set of inclusion flags into paint
//! quantities and dollar totals, with a clean, JSON-serializable API so the
//! same engine backs both the live editor preview and the persisted quote.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **One code path**: preview and saved totals come from the same call
//!
//! ## Quick Start
//!
//! ```rust
//! use quote_core::project::ProjectDefaults;
//! use quote_core::quote::QuoteBuilder;
//! use quote_core::rooms::Room;
//! use quote_core::settings::{GeometryConstants, PricingSettings};
//! use quote_core::pricing::estimate_room;
//!
//! let room = Room::new("Living Room", 20.0, 15.0, 9.0);
//! let summary = estimate_room(
//!     &room,
//!     &ProjectDefaults::default(),
//!     &QuoteBuilder::new(),
//!     &PricingSettings::default(),
//!     &GeometryConstants::default(),
//! );
//! assert!(summary.grand_total.value() > 0.0);
//! ```
//!
//! ## Modules
//!
//! - [`project`] - Project container, metadata, and project-tier defaults
//! - [`rooms`] - The room input record and its override flags
//! - [`quote`] - Quote-tier settings (category flags, floor/room scope)
//! - [`settings`] - Rate table and user-adjustable geometry constants
//! - [`pricing`] - Inclusion resolver, geometry resolver, pricing aggregator
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod errors;
pub mod pricing;
pub mod project;
pub mod quote;
pub mod rooms;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{QuoteError, QuoteResult};
pub use pricing::{estimate_room, PricingSummary, RoomGeometry, SurfaceInclusions};
pub use project::{Project, ProjectDefaults, ProjectMetadata};
pub use quote::QuoteBuilder;
pub use rooms::{CeilingType, Room};
pub use settings::{GeometryConstants, PricingSettings};
