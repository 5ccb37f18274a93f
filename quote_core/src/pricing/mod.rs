//! # Pricing Pipeline
//!
//! The three stages of one room estimate, each a pure function:
//!
//! - [`inclusions`] - collapse the project/quote/room flag tiers into one
//!   verdict per paint category
//! - [`geometry`] - turn dimensions and opening counts into measured
//!   quantities
//! - [`summary`] - price labor and materials and roll up the totals
//!
//! [`estimate_room`] runs the full pipeline. It is the only entry point
//! callers need; the stage types are exported for screens that display
//! intermediates.

pub mod geometry;
pub mod inclusions;
pub mod summary;

pub use geometry::RoomGeometry;
pub use inclusions::{combine_tiers, SurfaceInclusions};
pub use summary::{GallonUsage, LaborBreakdown, PricingSummary};

use crate::project::ProjectDefaults;
use crate::quote::QuoteBuilder;
use crate::rooms::Room;
use crate::settings::{GeometryConstants, PricingSettings};

/// Price one room: resolve inclusions, measure, aggregate.
pub fn estimate_room(
    room: &Room,
    defaults: &ProjectDefaults,
    quote: &QuoteBuilder,
    pricing: &PricingSettings,
    constants: &GeometryConstants,
) -> PricingSummary {
    PricingSummary::calculate(room, defaults, quote, pricing, constants)
}
