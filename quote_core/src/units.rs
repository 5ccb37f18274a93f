//! # Unit Types
//!
//! Type-safe wrappers for estimating units. These provide compile-time
//! safety against unit confusion while remaining lightweight (just f64
//! wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - Painting estimates use a small, consistent set of units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## US Customary Units (Primary)
//!
//! The engine works exclusively in imperial units; metric display is a
//! presentation concern applied after the engine returns:
//! - Length: feet (ft), inches (in)
//! - Area: square feet (sqft)
//! - Run length: linear feet (LF)
//! - Paint volume: gallons
//! - Money: US dollars
//!
//! ## Example
//!
//! ```rust
//! use quote_core::units::{Feet, Inches, Gallons};
//!
//! let trim = Inches(3.5);
//! let trim_ft: Feet = trim.into();
//! assert!((trim_ft.0 - 3.5 / 12.0).abs() < 1e-12);
//!
//! // Paint is purchased down to half-gallon increments only
//! assert_eq!(Gallons::ceil_to_half(2.1), Gallons(2.5));
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Feet> for Inches {
    fn from(ft: Feet) -> Self {
        Inches(ft.0 * 12.0)
    }
}

impl From<Inches> for Feet {
    fn from(inches: Inches) -> Self {
        Feet(inches.0 / 12.0)
    }
}

// ============================================================================
// Area and Run Length
// ============================================================================

/// Area in square feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqFt(pub f64);

/// Run length in linear feet (baseboard, crown, handrail)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinFt(pub f64);

// ============================================================================
// Paint Volume
// ============================================================================

/// Paint volume in US gallons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gallons(pub f64);

impl Gallons {
    /// Round a raw gallon requirement up to the nearest half gallon.
    ///
    /// Paint is sold in partial-gallon increments only down to halves, so
    /// 2.1 raw gallons means buying 2.5. Exact halves stay put (2.5 -> 2.5)
    /// and anything above rounds up (2.51 -> 3.0). Non-finite or
    /// non-positive input yields zero.
    pub fn ceil_to_half(raw: f64) -> Self {
        if !raw.is_finite() || raw <= 0.0 {
            Gallons(0.0)
        } else {
            Gallons((raw * 2.0).ceil() / 2.0)
        }
    }
}

// ============================================================================
// Money
// ============================================================================

/// US dollars
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dollars(pub f64);

impl Dollars {
    /// Round a raw dollar amount to cent precision (displayed subtotals).
    pub fn to_cents(raw: f64) -> Self {
        Dollars((raw * 100.0).round() / 100.0)
    }

    /// Round a raw dollar amount to the nearest whole dollar.
    ///
    /// Persisted and displayed grand totals round once, here, from the
    /// unrounded sum - never by accumulating per-category rounding.
    pub fn to_whole(raw: f64) -> Self {
        Dollars(raw.round())
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Feet);
impl_arithmetic!(Inches);
impl_arithmetic!(SqFt);
impl_arithmetic!(LinFt);
impl_arithmetic!(Gallons);
impl_arithmetic!(Dollars);
