//! # Trueno-Limits
//!
//! Axis-limits tracking for 2D plots.
//!
//! A plot view feeds the data it displays into an [`ExpandingLimits`] tracker,
//! reads back the smallest [`AxisLimits`] box covering that data, and uses it to
//! auto-scale its axes.
//!
//! ## Features
//!
//! - **NaN tolerant**: NaN samples are skipped per axis instead of poisoning the range
//! - **Explicit unset state**: each side is unset until data reaches it
//! - **Auto-scaling**: margins and zero-span padding via [`AutoScale`]
//! - **Data-to-pixel scales**: [`LinearScale`] built straight from a limits box
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_limits::prelude::*;
//!
//! let mut tracker = ExpandingLimits::from_limits(AxisLimits::new(0.0, 10.0, 0.0, 10.0));
//! tracker.expand(15.0, 15.0);
//! assert_eq!(tracker.limits(), AxisLimits::new(0.0, 15.0, 0.0, 15.0));
//!
//! let view = AutoScale::tight().apply(&tracker)?;
//! let x = LinearScale::horizontal(&view, (0.0, 800.0))?;
//! assert!((x.scale(7.5) - 400.0).abs() < 1e-9);
//! # Ok::<(), trueno_limits::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for the geometry, limits and tracker types

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Geometric primitives (points, rectangles).
pub mod geometry;

/// Finalized axis-limits box.
pub mod limits;

/// Expanding bounding-box accumulator.
pub mod expanding;

// ============================================================================
// View Support Modules
// ============================================================================

/// Margin configuration for fitting limits to data.
pub mod autoscale;

/// Scale functions for data-to-pixel mappings.
pub mod scale;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-limits operations.
pub mod error;

pub use autoscale::AutoScale;
pub use error::{Error, Result};
pub use expanding::ExpandingLimits;
pub use limits::AxisLimits;
pub use scale::LinearScale;

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use trueno_limits::prelude::*;
/// ```
pub mod prelude {
    pub use crate::autoscale::AutoScale;
    pub use crate::error::{Axis, Error, Result, Side};
    pub use crate::expanding::ExpandingLimits;
    pub use crate::geometry::{Point, Rect};
    pub use crate::limits::AxisLimits;
    pub use crate::scale::{LinearScale, Scale};
}
