//! Error types for trueno-limits operations.

use std::fmt;

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// One side of an axis-limits box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Minimum of the horizontal axis.
    Left,
    /// Maximum of the horizontal axis.
    Right,
    /// Minimum of the vertical axis.
    Bottom,
    /// Maximum of the vertical axis.
    Top,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Side::Left => "left",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Top => "top",
        };
        f.write_str(name)
    }
}

/// Plot axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal (x) axis.
    Horizontal,
    /// Vertical (y) axis.
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => f.write_str("horizontal"),
            Axis::Vertical => f.write_str("vertical"),
        }
    }
}

/// Errors that can occur in trueno-limits operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A bound was requested before any data reached it.
    #[error("Unset bound: no data has been observed on the {side} side")]
    UnsetBounds {
        /// First side found unset.
        side: Side,
    },

    /// Minimum is greater than maximum on an axis.
    #[error("Inverted {axis} bounds: min {min} > max {max}")]
    InvertedBounds {
        /// Offending axis.
        axis: Axis,
        /// Minimum value.
        min: f64,
        /// Maximum value.
        max: f64,
    },

    /// A bound is NaN or infinite where a real value is required.
    #[error("Non-finite bound on the {side} side")]
    NonFinite {
        /// Offending side.
        side: Side,
    },

    /// Scale domain error (e.g., zero-width domain).
    #[error("Scale domain error: {0}")]
    ScaleDomain(String),
}
