//! Expanding bounding-box accumulator.
//!
//! [`ExpandingLimits`] grows to the smallest axis-aligned box covering every
//! point and rectangle it has been fed. Each side starts unset and is set by the
//! first valid sample on its axis; after that it only moves outward.
//!
//! NaN coordinates carry no information and are skipped per axis, so a sample
//! with a NaN `x` still widens the vertical range.
//!
//! ```
//! use trueno_limits::prelude::*;
//!
//! let mut tracker = ExpandingLimits::new();
//! tracker.expand(1.0, 10.0);
//! tracker.expand(5.0, 2.0);
//! tracker.expand(-3.0, 7.0);
//!
//! assert_eq!(tracker.limits(), AxisLimits::new(-3.0, 5.0, 2.0, 10.0));
//! ```

use crate::error::{Error, Result, Side};
use crate::geometry::{Point, Rect};
use crate::limits::AxisLimits;

/// Accumulates the bounding box of observed data.
///
/// Two trackers compare equal when every side is equal, with unset sides equal
/// to each other. Comparing against an [`AxisLimits`] uses IEEE semantics
/// instead, so an unset side never matches.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpandingLimits {
    left: Option<f64>,
    right: Option<f64>,
    bottom: Option<f64>,
    top: Option<f64>,
}

impl ExpandingLimits {
    /// Create a tracker with every side unset.
    #[must_use]
    pub const fn new() -> Self {
        Self { left: None, right: None, bottom: None, top: None }
    }

    /// Create a tracker already covering `seed`.
    #[must_use]
    pub fn from_limits(seed: AxisLimits) -> Self {
        let mut tracker = Self::new();
        tracker.expand_limits(seed);
        log::trace!(target: "trueno_limits", "seeded tracker from {seed}");
        tracker
    }

    /// Create a tracker already covering `seed`.
    #[must_use]
    pub fn from_rect(seed: Rect) -> Self {
        Self::from_limits(seed.into())
    }

    /// Minimum x, if any x has been observed.
    #[must_use]
    pub const fn left(&self) -> Option<f64> {
        self.left
    }

    /// Maximum x, if any x has been observed.
    #[must_use]
    pub const fn right(&self) -> Option<f64> {
        self.right
    }

    /// Minimum y, if any y has been observed.
    #[must_use]
    pub const fn bottom(&self) -> Option<f64> {
        self.bottom
    }

    /// Maximum y, if any y has been observed.
    #[must_use]
    pub const fn top(&self) -> Option<f64> {
        self.top
    }

    /// True once a valid x has been observed.
    #[must_use]
    pub const fn is_x_set(&self) -> bool {
        self.left.is_some()
    }

    /// True once a valid y has been observed.
    #[must_use]
    pub const fn is_y_set(&self) -> bool {
        self.bottom.is_some()
    }

    /// True if nothing has been observed on either axis.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !self.is_x_set() && !self.is_y_set()
    }

    /// `right - left`, or NaN while the horizontal axis is unset.
    #[must_use]
    pub fn horizontal_span(&self) -> f64 {
        match (self.left, self.right) {
            (Some(l), Some(r)) => r - l,
            _ => f64::NAN,
        }
    }

    /// `top - bottom`, or NaN while the vertical axis is unset.
    #[must_use]
    pub fn vertical_span(&self) -> f64 {
        match (self.bottom, self.top) {
            (Some(b), Some(t)) => t - b,
            _ => f64::NAN,
        }
    }

    /// Widen the horizontal range to include `x`. NaN is ignored.
    pub fn expand_x(&mut self, x: f64) {
        if x.is_nan() {
            return;
        }
        self.left = Some(self.left.map_or(x, |l| l.min(x)));
        self.right = Some(self.right.map_or(x, |r| r.max(x)));
    }

    /// Widen the vertical range to include `y`. NaN is ignored.
    pub fn expand_y(&mut self, y: f64) {
        if y.is_nan() {
            return;
        }
        self.bottom = Some(self.bottom.map_or(y, |b| b.min(y)));
        self.top = Some(self.top.map_or(y, |t| t.max(y)));
    }

    /// Widen both ranges; each axis is handled independently.
    pub fn expand(&mut self, x: f64, y: f64) {
        self.expand_x(x);
        self.expand_y(y);
    }

    /// Widen to include a single point.
    pub fn expand_point(&mut self, point: impl Into<Point>) {
        let p = point.into();
        self.expand(p.x, p.y);
    }

    /// Widen to include every point, visiting each exactly once.
    pub fn expand_points<I>(&mut self, points: I)
    where
        I: IntoIterator,
        I::Item: Into<Point>,
    {
        for p in points {
            self.expand_point(p);
        }
    }

    /// Widen to include an axis-aligned rectangle.
    ///
    /// Only two opposite corners are needed for an axis-aligned box.
    pub fn expand_rect(&mut self, rect: Rect) {
        self.expand_point(rect.top_left());
        self.expand_point(rect.bottom_right());
    }

    /// Widen to include another limits box.
    pub fn expand_limits(&mut self, limits: AxisLimits) {
        self.expand_rect(limits.to_rect());
    }

    /// Return to the empty state.
    pub fn reset(&mut self) {
        log::trace!(target: "trueno_limits", "reset tracker at {}", self.limits());
        *self = Self::new();
    }

    /// Snapshot of the current bounds, with unset sides as NaN.
    #[must_use]
    pub fn limits(&self) -> AxisLimits {
        AxisLimits::new(
            self.left.unwrap_or(f64::NAN),
            self.right.unwrap_or(f64::NAN),
            self.bottom.unwrap_or(f64::NAN),
            self.top.unwrap_or(f64::NAN),
        )
    }

    /// Snapshot of the current bounds, requiring every side to be set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsetBounds`] naming the first unset side.
    pub fn try_limits(&self) -> Result<AxisLimits> {
        let require = |v: Option<f64>, side: Side| {
            v.ok_or_else(|| {
                log::trace!(target: "trueno_limits", "finalize failed: {side} unset");
                Error::UnsetBounds { side }
            })
        };
        Ok(AxisLimits::new(
            require(self.left, Side::Left)?,
            require(self.right, Side::Right)?,
            require(self.bottom, Side::Bottom)?,
            require(self.top, Side::Top)?,
        ))
    }

    /// Compare the current snapshot against `other` with IEEE float equality.
    #[must_use]
    pub fn same_limits(&self, other: &AxisLimits) -> bool {
        self.limits().same_as(other)
    }
}

impl From<AxisLimits> for ExpandingLimits {
    fn from(seed: AxisLimits) -> Self {
        Self::from_limits(seed)
    }
}

impl From<Rect> for ExpandingLimits {
    fn from(seed: Rect) -> Self {
        Self::from_rect(seed)
    }
}

impl PartialEq<AxisLimits> for ExpandingLimits {
    fn eq(&self, other: &AxisLimits) -> bool {
        self.same_limits(other)
    }
}

impl PartialEq<ExpandingLimits> for AxisLimits {
    fn eq(&self, other: &ExpandingLimits) -> bool {
        other.same_limits(self)
    }
}

impl<P: Into<Point>> Extend<P> for ExpandingLimits {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        self.expand_points(iter);
    }
}

impl<P: Into<Point>> FromIterator<P> for ExpandingLimits {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        let mut tracker = Self::new();
        tracker.expand_points(iter);
        tracker
    }
}


// ============================================================================
// Property-based tests with proptest
// ============================================================================
