//! Finalized axis-limits box.
//!
//! [`AxisLimits`] is the value a view uses to set its visible data range. It is
//! plain `Copy` data; a side that has never been set is carried as NaN.

use std::fmt;

use crate::error::{Axis, Error, Result, Side};
use crate::geometry::{Point, Rect};

/// Default decimals used by the `Display` impl when no precision is given.
const DEFAULT_DISPLAY_DECIMALS: usize = 3;

/// Visible data range of a 2D plot.
///
/// Equality follows IEEE float semantics: a NaN (unset) side never compares
/// equal, not even to another NaN side.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisLimits {
    /// Minimum x.
    pub left: f64,
    /// Maximum x.
    pub right: f64,
    /// Minimum y.
    pub bottom: f64,
    /// Maximum y.
    pub top: f64,
}

impl Default for AxisLimits {
    fn default() -> Self {
        Self::UNSET
    }
}

impl AxisLimits {
    /// Limits with every side unset.
    pub const UNSET: Self = Self::new(f64::NAN, f64::NAN, f64::NAN, f64::NAN);

    /// Create limits from four bounds, without validation.
    #[must_use]
    pub const fn new(left: f64, right: f64, bottom: f64, top: f64) -> Self {
        Self { left, right, bottom, top }
    }

    /// Create limits, rejecting non-finite or inverted bounds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFinite`] for NaN or infinite sides and
    /// [`Error::InvertedBounds`] when a minimum exceeds its maximum.
    pub fn try_new(left: f64, right: f64, bottom: f64, top: f64) -> Result<Self> {
        for (side, v) in
            [(Side::Left, left), (Side::Right, right), (Side::Bottom, bottom), (Side::Top, top)]
        {
            if !v.is_finite() {
                return Err(Error::NonFinite { side });
            }
        }

        if left > right {
            return Err(Error::InvertedBounds { axis: Axis::Horizontal, min: left, max: right });
        }
        if bottom > top {
            return Err(Error::InvertedBounds { axis: Axis::Vertical, min: bottom, max: top });
        }

        Ok(Self::new(left, right, bottom, top))
    }

    /// `right - left`; NaN if either side is unset.
    #[must_use]
    pub fn horizontal_span(&self) -> f64 {
        self.right - self.left
    }

    /// `top - bottom`; NaN if either side is unset.
    #[must_use]
    pub fn vertical_span(&self) -> f64 {
        self.top - self.bottom
    }

    /// Midpoint of the horizontal axis.
    #[must_use]
    pub fn horizontal_center(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    /// Midpoint of the vertical axis.
    #[must_use]
    pub fn vertical_center(&self) -> f64 {
        (self.bottom + self.top) / 2.0
    }

    /// Center of the box.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.horizontal_center(), self.vertical_center())
    }

    /// `(left, right)`.
    #[must_use]
    pub const fn x_range(&self) -> (f64, f64) {
        (self.left, self.right)
    }

    /// `(bottom, top)`.
    #[must_use]
    pub const fn y_range(&self) -> (f64, f64) {
        (self.bottom, self.top)
    }

    /// True if all four sides are finite.
    #[must_use]
    pub fn is_real(&self) -> bool {
        self.left.is_finite()
            && self.right.is_finite()
            && self.bottom.is_finite()
            && self.top.is_finite()
    }

    /// True if the point lies inside or on the edge of the box.
    ///
    /// Always false when a side is unset.
    #[must_use]
    pub fn contains(&self, point: impl Into<Point>) -> bool {
        let p = point.into();
        p.x >= self.left && p.x <= self.right && p.y >= self.bottom && p.y <= self.top
    }

    /// Pad each axis by a fraction of its span on both sides.
    ///
    /// An axis with a non-finite span is returned unchanged.
    #[must_use]
    pub fn with_margins(&self, horizontal: f64, vertical: f64) -> Self {
        let (left, right) = pad_range(self.left, self.right, horizontal);
        let (bottom, top) = pad_range(self.bottom, self.top, vertical);
        Self::new(left, right, bottom, top)
    }

    /// Compare all four sides with IEEE float equality.
    ///
    /// Same result as `==`; exists so call sites can name the NaN-sensitive
    /// comparison explicitly.
    #[must_use]
    pub fn same_as(&self, other: &AxisLimits) -> bool {
        self.left == other.left
            && self.right == other.right
            && self.bottom == other.bottom
            && self.top == other.top
    }

    /// Convert to a [`Rect`] with the same edges.
    #[must_use]
    pub const fn to_rect(&self) -> Rect {
        Rect::new(self.left, self.right, self.bottom, self.top)
    }
}

/// Widen `[min, max]` by `fraction` of its span on each side.
///
/// Leaves the range as-is when `fraction` is zero or the span is not finite,
/// since `inf * 0.0` and `inf - inf` are NaN.
pub(crate) fn pad_range(min: f64, max: f64, fraction: f64) -> (f64, f64) {
    let span = max - min;
    if fraction == 0.0 || !span.is_finite() {
        return (min, max);
    }
    let pad = span * fraction;
    (min - pad, max + pad)
}

impl From<Rect> for AxisLimits {
    fn from(r: Rect) -> Self {
        Self::new(r.left, r.right, r.bottom, r.top)
    }
}

impl From<AxisLimits> for Rect {
    fn from(l: AxisLimits) -> Self {
        l.to_rect()
    }
}

impl fmt::Display for AxisLimits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = f.precision().unwrap_or(DEFAULT_DISPLAY_DECIMALS);
        write!(
            f,
            "[{:.prec$}, {:.prec$}]x[{:.prec$}, {:.prec$}]",
            self.left, self.right, self.bottom, self.top,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_spans_and_centers() {
        let l = AxisLimits::new(-2.0, 6.0, 1.0, 4.0);
        assert_relative_eq!(l.horizontal_span(), 8.0);
        assert_relative_eq!(l.vertical_span(), 3.0);
        assert_relative_eq!(l.horizontal_center(), 2.0);
        assert_relative_eq!(l.vertical_center(), 2.5);
        assert_eq!(l.center(), Point::new(2.0, 2.5));
    }

    #[test]
    fn test_unset_spans_are_nan() {
        let l = AxisLimits::UNSET;
        assert!(l.horizontal_span().is_nan());
        assert!(l.vertical_span().is_nan());
        assert!(!l.is_real());
    }

    #[test]
    fn test_try_new_rejects_inverted() {
        let err = AxisLimits::try_new(5.0, 1.0, 0.0, 1.0).unwrap_err();
        assert!(matches!(err, Error::InvertedBounds { axis: Axis::Horizontal, .. }));

        let err = AxisLimits::try_new(0.0, 1.0, 3.0, 2.0).unwrap_err();
        assert!(matches!(err, Error::InvertedBounds { axis: Axis::Vertical, .. }));
    }

    #[test]
    fn test_try_new_rejects_non_finite() {
        let err = AxisLimits::try_new(0.0, 1.0, f64::NAN, 2.0).unwrap_err();
        assert_eq!(err, Error::NonFinite { side: Side::Bottom });

        let err = AxisLimits::try_new(0.0, f64::INFINITY, 0.0, 2.0).unwrap_err();
        assert_eq!(err, Error::NonFinite { side: Side::Right });
    }

    #[test]
    fn test_try_new_accepts_degenerate() {
        let l = AxisLimits::try_new(3.0, 3.0, -1.0, -1.0).unwrap();
        assert!(l.is_real());
        assert_relative_eq!(l.horizontal_span(), 0.0);
    }

    #[test]
    fn test_contains() {
        let l = AxisLimits::new(0.0, 10.0, 0.0, 5.0);
        assert!(l.contains((0.0, 0.0)));
        assert!(l.contains((10.0, 5.0)));
        assert!(l.contains([4.0, 2.0]));
        assert!(!l.contains((10.1, 2.0)));
        assert!(!l.contains((4.0, -0.1)));
        assert!(!AxisLimits::UNSET.contains((0.0, 0.0)));
    }

    #[test]
    fn test_with_margins() {
        let l = AxisLimits::new(0.0, 10.0, 0.0, 20.0).with_margins(0.1, 0.05);
        assert_relative_eq!(l.left, -1.0);
        assert_relative_eq!(l.right, 11.0);
        assert_relative_eq!(l.bottom, -1.0);
        assert_relative_eq!(l.top, 21.0);
    }

    #[test]
    fn test_with_margins_keeps_infinite_axis() {
        let l = AxisLimits::new(0.0, f64::INFINITY, 0.0, 1.0);
        assert_eq!(l.with_margins(0.0, 0.0), l);

        let padded = l.with_margins(0.1, 0.1);
        assert_eq!(padded.left, 0.0);
        assert_eq!(padded.right, f64::INFINITY);
        assert_relative_eq!(padded.bottom, -0.1);
        assert_relative_eq!(padded.top, 1.1);
    }

    #[test]
    fn test_with_margins_single_infinite_value() {
        // inf - inf is NaN; the bounds must survive as given
        let l = AxisLimits::new(f64::INFINITY, f64::INFINITY, -2.0, 2.0);
        let padded = l.with_margins(0.05, 0.0);
        assert_eq!(padded.left, f64::INFINITY);
        assert_eq!(padded.right, f64::INFINITY);
        assert_eq!((padded.bottom, padded.top), (-2.0, 2.0));
    }

    #[test]
    fn test_equality_nan_never_equal() {
        let a = AxisLimits::new(0.0, 1.0, 0.0, 1.0);
        assert_eq!(a, a);
        assert!(a.same_as(&a));

        let b = AxisLimits::new(0.0, 1.0, f64::NAN, f64::NAN);
        assert_ne!(b, b);
        assert!(!b.same_as(&b));
        assert_ne!(AxisLimits::UNSET, AxisLimits::UNSET);
    }

    #[test]
    fn test_rect_round_trip() {
        let r = Rect::new(-1.0, 2.0, -3.0, 4.0);
        let l = AxisLimits::from(r);
        assert_eq!(Rect::from(l), r);
    }

    #[test]
    fn test_display() {
        let l = AxisLimits::new(-3.0, 5.0, 2.0, 10.0);
        assert_eq!(l.to_string(), "[-3.000, 5.000]x[2.000, 10.000]");
        assert_eq!(format!("{l:.1}"), "[-3.0, 5.0]x[2.0, 10.0]");
    }
}
