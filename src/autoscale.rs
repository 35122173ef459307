//! Auto-scaling configuration.
//!
//! Turns the raw data extent tracked by [`ExpandingLimits`] into the limits a
//! view should display: margins around the data, and padding for axes whose
//! data collapsed to a single value.

use crate::error::Result;
use crate::expanding::ExpandingLimits;
use crate::limits::{pad_range, AxisLimits};

/// Default horizontal margin, as a fraction of the span on each side.
pub const DEFAULT_HORIZONTAL_MARGIN: f64 = 0.05;

/// Default vertical margin, as a fraction of the span on each side.
pub const DEFAULT_VERTICAL_MARGIN: f64 = 0.1;

/// Default padding applied on each side of a zero-span axis.
pub const DEFAULT_ZERO_SPAN_PADDING: f64 = 1.0;

/// Margin settings for fitting limits to data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoScale {
    horizontal_margin: f64,
    vertical_margin: f64,
    zero_span_padding: f64,
}

impl Default for AutoScale {
    fn default() -> Self {
        Self::new()
    }
}

/// Negative and non-finite values collapse to zero.
fn sanitize(v: f64) -> f64 {
    if v.is_finite() {
        v.max(0.0)
    } else {
        0.0
    }
}

impl AutoScale {
    /// Create the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            horizontal_margin: DEFAULT_HORIZONTAL_MARGIN,
            vertical_margin: DEFAULT_VERTICAL_MARGIN,
            zero_span_padding: DEFAULT_ZERO_SPAN_PADDING,
        }
    }

    /// Configuration that leaves the data extent untouched.
    #[must_use]
    pub const fn tight() -> Self {
        Self { horizontal_margin: 0.0, vertical_margin: 0.0, zero_span_padding: 0.0 }
    }

    /// Set both margins.
    #[must_use]
    pub fn margins(self, horizontal: f64, vertical: f64) -> Self {
        self.horizontal_margin(horizontal).vertical_margin(vertical)
    }

    /// Set the horizontal margin fraction.
    #[must_use]
    pub fn horizontal_margin(mut self, fraction: f64) -> Self {
        self.horizontal_margin = sanitize(fraction);
        self
    }

    /// Set the vertical margin fraction.
    #[must_use]
    pub fn vertical_margin(mut self, fraction: f64) -> Self {
        self.vertical_margin = sanitize(fraction);
        self
    }

    /// Set the padding used when an axis has zero span.
    #[must_use]
    pub fn zero_span_padding(mut self, padding: f64) -> Self {
        self.zero_span_padding = sanitize(padding);
        self
    }

    /// Current `(horizontal, vertical)` margin fractions.
    #[must_use]
    pub const fn margin_fractions(&self) -> (f64, f64) {
        (self.horizontal_margin, self.vertical_margin)
    }

    /// Compute display limits for the data seen by `tracker`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnsetBounds`] if an axis has no data yet.
    pub fn apply(&self, tracker: &ExpandingLimits) -> Result<AxisLimits> {
        let data = tracker.try_limits()?;
        let (left, right) = self.fit_axis(data.left, data.right, self.horizontal_margin);
        let (bottom, top) = self.fit_axis(data.bottom, data.top, self.vertical_margin);
        Ok(AxisLimits::new(left, right, bottom, top))
    }

    fn fit_axis(&self, min: f64, max: f64, margin: f64) -> (f64, f64) {
        let span = max - min;
        if !span.is_finite() {
            return (min, max);
        }
        if span == 0.0 {
            return (min - self.zero_span_padding, max + self.zero_span_padding);
        }
        pad_range(min, max, margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Side};
    use approx::assert_relative_eq;

    #[test]
    fn test_default_margins() {
        let auto = AutoScale::default();
        assert_eq!(auto.margin_fractions(), (DEFAULT_HORIZONTAL_MARGIN, DEFAULT_VERTICAL_MARGIN));
    }

    #[test]
    fn test_apply_margins() {
        let tracker: ExpandingLimits = [(0.0, 0.0), (10.0, 20.0)].into_iter().collect();
        let l = AutoScale::new().margins(0.1, 0.25).apply(&tracker).unwrap();
        assert_relative_eq!(l.left, -1.0);
        assert_relative_eq!(l.right, 11.0);
        assert_relative_eq!(l.bottom, -5.0);
        assert_relative_eq!(l.top, 25.0);
    }

    #[test]
    fn test_tight_is_identity() {
        let tracker: ExpandingLimits = [(1.0, 2.0), (3.0, 5.0)].into_iter().collect();
        let l = AutoScale::tight().apply(&tracker).unwrap();
        assert_eq!(l, tracker.limits());
    }

    #[test]
    fn test_zero_span_is_padded() {
        let mut tracker = ExpandingLimits::new();
        tracker.expand(4.0, -2.0);
        let l = AutoScale::new().zero_span_padding(0.5).apply(&tracker).unwrap();
        assert_eq!(l, AxisLimits::new(3.5, 4.5, -2.5, -1.5));
    }

    #[test]
    fn test_tight_keeps_infinite_extent() {
        let tracker: ExpandingLimits = [(0.0, 0.0), (f64::INFINITY, 1.0)].into_iter().collect();
        let l = AutoScale::tight().apply(&tracker).unwrap();
        assert_eq!(l, tracker.limits());
        assert_eq!(l.right, f64::INFINITY);
    }

    #[test]
    fn test_infinite_extent_keeps_bounds_with_margins() {
        let tracker: ExpandingLimits = [(0.0, 0.0), (f64::INFINITY, 1.0)].into_iter().collect();
        let l = AutoScale::new().margins(0.1, 0.5).apply(&tracker).unwrap();
        assert_eq!((l.left, l.right), (0.0, f64::INFINITY));
        assert_relative_eq!(l.bottom, -0.5);
        assert_relative_eq!(l.top, 1.5);
    }

    #[test]
    fn test_single_infinite_point_not_nan() {
        let mut tracker = ExpandingLimits::new();
        tracker.expand(f64::INFINITY, 1.0);
        let l = AutoScale::default().apply(&tracker).unwrap();
        assert_eq!((l.left, l.right), (f64::INFINITY, f64::INFINITY));
        assert_eq!(l, AxisLimits::new(f64::INFINITY, f64::INFINITY, 0.0, 2.0));
    }

    #[test]
    fn test_unset_axis_errors() {
        let mut tracker = ExpandingLimits::new();
        assert_eq!(
            AutoScale::new().apply(&tracker),
            Err(Error::UnsetBounds { side: Side::Left })
        );

        tracker.expand(1.0, f64::NAN);
        assert_eq!(
            AutoScale::new().apply(&tracker),
            Err(Error::UnsetBounds { side: Side::Bottom })
        );
    }

    #[test]
    fn test_invalid_settings_clamped() {
        let auto = AutoScale::new().margins(-0.5, f64::NAN).zero_span_padding(f64::INFINITY);
        assert_eq!(auto, AutoScale::tight());
    }
}
