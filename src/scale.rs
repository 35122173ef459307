//! Scale functions for data-to-pixel mappings.
//!
//! A view builds one [`LinearScale`] per axis from its current [`AxisLimits`]
//! and uses it to place data on screen.

use crate::error::{Error, Result};
use crate::expanding::ExpandingLimits;
use crate::limits::AxisLimits;

/// Trait for scale functions that map domain values to range values.
pub trait Scale<D, R> {
    /// Transform a domain value to a range value.
    fn scale(&self, value: D) -> R;

    /// Get the domain extent.
    fn domain(&self) -> (D, D);

    /// Get the range extent.
    fn range(&self) -> (R, R);
}

/// Linear scale for continuous-to-continuous mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_min: f64,
    domain_max: f64,
    range_min: f64,
    range_max: f64,
}

impl LinearScale {
    /// Create a new linear scale.
    ///
    /// # Errors
    ///
    /// Returns an error if the domain is not finite or domain_min equals domain_max.
    /// Any nonzero width is accepted, however small its magnitude.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Result<Self> {
        if !domain.0.is_finite() || !domain.1.is_finite() {
            return Err(Error::ScaleDomain("Domain bounds must be finite".to_string()));
        }

        if domain.0 == domain.1 {
            return Err(Error::ScaleDomain("Domain min and max cannot be equal".to_string()));
        }

        Ok(Self {
            domain_min: domain.0,
            domain_max: domain.1,
            range_min: range.0,
            range_max: range.1,
        })
    }

    /// Map the horizontal axis of `limits` onto `pixels` (left to right).
    ///
    /// # Errors
    ///
    /// Returns an error if the horizontal axis is unset or has zero span.
    pub fn horizontal(limits: &AxisLimits, pixels: (f64, f64)) -> Result<Self> {
        Self::new(limits.x_range(), pixels)
    }

    /// Map the vertical axis of `limits` onto `pixels`.
    ///
    /// `top` maps to `pixels.0`, since screen rows grow downward.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertical axis is unset or has zero span.
    pub fn vertical(limits: &AxisLimits, pixels: (f64, f64)) -> Result<Self> {
        Self::new((limits.top, limits.bottom), pixels)
    }

    /// Create a scale from data extent, skipping NaN samples.
    #[must_use]
    pub fn from_data(data: &[f64], range: (f64, f64)) -> Option<Self> {
        let mut extent = ExpandingLimits::new();
        for &v in data {
            extent.expand_x(v);
        }

        let (min, max) = (extent.left()?, extent.right()?);
        Self::new((min, max), range).ok()
    }

    /// Invert the scale (range to domain).
    #[must_use]
    pub fn invert(&self, value: f64) -> f64 {
        let t = (value - self.range_min) / (self.range_max - self.range_min);
        self.domain_min + t * (self.domain_max - self.domain_min)
    }
}

impl Scale<f64, f64> for LinearScale {
    fn scale(&self, value: f64) -> f64 {
        let t = (value - self.domain_min) / (self.domain_max - self.domain_min);
        self.range_min + t * (self.range_max - self.range_min)
    }

    fn domain(&self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    fn range(&self) -> (f64, f64) {
        (self.range_min, self.range_max)
    }
}
