//! Geometric primitives in data space.
//!
//! Coordinates follow plotting convention: y grows upward, so `top >= bottom`.

/// A point in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True if both coordinates are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// Axis-aligned rectangle in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Minimum x.
    pub left: f64,
    /// Maximum x.
    pub right: f64,
    /// Minimum y.
    pub bottom: f64,
    /// Maximum y.
    pub top: f64,
}

impl Rect {
    /// Create a rectangle from its four edges, taken as given.
    #[must_use]
    pub const fn new(left: f64, right: f64, bottom: f64, top: f64) -> Self {
        Self { left, right, bottom, top }
    }

    /// Create a rectangle spanning two arbitrary corners.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            left: a.x.min(b.x),
            right: a.x.max(b.x),
            bottom: a.y.min(b.y),
            top: a.y.max(b.y),
        }
    }

    /// Upper-left corner.
    #[must_use]
    pub const fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Lower-right corner.
    #[must_use]
    pub const fn bottom_right(&self) -> Point {
        Point::new(self.right, self.bottom)
    }

    /// Horizontal extent.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Vertical extent.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_conversions() {
        assert_eq!(Point::from((1.0, 2.0)), Point::new(1.0, 2.0));
        assert_eq!(Point::from([3.0, -4.0]), Point::new(3.0, -4.0));
        let t: (f64, f64) = Point::new(5.0, 6.0).into();
        assert_eq!(t, (5.0, 6.0));
    }

    #[test]
    fn test_point_is_finite() {
        assert!(Point::new(0.0, 1.0).is_finite());
        assert!(!Point::new(f64::NAN, 1.0).is_finite());
        assert!(!Point::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_rect_from_corners_orders_edges() {
        let r = Rect::from_corners(Point::new(5.0, -1.0), Point::new(-2.0, 3.0));
        assert_eq!(r, Rect::new(-2.0, 5.0, -1.0, 3.0));
        assert!((r.width() - 7.0).abs() < f64::EPSILON);
        assert!((r.height() - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rect_corners() {
        let r = Rect::new(0.0, 4.0, 1.0, 9.0);
        assert_eq!(r.top_left(), Point::new(0.0, 9.0));
        assert_eq!(r.bottom_right(), Point::new(4.0, 1.0));
    }
}
