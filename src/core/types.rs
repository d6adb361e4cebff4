use std::fmt;

use serde::{Deserialize, Serialize};

/// Canvas point in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[must_use]
    pub fn translated(self, vector: Vector) -> Self {
        Self::new(self.x + vector.x, self.y + vector.y)
    }

    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }
}

/// Displacement in pixel space, used for tick-mark directions and label offsets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[must_use]
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    #[must_use]
    pub fn negated(self) -> Self {
        Self::new(-self.x, -self.y)
    }

    #[must_use]
    pub fn dot(self, other: Vector) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Unit vector with this direction, or `None` for a zero or non-finite vector.
    #[must_use]
    pub fn normalized(self) -> Option<Self> {
        let length = self.length();
        if !length.is_finite() || length == 0.0 {
            return None;
        }
        Some(self.scaled(1.0 / length))
    }
}

/// Axis-aligned bounding box reported by label layout services.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Stable identity root for one axis instance.
///
/// Every drawn primitive derives its id from this token plus a role suffix,
/// so external animation and diffing systems can match primitives across
/// repaints.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxisId(String);

impl AxisId {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn raw(&self) -> &str {
        &self.0
    }

    /// Child id for one primitive owned by this axis, e.g. `axis-x-ticks`.
    #[must_use]
    pub fn scoped(&self, suffix: impl fmt::Display) -> String {
        format!("{}-{suffix}", self.0)
    }
}

impl fmt::Display for AxisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{AxisId, Point, Vector};

    #[test]
    fn scoped_ids_are_prefixed_with_the_axis_id() {
        let id = AxisId::new("axis-x");
        assert_eq!(id.scoped("ticks"), "axis-x-ticks");
        assert_eq!(id.scoped(format!("label-{}", 0.5)), "axis-x-label-0.5");
    }

    #[test]
    fn translated_point_applies_the_vector() {
        let moved = Point::new(10.0, 20.0).translated(Vector::new(-4.0, 6.0));
        assert_eq!(moved, Point::new(6.0, 26.0));
    }

    #[test]
    fn zero_vector_has_no_normalized_direction() {
        assert!(Vector::new(0.0, 0.0).normalized().is_none());
        assert!(Vector::new(f64::NAN, 1.0).normalized().is_none());
    }

    #[test]
    fn normalized_vector_has_unit_length() {
        let unit = Vector::new(3.0, 4.0).normalized().expect("non-zero vector");
        assert!((unit.length() - 1.0).abs() <= 1e-12);
    }
}
