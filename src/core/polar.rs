use std::f64::consts::{FRAC_PI_2, TAU};

use smallvec::{SmallVec, smallvec};

use crate::core::coord::{CoordSystem, TitlePlacement};
use crate::core::types::{Point, Vector};
use crate::error::{AxisError, AxisResult};
use crate::render::PathCommand;

/// Circular axis around a center point.
///
/// Normalized tick positions sweep the configured angle range; tick marks and
/// labels extend radially outward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarCoord {
    center: Point,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
}

impl PolarCoord {
    /// Full-circle axis starting at twelve o'clock.
    pub fn new(center: Point, radius: f64) -> AxisResult<Self> {
        Self::with_angle_range(center, radius, -FRAC_PI_2, -FRAC_PI_2 + TAU)
    }

    /// Partial arc between two angles in radians.
    pub fn with_angle_range(
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> AxisResult<Self> {
        if !center.is_finite() {
            return Err(AxisError::InvalidCoord(
                "polar center must be finite".to_owned(),
            ));
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(AxisError::InvalidCoord(
                "polar radius must be finite and > 0".to_owned(),
            ));
        }
        if !start_angle.is_finite() || !end_angle.is_finite() || start_angle == end_angle {
            return Err(AxisError::InvalidCoord(
                "polar angle range must be finite and non-empty".to_owned(),
            ));
        }

        Ok(Self {
            center,
            radius,
            start_angle,
            end_angle,
        })
    }

    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    fn angle_of(&self, value: f64) -> f64 {
        self.start_angle + (self.end_angle - self.start_angle) * value
    }

    fn radial_unit(&self, point: Point) -> Vector {
        Vector::new(point.x - self.center.x, point.y - self.center.y)
            .normalized()
            .unwrap_or(Vector::new(self.start_angle.cos(), self.start_angle.sin()))
    }
}

impl CoordSystem for PolarCoord {
    fn tick_point(&self, value: f64, _index: usize) -> Point {
        let angle = self.angle_of(value);
        Point::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }

    fn tick_end(&self, point: Point, length: f64, index: usize) -> Point {
        point.translated(self.side_vector(length, point, index))
    }

    fn side_vector(&self, offset: f64, point: Point, _index: usize) -> Vector {
        self.radial_unit(point).scaled(offset)
    }

    fn line_path(&self) -> SmallVec<[PathCommand; 2]> {
        smallvec![PathCommand::Arc {
            center: self.center,
            radius: self.radius,
            start_angle: self.start_angle,
            end_angle: self.end_angle,
        }]
    }

    fn title_placement(&self, _offset: f64) -> TitlePlacement {
        TitlePlacement {
            point: self.center,
            angle_deg: 0.0,
        }
    }
}
