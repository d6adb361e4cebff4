use smallvec::{SmallVec, smallvec};

use crate::core::coord::{CoordSystem, TitlePlacement};
use crate::core::types::{Point, Vector};
use crate::error::{AxisError, AxisResult};
use crate::render::PathCommand;

/// Straight axis between two canvas points.
///
/// Tick marks and labels sit on the +90° side of the axis direction (below a
/// left-to-right axis in y-down canvas space); use [`Self::with_flipped_side`]
/// for the opposite side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearCoord {
    start: Point,
    end: Point,
    flip_side: bool,
}

impl LinearCoord {
    pub fn new(start: Point, end: Point) -> AxisResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(AxisError::InvalidCoord(
                "axis endpoints must be finite".to_owned(),
            ));
        }
        if start == end {
            return Err(AxisError::InvalidCoord(
                "axis endpoints must not coincide".to_owned(),
            ));
        }

        Ok(Self {
            start,
            end,
            flip_side: false,
        })
    }

    /// Moves tick marks and labels to the other side of the axis line.
    #[must_use]
    pub fn with_flipped_side(mut self) -> Self {
        self.flip_side = true;
        self
    }

    #[must_use]
    pub fn start(&self) -> Point {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Point {
        self.end
    }

    fn direction(&self) -> Vector {
        // new() rejects coincident endpoints, so the span is non-zero.
        Vector::new(self.end.x - self.start.x, self.end.y - self.start.y)
            .normalized()
            .unwrap_or(Vector::new(1.0, 0.0))
    }

    fn normal(&self) -> Vector {
        let dir = self.direction();
        let normal = Vector::new(-dir.y, dir.x);
        if self.flip_side { normal.negated() } else { normal }
    }
}

impl CoordSystem for LinearCoord {
    fn tick_point(&self, value: f64, _index: usize) -> Point {
        Point::new(
            self.start.x + (self.end.x - self.start.x) * value,
            self.start.y + (self.end.y - self.start.y) * value,
        )
    }

    fn tick_end(&self, point: Point, length: f64, index: usize) -> Point {
        point.translated(self.side_vector(length, point, index))
    }

    fn side_vector(&self, offset: f64, _point: Point, _index: usize) -> Vector {
        self.normal().scaled(offset)
    }

    fn line_path(&self) -> SmallVec<[PathCommand; 2]> {
        smallvec![
            PathCommand::MoveTo(self.start),
            PathCommand::LineTo(self.end)
        ]
    }

    fn auto_rotate_angle(&self, max_label_width: f64, tick_spacing: f64) -> Option<f64> {
        if tick_spacing.is_finite() && tick_spacing > 0.0 && max_label_width > tick_spacing {
            Some(-45.0)
        } else {
            None
        }
    }

    fn title_placement(&self, offset: f64) -> TitlePlacement {
        let mid = Point::new(
            (self.start.x + self.end.x) * 0.5,
            (self.start.y + self.end.y) * 0.5,
        );
        let dir = self.direction();
        TitlePlacement {
            point: mid.translated(self.normal().scaled(offset)),
            angle_deg: dir.y.atan2(dir.x).to_degrees(),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::LinearCoord;
    use crate::core::coord::CoordSystem;
    use crate::core::types::Point;
    use crate::render::PathCommand;

    fn bottom_axis() -> LinearCoord {
        LinearCoord::new(Point::new(0.0, 400.0), Point::new(800.0, 400.0)).expect("valid axis")
    }

    #[test]
    fn coincident_endpoints_are_rejected() {
        let p = Point::new(5.0, 5.0);
        assert!(LinearCoord::new(p, p).is_err());
    }

    #[test]
    fn non_finite_endpoints_are_rejected() {
        let result = LinearCoord::new(Point::new(f64::NAN, 0.0), Point::new(1.0, 0.0));
        assert!(result.is_err());
    }

    #[test]
    fn tick_points_interpolate_between_endpoints() {
        let axis = bottom_axis();
        assert_eq!(axis.tick_point(0.0, 0), Point::new(0.0, 400.0));
        assert_eq!(axis.tick_point(0.5, 1), Point::new(400.0, 400.0));
        assert_eq!(axis.tick_point(1.0, 2), Point::new(800.0, 400.0));
    }

    #[test]
    fn tick_marks_extend_perpendicular_to_the_axis() {
        let axis = bottom_axis();
        let point = axis.tick_point(0.5, 0);
        let end = axis.tick_end(point, 5.0, 0);
        assert_relative_eq!(end.x, point.x, epsilon = 1e-12);
        assert_relative_eq!(end.y, point.y + 5.0, epsilon = 1e-12);
    }

    #[test]
    fn flipped_side_mirrors_the_outward_vector() {
        let axis = bottom_axis();
        let flipped = bottom_axis().with_flipped_side();
        let point = axis.tick_point(0.5, 0);

        let outward = axis.side_vector(10.0, point, 0);
        let mirrored = flipped.side_vector(10.0, point, 0);
        assert_relative_eq!(outward.y, -mirrored.y, epsilon = 1e-12);
    }

    #[test]
    fn line_path_spans_the_endpoints() {
        let axis = bottom_axis();
        let path = axis.line_path();
        assert_eq!(
            path.as_slice(),
            &[
                PathCommand::MoveTo(Point::new(0.0, 400.0)),
                PathCommand::LineTo(Point::new(800.0, 400.0)),
            ]
        );
    }

    #[test]
    fn auto_rotation_kicks_in_only_when_labels_overflow_the_spacing() {
        let axis = bottom_axis();
        assert_eq!(axis.auto_rotate_angle(30.0, 80.0), None);
        assert_eq!(axis.auto_rotate_angle(90.0, 80.0), Some(-45.0));
        assert_eq!(axis.auto_rotate_angle(90.0, f64::INFINITY), None);
    }

    #[test]
    fn title_sits_at_the_offset_midpoint() {
        let axis = bottom_axis();
        let placement = axis.title_placement(40.0);
        assert_relative_eq!(placement.point.x, 400.0, epsilon = 1e-12);
        assert_relative_eq!(placement.point.y, 440.0, epsilon = 1e-12);
        assert_relative_eq!(placement.angle_deg, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn vertical_axis_title_follows_the_axis_direction() {
        let axis =
            LinearCoord::new(Point::new(0.0, 400.0), Point::new(0.0, 0.0)).expect("valid axis");
        let placement = axis.title_placement(40.0);
        assert_relative_eq!(placement.angle_deg, -90.0, epsilon = 1e-12);
    }
}
