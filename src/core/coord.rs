use smallvec::SmallVec;

use crate::core::types::{Point, Vector};
use crate::render::PathCommand;

/// Where an axis title sits: anchor point plus rotation in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitlePlacement {
    pub point: Point,
    pub angle_deg: f64,
}

/// Coordinate-system strategy behind one axis.
///
/// The axis renderer never branches on the concrete system; everything
/// variant-specific funnels through these hooks. Implementations must be
/// pure functions of their own coordinate state.
pub trait CoordSystem {
    /// Canvas point for a normalized tick position.
    fn tick_point(&self, value: f64, index: usize) -> Point;

    /// Far endpoint of a tick mark of `length` pixels starting at `point`.
    ///
    /// Direction is variant-specific: perpendicular to the axis for
    /// Cartesian systems, radial for polar ones.
    fn tick_end(&self, point: Point, length: f64, index: usize) -> Point;

    /// Outward vector that pushes a label `offset` pixels away from the axis.
    fn side_vector(&self, offset: f64, point: Point, index: usize) -> Vector;

    /// Full path of the axis line itself.
    fn line_path(&self) -> SmallVec<[PathCommand; 2]>;

    /// Rotation in degrees applied to every label when auto-rotation is on.
    ///
    /// `None` keeps labels unrotated. The default never rotates.
    fn auto_rotate_angle(&self, max_label_width: f64, tick_spacing: f64) -> Option<f64> {
        let _ = (max_label_width, tick_spacing);
        None
    }

    /// Anchor point and rotation for the axis title at the given outward offset.
    fn title_placement(&self, offset: f64) -> TitlePlacement;
}
