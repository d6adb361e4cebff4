use tracing::debug;

use crate::core::coord::CoordSystem;
use crate::core::types::{AxisId, Point, Vector};
use crate::error::AxisResult;
use crate::render::primitives::{Color, PathCommand, PathPrimitive};

/// Input handed to a grid-drawing service: the major tick points plus stroke
/// style and an optional start reference that anchors the far edge of the
/// grid lines.
#[derive(Debug, Clone, PartialEq)]
pub struct GridSpec<'a> {
    pub axis_id: &'a AxisId,
    pub points: &'a [Point],
    pub stroke_width: f64,
    pub color: Color,
    pub start: Option<Point>,
}

/// Grid output: a group of line primitives owned and removed as one unit.
#[derive(Debug, Clone, PartialEq)]
pub struct GridGroup {
    pub id: String,
    pub lines: Vec<PathPrimitive>,
}

impl GridGroup {
    #[must_use]
    pub fn empty(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            lines: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn validate(&self) -> AxisResult<()> {
        for line in &self.lines {
            line.validate()?;
        }
        Ok(())
    }
}

/// Contract implemented by grid-drawing services.
pub trait GridRenderer {
    fn render_grid(&mut self, spec: GridSpec<'_>, coord: &dyn CoordSystem)
    -> AxisResult<GridGroup>;
}

/// Default grid renderer: one straight segment per major tick.
///
/// Each segment runs from the tick point inward (against the coordinate
/// system's outward side vector) to its projection onto the line through
/// `start` parallel to the axis. For a polar system that projection is the
/// center, so grid lines become spokes; for a Cartesian axis they span the
/// plot up to the start reference. Without a start there is no plot extent
/// to span and the group stays empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentGridRenderer;

impl GridRenderer for SegmentGridRenderer {
    fn render_grid(
        &mut self,
        spec: GridSpec<'_>,
        coord: &dyn CoordSystem,
    ) -> AxisResult<GridGroup> {
        let mut group = GridGroup::empty(spec.axis_id.scoped("grid"));
        let Some(start) = spec.start else {
            debug!(axis = %spec.axis_id, "grid start not set, emitting empty grid group");
            return Ok(group);
        };

        for (index, point) in spec.points.iter().copied().enumerate() {
            let outward = coord.side_vector(1.0, point, index);
            let Some(inward) = outward.negated().normalized() else {
                continue;
            };
            let depth = inward.dot(Vector::new(start.x - point.x, start.y - point.y));
            if !depth.is_finite() || depth <= 0.0 {
                continue;
            }
            let far = point.translated(inward.scaled(depth));
            group.lines.push(PathPrimitive::new(
                spec.axis_id.scoped(format!("grid-{index}")),
                vec![PathCommand::MoveTo(point), PathCommand::LineTo(far)],
                spec.stroke_width,
                spec.color,
            ));
        }

        group.validate()?;
        Ok(group)
    }
}
