use crate::core::types::AxisId;
use crate::error::AxisResult;
use crate::render::grid::GridGroup;
use crate::render::label_layout::LabelHandle;
use crate::render::layer_stack::AxisLayerStack;
use crate::render::primitives::{PathPrimitive, TextPrimitive};

/// Backend-agnostic output of one axis paint pass.
///
/// A scene is built in full and validated before it is handed to a backend,
/// so a failed paint never leaves a partially drawn axis behind. Repainting
/// replaces the whole scene; removal drops line, ticks, grid, and labels
/// together.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisScene {
    pub axis_id: AxisId,
    pub layer_stack: AxisLayerStack,
    pub line: Option<PathPrimitive>,
    pub tick_marks: Option<PathPrimitive>,
    pub sub_tick_marks: Option<PathPrimitive>,
    pub grid: Option<GridGroup>,
    pub labels: Vec<LabelHandle>,
    pub title: Option<TextPrimitive>,
}

impl AxisScene {
    #[must_use]
    pub fn new(axis_id: AxisId) -> Self {
        Self {
            axis_id,
            layer_stack: AxisLayerStack::canonical(),
            line: None,
            tick_marks: None,
            sub_tick_marks: None,
            grid: None,
            labels: Vec::new(),
            title: None,
        }
    }

    pub fn validate(&self) -> AxisResult<()> {
        if let Some(line) = &self.line {
            line.validate()?;
        }
        if let Some(ticks) = &self.tick_marks {
            ticks.validate()?;
        }
        if let Some(sub_ticks) = &self.sub_tick_marks {
            sub_ticks.validate()?;
        }
        if let Some(grid) = &self.grid {
            grid.validate()?;
        }
        if let Some(title) = &self.title {
            title.validate()?;
        }
        Ok(())
    }

    /// Stroked paths in canonical z-order, bottom first.
    pub fn path_primitives(&self) -> impl Iterator<Item = &PathPrimitive> {
        self.line
            .iter()
            .chain(self.tick_marks.iter())
            .chain(self.sub_tick_marks.iter())
            .chain(self.grid.iter().flat_map(|grid| grid.lines.iter()))
    }

    #[must_use]
    pub fn path_count(&self) -> usize {
        self.path_primitives().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path_count() == 0 && self.labels.is_empty() && self.title.is_none()
    }
}
