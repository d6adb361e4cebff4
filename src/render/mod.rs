mod layer_stack;
mod null_renderer;
mod primitives;
mod scene;

pub mod grid;
pub mod label_layout;

pub use grid::{GridGroup, GridRenderer, GridSpec, SegmentGridRenderer};
pub use label_layout::{LabelHandle, LabelLayout, MeasuredLabelLayout};
pub use layer_stack::{AxisLayerKind, AxisLayerStack};
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, PathCommand, PathPrimitive, TextBaseline, TextHAlign, TextPrimitive,
};
pub use scene::AxisScene;

use crate::error::AxisResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `AxisScene` so
/// drawing code remains isolated from axis layout logic.
pub trait Renderer {
    fn render(&mut self, scene: &AxisScene) -> AxisResult<()>;
}
