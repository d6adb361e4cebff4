use crate::error::AxisResult;
use crate::render::{AxisScene, Renderer};

/// No-op renderer used by tests and headless axis usage.
///
/// It still validates scene content so tests can catch invalid geometry
/// before a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_path_count: usize,
    pub last_label_count: usize,
    pub render_calls: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, scene: &AxisScene) -> AxisResult<()> {
        scene.validate()?;
        self.last_path_count = scene.path_count();
        self.last_label_count = scene.labels.len();
        self.render_calls += 1;
        Ok(())
    }
}
