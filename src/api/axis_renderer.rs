use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::core::coord::CoordSystem;
use crate::core::tick::{TickInput, TickMarkSegment, TickRecord, normalize_ticks, sub_tick_values};
use crate::core::types::{AxisId, Point};
use crate::error::{AxisError, AxisResult};
use crate::render::grid::{GridRenderer, GridSpec, SegmentGridRenderer};
use crate::render::label_layout::{LabelLayout, MeasuredLabelLayout};
use crate::render::{
    AxisScene, PathCommand, PathPrimitive, Renderer, TextHAlign, TextPrimitive,
};

use super::axis_config::{
    AxisConfig, ResolvedAxisConfig, ResolvedLabel, ResolvedTickLine, ResolvedTitle,
};
use super::label_placement::text_anchor;

/// Axis rendering engine.
///
/// Construction takes the coordinate-system strategy, a rendering backend,
/// and the axis configuration. Ticks are supplied separately and the engine
/// repaints the full primitive set on demand; nothing is diffed between
/// passes.
pub struct AxisRenderer<R, L = MeasuredLabelLayout, G = SegmentGridRenderer>
where
    R: Renderer,
    L: LabelLayout,
    G: GridRenderer,
{
    id: AxisId,
    renderer: R,
    coord: Arc<dyn CoordSystem>,
    config: AxisConfig,
    ticks: Vec<TickRecord>,
    labels: L,
    grid: G,
    scene: Option<AxisScene>,
    painted: bool,
}

impl<R: Renderer> AxisRenderer<R> {
    /// Creates an axis with the default label-layout and grid services.
    pub fn new(
        id: AxisId,
        renderer: R,
        coord: Arc<dyn CoordSystem>,
        config: AxisConfig,
    ) -> AxisResult<Self> {
        Self::with_services(
            id,
            renderer,
            coord,
            config,
            MeasuredLabelLayout::new(),
            SegmentGridRenderer,
        )
    }
}

impl<R, L, G> AxisRenderer<R, L, G>
where
    R: Renderer,
    L: LabelLayout,
    G: GridRenderer,
{
    /// Creates an axis with injected label-layout and grid collaborators.
    pub fn with_services(
        id: AxisId,
        renderer: R,
        coord: Arc<dyn CoordSystem>,
        config: AxisConfig,
        labels: L,
        grid: G,
    ) -> AxisResult<Self> {
        // Surface configuration errors before the first paint is attempted.
        config.resolve()?;
        Ok(Self {
            id,
            renderer,
            coord,
            config,
            ticks: Vec::new(),
            labels,
            grid,
            scene: None,
            painted: false,
        })
    }

    #[must_use]
    pub fn id(&self) -> &AxisId {
        &self.id
    }

    #[must_use]
    pub fn config(&self) -> &AxisConfig {
        &self.config
    }

    /// Coordinate-system handle shared with label handles and grid specs.
    #[must_use]
    pub fn coord(&self) -> &Arc<dyn CoordSystem> {
        &self.coord
    }

    #[must_use]
    pub fn ticks(&self) -> &[TickRecord] {
        &self.ticks
    }

    /// Scene produced by the most recent successful paint.
    #[must_use]
    pub fn scene(&self) -> Option<&AxisScene> {
        self.scene.as_ref()
    }

    #[must_use]
    pub fn label_service(&self) -> &L {
        &self.labels
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutates the configuration before the first paint.
    ///
    /// The configuration freezes once the axis has painted; later updates
    /// are rejected so repaints stay deterministic.
    pub fn update_config(&mut self, apply: impl FnOnce(&mut AxisConfig)) -> AxisResult<()> {
        if self.painted {
            return Err(AxisError::InvalidConfig(
                "config is frozen after first paint".to_owned(),
            ));
        }
        apply(&mut self.config);
        self.config.resolve().map(|_| ())
    }

    /// Replaces the tick list.
    ///
    /// Raw entries are normalized to `index / (N - 1)` positions; records
    /// pass through unchanged. When `auto_paint` is on the axis repaints
    /// immediately.
    pub fn set_ticks(&mut self, ticks: Vec<TickInput>) -> AxisResult<()> {
        let normalized = normalize_ticks(&ticks);
        debug!(axis = %self.id, count = normalized.len(), "set axis ticks");
        self.ticks = normalized;
        if self.config.auto_paint {
            self.paint()?;
        }
        Ok(())
    }

    /// Rebuilds every primitive for the current ticks and hands the scene to
    /// the backend.
    ///
    /// The previous pass is discarded first. The scene is assembled and
    /// validated in full before anything is attached, so a failed paint
    /// leaves no partial output behind.
    pub fn paint(&mut self) -> AxisResult<()> {
        self.labels.remove_all();
        self.scene = None;

        match self.paint_pass() {
            Ok(scene) => {
                self.scene = Some(scene);
                self.painted = true;
                Ok(())
            }
            Err(err) => {
                self.labels.remove_all();
                warn!(axis = %self.id, error = %err, "axis paint failed, discarding partial output");
                Err(err)
            }
        }
    }

    /// Tears down line, tick, grid, and label primitives together.
    ///
    /// Absent optional primitives are simply skipped.
    pub fn remove(&mut self) {
        debug!(axis = %self.id, "removing axis primitives");
        self.labels.remove_all();
        self.scene = None;
    }

    fn paint_pass(&mut self) -> AxisResult<AxisScene> {
        let resolved = self.config.resolve()?;
        let mut scene = AxisScene::new(self.id.clone());

        self.render_line(&resolved, &mut scene);

        let points = self.tick_points();
        let (majors, subs) = self.build_tick_segments(&resolved, &points);
        self.render_tick_paths(&resolved, &majors, &subs, &mut scene);
        self.render_grid(&resolved, &points, &mut scene)?;
        if let Some(label) = &resolved.label {
            self.render_labels(label, &points, &mut scene)?;
            self.auto_rotate_labels(label, &points);
        }
        self.render_title(resolved.title.as_ref(), &mut scene);

        scene.validate()?;
        self.renderer.render(&scene)?;
        trace!(
            axis = %self.id,
            paths = scene.path_count(),
            labels = scene.labels.len(),
            "axis paint pass complete"
        );
        Ok(scene)
    }

    fn render_line(&self, resolved: &ResolvedAxisConfig, scene: &mut AxisScene) {
        let Some(line) = &resolved.line else {
            return;
        };
        scene.line = Some(PathPrimitive::new(
            self.id.scoped("line"),
            self.coord.line_path().into_vec(),
            line.stroke_width,
            line.color,
        ));
    }

    fn tick_points(&self) -> Vec<Point> {
        self.ticks
            .iter()
            .enumerate()
            .map(|(index, tick)| self.coord.tick_point(tick.value, index))
            .collect()
    }

    fn build_tick_segments(
        &self,
        resolved: &ResolvedAxisConfig,
        points: &[Point],
    ) -> (Vec<TickMarkSegment>, Vec<TickMarkSegment>) {
        let mut majors = Vec::new();
        if let Some(tick_line) = &resolved.tick_line {
            majors.reserve(points.len());
            for (index, point) in points.iter().copied().enumerate() {
                majors.push(TickMarkSegment {
                    start: point,
                    end: self.coord.tick_end(point, tick_line.length, index),
                });
            }
        }

        let mut subs = Vec::new();
        if let Some(sub_line) = &resolved.sub_tick_line {
            let values = sub_tick_values(&self.ticks, resolved.sub_tick_count);
            subs.reserve(values.len());
            for (index, value) in values.into_iter().enumerate() {
                let point = self.coord.tick_point(value, index);
                subs.push(TickMarkSegment {
                    start: point,
                    end: self.coord.tick_end(point, sub_line.length, index),
                });
            }
        }

        (majors, subs)
    }

    fn render_tick_paths(
        &self,
        resolved: &ResolvedAxisConfig,
        majors: &[TickMarkSegment],
        subs: &[TickMarkSegment],
        scene: &mut AxisScene,
    ) {
        if let Some(tick_line) = &resolved.tick_line {
            if !majors.is_empty() {
                scene.tick_marks = Some(segments_to_path(
                    self.id.scoped("ticks"),
                    majors,
                    tick_line,
                ));
            }
        }
        if let Some(sub_line) = &resolved.sub_tick_line {
            if !subs.is_empty() {
                scene.sub_tick_marks = Some(segments_to_path(
                    self.id.scoped("sub-ticks"),
                    subs,
                    sub_line,
                ));
            }
        }
    }

    fn render_grid(
        &mut self,
        resolved: &ResolvedAxisConfig,
        points: &[Point],
        scene: &mut AxisScene,
    ) -> AxisResult<()> {
        let Some(grid) = &resolved.grid else {
            return Ok(());
        };
        let group = self.grid.render_grid(
            GridSpec {
                axis_id: &self.id,
                points,
                stroke_width: grid.stroke_width,
                color: grid.color,
                start: grid.start,
            },
            self.coord.as_ref(),
        )?;
        scene.grid = Some(group);
        Ok(())
    }

    fn render_labels(
        &mut self,
        label: &ResolvedLabel,
        points: &[Point],
        scene: &mut AxisScene,
    ) -> AxisResult<()> {
        let mut primitives = Vec::with_capacity(self.ticks.len());
        for (index, (tick, point)) in self.ticks.iter().zip(points.iter().copied()).enumerate() {
            let vector = self.coord.side_vector(label.offset, point, index);
            let position = point.translated(vector);
            let text = match &label.formatter {
                Some(formatter) => formatter(tick),
                None => tick.text.clone(),
            };
            if text.is_empty() {
                trace!(axis = %self.id, tick = tick.value, "skipping empty label text");
                continue;
            }
            primitives.push(TextPrimitive::new(
                self.id.scoped(format!("label-{}", tick.value)),
                text,
                position.x,
                position.y,
                label.text.font_size_px,
                label.text.color,
                text_anchor(vector),
            ));
        }

        for primitive in primitives {
            let mut handle = self.labels.add_label(primitive)?;
            handle.attach_coord(Arc::downgrade(&self.coord));
            scene.labels.push(handle);
        }
        Ok(())
    }

    fn auto_rotate_labels(&mut self, label: &ResolvedLabel, points: &[Point]) {
        if !label.auto_rotate {
            return;
        }
        let spacing = points
            .windows(2)
            .map(|pair| pair[0].distance_to(pair[1]))
            .fold(f64::INFINITY, f64::min);
        let max_width = self.labels.max_label_width();
        if let Some(angle) = self.coord.auto_rotate_angle(max_width, spacing) {
            debug!(axis = %self.id, angle, "auto-rotating axis labels");
            self.labels.set_rotation(angle);
        }
    }

    fn render_title(&self, title: Option<&ResolvedTitle>, scene: &mut AxisScene) {
        let Some(title) = title else {
            return;
        };
        let placement = self.coord.title_placement(title.offset);
        let angle = if title.auto_rotate {
            placement.angle_deg
        } else {
            0.0
        };
        scene.title = Some(
            TextPrimitive::new(
                self.id.scoped("title"),
                title.text.clone(),
                placement.point.x,
                placement.point.y,
                title.style.font_size_px,
                title.style.color,
                TextHAlign::Center,
            )
            .with_angle(angle),
        );
    }
}

fn segments_to_path(
    id: String,
    segments: &[TickMarkSegment],
    style: &ResolvedTickLine,
) -> PathPrimitive {
    let mut commands = Vec::with_capacity(segments.len() * 2);
    for segment in segments {
        commands.push(PathCommand::MoveTo(segment.start));
        commands.push(PathCommand::LineTo(segment.end));
    }
    PathPrimitive::new(id, commands, style.stroke_width, style.color)
}
