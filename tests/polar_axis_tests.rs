use std::sync::Arc;

use axis_rs::api::{AxisConfig, AxisRenderer, GridStyle, LineStyle, TickLineStyle, TitleConfig};
use axis_rs::core::{AxisId, CoordSystem, Point, PolarCoord, TickInput};
use axis_rs::render::{NullRenderer, PathCommand, TextHAlign};

const CENTER: Point = Point::new(100.0, 100.0);
const RADIUS: f64 = 50.0;

fn polar_coord() -> Arc<dyn CoordSystem> {
    Arc::new(PolarCoord::new(CENTER, RADIUS).expect("valid polar axis"))
}

fn polar_config() -> AxisConfig {
    AxisConfig::default()
        .with_line(LineStyle::default())
        .with_tick_line(TickLineStyle::default().with_length(8.0))
        .with_grid(GridStyle::default().with_start(CENTER))
}

fn painted_polar_axis(config: AxisConfig, labels: &[&str]) -> AxisRenderer<NullRenderer> {
    let mut axis = AxisRenderer::new(
        AxisId::new("axis-angle"),
        NullRenderer::default(),
        polar_coord(),
        config,
    )
    .expect("axis init");
    let ticks: Vec<TickInput> = labels.iter().map(|label| TickInput::from(*label)).collect();
    axis.set_ticks(ticks).expect("set ticks");
    axis
}

#[test]
fn circular_axis_line_is_a_single_arc() {
    let axis = painted_polar_axis(polar_config(), &["n", "e", "s", "w", "n2"]);
    let scene = axis.scene().expect("painted scene");

    let line = scene.line.as_ref().expect("axis line");
    assert_eq!(line.commands.len(), 1);
    assert!(matches!(
        line.commands[0],
        PathCommand::Arc { center, radius, .. } if center == CENTER && radius == RADIUS
    ));
}

#[test]
fn tick_marks_extend_radially_outward() {
    let axis = painted_polar_axis(polar_config(), &["n", "e", "s", "w", "n2"]);
    let scene = axis.scene().expect("painted scene");

    let ticks = scene.tick_marks.as_ref().expect("tick marks");
    for pair in ticks.commands.chunks(2) {
        let (PathCommand::MoveTo(start), PathCommand::LineTo(end)) = (pair[0], pair[1]) else {
            panic!("expected move/line pairs");
        };
        let inner = start.distance_to(CENTER);
        let outer = end.distance_to(CENTER);
        assert!((inner - RADIUS).abs() <= 1e-9);
        assert!((outer - (RADIUS + 8.0)).abs() <= 1e-9);
    }
}

#[test]
fn grid_lines_are_spokes_ending_at_the_center() {
    let axis = painted_polar_axis(polar_config(), &["n", "e", "s", "w", "n2"]);
    let scene = axis.scene().expect("painted scene");

    let grid = scene.grid.as_ref().expect("grid group");
    assert_eq!(grid.lines.len(), 5);
    for line in &grid.lines {
        let PathCommand::LineTo(far) = line.commands[1] else {
            panic!("expected a line command");
        };
        assert!(far.distance_to(CENTER) <= 1e-9);
    }
}

#[test]
fn labels_sit_outside_the_ring() {
    let axis = painted_polar_axis(polar_config(), &["n", "e", "s", "w", "n2"]);
    let scene = axis.scene().expect("painted scene");

    assert_eq!(scene.labels.len(), 5);
    for handle in &scene.labels {
        // Default label offset pushes 10 px past the ring.
        assert!((handle.position.distance_to(CENTER) - (RADIUS + 10.0)).abs() <= 1e-9);
    }
}

#[test]
fn label_anchors_follow_the_outward_direction() {
    // Quarter positions on a full circle starting at twelve o'clock:
    // top, right, bottom, left, top again.
    let axis = painted_polar_axis(polar_config(), &["n", "e", "s", "w", "n2"]);
    let scene = axis.scene().expect("painted scene");

    let anchors: Vec<TextHAlign> = scene.labels.iter().map(|h| h.h_align).collect();
    assert_eq!(
        anchors,
        vec![
            TextHAlign::Center,
            TextHAlign::Left,
            TextHAlign::Center,
            TextHAlign::Right,
            TextHAlign::Center,
        ]
    );
}

#[test]
fn polar_labels_are_never_auto_rotated() {
    let axis = painted_polar_axis(
        polar_config(),
        &["January 2024", "February 2024", "March 2024", "April 2024"],
    );
    assert_eq!(axis.label_service().rotation_deg(), 0.0);
}

#[test]
fn title_sits_at_the_center_of_the_ring() {
    let config = polar_config().with_title(TitleConfig::new("Wind direction"));
    let axis = painted_polar_axis(config, &["n", "e", "s", "w"]);
    let scene = axis.scene().expect("painted scene");

    let title = scene.title.as_ref().expect("title");
    assert_eq!(title.id, "axis-angle-title");
    assert!((title.x - CENTER.x).abs() <= 1e-9);
    assert!((title.y - CENTER.y).abs() <= 1e-9);
}
