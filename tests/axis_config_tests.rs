use std::sync::Arc;

use axis_rs::api::{
    AxisConfig, AxisRenderer, GridStyle, LabelConfig, LineStyle, TickLineStyle, TitleConfig,
};
use axis_rs::core::{AxisId, CoordSystem, LinearCoord, Point, TickInput, TickRecord};
use axis_rs::render::{Color, NullRenderer};

fn coord() -> Arc<dyn CoordSystem> {
    let coord = LinearCoord::new(Point::new(0.0, 400.0), Point::new(800.0, 400.0))
        .expect("valid linear axis");
    Arc::new(coord)
}

#[test]
fn default_config_enables_labels_and_auto_paint_only() {
    let config = AxisConfig::default();
    assert!(config.line.is_none());
    assert!(config.tick_line.is_none());
    assert_eq!(config.sub_tick_count, 0);
    assert!(config.grid.is_none());
    assert!(config.label.is_some());
    assert!(config.title.is_none());
    assert!(config.auto_paint);
}

#[test]
fn config_survives_a_json_round_trip() {
    let config = AxisConfig::default()
        .with_line(LineStyle::default().with_stroke_width(2.0))
        .with_tick_line(TickLineStyle::default().with_length(5.0))
        .with_sub_ticks(3)
        .with_grid(
            GridStyle::default()
                .with_color(Color::rgb(0.2, 0.4, 0.6))
                .with_start(Point::new(0.0, 0.0)),
        )
        .with_label(LabelConfig::default().with_offset(14.0))
        .with_title(TitleConfig::new("Revenue").with_offset(32.0));

    let json = serde_json::to_string(&config).expect("serialize");
    let restored: AxisConfig = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(config, restored);
}

#[test]
fn formatter_is_excluded_from_serialization() {
    let config = AxisConfig::default()
        .with_label(
            LabelConfig::default().with_formatter(|tick: &TickRecord| format!("{}!", tick.text)),
        );

    let json = serde_json::to_string(&config).expect("serialize");
    let restored: AxisConfig = serde_json::from_str(&json).expect("deserialize");
    assert!(
        restored
            .label
            .as_ref()
            .expect("label block")
            .formatter
            .is_none()
    );
}

#[test]
fn update_config_merges_before_first_paint() {
    let mut axis = AxisRenderer::new(
        AxisId::new("axis-x"),
        NullRenderer::default(),
        coord(),
        AxisConfig::default().with_auto_paint(false),
    )
    .expect("axis init");

    axis.update_config(|config| {
        config.grid = Some(GridStyle::default().with_start(Point::new(0.0, 0.0)));
        config.line = Some(LineStyle::default());
    })
    .expect("config update");

    axis.set_ticks(vec![TickInput::from("a"), TickInput::from("b")])
        .expect("set ticks");
    axis.paint().expect("paint");

    let scene = axis.scene().expect("painted scene");
    assert!(scene.line.is_some());
    assert!(scene.grid.is_some());
}

#[test]
fn update_config_rejects_invalid_changes() {
    let mut axis = AxisRenderer::new(
        AxisId::new("axis-x"),
        NullRenderer::default(),
        coord(),
        AxisConfig::default().with_auto_paint(false),
    )
    .expect("axis init");

    let result = axis.update_config(|config| {
        config.tick_line = Some(TickLineStyle::default());
    });
    assert!(result.is_err());
}

#[test]
fn config_freezes_after_the_first_paint() {
    let mut axis = AxisRenderer::new(
        AxisId::new("axis-x"),
        NullRenderer::default(),
        coord(),
        AxisConfig::default(),
    )
    .expect("axis init");
    axis.set_ticks(vec![TickInput::from("a"), TickInput::from("b")])
        .expect("set ticks");

    let result = axis.update_config(|config| {
        config.line = Some(LineStyle::default());
    });
    let err = result.expect_err("config must be frozen");
    assert!(err.to_string().contains("frozen"));
}
