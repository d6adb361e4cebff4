use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::tick::TickRecord;
use crate::core::types::Point;
use crate::error::{AxisError, AxisResult};
use crate::render::Color;

/// Formatter applied to tick text right before label emission.
pub type LabelFormatter = Arc<dyn Fn(&TickRecord) -> String + Send + Sync>;

/// Built-in style defaults merged into present-but-partial config blocks.
mod defaults {
    use crate::render::Color;

    pub(super) const FONT_SIZE_PX: f64 = 12.0;
    // #ccc
    pub(super) const TEXT_COLOR: Color = Color::rgb(0.8, 0.8, 0.8);
    pub(super) const LABEL_OFFSET_PX: f64 = 10.0;
    pub(super) const TITLE_OFFSET_PX: f64 = 40.0;
    pub(super) const STROKE_WIDTH: f64 = 1.0;
    // #C0D0E0
    pub(super) const STROKE_COLOR: Color =
        Color::rgb(192.0 / 255.0, 208.0 / 255.0, 224.0 / 255.0);
}

/// Style of the axis line. An empty block renders with defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LineStyle {
    pub stroke_width: Option<f64>,
    pub color: Option<Color>,
}

impl LineStyle {
    #[must_use]
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = Some(stroke_width);
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// Style of major or minor tick marks.
///
/// `length` is required for major tick marks; a minor style without a length
/// falls back to `floor(major_length * 3/5)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TickLineStyle {
    pub length: Option<f64>,
    pub stroke_width: Option<f64>,
    pub color: Option<Color>,
}

impl TickLineStyle {
    #[must_use]
    pub fn with_length(mut self, length: f64) -> Self {
        self.length = Some(length);
        self
    }

    #[must_use]
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = Some(stroke_width);
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// Grid styling plus the optional start reference handed to the grid service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GridStyle {
    pub stroke_width: Option<f64>,
    pub color: Option<Color>,
    pub start: Option<Point>,
}

impl GridStyle {
    #[must_use]
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = Some(stroke_width);
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_start(mut self, start: Point) -> Self {
        self.start = Some(start);
        self
    }
}

/// Text styling shared by labels and titles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TextStyle {
    pub font_size_px: Option<f64>,
    pub color: Option<Color>,
}

impl TextStyle {
    #[must_use]
    pub fn with_font_size_px(mut self, font_size_px: f64) -> Self {
        self.font_size_px = Some(font_size_px);
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// Tick label configuration.
#[derive(Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LabelConfig {
    pub text_style: Option<TextStyle>,
    pub offset: Option<f64>,
    pub auto_rotate: Option<bool>,
    #[serde(skip)]
    pub formatter: Option<LabelFormatter>,
}

impl LabelConfig {
    #[must_use]
    pub fn with_text_style(mut self, text_style: TextStyle) -> Self {
        self.text_style = Some(text_style);
        self
    }

    #[must_use]
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = Some(offset);
        self
    }

    #[must_use]
    pub fn with_auto_rotate(mut self, auto_rotate: bool) -> Self {
        self.auto_rotate = Some(auto_rotate);
        self
    }

    #[must_use]
    pub fn with_formatter(
        mut self,
        formatter: impl Fn(&TickRecord) -> String + Send + Sync + 'static,
    ) -> Self {
        self.formatter = Some(Arc::new(formatter));
        self
    }
}

impl fmt::Debug for LabelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LabelConfig")
            .field("text_style", &self.text_style)
            .field("offset", &self.offset)
            .field("auto_rotate", &self.auto_rotate)
            .field("formatter", &self.formatter.is_some())
            .finish()
    }
}

impl PartialEq for LabelConfig {
    // Formatter closures compare by presence only.
    fn eq(&self, other: &Self) -> bool {
        self.text_style == other.text_style
            && self.offset == other.offset
            && self.auto_rotate == other.auto_rotate
            && self.formatter.is_some() == other.formatter.is_some()
    }
}

/// Axis title configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TitleConfig {
    pub text: String,
    pub text_style: Option<TextStyle>,
    pub offset: Option<f64>,
    pub auto_rotate: Option<bool>,
}

impl TitleConfig {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_text_style(mut self, text_style: TextStyle) -> Self {
        self.text_style = Some(text_style);
        self
    }

    #[must_use]
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = Some(offset);
        self
    }

    #[must_use]
    pub fn with_auto_rotate(mut self, auto_rotate: bool) -> Self {
        self.auto_rotate = Some(auto_rotate);
        self
    }
}

/// Full axis configuration.
///
/// `None` for a style block suppresses that element entirely; a present but
/// empty block renders with built-in defaults, and explicitly provided fields
/// are never overwritten. Serializable so host applications can persist and
/// reload axis setup (the label formatter closure is excluded).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisConfig {
    pub line: Option<LineStyle>,
    pub tick_line: Option<TickLineStyle>,
    pub sub_tick_count: usize,
    pub sub_tick_line: Option<TickLineStyle>,
    pub grid: Option<GridStyle>,
    pub label: Option<LabelConfig>,
    pub title: Option<TitleConfig>,
    pub auto_paint: bool,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            line: None,
            tick_line: None,
            sub_tick_count: 0,
            sub_tick_line: None,
            grid: None,
            label: Some(LabelConfig::default()),
            title: None,
            auto_paint: true,
        }
    }
}

impl AxisConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_line(mut self, line: LineStyle) -> Self {
        self.line = Some(line);
        self
    }

    #[must_use]
    pub fn with_tick_line(mut self, tick_line: TickLineStyle) -> Self {
        self.tick_line = Some(tick_line);
        self
    }

    #[must_use]
    pub fn with_sub_ticks(mut self, sub_tick_count: usize) -> Self {
        self.sub_tick_count = sub_tick_count;
        self
    }

    #[must_use]
    pub fn with_sub_tick_line(mut self, sub_tick_line: TickLineStyle) -> Self {
        self.sub_tick_line = Some(sub_tick_line);
        self
    }

    #[must_use]
    pub fn with_grid(mut self, grid: GridStyle) -> Self {
        self.grid = Some(grid);
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: LabelConfig) -> Self {
        self.label = Some(label);
        self
    }

    /// Suppresses tick labels entirely.
    #[must_use]
    pub fn without_label(mut self) -> Self {
        self.label = None;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: TitleConfig) -> Self {
        self.title = Some(title);
        self
    }

    #[must_use]
    pub fn with_auto_paint(mut self, auto_paint: bool) -> Self {
        self.auto_paint = auto_paint;
        self
    }

    /// Resolves defaults into a complete value without touching `self`.
    ///
    /// Configuration errors surface here, before any primitive is built.
    pub(crate) fn resolve(&self) -> AxisResult<ResolvedAxisConfig> {
        let line = match &self.line {
            Some(style) => Some(ResolvedLine {
                stroke_width: positive(
                    style.stroke_width.unwrap_or(defaults::STROKE_WIDTH),
                    "line stroke width",
                )?,
                color: style.color.unwrap_or(defaults::STROKE_COLOR),
            }),
            None => None,
        };

        let tick_line = match &self.tick_line {
            Some(style) => Some(resolve_tick_line(style, "tick line")?),
            None => None,
        };

        let sub_tick_line = if self.sub_tick_count > 0 {
            Some(resolve_sub_tick_line(
                self.sub_tick_line.as_ref(),
                tick_line.as_ref(),
            )?)
        } else {
            None
        };

        let grid = match &self.grid {
            Some(style) => {
                if style.start.is_some_and(|start| !start.is_finite()) {
                    return Err(AxisError::InvalidConfig(
                        "grid start point must be finite".to_owned(),
                    ));
                }
                Some(ResolvedGrid {
                    stroke_width: positive(
                        style.stroke_width.unwrap_or(defaults::STROKE_WIDTH),
                        "grid stroke width",
                    )?,
                    color: style.color.unwrap_or(defaults::STROKE_COLOR),
                    start: style.start,
                })
            }
            None => None,
        };

        let label = match &self.label {
            Some(config) => Some(ResolvedLabel {
                text: resolve_text_style(config.text_style.as_ref())?,
                offset: finite(
                    config.offset.unwrap_or(defaults::LABEL_OFFSET_PX),
                    "label offset",
                )?,
                auto_rotate: config.auto_rotate.unwrap_or(true),
                formatter: config.formatter.clone(),
            }),
            None => None,
        };

        let title = match &self.title {
            Some(config) => {
                if config.text.is_empty() {
                    return Err(AxisError::InvalidConfig(
                        "title text must not be empty".to_owned(),
                    ));
                }
                Some(ResolvedTitle {
                    text: config.text.clone(),
                    style: resolve_text_style(config.text_style.as_ref())?,
                    offset: finite(
                        config.offset.unwrap_or(defaults::TITLE_OFFSET_PX),
                        "title offset",
                    )?,
                    auto_rotate: config.auto_rotate.unwrap_or(true),
                })
            }
            None => None,
        };

        Ok(ResolvedAxisConfig {
            line,
            tick_line,
            sub_tick_count: self.sub_tick_count,
            sub_tick_line,
            grid,
            label,
            title,
        })
    }
}

fn resolve_tick_line(style: &TickLineStyle, role: &str) -> AxisResult<ResolvedTickLine> {
    let length = style
        .length
        .ok_or_else(|| AxisError::InvalidConfig(format!("{role} length is required")))?;
    Ok(ResolvedTickLine {
        length: positive(length, "tick line length")?,
        stroke_width: positive(
            style.stroke_width.unwrap_or(defaults::STROKE_WIDTH),
            "tick line stroke width",
        )?,
        color: style.color.unwrap_or(defaults::STROKE_COLOR),
    })
}

fn resolve_sub_tick_line(
    style: Option<&TickLineStyle>,
    tick_line: Option<&ResolvedTickLine>,
) -> AxisResult<ResolvedTickLine> {
    let length = match style.and_then(|s| s.length) {
        Some(length) => length,
        None => {
            let major = tick_line.ok_or_else(|| {
                AxisError::InvalidConfig(
                    "sub-tick length requires a tick line length to fall back to".to_owned(),
                )
            })?;
            (major.length * 3.0 / 5.0).floor()
        }
    };

    // Style falls back to the major tick style when no minor style is given.
    let stroke_width = style
        .and_then(|s| s.stroke_width)
        .or(tick_line.map(|t| t.stroke_width))
        .unwrap_or(defaults::STROKE_WIDTH);
    let color = style
        .and_then(|s| s.color)
        .or(tick_line.map(|t| t.color))
        .unwrap_or(defaults::STROKE_COLOR);

    Ok(ResolvedTickLine {
        length: positive(length, "sub-tick line length")?,
        stroke_width: positive(stroke_width, "sub-tick line stroke width")?,
        color,
    })
}

fn resolve_text_style(style: Option<&TextStyle>) -> AxisResult<ResolvedText> {
    let style = style.copied().unwrap_or_default();
    Ok(ResolvedText {
        font_size_px: positive(
            style.font_size_px.unwrap_or(defaults::FONT_SIZE_PX),
            "font size",
        )?,
        color: style.color.unwrap_or(defaults::TEXT_COLOR),
    })
}

fn positive(value: f64, what: &str) -> AxisResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AxisError::InvalidConfig(format!(
            "{what} must be finite and > 0"
        )));
    }
    Ok(value)
}

fn finite(value: f64, what: &str) -> AxisResult<f64> {
    if !value.is_finite() {
        return Err(AxisError::InvalidConfig(format!("{what} must be finite")));
    }
    Ok(value)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ResolvedLine {
    pub stroke_width: f64,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ResolvedTickLine {
    pub length: f64,
    pub stroke_width: f64,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ResolvedGrid {
    pub stroke_width: f64,
    pub color: Color,
    pub start: Option<Point>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ResolvedText {
    pub font_size_px: f64,
    pub color: Color,
}

#[derive(Clone)]
pub(crate) struct ResolvedLabel {
    pub text: ResolvedText,
    pub offset: f64,
    pub auto_rotate: bool,
    pub formatter: Option<LabelFormatter>,
}

impl fmt::Debug for ResolvedLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedLabel")
            .field("text", &self.text)
            .field("offset", &self.offset)
            .field("auto_rotate", &self.auto_rotate)
            .field("formatter", &self.formatter.is_some())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ResolvedTitle {
    pub text: String,
    pub style: ResolvedText,
    pub offset: f64,
    pub auto_rotate: bool,
}

#[derive(Clone, Debug)]
pub(crate) struct ResolvedAxisConfig {
    pub line: Option<ResolvedLine>,
    pub tick_line: Option<ResolvedTickLine>,
    pub sub_tick_count: usize,
    pub sub_tick_line: Option<ResolvedTickLine>,
    pub grid: Option<ResolvedGrid>,
    pub label: Option<ResolvedLabel>,
    pub title: Option<ResolvedTitle>,
}
