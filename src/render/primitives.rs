use serde::{Deserialize, Serialize};

use crate::core::types::Point;
use crate::error::{AxisError, AxisResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> AxisResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(AxisError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Horizontal text alignment relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Vertical text baseline relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TextBaseline {
    Top,
    #[default]
    Middle,
    Bottom,
}

/// One path segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Circular arc swept from `start_angle` to `end_angle` around `center`.
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    Close,
}

impl PathCommand {
    pub fn validate(self) -> AxisResult<()> {
        match self {
            Self::MoveTo(point) | Self::LineTo(point) => {
                if !point.is_finite() {
                    return Err(AxisError::InvalidData(
                        "path point must be finite".to_owned(),
                    ));
                }
                Ok(())
            }
            Self::Arc {
                center,
                radius,
                start_angle,
                end_angle,
            } => {
                if !center.is_finite() || !start_angle.is_finite() || !end_angle.is_finite() {
                    return Err(AxisError::InvalidData(
                        "arc geometry must be finite".to_owned(),
                    ));
                }
                if !radius.is_finite() || radius <= 0.0 {
                    return Err(AxisError::InvalidData(
                        "arc radius must be finite and > 0".to_owned(),
                    ));
                }
                Ok(())
            }
            Self::Close => Ok(()),
        }
    }
}

/// Draw command for one stroked path, tagged with a stable identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPrimitive {
    pub id: String,
    pub commands: Vec<PathCommand>,
    pub stroke_width: f64,
    pub color: Color,
}

impl PathPrimitive {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        commands: Vec<PathCommand>,
        stroke_width: f64,
        color: Color,
    ) -> Self {
        Self {
            id: id.into(),
            commands,
            stroke_width,
            color,
        }
    }

    pub fn validate(&self) -> AxisResult<()> {
        if self.id.is_empty() {
            return Err(AxisError::InvalidData(
                "path primitive id must not be empty".to_owned(),
            ));
        }
        if self.commands.is_empty() {
            return Err(AxisError::InvalidData(
                "path primitive must contain at least one command".to_owned(),
            ));
        }
        for command in &self.commands {
            command.validate()?;
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(AxisError::InvalidData(
                "path stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Draw command for one label in pixel space, tagged with a stable identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub id: String,
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    pub baseline: TextBaseline,
    pub angle_deg: f64,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
            baseline: TextBaseline::Middle,
            angle_deg: 0.0,
        }
    }

    #[must_use]
    pub fn with_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    #[must_use]
    pub fn with_angle(mut self, angle_deg: f64) -> Self {
        self.angle_deg = angle_deg;
        self
    }

    pub fn validate(&self) -> AxisResult<()> {
        if self.id.is_empty() {
            return Err(AxisError::InvalidData(
                "text primitive id must not be empty".to_owned(),
            ));
        }
        if self.text.is_empty() {
            return Err(AxisError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(AxisError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(AxisError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        if !self.angle_deg.is_finite() {
            return Err(AxisError::InvalidData(
                "text angle must be finite".to_owned(),
            ));
        }
        self.color.validate()
    }
}
