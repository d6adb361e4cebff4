use std::sync::{Arc, Weak};

use indexmap::IndexMap;

use crate::core::coord::CoordSystem;
use crate::core::types::{Point, Rect};
use crate::error::AxisResult;
use crate::render::primitives::{TextBaseline, TextHAlign, TextPrimitive};

/// Handle returned by a label layout service for one placed label.
///
/// Carries the stable id used by animation/diffing systems plus a non-owning
/// back-reference to the coordinate system that positioned the label.
#[derive(Debug, Clone)]
pub struct LabelHandle {
    pub id: String,
    pub position: Point,
    pub h_align: TextHAlign,
    coord: Option<Weak<dyn CoordSystem>>,
}

impl LabelHandle {
    #[must_use]
    pub fn new(id: impl Into<String>, position: Point, h_align: TextHAlign) -> Self {
        Self {
            id: id.into(),
            position,
            h_align,
            coord: None,
        }
    }

    pub(crate) fn attach_coord(&mut self, coord: Weak<dyn CoordSystem>) {
        self.coord = Some(coord);
    }

    /// Coordinate system that placed this label, if it is still alive.
    #[must_use]
    pub fn coord(&self) -> Option<Arc<dyn CoordSystem>> {
        self.coord.as_ref()?.upgrade()
    }
}

impl PartialEq for LabelHandle {
    // The coord back-reference is identity metadata, not geometry.
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.position == other.position && self.h_align == other.h_align
    }
}

/// Contract implemented by label layout services.
///
/// The axis renderer hands over final text, position, and alignment; the
/// service owns the label primitives and answers the bounding-box queries
/// behind label auto-rotation.
pub trait LabelLayout {
    /// Places one label and returns its handle.
    fn add_label(&mut self, label: TextPrimitive) -> AxisResult<LabelHandle>;

    /// Bounding box of a previously placed label, if known.
    fn bbox(&self, id: &str) -> Option<Rect>;

    /// Width of the widest label currently placed.
    fn max_label_width(&self) -> f64;

    /// Applies one rotation angle to every placed label.
    fn set_rotation(&mut self, angle_deg: f64);

    /// Removes every label owned by this service.
    fn remove_all(&mut self);
}

/// Default label store with deterministic, backend-independent metrics.
#[derive(Debug, Default)]
pub struct MeasuredLabelLayout {
    labels: IndexMap<String, TextPrimitive>,
    rotation_deg: f64,
}

impl MeasuredLabelLayout {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[must_use]
    pub fn rotation_deg(&self) -> f64 {
        self.rotation_deg
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&TextPrimitive> {
        self.labels.get(id)
    }

    /// Placed labels in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.labels.values()
    }
}

impl LabelLayout for MeasuredLabelLayout {
    fn add_label(&mut self, label: TextPrimitive) -> AxisResult<LabelHandle> {
        label.validate()?;
        let handle = LabelHandle::new(
            label.id.clone(),
            Point::new(label.x, label.y),
            label.h_align,
        );
        self.labels.insert(label.id.clone(), label);
        Ok(handle)
    }

    fn bbox(&self, id: &str) -> Option<Rect> {
        let label = self.labels.get(id)?;
        let width = estimate_label_text_width_px(&label.text, label.font_size_px);
        let height = label.font_size_px;
        let x = match label.h_align {
            TextHAlign::Left => label.x,
            TextHAlign::Center => label.x - width * 0.5,
            TextHAlign::Right => label.x - width,
        };
        let y = match label.baseline {
            TextBaseline::Top => label.y,
            TextBaseline::Middle => label.y - height * 0.5,
            TextBaseline::Bottom => label.y - height,
        };
        Some(Rect::new(x, y, width, height))
    }

    fn max_label_width(&self) -> f64 {
        self.labels
            .values()
            .map(|label| estimate_label_text_width_px(&label.text, label.font_size_px))
            .fold(0.0, f64::max)
    }

    fn set_rotation(&mut self, angle_deg: f64) {
        self.rotation_deg = angle_deg;
        for label in self.labels.values_mut() {
            label.angle_deg = angle_deg;
        }
    }

    fn remove_all(&mut self) {
        self.labels.clear();
        self.rotation_deg = 0.0;
    }
}

fn estimate_label_text_width_px(text: &str, font_size_px: f64) -> f64 {
    // Keep this estimate deterministic and backend-independent.
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' => 0.34,
            '-' | '+' | '%' => 0.42,
            ' ' => 0.33,
            _ => 0.58,
        }
    });
    (units * font_size_px).max(font_size_px)
}
