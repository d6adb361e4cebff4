use crate::core::types::Vector;
use crate::render::TextHAlign;

/// Text anchor for a label pushed away from the axis along `vector`.
///
/// A dominantly vertical vector centers the label (it sits above or below
/// the axis); otherwise the label leads with the edge facing the axis.
pub(super) fn text_anchor(vector: Vector) -> TextHAlign {
    if vector.x == 0.0 {
        return TextHAlign::Center;
    }
    if (vector.y / vector.x).abs() >= 1.0 {
        TextHAlign::Center
    } else if vector.x > 0.0 {
        TextHAlign::Left
    } else {
        TextHAlign::Right
    }
}
