use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisLayerKind {
    Line,
    Ticks,
    Grid,
    Labels,
    Title,
}

/// Z-order contract for one axis: bottom layer first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisLayerStack {
    pub layers: Vec<AxisLayerKind>,
}

impl AxisLayerStack {
    /// Canonical paint order: the axis line sits beneath tick marks, grid,
    /// labels, and finally the title. Repeated paints always produce this
    /// order, keeping output visually deterministic.
    #[must_use]
    pub fn canonical() -> Self {
        Self {
            layers: vec![
                AxisLayerKind::Line,
                AxisLayerKind::Ticks,
                AxisLayerKind::Grid,
                AxisLayerKind::Labels,
                AxisLayerKind::Title,
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AxisLayerKind, AxisLayerStack};

    #[test]
    fn canonical_stack_orders_line_beneath_ticks_grid_and_labels() {
        let stack = AxisLayerStack::canonical();
        assert_eq!(
            stack.layers,
            vec![
                AxisLayerKind::Line,
                AxisLayerKind::Ticks,
                AxisLayerKind::Grid,
                AxisLayerKind::Labels,
                AxisLayerKind::Title,
            ]
        );
    }
}
