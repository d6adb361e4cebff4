use serde::{Deserialize, Serialize};

use crate::core::types::Point;

/// One renderable tick: display text plus a normalized position in `[0, 1]`
/// along the axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickRecord {
    pub text: String,
    pub value: f64,
}

impl TickRecord {
    #[must_use]
    pub fn new(text: impl Into<String>, value: f64) -> Self {
        Self {
            text: text.into(),
            value,
        }
    }
}

/// Raw tick input accepted by [`normalize_ticks`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TickInput {
    /// Display text only; the position is synthesized from the list index.
    Raw(String),
    /// Pre-shaped record, passed through unchanged.
    Record(TickRecord),
}

impl From<&str> for TickInput {
    fn from(text: &str) -> Self {
        Self::Raw(text.to_owned())
    }
}

impl From<String> for TickInput {
    fn from(text: String) -> Self {
        Self::Raw(text)
    }
}

impl From<TickRecord> for TickInput {
    fn from(record: TickRecord) -> Self {
        Self::Record(record)
    }
}

impl From<(&str, f64)> for TickInput {
    fn from((text, value): (&str, f64)) -> Self {
        Self::Record(TickRecord::new(text, value))
    }
}

/// Mark segment for one major or minor tick.
///
/// Segments belong to the current paint pass: they are rebuilt from scratch
/// on every repaint and never survive across passes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickMarkSegment {
    pub start: Point,
    pub end: Point,
}

/// Converts raw tick input into a uniform record list.
///
/// Raw entries receive `value = index / (N - 1)`; lists of length 0 or 1 fall
/// back to `value = 0.0`. Records pass through untouched, so feeding the
/// output back in yields an identical list.
///
/// Ticks must already be ordered ascending by intended display position;
/// this function never re-sorts.
#[must_use]
pub fn normalize_ticks(inputs: &[TickInput]) -> Vec<TickRecord> {
    let len = inputs.len();
    inputs
        .iter()
        .enumerate()
        .map(|(index, input)| match input {
            TickInput::Record(record) => record.clone(),
            TickInput::Raw(text) => {
                let value = if len <= 1 {
                    0.0
                } else {
                    index as f64 / (len - 1) as f64
                };
                TickRecord::new(text.clone(), value)
            }
        })
        .collect()
}

/// Interpolates `sub_tick_count` minor-tick positions strictly between each
/// pair of adjacent major ticks.
///
/// Nothing is produced before the first or after the last major tick; lists
/// shorter than two ticks yield no minor positions.
#[must_use]
pub fn sub_tick_values(ticks: &[TickRecord], sub_tick_count: usize) -> Vec<f64> {
    if sub_tick_count == 0 || ticks.len() < 2 {
        return Vec::new();
    }

    let mut values = Vec::with_capacity((ticks.len() - 1) * sub_tick_count);
    for pair in ticks.windows(2) {
        let step = (pair[1].value - pair[0].value) / (sub_tick_count + 1) as f64;
        for i in 1..=sub_tick_count {
            values.push(pair[0].value + step * i as f64);
        }
    }
    values
}
