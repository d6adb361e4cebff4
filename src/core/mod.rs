pub mod coord;
pub mod linear;
pub mod polar;
pub mod tick;
pub mod types;

pub use coord::{CoordSystem, TitlePlacement};
pub use linear::LinearCoord;
pub use polar::PolarCoord;
pub use tick::{TickInput, TickMarkSegment, TickRecord, normalize_ticks, sub_tick_values};
pub use types::{AxisId, Point, Rect, Vector};
