mod axis_config;
mod axis_renderer;
mod json_contract;
mod label_placement;

pub use axis_config::{
    AxisConfig, GridStyle, LabelConfig, LabelFormatter, LineStyle, TextStyle, TickLineStyle,
    TitleConfig,
};
pub use axis_renderer::AxisRenderer;
pub use json_contract::{AXIS_CONFIG_JSON_SCHEMA_V1, AxisConfigJsonContractV1};
