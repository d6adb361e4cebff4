use serde::{Deserialize, Serialize};

use crate::error::{AxisError, AxisResult};

use super::AxisConfig;

pub const AXIS_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Versioned envelope for persisted axis configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: AxisConfig,
}

impl AxisConfig {
    /// Serializes this config as a versioned JSON document.
    ///
    /// The label formatter closure is not representable in JSON and is
    /// dropped from the payload.
    pub fn to_json_contract_v1_pretty(&self) -> AxisResult<String> {
        let payload = AxisConfigJsonContractV1 {
            schema_version: AXIS_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            AxisError::InvalidData(format!("failed to serialize axis config contract v1: {e}"))
        })
    }

    /// Parses a versioned envelope, falling back to a bare config document.
    ///
    /// The envelope is tried first: a bare `AxisConfig` parse accepts almost
    /// any object because every field carries a default.
    pub fn from_json_compat_str(input: &str) -> AxisResult<Self> {
        if let Ok(payload) = serde_json::from_str::<AxisConfigJsonContractV1>(input) {
            if payload.schema_version != AXIS_CONFIG_JSON_SCHEMA_V1 {
                return Err(AxisError::InvalidData(format!(
                    "unsupported axis config schema version: {}",
                    payload.schema_version
                )));
            }
            return Ok(payload.config);
        }
        serde_json::from_str::<AxisConfig>(input).map_err(|e| {
            AxisError::InvalidData(format!("failed to parse axis config json payload: {e}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::AXIS_CONFIG_JSON_SCHEMA_V1;
    use crate::api::{AxisConfig, GridStyle, TickLineStyle};

    #[test]
    fn contract_round_trip_preserves_the_config() {
        let config = AxisConfig::default()
            .with_tick_line(TickLineStyle::default().with_length(5.0))
            .with_grid(GridStyle::default());

        let json = config.to_json_contract_v1_pretty().expect("serialize");
        assert!(json.contains(&format!(
            "\"schema_version\": {AXIS_CONFIG_JSON_SCHEMA_V1}"
        )));

        let restored = AxisConfig::from_json_compat_str(&json).expect("parse");
        assert_eq!(config, restored);
    }

    #[test]
    fn bare_config_documents_are_still_accepted() {
        let config = AxisConfig::default().with_sub_ticks(3);
        let json = serde_json::to_string(&config).expect("serialize");

        let restored = AxisConfig::from_json_compat_str(&json).expect("parse");
        assert_eq!(restored.sub_tick_count, 3);
    }

    #[test]
    fn unsupported_schema_versions_are_rejected() {
        let json = r#"{ "schema_version": 99, "config": {} }"#;
        assert!(AxisConfig::from_json_compat_str(json).is_err());
    }
}
