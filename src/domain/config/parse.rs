//! Pure parse/serialize for project configuration (`config.yaml`).

use std::io::Write;

use crate::domain::{AppError, Config};

/// Parse configuration from YAML content.
pub fn parse_config_content(content: &str) -> Result<Config, AppError> {
    serde_yaml::from_str(content).map_err(|e| AppError::ParseError {
        what: "config.yaml".to_string(),
        details: e.to_string(),
    })
}

/// Serialize configuration as YAML into `writer`.
pub fn write_config<W: Write>(writer: W, config: &Config) -> Result<(), AppError> {
    serde_yaml::to_writer(writer, config).map_err(|e| AppError::Serialization {
        what: "config.yaml".to_string(),
        details: e.to_string(),
    })
}
