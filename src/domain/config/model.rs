//! Project configuration model and its fallback values.

use serde::{Deserialize, Serialize};

pub const DEFAULT_OUTPUT_BINARY: &str = "/app";
pub const DEFAULT_BUILD_COMMAND: &str = "go build -o {{.output_binary}}";
pub const DEFAULT_RUN_COMMAND: &str = "{{.output_binary}}";
pub const DEFAULT_RUNTIME_IMAGE: &str = "golang:1.14";

/// Build and run settings persisted in `.gebug/config.yaml`.
///
/// Build and run commands are templates; `{{.output_binary}}` refers to
/// [`Config::output_binary`]. Expansion happens in the consumer, never here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Path of the build artifact inside the container.
    pub output_binary: String,
    pub build_command: String,
    pub run_command: String,
    /// Container image the artifact runs in.
    pub runtime_image: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_binary: DEFAULT_OUTPUT_BINARY.to_string(),
            build_command: DEFAULT_BUILD_COMMAND.to_string(),
            run_command: DEFAULT_RUN_COMMAND.to_string(),
            runtime_image: DEFAULT_RUNTIME_IMAGE.to_string(),
        }
    }
}

/// Addressable configuration fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConfigField {
    OutputBinary,
    BuildCommand,
    RunCommand,
    RuntimeImage,
}

impl ConfigField {
    /// Fields in prompting order. Later fields may reference earlier ones.
    pub const ALL: [ConfigField; 4] = [
        ConfigField::OutputBinary,
        ConfigField::BuildCommand,
        ConfigField::RunCommand,
        ConfigField::RuntimeImage,
    ];

    /// Serialized key of the field.
    pub fn key(self) -> &'static str {
        match self {
            ConfigField::OutputBinary => "output_binary",
            ConfigField::BuildCommand => "build_command",
            ConfigField::RunCommand => "run_command",
            ConfigField::RuntimeImage => "runtime_image",
        }
    }

    /// Human-facing label used when prompting.
    pub fn label(self) -> &'static str {
        match self {
            ConfigField::OutputBinary => "Output binary path",
            ConfigField::BuildCommand => "Build command",
            ConfigField::RunCommand => "Run command",
            ConfigField::RuntimeImage => "Runtime image",
        }
    }

    pub fn get(self, config: &Config) -> &str {
        match self {
            ConfigField::OutputBinary => &config.output_binary,
            ConfigField::BuildCommand => &config.build_command,
            ConfigField::RunCommand => &config.run_command,
            ConfigField::RuntimeImage => &config.runtime_image,
        }
    }

    pub fn set(self, config: &mut Config, value: String) {
        let slot = match self {
            ConfigField::OutputBinary => &mut config.output_binary,
            ConfigField::BuildCommand => &mut config.build_command,
            ConfigField::RunCommand => &mut config.run_command,
            ConfigField::RuntimeImage => &mut config.runtime_image,
        };
        *slot = value;
    }
}
