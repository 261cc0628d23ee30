//! Init command implementation.

use std::collections::HashMap;
use std::path::Path;

use clap::Args;

use crate::app::commands::setup;
use crate::app::config::load_or_default;
use crate::domain::config::paths;
use crate::domain::{AppError, ConfigField};
use crate::services::prompts;

#[derive(Args, Debug, Default)]
pub struct InitArgs {
    /// Path of the build artifact inside the container
    #[arg(long)]
    pub output_binary: Option<String>,
    /// Build command template (may reference {{.output_binary}})
    #[arg(long, allow_hyphen_values = true)]
    pub build_command: Option<String>,
    /// Run command template (may reference {{.output_binary}})
    #[arg(long, allow_hyphen_values = true)]
    pub run_command: Option<String>,
    /// Container image to run the binary in
    #[arg(long)]
    pub runtime_image: Option<String>,
    /// Keep current values for fields not given as flags instead of prompting
    #[arg(short = 'y', long)]
    pub defaults: bool,
}

impl InitArgs {
    fn presets(&self) -> HashMap<ConfigField, String> {
        [
            (ConfigField::OutputBinary, &self.output_binary),
            (ConfigField::BuildCommand, &self.build_command),
            (ConfigField::RunCommand, &self.run_command),
            (ConfigField::RuntimeImage, &self.runtime_image),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.clone().map(|v| (field, v)))
        .collect()
    }
}

pub fn run_init(work_dir: &Path, args: &InitArgs) -> Result<(), AppError> {
    let (mut config, found) = load_or_default(work_dir);
    tracing::debug!(found_existing = found, "Starting configuration setup");

    let prompts = prompts::for_fields(&args.presets(), !args.defaults);
    setup::execute(&mut config, &prompts, work_dir)?;

    println!("✅ Saved configuration to {}", paths::config_file(work_dir).display());
    Ok(())
}
