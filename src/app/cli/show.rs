//! Show and path command implementations.

use std::path::Path;

use clap::ValueEnum;

use crate::app::commands::show;
use crate::domain::config::paths;
use crate::domain::{AppError, Config};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ShowFormat {
    #[default]
    Yaml,
    Json,
}

pub fn run_show(work_dir: &Path, format: ShowFormat) -> Result<(), AppError> {
    let outcome = show::execute(work_dir);
    if let Some(reason) = outcome.fallback {
        eprintln!("ℹ️  Using defaults: {} ({})", reason.describe(), outcome.path.display());
    }

    print!("{}", render(&outcome.config, format)?);
    Ok(())
}

pub fn run_path(work_dir: &Path) -> Result<(), AppError> {
    println!("{}", paths::config_file(work_dir).display());
    Ok(())
}

fn render(config: &Config, format: ShowFormat) -> Result<String, AppError> {
    match format {
        ShowFormat::Yaml => serde_yaml::to_string(config).map_err(|e| AppError::Serialization {
            what: "configuration".to_string(),
            details: e.to_string(),
        }),
        ShowFormat::Json => serde_json::to_string_pretty(config)
            .map(|json| json + "\n")
            .map_err(|e| AppError::Serialization {
                what: "configuration".to_string(),
                details: e.to_string(),
            }),
    }
}
