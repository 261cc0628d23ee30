//! Configuration persistence.

use std::fs::{self, File};
use std::path::Path;

use crate::domain::config::{paths, write_config};
use crate::domain::{AppError, Config};

/// Write `config` to `.gebug/config.yaml` under `work_dir`.
///
/// The file is created or truncated. A failed write may leave it partially
/// written.
pub(crate) fn save(work_dir: &Path, config: &Config) -> Result<(), AppError> {
    let config_path = paths::config_file(work_dir);
    let root_dir = paths::root_dir(work_dir);

    if !config_path.exists() && !root_dir.exists() {
        create_root_dir(&root_dir)
            .map_err(|e| AppError::at_stage("create config directory", e))?;
    }

    let file =
        File::create(&config_path).map_err(|e| AppError::at_stage("create config file", e))?;
    write_config(&file, config)
        .map_err(|e| AppError::at_stage("write configurations to config file", e))?;

    tracing::debug!(path = %config_path.display(), "Saved configuration");
    Ok(())
}

#[cfg(unix)]
fn create_root_dir(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    fs::DirBuilder::new().mode(0o755).create(path)
}

#[cfg(not(unix))]
fn create_root_dir(path: &Path) -> std::io::Result<()> {
    fs::create_dir(path)
}
