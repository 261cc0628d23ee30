use std::path::{Path, PathBuf};

use crate::app::config::{FallbackReason, LoadOutcome, resolve};
use crate::domain::Config;
use crate::domain::config::paths;

/// Effective configuration for a working directory.
#[derive(Debug, Clone)]
pub struct ShowOutcome {
    pub config: Config,
    pub path: PathBuf,
    /// Set when defaults are in effect.
    pub fallback: Option<FallbackReason>,
}

impl ShowOutcome {
    pub fn found_existing(&self) -> bool {
        self.fallback.is_none()
    }
}

/// Execute the show command.
pub fn execute(work_dir: &Path) -> ShowOutcome {
    let path = paths::config_file(work_dir);
    match resolve(work_dir) {
        LoadOutcome::Loaded(config) => ShowOutcome { config, path, fallback: None },
        LoadOutcome::Fallback(reason) => {
            ShowOutcome { config: Config::default(), path, fallback: Some(reason) }
        }
    }
}
