//! Effective configuration lookup with fallback to defaults.

use std::fs;
use std::io;
use std::path::Path;

use crate::domain::config::{parse_config_content, paths};
use crate::domain::{AppError, Config};

/// Why the fallback configuration was used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    Missing,
    Unreadable,
    Unparseable,
}

impl FallbackReason {
    pub fn describe(self) -> &'static str {
        match self {
            FallbackReason::Missing => "no configuration file found",
            FallbackReason::Unreadable => "configuration file could not be read",
            FallbackReason::Unparseable => "configuration file is invalid",
        }
    }
}

/// Result of looking up `.gebug/config.yaml`.
#[derive(Debug)]
pub(crate) enum LoadOutcome {
    Loaded(Config),
    Fallback(FallbackReason),
}

/// Load `.gebug/config.yaml` under `work_dir`, or fall back to defaults.
///
/// Never fails. The returned flag is `true` only when an existing file was
/// read and parsed; read and parse failures are logged and treated as absent.
pub fn load_or_default(work_dir: &Path) -> (Config, bool) {
    match resolve(work_dir) {
        LoadOutcome::Loaded(config) => (config, true),
        LoadOutcome::Fallback(_) => (Config::default(), false),
    }
}

pub(crate) fn resolve(work_dir: &Path) -> LoadOutcome {
    let path = paths::config_file(work_dir);

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "No configuration file, using defaults");
            return LoadOutcome::Fallback(FallbackReason::Missing);
        }
        Err(err) => {
            tracing::error!(
                path = %path.display(),
                error = %err,
                "Failed to read configuration file"
            );
            return LoadOutcome::Fallback(FallbackReason::Unreadable);
        }
    };

    match parse_config_content(&content) {
        Ok(config) => {
            tracing::debug!(path = %path.display(), "Loaded configuration");
            LoadOutcome::Loaded(config)
        }
        Err(err) => {
            log_parse_failure(&path, &err);
            LoadOutcome::Fallback(FallbackReason::Unparseable)
        }
    }
}

fn log_parse_failure(path: &Path, err: &AppError) {
    tracing::error!(
        path = %path.display(),
        error = %err,
        "Failed to load configuration content"
    );
}
