//! gebug: manage the `.gebug/` build and run configuration of a project.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

pub use app::commands::show::ShowOutcome;
pub use app::config::{FallbackReason, load_or_default};
pub use domain::{AppError, Config, ConfigField};
pub use ports::ConfigPrompt;

/// Run `prompts` in order against `config` and persist the result under `work_dir`.
///
/// Stops at the first failing prompt and returns its error without writing.
/// Persistence failures are reported under the `save configuration` stage.
pub fn setup(
    config: &mut Config,
    prompts: &[Box<dyn ConfigPrompt>],
    work_dir: &Path,
) -> Result<(), AppError> {
    app::commands::setup::execute(config, prompts, work_dir)
}

/// Effective configuration for `work_dir`, including why defaults are in use.
pub fn show(work_dir: &Path) -> ShowOutcome {
    app::commands::show::execute(work_dir)
}
