use std::path::Path;

use crate::app::config::save;
use crate::domain::{AppError, Config};
use crate::ports::ConfigPrompt;

/// Execute the setup command.
///
/// Runs `prompts` in order against `config`, then persists the result under
/// `work_dir`. The first prompt failure is returned as-is; nothing is written
/// in that case.
pub fn execute(
    config: &mut Config,
    prompts: &[Box<dyn ConfigPrompt>],
    work_dir: &Path,
) -> Result<(), AppError> {
    for prompt in prompts {
        prompt.run(config)?;
    }

    save(work_dir, config).map_err(|e| AppError::at_stage("save configuration", e))
}
