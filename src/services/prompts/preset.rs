use crate::domain::{AppError, Config, ConfigField};
use crate::ports::ConfigPrompt;

/// Assigns a value supplied up front, without asking.
#[derive(Debug, Clone)]
pub struct PresetPrompt {
    field: ConfigField,
    value: String,
}

impl PresetPrompt {
    pub fn new(field: ConfigField, value: impl Into<String>) -> Self {
        Self { field, value: value.into() }
    }
}

impl ConfigPrompt for PresetPrompt {
    fn run(&self, config: &mut Config) -> Result<(), AppError> {
        if self.value.trim().is_empty() {
            return Err(AppError::Prompt(format!("{} cannot be empty", self.field.key())));
        }
        self.field.set(config, self.value.clone());
        Ok(())
    }
}
