use dialoguer::Input;

use crate::domain::{AppError, Config, ConfigField};
use crate::ports::ConfigPrompt;

/// Asks for one field on the terminal, pre-filled with its current value.
#[derive(Debug, Clone, Copy)]
pub struct InteractivePrompt {
    field: ConfigField,
}

impl InteractivePrompt {
    pub fn new(field: ConfigField) -> Self {
        Self { field }
    }
}

impl ConfigPrompt for InteractivePrompt {
    fn run(&self, config: &mut Config) -> Result<(), AppError> {
        let value = Input::<String>::new()
            .with_prompt(self.field.label())
            .default(self.field.get(config).to_string())
            .validate_with(|input: &String| -> Result<(), &'static str> {
                if input.trim().is_empty() { Err("Value cannot be empty") } else { Ok(()) }
            })
            .interact_text()
            .map_err(|e| AppError::Prompt(format!("{} input failed: {e}", self.field.key())))?;

        self.field.set(config, value.trim().to_string());
        Ok(())
    }
}
