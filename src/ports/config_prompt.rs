//! Prompt capability consumed by configuration setup.

use crate::domain::{AppError, Config};

/// A unit of input gathering that may change the in-progress configuration.
///
/// Setup knows nothing about what a prompt does; it only runs prompts in
/// order and stops at the first failure.
pub trait ConfigPrompt {
    fn run(&self, config: &mut Config) -> Result<(), AppError>;
}
