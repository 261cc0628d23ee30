//! Concrete prompts used by the CLI.

mod interactive;
mod preset;

use std::collections::HashMap;

use crate::domain::ConfigField;
use crate::ports::ConfigPrompt;

pub use interactive::InteractivePrompt;
pub use preset::PresetPrompt;

/// Build the ordered prompt list for `init`.
///
/// Fields follow [`ConfigField::ALL`]. A preset value wins for its field;
/// otherwise the field is asked interactively when `interactive` is set and
/// left alone when it is not.
pub fn for_fields(
    presets: &HashMap<ConfigField, String>,
    interactive: bool,
) -> Vec<Box<dyn ConfigPrompt>> {
    let mut prompts: Vec<Box<dyn ConfigPrompt>> = Vec::new();
    for field in ConfigField::ALL {
        if let Some(value) = presets.get(&field) {
            prompts.push(Box::new(PresetPrompt::new(field, value.clone())));
        } else if interactive {
            prompts.push(Box::new(InteractivePrompt::new(field)));
        }
    }
    prompts
}
