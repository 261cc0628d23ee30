mod config_prompt;

pub use config_prompt::ConfigPrompt;
