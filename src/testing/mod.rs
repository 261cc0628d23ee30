
#[allow(unused_imports)]
pub use scripted_prompt::{RunLog, ScriptedPrompt, run_log};
