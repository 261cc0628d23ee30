pub mod model;
pub mod parse;
pub mod paths;

pub use model::{Config, ConfigField};
pub use parse::{parse_config_content, write_config};
