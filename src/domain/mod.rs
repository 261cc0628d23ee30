pub mod config;
pub mod error;

pub use config::{Config, ConfigField};
pub use error::AppError;
