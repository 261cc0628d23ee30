pub mod setup;
pub mod show;
