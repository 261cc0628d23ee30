//! Filesystem-backed configuration loading and persistence.

mod load_or_default;
mod save;

pub use load_or_default::{FallbackReason, load_or_default};
pub(crate) use load_or_default::{LoadOutcome, resolve};
pub(crate) use save::save;
