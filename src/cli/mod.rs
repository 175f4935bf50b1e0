//! Command-line interface module.

mod args;
pub mod common;
pub mod index;
pub mod query;

pub use args::{Cli, Commands, DEFAULT_CONFIG};
