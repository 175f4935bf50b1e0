//! Shared helpers.

pub mod date;
pub mod path;
pub mod plural;
pub mod text;
