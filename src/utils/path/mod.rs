//! Path utilities.
//!
//! - [`fs`]: Filesystem path resolution (`normalize_path`, `resolve_path`, `relative_to`)

pub mod fs;

pub use fs::{normalize_path, relative_to, resolve_path};
