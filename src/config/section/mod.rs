//! Configuration section definitions.
//!
//! Each module corresponds to a section in `tola-index.toml`:
//!
//! | Module   | TOML Section | Purpose                               |
//! |----------|--------------|---------------------------------------|
//! | `source` | `[source]`   | Content directory, path prefix        |
//! | `meta`   | `[meta]`     | Recognized fields, reading speed      |
//! | `index`  | `[index]`    | Index name, credentials, endpoint     |

mod index;
mod meta;
mod source;

pub use index::IndexSectionConfig;
pub use meta::MetaConfig;
pub use source::SourceConfig;
