//! Document discovery.
//!
//! The content directory holds one subdirectory per group; every file below a
//! group, at any depth, is a document:
//!
//! ```text
//! blog/                   ← [source] dir
//! ├── 2020/               ← group, root path /blog/2020
//! │   └── Post.md
//! └── 2021/
//!     ├── MyPost.md
//!     └── drafts/Idea.md  ← still root path /blog/2021
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use jwalk::WalkDir;

use crate::config::SourceConfig;
use crate::debug;

/// A discovered document, read but not yet parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    /// Path relative to the group directory, `/`-separated.
    pub filename: String,
    /// Index path root of the group (e.g., `/blog/2021`).
    pub root_path: String,
    /// File content (invalid UTF-8 is replaced).
    pub content: String,
    /// Absolute source path, for logging.
    pub source: PathBuf,
}

impl RawDocument {
    pub fn new(
        filename: impl Into<String>,
        root_path: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            root_path: root_path.into(),
            content: content.into(),
            source: PathBuf::new(),
        }
    }
}

/// Read every document under the configured content directory.
///
/// Groups and files are visited in name order. Hidden files are read like any
/// other; empty files and names on the ignore list are skipped. Any I/O error
/// aborts the walk.
pub fn collect_documents(source: &SourceConfig) -> Result<Vec<RawDocument>> {
    let mut documents = Vec::new();

    for group in group_dirs(&source.dir)? {
        let Some(group_name) = group.file_name().and_then(|n| n.to_str()) else {
            debug!("index"; "skipping non UTF-8 group {}", group.display());
            continue;
        };
        let root_path = source.root_path(group_name);
        collect_group(&group, &root_path, source, &mut documents)?;
    }

    Ok(documents)
}

/// Immediate subdirectories of the content directory, sorted by name.
fn group_dirs(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read content directory `{}`", dir.display()))?;

    let mut groups = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to read `{}`", dir.display()))?;
        let path = entry.path();
        if path.is_dir() {
            groups.push(path);
        } else {
            debug!("index"; "skipping {} (not inside a group)", path.display());
        }
    }
    groups.sort();
    Ok(groups)
}

fn collect_group(
    group: &Path,
    root_path: &str,
    source: &SourceConfig,
    documents: &mut Vec<RawDocument>,
) -> Result<()> {
    for entry in WalkDir::new(group).sort(true).skip_hidden(false) {
        let entry = entry.with_context(|| format!("failed to walk `{}`", group.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let name = entry.file_name().to_string_lossy();
        if source.is_ignored(&name) {
            debug!("index"; "ignoring {}", path.display());
            continue;
        }

        let bytes =
            fs::read(&path).with_context(|| format!("failed to read `{}`", path.display()))?;
        if bytes.is_empty() {
            debug!("index"; "skipping empty {}", path.display());
            continue;
        }

        documents.push(RawDocument {
            filename: relative_name(&path, group),
            root_path: root_path.to_string(),
            content: String::from_utf8_lossy(&bytes).into_owned(),
            source: path,
        });
    }
    Ok(())
}

/// `/`-separated path of `path` below `group`.
fn relative_name(path: &Path, group: &Path) -> String {
    let relative = path.strip_prefix(group).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn source_for(dir: &TempDir) -> SourceConfig {
        SourceConfig {
            dir: dir.path().to_path_buf(),
            ..SourceConfig::default()
        }
    }

    #[test]
    fn test_collect_groups_and_nested_files() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "2020/Post.md", "---\ntitle: A\n---\nbody");
        write(dir.path(), "2021/MyPost.md", "hello");
        write(dir.path(), "2021/drafts/Idea.md", "idea");

        let docs = collect_documents(&source_for(&dir)).unwrap();
        let summary: Vec<_> = docs
            .iter()
            .map(|d| (d.root_path.as_str(), d.filename.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("/blog/2020", "Post.md"),
                ("/blog/2021", "MyPost.md"),
                ("/blog/2021", "drafts/Idea.md"),
            ]
        );
        assert_eq!(docs[1].content, "hello");
        assert!(docs[1].source.ends_with("2021/MyPost.md"));
    }

    #[test]
    fn test_skips_empty_and_ignored_files() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "2021/empty.md", "");
        write(dir.path(), "2021/.DS_Store", "junk");
        write(dir.path(), "2021/kept.md", "text");

        let docs = collect_documents(&source_for(&dir)).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].filename, "kept.md");
    }

    #[test]
    fn test_skips_top_level_files() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "README.md", "not in a group");
        write(dir.path(), "2021/post.md", "text");

        let docs = collect_documents(&source_for(&dir)).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].root_path, "/blog/2021");
    }

    #[test]
    fn test_custom_prefix() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "notes/a.md", "text");
        let source = SourceConfig {
            prefix: "/articles".to_string(),
            ..source_for(&dir)
        };

        let docs = collect_documents(&source).unwrap();
        assert_eq!(docs[0].root_path, "/articles/notes");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("2021")).unwrap();
        fs::write(dir.path().join("2021/bin.md"), [b'o', b'k', 0xff]).unwrap();

        let docs = collect_documents(&source_for(&dir)).unwrap();
        assert_eq!(docs[0].content, "ok\u{fffd}");
    }

    #[test]
    fn test_missing_content_dir_is_an_error() {
        let dir = TempDir::new().unwrap();
        let source = SourceConfig {
            dir: dir.path().join("missing"),
            ..SourceConfig::default()
        };
        let err = collect_documents(&source).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read content directory"));
    }

    #[test]
    fn test_empty_content_dir() {
        let dir = TempDir::new().unwrap();
        assert!(collect_documents(&source_for(&dir)).unwrap().is_empty());
    }
}
