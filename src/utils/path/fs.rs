//! Filesystem path resolution.
//!
//! - `normalize_path` - absolute form (canonicalize + fallback)
//! - `resolve_path` - config value (`~`, relative) to absolute path
//! - `relative_to` - shorten a path for log output

use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Resolve a configured path against `root`.
///
/// A leading `~` is expanded to the home directory. Relative paths are
/// joined onto `root`. The result is always absolute.
///
/// # Example
/// ```ignore
/// // [source] dir = "blog", config at /site/tola-index.toml
/// let dir = resolve_path(Path::new("blog"), Path::new("/site"));
/// assert_eq!(dir, PathBuf::from("/site/blog"));
/// ```
pub fn resolve_path(path: &Path, root: &Path) -> PathBuf {
    let expanded = match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
        None => path.to_path_buf(),
    };

    if expanded.is_absolute() {
        normalize_path(&expanded)
    } else {
        normalize_path(&root.join(expanded))
    }
}

/// Strip `base` from `path` when possible, for shorter log lines.
#[inline]
pub fn relative_to<'a>(path: &'a Path, base: &Path) -> &'a Path {
    path.strip_prefix(base).unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_relative() {
        let normalized = normalize_path(Path::new("relative/path/file.md"));
        assert!(normalized.is_absolute());
    }

    #[test]
    fn test_resolve_path_absolute() {
        let resolved = resolve_path(Path::new("/absolute/blog"), Path::new("/site"));
        assert_eq!(resolved, PathBuf::from("/absolute/blog"));
    }

    #[test]
    fn test_resolve_path_relative_to_root() {
        let resolved = resolve_path(Path::new("nonexistent/blog"), Path::new("/site"));
        assert_eq!(resolved, PathBuf::from("/site/nonexistent/blog"));
    }

    #[test]
    fn test_resolve_path_existing_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("blog")).unwrap();
        let resolved = resolve_path(Path::new("blog"), dir.path());
        assert_eq!(resolved, normalize_path(&dir.path().join("blog")));
        assert!(resolved.is_dir());
    }

    #[test]
    fn test_resolve_path_tilde() {
        let resolved = resolve_path(Path::new("~/blog"), Path::new("/site"));
        assert!(!resolved.starts_with("/site"));
        assert!(resolved.ends_with("blog"));
    }

    #[test]
    fn test_relative_to() {
        let path = Path::new("/site/blog/2021/post.md");
        assert_eq!(relative_to(path, Path::new("/site")), Path::new("blog/2021/post.md"));
        assert_eq!(relative_to(path, Path::new("/other")), path);
    }
}
