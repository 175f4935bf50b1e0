//! Page route - filename to index path mapping.

/// Path information derived from a source filename
///
/// # Example
///
/// ```text
/// Source:    /blog/2021 + posts/MyPost.md
///
/// PageRoute {
///     name:      MyPost
///     path:      /blog/2021/-my-post/
///     object_id: :blog:2021:-my-post:
/// }
/// ```
///
/// The slug is not trimmed: a name starting with an uppercase letter gets a
/// leading `-`, and published URLs depend on that.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRoute {
    /// Filename without directories and `.md` (e.g., `MyPost`)
    pub name: String,
    /// Index path (e.g., `/blog/2021/-my-post/`)
    pub path: String,
    /// Record identifier: `path` with `/` replaced by `:`
    pub object_id: String,
}

impl PageRoute {
    pub fn new(root_path: &str, filename: &str) -> Self {
        let name = page_name(filename);
        let slug = dashed_name(&name);
        let path = format!("{root_path}/{slug}/");
        let object_id = object_id(&path);
        Self {
            name,
            path,
            object_id,
        }
    }
}

/// Strip directories (either separator) and the first `.md` occurrence.
///
/// # Examples
///
/// - `"posts/MyPost.md"` -> `"MyPost"`
/// - `"C:\\posts\\Note.md"` -> `"Note"`
/// - `"notes.md.bak"` -> `"notes.bak"`
pub fn page_name(filename: &str) -> String {
    let base = filename
        .rfind(['/', '\\'])
        .map_or(filename, |i| &filename[i + 1..]);
    base.replacen(".md", "", 1)
}

/// Insert `-` before every ASCII uppercase letter and lowercase it.
///
/// # Examples
///
/// - `"MyPost"` -> `"-my-post"`
/// - `"hello"` -> `"hello"`
/// - `"getHTTP"` -> `"get-h-t-t-p"`
pub fn dashed_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Replace every `/` in a path with `:`.
#[inline]
pub fn object_id(path: &str) -> String {
    path.replace('/', ":")
}
