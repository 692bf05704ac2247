//! Logical template name utilities.
//!
//! Template names are opaque strings using `/`-separated namespace segments,
//! e.g. `blog/post` or `admin/users/edit`. These helpers are shared by the
//! resolver chain.

use std::sync::OnceLock;

use regex::Regex;

/// Namespace separator in logical template names.
pub const SEPARATOR: char = '/';

fn traversal_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\.\.[/\\]").expect("valid traversal pattern"))
}

/// Check whether a name contains a parent-directory traversal sequence
/// (`../` or `..\`).
pub fn has_parent_traversal(name: &str) -> bool {
    traversal_pattern().is_match(name)
}

/// Return the namespace portion of a name: everything up to the last
/// separator. `None` when the name has no separator.
pub fn namespace(name: &str) -> Option<&str> {
    name.rfind(SEPARATOR).map(|idx| &name[..idx])
}

/// Check whether the final segment of a name carries a file-extension-like
/// suffix (a dot followed by at least one character).
pub fn has_suffix(name: &str) -> bool {
    let basename = name.rsplit(SEPARATOR).next().unwrap_or(name);
    match basename.rfind('.') {
        Some(idx) => idx + 1 < basename.len(),
        None => false,
    }
}

/// Normalize a logical template name: strips parent-traversal sequences and
/// any file-extension-like suffix.
pub fn normalize(name: &str) -> String {
    let mut cleaned = name.to_string();
    while traversal_pattern().is_match(&cleaned) {
        cleaned = traversal_pattern().replace_all(&cleaned, "").to_string();
    }

    if has_suffix(&cleaned) {
        if let Some(idx) = cleaned.rfind('.') {
            cleaned.truncate(idx);
        }
    }

    cleaned
}
