//! Resolution outcomes.

use std::fmt;
use std::path::{Path, PathBuf};

/// Why a resolution call produced no location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundReason {
    /// The aggregate has no resolvers attached.
    NoResolversConfigured,
    /// The path stack has no directories registered.
    NoPathsConfigured,
    /// The name is not present in the template map.
    NotInMap,
    /// No registered prefix matches the name.
    NoMatchingPrefix,
    /// No template is currently being rendered, or the active template has
    /// no namespace to resolve relative to.
    NoActiveTemplate,
    /// Every candidate was tried and none matched.
    NotFound,
}

impl fmt::Display for NotFoundReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            NotFoundReason::NoResolversConfigured => "no resolvers configured",
            NotFoundReason::NoPathsConfigured => "no paths configured",
            NotFoundReason::NotInMap => "name not in template map",
            NotFoundReason::NoMatchingPrefix => "no matching prefix",
            NotFoundReason::NoActiveTemplate => "no active template",
            NotFoundReason::NotFound => "template not found",
        };
        f.write_str(reason)
    }
}

/// Outcome of a resolution call: the physical location of the template, or
/// the reason it was not found.
///
/// A `NotFound` outcome is an expected miss and lets callers fall through to
/// the next resolver; hard failures (traversal protection, I/O) are
/// [`crate::ResolverError`]s instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(PathBuf),
    NotFound(NotFoundReason),
}

impl Resolution {
    /// The resolved location, if found.
    pub fn found(&self) -> Option<&Path> {
        match self {
            Resolution::Found(path) => Some(path),
            Resolution::NotFound(_) => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }

    /// The miss reason, if not found.
    pub fn not_found_reason(&self) -> Option<NotFoundReason> {
        match self {
            Resolution::Found(_) => None,
            Resolution::NotFound(reason) => Some(*reason),
        }
    }

    /// The resolved location, consuming the outcome.
    pub fn into_found(self) -> Option<PathBuf> {
        match self {
            Resolution::Found(path) => Some(path),
            Resolution::NotFound(_) => None,
        }
    }
}
