//! Path-stack template resolution.

use std::path::{Path, PathBuf};

use tracing::debug;
use vista_core::{name, RenderContext};

use crate::error::{ResolverError, ResolverResult};
use crate::outcome::{NotFoundReason, Resolution};
use crate::traits::Resolver;

/// Default view-script suffix appended to names without one.
pub const DEFAULT_SUFFIX: &str = "phtml";

/// Resolves logical names by probing an ordered list of directories.
///
/// Directories are tried **last-registered-first**: the stack discipline
/// lets later-registered paths (theme overrides) shadow earlier ones
/// (module defaults).
///
/// Parent-directory traversal in names is rejected with a hard error while
/// LFI protection is enabled (the default); disabling it is the caller's
/// security decision.
#[derive(Debug, Clone)]
pub struct TemplatePathStack {
    paths: Vec<PathBuf>,
    default_suffix: String,
    lfi_protection: bool,
}

impl Default for TemplatePathStack {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            default_suffix: DEFAULT_SUFFIX.to_string(),
            lfi_protection: true,
        }
    }
}

impl TemplatePathStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stack with an initial set of directories, registered in
    /// iteration order (so the last one is tried first).
    pub fn with_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut stack = Self::new();
        stack.add_paths(paths);
        stack
    }

    /// Register a directory. It becomes the first one tried.
    pub fn add_path(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.paths.push(path.into());
        self
    }

    /// Register several directories in iteration order.
    pub fn add_paths<I, P>(&mut self, paths: I) -> &mut Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        for path in paths {
            self.add_path(path);
        }
        self
    }

    /// Replace all registered directories.
    pub fn set_paths(&mut self, paths: Vec<PathBuf>) -> &mut Self {
        self.paths = paths;
        self
    }

    pub fn clear_paths(&mut self) -> &mut Self {
        self.paths.clear();
        self
    }

    /// Registered directories in registration order.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Set the suffix appended to names without one. A leading dot is
    /// stripped.
    pub fn set_default_suffix(&mut self, suffix: impl Into<String>) -> &mut Self {
        let suffix = suffix.into();
        self.default_suffix = suffix.trim_start_matches('.').to_string();
        self
    }

    pub fn default_suffix(&self) -> &str {
        &self.default_suffix
    }

    /// Enable or disable parent-directory traversal protection.
    pub fn set_lfi_protection(&mut self, enabled: bool) -> &mut Self {
        self.lfi_protection = enabled;
        self
    }

    pub fn lfi_protection(&self) -> bool {
        self.lfi_protection
    }
}

/// Archive-scheme paths (e.g. `phar://...`) must not be canonicalized;
/// realpath-style resolution breaks archive-internal lookups.
fn has_archive_scheme(path: &Path) -> bool {
    path.to_string_lossy().contains("://")
}

impl Resolver for TemplatePathStack {
    fn resolve(&self, template: &str, _context: &dyn RenderContext) -> ResolverResult<Resolution> {
        if self.lfi_protection && name::has_parent_traversal(template) {
            return Err(ResolverError::TraversalDetected(template.to_string()));
        }

        if self.paths.is_empty() {
            return Ok(Resolution::NotFound(NotFoundReason::NoPathsConfigured));
        }

        let file_name = if name::has_suffix(template) {
            template.to_string()
        } else {
            format!("{}.{}", template, self.default_suffix)
        };

        // Lookup is a concatenation under each registered directory. A
        // rooted name would make `join` discard the directory prefix and
        // escape the stack, so leading separators are stripped first.
        let relative = file_name.trim_start_matches(['/', '\\']);

        for directory in self.paths.iter().rev() {
            let candidate = directory.join(relative);
            if candidate.is_file() {
                let resolved = if has_archive_scheme(&candidate) {
                    candidate
                } else {
                    candidate.canonicalize().unwrap_or(candidate)
                };
                debug!("Resolved '{}' to {:?}", template, resolved);
                return Ok(Resolution::Found(resolved));
            }
        }

        Ok(Resolution::NotFound(NotFoundReason::NotFound))
    }
}
