//! Exact-match template map resolution.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use vista_core::RenderContext;
use walkdir::WalkDir;

use crate::error::ResolverResult;
use crate::outcome::{NotFoundReason, Resolution};
use crate::traits::Resolver;

/// Resolves logical names through an explicit name-to-location mapping.
///
/// Resolution is an O(log n) exact match: no globbing, no suffix handling.
/// The map is typically generated at build time from a view-script tree
/// (see [`TemplateMapResolver::from_directory`]) and consulted before any
/// filesystem probing.
#[derive(Debug, Clone, Default)]
pub struct TemplateMapResolver {
    map: BTreeMap<String, PathBuf>,
}

impl TemplateMapResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver from an existing mapping.
    pub fn from_map(map: BTreeMap<String, PathBuf>) -> Self {
        Self { map }
    }

    /// Build a map by scanning a directory tree: every file carrying the
    /// given suffix is registered under its suffix-less relative path.
    pub fn from_directory(base: &Path, suffix: &str) -> ResolverResult<Self> {
        let suffix = suffix.trim_start_matches('.');
        let mut map = BTreeMap::new();

        for entry in WalkDir::new(base).min_depth(1) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry under {:?}: {}", base, e);
                    continue;
                }
            };
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().map_or(true, |ext| ext != suffix) {
                continue;
            }

            let relative = path.strip_prefix(base).unwrap_or(path);
            let logical = relative
                .with_extension("")
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/");

            let location = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
            debug!("Mapping template '{}' to {:?}", logical, location);
            map.insert(logical, location);
        }

        info!("Mapped {} templates from {:?}", map.len(), base);
        Ok(Self { map })
    }

    /// Replace the entire mapping.
    pub fn set_map(&mut self, map: BTreeMap<String, PathBuf>) -> &mut Self {
        self.map = map;
        self
    }

    /// Register a single name. Never removes; see [`remove`](Self::remove).
    pub fn add(&mut self, name: impl Into<String>, location: impl Into<PathBuf>) -> &mut Self {
        self.map.insert(name.into(), location.into());
        self
    }

    /// Unregister a name, returning its location if it was mapped.
    pub fn remove(&mut self, name: &str) -> Option<PathBuf> {
        self.map.remove(name)
    }

    /// Merge another resolver's entries into this one. Matching keys are
    /// overwritten by the incoming entries; all others are preserved.
    pub fn merge(&mut self, other: TemplateMapResolver) -> &mut Self {
        self.map.extend(other.map);
        self
    }

    /// Pure membership check.
    pub fn has(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Path> {
        self.map.get(name).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_path()))
    }
}

impl FromIterator<(String, PathBuf)> for TemplateMapResolver {
    fn from_iter<I: IntoIterator<Item = (String, PathBuf)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}

impl Resolver for TemplateMapResolver {
    fn resolve(&self, name: &str, _context: &dyn RenderContext) -> ResolverResult<Resolution> {
        match self.map.get(name) {
            Some(location) => Ok(Resolution::Found(location.clone())),
            None => Ok(Resolution::NotFound(NotFoundReason::NotInMap)),
        }
    }
}
