//! Prefix-partitioned delegation to nested resolvers.

use std::path::PathBuf;

use tracing::debug;
use vista_core::RenderContext;

use crate::error::ResolverResult;
use crate::outcome::{NotFoundReason, Resolution};
use crate::path_stack::TemplatePathStack;
use crate::traits::Resolver;

/// What a prefix registration delegates to: a set of directories (turned
/// into a [`TemplatePathStack`] at registration time) or a ready-made
/// resolver.
pub enum PrefixTarget {
    Paths(Vec<PathBuf>),
    Resolver(Box<dyn Resolver>),
}

impl From<Vec<PathBuf>> for PrefixTarget {
    fn from(paths: Vec<PathBuf>) -> Self {
        PrefixTarget::Paths(paths)
    }
}

impl From<PathBuf> for PrefixTarget {
    fn from(path: PathBuf) -> Self {
        PrefixTarget::Paths(vec![path])
    }
}

impl From<&str> for PrefixTarget {
    fn from(path: &str) -> Self {
        PrefixTarget::Paths(vec![PathBuf::from(path)])
    }
}

impl From<Box<dyn Resolver>> for PrefixTarget {
    fn from(resolver: Box<dyn Resolver>) -> Self {
        PrefixTarget::Resolver(resolver)
    }
}

/// Delegates resolution to a sub-resolver selected by namespace prefix.
///
/// Prefixes partition the name space: they are tried in registration order
/// and the first literal string-prefix match is decisive. If its
/// sub-resolver misses, the whole call misses; no other prefix is tried.
pub struct PrefixPathStackResolver {
    entries: Vec<(String, Box<dyn Resolver>)>,
}

impl Default for PrefixPathStackResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixPathStackResolver {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a prefix. Path targets are materialized into a
    /// [`TemplatePathStack`] immediately.
    pub fn register(&mut self, prefix: impl Into<String>, target: impl Into<PrefixTarget>) -> &mut Self {
        let resolver: Box<dyn Resolver> = match target.into() {
            PrefixTarget::Paths(paths) => Box::new(TemplatePathStack::with_paths(paths)),
            PrefixTarget::Resolver(resolver) => resolver,
        };
        self.entries.push((prefix.into(), resolver));
        self
    }

    /// Registered prefixes in registration order.
    pub fn prefixes(&self) -> Vec<&str> {
        self.entries.iter().map(|(p, _)| p.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Resolver for PrefixPathStackResolver {
    fn resolve(&self, name: &str, context: &dyn RenderContext) -> ResolverResult<Resolution> {
        for (prefix, resolver) in &self.entries {
            if let Some(remainder) = name.strip_prefix(prefix.as_str()) {
                // Accept prefixes registered with or without a trailing
                // separator.
                let remainder = remainder.trim_start_matches('/');
                debug!("Prefix '{}' matched '{}'; delegating '{}'", prefix, name, remainder);
                return resolver.resolve(remainder, context);
            }
        }

        Ok(Resolution::NotFound(NotFoundReason::NoMatchingPrefix))
    }
}
