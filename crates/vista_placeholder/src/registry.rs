//! Registry of named placeholder containers.
//!
//! The registry is an explicit object owned by the render pass and passed to
//! whoever needs it; there is deliberately no process-global instance.

use std::collections::HashMap;

use tracing::debug;

use crate::container::PlaceholderContainer;

/// Named placeholder containers for one render pass.
#[derive(Debug, Default)]
pub struct PlaceholderRegistry {
    containers: HashMap<String, PlaceholderContainer>,
}

impl PlaceholderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the container for a placeholder slot, creating it on first
    /// access.
    pub fn container(&mut self, name: &str) -> &mut PlaceholderContainer {
        self.containers.entry(name.to_string()).or_insert_with(|| {
            debug!("Creating placeholder container: {}", name);
            PlaceholderContainer::new()
        })
    }

    /// Look up an existing container without creating one.
    pub fn get(&self, name: &str) -> Option<&PlaceholderContainer> {
        self.containers.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.containers.contains_key(name)
    }

    /// Remove a container, returning it if present.
    pub fn delete(&mut self, name: &str) -> Option<PlaceholderContainer> {
        self.containers.remove(name)
    }

    /// Names of all registered containers, sorted for determinism.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.containers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn clear(&mut self) {
        self.containers.clear();
    }

    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_created_on_access() {
        let mut registry = PlaceholderRegistry::new();
        assert!(!registry.contains("head_script"));

        registry.container("head_script").append("var x = 1;");
        assert!(registry.contains("head_script"));
        assert_eq!(registry.get("head_script").unwrap().len(), 1);
    }

    #[test]
    fn test_repeat_access_returns_same_container() {
        let mut registry = PlaceholderRegistry::new();
        registry.container("title").append("Home");
        registry.container("title").append(" - Site");

        assert_eq!(registry.get("title").unwrap().len(), 2);
    }

    #[test]
    fn test_delete() {
        let mut registry = PlaceholderRegistry::new();
        registry.container("tmp").set("x");

        let removed = registry.delete("tmp").unwrap();
        assert_eq!(removed.len(), 1);
        assert!(!registry.contains("tmp"));
        assert!(registry.delete("tmp").is_none());
    }

    #[test]
    fn test_names_sorted() {
        let mut registry = PlaceholderRegistry::new();
        registry.container("b");
        registry.container("a");
        registry.container("c");

        assert_eq!(registry.names(), vec!["a", "b", "c"]);
    }
}
