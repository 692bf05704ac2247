//! Data-driven resolver wiring.
//!
//! A [`ResolverConfig`] describes a full resolver chain (template map,
//! namespace prefixes, path stack) and can be loaded from YAML, TOML, or
//! JSON. [`ResolverConfig::build`] produces the standard chain: the map is
//! consulted first, then prefix partitions, then the path stack.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::aggregate::AggregateResolver;
use crate::error::{ResolverError, ResolverResult};
use crate::map::TemplateMapResolver;
use crate::path_stack::TemplatePathStack;
use crate::prefix::PrefixPathStackResolver;

/// Priority of the template map in the built chain.
pub const MAP_PRIORITY: i32 = 100;
/// Priority of prefix partitions in the built chain.
pub const PREFIX_PRIORITY: i32 = 50;
/// Priority of the path stack in the built chain.
pub const PATH_STACK_PRIORITY: i32 = 1;

fn default_lfi_protection() -> bool {
    true
}

/// One namespace prefix and the directories it delegates to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrefixEntry {
    pub prefix: String,
    pub paths: Vec<PathBuf>,
}

/// Declarative resolver chain configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ResolverConfig {
    /// Exact logical-name-to-location mapping.
    #[serde(default)]
    pub map: BTreeMap<String, PathBuf>,
    /// Path stack directories, in registration order (last tried first).
    #[serde(default)]
    pub paths: Vec<PathBuf>,
    /// Suffix appended to names without one (default "phtml").
    #[serde(default)]
    pub default_suffix: Option<String>,
    /// Parent-traversal protection on the path stack (default on).
    #[serde(default = "default_lfi_protection")]
    pub lfi_protection: bool,
    /// Namespace prefix partitions, in declaration order.
    #[serde(default)]
    pub prefixes: Vec<PrefixEntry>,
}

impl ResolverConfig {
    pub fn from_yaml_str(content: &str) -> ResolverResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_toml_str(content: &str) -> ResolverResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> ResolverResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a configuration file, dispatching on its extension.
    pub fn from_file(path: impl AsRef<Path>) -> ResolverResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&content),
            Some("toml") => Self::from_toml_str(&content),
            Some("json") => Self::from_json_str(&content),
            other => Err(ResolverError::InvalidConfig(format!(
                "Unsupported config format: {:?}",
                other
            ))),
        }
    }

    /// Build the configured resolver chain.
    pub fn build(&self) -> AggregateResolver {
        let mut aggregate = AggregateResolver::new();

        if !self.map.is_empty() {
            let resolver = TemplateMapResolver::from_map(self.map.clone());
            aggregate.attach_labeled(Box::new(resolver), MAP_PRIORITY, Some("template map"));
        }

        if !self.prefixes.is_empty() {
            let mut resolver = PrefixPathStackResolver::new();
            for entry in &self.prefixes {
                resolver.register(entry.prefix.clone(), entry.paths.clone());
            }
            aggregate.attach_labeled(Box::new(resolver), PREFIX_PRIORITY, Some("prefix stack"));
        }

        if !self.paths.is_empty() {
            let mut stack = TemplatePathStack::with_paths(self.paths.clone());
            if let Some(ref suffix) = self.default_suffix {
                stack.set_default_suffix(suffix.clone());
            }
            stack.set_lfi_protection(self.lfi_protection);
            aggregate.attach_labeled(Box::new(stack), PATH_STACK_PRIORITY, Some("path stack"));
        }

        info!(
            "Built resolver chain: {} map entries, {} prefixes, {} paths",
            self.map.len(),
            self.prefixes.len(),
            self.paths.len()
        );
        aggregate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_config() {
        let config = ResolverConfig::from_yaml_str(
            r#"
map:
  error/404: /views/error/404.phtml
paths:
  - /views/default
  - /views/theme
default_suffix: tpl
prefixes:
  - prefix: mail
    paths: [/views/mail]
"#,
        )
        .unwrap();

        assert_eq!(config.map.len(), 1);
        assert_eq!(config.paths.len(), 2);
        assert_eq!(config.default_suffix.as_deref(), Some("tpl"));
        assert!(config.lfi_protection);
        assert_eq!(config.prefixes[0].prefix, "mail");
    }

    #[test]
    fn test_toml_config() {
        let config = ResolverConfig::from_toml_str(
            r#"
paths = ["/views"]
lfi_protection = false

[map]
"error/404" = "/views/error/404.phtml"

[[prefixes]]
prefix = "mail"
paths = ["/views/mail"]
"#,
        )
        .unwrap();

        assert!(!config.lfi_protection);
        assert_eq!(config.map.len(), 1);
        assert_eq!(config.prefixes.len(), 1);
    }

    #[test]
    fn test_json_config() {
        let config = ResolverConfig::from_json_str(
            r#"{"paths": ["/views"], "map": {"a": "/a.phtml"}}"#,
        )
        .unwrap();

        assert_eq!(config.paths.len(), 1);
        assert!(config.lfi_protection);
    }

    #[test]
    fn test_empty_config_builds_empty_chain() {
        let aggregate = ResolverConfig::default().build();
        assert!(aggregate.is_empty());
    }

    #[test]
    fn test_build_attaches_configured_parts() {
        let config = ResolverConfig::from_yaml_str(
            r#"
map:
  a: /a.phtml
paths: [/views]
"#,
        )
        .unwrap();

        let aggregate = config.build();
        assert_eq!(aggregate.len(), 2);
    }
}
