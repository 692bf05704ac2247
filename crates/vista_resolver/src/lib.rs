//! # vista_resolver
//!
//! Template resolution chain for the Vista view layer.
//!
//! A [`Resolver`] maps a logical template name (e.g. `blog/post`) to a
//! physical view-script location. The chain is assembled from:
//!
//! - [`TemplateMapResolver`]: exact-match lookup against an explicit map
//! - [`TemplatePathStack`]: probes registered directories, last added first
//! - [`PrefixPathStackResolver`]: partitions names by namespace prefix
//! - [`RelativeFallbackResolver`]: retries sibling references against the
//!   currently rendering template's namespace
//! - [`AggregateResolver`]: consults members in priority order
//!
//! Expected misses are soft ([`Resolution::NotFound`]); security violations
//! such as parent-directory traversal are hard [`ResolverError`]s that
//! propagate through composite resolvers uncaught.
//!
//! # Example
//!
//! ```rust,no_run
//! use vista_core::NullContext;
//! use vista_resolver::{AggregateResolver, Resolver, TemplateMapResolver, TemplatePathStack};
//!
//! let mut map = TemplateMapResolver::new();
//! map.add("error/404", "/views/error/404.phtml");
//!
//! let mut aggregate = AggregateResolver::new();
//! aggregate.attach(Box::new(map), 100);
//! aggregate.attach(Box::new(TemplatePathStack::with_paths(["/views"])), 1);
//!
//! let outcome = aggregate.resolve("error/404", &NullContext).unwrap();
//! assert!(outcome.is_found());
//! ```

pub mod aggregate;
pub mod config;
pub mod error;
pub mod map;
pub mod outcome;
pub mod path_stack;
pub mod prefix;
pub mod relative;
pub mod traits;

pub use aggregate::{AggregateResolver, DEFAULT_PRIORITY};
pub use config::{PrefixEntry, ResolverConfig};
pub use error::{ResolverError, ResolverResult};
pub use map::TemplateMapResolver;
pub use outcome::{NotFoundReason, Resolution};
pub use path_stack::{TemplatePathStack, DEFAULT_SUFFIX};
pub use prefix::{PrefixPathStackResolver, PrefixTarget};
pub use relative::RelativeFallbackResolver;
pub use traits::Resolver;
