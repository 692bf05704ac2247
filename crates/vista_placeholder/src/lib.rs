//! # vista_placeholder
//!
//! Placeholder containers for the Vista view layer.
//!
//! A placeholder is a named, ordered collection of content fragments
//! accumulated during rendering (head scripts, breadcrumbs, page titles)
//! and joined into final output with configurable prefix, separator,
//! postfix and indentation.
//!
//! Containers also support **capture sessions**: a transient mode that
//! buffers produced output and, on session end, writes it into the
//! container as a set, append, or prepend.
//!
//! Containers are grouped in an explicit [`PlaceholderRegistry`] owned by
//! the render pass; there is no process-global registry.
//!
//! # Example
//!
//! ```rust
//! use vista_placeholder::PlaceholderContainer;
//!
//! let mut scripts = PlaceholderContainer::new();
//! scripts.set_prefix("<script>");
//! scripts.set_postfix("</script>");
//! scripts.set_separator("</script>\n<script>");
//! scripts.append("var a = 1;");
//! scripts.append("var b = 2;");
//! assert!(scripts.render().starts_with("<script>var a = 1;"));
//! ```

pub mod capture;
pub mod container;
pub mod error;
pub mod registry;
pub mod value;

pub use capture::CaptureMode;
pub use container::{ContainerValue, Indent, Key, PlaceholderContainer};
pub use error::{PlaceholderError, PlaceholderResult};
pub use registry::PlaceholderRegistry;
pub use value::Value;
