//! # vista_core
//!
//! Shared primitives for the Vista view layer.
//!
//! This crate provides the two seams the rest of the workspace is built on:
//!
//! - **Template names**: logical template identifiers are opaque strings with
//!   `/`-separated namespace segments. The [`name`] module normalizes them and
//!   answers the questions resolvers ask (namespace, suffix, traversal).
//! - **Rendering context**: resolvers that need to know which template is
//!   currently being rendered receive a [`RenderContext`] capability rather
//!   than reaching into ambient state.
//!
//! # Example
//!
//! ```rust
//! use vista_core::{name, RenderContext, RenderState};
//!
//! let mut state = RenderState::new();
//! state.begin("blog/post");
//! assert_eq!(state.current_template(), Some("blog/post"));
//! assert_eq!(name::namespace("blog/post"), Some("blog"));
//! ```

pub mod context;
pub mod name;

pub use context::{NullContext, RenderContext, RenderState, StaticContext};
