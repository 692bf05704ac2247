//! Relative template references resolved against the active template's
//! namespace.

use tracing::debug;
use vista_core::{name, RenderContext};

use crate::error::ResolverResult;
use crate::outcome::{NotFoundReason, Resolution};
use crate::traits::Resolver;

/// Resolves a sibling reference (`partial` while rendering `blog/post`
/// resolves as `blog/partial`) by consulting the rendering context and
/// delegating to a wrapped resolver.
///
/// Outside an active render, or when the active template has no namespace,
/// this resolver is a no-op and misses immediately.
pub struct RelativeFallbackResolver {
    inner: Box<dyn Resolver>,
}

impl RelativeFallbackResolver {
    pub fn new(inner: Box<dyn Resolver>) -> Self {
        Self { inner }
    }
}

impl Resolver for RelativeFallbackResolver {
    fn resolve(&self, template: &str, context: &dyn RenderContext) -> ResolverResult<Resolution> {
        let current = match context.current_template() {
            Some(current) => current,
            None => return Ok(Resolution::NotFound(NotFoundReason::NoActiveTemplate)),
        };

        let namespace = match name::namespace(current) {
            Some(namespace) => namespace,
            None => return Ok(Resolution::NotFound(NotFoundReason::NoActiveTemplate)),
        };

        let qualified = format!("{}/{}", namespace, template);
        debug!("Retrying '{}' as '{}'", template, qualified);
        self.inner.resolve(&qualified, context)
    }
}
