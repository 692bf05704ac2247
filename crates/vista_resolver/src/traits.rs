//! The resolver capability.

use vista_core::RenderContext;

use crate::error::ResolverResult;
use crate::outcome::Resolution;

/// Maps a logical template name to a physical resource location.
///
/// Implementations report expected misses as [`Resolution::NotFound`] and
/// reserve `Err` for contract violations (traversal protection, I/O,
/// malformed configuration). Composite resolvers must let those errors
/// propagate rather than treating them as misses.
pub trait Resolver {
    fn resolve(&self, name: &str, context: &dyn RenderContext) -> ResolverResult<Resolution>;
}

impl Resolver for Box<dyn Resolver> {
    fn resolve(&self, name: &str, context: &dyn RenderContext) -> ResolverResult<Resolution> {
        self.as_ref().resolve(name, context)
    }
}
