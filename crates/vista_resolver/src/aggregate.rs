//! Priority-ordered aggregation of resolvers.

use tracing::debug;
use vista_core::RenderContext;

use crate::error::ResolverResult;
use crate::outcome::{NotFoundReason, Resolution};
use crate::traits::Resolver;

/// Default priority for attached resolvers.
pub const DEFAULT_PRIORITY: i32 = 1;

struct Attachment {
    priority: i32,
    label: Option<String>,
    resolver: Box<dyn Resolver>,
}

/// Consults attached resolvers from highest to lowest priority and returns
/// the first hit.
///
/// Ties keep attachment order. Soft misses fall through to the next
/// resolver; hard errors from a member (e.g. traversal protection)
/// propagate to the caller untouched.
pub struct AggregateResolver {
    attachments: Vec<Attachment>,
}

impl Default for AggregateResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl AggregateResolver {
    pub fn new() -> Self {
        Self {
            attachments: Vec::new(),
        }
    }

    /// Attach a resolver at the given priority (higher is consulted
    /// earlier).
    pub fn attach(&mut self, resolver: Box<dyn Resolver>, priority: i32) -> &mut Self {
        self.attach_labeled(resolver, priority, None::<String>)
    }

    /// Attach at [`DEFAULT_PRIORITY`].
    pub fn attach_default(&mut self, resolver: Box<dyn Resolver>) -> &mut Self {
        self.attach(resolver, DEFAULT_PRIORITY)
    }

    /// Attach with a diagnostic label reported when the resolver wins a
    /// lookup.
    pub fn attach_labeled(
        &mut self,
        resolver: Box<dyn Resolver>,
        priority: i32,
        label: Option<impl Into<String>>,
    ) -> &mut Self {
        let attachment = Attachment {
            priority,
            label: label.map(Into::into),
            resolver,
        };

        // Insert before the first strictly-lower priority; equal priorities
        // keep attachment order.
        let idx = self
            .attachments
            .iter()
            .position(|a| a.priority < priority)
            .unwrap_or(self.attachments.len());
        self.attachments.insert(idx, attachment);
        self
    }

    pub fn len(&self) -> usize {
        self.attachments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attachments.is_empty()
    }
}

impl Resolver for AggregateResolver {
    fn resolve(&self, name: &str, context: &dyn RenderContext) -> ResolverResult<Resolution> {
        if self.attachments.is_empty() {
            return Ok(Resolution::NotFound(NotFoundReason::NoResolversConfigured));
        }

        for (idx, attachment) in self.attachments.iter().enumerate() {
            match attachment.resolver.resolve(name, context)? {
                Resolution::Found(location) => {
                    debug!(
                        "Resolved '{}' via {} to {:?}",
                        name,
                        attachment.label.as_deref().unwrap_or("unlabeled resolver"),
                        location
                    );
                    return Ok(Resolution::Found(location));
                }
                Resolution::NotFound(reason) => {
                    debug!("Resolver #{} missed '{}': {}", idx, name, reason);
                }
            }
        }

        Ok(Resolution::NotFound(NotFoundReason::NotFound))
    }
}
