//! Rendering context capability.
//!
//! Resolvers that support relative template references need to know which
//! template is currently being rendered. Rather than a global registry, the
//! active renderer passes a [`RenderContext`] into each resolution call.

use tracing::debug;

/// Capability exposed by an active render pass.
pub trait RenderContext {
    /// The logical name of the template currently being rendered, if any.
    fn current_template(&self) -> Option<&str>;
}

/// Context for callers outside of any render pass. Always reports no active
/// template.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullContext;

impl RenderContext for NullContext {
    fn current_template(&self) -> Option<&str> {
        None
    }
}

/// Fixed-template context, useful in tests and for one-shot resolution on
/// behalf of a known template.
#[derive(Debug, Clone)]
pub struct StaticContext {
    template: String,
}

impl StaticContext {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }
}

impl RenderContext for StaticContext {
    fn current_template(&self) -> Option<&str> {
        Some(&self.template)
    }
}

/// Render-pass state tracking the stack of templates being rendered.
///
/// Renderers call [`begin`](RenderState::begin) before evaluating a template
/// and [`finish`](RenderState::finish) afterwards; nested partials push onto
/// the same stack, so `current_template` always reports the innermost one.
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    stack: Vec<String>,
}

impl RenderState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a template render has started.
    pub fn begin(&mut self, template: impl Into<String>) {
        let template = template.into();
        debug!("Render started: {}", template);
        self.stack.push(template);
    }

    /// Record that the innermost template render has finished. Returns the
    /// finished template name, if a render was active.
    pub fn finish(&mut self) -> Option<String> {
        let finished = self.stack.pop();
        if let Some(ref template) = finished {
            debug!("Render finished: {}", template);
        }
        finished
    }

    /// Number of nested renders currently active.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_rendering(&self) -> bool {
        !self.stack.is_empty()
    }
}

impl RenderContext for RenderState {
    fn current_template(&self) -> Option<&str> {
        self.stack.last().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_context() {
        assert_eq!(NullContext.current_template(), None);
    }

    #[test]
    fn test_static_context() {
        let ctx = StaticContext::new("blog/post");
        assert_eq!(ctx.current_template(), Some("blog/post"));
    }

    #[test]
    fn test_render_state_stack() {
        let mut state = RenderState::new();
        assert_eq!(state.current_template(), None);
        assert!(!state.is_rendering());

        state.begin("layout");
        state.begin("blog/post");
        assert_eq!(state.current_template(), Some("blog/post"));
        assert_eq!(state.depth(), 2);

        assert_eq!(state.finish(), Some("blog/post".to_string()));
        assert_eq!(state.current_template(), Some("layout"));

        state.finish();
        assert_eq!(state.finish(), None);
    }
}
