//! Layout template with typed placeholders.

use std::marker::PhantomData;

/// Values substituted into a [`Template`].
pub trait TemplateVars {
    /// Replace every placeholder in `content`.
    fn apply(&self, content: &str) -> String;
}

/// An embedded HTML template that only renders with its own variable set.
#[derive(Debug, Clone, Copy)]
pub struct Template<V> {
    content: &'static str,
    _marker: PhantomData<V>,
}

impl<V> Template<V> {
    pub const fn new(content: &'static str) -> Self {
        Self {
            content,
            _marker: PhantomData,
        }
    }
}

impl<V: TemplateVars> Template<V> {
    pub fn render(&self, vars: &V) -> String {
        vars.apply(self.content)
    }
}
