//! Declarative render description.
//!
//! A component describes its visual output as a [`Template`] built from its
//! current property values. The visual root turns the description into cells;
//! the component never paints directly.

use crate::types::{Attr, Rgba};

/// One piece of template content.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A line of text.
    Text { content: String, attrs: Attr },
    /// A list entry rendered as `label: value`.
    Item { label: String, value: String },
    /// Placeholder for externally supplied child content.
    Slot,
}

impl Node {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
            attrs: Attr::NONE,
        }
    }

    pub fn item(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Item {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A background color read from a custom style property.
#[derive(Debug, Clone, PartialEq)]
pub struct Background {
    /// Style variable name, e.g. `--attr-helpers-background-color`.
    pub var: String,
    /// Color used when the variable is unset.
    pub fallback: Rgba,
}

/// The full visual description of a component at one moment.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub nodes: Vec<Node>,
    pub background: Option<Background>,
    pub foreground: Rgba,
}

impl Template {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            background: None,
            foreground: Rgba::TERMINAL_DEFAULT,
        }
    }

    pub fn background_var(mut self, var: impl Into<String>, fallback: Rgba) -> Self {
        self.background = Some(Background {
            var: var.into(),
            fallback,
        });
        self
    }

    pub fn foreground(mut self, color: Rgba) -> Self {
        self.foreground = color;
        self
    }

    pub fn node(mut self, node: Node) -> Self {
        self.nodes.push(node);
        self
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::new()
    }
}
