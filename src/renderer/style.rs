//! Custom style properties.
//!
//! The hosting page customizes a component through named variables
//! (`--attr-helpers-background-color: #03A9F4`). A [`StyleScope`] holds the
//! variables in effect for one element; the template names the variable it
//! reads and the fallback to use when it is unset or unparseable.

use std::collections::BTreeMap;

use crate::types::Rgba;

/// Custom properties inherited by an element from its hosting page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleScope {
    vars: BTreeMap<String, String>,
}

impl StyleScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`StyleScope::set_var`].
    pub fn with_var(mut self, name: &str, value: &str) -> Self {
        self.set_var(name, value);
        self
    }

    /// Set a variable. Names must start with `--`; other names are ignored.
    pub fn set_var(&mut self, name: &str, value: &str) -> bool {
        if !name.starts_with("--") {
            tracing::warn!(name, "ignoring style variable without -- prefix");
            return false;
        }
        self.vars.insert(name.to_string(), value.trim().to_string());
        true
    }

    pub fn remove_var(&mut self, name: &str) -> Option<String> {
        self.vars.remove(name)
    }

    pub fn var(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Resolve a color variable, falling back when unset or invalid.
    pub fn resolve_color(&self, name: &str, fallback: Rgba) -> Rgba {
        let Some(raw) = self.var(name) else {
            return fallback;
        };
        match Rgba::parse_css(raw) {
            Some(color) => color,
            None => {
                tracing::warn!(name, value = raw, "invalid color in style variable, using fallback");
                fallback
            }
        }
    }
}
