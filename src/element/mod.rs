//! Host element model.
//!
//! An [`Element`] is the hosting runtime's view of one UI element: its
//! attribute storage, plain own fields, light-DOM text children, inherited
//! style variables, connection state and (once attached) its visual root.
//!
//! Nothing here knows about typed properties. An element created before its
//! component definition exists accepts property writes only as plain own
//! fields ("expandos"); the component's upgrade later replays them through
//! the proper accessors.

pub mod attributes;

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::reflect::PropertyValue;
use crate::renderer::{RenderOptions, StyleScope, Template, VisualRoot};

pub use attributes::AttributeMap;

/// One element in the host tree.
#[derive(Debug)]
pub struct Element {
    tag: String,
    attributes: AttributeMap,
    expandos: BTreeMap<String, PropertyValue>,
    fields: BTreeMap<String, Value>,
    children: Vec<String>,
    styles: StyleScope,
    shadow_root: Option<VisualRoot>,
    connected: bool,
}

impl Element {
    /// Create a detached element. The tag is ASCII-lowercased.
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attributes: AttributeMap::new(),
            expandos: BTreeMap::new(),
            fields: BTreeMap::new(),
            children: Vec::new(),
            styles: StyleScope::new(),
            shadow_root: None,
            connected: false,
        }
    }

    pub fn tag_name(&self) -> &str {
        &self.tag
    }

    // =========================================================================
    // Attributes
    // =========================================================================

    pub fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    /// Raw attribute storage. Writes here deliver no change notifications.
    pub fn attributes_mut(&mut self) -> &mut AttributeMap {
        &mut self.attributes
    }

    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.has(name)
    }

    /// Builder form used when creating elements from markup.
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.set(name, value);
        self
    }

    // =========================================================================
    // Plain own fields
    // =========================================================================

    /// Assign a plain own field, bypassing any accessor.
    pub fn set_property(&mut self, name: &str, value: impl Into<PropertyValue>) {
        self.expandos.insert(name.to_string(), value.into());
    }

    /// Read a plain own field.
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.expandos.get(name)
    }

    /// Whether a plain own field with this name exists.
    pub fn has_own_property(&self, name: &str) -> bool {
        self.expandos.contains_key(name)
    }

    /// Remove a plain own field, returning its value.
    pub fn take_property(&mut self, name: &str) -> Option<PropertyValue> {
        self.expandos.remove(name)
    }

    // =========================================================================
    // Structured instance fields
    // =========================================================================

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn set_field(&mut self, name: &str, value: Value) {
        self.fields.insert(name.to_string(), value);
    }

    pub fn remove_field(&mut self, name: &str) -> Option<Value> {
        self.fields.remove(name)
    }

    // =========================================================================
    // Children and styles
    // =========================================================================

    /// Append a text child (light DOM content projected into the slot).
    pub fn append_text(&mut self, text: &str) {
        self.children.push(text.to_string());
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.append_text(text);
        self
    }

    pub fn children(&self) -> &[String] {
        &self.children
    }

    pub fn styles(&self) -> &StyleScope {
        &self.styles
    }

    pub fn styles_mut(&mut self) -> &mut StyleScope {
        &mut self.styles
    }

    pub fn with_styles(mut self, styles: StyleScope) -> Self {
        self.styles = styles;
        self
    }

    // =========================================================================
    // Visual root
    // =========================================================================

    /// Attach the element's visual root. An element has at most one.
    pub fn attach_shadow(&mut self, options: RenderOptions) -> Result<&mut VisualRoot> {
        if self.shadow_root.is_some() {
            return Err(Error::ShadowRootExists(self.tag.clone()));
        }
        Ok(self.shadow_root.insert(VisualRoot::with_options(options)))
    }

    pub fn shadow_root(&self) -> Option<&VisualRoot> {
        self.shadow_root.as_ref()
    }

    /// Render a template into the visual root, projecting this element's
    /// children and resolving its style variables. No-op without a root.
    pub fn render(&mut self, template: &Template) {
        if let Some(root) = self.shadow_root.as_mut() {
            root.render(template, &self.children, &self.styles);
        }
    }

    // =========================================================================
    // Connection state
    // =========================================================================

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Mark the element as inserted. Returns false if it already was.
    pub fn connect(&mut self) -> bool {
        !std::mem::replace(&mut self.connected, true)
    }

    /// Mark the element as removed. Returns false if it already was.
    pub fn disconnect(&mut self) -> bool {
        std::mem::replace(&mut self.connected, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Node;

    #[test]
    fn test_tag_is_lowercased() {
        assert_eq!(Element::new("Attr-Helpers").tag_name(), "attr-helpers");
    }

    #[test]
    fn test_plain_fields_bypass_attributes() {
        let mut el = Element::new("attr-helpers");
        el.set_property("one", "Pickle");

        assert!(el.has_own_property("one"));
        assert_eq!(el.property("one"), Some(&PropertyValue::from("Pickle")));
        assert!(!el.has_attribute("one"));

        assert_eq!(el.take_property("one"), Some(PropertyValue::from("Pickle")));
        assert!(!el.has_own_property("one"));
    }

    #[test]
    fn test_attach_shadow_once() {
        let mut el = Element::new("attr-helpers");
        assert!(el.attach_shadow(RenderOptions::default()).is_ok());
        assert_eq!(
            el.attach_shadow(RenderOptions::default()).unwrap_err(),
            Error::ShadowRootExists("attr-helpers".to_string())
        );
    }

    #[test]
    fn test_render_without_root_is_noop() {
        let mut el = Element::new("x-demo");
        el.render(&Template::new().node(Node::text("hi")));
        assert!(el.shadow_root().is_none());
    }

    #[test]
    fn test_render_projects_children() {
        let mut el = Element::new("x-demo").with_text("Pickle");
        el.attach_shadow(RenderOptions::default()).unwrap();
        el.render(&Template::new().node(Node::Slot));

        let root = el.shadow_root().unwrap();
        assert_eq!(root.text(), "Pickle");
        assert_eq!(root.render_count(), 1);
    }

    #[test]
    fn test_connection_transitions() {
        let mut el = Element::new("x-demo");
        assert!(!el.is_connected());
        assert!(el.connect());
        assert!(!el.connect());
        assert!(el.is_connected());
        assert!(el.disconnect());
        assert!(!el.disconnect());
    }
}
