//! Component model - lifecycle glue between the host element, the
//! reflection engine, and the render collaborator.
//!
//! A component implements [`CustomElement`]: it declares its properties,
//! owns its [`Element`], and describes its output as a [`Template`]. The
//! provided methods implement the lifecycle:
//!
//! | Transition | Work |
//! |------------|------|
//! | connected | replay pre-upgrade properties, then render once |
//! | observed attribute changed | render once |
//! | disconnected | nothing |
//!
//! Each transition runs to completion before returning; there is no
//! deferred or batched work. Every property setter renders exactly once.
//!
//! # Example
//!
//! ```ignore
//! use attr_helpers::{AttrHelpers, CustomElement};
//!
//! let mut el = AttrHelpers::new();
//! el.connect();
//! el.set_one(Some("Pickle"));
//! el.set_attribute("two", "42");
//! assert_eq!(el.two(), Some(42.0));
//! ```

pub mod registry;
pub mod lazy;

use crate::element::Element;
use crate::reflect::{PropertySet, PropertyValue};
use crate::renderer::Template;

pub use registry::{
    Definition, define, defined_names, definition, is_defined, is_valid_name, reset_registry,
    upgrade,
};
pub use lazy::upgrade_properties;

/// A typed component hosted on an [`Element`].
pub trait CustomElement: Sized + 'static {
    /// Tag name the component is registered under.
    const TAG_NAME: &'static str;

    /// Declared properties. Attribute-backed ones form the observed set.
    fn properties() -> &'static PropertySet;

    /// Construct the component around an element (created fresh or from
    /// markup). Must not render.
    fn from_element(element: Element) -> Self;

    fn element(&self) -> &Element;

    fn element_mut(&mut self) -> &mut Element;

    /// Describe the current output from current property values.
    fn template(&self) -> Template;

    // =========================================================================
    // Provided: observed set
    // =========================================================================

    /// Attribute names that deliver change notifications.
    fn observed_attributes() -> Vec<&'static str> {
        Self::properties().observed_attributes().collect()
    }

    // =========================================================================
    // Provided: lifecycle
    // =========================================================================

    /// Recompute the visual output from current state.
    fn render(&mut self) {
        let template = self.template();
        self.element_mut().render(&template);
    }

    fn connected_callback(&mut self) {
        upgrade_properties(self);
        self.render();
    }

    fn disconnected_callback(&mut self) {}

    fn attribute_changed_callback(&mut self, name: &str, old: Option<&str>, new: Option<&str>) {
        tracing::trace!(tag = Self::TAG_NAME, attribute = name, ?old, ?new, "attribute changed");
        self.render();
    }

    /// Insert the element. Runs the connected transition unless already
    /// connected.
    fn connect(&mut self) {
        if self.element_mut().connect() {
            tracing::debug!(tag = Self::TAG_NAME, "connected");
            self.connected_callback();
        }
    }

    /// Remove the element. Runs the disconnected transition unless already
    /// disconnected.
    fn disconnect(&mut self) {
        if self.element_mut().disconnect() {
            tracing::debug!(tag = Self::TAG_NAME, "disconnected");
            self.disconnected_callback();
        }
    }

    // =========================================================================
    // Provided: attribute surface
    // =========================================================================

    /// Set an attribute from outside the component. Observed names always
    /// notify, even when the value is unchanged.
    fn set_attribute(&mut self, name: &str, value: &str) {
        let old = self.element_mut().attributes_mut().set(name, value);
        if Self::properties().is_observed(name) {
            self.attribute_changed_callback(name, old.as_deref(), Some(value));
        }
    }

    /// Remove an attribute from outside the component. Observed names notify
    /// only when the attribute was present.
    fn remove_attribute(&mut self, name: &str) {
        let old = self.element_mut().attributes_mut().remove(name);
        if let Some(old) = old {
            if Self::properties().is_observed(name) {
                self.attribute_changed_callback(name, Some(old.as_str()), None);
            }
        }
    }

    fn get_attribute(&self, name: &str) -> Option<&str> {
        self.element().get_attribute(name)
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.element().has_attribute(name)
    }

    // =========================================================================
    // Provided: property surface
    // =========================================================================

    /// Read a property by name. Undeclared names read plain own fields.
    fn get_property(&self, name: &str) -> Option<PropertyValue> {
        Self::properties()
            .read(self.element(), name)
            .or_else(|| self.element().property(name).cloned())
    }

    /// Write a property by name through its accessor, then render.
    ///
    /// Undeclared names become plain own fields and do not render.
    fn set_property(&mut self, name: &str, value: PropertyValue) {
        if Self::properties().write(self.element_mut(), name, &value) {
            self.render();
        } else {
            self.element_mut().set_property(name, value);
        }
    }

    /// Renders performed so far (0 before the visual root exists).
    fn render_count(&self) -> u64 {
        self.element().shadow_root().map_or(0, |root| root.render_count())
    }
}
