//! Property declarations and the read/write paths that enforce them.
//!
//! A component declares its properties once, statically, as a
//! [`PropertySet`]. The set is both the accessor table (every typed getter
//! and setter goes through [`PropertySet::read`] / [`PropertySet::write`])
//! and the source of the observed attribute list, so the two can never
//! drift apart.

use crate::element::Element;

use super::codec::PropKind;
use super::value::PropertyValue;

/// One declared property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyDescriptor {
    pub name: &'static str,
    pub kind: PropKind,
}

impl PropertyDescriptor {
    pub const fn new(name: &'static str, kind: PropKind) -> Self {
        Self { name, kind }
    }

    /// Current typed value.
    pub fn read(&self, element: &Element) -> PropertyValue {
        match self.kind {
            PropKind::Reflected(codec) => codec.decode(element.get_attribute(self.name)),
            PropKind::Structured => element
                .field(self.name)
                .cloned()
                .map(PropertyValue::Structured)
                .unwrap_or(PropertyValue::Null),
        }
    }

    /// Write a value, coercing it with this property's rule.
    ///
    /// Attribute-backed properties write the attribute storage directly; the
    /// caller owns the render that follows.
    pub fn write(&self, element: &mut Element, value: &PropertyValue) {
        match self.kind {
            PropKind::Reflected(codec) => match codec.encode(value) {
                Some(text) => {
                    tracing::trace!(property = self.name, value = %text, "reflect to attribute");
                    element.attributes_mut().set(self.name, text);
                }
                None => {
                    tracing::trace!(property = self.name, "remove attribute");
                    element.attributes_mut().remove(self.name);
                }
            },
            PropKind::Structured => {
                if value.is_truthy() {
                    element.set_field(self.name, value.to_json());
                } else {
                    element.remove_field(self.name);
                }
            }
        }
    }
}

/// The static list of properties a component declares.
#[derive(Debug, Clone, Copy)]
pub struct PropertySet {
    descriptors: &'static [PropertyDescriptor],
}

impl PropertySet {
    pub const fn new(descriptors: &'static [PropertyDescriptor]) -> Self {
        Self { descriptors }
    }

    pub fn get(&self, name: &str) -> Option<&'static PropertyDescriptor> {
        self.descriptors.iter().find(|d| d.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static PropertyDescriptor> {
        self.descriptors.iter()
    }

    /// Names of the attribute-backed properties, in declaration order.
    pub fn observed_attributes(&self) -> impl Iterator<Item = &'static str> {
        self.descriptors
            .iter()
            .filter(|d| d.kind.is_reflected())
            .map(|d| d.name)
    }

    pub fn is_observed(&self, attribute: &str) -> bool {
        self.observed_attributes()
            .any(|name| name.eq_ignore_ascii_case(attribute))
    }

    /// Read a declared property. `None` if the name is not declared.
    pub fn read(&self, element: &Element, name: &str) -> Option<PropertyValue> {
        self.get(name).map(|d| d.read(element))
    }

    /// Write a declared property. Returns false if the name is not declared.
    pub fn write(&self, element: &mut Element, name: &str, value: &PropertyValue) -> bool {
        match self.get(name) {
            Some(descriptor) => {
                descriptor.write(element, value);
                true
            }
            None => false,
        }
    }
}
