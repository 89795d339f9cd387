//! `<attr-helpers>` - a component with one property of each variant.
//!
//! | Property | Type | Backing |
//! |----------|------|---------|
//! | `one`    | `Option<String>` | attribute `one` |
//! | `two`    | `Option<f64>` | attribute `two` (decimal text) |
//! | `three`  | `bool` | presence of attribute `three` |
//! | `four`   | `Option<Vec<String>>` | instance field |
//! | `five`   | `Option<Map>` | instance field |
//!
//! The background color can be overridden by the hosting page through the
//! `--attr-helpers-background-color` style variable.

use serde_json::{Map, Value};

use crate::component::CustomElement;
use crate::element::Element;
use crate::reflect::{PropKind, PropertyDescriptor, PropertySet, PropertyValue, format_number};
use crate::renderer::{Node, RenderOptions, Template, VisualRoot};
use crate::types::{Attr, Rgba};

/// Style variable read for the content background.
pub const BACKGROUND_VAR: &str = "--attr-helpers-background-color";

/// Background used when the style variable is unset (#FAFAFA).
pub const DEFAULT_BACKGROUND: Rgba = Rgba::from_rgb_int(0xFAFAFA);

/// Content text color (#212121).
pub const TEXT_COLOR: Rgba = Rgba::from_rgb_int(0x212121);

/// Shown in place of a property that has no value.
const UNSET: &str = "N/A";

static PROPERTIES: PropertySet = PropertySet::new(&[
    PropertyDescriptor::new("one", PropKind::STRING),
    PropertyDescriptor::new("two", PropKind::NUMBER),
    PropertyDescriptor::new("three", PropKind::BOOLEAN),
    PropertyDescriptor::new("four", PropKind::Structured),
    PropertyDescriptor::new("five", PropKind::Structured),
]);

/// The `<attr-helpers>` component.
#[derive(Debug)]
pub struct AttrHelpers {
    element: Element,
}

impl AttrHelpers {
    /// Create a detached instance with default render options.
    pub fn new() -> Self {
        Self::from_element(Element::new(Self::TAG_NAME))
    }

    /// Create a detached instance with custom render options.
    pub fn with_options(options: RenderOptions) -> Self {
        let mut element = Element::new(Self::TAG_NAME);
        if let Err(err) = element.attach_shadow(options) {
            tracing::warn!(%err, "fresh element already had a visual root");
        }
        Self::from_element(element)
    }

    pub fn shadow_root(&self) -> Option<&VisualRoot> {
        self.element.shadow_root()
    }

    // =========================================================================
    // one: string
    // =========================================================================

    pub fn one(&self) -> Option<String> {
        self.get_property("one")
            .and_then(|v| v.as_str().map(str::to_string))
    }

    /// `None` and `""` both remove the attribute.
    pub fn set_one(&mut self, value: Option<&str>) {
        self.set_property("one", value.into());
    }

    // =========================================================================
    // two: number
    // =========================================================================

    /// `NaN` when the attribute text is not numeric.
    pub fn two(&self) -> Option<f64> {
        self.get_property("two").and_then(|v| v.as_number())
    }

    /// `None` and `0` both remove the attribute.
    pub fn set_two(&mut self, value: Option<f64>) {
        self.set_property("two", value.into());
    }

    // =========================================================================
    // three: boolean
    // =========================================================================

    pub fn three(&self) -> bool {
        self.get_property("three")
            .and_then(|v| v.as_bool())
            .unwrap_or(false)
    }

    pub fn set_three(&mut self, value: bool) {
        self.set_property("three", value.into());
    }

    // =========================================================================
    // four / five: structured
    // =========================================================================

    /// `None` when unset or when the stored value is not a list of strings.
    pub fn four(&self) -> Option<Vec<String>> {
        self.element
            .field("four")
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    pub fn set_four(&mut self, value: Option<Vec<String>>) {
        let value = value.map(|items| Value::Array(items.into_iter().map(Value::String).collect()));
        self.set_property("four", value.into());
    }

    /// `None` when unset or when the stored value is not an object.
    pub fn five(&self) -> Option<Map<String, Value>> {
        match self.element.field("five") {
            Some(Value::Object(map)) => Some(map.clone()),
            _ => None,
        }
    }

    pub fn set_five(&mut self, value: Option<Map<String, Value>>) {
        self.set_property("five", value.map(Value::Object).into());
    }

    /// Every declared property with its current value, in declaration order.
    pub fn snapshot(&self) -> Vec<(&'static str, PropertyValue)> {
        PROPERTIES
            .iter()
            .map(|d| (d.name, d.read(&self.element)))
            .collect()
    }
}

impl Default for AttrHelpers {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomElement for AttrHelpers {
    const TAG_NAME: &'static str = "attr-helpers";

    fn properties() -> &'static PropertySet {
        &PROPERTIES
    }

    fn from_element(mut element: Element) -> Self {
        if element.shadow_root().is_none() {
            if let Err(err) = element.attach_shadow(RenderOptions::default()) {
                tracing::warn!(%err, "could not attach visual root");
            }
        }
        // Field initializers: an empty list and an empty object.
        element.set_field("four", Value::Array(Vec::new()));
        element.set_field("five", Value::Object(Map::new()));
        Self { element }
    }

    fn element(&self) -> &Element {
        &self.element
    }

    fn element_mut(&mut self) -> &mut Element {
        &mut self.element
    }

    fn template(&self) -> Template {
        let one = self.one().unwrap_or_else(|| UNSET.to_string());
        let two = self.two().map_or_else(|| UNSET.to_string(), format_number);

        Template::new()
            .background_var(BACKGROUND_VAR, DEFAULT_BACKGROUND)
            .foreground(TEXT_COLOR)
            .node(Node::Text {
                content: format!("Welcome to <{}>", Self::TAG_NAME),
                attrs: Attr::BOLD,
            })
            .node(Node::item("one", one))
            .node(Node::item("two", two))
            .node(Node::item("three", self.three().to_string()))
            .node(Node::Slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn connected() -> AttrHelpers {
        let mut el = AttrHelpers::new();
        el.connect();
        el
    }

    #[test]
    fn test_observed_attributes() {
        assert_eq!(AttrHelpers::observed_attributes(), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_new_has_root_and_field_defaults() {
        let el = AttrHelpers::new();
        assert!(el.shadow_root().is_some());
        assert_eq!(el.render_count(), 0);
        assert_eq!(el.four(), Some(vec![]));
        assert_eq!(el.five(), Some(Map::new()));
        assert_eq!(el.one(), None);
        assert_eq!(el.two(), None);
        assert!(!el.three());
    }

    #[test]
    fn test_one_empty_string_removes_attribute() {
        let mut el = connected();
        el.set_one(Some("Pickle"));
        assert_eq!(el.get_attribute("one"), Some("Pickle"));

        el.set_one(Some(""));
        assert!(!el.has_attribute("one"));
        assert_eq!(el.one(), None);
    }

    #[test]
    fn test_two_zero_is_treated_as_absent() {
        let mut el = connected();
        el.set_two(Some(42.0));
        el.set_two(Some(0.0));
        assert!(!el.has_attribute("two"));
        assert_eq!(el.two(), None);
    }

    #[test]
    fn test_two_non_numeric_attribute_reads_nan() {
        let mut el = connected();
        el.set_attribute("two", "many");
        assert!(el.two().is_some_and(f64::is_nan));
        assert!(el.shadow_root().unwrap().text().contains("two: NaN"));
    }

    #[test]
    fn test_three_presence_only() {
        let mut el = connected();
        el.set_attribute("three", "false");
        assert!(el.three());
        el.set_three(false);
        assert!(!el.has_attribute("three"));
    }

    #[test]
    fn test_structured_properties() {
        let mut el = connected();
        let before = el.render_count();

        el.set_four(Some(vec!["a".to_string(), "b".to_string()]));
        assert_eq!(el.four(), Some(vec!["a".to_string(), "b".to_string()]));
        assert!(!el.has_attribute("four"));

        let mut map = Map::new();
        map.insert("foo".to_string(), json!("bar"));
        el.set_five(Some(map.clone()));
        assert_eq!(el.five(), Some(map));

        el.set_four(None);
        assert_eq!(el.four(), None);
        assert_eq!(el.element().field("four"), None);

        assert_eq!(el.render_count(), before + 3);
    }

    #[test]
    fn test_structured_wrong_shape_reads_none() {
        let mut el = connected();
        el.set_property("five", json!(["not", "an", "object"]).into());
        assert_eq!(el.five(), None);
        assert_eq!(
            el.get_property("five"),
            Some(PropertyValue::Structured(json!(["not", "an", "object"])))
        );
    }

    #[test]
    fn test_dynamic_path_coerces() {
        let mut el = connected();
        el.set_property("one", 42.into());
        assert_eq!(el.one(), Some("42".to_string()));

        el.set_property("three", "yes".into());
        assert!(el.three());

        el.set_property("two", "7".into());
        assert_eq!(el.two(), Some(7.0));
    }

    #[test]
    fn test_undeclared_property_is_plain_field() {
        let mut el = connected();
        let before = el.render_count();
        el.set_property("six", "x".into());
        assert_eq!(el.render_count(), before);
        assert_eq!(el.get_property("six"), Some(PropertyValue::from("x")));
        assert_eq!(el.get_property("seven"), None);
    }

    #[test]
    fn test_unobserved_attribute_does_not_render() {
        let mut el = connected();
        let before = el.render_count();
        el.set_attribute("hidden", "");
        el.remove_attribute("hidden");
        assert_eq!(el.render_count(), before);
    }

    #[test]
    fn test_template_reflects_state() {
        let mut el = connected();
        el.set_one(Some("Pickle"));
        el.set_two(Some(42.0));
        el.set_three(true);

        let text = el.shadow_root().unwrap().text();
        assert!(text.starts_with("Welcome to <attr-helpers>"));
        assert!(text.contains("one: Pickle"));
        assert!(text.contains("two: 42"));
        assert!(text.contains("three: true"));
    }

    #[test]
    fn test_with_options_lays_out_frame() {
        let mut el = AttrHelpers::with_options(RenderOptions {
            padding: 0,
            bullet: '-',
            min_width: 40,
        });
        el.connect();

        let root = el.shadow_root().unwrap();
        assert_eq!(root.options().bullet, '-');
        // Heading, three items, empty slot.
        assert_eq!(root.frame().width(), 40);
        assert_eq!(root.frame().height(), 4);
        assert_eq!(root.frame().row_text(0), "Welcome to <attr-helpers>");
        assert_eq!(root.frame().row_text(1), "- one: N/A");
        assert_eq!(root.frame().row_text(3), "- three: false");
    }

    #[test]
    fn test_with_options_padding() {
        let mut el = AttrHelpers::with_options(RenderOptions {
            padding: 2,
            ..RenderOptions::default()
        });
        el.connect();

        let frame = el.shadow_root().unwrap().frame();
        assert_eq!(frame.width(), 25 + 4);
        assert_eq!(frame.height(), 4 + 4);
        assert_eq!(frame.row_text(2), "  Welcome to <attr-helpers>");
    }

    #[test]
    fn test_huge_padding_connects() {
        let options: RenderOptions = serde_json::from_str(r#"{"padding": 40000}"#).unwrap();
        let mut el = AttrHelpers::with_options(options);
        el.connect();
        el.set_one(Some("Pickle"));

        assert_eq!(el.render_count(), 2);
        assert!(el.shadow_root().unwrap().text().contains("one: Pickle"));
    }

    #[test]
    fn test_long_value_fits_frame() {
        let mut el = connected();
        let long = "a".repeat(60_000);
        el.set_one(Some(&long));

        let frame = el.shadow_root().unwrap().frame();
        // "• one: " plus the value, plus default padding on each side.
        assert_eq!(frame.width(), 60_009);
        assert!(frame.row_text(2).ends_with(&long));

        el.set_one(Some(&"a".repeat(70_000)));
        assert_eq!(el.shadow_root().unwrap().frame().width(), u16::MAX);
    }

    #[test]
    fn test_large_numbers_use_exponent_form() {
        let mut el = connected();
        el.set_two(Some(1e21));
        assert_eq!(el.get_attribute("two"), Some("1e+21"));
        assert_eq!(el.two(), Some(1e21));
        assert!(el.shadow_root().unwrap().text().contains("two: 1e+21"));
    }

    #[test]
    fn test_snapshot() {
        let mut el = connected();
        el.set_two(Some(1.5));
        let snapshot = el.snapshot();
        assert_eq!(snapshot[0], ("one", PropertyValue::Null));
        assert_eq!(snapshot[1], ("two", PropertyValue::Number(1.5)));
        assert_eq!(snapshot[2], ("three", PropertyValue::Bool(false)));
        assert_eq!(snapshot[3].0, "four");
    }
}
