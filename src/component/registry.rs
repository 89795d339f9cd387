//! Component Registry - tag name to component definition.
//!
//! Registration is an explicit call made by the application bootstrap, once
//! per component type; defining the same type again is a no-op. Elements
//! created from markup before their definition existed are turned into
//! components with [`upgrade`].

use std::any::{TypeId, type_name};
use std::cell::RefCell;
use std::collections::BTreeMap;

use super::CustomElement;
use crate::element::Element;
use crate::error::{Error, Result};

/// A registered component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub name: &'static str,
    pub observed_attributes: Vec<&'static str>,
    pub type_name: &'static str,
    type_id: TypeId,
}

// =============================================================================
// Registry State
// =============================================================================

thread_local! {
    /// Definitions keyed by tag name.
    static DEFINITIONS: RefCell<BTreeMap<&'static str, Definition>> = const { RefCell::new(BTreeMap::new()) };
}

/// Names the host reserves even though they look like custom element names.
const RESERVED_NAMES: &[&str] = &[
    "annotation-xml",
    "color-profile",
    "font-face",
    "font-face-src",
    "font-face-uri",
    "font-face-format",
    "font-face-name",
    "missing-glyph",
];

/// Whether `name` is a valid custom element name.
///
/// Must start with an ASCII lowercase letter, contain a hyphen, contain no
/// ASCII uppercase letters, and not be one of the reserved names.
pub fn is_valid_name(name: &str) -> bool {
    let Some(first) = name.chars().next() else {
        return false;
    };
    first.is_ascii_lowercase()
        && name.contains('-')
        && name.chars().all(|c| {
            c.is_ascii_lowercase()
                || c.is_ascii_digit()
                || matches!(c, '-' | '.' | '_')
                || !c.is_ascii()
        })
        && !RESERVED_NAMES.contains(&name)
}

// =============================================================================
// Definition
// =============================================================================

/// Register component `C` under its tag name.
///
/// Returns `Ok(true)` when newly defined and `Ok(false)` when `C` was
/// already defined.
pub fn define<C: CustomElement>() -> Result<bool> {
    let name = C::TAG_NAME;
    if !is_valid_name(name) {
        return Err(Error::InvalidName(name.to_string()));
    }

    DEFINITIONS.with(|defs| {
        let mut defs = defs.borrow_mut();
        if let Some(existing) = defs.get(name) {
            return if existing.type_id == TypeId::of::<C>() {
                Ok(false)
            } else {
                Err(Error::AlreadyDefined(name.to_string()))
            };
        }

        let definition = Definition {
            name,
            observed_attributes: C::observed_attributes(),
            type_name: type_name::<C>(),
            type_id: TypeId::of::<C>(),
        };
        tracing::debug!(
            tag = name,
            observed = ?definition.observed_attributes,
            "custom element defined"
        );
        defs.insert(name, definition);
        Ok(true)
    })
}

/// Upgrade an element created before its definition into component `C`.
///
/// If the element is already connected, the connected transition runs now.
pub fn upgrade<C: CustomElement>(element: Element) -> Result<C> {
    let defined = DEFINITIONS.with(|defs| {
        defs.borrow()
            .get(C::TAG_NAME)
            .is_some_and(|def| def.type_id == TypeId::of::<C>())
    });
    if !defined {
        return Err(Error::NotDefined(C::TAG_NAME.to_string()));
    }
    if element.tag_name() != C::TAG_NAME {
        return Err(Error::TagMismatch {
            expected: C::TAG_NAME.to_string(),
            found: element.tag_name().to_string(),
        });
    }

    let connected = element.is_connected();
    let mut component = C::from_element(element);
    tracing::debug!(tag = C::TAG_NAME, connected, "element upgraded");
    if connected {
        component.connected_callback();
    }
    Ok(component)
}

// =============================================================================
// Lookups
// =============================================================================

pub fn is_defined(name: &str) -> bool {
    DEFINITIONS.with(|defs| defs.borrow().contains_key(name))
}

pub fn definition(name: &str) -> Option<Definition> {
    DEFINITIONS.with(|defs| defs.borrow().get(name).cloned())
}

/// All defined tag names, sorted.
pub fn defined_names() -> Vec<&'static str> {
    DEFINITIONS.with(|defs| defs.borrow().keys().copied().collect())
}

/// Reset all registry state (for testing).
pub fn reset_registry() {
    DEFINITIONS.with(|defs| defs.borrow_mut().clear());
}
