//! Lazy property upgrade.
//!
//! Code may assign `el.one = ...` on an element before its component
//! definition is loaded. That write lands in a plain own field, which would
//! shadow the accessor forever once the component takes over. On connect,
//! each observed name that still has a plain field is removed and replayed
//! through the accessor, so the value is reflected and rendered.

use super::CustomElement;

/// Replay shadowing plain fields through their accessors.
///
/// Returns how many properties were replayed. Idempotent: a second call
/// finds no plain fields left and does nothing.
pub fn upgrade_properties<C: CustomElement>(component: &mut C) -> usize {
    let mut replayed = 0;
    for name in C::observed_attributes() {
        let Some(value) = component.element_mut().take_property(name) else {
            continue;
        };
        tracing::debug!(tag = C::TAG_NAME, property = name, "replaying pre-upgrade property");
        component.set_property(name, value);
        replayed += 1;
    }
    replayed
}
