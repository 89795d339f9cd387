//! Concrete components.

mod attr_helpers;

pub use attr_helpers::{AttrHelpers, BACKGROUND_VAR, DEFAULT_BACKGROUND, TEXT_COLOR};
