//! # attr-helpers
//!
//! Attribute/property reflection for custom UI elements.
//!
//! A component exposes typed properties (string, number, boolean, structured)
//! that stay synchronized with string-or-absent attributes, and re-renders its
//! visual root whenever either side changes.
//!
//! ## Architecture
//!
//! ```text
//! setter / set_attribute → reflection engine → attribute storage
//!                                     ↓
//!                 render trigger → Template → VisualRoot → FrameBuffer
//! ```
//!
//! Attribute-backed properties never cache: every read decodes the current
//! attribute, so the attribute is the single source of truth.
//!
//! ## Modules
//!
//! - [`reflect`] - Codecs, property values, property declarations
//! - [`element`] - Host element: attributes, plain fields, children, styles
//! - [`component`] - `CustomElement` lifecycle, lazy property upgrade, registry
//! - [`renderer`] - Templates, visual root, frame buffer, ANSI output
//! - [`components`] - The `<attr-helpers>` component
//! - [`types`] - Colors, text attributes, cells

pub mod component;
pub mod components;
pub mod element;
pub mod error;
pub mod reflect;
pub mod renderer;
pub mod types;

pub use error::{Error, Result};
pub use types::*;

pub use component::{
    CustomElement, Definition, define, defined_names, definition, is_defined, reset_registry,
    upgrade, upgrade_properties,
};

pub use components::AttrHelpers;

pub use element::{AttributeMap, Element};

pub use reflect::{AttrCodec, PropKind, PropertyDescriptor, PropertySet, PropertyValue};

pub use renderer::{
    FrameBuffer, Node, RenderOptions, StyleScope, Template, VisualRoot, write_frame,
};
