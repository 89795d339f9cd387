//! Reflection engine - attribute/property duality.
//!
//! Every declared property is either backed 1:1 by an attribute (string,
//! number, boolean) or stored as a structured instance field. For the
//! attribute-backed variants the attribute is the only source of truth: a
//! read always decodes the current attribute, so the property view and the
//! attribute view cannot disagree.
//!
//! - [`codec`] - per-variant encode/decode rules
//! - [`value`] - the dynamic [`PropertyValue`]
//! - [`descriptor`] - declarations and the read/write paths

pub mod codec;
pub mod descriptor;
pub mod value;

pub use codec::{AttrCodec, PropKind, format_number, parse_number};
pub use descriptor::{PropertyDescriptor, PropertySet};
pub use value::PropertyValue;
