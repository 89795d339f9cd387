//! Attribute codecs.
//!
//! Each attribute-backed property variant is a pair of total functions
//! between the attribute view (`Option<&str>`, `None` = absent) and the
//! property view ([`PropertyValue`]). Neither direction can fail.
//!
//! | Variant | decode(absent) | decode(text) | encode(falsy) | encode(truthy) |
//! |---------|----------------|--------------|---------------|----------------|
//! | String  | `Null`         | `String(text)` | remove      | `text`         |
//! | Number  | `Null`         | `Number(parse(text))` | remove | decimal form |
//! | Boolean | `Bool(false)`  | `Bool(true)` | remove        | `""`           |
//!
//! Falsy means `null`, `""`, `0` or `false`. The number variant therefore
//! removes its attribute when set to `0`.

use super::value::PropertyValue;

/// Codec for a property backed 1:1 by an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrCodec {
    String,
    Number,
    /// Presence encodes `true`; the attribute value is ignored.
    Boolean,
}

impl AttrCodec {
    /// Attribute view to property view.
    pub fn decode(self, attribute: Option<&str>) -> PropertyValue {
        match (self, attribute) {
            (Self::String, Some(text)) => PropertyValue::String(text.to_string()),
            (Self::Number, Some(text)) => PropertyValue::Number(parse_number(text)),
            (Self::String | Self::Number, None) => PropertyValue::Null,
            (Self::Boolean, attribute) => PropertyValue::Bool(attribute.is_some()),
        }
    }

    /// Property view to attribute view. `None` means remove the attribute.
    pub fn encode(self, value: &PropertyValue) -> Option<String> {
        if !value.is_truthy() {
            return None;
        }
        match self {
            Self::Boolean => Some(String::new()),
            Self::String | Self::Number => Some(value.to_attribute_string()),
        }
    }
}

/// How a declared property stores its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropKind {
    /// Backed by the attribute of the same name.
    Reflected(AttrCodec),
    /// Stored as an instance field; no attribute counterpart.
    Structured,
}

impl PropKind {
    pub const STRING: Self = Self::Reflected(AttrCodec::String);
    pub const NUMBER: Self = Self::Reflected(AttrCodec::Number);
    pub const BOOLEAN: Self = Self::Reflected(AttrCodec::Boolean);

    /// Whether this property has a backing attribute.
    pub const fn is_reflected(self) -> bool {
        matches!(self, Self::Reflected(_))
    }
}

// =============================================================================
// Number text conversion
// =============================================================================

/// Convert attribute text to a number the way the host's `Number(text)` does.
///
/// Surrounding whitespace is ignored and empty text is `0`. `Infinity`,
/// signed decimals, exponents and `0x`/`0o`/`0b` integers are accepted.
/// Anything else is `NaN`.
pub fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(value) = parse_prefixed_integer(trimmed) {
        return value;
    }

    // Rust's float grammar also takes "inf" and "nan"; the host's does not.
    let decimal_chars = trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !decimal_chars {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_prefixed_integer(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    let digits = &text[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    let mut value = 0.0_f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => value = value * radix as f64 + d as f64,
            None => return Some(f64::NAN),
        }
    }
    Some(value)
}

/// String form of a number, as written into an attribute.
///
/// Shortest round-trip digits. Magnitudes from `1e-6` up to (not including)
/// `1e21` print positionally; anything outside uses exponent form with an
/// explicit sign (`1e+21`, `1.5e-7`).
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if n == 0.0 {
        // Collapses -0 as well.
        "0".to_string()
    } else if (1e-6..1e21).contains(&n.abs()) {
        format!("{n}")
    } else {
        let text = format!("{n:e}");
        match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_codec() {
        let codec = AttrCodec::String;
        assert_eq!(codec.decode(None), PropertyValue::Null);
        assert_eq!(codec.decode(Some("")), PropertyValue::String(String::new()));
        assert_eq!(codec.encode(&"Pickle".into()), Some("Pickle".to_string()));
        assert_eq!(codec.encode(&"".into()), None);
        assert_eq!(codec.encode(&PropertyValue::Null), None);
    }

    #[test]
    fn test_number_codec() {
        let codec = AttrCodec::Number;
        assert_eq!(codec.decode(None), PropertyValue::Null);
        assert_eq!(codec.decode(Some("42")), PropertyValue::Number(42.0));
        assert_eq!(codec.encode(&42.into()), Some("42".to_string()));
        assert_eq!(codec.encode(&(-2.5).into()), Some("-2.5".to_string()));
        assert_eq!(codec.encode(&PropertyValue::Null), None);
    }

    #[test]
    fn test_number_codec_zero_is_treated_as_absent() {
        // Zero is falsy, so the setter removes the attribute rather than
        // writing "0". Reading back yields null, not 0.
        let codec = AttrCodec::Number;
        assert_eq!(codec.encode(&0.into()), None);
        assert_eq!(codec.encode(&(-0.0).into()), None);
        assert_eq!(codec.decode(codec.encode(&0.into()).as_deref()), PropertyValue::Null);
    }

    #[test]
    fn test_number_codec_nan_decodes_without_error() {
        let decoded = AttrCodec::Number.decode(Some("forty-two"));
        assert!(decoded.as_number().is_some_and(f64::is_nan));
        // NaN is falsy, so writing it back removes the attribute.
        assert_eq!(AttrCodec::Number.encode(&decoded), None);
    }

    #[test]
    fn test_boolean_codec_ignores_attribute_value() {
        let codec = AttrCodec::Boolean;
        assert_eq!(codec.decode(None), PropertyValue::Bool(false));
        assert_eq!(codec.decode(Some("")), PropertyValue::Bool(true));
        assert_eq!(codec.decode(Some("false")), PropertyValue::Bool(true));
        assert_eq!(codec.encode(&true.into()), Some(String::new()));
        assert_eq!(codec.encode(&false.into()), None);
    }

    #[test]
    fn test_codecs_coerce_foreign_variants() {
        assert_eq!(AttrCodec::String.encode(&42.into()), Some("42".to_string()));
        assert_eq!(AttrCodec::Number.encode(&"7".into()), Some("7".to_string()));
        assert_eq!(AttrCodec::Boolean.encode(&"yes".into()), Some(String::new()));
        assert_eq!(AttrCodec::Boolean.encode(&0.into()), None);
    }

    #[test]
    fn test_parse_number_host_rules() {
        assert_eq!(parse_number("42"), 42.0);
        assert_eq!(parse_number("  42\n"), 42.0);
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("   "), 0.0);
        assert_eq!(parse_number("-1.5e3"), -1500.0);
        assert_eq!(parse_number(".5"), 0.5);
        assert_eq!(parse_number("0x1F"), 31.0);
        assert_eq!(parse_number("0b101"), 5.0);
        assert_eq!(parse_number("0o17"), 15.0);
        assert_eq!(parse_number("Infinity"), f64::INFINITY);
        assert_eq!(parse_number("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_parse_number_rejects_non_numeric() {
        for text in ["abc", "inf", "nan", "NaN", "1,000", "0x", "0xZZ", "-0x10", "12px", "."] {
            assert!(parse_number(text).is_nan(), "{text:?} should be NaN");
        }
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_format_number_exponent_range() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-2.5e30), "-2.5e+30");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(123456789012345680000.0), "123456789012345680000");

        for n in [1e21, 1.5e-7, -2.5e30, f64::MAX, f64::MIN_POSITIVE] {
            assert_eq!(parse_number(&format_number(n)), n);
        }
    }
}
