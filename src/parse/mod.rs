//! Command-line literal parsing
//!
//! Converts a literal string into a [`Subject`] for inspection.
//! Accepted forms:
//!
//! ```text
//! 87          decimal int, defaults to i32
//! -10i8       decimal int with width suffix
//! 0xF6u8      hex int (unsuffixed hex defaults to u32)
//! 0b01011000  binary int (defaults to u32)
//! 6.5f32      32-bit float (suffix optional when a '.' is present)
//! ```
//!
//! Values are range-checked against the suffixed type; out-of-range
//! literals are rejected rather than silently truncated.

use crate::pattern::{BitPattern, Width};
use std::fmt;

/// A parsed input value, ready for inspection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Subject {
    /// A 32-bit float.
    Float(f32),
    /// A fixed-width integer, carried as its bit pattern plus the
    /// signedness the literal was declared with.
    Int { pattern: BitPattern, signed: bool },
}

impl Subject {
    /// The bit pattern of the subject, regardless of kind.
    pub fn pattern(&self) -> BitPattern {
        match self {
            Subject::Float(v) => BitPattern::from_u32(v.to_bits()),
            Subject::Int { pattern, .. } => *pattern,
        }
    }

    /// A short type name for display, e.g. `"i8"` or `"f32"`.
    pub fn type_name(&self) -> String {
        match self {
            Subject::Float(_) => "f32".to_string(),
            Subject::Int { pattern, signed } => {
                format!("{}{}", if *signed { 'i' } else { 'u' }, pattern.width().bits())
            }
        }
    }
}

/// Errors from literal parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    fn new(message: impl Into<String>) -> Self {
        ParseError {
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ParseError {}

/// Split a trailing type suffix off a literal, if present.
///
/// Returns `(body, Some((width, signed)))` for integer suffixes and
/// `(body, None)` when no suffix matched.  `f32` is handled separately
/// by the caller.
fn split_int_suffix(s: &str) -> (&str, Option<(Width, bool)>) {
    const SUFFIXES: [(&str, Width, bool); 8] = [
        ("i16", Width::W16, true),
        ("i32", Width::W32, true),
        ("i64", Width::W64, true),
        ("u16", Width::W16, false),
        ("u32", Width::W32, false),
        ("u64", Width::W64, false),
        ("i8", Width::W8, true),
        ("u8", Width::W8, false),
    ];
    for (suffix, width, signed) in SUFFIXES {
        if let Some(body) = s.strip_suffix(suffix) {
            // "0xF6u8" strips to "0xF6", but a bare "u8" has no body
            if !body.is_empty() {
                return (body, Some((width, signed)));
            }
        }
    }
    (s, None)
}

/// Parse a numeric literal into a [`Subject`].
pub fn parse_literal(input: &str) -> Result<Subject, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::new("Empty literal"));
    }

    // Floats: explicit f32 suffix, or a decimal point / exponent in a
    // literal that is not hex (0x1.8p3 style hex floats are unsupported).
    let lower = input.to_ascii_lowercase();
    let is_float_suffix = lower.ends_with("f32");
    let has_point = !lower.starts_with("0x")
        && !lower.starts_with("-0x")
        && (lower.contains('.') || lower.contains('e'));
    if is_float_suffix || has_point {
        let body = input.strip_suffix("f32").unwrap_or(input);
        return match body.parse::<f32>() {
            Ok(v) => Ok(Subject::Float(v)),
            Err(_) => Err(ParseError::new(format!("Invalid float literal '{}'", input))),
        };
    }

    let (negative, body) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };

    let (body, suffix) = split_int_suffix(body);

    let (digits, radix) = if let Some(hex) = body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        (hex, 16)
    } else if let Some(bin) = body.strip_prefix("0b").or_else(|| body.strip_prefix("0B")) {
        (bin, 2)
    } else {
        (body, 10)
    };

    let magnitude = u128::from_str_radix(&digits.replace('_', ""), radix)
        .map_err(|_| ParseError::new(format!("Invalid integer literal '{}'", input)))?;

    // Unsuffixed decimal reads as i32; unsuffixed hex/binary as u32,
    // since 0xFFFFFFFF is more naturally a pattern than a negative int.
    let (width, signed) = suffix.unwrap_or_else(|| {
        if radix == 10 {
            (Width::W32, true)
        } else {
            (Width::W32, false)
        }
    });

    if negative && !signed {
        return Err(ParseError::new(format!(
            "Negative literal '{}' cannot have an unsigned suffix",
            input
        )));
    }

    let pattern = if negative {
        let min_magnitude = 1u128 << (width.bits() - 1);
        if magnitude > min_magnitude {
            return Err(ParseError::new(format!(
                "Literal '{}' out of range for i{}",
                input,
                width.bits()
            )));
        }
        // two's complement of the magnitude within the width
        BitPattern::new((magnitude as u64).wrapping_neg(), width)
    } else {
        let max = if signed {
            (1u128 << (width.bits() - 1)) - 1
        } else if width == Width::W64 {
            u64::MAX as u128
        } else {
            (1u128 << width.bits()) - 1
        };
        if magnitude > max {
            return Err(ParseError::new(format!(
                "Literal '{}' out of range for {}{}",
                input,
                if signed { 'i' } else { 'u' },
                width.bits()
            )));
        }
        BitPattern::new(magnitude as u64, width)
    };

    Ok(Subject::Int { pattern, signed })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal_defaults_to_i32() {
        let subject = parse_literal("87").unwrap();
        match subject {
            Subject::Int { pattern, signed } => {
                assert!(signed);
                assert_eq!(pattern.width(), Width::W32);
                assert_eq!(pattern.bits(), 87);
            }
            _ => panic!("Expected an integer subject"),
        }
    }

    #[test]
    fn test_parse_negative_i8() {
        let subject = parse_literal("-10i8").unwrap();
        match subject {
            Subject::Int { pattern, signed } => {
                assert!(signed);
                assert_eq!(pattern.width(), Width::W8);
                assert_eq!(pattern.bits(), 0xF6);
            }
            _ => panic!("Expected an integer subject"),
        }
    }

    #[test]
    fn test_parse_hex_and_binary() {
        let subject = parse_literal("0xF6u8").unwrap();
        assert_eq!(subject.pattern().bits(), 0xF6);
        assert_eq!(subject.pattern().width(), Width::W8);

        let subject = parse_literal("0b01011000u8").unwrap();
        assert_eq!(subject.pattern().bits(), 0x58);

        // unsuffixed hex defaults to u32
        let subject = parse_literal("0x1A2B3C4D").unwrap();
        assert_eq!(subject.pattern().width(), Width::W32);
        match subject {
            Subject::Int { signed, .. } => assert!(!signed),
            _ => panic!("Expected an integer subject"),
        }
    }

    #[test]
    fn test_parse_float() {
        assert_eq!(parse_literal("6.5").unwrap(), Subject::Float(6.5));
        assert_eq!(parse_literal("6.5f32").unwrap(), Subject::Float(6.5));
        assert_eq!(parse_literal("-6.5").unwrap(), Subject::Float(-6.5));
    }

    #[test]
    fn test_parse_range_errors() {
        assert!(parse_literal("128i8").is_err());
        assert!(parse_literal("-129i8").is_err());
        assert!(parse_literal("256u8").is_err());
        assert!(parse_literal("-1u8").is_err());
        assert!(parse_literal("-128i8").is_ok());
        assert!(parse_literal("255u8").is_ok());
    }

    #[test]
    fn test_parse_garbage() {
        assert!(parse_literal("").is_err());
        assert!(parse_literal("banana").is_err());
        assert!(parse_literal("0x").is_err());
        assert!(parse_literal("1.2.3").is_err());
    }
}
