//! Fixed-width bit patterns
//!
//! This module provides the core data model shared by every inspection
//! operation:
//! - [`Width`]: the supported pattern widths (8, 16, 32, 64 bits)
//! - [`BitPattern`]: an opaque fixed-width sequence of bits
//!
//! # Interpretation
//!
//! A [`BitPattern`] carries no sign and no type — it is just bits.  How
//! the bits are read (unsigned value, two's-complement signed value,
//! IEEE-754 fields) is always supplied by the caller through the
//! operations in [`crate::inspect`].  The width is fixed at construction
//! and never changes; widening is an explicit operation
//! ([`crate::inspect::reinterpret::sign_extend`]), never implicit.

use crate::inspect::errors::InspectError;
use std::fmt;

/// Supported pattern widths, in bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Width {
    W8,
    W16,
    W32,
    W64,
}

impl Width {
    /// Number of bits in this width.
    pub fn bits(self) -> u32 {
        match self {
            Width::W8 => 8,
            Width::W16 => 16,
            Width::W32 => 32,
            Width::W64 => 64,
        }
    }

    /// Bit mask covering exactly this width (`2^N - 1`).
    pub fn mask(self) -> u64 {
        match self {
            Width::W64 => u64::MAX,
            w => (1u64 << w.bits()) - 1,
        }
    }

    /// Look up a width by its bit count.
    ///
    /// Anything outside {8, 16, 32, 64} is rejected at the call boundary
    /// rather than silently truncated.
    pub fn from_bits(bits: u32) -> Result<Width, InspectError> {
        match bits {
            8 => Ok(Width::W8),
            16 => Ok(Width::W16),
            32 => Ok(Width::W32),
            64 => Ok(Width::W64),
            _ => Err(InspectError::UnsupportedWidth { bits }),
        }
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

/// An opaque fixed-width sequence of bits.
///
/// Stored internally as a `u64` with all bits above the declared width
/// forced to zero.  Equality compares both bits and width: `0xF6` as an
/// 8-bit pattern is not equal to `0xF6` as a 32-bit pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitPattern {
    bits: u64,
    width: Width,
}

impl BitPattern {
    /// Create a pattern from raw bits, masking anything above `width`.
    pub fn new(bits: u64, width: Width) -> Self {
        BitPattern {
            bits: bits & width.mask(),
            width,
        }
    }

    pub fn from_u8(v: u8) -> Self {
        BitPattern::new(v as u64, Width::W8)
    }

    pub fn from_u16(v: u16) -> Self {
        BitPattern::new(v as u64, Width::W16)
    }

    pub fn from_u32(v: u32) -> Self {
        BitPattern::new(v as u64, Width::W32)
    }

    pub fn from_u64(v: u64) -> Self {
        BitPattern::new(v, Width::W64)
    }

    /// Capture the two's-complement bit pattern of a signed value.
    ///
    /// `as u8` on a negative `i8` is defined in Rust to preserve the bit
    /// pattern, so `from_i8(-10)` yields `0xF6`.
    pub fn from_i8(v: i8) -> Self {
        BitPattern::new(v as u8 as u64, Width::W8)
    }

    pub fn from_i16(v: i16) -> Self {
        BitPattern::new(v as u16 as u64, Width::W16)
    }

    pub fn from_i32(v: i32) -> Self {
        BitPattern::new(v as u32 as u64, Width::W32)
    }

    pub fn from_i64(v: i64) -> Self {
        BitPattern::new(v as u64, Width::W64)
    }

    /// The raw bits, right-aligned in a `u64`.
    pub fn bits(&self) -> u64 {
        self.bits
    }

    /// The declared width of the pattern.
    pub fn width(&self) -> Width {
        self.width
    }

    /// A single bit, where index 0 is the least significant.
    ///
    /// Indices at or above the width read as 0.
    pub fn bit(&self, index: u32) -> u8 {
        if index >= self.width.bits() {
            0
        } else {
            ((self.bits >> index) & 1) as u8
        }
    }

    /// The most significant (sign) bit of the pattern.
    pub fn top_bit(&self) -> u8 {
        self.bit(self.width.bits() - 1)
    }

    /// The least significant bit (odd/even indicator).
    pub fn low_bit(&self) -> u8 {
        self.bit(0)
    }

    /// Render all bits, most significant first, e.g. `"01011000"`.
    pub fn binary_string(&self) -> String {
        let n = self.width.bits();
        (0..n).rev().map(|i| char::from(b'0' + self.bit(i))).collect()
    }

    /// Render the bits in nibble groups, e.g. `"0101 1000"`.
    pub fn grouped_binary_string(&self) -> String {
        let mut out = String::new();
        let n = self.width.bits();
        for i in (0..n).rev() {
            out.push(char::from(b'0' + self.bit(i)));
            if i != 0 && i % 4 == 0 {
                out.push(' ');
            }
        }
        out
    }

    /// Render as zero-padded hex with a `0x` prefix, e.g. `"0xF6"`.
    pub fn hex_string(&self) -> String {
        let digits = (self.width.bits() / 4) as usize;
        format!("0x{:0width$X}", self.bits, width = digits)
    }
}

impl fmt::Display for BitPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex_string())
    }
}
