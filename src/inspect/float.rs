//! IEEE-754 single-precision decomposition
//!
//! Splits a 32-bit float into its sign, exponent, and fraction fields by
//! reinterpreting the in-memory bit pattern — a type-punning operation,
//! not a numeric cast.  `6.5 as u32` would round the value to `6`; what
//! we want is the untouched layout `0x40D00000`.  Rust's
//! [`f32::to_bits`] is the defined primitive for exactly this.
//!
//! # Layout
//!
//! ```text
//! bit 31    bits 30–23        bits 22–0
//! ┌──────┬──────────────┬─────────────────────────┐
//! │ sign │ exponent (8) │      fraction (23)      │
//! └──────┴──────────────┴─────────────────────────┘
//! ```
//!
//! Values are assumed finite; NaN/Inf are decomposed field-wise like any
//! other pattern but are not classified, and normal vs. subnormal is not
//! distinguished.

/// Bit position of the sign.
pub const SIGN_SHIFT: u32 = 31;
/// Bit position of the lowest exponent bit.
pub const EXPONENT_SHIFT: u32 = 23;
/// Mask for the 8 exponent bits after shifting.
pub const EXPONENT_MASK: u32 = 0xFF;
/// Mask for the 23 fraction bits.
pub const FRACTION_MASK: u32 = 0x7F_FFFF;

/// The fields of a 32-bit IEEE-754 value, plus the raw pattern they came
/// from.  Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatDecomposition {
    /// Sign bit: 0 for positive, 1 for negative.
    pub sign: u32,
    /// Biased exponent, 8 bits (0–255).
    pub exponent: u32,
    /// Fraction (mantissa) bits, 23 bits.
    pub fraction: u32,
    /// The full 32-bit pattern the fields were extracted from.
    pub raw_bits: u32,
}

impl FloatDecomposition {
    /// Recombine the fields into a 32-bit pattern.
    ///
    /// For any decomposition produced by [`decompose`] this equals
    /// `raw_bits` exactly.
    pub fn reassemble(&self) -> u32 {
        (self.sign << SIGN_SHIFT) | (self.exponent << EXPONENT_SHIFT) | self.fraction
    }

    /// Render the three fields as grouped binary digits, e.g.
    /// `"0 10000001 10100000000000000000000"` for `6.5`.
    pub fn layout_string(&self) -> String {
        let mut out = String::with_capacity(34);
        for i in (0..32).rev() {
            out.push(if (self.raw_bits >> i) & 1 == 1 { '1' } else { '0' });
            if i == 31 || i == 23 {
                out.push(' ');
            }
        }
        out
    }
}

/// Decompose a 32-bit float into its IEEE-754 fields.
///
/// Negative inputs differ from their positive counterparts only in the
/// sign bit; exponent and fraction encode the magnitude identically.
pub fn decompose(value: f32) -> FloatDecomposition {
    let bits = value.to_bits();
    FloatDecomposition {
        sign: (bits >> SIGN_SHIFT) & 1,
        exponent: (bits >> EXPONENT_SHIFT) & EXPONENT_MASK,
        fraction: bits & FRACTION_MASK,
        raw_bits: bits,
    }
}
