//! Signed/unsigned reinterpretation and explicit widening
//!
//! Two code paths that look similar but must stay distinct:
//!
//! - **Same-width reinterpretation** ([`as_unsigned`], [`as_signed`]):
//!   reads the pattern as-is.  Every bit is preserved; the unsigned
//!   reading equals `pattern mod 2^width`.  An 8-bit `0xF6` reads as 246
//!   unsigned or -10 signed — no bits are added or changed.
//!
//! - **Widen-then-reinterpret** ([`sign_extend`] followed by
//!   [`as_unsigned`]): first replicates the top bit into every added
//!   high-order bit, then reads the wider pattern.  `0xF6` sign-extended
//!   to 32 bits is `0xFFFFFFF6`, which reads as 4294967286 unsigned.
//!
//! Conflating the two is the classic C implicit-conversion surprise:
//! sign extension happens only in the widening step, never in the
//! same-width reinterpretation.

use crate::inspect::errors::InspectError;
use crate::pattern::{BitPattern, Width};

/// Read a pattern as an unsigned value of the same width.
///
/// Bit-exact; equals `bits mod 2^width`.  Never sign-extends.
pub fn as_unsigned(p: &BitPattern) -> u64 {
    p.bits()
}

/// Read a pattern as a two's-complement signed value of the same width.
pub fn as_signed(p: &BitPattern) -> i64 {
    let n = p.width().bits();
    if n == 64 {
        p.bits() as i64
    } else if p.top_bit() == 1 {
        // fill the high bits with the sign before the signed read
        (p.bits() | !p.width().mask()) as i64
    } else {
        p.bits() as i64
    }
}

/// Widen a pattern by replicating its top bit into all added high bits.
///
/// Fails with [`InspectError::NarrowingExtension`] when the target is
/// narrower than the source.  A same-width target is a no-op.
pub fn sign_extend(p: &BitPattern, to: Width) -> Result<BitPattern, InspectError> {
    if to < p.width() {
        return Err(InspectError::NarrowingExtension {
            from: p.width(),
            to,
        });
    }
    let bits = if p.top_bit() == 1 {
        // set every bit from the old width up to the new width
        (p.bits() | !p.width().mask()) & to.mask()
    } else {
        p.bits()
    };
    Ok(BitPattern::new(bits, to))
}

/// Widen a pattern by filling the added high bits with zeros.
///
/// The unsigned counterpart of [`sign_extend`]; the widened pattern
/// always reads as the same unsigned value as the original.
pub fn zero_extend(p: &BitPattern, to: Width) -> Result<BitPattern, InspectError> {
    if to < p.width() {
        return Err(InspectError::NarrowingExtension {
            from: p.width(),
            to,
        });
    }
    Ok(BitPattern::new(p.bits(), to))
}
