//! One's- and two's-complement
//!
//! Both operations stay within the pattern's declared width: the NOT is
//! masked to N bits and the `+1` wraps modulo 2^N.  The wraparound on
//! `twos_complement(0)` is the defined result (0 again), not an
//! arithmetic overflow.

use crate::pattern::BitPattern;

/// Bitwise NOT restricted to the pattern's width.
pub fn ones_complement(p: BitPattern) -> BitPattern {
    BitPattern::new(!p.bits(), p.width())
}

/// One's complement plus 1, wrapping modulo 2^N.
///
/// Applied twice this returns the original pattern for every input.
pub fn twos_complement(p: BitPattern) -> BitPattern {
    let ones = ones_complement(p);
    BitPattern::new(ones.bits().wrapping_add(1), p.width())
}
