//! Host byte-order detection and byte swapping
//!
//! Detection writes the probe pattern `0x01020304` into a 32-bit cell
//! and reads back the byte at the lowest address: `0x04` (the LSB first)
//! means little-endian, `0x01` (the MSB first) means big-endian.  A host
//! that returns anything else — a mixed-endian layout — is reported as
//! [`InspectError::IndeterminateByteOrder`] rather than guessed at.
//!
//! The swap, by contrast, operates on the logical integer value with
//! masks and shifts and is independent of how the host stores it.

use crate::inspect::errors::InspectError;
use std::fmt;

/// Host byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Least-significant byte at the lowest address.
    Little,
    /// Most-significant byte at the lowest address.
    Big,
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ByteOrder::Little => write!(f, "Little-Endian"),
            ByteOrder::Big => write!(f, "Big-Endian"),
        }
    }
}

/// The 4-byte probe written into memory by [`detect_byte_order`].
/// MSB = 0x01, LSB = 0x04.
pub const PROBE_PATTERN: u32 = 0x01020304;

/// Classify a byte read from the lowest address of the probe cell.
///
/// Split out from [`detect_byte_order`] so the indeterminate branch can
/// be exercised without a mixed-endian host.
pub fn classify_probe(first_byte: u8) -> Result<ByteOrder, InspectError> {
    match first_byte {
        0x04 => Ok(ByteOrder::Little),
        0x01 => Ok(ByteOrder::Big),
        probe_byte => Err(InspectError::IndeterminateByteOrder { probe_byte }),
    }
}

/// Determine the host byte order by probing a known 4-byte pattern.
pub fn detect_byte_order() -> Result<ByteOrder, InspectError> {
    // to_ne_bytes gives the in-memory layout; index 0 is the lowest address
    let cell = PROBE_PATTERN.to_ne_bytes();
    classify_probe(cell[0])
}

/// Reverse the four bytes of a 32-bit value: byte0↔byte3, byte1↔byte2.
///
/// Pure function of the logical value, independent of host byte order,
/// and its own inverse: `swap_byte_order_32(swap_byte_order_32(x)) == x`.
pub fn swap_byte_order_32(value: u32) -> u32 {
    ((value & 0xFF00_0000) >> 24)
        | ((value & 0x00FF_0000) >> 8)
        | ((value & 0x0000_FF00) << 8)
        | ((value & 0x0000_00FF) << 24)
}
