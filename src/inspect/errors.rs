//! Inspection error types
//!
//! The inspection operations are total over their declared domains with
//! three exceptions, collected in [`InspectError`].  None of them is
//! recoverable mid-operation; callers surface them at the boundary where
//! the offending input arrived.

use crate::pattern::Width;
use std::fmt;

/// Errors produced at the inspection call boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InspectError {
    /// A width in bits outside the supported set {8, 16, 32, 64}
    UnsupportedWidth { bits: u32 },

    /// The byte-order probe read a byte that matches neither the least-
    /// nor most-significant byte of the probe pattern (mixed-endian or
    /// exotic host)
    IndeterminateByteOrder { probe_byte: u8 },

    /// Sign/zero extension was asked to shrink a pattern
    NarrowingExtension { from: Width, to: Width },
}

impl fmt::Display for InspectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InspectError::UnsupportedWidth { bits } => {
                write!(f, "Unsupported width: {} bits (expected 8, 16, 32, or 64)", bits)
            }
            InspectError::IndeterminateByteOrder { probe_byte } => {
                write!(
                    f,
                    "Indeterminate byte order: probe read 0x{:02X}, expected 0x04 (little) or 0x01 (big)",
                    probe_byte
                )
            }
            InspectError::NarrowingExtension { from, to } => {
                write!(
                    f,
                    "Cannot extend a {} pattern to {} (target must be at least as wide)",
                    from, to
                )
            }
        }
    }
}

impl std::error::Error for InspectError {}
