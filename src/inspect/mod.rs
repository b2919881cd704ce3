//! Bit-level inspection operations
//!
//! This module provides the core analysis logic:
//! - [`float`]: IEEE-754 single-precision decomposition
//! - [`complement`]: one's- and two's-complement over any supported width
//! - [`endian`]: host byte-order detection and 32-bit byte swapping
//! - [`reinterpret`]: signed/unsigned reinterpretation and explicit widening
//! - [`errors`]: the inspection error type
//!
//! # Purity
//!
//! Every operation here is a pure function over its arguments.  The one
//! apparent exception, [`endian::detect_byte_order`], reads only an
//! immutable property of the host; it takes no locks and touches no
//! shared mutable state, so all operations may be called freely from
//! multiple threads.

pub mod complement;
pub mod endian;
pub mod errors;
pub mod float;
pub mod reinterpret;
