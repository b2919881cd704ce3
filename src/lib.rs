//! # Introduction
//!
//! bitscope inspects the bit-level representation of fixed-width numeric
//! values: IEEE-754 single-precision layout, one's/two's-complement,
//! host byte order, byte swapping, and signed/unsigned bit-pattern
//! reinterpretation.  Results are structured values that can be rendered
//! as plain-text reports or browsed in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Literal → Parser → Subject → Inspector → Reports → TUI / stdout
//! ```
//!
//! 1. [`parse`] — turns a command-line literal (`6.5f32`, `0xF6u8`,
//!    `0b01011000u8`, `-10i8`) into a [`parse::Subject`].
//! 2. [`pattern`] — the common currency: a [`pattern::BitPattern`] is an
//!    opaque fixed-width bit sequence with no attached signedness.
//! 3. [`inspect`] — pure, stateless operations over bit patterns:
//!    [`inspect::float`], [`inspect::complement`], [`inspect::endian`],
//!    [`inspect::reinterpret`].
//! 4. [`report`] — renders inspection results as fixed-format textual
//!    reports, plus a registry of canned demonstrations.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Supported inputs
//!
//! Widths: 8, 16, 32, and 64-bit integers (signed or unsigned) and 32-bit
//! floats.  Integer literals in decimal, hex (`0x`), or binary (`0b`),
//! with an optional width suffix (`i8`..`u64`, `f32`).

pub mod inspect;
pub mod parse;
pub mod pattern;
pub mod report;
pub mod ui;
