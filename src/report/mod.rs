//! Textual report generation
//!
//! Each inspection is rendered as a [`Report`]: a title plus fixed-format
//! lines, consumed either by the TUI report pane or printed directly with
//! `--report`.  The exact wording follows the classic textbook printouts
//! (sign/exponent/fraction fields, one's/two's complement, byte-order
//! probe, sign-extension contrast); the numeric content is what the
//! tests pin down, not the prose.
//!
//! The module also hosts the registry of canned demonstrations
//! ([`demo_registry`]) with the traditional example values: `6.5f32` for
//! IEEE-754, `0b01011000` for complements, `0x1A2B3C4D` for the byte
//! swap, and `-10i8` for sign extension.

use crate::inspect::{complement, endian, float, reinterpret};
use crate::parse::Subject;
use crate::pattern::{BitPattern, Width};
use rustc_hash::FxHashMap;

/// A rendered inspection: a title and its output lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub title: String,
    pub lines: Vec<String>,
}

impl Report {
    fn new(title: impl Into<String>) -> Self {
        Report {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }
}

/// Basic representation report: decimal, hex, binary, MSB/LSB, parity.
pub fn pattern_report(p: &BitPattern, signed: bool) -> Report {
    let mut r = Report::new("Representation");
    if signed {
        r.push(format!("Signed Value: {}", reinterpret::as_signed(p)));
    }
    r.push(format!("Unsigned Value: {}", reinterpret::as_unsigned(p)));
    r.push(format!("Hex: {}", p.hex_string()));
    r.push(format!("Binary: {}", p.grouped_binary_string()));
    r.push(format!("MSB: {}   LSB: {}", p.top_bit(), p.low_bit()));
    r.push(format!(
        "Parity: {}",
        if p.low_bit() == 1 { "odd" } else { "even" }
    ));
    r
}

/// IEEE-754 single-precision field report.
pub fn ieee754_report(value: f32) -> Report {
    let d = float::decompose(value);
    let mut r = Report::new("IEEE-754 Single Precision");
    r.push(format!("Input Number (Float): {:.6}", value));
    r.push(format!("Raw Bits: 0x{:08X}", d.raw_bits));
    r.push(format!("1. Sign Bit (S): {}", d.sign));
    r.push(format!("2. Exponent (E): {} (Hex: 0x{:X})", d.exponent, d.exponent));
    r.push(format!("3. Fraction (F): 0x{:X}", d.fraction));
    r.push(format!("Layout: {}", d.layout_string()));
    r
}

/// One's- and two's-complement report.
pub fn complement_report(p: &BitPattern) -> Report {
    let ones = complement::ones_complement(*p);
    let twos = complement::twos_complement(*p);
    let mut r = Report::new("Complements");
    r.push(format!("Original: {} ({})", p.hex_string(), p.grouped_binary_string()));
    r.push(format!(
        "One's Complement: {} ({})",
        ones.hex_string(),
        ones.grouped_binary_string()
    ));
    r.push(format!(
        "Two's Complement: {} ({})",
        twos.hex_string(),
        twos.grouped_binary_string()
    ));
    r.push(format!(
        "Two's Complement as signed: {}",
        reinterpret::as_signed(&twos)
    ));
    r
}

/// Byte-order report: host detection plus the 32-bit swap.
///
/// The value is taken as (or widened to) 32 bits for the swap.  An
/// indeterminate probe is reported as a line, never a crash.
pub fn byte_order_report(p: &BitPattern) -> Report {
    let mut r = Report::new("Byte Order");
    match endian::detect_byte_order() {
        Ok(order) => r.push(format!("Host Byte Order: {}", order)),
        Err(e) => r.push(format!("Host Byte Order: {}", e)),
    }
    let value = p.bits() as u32;
    let swapped = endian::swap_byte_order_32(value);
    r.push(format!("Original Value: 0x{:08X}", value));
    r.push(format!("Swapped Value: 0x{:08X}", swapped));
    r.push(format!(
        "Swap is an involution: 0x{:08X}",
        endian::swap_byte_order_32(swapped)
    ));
    r
}

/// Sign/unsigned reinterpretation report, contrasting the same-width
/// read with the widen-then-reinterpret path.
pub fn reinterpret_report(p: &BitPattern, signed: bool, target: Width) -> Report {
    let mut r = Report::new("Reinterpretation");
    if signed {
        r.push(format!(
            "Original Value (i{}): {}",
            p.width().bits(),
            reinterpret::as_signed(p)
        ));
    } else {
        r.push(format!(
            "Original Value (u{}): {}",
            p.width().bits(),
            reinterpret::as_unsigned(p)
        ));
    }
    r.push(format!(
        "Same-Width as u{}: {} ({})",
        p.width().bits(),
        reinterpret::as_unsigned(p),
        p.hex_string()
    ));
    if target > p.width() {
        // both widening paths are total here: target is wider by construction
        if let Ok(extended) = reinterpret::sign_extend(p, target) {
            r.push(format!(
                "Sign-Extended to u{}: {} ({})",
                target.bits(),
                reinterpret::as_unsigned(&extended),
                extended.hex_string()
            ));
        }
        if let Ok(zeroed) = reinterpret::zero_extend(p, target) {
            r.push(format!(
                "Zero-Extended to u{}: {} ({})",
                target.bits(),
                reinterpret::as_unsigned(&zeroed),
                zeroed.hex_string()
            ));
        }
        r.push("Sign extension happens only in the widening step.".to_string());
    }
    r
}

/// Default widening target for the reinterpretation report: 8/16-bit
/// patterns widen to 32, 32-bit to 64, 64-bit stays put.
pub fn default_extend_target(width: Width) -> Width {
    match width {
        Width::W8 | Width::W16 => Width::W32,
        Width::W32 | Width::W64 => Width::W64,
    }
}

/// Build the full report set for a subject.
///
/// Floats get the IEEE-754 decomposition; integers get representation,
/// complements, and reinterpretation.  Both get the byte-order report.
pub fn build_reports(subject: &Subject, extend_target: Option<Width>) -> Vec<Report> {
    let mut reports = Vec::new();
    match subject {
        Subject::Float(v) => {
            reports.push(ieee754_report(*v));
            reports.push(byte_order_report(&subject.pattern()));
        }
        Subject::Int { pattern, signed } => {
            let target = extend_target.unwrap_or_else(|| default_extend_target(pattern.width()));
            reports.push(pattern_report(pattern, *signed));
            reports.push(complement_report(pattern));
            reports.push(reinterpret_report(pattern, *signed, target));
            reports.push(byte_order_report(pattern));
        }
    }
    reports
}

/// A canned demonstration: a named subject with a short description.
#[derive(Debug, Clone, Copy)]
pub struct Demo {
    pub name: &'static str,
    pub description: &'static str,
    pub subject: Subject,
    /// Explicit widening target, where the classic demo fixes one.
    pub extend_target: Option<Width>,
}

/// All canned demonstrations, in display order.
pub fn demos() -> Vec<Demo> {
    vec![
        Demo {
            name: "ieee754",
            description: "Decompose 6.5f32 into sign/exponent/fraction",
            subject: Subject::Float(6.5),
            extend_target: None,
        },
        Demo {
            name: "ieee754-neg",
            description: "Decompose -6.5f32 (only the sign bit changes)",
            subject: Subject::Float(-6.5),
            extend_target: None,
        },
        Demo {
            name: "twos-complement",
            description: "One's and two's complement of 0b01011000",
            subject: Subject::Int {
                pattern: BitPattern::from_u8(0b0101_1000),
                signed: false,
            },
            extend_target: None,
        },
        Demo {
            name: "byte-swap",
            description: "Detect host byte order and swap 0x1A2B3C4D",
            subject: Subject::Int {
                pattern: BitPattern::from_u32(0x1A2B_3C4D),
                signed: false,
            },
            extend_target: None,
        },
        Demo {
            name: "sign-extension",
            description: "Widen -10i8: same-width 246 vs extended 4294967286",
            subject: Subject::Int {
                pattern: BitPattern::from_i8(-10),
                signed: true,
            },
            extend_target: Some(Width::W32),
        },
    ]
}

/// Name → demo lookup table.
pub fn demo_registry() -> FxHashMap<&'static str, Demo> {
    demos().into_iter().map(|d| (d.name, d)).collect()
}
