// Integration tests for the literal → reports pipeline

use bitscope::parse::{parse_literal, Subject};
use bitscope::pattern::Width;
use bitscope::report;

fn joined_lines(reports: &[report::Report]) -> String {
    reports
        .iter()
        .flat_map(|r| r.lines.iter())
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_float_pipeline() {
    let subject = parse_literal("6.5f32").expect("parse failed");
    let reports = report::build_reports(&subject, None);

    let joined = joined_lines(&reports);
    println!("Float reports:\n{}", joined);

    assert!(joined.contains("1. Sign Bit (S): 0"));
    assert!(joined.contains("2. Exponent (E): 129 (Hex: 0x81)"));
    assert!(joined.contains("3. Fraction (F): 0x500000"));
    assert!(joined.contains("Raw Bits: 0x40D00000"));
    assert!(joined.contains("Layout: 0 10000001 10100000000000000000000"));
}

#[test]
fn test_negative_float_flips_only_sign() {
    let pos = report::ieee754_report(6.5);
    let neg = report::ieee754_report(-6.5);

    let pos_joined = pos.lines.join("\n");
    let neg_joined = neg.lines.join("\n");

    assert!(pos_joined.contains("Sign Bit (S): 0"));
    assert!(neg_joined.contains("Sign Bit (S): 1"));
    // exponent and fraction lines are identical
    assert!(neg_joined.contains("2. Exponent (E): 129 (Hex: 0x81)"));
    assert!(neg_joined.contains("3. Fraction (F): 0x500000"));
}

#[test]
fn test_sign_extension_pipeline() {
    let subject = parse_literal("-10i8").expect("parse failed");
    let reports = report::build_reports(&subject, Some(Width::W32));

    let joined = joined_lines(&reports);
    println!("Sign-extension reports:\n{}", joined);

    assert!(joined.contains("Original Value (i8): -10"));
    assert!(joined.contains("Same-Width as u8: 246 (0xF6)"));
    assert!(joined.contains("Sign-Extended to u32: 4294967286 (0xFFFFFFF6)"));
    assert!(joined.contains("Zero-Extended to u32: 246 (0x000000F6)"));
}

#[test]
fn test_complement_pipeline() {
    let subject = parse_literal("0b01011000u8").expect("parse failed");
    let reports = report::build_reports(&subject, None);

    let joined = joined_lines(&reports);
    println!("Complement reports:\n{}", joined);

    assert!(joined.contains("Original: 0x58"));
    assert!(joined.contains("One's Complement: 0xA7"));
    assert!(joined.contains("Two's Complement: 0xA8"));
}

#[test]
fn test_byte_swap_pipeline() {
    let subject = parse_literal("0x1A2B3C4D").expect("parse failed");
    let reports = report::build_reports(&subject, None);

    let joined = joined_lines(&reports);
    println!("Byte-order reports:\n{}", joined);

    assert!(joined.contains("Original Value: 0x1A2B3C4D"));
    assert!(joined.contains("Swapped Value: 0x4D3C2B1A"));
    assert!(joined.contains("Swap is an involution: 0x1A2B3C4D"));
    // the host probe always resolves on supported targets
    assert!(joined.contains("Host Byte Order: "));
}

#[test]
fn test_representation_report() {
    let subject = parse_literal("87").expect("parse failed");
    let reports = report::build_reports(&subject, None);

    let joined = joined_lines(&reports);
    assert!(joined.contains("Signed Value: 87"));
    assert!(joined.contains("Parity: odd"));
    assert!(joined.contains("LSB: 1"));
}

#[test]
fn test_demo_registry_covers_the_classics() {
    let registry = report::demo_registry();
    assert!(registry.contains_key("ieee754"));
    assert!(registry.contains_key("twos-complement"));
    assert!(registry.contains_key("byte-swap"));
    assert!(registry.contains_key("sign-extension"));

    let demo = registry["sign-extension"];
    assert_eq!(demo.extend_target, Some(Width::W32));
    match demo.subject {
        Subject::Int { pattern, signed } => {
            assert!(signed);
            assert_eq!(pattern.bits(), 0xF6);
        }
        _ => panic!("Expected an integer subject"),
    }

    let reports = report::build_reports(&demo.subject, demo.extend_target);
    let joined = joined_lines(&reports);
    assert!(joined.contains("4294967286"));
    assert!(joined.contains("246"));
}

#[test]
fn test_every_demo_builds_reports() {
    for demo in report::demos() {
        let reports = report::build_reports(&demo.subject, demo.extend_target);
        assert!(!reports.is_empty(), "demo '{}' produced no reports", demo.name);
        for r in &reports {
            assert!(!r.lines.is_empty(), "empty report '{}' in demo '{}'", r.title, demo.name);
        }
    }
}
