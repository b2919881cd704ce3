use bitscope::inspect::errors::InspectError;
use bitscope::inspect::{complement, endian, float, reinterpret};
use bitscope::pattern::{BitPattern, Width};

#[test]
fn test_ieee754_decompose_6_5() {
    // 6.5 = 1.101b * 2^2: biased exponent 129, fraction bits 101000...
    let d = float::decompose(6.5);
    assert_eq!(d.sign, 0);
    assert_eq!(d.exponent, 129);
    assert_eq!(d.exponent, 0x81);
    assert_eq!(d.fraction, 0x500000);
    assert_eq!(d.raw_bits, 0x40D00000);
    assert_eq!(d.layout_string(), "0 10000001 10100000000000000000000");
}

#[test]
fn test_ieee754_negative_changes_only_sign() {
    let pos = float::decompose(6.5);
    let neg = float::decompose(-6.5);
    assert_eq!(neg.sign, 1);
    assert_eq!(neg.exponent, pos.exponent);
    assert_eq!(neg.fraction, pos.fraction);
    assert_eq!(neg.raw_bits, pos.raw_bits | (1 << 31));
}

#[test]
fn test_ieee754_reassembly() {
    // decomposition must be a pun on the bits, not a numeric cast
    for v in [0.0f32, 1.0, -1.0, 6.5, -6.5, 0.1, 1234.5678, f32::MIN_POSITIVE, 1e-40] {
        let d = float::decompose(v);
        assert_eq!(d.reassemble(), d.raw_bits, "reassembly mismatch for {}", v);
        assert_eq!(d.raw_bits, v.to_bits());
    }
}

#[test]
fn test_ieee754_is_not_a_numeric_cast() {
    // the classic bug this must not exhibit: 6.5 as u32 == 6
    let d = float::decompose(6.5);
    assert_ne!(d.raw_bits, 6);
}

#[test]
fn test_twos_complement_textbook_case() {
    // 0b01011000 from the classic demonstration
    let p = BitPattern::from_u8(0b0101_1000);
    let ones = complement::ones_complement(p);
    let twos = complement::twos_complement(p);
    assert_eq!(ones.bits(), 0xA7);
    assert_eq!(twos.bits(), 0xA8);
}

#[test]
fn test_twos_complement_involution_all_u8() {
    for x in 0..=255u8 {
        let p = BitPattern::from_u8(x);
        let twice = complement::twos_complement(complement::twos_complement(p));
        assert_eq!(twice, p, "involution failed for {:#04X}", x);
    }
}

#[test]
fn test_twos_complement_matches_definition() {
    // twos(x) == (!x + 1) mod 2^N across all widths
    let cases: [(u64, Width); 6] = [
        (0, Width::W8),
        (1, Width::W16),
        (0x8000, Width::W16),
        (0xFFFF_FFFF, Width::W32),
        (0x1234_5678, Width::W32),
        (u64::MAX, Width::W64),
    ];
    for (x, width) in cases {
        let p = BitPattern::new(x, width);
        let twos = complement::twos_complement(p);
        let expected = (!x).wrapping_add(1) & width.mask();
        assert_eq!(twos.bits(), expected, "width {} value {:#X}", width, x);
    }
}

#[test]
fn test_twos_complement_zero_wraps_to_zero() {
    // wraparound is the defined behavior, not an overflow
    for width in [Width::W8, Width::W16, Width::W32, Width::W64] {
        let zero = BitPattern::new(0, width);
        assert_eq!(complement::twos_complement(zero), zero);
    }
}

#[test]
fn test_byte_swap_literal_scenario() {
    assert_eq!(endian::swap_byte_order_32(0x1A2B3C4D), 0x4D3C2B1A);
}

#[test]
fn test_byte_swap_involution() {
    for x in [0u32, 1, 0xFF, 0x01020304, 0x1A2B3C4D, 0xDEADBEEF, u32::MAX] {
        assert_eq!(
            endian::swap_byte_order_32(endian::swap_byte_order_32(x)),
            x
        );
    }
}

#[test]
fn test_probe_classification() {
    assert_eq!(endian::classify_probe(0x04).unwrap(), endian::ByteOrder::Little);
    assert_eq!(endian::classify_probe(0x01).unwrap(), endian::ByteOrder::Big);
    // mixed-endian hosts are reported, never guessed at
    assert_eq!(
        endian::classify_probe(0x02),
        Err(InspectError::IndeterminateByteOrder { probe_byte: 0x02 })
    );
}

#[test]
fn test_detect_byte_order_matches_host() {
    // every supported host is one or the other; the probe must agree
    // with the compiler's view of the target
    let order = endian::detect_byte_order().unwrap();
    if cfg!(target_endian = "little") {
        assert_eq!(order, endian::ByteOrder::Little);
    } else {
        assert_eq!(order, endian::ByteOrder::Big);
    }
}

#[test]
fn test_same_width_reinterpretation_preserves_bits() {
    // -10 as i8 is 0xF6; the same-width unsigned read is 246, no extension
    let p = BitPattern::from_i8(-10);
    assert_eq!(p.bits(), 0xF6);
    assert_eq!(reinterpret::as_unsigned(&p), 246);
    assert_eq!(reinterpret::as_signed(&p), -10);
}

#[test]
fn test_sign_extension_widens_with_top_bit() {
    // the widen-then-reinterpret path: 0xF6 -> 0xFFFFFFF6 -> 4294967286
    let p = BitPattern::from_i8(-10);
    let wide = reinterpret::sign_extend(&p, Width::W32).unwrap();
    assert_eq!(wide.bits(), 0xFFFF_FFF6);
    assert_eq!(reinterpret::as_unsigned(&wide), 4294967286);
    assert_eq!(reinterpret::as_signed(&wide), -10);

    // the two paths must give different, individually-correct results
    assert_ne!(reinterpret::as_unsigned(&p), reinterpret::as_unsigned(&wide));
}

#[test]
fn test_sign_extension_positive_is_identity_on_value() {
    let p = BitPattern::from_i8(27);
    let wide = reinterpret::sign_extend(&p, Width::W64).unwrap();
    assert_eq!(wide.bits(), 27);
    assert_eq!(reinterpret::as_signed(&wide), 27);
}

#[test]
fn test_zero_extension_never_fills() {
    let p = BitPattern::from_u8(0xF6);
    let wide = reinterpret::zero_extend(&p, Width::W32).unwrap();
    assert_eq!(wide.bits(), 0xF6);
    assert_eq!(reinterpret::as_unsigned(&wide), 246);
}

#[test]
fn test_extension_rejects_narrowing() {
    let p = BitPattern::from_u32(0xDEADBEEF);
    assert_eq!(
        reinterpret::sign_extend(&p, Width::W8),
        Err(InspectError::NarrowingExtension {
            from: Width::W32,
            to: Width::W8,
        })
    );
    assert!(reinterpret::zero_extend(&p, Width::W16).is_err());
}

#[test]
fn test_same_width_extension_is_noop() {
    let p = BitPattern::from_i16(-1);
    assert_eq!(reinterpret::sign_extend(&p, Width::W16).unwrap(), p);
}

#[test]
fn test_width_from_bits() {
    assert_eq!(Width::from_bits(8).unwrap(), Width::W8);
    assert_eq!(Width::from_bits(64).unwrap(), Width::W64);
    assert_eq!(
        Width::from_bits(12),
        Err(InspectError::UnsupportedWidth { bits: 12 })
    );
    assert_eq!(
        Width::from_bits(0),
        Err(InspectError::UnsupportedWidth { bits: 0 })
    );
}

#[test]
fn test_pattern_masks_at_construction() {
    // excess bits never survive construction
    let p = BitPattern::new(0x1FF, Width::W8);
    assert_eq!(p.bits(), 0xFF);
    assert_eq!(p.hex_string(), "0xFF");
    assert_eq!(p.binary_string(), "11111111");
}

#[test]
fn test_pattern_rendering() {
    let p = BitPattern::from_u8(0b0101_1000);
    assert_eq!(p.binary_string(), "01011000");
    assert_eq!(p.grouped_binary_string(), "0101 1000");
    assert_eq!(p.hex_string(), "0x58");
    assert_eq!(p.top_bit(), 0);
    assert_eq!(p.low_bit(), 0);

    let p = BitPattern::from_u32(0x1A2B3C4D);
    assert_eq!(p.hex_string(), "0x1A2B3C4D");
    assert_eq!(p.low_bit(), 1);
}

#[test]
fn test_signed_read_at_full_width() {
    let p = BitPattern::from_i64(-1);
    assert_eq!(p.bits(), u64::MAX);
    assert_eq!(reinterpret::as_signed(&p), -1);
    assert_eq!(reinterpret::as_unsigned(&p), u64::MAX);
}
