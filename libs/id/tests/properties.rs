use akademie_id::{
    compute_check_digit, encode, parse, validate, verify_check_digit, IdError, StudentNumber,
};
use proptest::prelude::*;

fn issuable() -> impl Strategy<Value = (u32, u32, u32)> {
    (1000u32..=9999, 0u32..=99, 1u32..=9999)
}

fn replace_char(s: &str, index: usize, c: char) -> String {
    s.chars()
        .enumerate()
        .map(|(i, orig)| if i == index { c } else { orig })
        .collect()
}

proptest! {
    #[test]
    fn encode_then_parse_returns_inputs((year, program, seq) in issuable()) {
        let encoded = encode(year, program, seq).unwrap();
        prop_assert_eq!(encoded.len(), 11);
        prop_assert!(validate(&encoded));

        let parts = parse(&encoded).unwrap().parts();
        prop_assert_eq!(u32::from(parts.year), year);
        prop_assert_eq!(u32::from(parts.program_code), program);
        prop_assert_eq!(u32::from(parts.sequence_number), seq);

        let last = encoded.chars().last().unwrap().to_digit(10).unwrap();
        prop_assert_eq!(u32::from(parts.check_digit), last);
    }

    #[test]
    fn encoded_prefix_is_zero_padded_fields((year, program, seq) in issuable()) {
        let encoded = encode(year, program, seq).unwrap();
        let expected = format!("{year:04}{program:02}{seq:04}");
        prop_assert_eq!(&encoded[..10], expected.as_str());

        let check = compute_check_digit(&expected).unwrap().to_string();
        prop_assert_eq!(&encoded[10..], check.as_str());
    }

    #[test]
    fn every_single_digit_substitution_is_rejected((year, program, seq) in issuable()) {
        let encoded = encode(year, program, seq).unwrap();
        for (index, original) in encoded.chars().enumerate() {
            for replacement in '0'..='9' {
                if replacement == original {
                    continue;
                }
                let mutated = replace_char(&encoded, index, replacement);
                prop_assert!(
                    !validate(&mutated),
                    "substituting {} at {} in {} went undetected",
                    replacement,
                    index,
                    encoded
                );
            }
        }
    }

    #[test]
    fn adjacent_transpositions_are_rejected((year, program, seq) in issuable()) {
        let encoded = encode(year, program, seq).unwrap();
        let bytes = encoded.as_bytes();
        for i in 0..bytes.len() - 1 {
            let (a, b) = (bytes[i], bytes[i + 1]);
            // Luhn cannot see 09 <-> 90
            if a == b || (a, b) == (b'0', b'9') || (a, b) == (b'9', b'0') {
                continue;
            }
            let mut swapped = bytes.to_vec();
            swapped.swap(i, i + 1);
            let swapped = String::from_utf8(swapped).unwrap();
            prop_assert!(!validate(&swapped), "swap at {} in {} went undetected", i, encoded);
        }
    }

    #[test]
    fn wrong_lengths_are_rejected(digits in "[0-9]{0,30}") {
        prop_assume!(digits.len() != 11);
        prop_assert!(!validate(&digits));
        prop_assert!(parse(&digits).is_none());
    }

    #[test]
    fn validate_agrees_with_luhn_for_eleven_digits(digits in "[0-9]{11}") {
        prop_assert_eq!(validate(&digits), verify_check_digit(&digits));
    }

    #[test]
    fn arbitrary_input_never_panics(input in "\\PC{0,20}") {
        let _ = validate(&input);
        let _ = StudentNumber::parse(&input);
    }

    #[test]
    fn out_of_range_sequences_are_rejected(seq in 10_000u32..) {
        let err = encode(2026, 1, seq).unwrap_err();
        let is_out_of_range = matches!(err, IdError::OutOfRange { .. });
        prop_assert!(is_out_of_range);
    }
}

#[test]
fn worked_examples() {
    assert_eq!(compute_check_digit("2026010001").unwrap(), 9);
    assert_eq!(encode(2026, 1, 1).unwrap(), "20260100019");
    assert!(validate("20260100019"));

    let parts = parse("20260100019").unwrap().parts();
    assert_eq!(
        (parts.year, parts.program_code, parts.sequence_number, parts.check_digit),
        (2026, 1, 1, 9)
    );

    assert_eq!(encode(2026, 1, 42).unwrap(), "20260100423");
    assert!(validate("20260100423"));
}

#[test]
fn format_rejection() {
    assert!(!validate("1234"));
    assert!(!validate("abcdefghijk"));
    assert!(!validate("202601000170"));
}

#[test]
fn wrong_check_digit_is_rejected() {
    assert!(!validate("20260100018"));
}
