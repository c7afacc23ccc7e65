//! Student numbers: issuance, parsing, and validation.
//!
//! Canonical form is 11 ASCII digits, `YYYYPPSSSSC`:
//!
//! | Digits | Field | Example |
//! |--------|-------|---------|
//! | 1-4 | registration year | `2026` |
//! | 5-6 | program code | `01` |
//! | 7-10 | sequence number | `0042` |
//! | 11 | Luhn check digit | `3` |

use serde::{Deserialize, Serialize};

use crate::luhn;
use crate::{CheckDigit, EmailDomain, IdError, ProgramCode, SequenceNumber, Year};

/// A validated student number.
///
/// Values are immutable once built. The only ways to obtain one are issuing a
/// new number from its parts or parsing a string whose check digit matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StudentNumber {
    year: Year,
    program_code: ProgramCode,
    sequence_number: SequenceNumber,
    check_digit: CheckDigit,
}

/// Decoded components of a student number as plain integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentNumberParts {
    pub year: u16,
    pub program_code: u8,
    pub sequence_number: u16,
    pub check_digit: u8,
}

impl StudentNumber {
    /// Number of digits in the canonical form.
    pub const LENGTH: usize = Year::WIDTH + ProgramCode::WIDTH + SequenceNumber::WIDTH + 1;

    /// Number of digits covered by the check digit.
    pub const PAYLOAD_LENGTH: usize = Self::LENGTH - 1;

    /// Issues a student number from already-typed fields.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::OutOfRange`] if the year is before 1000 or the
    /// sequence number is 0.
    pub fn new(
        year: Year,
        program_code: ProgramCode,
        sequence_number: SequenceNumber,
    ) -> Result<Self, IdError> {
        if !year.is_issuable() {
            return Err(IdError::out_of_range(
                Year::FIELD,
                year.into(),
                u32::from(Year::ISSUE_MIN),
                u32::from(Year::MAX),
            ));
        }
        if !sequence_number.is_issuable() {
            return Err(IdError::out_of_range(
                SequenceNumber::FIELD,
                sequence_number.into(),
                u32::from(SequenceNumber::FIRST.value()),
                u32::from(SequenceNumber::MAX),
            ));
        }

        Ok(Self::assemble(year, program_code, sequence_number))
    }

    /// Issues a student number from raw integers.
    ///
    /// Accepts years in `1000..=9999`, program codes in `0..=99`, and sequence
    /// numbers in `1..=9999`. Out-of-range values are rejected rather than
    /// truncated.
    pub fn issue(year: u32, program_code: u32, sequence_number: u32) -> Result<Self, IdError> {
        check_range(Year::FIELD, year, Year::ISSUE_MIN.into(), Year::MAX.into())?;
        check_range(ProgramCode::FIELD, program_code, 0, ProgramCode::MAX.into())?;
        check_range(
            SequenceNumber::FIELD,
            sequence_number,
            SequenceNumber::FIRST.value().into(),
            SequenceNumber::MAX.into(),
        )?;

        Self::new(
            Year::new(year)?,
            ProgramCode::new(program_code)?,
            SequenceNumber::new(sequence_number)?,
        )
    }

    /// Parses and validates a student number.
    ///
    /// The input must be exactly 11 ASCII digits whose last digit is the Luhn
    /// check digit of the first ten. No trimming is performed.
    pub fn parse(s: &str) -> Result<Self, IdError> {
        if s.is_empty() {
            return Err(IdError::Empty {
                field: "student number",
            });
        }

        let length = s.chars().count();
        if length != Self::LENGTH {
            return Err(IdError::InvalidLength {
                expected: Self::LENGTH,
                actual: length,
            });
        }

        let digits = luhn::to_digits(s)?;
        let (payload, check) = digits.split_at(Self::PAYLOAD_LENGTH);
        let expected = luhn::check_digit_of(payload);
        if expected != check[0] {
            return Err(IdError::ChecksumMismatch {
                expected,
                actual: check[0],
            });
        }

        let (year, rest) = payload.split_at(Year::WIDTH);
        let (program_code, sequence_number) = rest.split_at(ProgramCode::WIDTH);

        Ok(Self {
            year: Year(fold_digits(year) as u16),
            program_code: ProgramCode(fold_digits(program_code) as u8),
            sequence_number: SequenceNumber(fold_digits(sequence_number) as u16),
            check_digit: CheckDigit(expected),
        })
    }

    /// Returns the registration year.
    #[must_use]
    pub const fn year(&self) -> Year {
        self.year
    }

    /// Returns the program code.
    #[must_use]
    pub const fn program_code(&self) -> ProgramCode {
        self.program_code
    }

    /// Returns the sequence number.
    #[must_use]
    pub const fn sequence_number(&self) -> SequenceNumber {
        self.sequence_number
    }

    /// Returns the check digit.
    #[must_use]
    pub const fn check_digit(&self) -> CheckDigit {
        self.check_digit
    }

    /// Returns the ten digits the check digit is computed over.
    #[must_use]
    pub fn payload(&self) -> String {
        format!("{}{}{}", self.year, self.program_code, self.sequence_number)
    }

    /// Returns the components as plain integers.
    #[must_use]
    pub const fn parts(&self) -> StudentNumberParts {
        StudentNumberParts {
            year: self.year.value(),
            program_code: self.program_code.value(),
            sequence_number: self.sequence_number.value(),
            check_digit: self.check_digit.value(),
        }
    }

    /// Returns the login email address for this student number.
    #[must_use]
    pub fn login_email(&self, domain: &EmailDomain) -> String {
        format!("{}@{}", self, domain)
    }

    fn assemble(year: Year, program_code: ProgramCode, sequence_number: SequenceNumber) -> Self {
        let mut payload = Vec::with_capacity(Self::PAYLOAD_LENGTH);
        push_digits(&mut payload, year.into(), Year::WIDTH);
        push_digits(&mut payload, program_code.into(), ProgramCode::WIDTH);
        push_digits(&mut payload, sequence_number.into(), SequenceNumber::WIDTH);

        Self {
            year,
            program_code,
            sequence_number,
            check_digit: CheckDigit(luhn::check_digit_of(&payload)),
        }
    }
}

fn check_range(field: &'static str, value: u32, min: u32, max: u32) -> Result<(), IdError> {
    if value < min || value > max {
        return Err(IdError::out_of_range(field, value, min, max));
    }
    Ok(())
}

fn fold_digits(digits: &[u8]) -> u32 {
    digits.iter().fold(0u32, |acc, &d| acc * 10 + u32::from(d))
}

/// Appends the `width` low-order decimal digits of `value`, most significant first.
fn push_digits(out: &mut Vec<u8>, value: u32, width: usize) {
    let start = out.len();
    let mut rest = value;
    for _ in 0..width {
        out.push((rest % 10) as u8);
        rest /= 10;
    }
    out[start..].reverse();
}

impl std::fmt::Display for StudentNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.year, self.program_code, self.sequence_number, self.check_digit
        )
    }
}

impl std::str::FromStr for StudentNumber {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for StudentNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for StudentNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl From<StudentNumber> for StudentNumberParts {
    fn from(number: StudentNumber) -> Self {
        number.parts()
    }
}

// =============================================================================
// String-level codec
// =============================================================================

/// Encodes a (year, program code, sequence number) triple as an 11-digit
/// student number.
///
/// # Errors
///
/// Returns [`IdError::OutOfRange`] for a year outside `1000..=9999`, a program
/// code above 99, or a sequence number outside `1..=9999`.
pub fn encode(year: u32, program_code: u32, sequence_number: u32) -> Result<String, IdError> {
    StudentNumber::issue(year, program_code, sequence_number).map(|n| n.to_string())
}

/// Returns true if `candidate` is exactly 11 ASCII digits with a matching
/// check digit.
pub fn validate(candidate: &str) -> bool {
    StudentNumber::parse(candidate).is_ok()
}

/// Parses `candidate`, returning `None` for anything [`validate`] rejects.
pub fn parse(candidate: &str) -> Option<StudentNumber> {
    StudentNumber::parse(candidate).ok()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_first_student() {
        assert_eq!(encode(2026, 1, 1).unwrap(), "20260100019");
    }

    #[test]
    fn test_encode_known_vectors() {
        assert_eq!(encode(2026, 1, 42).unwrap(), "20260100423");
        assert_eq!(encode(2026, 2, 104).unwrap(), "20260201049");
        assert_eq!(encode(2026, 3, 999).unwrap(), "20260309990");
        assert_eq!(encode(2026, 99, 1).unwrap(), "20269900013");
    }

    #[test]
    fn test_encode_program_zero() {
        let encoded = encode(2026, 0, 7).unwrap();
        assert!(encoded.starts_with("2026000007"));
        assert!(validate(&encoded));
    }

    #[test]
    fn test_encode_rejects_sequence_overflow() {
        assert_eq!(
            encode(2026, 1, 10_000).unwrap_err(),
            IdError::OutOfRange {
                field: "sequence number",
                value: 10_000,
                min: 1,
                max: 9999,
            }
        );
    }

    #[test]
    fn test_encode_rejects_sequence_zero() {
        assert!(matches!(
            encode(2026, 1, 0).unwrap_err(),
            IdError::OutOfRange {
                field: "sequence number",
                value: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_encode_rejects_program_overflow() {
        assert!(matches!(
            encode(2026, 100, 1).unwrap_err(),
            IdError::OutOfRange {
                field: "program code",
                value: 100,
                ..
            }
        ));
    }

    #[test]
    fn test_encode_rejects_short_and_long_years() {
        assert!(matches!(
            encode(999, 1, 1).unwrap_err(),
            IdError::OutOfRange {
                field: "year",
                min: 1000,
                ..
            }
        ));
        assert!(matches!(
            encode(10_000, 1, 1).unwrap_err(),
            IdError::OutOfRange { field: "year", .. }
        ));
    }

    #[test]
    fn test_new_rejects_unissuable_fields() {
        let year = Year::new(26).unwrap();
        let result = StudentNumber::new(year, ProgramCode::default(), SequenceNumber::FIRST);
        assert!(matches!(
            result.unwrap_err(),
            IdError::OutOfRange {
                field: "year",
                value: 26,
                ..
            }
        ));

        let seq = SequenceNumber::new(0).unwrap();
        let result = StudentNumber::new(Year::new(2026).unwrap(), ProgramCode::default(), seq);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_first_student() {
        let number = StudentNumber::parse("20260100019").unwrap();
        assert_eq!(
            number.parts(),
            StudentNumberParts {
                year: 2026,
                program_code: 1,
                sequence_number: 1,
                check_digit: 9,
            }
        );
        assert_eq!(number.payload(), "2026010001");
        assert_eq!(number.to_string(), "20260100019");
    }

    #[test]
    fn test_parse_wrong_check_digit() {
        assert_eq!(
            StudentNumber::parse("20260100018").unwrap_err(),
            IdError::ChecksumMismatch {
                expected: 9,
                actual: 8
            }
        );
        assert!(!validate("20260100018"));
        assert!(!validate("20260100017"));
        assert!(!validate("20260100420"));
        assert!(parse("20260100018").is_none());
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        assert!(!validate("1234"));
        assert!(!validate("12345"));
        assert!(!validate("abcdefghijk"));
        assert!(!validate("abc12345678"));
        assert!(!validate("202601000190"));
        assert!(!validate(""));
        assert!(!validate(" 20260100019"));
        assert!(!validate("20260100019\n"));
    }

    #[test]
    fn test_parse_error_kinds() {
        assert_eq!(
            StudentNumber::parse("").unwrap_err().to_string(),
            "student number cannot be empty"
        );
        assert_eq!(
            StudentNumber::parse("1234").unwrap_err(),
            IdError::InvalidLength {
                expected: 11,
                actual: 4
            }
        );
        assert_eq!(
            StudentNumber::parse("2026-100019").unwrap_err(),
            IdError::NonDigit {
                position: 4,
                found: '-'
            }
        );
    }

    #[test]
    fn test_parse_counts_characters_not_bytes() {
        // Ten ASCII digits plus one two-byte character
        let result = StudentNumber::parse("2026010001\u{00e9}");
        assert!(matches!(
            result.unwrap_err(),
            IdError::NonDigit { position: 10, .. }
        ));
    }

    #[test]
    fn test_parse_accepts_unissuable_but_well_formed() {
        // Shape and checksum are all that parsing checks
        let number = parse("00000000000").unwrap();
        assert_eq!(number.year().value(), 0);
        assert_eq!(number.sequence_number().value(), 0);
    }

    #[test]
    fn test_ordering_follows_canonical_string() {
        let a = StudentNumber::issue(2025, 99, 9999).unwrap();
        let b = StudentNumber::issue(2026, 1, 1).unwrap();
        let c = StudentNumber::issue(2026, 1, 2).unwrap();
        assert!(a < b);
        assert!(b < c);
        assert!(a.to_string() < b.to_string());
    }

    #[test]
    fn test_login_email() {
        let number = StudentNumber::issue(2026, 1, 1).unwrap();
        let domain = EmailDomain::default();
        assert_eq!(
            number.login_email(&domain),
            "20260100019@excellenceakademie.co.za"
        );
    }

    #[test]
    fn test_json_roundtrip() {
        let number = StudentNumber::issue(2026, 2, 104).unwrap();
        let json = serde_json::to_string(&number).unwrap();
        assert_eq!(json, "\"20260201049\"");
        let parsed: StudentNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(number, parsed);
    }

    #[test]
    fn test_json_rejects_bad_checksum() {
        let result: Result<StudentNumber, _> = serde_json::from_str("\"20260201048\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_parts_json() {
        let parts = parse("20260100423").unwrap().parts();
        let value = serde_json::to_value(parts).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "year": 2026,
                "program_code": 1,
                "sequence_number": 42,
                "check_digit": 3
            })
        );
    }
}
