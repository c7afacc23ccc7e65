//! Luhn (mod 10) check digits.
//!
//! Starting from the rightmost payload digit and moving left, every second
//! digit is doubled (the rightmost one included) and reduced by 9 when the
//! result exceeds 9. The check digit is whatever brings the total to a
//! multiple of 10, so a complete number always sums to `0 mod 10`.
//!
//! Every single-digit substitution is detected, as is every adjacent
//! transposition except `09` <-> `90`.

use crate::IdError;

/// Computes the Luhn check digit for a payload of ASCII digits.
///
/// # Errors
///
/// Returns [`IdError::Empty`] for an empty payload and [`IdError::NonDigit`]
/// for the first character that is not an ASCII digit.
pub fn compute_check_digit(payload: &str) -> Result<u8, IdError> {
    if payload.is_empty() {
        return Err(IdError::Empty { field: "payload" });
    }
    let digits = to_digits(payload)?;
    Ok(check_digit_of(&digits))
}

/// Returns true if `number` is a payload followed by its correct check digit.
pub fn verify(number: &str) -> bool {
    if number.len() < 2 {
        return false;
    }
    match to_digits(number) {
        Ok(digits) => {
            let (payload, check) = digits.split_at(digits.len() - 1);
            check_digit_of(payload) == check[0]
        }
        Err(_) => false,
    }
}

/// Check digit over already-decoded digits (each in `0..=9`).
pub(crate) fn check_digit_of(digits: &[u8]) -> u8 {
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            let d = u32::from(d);
            if i % 2 == 0 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();

    ((10 - sum % 10) % 10) as u8
}

/// Decodes ASCII digits, reporting the first offending character.
pub(crate) fn to_digits(s: &str) -> Result<Vec<u8>, IdError> {
    s.chars()
        .enumerate()
        .map(|(position, c)| match c.to_digit(10) {
            Some(d) => Ok(d as u8),
            None => Err(IdError::NonDigit { position, found: c }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_digit_known_payloads() {
        assert_eq!(compute_check_digit("2026010001").unwrap(), 9);
        assert_eq!(compute_check_digit("2026010042").unwrap(), 3);
        assert_eq!(compute_check_digit("2026020104").unwrap(), 9);
        assert_eq!(compute_check_digit("2026030999").unwrap(), 0);
        assert_eq!(compute_check_digit("2026990001").unwrap(), 3);
    }

    #[test]
    fn test_check_digit_classic_vector() {
        // Textbook example: 7992739871 -> 3
        assert_eq!(compute_check_digit("7992739871").unwrap(), 3);
        assert!(verify("79927398713"));
    }

    #[test]
    fn test_check_digit_all_zeros() {
        assert_eq!(compute_check_digit("0000000000").unwrap(), 0);
    }

    #[test]
    fn test_check_digit_empty() {
        let err = compute_check_digit("").unwrap_err();
        assert_eq!(err, IdError::Empty { field: "payload" });
        assert_eq!(err.to_string(), "payload cannot be empty");
    }

    #[test]
    fn test_check_digit_non_digit() {
        assert_eq!(
            compute_check_digit("20x6"),
            Err(IdError::NonDigit {
                position: 2,
                found: 'x'
            })
        );
    }

    #[test]
    fn test_check_digit_rejects_unicode_digits() {
        // Arabic-Indic digit one is numeric but not ASCII
        assert!(matches!(
            compute_check_digit("12\u{0661}"),
            Err(IdError::NonDigit { position: 2, .. })
        ));
    }

    #[test]
    fn test_verify() {
        assert!(verify("20260100019"));
        assert!(!verify("20260100018"));
        assert!(!verify("20260100017"));
        assert!(!verify("9"));
        assert!(!verify("2026010001a"));
    }
}
