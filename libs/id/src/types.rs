//! Fixed-width fields of a student number.
//!
//! Each field knows its digit width and renders zero-padded. Width checks
//! apply everywhere; the stricter issuance ranges (four-digit years,
//! non-zero sequence numbers) are only enforced when a new number is issued.

use crate::macros::define_field;
use crate::IdError;

// =============================================================================
// Year
// =============================================================================

define_field!(Year, u16, "year", 4, 9999);

impl Year {
    /// Earliest year a new student number may be issued for.
    pub const ISSUE_MIN: u16 = 1000;

    /// Returns true if this year may appear on a newly issued number.
    #[must_use]
    pub const fn is_issuable(&self) -> bool {
        self.0 >= Self::ISSUE_MIN
    }
}

// =============================================================================
// Program Code
// =============================================================================

define_field!(ProgramCode, u8, "program code", 2, 99);

// =============================================================================
// Sequence Number
// =============================================================================

define_field!(SequenceNumber, u16, "sequence number", 4, 9999);

impl SequenceNumber {
    /// The first sequence number issued for a (year, program) pair.
    pub const FIRST: Self = Self(1);

    /// Returns the next sequence number, or `None` once the field is full.
    #[must_use]
    pub const fn next(&self) -> Option<Self> {
        if self.0 >= Self::MAX {
            None
        } else {
            Some(Self(self.0 + 1))
        }
    }

    /// Returns true if this sequence number may appear on a newly issued number.
    #[must_use]
    pub const fn is_issuable(&self) -> bool {
        self.0 >= Self::FIRST.0
    }
}

impl Default for SequenceNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

/// Returns the sequence number that follows the highest one already issued.
///
/// `max_issued` is the largest sequence number the caller has persisted for a
/// (year, program) pair, or 0 when none has been issued yet. Uniqueness under
/// concurrent issuance is the caller's responsibility.
///
/// # Errors
///
/// Returns [`IdError::SequenceExhausted`] when `max_issued` is already 9999 or
/// beyond.
pub fn next_sequence_number(max_issued: u32) -> Result<SequenceNumber, IdError> {
    if max_issued >= u32::from(SequenceNumber::MAX) {
        return Err(IdError::SequenceExhausted { max_issued });
    }
    SequenceNumber::new(max_issued + 1)
}

// =============================================================================
// Check Digit
// =============================================================================

define_field!(CheckDigit, u8, "check digit", 1, 9);

// =============================================================================
// Tests
// =============================================================================
