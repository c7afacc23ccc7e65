//! Enrollment program catalog.
//!
//! Any two-digit code is a valid [`ProgramCode`]; the catalog only names the
//! ones currently in use.

use crate::{IdError, ProgramCode};

impl ProgramCode {
    /// General academy enrollment (default).
    pub const EXCELLENCE_AKADEMIE: Self = Self(1);

    /// Mathematics program.
    pub const MATH_PROGRAM: Self = Self(2);

    /// Science program.
    pub const SCIENCE_PROGRAM: Self = Self(3);

    /// Tutors.
    pub const TUTORS: Self = Self(99);

    /// Returns every named program code, ordered by code.
    #[must_use]
    pub fn known() -> &'static [ProgramCode] {
        const KNOWN: &[ProgramCode] = &[
            ProgramCode::EXCELLENCE_AKADEMIE,
            ProgramCode::MATH_PROGRAM,
            ProgramCode::SCIENCE_PROGRAM,
            ProgramCode::TUTORS,
        ];
        KNOWN
    }

    /// Returns the catalog slug for this code, if it is a named program.
    #[must_use]
    pub const fn name(&self) -> Option<&'static str> {
        match self.0 {
            1 => Some("excellence-akademie"),
            2 => Some("math"),
            3 => Some("science"),
            99 => Some("tutors"),
            _ => None,
        }
    }

    /// Resolves a catalog slug or a numeric code (`"2"`, `"02"`).
    ///
    /// Slugs match case-insensitively and accept `_` in place of `-`.
    pub fn lookup(input: &str) -> Result<Self, IdError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(IdError::Empty { field: "program" });
        }

        if trimmed.bytes().all(|b| b.is_ascii_digit()) {
            let value: u32 = trimmed
                .parse()
                .map_err(|_| IdError::UnknownProgram(input.to_string()))?;
            return Self::new(value);
        }

        let slug = trimmed.to_ascii_lowercase().replace('_', "-");
        Self::known()
            .iter()
            .copied()
            .find(|code| code.name() == Some(slug.as_str()))
            .ok_or_else(|| IdError::UnknownProgram(input.to_string()))
    }
}

impl Default for ProgramCode {
    fn default() -> Self {
        Self::EXCELLENCE_AKADEMIE
    }
}
