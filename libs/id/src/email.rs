//! Login email addresses derived from student numbers.

use serde::{Deserialize, Serialize};

use crate::{IdError, StudentNumber};

/// Domain used for student login addresses unless configured otherwise.
pub const DEFAULT_EMAIL_DOMAIN: &str = "excellenceakademie.co.za";

/// Maximum length of a DNS name in its textual form.
const MAX_DOMAIN_LENGTH: usize = 253;

/// Maximum length of a single DNS label.
const MAX_LABEL_LENGTH: usize = 63;

/// Returns `candidate@domain`, lowercased.
///
/// The candidate is not validated; callers that need a guaranteed-valid
/// address should go through [`StudentNumber::login_email`].
pub fn derive_login_email(candidate: &str, domain: &str) -> String {
    format!("{candidate}@{domain}").to_lowercase()
}

/// A validated, lowercased email domain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailDomain(String);

impl EmailDomain {
    /// Parses and normalizes an email domain.
    ///
    /// Accepts dot-separated labels of ASCII letters, digits, and `-`, with at
    /// least two labels. Labels may not start or end with `-`.
    pub fn parse(s: &str) -> Result<Self, IdError> {
        let domain = s.trim().to_ascii_lowercase();
        let invalid = |reason| IdError::InvalidDomain {
            domain: s.to_string(),
            reason,
        };

        if domain.is_empty() {
            return Err(invalid("domain is empty"));
        }
        if domain.len() > MAX_DOMAIN_LENGTH {
            return Err(invalid("domain is longer than 253 characters"));
        }
        if !domain.contains('.') {
            return Err(invalid("domain needs at least two labels"));
        }

        for label in domain.split('.') {
            if label.is_empty() {
                return Err(invalid("empty label"));
            }
            if label.len() > MAX_LABEL_LENGTH {
                return Err(invalid("label is longer than 63 characters"));
            }
            if !label
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-')
            {
                return Err(invalid("labels may only contain letters, digits, and '-'"));
            }
            if label.starts_with('-') || label.ends_with('-') {
                return Err(invalid("labels may not start or end with '-'"));
            }
        }

        Ok(Self(domain))
    }

    /// Returns the domain as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EmailDomain {
    fn default() -> Self {
        Self(DEFAULT_EMAIL_DOMAIN.to_string())
    }
}

impl std::fmt::Display for EmailDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for EmailDomain {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for EmailDomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for EmailDomain {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for EmailDomain {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Recovers the student number from a login email address.
///
/// The domain must match `domain` (case-insensitively) and the local part must
/// be a valid student number.
pub fn student_number_from_email(
    email: &str,
    domain: &EmailDomain,
) -> Result<StudentNumber, IdError> {
    let invalid = |reason| IdError::InvalidEmail {
        email: email.to_string(),
        reason,
    };

    let Some((local, host)) = email.trim().rsplit_once('@') else {
        return Err(invalid("missing '@'"));
    };

    if !host.eq_ignore_ascii_case(domain.as_str()) {
        return Err(invalid("domain does not match"));
    }

    StudentNumber::parse(local)
}
