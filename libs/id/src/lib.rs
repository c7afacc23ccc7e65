//! # akademie-id
//!
//! Student number encoding, parsing, and validation for Excellence Akademie.
//!
//! ## Design Principles
//!
//! - Student numbers are issued once and never change
//! - Every number has one canonical string form with strict parsing
//! - Parsing untrusted input never panics; failures are values
//! - Sequence allocation belongs to the caller; this crate only encodes
//!
//! ## Number Format
//!
//! Student numbers are 11 ASCII digits: `{YYYY}{PP}{SSSS}{C}`
//!
//! - `YYYY`: registration year
//! - `PP`: program code (`01` academy, `02` math, `03` science, `99` tutors)
//! - `SSSS`: per-(year, program) sequence number
//! - `C`: Luhn check digit over the preceding ten digits
//!
//! Examples:
//! - `20260100019` (2026, academy, first student)
//! - `20260201049` (2026, math, student 104)
//!
//! The check digit catches every single-digit typo and almost every swap of
//! adjacent digits when a number is re-typed by hand.
//!
//! ```
//! use akademie_id::{encode, parse, validate, derive_login_email};
//!
//! let number = encode(2026, 1, 42).unwrap();
//! assert_eq!(number, "20260100423");
//! assert!(validate(&number));
//! assert_eq!(parse(&number).unwrap().sequence_number().value(), 42);
//! assert_eq!(
//!     derive_login_email(&number, "excellenceakademie.co.za"),
//!     "20260100423@excellenceakademie.co.za"
//! );
//! ```

mod email;
mod error;
mod luhn;
mod macros;
mod program;
mod student_number;
mod types;

pub use email::{derive_login_email, student_number_from_email, EmailDomain, DEFAULT_EMAIL_DOMAIN};
pub use error::IdError;
pub use luhn::{compute_check_digit, verify as verify_check_digit};
pub use student_number::{encode, parse, validate, StudentNumber, StudentNumberParts};
pub use types::*;
