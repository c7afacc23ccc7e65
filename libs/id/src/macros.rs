//! Macros for defining fixed-width numeric identifier fields.

/// Macro to define a fixed-width decimal field of a student number.
///
/// This generates a newtype wrapper around an unsigned integer with:
/// - `FIELD`, `WIDTH`, and `MAX` constants (`MAX` is `10^WIDTH - 1`)
/// - `new()` rejecting values that do not fit in `WIDTH` digits
/// - `parse()` accepting exactly `WIDTH` ASCII digits
/// - zero-padded `Display` and `FromStr` implementations
/// - `Serialize` and `Deserialize` as a plain integer
/// - `Ord`, `Hash`, and other standard traits
///
/// # Example
///
/// ```ignore
/// define_field!(Year, u16, "year", 4, 9999);
///
/// let year = Year::new(2026)?;
/// assert_eq!(year.to_string(), "2026");
/// let parsed: Year = "0042".parse()?;
/// assert_eq!(parsed.value(), 42);
/// ```
macro_rules! define_field {
    ($name:ident, $repr:ty, $field:literal, $width:literal, $max:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub(crate) $repr);

        impl $name {
            /// Human-readable field name used in errors.
            pub const FIELD: &'static str = $field;

            /// Number of digits in the canonical string.
            pub const WIDTH: usize = $width;

            /// Largest value representable in `WIDTH` digits.
            pub const MAX: $repr = $max;

            /// Creates the field, rejecting values wider than `WIDTH` digits.
            pub fn new(value: u32) -> Result<Self, $crate::IdError> {
                if value > u32::from(Self::MAX) {
                    return Err($crate::IdError::out_of_range(
                        Self::FIELD,
                        value,
                        0,
                        u32::from(Self::MAX),
                    ));
                }
                Ok(Self(value as $repr))
            }

            /// Returns the underlying value.
            #[must_use]
            pub const fn value(&self) -> $repr {
                self.0
            }

            /// Parses exactly `WIDTH` ASCII digits.
            pub fn parse(s: &str) -> Result<Self, $crate::IdError> {
                if s.is_empty() {
                    return Err($crate::IdError::Empty { field: Self::FIELD });
                }

                let digits = $crate::luhn::to_digits(s)?;
                if digits.len() != Self::WIDTH {
                    return Err($crate::IdError::InvalidLength {
                        expected: Self::WIDTH,
                        actual: digits.len(),
                    });
                }

                let value = digits
                    .iter()
                    .fold(0u32, |acc, &d| acc * 10 + u32::from(d));
                Ok(Self(value as $repr))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{:0width$}", self.0, width = Self::WIDTH)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl From<$name> for u32 {
            fn from(field: $name) -> Self {
                u32::from(field.0)
            }
        }

        impl TryFrom<u32> for $name {
            type Error = $crate::IdError;

            fn try_from(value: u32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_u32(u32::from(self.0))
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let value = u32::deserialize(deserializer)?;
                Self::new(value).map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use define_field;
