//! National rail station codes.

use std::fmt;

/// Error returned when parsing an invalid CRS code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid CRS code: {reason}")]
pub struct InvalidCrs {
    reason: &'static str,
}

/// A 3-letter CRS station code, e.g. `GTW` for Gatwick Airport.
///
/// The national rail departure board is keyed by these codes. A `Crs` is
/// always exactly 3 uppercase ASCII letters; anything else fails to parse,
/// so holders of a value never need to re-validate it.
///
/// # Examples
///
/// ```
/// use transit_board::domain::Crs;
///
/// let clj = Crs::parse("CLJ").unwrap();
/// assert_eq!(clj.as_str(), "CLJ");
///
/// assert!(Crs::parse("clj").is_err());
/// assert!(Crs::parse("CLJX").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Crs([u8; 3]);

impl Crs {
    /// Parse a CRS code. The input must be exactly 3 uppercase ASCII letters.
    pub fn parse(s: &str) -> Result<Self, InvalidCrs> {
        let &[a, b, c] = s.as_bytes() else {
            return Err(InvalidCrs {
                reason: "must be exactly 3 characters",
            });
        };

        if !(a.is_ascii_uppercase() && b.is_ascii_uppercase() && c.is_ascii_uppercase()) {
            return Err(InvalidCrs {
                reason: "must be uppercase ASCII letters A-Z",
            });
        }

        Ok(Crs([a, b, c]))
    }

    /// The code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only uppercase ASCII is ever stored
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Crs({})", self.as_str())
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
