//! Airline carrier code type.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when parsing an invalid airline code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airline code: {reason}")]
pub struct InvalidAirlineCode {
    reason: &'static str,
}

/// A valid airline designator.
///
/// IATA carrier codes are 2 characters and may contain a digit (e.g. "LH",
/// "6H", "W6"); ICAO designators are 3 characters ("DLH"). Both forms are
/// accepted as long as every character is an uppercase ASCII letter or digit.
///
/// # Examples
///
/// ```
/// use flight_names::domain::AirlineCode;
///
/// let lh = AirlineCode::parse("LH").unwrap();
/// assert_eq!(lh.as_str(), "LH");
///
/// assert!(AirlineCode::parse("6H").is_ok());
/// assert!(AirlineCode::parse("DLH").is_ok());
///
/// // Lowercase is rejected
/// assert!(AirlineCode::parse("lh").is_err());
///
/// // Wrong length is rejected
/// assert!(AirlineCode::parse("L").is_err());
/// assert!(AirlineCode::parse("LUFT").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AirlineCode {
    bytes: [u8; 3],
    len: u8,
}

impl AirlineCode {
    /// Parse an airline code from a string.
    ///
    /// The input must be 2 or 3 characters, each `A-Z` or `0-9`.
    pub fn parse(s: &str) -> Result<Self, InvalidAirlineCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 2 && bytes.len() != 3 {
            return Err(InvalidAirlineCode {
                reason: "must be 2 or 3 characters",
            });
        }

        for &b in bytes {
            if !(b.is_ascii_uppercase() || b.is_ascii_digit()) {
                return Err(InvalidAirlineCode {
                    reason: "must be uppercase ASCII letters A-Z or digits 0-9",
                });
            }
        }

        let mut buf = [0u8; 3];
        buf[..bytes.len()].copy_from_slice(bytes);

        Ok(AirlineCode {
            bytes: buf,
            len: bytes.len() as u8,
        })
    }

    /// Returns the airline code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store valid ASCII letters and digits
        std::str::from_utf8(&self.bytes[..self.len as usize]).unwrap()
    }
}

impl fmt::Debug for AirlineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AirlineCode({})", self.as_str())
    }
}

impl fmt::Display for AirlineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AirlineCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AirlineCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        AirlineCode::parse(&s).map_err(serde::de::Error::custom)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any 2-3 char uppercase alphanumeric string parses and round-trips
        #[test]
        fn roundtrip(s in "[A-Z0-9]{2,3}") {
            let code = AirlineCode::parse(&s).unwrap();
            prop_assert_eq!(code.as_str(), s.as_str());
        }

        /// Lowercase letters are always rejected
        #[test]
        fn lowercase_rejected(s in "[a-z]{2,3}") {
            prop_assert!(AirlineCode::parse(&s).is_err());
        }

        /// Wrong-length strings are always rejected
        #[test]
        fn wrong_length_rejected(s in "[A-Z0-9]{0,1}|[A-Z0-9]{4,10}") {
            prop_assert!(AirlineCode::parse(&s).is_err());
        }
    }
}
