//! Airport code type.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when parsing an invalid airport code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airport code: {reason}")]
pub struct InvalidAirportCode {
    reason: &'static str,
}

/// A valid airport or location code.
///
/// IATA airport codes are 3 letters ("TLV", "KEF"), but reference data also
/// carries 2-character and digit-bearing location codes, so anything of 2 or
/// 3 uppercase ASCII letters or digits is accepted.
///
/// # Examples
///
/// ```
/// use flight_names::domain::AirportCode;
///
/// let tlv = AirportCode::parse("TLV").unwrap();
/// assert_eq!(tlv.as_str(), "TLV");
///
/// assert!(AirportCode::parse("X1").is_ok());
/// assert!(AirportCode::parse("A1B").is_ok());
///
/// // Lowercase is rejected
/// assert!(AirportCode::parse("tlv").is_err());
///
/// // ICAO 4-letter codes are not airport codes here
/// assert!(AirportCode::parse("LLBG").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AirportCode {
    bytes: [u8; 3],
    len: u8,
}

impl AirportCode {
    /// Parse an airport code from a string.
    ///
    /// The input must be 2 or 3 characters, each `A-Z` or `0-9`.
    pub fn parse(s: &str) -> Result<Self, InvalidAirportCode> {
        let bytes = s.as_bytes();

        if !(2..=3).contains(&bytes.len()) {
            return Err(InvalidAirportCode {
                reason: "must be 2 or 3 characters",
            });
        }

        if bytes
            .iter()
            .any(|b| !(b.is_ascii_uppercase() || b.is_ascii_digit()))
        {
            return Err(InvalidAirportCode {
                reason: "must be uppercase ASCII letters A-Z or digits 0-9",
            });
        }

        let mut code = AirportCode {
            bytes: [0; 3],
            len: bytes.len() as u8,
        };
        code.bytes[..bytes.len()].copy_from_slice(bytes);
        Ok(code)
    }

    /// Returns the airport code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store valid ASCII letters and digits
        std::str::from_utf8(&self.bytes[..self.len as usize]).unwrap()
    }
}

impl fmt::Debug for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AirportCode({})", self.as_str())
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AirportCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AirportCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        AirportCode::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_iata_airport_codes() {
        assert!(AirportCode::parse("TLV").is_ok());
        assert!(AirportCode::parse("KEF").is_ok());
        assert!(AirportCode::parse("LHR").is_ok());
    }

    #[test]
    fn parse_short_and_digit_codes() {
        assert_eq!(AirportCode::parse("X1").unwrap().as_str(), "X1");
        assert_eq!(AirportCode::parse("A1B").unwrap().as_str(), "A1B");
        assert_eq!(AirportCode::parse("99").unwrap().as_str(), "99");
    }

    #[test]
    fn reject_lowercase() {
        assert!(AirportCode::parse("tlv").is_err());
        assert!(AirportCode::parse("Tlv").is_err());
        assert!(AirportCode::parse("x1").is_err());
    }

    #[test]
    fn reject_wrong_length() {
        assert!(AirportCode::parse("").is_err());
        assert!(AirportCode::parse("T").is_err());
        assert!(AirportCode::parse("LLBG").is_err());
    }

    #[test]
    fn reject_punctuation() {
        assert!(AirportCode::parse("T-V").is_err());
        assert!(AirportCode::parse("T V").is_err());
        assert!(AirportCode::parse("TÖ").is_err());
    }

    #[test]
    fn length_is_part_of_identity() {
        assert_ne!(
            AirportCode::parse("AB").unwrap(),
            AirportCode::parse("ABC").unwrap()
        );
    }

    #[test]
    fn display_and_debug() {
        let code = AirportCode::parse("KEF").unwrap();
        assert_eq!(format!("{}", code), "KEF");
        assert_eq!(format!("{:?}", code), "AirportCode(KEF)");
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
            let code = AirportCode::parse(&s).unwrap();
            prop_assert_eq!(code.as_str(), s.as_str());
        }

        /// Lowercase letters are always rejected
        #[test]
        fn lowercase_rejected(s in "[a-z]{2,3}") {
            prop_assert!(AirportCode::parse(&s).is_err());
        }

        /// Wrong-length strings are always rejected
        #[test]
        fn wrong_length_rejected(s in "[A-Z0-9]{0,1}|[A-Z0-9]{4,10}") {
            prop_assert!(AirportCode::parse(&s).is_err());
        }
    }
}
