//! Station code types.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when parsing an invalid station code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station code: {reason}")]
pub struct InvalidStationCode {
    reason: &'static str,
}

/// A suburban station code, e.g. `DR` (Dadar) or `CSMT`.
///
/// Codes are 2 to 4 uppercase ASCII letters. Any `StationCode` value is
/// valid by construction.
///
/// # Examples
///
/// ```
/// use platform_server::domain::StationCode;
///
/// let dadar = StationCode::parse("DR").unwrap();
/// assert_eq!(dadar.as_str(), "DR");
///
/// assert!(StationCode::parse("dr").is_err());
/// assert!(StationCode::parse("D").is_err());
/// assert!(StationCode::parse("CSMTX").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StationCode(String);

impl StationCode {
    /// Parse a station code.
    pub fn parse(s: &str) -> Result<Self, InvalidStationCode> {
        if !(2..=4).contains(&s.len()) {
            return Err(InvalidStationCode {
                reason: "must be 2 to 4 characters",
            });
        }

        if !s.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(InvalidStationCode {
                reason: "must be uppercase ASCII letters A-Z",
            });
        }

        Ok(StationCode(s.to_string()))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationCode({})", self.0)
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for StationCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for StationCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        StationCode::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_codes() {
        assert!(StationCode::parse("DR").is_ok());
        assert!(StationCode::parse("CCG").is_ok());
        assert!(StationCode::parse("CSMT").is_ok());
    }

    #[test]
    fn reject_lowercase() {
        assert!(StationCode::parse("dr").is_err());
        assert!(StationCode::parse("Ccg").is_err());
    }

    #[test]
    fn reject_wrong_length() {
        assert!(StationCode::parse("").is_err());
        assert!(StationCode::parse("D").is_err());
        assert!(StationCode::parse("CSMTX").is_err());
    }

    #[test]
    fn reject_non_letters() {
        assert!(StationCode::parse("D1").is_err());
        assert!(StationCode::parse("C-G").is_err());
        assert!(StationCode::parse("CÖG").is_err());
    }

    #[test]
    fn debug_and_display() {
        let code = StationCode::parse("BND").unwrap();
        assert_eq!(format!("{}", code), "BND");
        assert_eq!(format!("{:?}", code), "StationCode(BND)");
    }

    #[test]
    fn deserialize_validates() {
        let code: StationCode = serde_json::from_str("\"SIN\"").unwrap();
        assert_eq!(code.as_str(), "SIN");
        assert!(serde_json::from_str::<StationCode>("\"sin\"").is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Parse then as_str returns the original
        #[test]
        fn roundtrip(s in "[A-Z]{2,4}") {
            let code = StationCode::parse(&s).unwrap();
            prop_assert_eq!(code.as_str(), s.as_str());
        }

        /// Lowercase letters are always rejected
        #[test]
        fn lowercase_rejected(s in "[a-z]{2,4}") {
            prop_assert!(StationCode::parse(&s).is_err());
        }

        /// Wrong-length strings are always rejected
        #[test]
        fn wrong_length_rejected(s in "[A-Z]{0,1}|[A-Z]{5,10}") {
            prop_assert!(StationCode::parse(&s).is_err());
        }
    }
}
