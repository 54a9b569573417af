//! Coach class types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown coach class identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid coach class: {0:?} (expected general, ladies or firstClass)")]
pub struct InvalidCoachClass(String);

/// Seating category on a suburban train.
///
/// The wire identifiers are `general`, `ladies` and `firstClass`.
///
/// # Examples
///
/// ```
/// use platform_server::domain::CoachClass;
///
/// let class: CoachClass = "firstClass".parse().unwrap();
/// assert_eq!(class, CoachClass::FirstClass);
/// assert_eq!(class.label(), "First Class");
///
/// assert!("business".parse::<CoachClass>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CoachClass {
    #[default]
    General,
    Ladies,
    FirstClass,
}

impl CoachClass {
    /// All coach classes, in display order.
    pub const ALL: [CoachClass; 3] = [
        CoachClass::General,
        CoachClass::Ladies,
        CoachClass::FirstClass,
    ];

    /// Human-readable label, e.g. "First Class".
    pub fn label(self) -> &'static str {
        match self {
            CoachClass::General => "General",
            CoachClass::Ladies => "Ladies",
            CoachClass::FirstClass => "First Class",
        }
    }

    /// Wire identifier, e.g. "firstClass".
    pub fn as_str(self) -> &'static str {
        match self {
            CoachClass::General => "general",
            CoachClass::Ladies => "ladies",
            CoachClass::FirstClass => "firstClass",
        }
    }
}

impl FromStr for CoachClass {
    type Err = InvalidCoachClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CoachClass::ALL
            .into_iter()
            .find(|class| class.as_str() == s)
            .ok_or_else(|| InvalidCoachClass(s.to_string()))
    }
}

impl fmt::Display for CoachClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(CoachClass::General.label(), "General");
        assert_eq!(CoachClass::Ladies.label(), "Ladies");
        assert_eq!(CoachClass::FirstClass.label(), "First Class");
    }

    #[test]
    fn parse_wire_identifiers() {
        for class in CoachClass::ALL {
            assert_eq!(class.as_str().parse::<CoachClass>().unwrap(), class);
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!("General".parse::<CoachClass>().is_err());
        assert!("first_class".parse::<CoachClass>().is_err());
        assert!("".parse::<CoachClass>().is_err());
    }

    #[test]
    fn serde_uses_camel_case() {
        let json = serde_json::to_string(&CoachClass::FirstClass).unwrap();
        assert_eq!(json, "\"firstClass\"");

        let class: CoachClass = serde_json::from_str("\"ladies\"").unwrap();
        assert_eq!(class, CoachClass::Ladies);

        assert!(serde_json::from_str::<CoachClass>("\"vip\"").is_err());
    }

    #[test]
    fn error_display() {
        let err = "vip".parse::<CoachClass>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid coach class: \"vip\" (expected general, ladies or firstClass)"
        );
    }
}
