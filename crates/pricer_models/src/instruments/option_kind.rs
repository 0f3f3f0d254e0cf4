//! Option kind enumeration.

use std::fmt;
use std::str::FromStr;

use super::error::InstrumentError;

/// European option payoff direction.
///
/// Closed set: anything other than a call or a put is rejected when
/// parsing with `UnknownOptionKind`.
///
/// # Examples
///
/// ```
/// use pricer_models::instruments::OptionKind;
///
/// let kind: OptionKind = "CALL".parse().unwrap();
/// assert_eq!(kind, OptionKind::Call);
/// assert!("straddle".parse::<OptionKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKind {
    /// Right to buy the underlying future at the strike.
    Call,
    /// Right to sell the underlying future at the strike.
    Put,
}

impl OptionKind {
    /// Returns the conventional name.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            OptionKind::Call => "Call",
            OptionKind::Put => "Put",
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for OptionKind {
    type Err = InstrumentError;

    /// Parses an option kind (case-insensitive): "call"/"c" or "put"/"p".
    fn from_str(s: &str) -> Result<Self, InstrumentError> {
        match s.to_uppercase().as_str() {
            "CALL" | "C" => Ok(OptionKind::Call),
            "PUT" | "P" => Ok(OptionKind::Put),
            _ => Err(InstrumentError::UnknownOptionKind {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::OptionKind;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for OptionKind {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for OptionKind {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            OptionKind::from_str(&s).map_err(de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_accepts_names_and_codes() {
        assert_eq!("Call".parse::<OptionKind>().unwrap(), OptionKind::Call);
        assert_eq!("PUT".parse::<OptionKind>().unwrap(), OptionKind::Put);
        assert_eq!("c".parse::<OptionKind>().unwrap(), OptionKind::Call);
        assert_eq!("p".parse::<OptionKind>().unwrap(), OptionKind::Put);
    }

    #[test]
    fn test_from_str_unknown_rejected() {
        let err = "butterfly".parse::<OptionKind>().unwrap_err();
        assert_eq!(
            err,
            InstrumentError::UnknownOptionKind {
                name: "butterfly".to_string()
            }
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", OptionKind::Call), "Call");
        assert_eq!(format!("{}", OptionKind::Put), "Put");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        for kind in [OptionKind::Call, OptionKind::Put] {
            let json = serde_json::to_string(&kind).unwrap();
            let parsed: OptionKind = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, kind);
        }
    }
}
