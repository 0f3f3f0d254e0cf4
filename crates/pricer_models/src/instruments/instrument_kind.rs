//! Instrument kind enumeration.

use std::fmt;
use std::str::FromStr;

use super::error::InstrumentError;

/// Underlying energy futures contract families with listed options.
///
/// This is a closed set: each variant carries its own expiry rule, and
/// adding an instrument means adding a variant and a rule, never
/// inferring one. Unknown names are rejected when parsing.
///
/// # Examples
///
/// ```
/// use pricer_models::instruments::InstrumentKind;
///
/// let kind: InstrumentKind = "Crude Oil".parse().unwrap();
/// assert_eq!(kind, InstrumentKind::CrudeOil);
/// assert_eq!(kind.code(), "CL");
///
/// assert!("Brent".parse::<InstrumentKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstrumentKind {
    /// NYMEX WTI Crude Oil futures (CL).
    CrudeOil,
    /// NYMEX Henry Hub Natural Gas futures (NG).
    NaturalGas,
}

impl InstrumentKind {
    /// All supported instrument kinds, in display order.
    pub const ALL: [InstrumentKind; 2] = [InstrumentKind::CrudeOil, InstrumentKind::NaturalGas];

    /// Returns the market name.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_models::instruments::InstrumentKind;
    ///
    /// assert_eq!(InstrumentKind::CrudeOil.name(), "Crude Oil");
    /// assert_eq!(InstrumentKind::NaturalGas.name(), "Natural Gas");
    /// ```
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            InstrumentKind::CrudeOil => "Crude Oil",
            InstrumentKind::NaturalGas => "Natural Gas",
        }
    }

    /// Returns the exchange product code.
    #[inline]
    pub fn code(&self) -> &'static str {
        match self {
            InstrumentKind::CrudeOil => "CL",
            InstrumentKind::NaturalGas => "NG",
        }
    }
}

impl fmt::Display for InstrumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for InstrumentKind {
    type Err = InstrumentError;

    /// Parses an instrument from its market name or product code
    /// (case-insensitive, whitespace/underscore/dash insensitive).
    ///
    /// Accepted: "Crude Oil", "WTI", "CL"; "Natural Gas", "Henry Hub", "NG".
    fn from_str(s: &str) -> Result<Self, InstrumentError> {
        match s.to_uppercase().replace([' ', '_', '-'], "").as_str() {
            "CRUDEOIL" | "WTI" | "CL" => Ok(InstrumentKind::CrudeOil),
            "NATURALGAS" | "HENRYHUB" | "NG" => Ok(InstrumentKind::NaturalGas),
            _ => Err(InstrumentError::UnsupportedInstrument {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::InstrumentKind;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for InstrumentKind {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for InstrumentKind {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            InstrumentKind::from_str(&s).map_err(de::Error::custom)
        }
    }
}
