use std::{fmt, str::FromStr};

use bcrypt::Version;
use serde::Deserialize;

use crate::error::OracleError;

/// Version identifier written at the front of an encoded hash (`$2a$...`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum HashPrefix {
    #[default]
    TwoA,
    TwoB,
    TwoX,
    TwoY,
}

impl HashPrefix {
    pub fn as_str(self) -> &'static str {
        match self {
            HashPrefix::TwoA => "2a",
            HashPrefix::TwoB => "2b",
            HashPrefix::TwoX => "2x",
            HashPrefix::TwoY => "2y",
        }
    }

    pub fn version(self) -> Version {
        match self {
            HashPrefix::TwoA => Version::TwoA,
            HashPrefix::TwoB => Version::TwoB,
            HashPrefix::TwoX => Version::TwoX,
            HashPrefix::TwoY => Version::TwoY,
        }
    }
}

impl FromStr for HashPrefix {
    type Err = OracleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_matches('$') {
            "2a" => Ok(HashPrefix::TwoA),
            "2b" => Ok(HashPrefix::TwoB),
            "2x" => Ok(HashPrefix::TwoX),
            "2y" => Ok(HashPrefix::TwoY),
            _ => Err(OracleError::InvalidPrefix(s.to_string())),
        }
    }
}

impl TryFrom<String> for HashPrefix {
    type Error = OracleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for HashPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_prefixes() {
        assert_eq!("2a".parse::<HashPrefix>().unwrap(), HashPrefix::TwoA);
        assert_eq!("$2b$".parse::<HashPrefix>().unwrap(), HashPrefix::TwoB);
        assert_eq!("2x".parse::<HashPrefix>().unwrap(), HashPrefix::TwoX);
        assert_eq!("$2y".parse::<HashPrefix>().unwrap(), HashPrefix::TwoY);
    }

    #[test]
    fn rejects_unknown_prefix() {
        assert!(matches!(
            "2z".parse::<HashPrefix>(),
            Err(OracleError::InvalidPrefix(p)) if p == "2z"
        ));
        assert!("".parse::<HashPrefix>().is_err());
    }

    #[test]
    fn default_matches_reference_oracle() {
        assert_eq!(HashPrefix::default().to_string(), "2a");
    }
}
