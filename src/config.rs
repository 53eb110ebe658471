use serde::Deserialize;

use crate::{cost::DEFAULT_COST, error::Result, prefix::HashPrefix};

pub const ENV_PREFIX: &str = "BCRYPT_ORACLE_";

/// Optional settings read from `BCRYPT_ORACLE_*` environment variables.
///
/// Only the companion tools read these; the oracle binary itself is fixed to
/// `$2a$` output.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OracleConfig {
    #[serde(default)]
    pub prefix: HashPrefix,
    #[serde(default = "default_gensalt_rounds")]
    pub gensalt_rounds: u32,
}

fn default_gensalt_rounds() -> u32 {
    DEFAULT_COST
}

impl Default for OracleConfig {
    fn default() -> Self {
        OracleConfig {
            prefix: HashPrefix::default(),
            gensalt_rounds: default_gensalt_rounds(),
        }
    }
}

impl OracleConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Ok(envy::prefixed(ENV_PREFIX).from_env::<OracleConfig>()?)
    }

    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::prefixed(ENV_PREFIX).from_iter::<_, OracleConfig>(vars)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OracleError;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = OracleConfig::from_vars(vars(&[("PATH", "/usr/bin")])).expect("config");
        assert_eq!(config, OracleConfig::default());
        assert_eq!(config.prefix, HashPrefix::TwoA);
        assert_eq!(config.gensalt_rounds, 12);
    }

    #[test]
    fn reads_prefixed_variables() {
        let config = OracleConfig::from_vars(vars(&[
            ("BCRYPT_ORACLE_PREFIX", "2b"),
            ("BCRYPT_ORACLE_GENSALT_ROUNDS", "8"),
        ]))
        .expect("config");
        assert_eq!(config.prefix, HashPrefix::TwoB);
        assert_eq!(config.gensalt_rounds, 8);
    }

    #[test]
    fn bad_values_are_errors() {
        assert!(matches!(
            OracleConfig::from_vars(vars(&[("BCRYPT_ORACLE_PREFIX", "2z")])),
            Err(OracleError::Config(_))
        ));
        assert!(matches!(
            OracleConfig::from_vars(vars(&[("BCRYPT_ORACLE_GENSALT_ROUNDS", "many")])),
            Err(OracleError::Config(_))
        ));
    }
}
