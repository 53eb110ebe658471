//! Encoded salt strings: `$<prefix>$<cost>$<22 chars of bcrypt base64>`.

use base64::{
    alphabet,
    engine::{general_purpose, GeneralPurpose},
    Engine,
};
use rand::{rngs::OsRng, RngCore};

use crate::{
    cost::{MAX_COST, MIN_COST},
    error::{OracleError, Result},
    prefix::HashPrefix,
};

pub const SALT_LEN: usize = 16;
pub const ENCODED_SALT_LEN: usize = 22;

pub const BCRYPT_BASE64: GeneralPurpose =
    GeneralPurpose::new(&alphabet::BCRYPT, general_purpose::NO_PAD);

/// A salt split out of an encoded salt or a full encoded hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedSalt {
    pub prefix: HashPrefix,
    pub cost: u32,
    pub salt: [u8; SALT_LEN],
}

impl EncodedSalt {
    /// Parse either a bare salt (`$2b$12$<22>`) or a full hash (`$2b$12$<22><31>`).
    pub fn parse(encoded: &str) -> Result<Self> {
        let invalid = || OracleError::InvalidSalt(encoded.to_string());

        let parts: Vec<&str> = encoded.split('$').filter(|s| !s.is_empty()).collect();
        let [raw_prefix, raw_cost, remainder]: [&str; 3] =
            parts.try_into().map_err(|_| invalid())?;

        let prefix = raw_prefix.parse::<HashPrefix>().map_err(|_| invalid())?;
        let cost = raw_cost.parse::<u32>().map_err(|_| invalid())?;

        let encoded_salt = remainder.get(..ENCODED_SALT_LEN).ok_or_else(invalid)?;
        let salt: [u8; SALT_LEN] = BCRYPT_BASE64
            .decode(encoded_salt)
            .map_err(|_| invalid())?
            .try_into()
            .map_err(|_| invalid())?;

        tracing::debug!(%prefix, cost, "parsed encoded salt");
        Ok(EncodedSalt { prefix, cost, salt })
    }

    pub fn encode(&self) -> String {
        format!(
            "${}${:02}${}",
            self.prefix,
            self.cost,
            BCRYPT_BASE64.encode(self.salt)
        )
    }
}

/// Generate a fresh random salt for `rounds` and render it with `prefix`.
pub fn gensalt(rounds: u32, prefix: HashPrefix) -> Result<String> {
    if !(MIN_COST..=MAX_COST).contains(&rounds) {
        return Err(OracleError::CostOutOfRange(i64::from(rounds)));
    }

    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);

    Ok(EncodedSalt {
        prefix,
        cost: rounds,
        salt,
    }
    .encode())
}
