//! Error type shared by the oracle library and its binaries.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OracleError {
    #[error("failed to read password from input")]
    Read(#[source] io::Error),
    #[error("failed to write hash to output")]
    Write(#[source] io::Error),
    #[error("bcrypt rejected the password or its parameters")]
    Hash(#[from] bcrypt::BcryptError),
    #[error("cost {0} is outside the range bcrypt accepts")]
    CostOutOfRange(i64),
    #[error("password is {0} bytes, bcrypt accepts at most 72")]
    PasswordTooLong(usize),
    #[error("invalid salt: {0}")]
    InvalidSalt(String),
    #[error("unsupported prefix {0:?}, expected one of 2a, 2b, 2x, 2y")]
    InvalidPrefix(String),
    #[error("invalid configuration")]
    Config(#[from] envy::Error),
}

pub type Result<T> = std::result::Result<T, OracleError>;
