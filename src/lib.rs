//! Reference bcrypt oracle.
//!
//! Reads a password from stdin, hashes it with the `bcrypt` crate and prints the
//! encoded hash, for cross-checking another bcrypt implementation. The
//! companion binaries expose verification, hashing against a fixed salt, and
//! salt generation over the same stdin/stdout contract.

pub mod config;
pub mod cost;
pub mod error;
pub mod logging;
pub mod oracle;
pub mod prefix;
pub mod salt;

pub use config::OracleConfig;
pub use error::{OracleError, Result};
pub use prefix::HashPrefix;
