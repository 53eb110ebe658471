//! The oracle itself: hash whatever arrives on the input and print the result.

use std::io::{Read, Write};

use subtle::ConstantTimeEq;

use crate::{
    cost::{cost_from_arg, to_library_cost},
    error::{OracleError, Result},
    prefix::HashPrefix,
    salt::EncodedSalt,
};

/// bcrypt only looks at this many bytes of a password.
pub const MAX_PASSWORD_LEN: usize = 72;

fn check_password_len(password: &[u8]) -> Result<()> {
    if password.len() > MAX_PASSWORD_LEN {
        return Err(OracleError::PasswordTooLong(password.len()));
    }
    Ok(())
}

/// Hash `password` with a fresh random salt at `cost`, encoded with `prefix`.
pub fn generate(password: &[u8], cost: i64, prefix: HashPrefix) -> Result<String> {
    check_password_len(password)?;
    let cost = to_library_cost(cost)?;

    tracing::debug!(cost, %prefix, "hashing password");
    let parts = bcrypt::hash_with_result(password, cost)?;
    Ok(parts.format_for_version(prefix.version()))
}

/// Hash `password` with the salt, cost and prefix taken from `salt`.
///
/// `salt` may be a bare encoded salt or a complete hash, so
/// `hashpw(p, &hashpw(p, s)?)` reproduces the same string.
pub fn hashpw(password: &[u8], salt: &str) -> Result<String> {
    check_password_len(password)?;
    let encoded = EncodedSalt::parse(salt)?;

    let parts = bcrypt::hash_with_salt(password, encoded.cost, encoded.salt)?;
    Ok(parts.format_for_version(encoded.prefix.version()))
}

/// Check `password` against an encoded hash. A mismatch is `Ok(false)`.
///
/// The hash is recomputed from the salt part of `hashed` and compared in
/// constant time, so anything that is not exactly a hash of `password` (a bare
/// salt, trailing bytes) is a mismatch rather than an error.
pub fn checkpw(password: &[u8], hashed: &str) -> Result<bool> {
    let recomputed = hashpw(password, hashed)?;
    Ok(recomputed.as_bytes().ct_eq(hashed.as_bytes()).into())
}

/// Read the whole of `input`, hash it and write the hash plus a newline.
///
/// `output` is only touched once hashing has succeeded.
pub fn run<R, W>(
    mut input: R,
    mut output: W,
    cost_arg: Option<&str>,
    prefix: HashPrefix,
) -> Result<()>
where
    R: Read,
    W: Write,
{
    let cost = cost_from_arg(cost_arg);

    let mut password = Vec::new();
    input.read_to_end(&mut password).map_err(OracleError::Read)?;
    tracing::debug!(bytes = password.len(), "read password");

    let hash = generate(&password, cost, prefix)?;

    let mut line = hash.into_bytes();
    line.push(b'\n');
    output.write_all(&line).map_err(OracleError::Write)?;
    output.flush().map_err(OracleError::Write)?;

    Ok(())
}
