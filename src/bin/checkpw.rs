//! Verify stdin against an encoded bcrypt hash.
//! Usage: checkpw <hash> < password
//!
//! Exit status: 0 on a match, 1 on a mismatch, 2 on usage or any other error.

use std::{
    env,
    io::{self, Read},
    process,
};

use anyhow::{Context, Result};

use bcrypt_oracle::{logging, oracle};

fn check(hashed: &str) -> Result<bool> {
    let mut password = Vec::new();
    io::stdin()
        .read_to_end(&mut password)
        .context("reading password from stdin")?;

    Ok(oracle::checkpw(&password, hashed)?)
}

fn main() {
    logging::init();

    let Some(hashed) = env::args().nth(1) else {
        eprintln!("Usage: checkpw <hash> < password");
        process::exit(2);
    };

    match check(&hashed) {
        Ok(true) => {}
        Ok(false) => {
            tracing::info!("password does not match hash");
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(2);
        }
    }
}
