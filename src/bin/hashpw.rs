//! Hash stdin against a fixed salt, for reproducible test vectors.
//! Usage: hashpw <salt-or-hash> < password

use std::{
    env,
    io::{self, Read, Write},
};

use anyhow::{Context, Result};

use bcrypt_oracle::{logging, oracle};

fn main() -> Result<()> {
    logging::init();

    let Some(salt) = env::args().nth(1) else {
        eprintln!("Usage: hashpw <salt> < password");
        std::process::exit(2);
    };

    let mut password = Vec::new();
    io::stdin()
        .read_to_end(&mut password)
        .context("reading password from stdin")?;

    let hashed = oracle::hashpw(&password, &salt)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{hashed}")?;
    stdout.flush()?;
    Ok(())
}
