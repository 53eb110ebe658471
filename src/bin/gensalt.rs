//! Print a freshly generated bcrypt salt.
//! Usage: gensalt [rounds]

use std::env;

use anyhow::{Context, Result};

use bcrypt_oracle::{logging, salt, OracleConfig};

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    logging::init();

    let config = OracleConfig::from_env()?;
    let rounds = match env::args().nth(1) {
        Some(arg) => arg
            .parse::<u32>()
            .with_context(|| format!("rounds must be a positive integer, got {arg:?}"))?,
        None => config.gensalt_rounds,
    };

    println!("{}", salt::gensalt(rounds, config.prefix)?);
    Ok(())
}
