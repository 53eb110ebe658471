/**
 * bcrypt reference oracle - main entry point
 *
 * Usage: bcrypt-oracle [cost] < password
 *
 * The whole of stdin is the password (no trimming). The optional first argument
 * is the cost; if it is missing or not an integer the minimum cost is used.
 * On success the encoded hash and a single newline are written to stdout.
 * Any read or hashing failure exits non-zero without writing to stdout.
 *
 * Unlike the companion tools this binary takes no configuration: the output is
 * always `$2a$` and only the argument and stdin affect it.
 */

use std::{env, io};

use anyhow::Result;

use bcrypt_oracle::{logging, oracle, HashPrefix};

fn main() -> Result<()> {
    logging::init();

    let cost_arg = env::args().nth(1);

    oracle::run(
        io::stdin().lock(),
        io::stdout().lock(),
        cost_arg.as_deref(),
        HashPrefix::default(),
    )?;

    Ok(())
}
