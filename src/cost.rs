//! Cost factor handling for the oracle's optional positional argument.

use crate::error::{OracleError, Result};

pub use bcrypt::DEFAULT_COST;

/// Smallest cost bcrypt accepts, and the oracle's default.
pub const MIN_COST: u32 = 4;
pub const MAX_COST: u32 = 31;

/// Interpret the first CLI argument as a cost.
///
/// Anything that is not a base-10 integer (including no argument at all) falls
/// back to [`MIN_COST`] without complaint.
pub fn cost_from_arg(arg: Option<&str>) -> i64 {
    match arg.map(str::parse::<i64>) {
        Some(Ok(cost)) => cost,
        Some(Err(_)) => {
            tracing::debug!("cost argument is not an integer, using minimum cost");
            i64::from(MIN_COST)
        }
        None => i64::from(MIN_COST),
    }
}

/// Narrow a parsed cost to the library's cost type.
///
/// Only representability is checked here; bcrypt itself rejects values outside
/// `MIN_COST..=MAX_COST`.
pub fn to_library_cost(cost: i64) -> Result<u32> {
    u32::try_from(cost).map_err(|_| OracleError::CostOutOfRange(cost))
}
