use soroban_sdk::{Address, Env};

use crate::errors::BallotError;
use crate::storage;

/// Follows the delegate chain starting at `to` and returns its final
/// address.
///
/// Every hop lands on a voter record, so a well-formed chain never has more
/// hops than there are known voters. Reaching `caller` or exceeding that
/// bound is reported as `CircularDelegation`.
pub fn resolve(env: &Env, caller: &Address, to: &Address) -> Result<Address, BallotError> {
    let max_hops = storage::get_voter_count(env);
    let mut current = to.clone();
    let mut hops: u32 = 0;

    while let Some(next) = storage::get_voter(env, &current).delegate {
        if next == *caller {
            return Err(BallotError::CircularDelegation);
        }
        hops += 1;
        if hops > max_hops {
            return Err(BallotError::CircularDelegation);
        }
        current = next;
    }

    Ok(current)
}
