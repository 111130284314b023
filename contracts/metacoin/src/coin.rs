use soroban_sdk::{symbol_short, Address, Env};

use crate::errors::MetaCoinError;
use crate::storage;

pub fn mint(env: &Env, to: &Address, amount: i128) -> Result<(), MetaCoinError> {
    if amount <= 0 {
        return Err(MetaCoinError::InvalidAmount);
    }

    let balance = storage::get_balance(env, to)
        .checked_add(amount)
        .ok_or(MetaCoinError::Overflow)?;
    let supply = storage::get_total_supply(env)
        .checked_add(amount)
        .ok_or(MetaCoinError::Overflow)?;

    storage::set_balance(env, to, balance);
    storage::set_total_supply(env, supply);

    env.events()
        .publish((symbol_short!("mint"), to.clone()), amount);

    Ok(())
}

pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), MetaCoinError> {
    if amount <= 0 {
        return Err(MetaCoinError::InvalidAmount);
    }

    let from_balance = storage::get_balance(env, from);
    if from_balance < amount {
        return Err(MetaCoinError::InsufficientBalance);
    }

    let debited = from_balance - amount;
    let to_balance = if from == to {
        debited
    } else {
        storage::get_balance(env, to)
    };
    let credited = to_balance
        .checked_add(amount)
        .ok_or(MetaCoinError::Overflow)?;

    storage::set_balance(env, from, debited);
    storage::set_balance(env, to, credited);

    env.events().publish(
        (symbol_short!("transfer"), from.clone()),
        (to.clone(), amount),
    );

    Ok(())
}
