use soroban_sdk::{symbol_short, Address, Env, Symbol, Vec};

use crate::delegation;
use crate::errors::BallotError;
use crate::storage;
use crate::types::{BallotConfig, Proposal, Voter};

pub fn initialize(
    env: &Env,
    chairperson: &Address,
    proposal_names: &Vec<Symbol>,
) -> Result<(), BallotError> {
    if storage::has_config(env) {
        return Err(BallotError::AlreadyInitialized);
    }

    for (index, name) in proposal_names.iter().enumerate() {
        storage::set_proposal(
            env,
            index as u32,
            &Proposal {
                name,
                vote_count: 0,
            },
        );
    }

    storage::set_config(
        env,
        &BallotConfig {
            chairperson: chairperson.clone(),
            proposal_count: proposal_names.len(),
        },
    );
    storage::set_voter(
        env,
        chairperson,
        &Voter {
            weight: 1,
            ..Voter::default()
        },
    );

    env.events().publish(
        (symbol_short!("ballot"), symbol_short!("init")),
        (chairperson.clone(), proposal_names.len()),
    );

    Ok(())
}

pub fn give_right_to_vote(env: &Env, caller: &Address, target: &Address) -> Result<(), BallotError> {
    let config = storage::get_config(env)?;
    if *caller != config.chairperson {
        return Err(BallotError::Unauthorized);
    }

    let mut voter = storage::get_voter(env, target);
    if voter.voted {
        return Err(BallotError::AlreadyVoted);
    }
    if voter.weight != 0 {
        return Err(BallotError::AlreadyHasRight);
    }

    voter.weight = 1;
    storage::set_voter(env, target, &voter);

    env.events()
        .publish((symbol_short!("right"), target.clone()), caller.clone());

    Ok(())
}

pub fn delegate(env: &Env, caller: &Address, to: &Address) -> Result<(), BallotError> {
    storage::get_config(env)?;

    let mut sender = storage::get_voter(env, caller);
    if sender.voted {
        return Err(BallotError::AlreadyVoted);
    }
    if to == caller {
        return Err(BallotError::SelfDelegation);
    }

    let resolved = delegation::resolve(env, caller, to)?;
    let mut delegate = storage::get_voter(env, &resolved);

    // Work out the new tally or weight before touching storage.
    match delegate.vote {
        Some(index) if delegate.voted => {
            let mut proposal = storage::get_proposal(env, index)?;
            proposal.vote_count = proposal
                .vote_count
                .checked_add(sender.weight)
                .ok_or(BallotError::Overflow)?;
            storage::set_proposal(env, index, &proposal);
        }
        _ => {
            delegate.weight = delegate
                .weight
                .checked_add(sender.weight)
                .ok_or(BallotError::Overflow)?;
            storage::set_voter(env, &resolved, &delegate);
        }
    }

    sender.voted = true;
    sender.delegate = Some(resolved.clone());
    storage::set_voter(env, caller, &sender);

    env.events().publish(
        (symbol_short!("delegate"), caller.clone()),
        (resolved, sender.weight),
    );

    Ok(())
}

pub fn vote(env: &Env, caller: &Address, proposal: u32) -> Result<(), BallotError> {
    let config = storage::get_config(env)?;

    let mut voter = storage::get_voter(env, caller);
    if voter.weight == 0 {
        return Err(BallotError::NoRight);
    }
    if voter.voted {
        return Err(BallotError::AlreadyVoted);
    }
    if proposal >= config.proposal_count {
        return Err(BallotError::InvalidProposal);
    }

    let mut chosen = storage::get_proposal(env, proposal)?;
    chosen.vote_count = chosen
        .vote_count
        .checked_add(voter.weight)
        .ok_or(BallotError::Overflow)?;

    voter.voted = true;
    voter.vote = Some(proposal);
    storage::set_voter(env, caller, &voter);
    storage::set_proposal(env, proposal, &chosen);

    env.events()
        .publish((symbol_short!("vote"), caller.clone()), (proposal, voter.weight));

    Ok(())
}

/// Index of the proposal with the most votes. Ties go to the lowest index;
/// an empty or untouched ballot yields 0.
pub fn winning_proposal(env: &Env) -> Result<u32, BallotError> {
    let config = storage::get_config(env)?;

    let mut winning = 0u32;
    let mut winning_count = 0u32;
    for index in 0..config.proposal_count {
        let proposal = storage::get_proposal(env, index)?;
        if proposal.vote_count > winning_count {
            winning_count = proposal.vote_count;
            winning = index;
        }
    }

    Ok(winning)
}

pub fn winner_name(env: &Env) -> Result<Symbol, BallotError> {
    let index = winning_proposal(env)?;
    Ok(storage::get_proposal(env, index)?.name)
}
