//! Vote-cost policy shared by the election engine and the welfare board
//!
//! The cost is checked against the balance read during eligibility, before
//! any write, and collected after the ballot is recorded within the same
//! invocation.

use soroban_sdk::{contracttype, Address, Env};

use crate::errors::ContractError;
use crate::interfaces::GovernanceTokenClient;

/// What a vote costs the voter in governance tokens
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum VoteCost {
    /// Holding a positive balance is enough
    Free,
    /// Burn this many raw units from the voter on every vote
    Burn(i128),
}

/// Reject a `Burn` cost that is not strictly positive
pub fn validate_vote_cost(cost: &VoteCost) -> Result<(), ContractError> {
    match cost {
        VoteCost::Burn(amount) if *amount <= 0 => Err(ContractError::InvalidAmount),
        _ => Ok(()),
    }
}

/// `NoTokens` when `balance` cannot cover the cost
pub fn check_vote_cost(cost: &VoteCost, balance: i128) -> Result<(), ContractError> {
    match cost {
        VoteCost::Burn(amount) if balance < *amount => Err(ContractError::NoTokens),
        _ => Ok(()),
    }
}

/// Burn the cost from `voter` through the token. The voter's auth covers
/// the nested burn.
pub fn collect_vote_cost(env: &Env, token: &Address, voter: &Address, cost: &VoteCost) {
    if let VoteCost::Burn(amount) = cost {
        GovernanceTokenClient::new(env, token).burn(voter, amount);
    }
}
