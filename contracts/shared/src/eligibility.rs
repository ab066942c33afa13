//! Voting eligibility shared by the election engine and the welfare board
//!
//! An account is eligible when it holds a citizen credential and a positive
//! governance token balance. Both facts are read live from the collaborator
//! contracts on every call; nothing is cached between invocations.

use soroban_sdk::{Address, Env};

use crate::errors::ContractError;
use crate::interfaces::{GovernanceTokenClient, IdentityRegistryClient};

/// Check eligibility and return the account's current token balance.
///
/// The credential is checked first, so an account with neither fails with
/// `NotACitizen`.
pub fn check_eligibility(
    env: &Env,
    registry: &Address,
    token: &Address,
    account: &Address,
) -> Result<i128, ContractError> {
    if !IdentityRegistryClient::new(env, registry).holds_credential(account) {
        return Err(ContractError::NotACitizen);
    }

    let balance = GovernanceTokenClient::new(env, token).balance(account);
    if balance <= 0 {
        return Err(ContractError::NoTokens);
    }

    Ok(balance)
}

/// `holds_credential(account) && balance_of(account) > 0`
pub fn is_eligible(env: &Env, registry: &Address, token: &Address, account: &Address) -> bool {
    check_eligibility(env, registry, token, account).is_ok()
}
