//! Soulbound citizen credential registry
//!
//! Issues at most one non-transferable credential per account. Other
//! contracts only consume `holds_credential`; everything else serves the
//! registry's own administration and client reads.

#![no_std]

mod storage;

use authorization::{get_owner, has_owner, initialize_owner, require_owner};
use shared::errors::ContractError;
use shared::storage::bump_instance;
use shared::validation::require_account;
use soroban_sdk::{contract, contractimpl, Address, Env, String, Symbol};

const NAME: &str = "CitizenID";
const SYMBOL: &str = "CID";

#[contract]
pub struct CitizenIdContract;

fn issue(env: &Env, to: &Address) -> Result<u64, ContractError> {
    require_account(env, to)?;

    if storage::get_credential_of(env, to).is_some() {
        return Err(ContractError::AlreadyCitizen);
    }

    let token_id = storage::get_next_id(env) + 1;
    storage::save_credential(env, to, token_id);
    storage::set_next_id(env, token_id);
    storage::set_holders(env, storage::get_holders(env) + 1);
    bump_instance(env);

    env.events().publish(
        (Symbol::new(env, "citizen_minted"), to.clone()),
        token_id,
    );

    Ok(token_id)
}

#[contractimpl]
impl CitizenIdContract {
    pub fn initialize(env: Env, owner: Address) -> Result<(), ContractError> {
        owner.require_auth();

        if has_owner(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        require_account(&env, &owner)?;

        initialize_owner(&env, &owner);
        bump_instance(&env);
        Ok(())
    }

    pub fn name(env: Env) -> String {
        String::from_str(&env, NAME)
    }

    pub fn symbol(env: Env) -> String {
        String::from_str(&env, SYMBOL)
    }

    // ── Issuance ─────────────────────────────────────────────────────────────

    /// Owner issues a credential to `to`.
    pub fn mint_citizen(env: Env, caller: Address, to: Address) -> Result<u64, ContractError> {
        require_owner(&env, &caller)?;
        issue(&env, &to)
    }

    /// Self-service registration.
    pub fn register_citizen(env: Env, account: Address) -> Result<u64, ContractError> {
        account.require_auth();
        issue(&env, &account)
    }

    /// Only the holder may destroy its credential. The account can be
    /// issued a fresh one afterwards.
    pub fn burn(env: Env, holder: Address, token_id: u64) -> Result<(), ContractError> {
        holder.require_auth();

        let current = storage::get_holder_of(&env, token_id).ok_or(ContractError::NoSuchCredential)?;
        if current != holder {
            return Err(ContractError::NotCredentialHolder);
        }

        storage::remove_credential(&env, &holder, token_id);
        storage::set_holders(&env, storage::get_holders(&env).saturating_sub(1));

        env.events().publish(
            (Symbol::new(&env, "citizen_burned"), holder),
            token_id,
        );
        Ok(())
    }

    /// Credentials never move between accounts.
    pub fn transfer(
        _env: Env,
        _from: Address,
        _to: Address,
        _token_id: u64,
    ) -> Result<(), ContractError> {
        Err(ContractError::Soulbound)
    }

    // ── Reads ────────────────────────────────────────────────────────────────

    pub fn holds_credential(env: Env, account: Address) -> bool {
        storage::get_credential_of(&env, &account).is_some()
    }

    pub fn balance_of(env: Env, account: Address) -> u32 {
        if storage::get_credential_of(&env, &account).is_some() {
            1
        } else {
            0
        }
    }

    pub fn credential_of(env: Env, account: Address) -> Option<u64> {
        storage::get_credential_of(&env, &account)
    }

    pub fn owner_of(env: Env, token_id: u64) -> Result<Address, ContractError> {
        storage::get_holder_of(&env, token_id).ok_or(ContractError::NoSuchCredential)
    }

    /// Id of the most recently issued credential; 0 before the first one.
    pub fn next_id(env: Env) -> u64 {
        storage::get_next_id(&env)
    }

    /// Credentials currently held (issued minus burned)
    pub fn total_citizens(env: Env) -> u64 {
        storage::get_holders(&env)
    }

    // ── Ownership ────────────────────────────────────────────────────────────

    pub fn owner(env: Env) -> Result<Address, ContractError> {
        Ok(get_owner(&env)?)
    }

    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), ContractError> {
        authorization::transfer_ownership(&env, &caller, &new_owner)?;
        Ok(())
    }
}

#[cfg(test)]
mod test;
