//! Nation Token: fungible governance token with role-gated minting
//!
//! Balances are raw units with `TOKEN_DECIMALS` places. `mint_to` takes whole
//! tokens and scales them; `mint_raw` takes raw units. The function names
//! `balance`, `burn`, `transfer` and `decimals` match the shared
//! `GovernanceTokenInterface` consumed by the governance contracts.

#![no_std]

mod ledger;
mod storage;

use authorization::{require_role, set_role, Role};
use shared::constants::TOKEN_DECIMALS;
use shared::errors::ContractError;
use shared::storage::bump_instance;
use shared::validation::{require_account, whole_to_raw};
use soroban_sdk::{contract, contractimpl, Address, Env, String};

pub use storage::TokenMetadata;

#[contract]
pub struct NationToken;

fn metadata(env: &Env) -> Result<TokenMetadata, ContractError> {
    storage::get_metadata(env).ok_or(ContractError::NotInitialized)
}

#[contractimpl]
impl NationToken {
    /// Sets up metadata, makes `admin` both Admin and Minter and mints
    /// `initial_supply_whole` whole tokens to it.
    pub fn initialize(
        env: Env,
        admin: Address,
        name: String,
        symbol: String,
        initial_supply_whole: i128,
    ) -> Result<(), ContractError> {
        admin.require_auth();

        if storage::has_metadata(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        require_account(&env, &admin)?;
        if initial_supply_whole < 0 {
            return Err(ContractError::InvalidAmount);
        }

        storage::set_metadata(
            &env,
            &TokenMetadata {
                name,
                symbol,
                decimals: TOKEN_DECIMALS,
            },
        );
        set_role(&env, Role::Admin, &admin);
        set_role(&env, Role::Minter, &admin);

        if initial_supply_whole > 0 {
            let raw = whole_to_raw(initial_supply_whole, TOKEN_DECIMALS)?;
            ledger::mint(&env, &admin, raw)?;
        }

        bump_instance(&env);
        Ok(())
    }

    // ── Metadata ─────────────────────────────────────────────────────────────

    pub fn name(env: Env) -> Result<String, ContractError> {
        Ok(metadata(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, ContractError> {
        Ok(metadata(&env)?.symbol)
    }

    pub fn decimals(env: Env) -> Result<u32, ContractError> {
        Ok(metadata(&env)?.decimals)
    }

    pub fn total_supply(env: Env) -> i128 {
        storage::get_total_supply(&env)
    }

    // ── Balances ─────────────────────────────────────────────────────────────

    pub fn balance(env: Env, id: Address) -> i128 {
        storage::get_balance(&env, &id)
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        storage::get_allowance(&env, &from, &spender)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), ContractError> {
        from.require_auth();
        ledger::transfer(&env, &from, &to, amount)
    }

    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        from.require_auth();
        ledger::approve(&env, &from, &spender, amount)
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        spender.require_auth();
        ledger::spend_allowance(&env, &from, &spender, amount)?;
        ledger::transfer(&env, &from, &to, amount)
    }

    pub fn burn(env: Env, from: Address, amount: i128) -> Result<(), ContractError> {
        from.require_auth();
        ledger::burn(&env, &from, amount)
    }

    pub fn burn_from(
        env: Env,
        spender: Address,
        from: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        spender.require_auth();
        ledger::spend_allowance(&env, &from, &spender, amount)?;
        ledger::burn(&env, &from, amount)
    }

    // ── Minting ──────────────────────────────────────────────────────────────

    /// Mint `amount_whole` whole tokens to `to`.
    pub fn mint_to(
        env: Env,
        minter: Address,
        to: Address,
        amount_whole: i128,
    ) -> Result<(), ContractError> {
        require_role(&env, &minter, Role::Minter)?;
        let raw = whole_to_raw(amount_whole, metadata(&env)?.decimals)?;
        ledger::mint(&env, &to, raw)
    }

    pub fn mint_raw(env: Env, minter: Address, to: Address, amount: i128) -> Result<(), ContractError> {
        require_role(&env, &minter, Role::Minter)?;
        ledger::mint(&env, &to, amount)
    }

    /// Move whatever the token contract itself holds to `to`. Returns the
    /// amount moved.
    pub fn sweep_self(env: Env, admin: Address, to: Address) -> Result<i128, ContractError> {
        require_role(&env, &admin, Role::Admin)?;

        let this = env.current_contract_address();
        let amount = storage::get_balance(&env, &this);
        if amount > 0 {
            ledger::transfer(&env, &this, &to, amount)?;
        }
        Ok(amount)
    }

    // ── Roles ────────────────────────────────────────────────────────────────

    pub fn has_role(env: Env, role: Role, account: Address) -> bool {
        authorization::has_role(&env, role, &account)
    }

    pub fn grant_role(
        env: Env,
        caller: Address,
        role: Role,
        account: Address,
    ) -> Result<(), ContractError> {
        authorization::grant_role(&env, &caller, role, &account)?;
        Ok(())
    }

    pub fn revoke_role(
        env: Env,
        caller: Address,
        role: Role,
        account: Address,
    ) -> Result<(), ContractError> {
        authorization::revoke_role(&env, &caller, role, &account)?;
        Ok(())
    }

    pub fn renounce_role(env: Env, account: Address, role: Role) -> Result<(), ContractError> {
        authorization::renounce_role(&env, &account, role)?;
        Ok(())
    }
}

#[cfg(test)]
mod test;
