//! Authorization Module for the Civic Governance contracts
//!
//! Two access-control models share this crate:
//! - a single transferable owner, compared by equality at the entry of every
//!   administrative call (identity registry, election engine, welfare board,
//!   airdropper)
//! - a role set per address for the governance token, where an account may
//!   hold several roles at once (admin, minter)
//!
//! Every privileged call first proves the caller's identity with Soroban's
//! `require_auth` and then checks stored state.

#![no_std]

use shared::errors::ContractError;
use shared::storage::bump_persistent;
use shared::validation::require_account;
use soroban_sdk::{contracttype, symbol_short, Address, Env};

/// Token-level role definitions
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum Role {
    /// Grants and revokes roles, sweeps the token's own balance
    Admin,
    /// May mint new supply
    Minter,
}

/// Storage keys for ownership and role membership
#[contracttype]
#[derive(Clone)]
pub enum AuthKey {
    /// Single administrative account
    Owner,
    /// Role membership flag for (role, account)
    Member(Role, Address),
}

/// Authorization errors
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AuthError {
    NotOwner,
    NotInitialized,
    ZeroAddress,
    MissingRole,
}

impl From<AuthError> for ContractError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::NotOwner => ContractError::NotOwner,
            AuthError::NotInitialized => ContractError::NotInitialized,
            AuthError::ZeroAddress => ContractError::ZeroAddress,
            AuthError::MissingRole => ContractError::MissingRole,
        }
    }
}

// ===== Single owner =====

/// Store the initial owner (call once during contract initialization)
pub fn initialize_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&AuthKey::Owner, owner);
}

pub fn has_owner(env: &Env) -> bool {
    env.storage().instance().has(&AuthKey::Owner)
}

/// Get the owner address
pub fn get_owner(env: &Env) -> Result<Address, AuthError> {
    env.storage()
        .instance()
        .get(&AuthKey::Owner)
        .ok_or(AuthError::NotInitialized)
}

/// Guard clause for administrative calls: the caller must sign and must be
/// the stored owner.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), AuthError> {
    caller.require_auth();

    let owner = get_owner(env)?;
    if *caller != owner {
        return Err(AuthError::NotOwner);
    }
    Ok(())
}

/// Hand the owner field to `new_owner`. Returns the previous owner.
pub fn transfer_ownership(
    env: &Env,
    caller: &Address,
    new_owner: &Address,
) -> Result<Address, AuthError> {
    require_owner(env, caller)?;
    require_account(env, new_owner).map_err(|_| AuthError::ZeroAddress)?;

    env.storage().instance().set(&AuthKey::Owner, new_owner);

    env.events().publish(
        (symbol_short!("own_xfer"), caller.clone()),
        new_owner.clone(),
    );

    Ok(caller.clone())
}

// ===== Roles =====

/// Check if an address holds a specific role
pub fn has_role(env: &Env, role: Role, account: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&AuthKey::Member(role, account.clone()))
        .unwrap_or(false)
}

/// Require that the caller holds a specific role (after proving identity)
pub fn require_role(env: &Env, account: &Address, role: Role) -> Result<(), AuthError> {
    account.require_auth();

    if has_role(env, role, account) {
        Ok(())
    } else {
        Err(AuthError::MissingRole)
    }
}

/// Add `account` to `role` without any check. Used during initialization.
pub fn set_role(env: &Env, role: Role, account: &Address) {
    let key = AuthKey::Member(role, account.clone());
    env.storage().persistent().set(&key, &true);
    bump_persistent(env, &key);
}

/// Grant a role to an address (admin only)
pub fn grant_role(
    env: &Env,
    caller: &Address,
    role: Role,
    account: &Address,
) -> Result<(), AuthError> {
    require_role(env, caller, Role::Admin)?;
    require_account(env, account).map_err(|_| AuthError::ZeroAddress)?;

    if !has_role(env, role, account) {
        set_role(env, role, account);
        env.events()
            .publish((symbol_short!("role_grnt"), role, account.clone()), caller.clone());
    }

    Ok(())
}

/// Revoke a role from an address (admin only)
pub fn revoke_role(
    env: &Env,
    caller: &Address,
    role: Role,
    account: &Address,
) -> Result<(), AuthError> {
    require_role(env, caller, Role::Admin)?;
    remove_role(env, role, account, caller);
    Ok(())
}

/// Drop one of the caller's own roles
pub fn renounce_role(env: &Env, account: &Address, role: Role) -> Result<(), AuthError> {
    account.require_auth();
    remove_role(env, role, account, account);
    Ok(())
}

fn remove_role(env: &Env, role: Role, account: &Address, sender: &Address) {
    if has_role(env, role, account) {
        env.storage()
            .persistent()
            .remove(&AuthKey::Member(role, account.clone()));
        env.events()
            .publish((symbol_short!("role_rvk"), role, account.clone()), sender.clone());
    }
}
