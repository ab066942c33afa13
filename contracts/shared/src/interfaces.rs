//! Narrow cross-contract interfaces consumed by the governance contracts
//!
//! Contracts talk to the identity registry and the governance token only
//! through these traits. The generated clients let a contract call any
//! deployment that exposes the same functions without linking its crate.

use soroban_sdk::{contractclient, Address, Env};

/// Read side of the soulbound identity registry
#[contractclient(name = "IdentityRegistryClient")]
pub trait IdentityRegistryInterface {
    /// True when `account` currently holds a citizen credential
    fn holds_credential(env: Env, account: Address) -> bool;
}

/// Subset of the governance token used by elections and airdrops
#[contractclient(name = "GovernanceTokenClient")]
pub trait GovernanceTokenInterface {
    fn balance(env: Env, id: Address) -> i128;

    fn decimals(env: Env) -> u32;

    /// Burn `amount` raw units held by `from`; requires `from` auth
    fn burn(env: Env, from: Address, amount: i128);

    fn transfer(env: Env, from: Address, to: Address, amount: i128);

    /// Mint raw units; `minter` must hold the minter role on the token
    fn mint_raw(env: Env, minter: Address, to: Address, amount: i128);
}
