#![cfg(test)]

use authorization::Role;
use soroban_sdk::{testutils::Address as _, Address, Env, String};

use shared::constants::TOKEN_UNIT;
use shared::errors::ContractError;

use crate::{NationToken, NationTokenClient};

// ── Test Helpers ─────────────────────────────────────────────────────────────

fn deploy(env: &Env, admin: &Address, initial_supply_whole: i128) -> NationTokenClient<'static> {
    let contract_id = env.register(NationToken, ());
    let client = NationTokenClient::new(env, &contract_id);
    client.initialize(
        admin,
        &String::from_str(env, "Nation Token"),
        &String::from_str(env, "NAT"),
        &initial_supply_whole,
    );
    client
}

fn setup_env() -> (Env, NationTokenClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let client = deploy(&env, &admin, 0);
    (env, client, admin)
}

// ── Deployment Tests ─────────────────────────────────────────────────────────

#[test]
fn test_metadata() {
    let (env, client, admin) = setup_env();

    assert_eq!(client.name(), String::from_str(&env, "Nation Token"));
    assert_eq!(client.symbol(), String::from_str(&env, "NAT"));
    assert_eq!(client.decimals(), 7);
    assert!(client.has_role(&Role::Admin, &admin));
    assert!(client.has_role(&Role::Minter, &admin));
}

#[test]
fn test_initial_supply_minted_to_admin() {
    let env = Env::default();
    env.mock_all_auths();
    let admin = Address::generate(&env);

    let client = deploy(&env, &admin, 1_000);
    assert_eq!(client.balance(&admin), 1_000 * TOKEN_UNIT);
    assert_eq!(client.total_supply(), 1_000 * TOKEN_UNIT);
}

#[test]
fn test_zero_initial_supply() {
    let (_env, client, admin) = setup_env();
    assert_eq!(client.balance(&admin), 0);
    assert_eq!(client.total_supply(), 0);
}

#[test]
fn test_initialize_twice_fails() {
    let (env, client, admin) = setup_env();
    let result = client.try_initialize(
        &admin,
        &String::from_str(&env, "Again"),
        &String::from_str(&env, "AGN"),
        &0,
    );
    assert_eq!(result, Err(Ok(ContractError::AlreadyInitialized)));
}

// ── Minting Tests ────────────────────────────────────────────────────────────

#[test]
fn test_minter_mints_whole_tokens() {
    let (env, client, admin) = setup_env();
    let alice = Address::generate(&env);

    client.mint_to(&admin, &alice, &100);
    assert_eq!(client.balance(&alice), 100 * TOKEN_UNIT);

    client.mint_raw(&admin, &alice, &5);
    assert_eq!(client.balance(&alice), 100 * TOKEN_UNIT + 5);
    assert_eq!(client.total_supply(), 100 * TOKEN_UNIT + 5);
}

#[test]
fn test_non_minter_cannot_mint() {
    let (env, client, _admin) = setup_env();
    let alice = Address::generate(&env);

    assert_eq!(client.try_mint_to(&alice, &alice, &100), Err(Ok(ContractError::MissingRole)));
    assert_eq!(client.balance(&alice), 0);
}

#[test]
fn test_granted_minter_can_mint_until_revoked() {
    let (env, client, admin) = setup_env();
    let minter = Address::generate(&env);
    let alice = Address::generate(&env);

    client.grant_role(&admin, &Role::Minter, &minter);
    client.mint_to(&minter, &alice, &1);
    assert_eq!(client.balance(&alice), TOKEN_UNIT);

    client.revoke_role(&admin, &Role::Minter, &minter);
    assert_eq!(client.try_mint_to(&minter, &alice, &1), Err(Ok(ContractError::MissingRole)));
}

#[test]
fn test_mint_rejects_non_positive_amount() {
    let (env, client, admin) = setup_env();
    let alice = Address::generate(&env);

    assert_eq!(client.try_mint_to(&admin, &alice, &0), Err(Ok(ContractError::InvalidAmount)));
}

// ── Transfer / Burn Tests ────────────────────────────────────────────────────

#[test]
fn test_transfer_moves_balance() {
    let env = Env::default();
    env.mock_all_auths();
    let admin = Address::generate(&env);
    let alice = Address::generate(&env);
    let client = deploy(&env, &admin, 1_000);

    client.transfer(&admin, &alice, &(100 * TOKEN_UNIT));

    assert_eq!(client.balance(&alice), 100 * TOKEN_UNIT);
    assert_eq!(client.balance(&admin), 900 * TOKEN_UNIT);
}

#[test]
fn test_transfer_exceeding_balance_fails() {
    let env = Env::default();
    env.mock_all_auths();
    let admin = Address::generate(&env);
    let alice = Address::generate(&env);
    let client = deploy(&env, &admin, 100);

    assert_eq!(
        client.try_transfer(&admin, &alice, &(200 * TOKEN_UNIT)),
        Err(Ok(ContractError::InsufficientBalance))
    );
    assert_eq!(client.balance(&admin), 100 * TOKEN_UNIT);
}

#[test]
fn test_allowance_flow() {
    let (env, client, admin) = setup_env();
    let alice = Address::generate(&env);
    let spender = Address::generate(&env);
    let bob = Address::generate(&env);

    client.mint_raw(&admin, &alice, &50);
    client.approve(&alice, &spender, &30);
    assert_eq!(client.allowance(&alice, &spender), 30);

    client.transfer_from(&spender, &alice, &bob, &20);
    assert_eq!(client.balance(&bob), 20);
    assert_eq!(client.allowance(&alice, &spender), 10);

    assert_eq!(
        client.try_burn_from(&spender, &alice, &11),
        Err(Ok(ContractError::InsufficientAllowance))
    );
    client.burn_from(&spender, &alice, &10);
    assert_eq!(client.balance(&alice), 20);
    assert_eq!(client.total_supply(), 40);
}

#[test]
fn test_burn_reduces_supply() {
    let (env, client, admin) = setup_env();
    let alice = Address::generate(&env);

    client.mint_raw(&admin, &alice, &5);
    client.burn(&alice, &1);

    assert_eq!(client.balance(&alice), 4);
    assert_eq!(client.total_supply(), 4);
    assert_eq!(client.try_burn(&alice, &5), Err(Ok(ContractError::InsufficientBalance)));
}

// ── Sweep Tests ──────────────────────────────────────────────────────────────

#[test]
fn test_admin_sweeps_contract_balance() {
    let (env, client, admin) = setup_env();
    let alice = Address::generate(&env);

    client.mint_to(&admin, &client.address, &50);
    assert_eq!(client.sweep_self(&admin, &alice), 50 * TOKEN_UNIT);
    assert_eq!(client.balance(&alice), 50 * TOKEN_UNIT);
    assert_eq!(client.balance(&client.address), 0);
}

#[test]
fn test_non_admin_cannot_sweep() {
    let (env, client, admin) = setup_env();
    let alice = Address::generate(&env);

    client.mint_to(&admin, &client.address, &50);
    assert_eq!(client.try_sweep_self(&alice, &alice), Err(Ok(ContractError::MissingRole)));
    assert_eq!(client.balance(&client.address), 50 * TOKEN_UNIT);
}

#[test]
fn test_initialize_requires_admin_auth() {
    let env = Env::default();
    let admin = Address::generate(&env);
    let contract_id = env.register(NationToken, ());
    let client = NationTokenClient::new(&env, &contract_id);

    let result = client.try_initialize(
        &admin,
        &String::from_str(&env, "Nation Token"),
        &String::from_str(&env, "NAT"),
        &100,
    );
    assert!(result.is_err());
    assert_eq!(client.try_decimals(), Err(Ok(ContractError::NotInitialized)));
    assert_eq!(client.balance(&admin), 0);
}
