#![cfg(test)]

use soroban_sdk::{testutils::Address as _, Address, Env, String};

use shared::errors::ContractError;
use shared::validation::zero_account;

use crate::{CitizenIdContract, CitizenIdContractClient};

// ── Test Helpers ─────────────────────────────────────────────────────────────

fn setup_env() -> (Env, CitizenIdContractClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(CitizenIdContract, ());
    let client = CitizenIdContractClient::new(&env, &contract_id);
    let owner = Address::generate(&env);
    client.initialize(&owner);

    (env, client, owner)
}

// ── Initialization Tests ─────────────────────────────────────────────────────

#[test]
fn test_metadata_and_owner() {
    let (env, client, owner) = setup_env();

    assert_eq!(client.name(), String::from_str(&env, "CitizenID"));
    assert_eq!(client.symbol(), String::from_str(&env, "CID"));
    assert_eq!(client.owner(), owner);
    assert_eq!(client.next_id(), 0);
}

#[test]
fn test_initialize_twice_fails() {
    let (_env, client, owner) = setup_env();
    assert_eq!(client.try_initialize(&owner), Err(Ok(ContractError::AlreadyInitialized)));
}

// ── Issuance Tests ───────────────────────────────────────────────────────────

#[test]
fn test_owner_mints_credential() {
    let (env, client, owner) = setup_env();
    let alice = Address::generate(&env);

    assert!(!client.holds_credential(&alice));
    let id = client.mint_citizen(&owner, &alice);

    assert_eq!(id, 1);
    assert!(client.holds_credential(&alice));
    assert_eq!(client.balance_of(&alice), 1);
    assert_eq!(client.owner_of(&id), alice);
    assert_eq!(client.credential_of(&alice), Some(1));
    assert_eq!(client.next_id(), 1);
    assert_eq!(client.total_citizens(), 1);
}

#[test]
fn test_self_registration_assigns_sequential_ids() {
    let (env, client, owner) = setup_env();
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    assert_eq!(client.register_citizen(&alice), 1);
    assert_eq!(client.mint_citizen(&owner, &bob), 2);
    assert_eq!(client.next_id(), 2);
}

#[test]
fn test_one_credential_per_account() {
    let (env, client, owner) = setup_env();
    let alice = Address::generate(&env);

    client.register_citizen(&alice);
    assert_eq!(client.try_register_citizen(&alice), Err(Ok(ContractError::AlreadyCitizen)));
    assert_eq!(client.try_mint_citizen(&owner, &alice), Err(Ok(ContractError::AlreadyCitizen)));
    assert_eq!(client.balance_of(&alice), 1);
}

#[test]
fn test_non_owner_cannot_mint() {
    let (env, client, _owner) = setup_env();
    let mallory = Address::generate(&env);

    assert_eq!(client.try_mint_citizen(&mallory, &mallory), Err(Ok(ContractError::NotOwner)));
    assert!(!client.holds_credential(&mallory));
}

#[test]
fn test_zero_account_cannot_be_citizen() {
    let (env, client, owner) = setup_env();
    let zero = zero_account(&env);

    assert_eq!(client.try_mint_citizen(&owner, &zero), Err(Ok(ContractError::ZeroAddress)));
}

// ── Burn / Soulbound Tests ───────────────────────────────────────────────────

#[test]
fn test_holder_burns_and_can_reregister() {
    let (env, client, _owner) = setup_env();
    let alice = Address::generate(&env);

    let id = client.register_citizen(&alice);
    client.burn(&alice, &id);

    assert!(!client.holds_credential(&alice));
    assert_eq!(client.total_citizens(), 0);
    assert_eq!(client.try_owner_of(&id), Err(Ok(ContractError::NoSuchCredential)));

    assert_eq!(client.register_citizen(&alice), 2);
}

#[test]
fn test_only_holder_burns() {
    let (env, client, _owner) = setup_env();
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    let id = client.register_citizen(&alice);
    assert_eq!(client.try_burn(&bob, &id), Err(Ok(ContractError::NotCredentialHolder)));
    assert_eq!(client.try_burn(&bob, &99), Err(Ok(ContractError::NoSuchCredential)));
    assert!(client.holds_credential(&alice));
}

#[test]
fn test_credentials_are_soulbound() {
    let (env, client, _owner) = setup_env();
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    let id = client.register_citizen(&alice);
    assert_eq!(client.try_transfer(&alice, &bob, &id), Err(Ok(ContractError::Soulbound)));
    assert_eq!(client.owner_of(&id), alice);
}

// ── Ownership Tests ──────────────────────────────────────────────────────────

#[test]
fn test_transfer_ownership() {
    let (env, client, owner) = setup_env();
    let next = Address::generate(&env);
    let citizen = Address::generate(&env);

    client.transfer_ownership(&owner, &next);
    assert_eq!(client.owner(), next);
    assert_eq!(client.try_mint_citizen(&owner, &citizen), Err(Ok(ContractError::NotOwner)));
    client.mint_citizen(&next, &citizen);
}

#[test]
fn test_initialize_requires_owner_auth() {
    let env = Env::default();
    let owner = Address::generate(&env);
    let contract_id = env.register(CitizenIdContract, ());
    let client = CitizenIdContractClient::new(&env, &contract_id);

    assert!(client.try_initialize(&owner).is_err());
    assert_eq!(client.try_owner(), Err(Ok(ContractError::NotInitialized)));
}
