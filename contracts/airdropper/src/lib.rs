//! Citizenship-gated token airdropper
//!
//! The owner distributes governance tokens to credential holders, either
//! from the airdropper's own balance or by minting fresh supply (the
//! airdropper must then hold the token's Minter role). Every recipient and
//! amount in a batch is checked before the first token moves, so a batch
//! lands entirely or not at all.

#![no_std]

mod storage;

use authorization::{get_owner, has_owner, initialize_owner, require_owner};
use shared::errors::ContractError;
use shared::interfaces::{GovernanceTokenClient, IdentityRegistryClient};
use shared::storage::bump_instance;
use shared::validation::{
    require_account, safe_add, validate_batch, validate_positive_amount,
    validate_sufficient_balance, whole_to_raw,
};
use soroban_sdk::{contract, contractimpl, log, Address, Env, Symbol, Vec};

pub use storage::AirdropConfig;

#[contract]
pub struct Airdropper;

/// Scale whole-token amounts by the token's `10^decimals`
fn scale_amounts(
    env: &Env,
    token: &Address,
    amounts_whole: &Vec<i128>,
) -> Result<Vec<i128>, ContractError> {
    let decimals = GovernanceTokenClient::new(env, token).decimals();
    let mut raw = Vec::new(env);
    for amount in amounts_whole.iter() {
        raw.push_back(whole_to_raw(amount, decimals)?);
    }
    Ok(raw)
}

/// Validate the whole batch and return the total raw amount.
fn check_batch(
    env: &Env,
    config: &AirdropConfig,
    recipients: &Vec<Address>,
    amounts: &Vec<i128>,
) -> Result<i128, ContractError> {
    validate_batch(recipients.len(), amounts.len())?;

    let registry = IdentityRegistryClient::new(env, &config.citizen_id);
    let mut total = 0i128;
    for (recipient, amount) in recipients.iter().zip(amounts.iter()) {
        require_account(env, &recipient)?;
        validate_positive_amount(amount)?;
        if !registry.holds_credential(&recipient) {
            log!(env, "airdrop rejected: recipient is not a citizen", recipient);
            return Err(ContractError::NotACitizen);
        }
        total = safe_add(total, amount)?;
    }
    Ok(total)
}

fn distribute(
    env: &Env,
    caller: &Address,
    recipients: Vec<Address>,
    amounts: Vec<i128>,
    mint: bool,
) -> Result<(), ContractError> {
    require_owner(env, caller)?;
    let config = storage::get_config(env)?;
    send(env, &config, &recipients, &amounts, mint)
}

fn distribute_whole(
    env: &Env,
    caller: &Address,
    recipients: Vec<Address>,
    amounts_whole: Vec<i128>,
    mint: bool,
) -> Result<(), ContractError> {
    require_owner(env, caller)?;
    let config = storage::get_config(env)?;
    validate_batch(recipients.len(), amounts_whole.len())?;
    let amounts = scale_amounts(env, &config.token, &amounts_whole)?;
    send(env, &config, &recipients, &amounts, mint)
}

fn send(
    env: &Env,
    config: &AirdropConfig,
    recipients: &Vec<Address>,
    amounts: &Vec<i128>,
    mint: bool,
) -> Result<(), ContractError> {
    let total = check_batch(env, config, recipients, amounts)?;

    let token = GovernanceTokenClient::new(env, &config.token);
    let this = env.current_contract_address();
    if !mint {
        validate_sufficient_balance(token.balance(&this), total)?;
    }

    for (recipient, amount) in recipients.iter().zip(amounts.iter()) {
        if mint {
            token.mint_raw(&this, &recipient, &amount);
        } else {
            token.transfer(&this, &recipient, &amount);
        }
        env.events().publish(
            (Symbol::new(env, "airdropped"), recipient),
            (amount, mint),
        );
    }
    Ok(())
}

fn single(env: &Env, recipient: Address, amount: i128) -> (Vec<Address>, Vec<i128>) {
    let mut recipients = Vec::new(env);
    recipients.push_back(recipient);
    let mut amounts = Vec::new(env);
    amounts.push_back(amount);
    (recipients, amounts)
}

#[contractimpl]
impl Airdropper {
    pub fn initialize(
        env: Env,
        owner: Address,
        token: Address,
        citizen_id: Address,
    ) -> Result<(), ContractError> {
        owner.require_auth();

        if has_owner(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        require_account(&env, &owner)?;

        initialize_owner(&env, &owner);
        storage::set_config(&env, &AirdropConfig { token, citizen_id });
        bump_instance(&env);
        Ok(())
    }

    // ── From balance ─────────────────────────────────────────────────────────

    pub fn airdrop_one(
        env: Env,
        caller: Address,
        recipient: Address,
        amount_whole: i128,
    ) -> Result<(), ContractError> {
        let (recipients, amounts) = single(&env, recipient, amount_whole);
        distribute_whole(&env, &caller, recipients, amounts, false)
    }

    pub fn airdrop_many(
        env: Env,
        caller: Address,
        recipients: Vec<Address>,
        amounts_whole: Vec<i128>,
    ) -> Result<(), ContractError> {
        distribute_whole(&env, &caller, recipients, amounts_whole, false)
    }

    pub fn airdrop_many_raw(
        env: Env,
        caller: Address,
        recipients: Vec<Address>,
        amounts: Vec<i128>,
    ) -> Result<(), ContractError> {
        distribute(&env, &caller, recipients, amounts, false)
    }

    // ── Minted ───────────────────────────────────────────────────────────────

    pub fn mint_and_airdrop_one(
        env: Env,
        caller: Address,
        recipient: Address,
        amount_whole: i128,
    ) -> Result<(), ContractError> {
        let (recipients, amounts) = single(&env, recipient, amount_whole);
        distribute_whole(&env, &caller, recipients, amounts, true)
    }

    pub fn mint_and_airdrop(
        env: Env,
        caller: Address,
        recipients: Vec<Address>,
        amounts_whole: Vec<i128>,
    ) -> Result<(), ContractError> {
        distribute_whole(&env, &caller, recipients, amounts_whole, true)
    }

    pub fn mint_and_airdrop_raw(
        env: Env,
        caller: Address,
        recipients: Vec<Address>,
        amounts: Vec<i128>,
    ) -> Result<(), ContractError> {
        distribute(&env, &caller, recipients, amounts, true)
    }

    // ── Reads ────────────────────────────────────────────────────────────────

    pub fn token(env: Env) -> Result<Address, ContractError> {
        Ok(storage::get_config(&env)?.token)
    }

    pub fn citizen_id(env: Env) -> Result<Address, ContractError> {
        Ok(storage::get_config(&env)?.citizen_id)
    }

    pub fn token_decimals(env: Env) -> Result<u32, ContractError> {
        let config = storage::get_config(&env)?;
        Ok(GovernanceTokenClient::new(&env, &config.token).decimals())
    }

    /// Raw units per whole token, `10^decimals`
    pub fn unit(env: Env) -> Result<i128, ContractError> {
        let config = storage::get_config(&env)?;
        let decimals = GovernanceTokenClient::new(&env, &config.token).decimals();
        whole_to_raw(1, decimals)
    }

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
