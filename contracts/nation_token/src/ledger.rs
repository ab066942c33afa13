use soroban_sdk::{symbol_short, Address, Env};

use shared::errors::ContractError;
use shared::validation::{require_account, safe_add, safe_sub, validate_positive_amount};

use crate::storage;

pub fn mint(env: &Env, to: &Address, amount: i128) -> Result<(), ContractError> {
    validate_positive_amount(amount)?;
    require_account(env, to)?;

    let supply = safe_add(storage::get_total_supply(env), amount)?;
    let balance = safe_add(storage::get_balance(env, to), amount)?;

    storage::set_total_supply(env, supply);
    storage::set_balance(env, to, balance);

    env.events()
        .publish((symbol_short!("mint"), to.clone()), amount);

    Ok(())
}

pub fn burn(env: &Env, from: &Address, amount: i128) -> Result<(), ContractError> {
    validate_positive_amount(amount)?;

    let balance = safe_sub(storage::get_balance(env, from), amount)?;
    let supply = safe_sub(storage::get_total_supply(env), amount)?;

    storage::set_balance(env, from, balance);
    storage::set_total_supply(env, supply);

    env.events()
        .publish((symbol_short!("burn"), from.clone()), amount);

    Ok(())
}

pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), ContractError> {
    validate_positive_amount(amount)?;
    require_account(env, to)?;

    let from_balance = safe_sub(storage::get_balance(env, from), amount)?;
    storage::set_balance(env, from, from_balance);

    let to_balance = safe_add(storage::get_balance(env, to), amount)?;
    storage::set_balance(env, to, to_balance);

    env.events().publish(
        (symbol_short!("transfer"), from.clone(), to.clone()),
        amount,
    );

    Ok(())
}

pub fn approve(env: &Env, owner: &Address, spender: &Address, amount: i128) -> Result<(), ContractError> {
    if amount < 0 {
        return Err(ContractError::InvalidAmount);
    }

    storage::set_allowance(env, owner, spender, amount);

    env.events().publish(
        (symbol_short!("approve"), owner.clone(), spender.clone()),
        amount,
    );

    Ok(())
}

pub fn spend_allowance(
    env: &Env,
    owner: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    validate_positive_amount(amount)?;

    let allowance = storage::get_allowance(env, owner, spender);
    if allowance < amount {
        return Err(ContractError::InsufficientAllowance);
    }

    storage::set_allowance(env, owner, spender, allowance - amount);
    Ok(())
}
