//! Validation helper utilities for civic governance contracts
//!
//! This module provides reusable validation functions that are used across
//! all contracts to ensure consistency in input validation.

use crate::constants::{MAX_BATCH, ZERO_ACCOUNT};
use crate::errors::ContractError;
use soroban_sdk::{Address, Env, String};

// ===== Address Validation =====

/// The null account used as "no address" (winner of an empty tally, etc.)
pub fn zero_account(env: &Env) -> Address {
    Address::from_string(&String::from_str(env, ZERO_ACCOUNT))
}

/// Check whether an address is the null account
pub fn is_zero_account(env: &Env, address: &Address) -> bool {
    *address == zero_account(env)
}

/// Validate that an address is a real account
///
/// # Returns
/// `Ok(())` if valid, `Err(ContractError::ZeroAddress)` for the null account
pub fn require_account(env: &Env, address: &Address) -> Result<(), ContractError> {
    if is_zero_account(env, address) {
        return Err(ContractError::ZeroAddress);
    }
    Ok(())
}

// ===== Amount Validation =====

/// Validate that an amount is positive
pub fn validate_positive_amount(amount: i128) -> Result<(), ContractError> {
    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }
    Ok(())
}

/// Validate that sufficient funds are available
pub fn validate_sufficient_balance(balance: i128, required: i128) -> Result<(), ContractError> {
    if balance < required {
        return Err(ContractError::InsufficientBalance);
    }
    Ok(())
}

// ===== Batch Validation =====

/// Validate the shape of a recipients/amounts batch
pub fn validate_batch(recipients: u32, amounts: u32) -> Result<(), ContractError> {
    if recipients != amounts {
        return Err(ContractError::LengthMismatch);
    }
    if recipients == 0 {
        return Err(ContractError::EmptyBatch);
    }
    if recipients > MAX_BATCH {
        return Err(ContractError::BatchTooLarge);
    }
    Ok(())
}

// ===== Arithmetic Validation =====

/// Safely add two amounts, returning error on overflow
pub fn safe_add(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_add(b).ok_or(ContractError::Overflow)
}

/// Safely subtract two amounts, returning error when the balance would go negative
pub fn safe_sub(a: i128, b: i128) -> Result<i128, ContractError> {
    match a.checked_sub(b) {
        Some(v) if v >= 0 => Ok(v),
        _ => Err(ContractError::InsufficientBalance),
    }
}

/// Safely multiply two amounts, returning error on overflow
pub fn safe_mul(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_mul(b).ok_or(ContractError::Overflow)
}

/// Convert a whole-token amount into raw units for a token with `decimals` places
pub fn whole_to_raw(amount_whole: i128, decimals: u32) -> Result<i128, ContractError> {
    validate_positive_amount(amount_whole)?;
    let unit = 10i128
        .checked_pow(decimals)
        .ok_or(ContractError::Overflow)?;
    safe_mul(amount_whole, unit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::Address as _;

    #[test]
    fn test_zero_account_is_rejected() {
        let env = Env::default();
        let zero = zero_account(&env);
        let real = Address::generate(&env);

        assert!(is_zero_account(&env, &zero));
        assert_eq!(require_account(&env, &zero), Err(ContractError::ZeroAddress));
        assert_eq!(require_account(&env, &real), Ok(()));
    }

    #[test]
    fn test_zero_account_is_a_full_strkey() {
        let env = Env::default();
        assert_eq!(ZERO_ACCOUNT.len(), 56);
        assert_eq!(
            zero_account(&env).to_string(),
            String::from_str(&env, ZERO_ACCOUNT)
        );
    }

    #[test]
    fn test_batch_shape() {
        assert_eq!(validate_batch(2, 3), Err(ContractError::LengthMismatch));
        assert_eq!(validate_batch(0, 0), Err(ContractError::EmptyBatch));
        assert_eq!(validate_batch(MAX_BATCH + 1, MAX_BATCH + 1), Err(ContractError::BatchTooLarge));
        assert_eq!(validate_batch(3, 3), Ok(()));
    }

    #[test]
    fn test_amount_helpers() {
        assert_eq!(validate_positive_amount(0), Err(ContractError::InvalidAmount));
        assert_eq!(whole_to_raw(5, 7), Ok(50_000_000));
        assert_eq!(whole_to_raw(-1, 7), Err(ContractError::InvalidAmount));
        assert_eq!(safe_sub(1, 2), Err(ContractError::InsufficientBalance));
        assert_eq!(safe_add(i128::MAX, 1), Err(ContractError::Overflow));
    }
}
