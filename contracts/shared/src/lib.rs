#![no_std]
//! # Shared Civic Governance Library
//!
//! Reusable errors, constants, validation helpers and cross-contract
//! interfaces for the identity registry, governance token, election engine,
//! welfare board and airdropper contracts.
//!
//! ## Modules
//!
//! - `errors` - Unified error codes used across contracts
//! - `constants` - Storage lifetimes, token denomination, batch limits
//! - `validation` - Reusable validation helper functions
//! - `interfaces` - Client traits for the identity registry and token
//! - `eligibility` - Credential + balance voting gate
//! - `storage` - TTL extension helpers
//! - `vote_cost` - Free or burn-per-vote policy
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! shared = { path = "../shared" }
//! ```
//!
//! ```rust,ignore
//! use shared::errors::ContractError;
//! use shared::eligibility::check_eligibility;
//! use shared::validation::require_account;
//! ```

pub mod constants;
pub mod eligibility;
pub mod errors;
pub mod interfaces;
pub mod storage;
pub mod validation;
pub mod vote_cost;

// Re-export commonly used items
pub use eligibility::{check_eligibility, is_eligible};
pub use errors::ContractError;
pub use interfaces::{GovernanceTokenClient, IdentityRegistryClient};
pub use validation::{
    is_zero_account, require_account, safe_add, safe_mul, safe_sub, validate_batch,
    validate_positive_amount, whole_to_raw, zero_account,
};
pub use vote_cost::VoteCost;
