//! Common constants used across civic governance contracts
//!
//! Storage lifetimes, token denomination and batch limits live here so every
//! contract agrees on them.

// ===== Accounts =====

/// Strkey of the all-zero ed25519 account. Stands in for the null address:
/// it can never sign, so it is never a valid candidate, owner or recipient.
pub const ZERO_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

// ===== Ledger TTL Constants =====
// At ~5s per ledger: one day ≈ 17,280 ledgers.

/// One day worth of ledgers
pub const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage is bumped to 30 days whenever it drops below 29
pub const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Governance records (positions, votes, credentials, balances) stay
/// queryable for audit long after they close.
pub const PERSISTENT_BUMP_AMOUNT: u32 = 365 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - 30 * DAY_IN_LEDGERS;

// ===== Token Constants =====

/// Decimal places of the governance token (Stellar convention)
pub const TOKEN_DECIMALS: u32 = 7;

/// Raw units per whole token
pub const TOKEN_UNIT: i128 = 10_000_000;

// ===== Batch Constants =====

/// Maximum recipients per airdrop call
pub const MAX_BATCH: u32 = 100;
