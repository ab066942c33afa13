//! Common error types for civic governance contracts
//!
//! This module defines a unified set of error codes that are used across all
//! contracts in the workspace so a client sees the same code for the same
//! failure no matter which contract produced it.

use soroban_sdk::contracterror;

/// Comprehensive error type for civic governance contracts
///
/// All errors are assigned unique codes for easy identification and debugging.
/// Error ranges are organized by category:
/// - 1-19: General errors
/// - 20-29: Ownership / role errors
/// - 30-49: Election errors
/// - 50-59: Welfare board errors
/// - 60-69: Identity registry errors
/// - 70-79: Token errors
/// - 80-89: Airdrop errors
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    // ===== General Errors (1-19) =====
    /// Contract not initialized
    NotInitialized = 1,

    /// Contract already initialized
    AlreadyInitialized = 2,

    /// Amount must be strictly positive
    InvalidAmount = 3,

    /// Arithmetic overflow occurred
    Overflow = 4,

    /// The null account was supplied where a real account is required
    ZeroAddress = 5,

    // ===== Ownership / Role Errors (20-29) =====
    /// Caller is not the stored owner
    NotOwner = 20,

    /// Caller lacks the role required for this operation
    MissingRole = 21,

    // ===== Election Errors (30-49) =====
    /// Position id was never created
    NoSuchPosition = 30,

    /// Position id is already taken
    AlreadyExists = 31,

    /// Position or proposal has already been closed
    AlreadyClosed = 32,

    /// Position is closed for votes and candidate additions
    PositionClosed = 33,

    /// Candidate already listed, or null account in the initial list
    DuplicateCandidate = 34,

    /// Vote cast for an account that is not on the candidate list
    NotACandidate = 35,

    /// Voter holds no citizen credential
    NotACitizen = 36,

    /// Voter holds no governance tokens (or fewer than the vote cost)
    NoTokens = 37,

    /// Voter already voted on this position or proposal
    AlreadyVoted = 38,

    // ===== Welfare Board Errors (50-59) =====
    /// Proposal id was never created
    NoSuchProposal = 50,

    /// Proposal is closed for votes
    ProposalClosed = 51,

    /// Proposal is already open
    AlreadyOpen = 52,

    // ===== Identity Registry Errors (60-69) =====
    /// Account already holds a credential
    AlreadyCitizen = 60,

    /// Credential id was never issued or has been burned
    NoSuchCredential = 61,

    /// Caller does not hold the credential it tried to act on
    NotCredentialHolder = 62,

    /// Credentials cannot be transferred
    Soulbound = 63,

    // ===== Token Errors (70-79) =====
    /// Balance too low for the requested debit
    InsufficientBalance = 70,

    /// Allowance too low for the requested spend
    InsufficientAllowance = 71,

    // ===== Airdrop Errors (80-89) =====
    /// Recipients and amounts differ in length
    LengthMismatch = 80,

    /// Batch carried no recipients
    EmptyBatch = 81,

    /// Batch exceeds the per-call recipient limit
    BatchTooLarge = 82,
}

/// Detailed error message provider
impl ContractError {
    /// Get a human-readable description of the error
    pub fn message(&self) -> &str {
        match self {
            // General
            ContractError::NotInitialized => "not initialized",
            ContractError::AlreadyInitialized => "already initialized",
            ContractError::InvalidAmount => "amount must be positive",
            ContractError::Overflow => "arithmetic overflow",
            ContractError::ZeroAddress => "zero addr",

            // Ownership / roles
            ContractError::NotOwner => "not owner",
            ContractError::MissingRole => "missing role",

            // Election
            ContractError::NoSuchPosition => "no position",
            ContractError::AlreadyExists => "position exists",
            ContractError::AlreadyClosed => "already closed",
            ContractError::PositionClosed => "position closed",
            ContractError::DuplicateCandidate => "already candidate",
            ContractError::NotACandidate => "not a candidate",
            ContractError::NotACitizen => "not a citizen",
            ContractError::NoTokens => "no tokens",
            ContractError::AlreadyVoted => "already voted",

            // Welfare board
            ContractError::NoSuchProposal => "no proposal",
            ContractError::ProposalClosed => "proposal closed",
            ContractError::AlreadyOpen => "already open",

            // Identity registry
            ContractError::AlreadyCitizen => "already a citizen",
            ContractError::NoSuchCredential => "no such credential",
            ContractError::NotCredentialHolder => "not credential holder",
            ContractError::Soulbound => "soulbound: non-transferable",

            // Token
            ContractError::InsufficientBalance => "transfer amount exceeds balance",
            ContractError::InsufficientAllowance => "insufficient allowance",

            // Airdrop
            ContractError::LengthMismatch => "length mismatch",
            ContractError::EmptyBatch => "empty batch",
            ContractError::BatchTooLarge => "batch too large",
        }
    }
}
