use shared::vote_cost::VoteCost;
use soroban_sdk::{contracttype, Address, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WelfareConfig {
    pub token: Address,
    pub citizen_id: Address,
    pub vote_cost: VoteCost,
}

/// A yes/no ballot item. Unlike positions, proposals may be reopened.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub id: u64,
    pub title: String,
    pub details: String,
    pub active: bool,
    pub for_votes: u32,
    pub against_votes: u32,
}

/// Flat read of a proposal id. Unknown ids read as `exists = false`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalView {
    pub title: String,
    pub details: String,
    pub active: bool,
    pub exists: bool,
    pub for_votes: u32,
    pub against_votes: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalResult {
    pub title: String,
    pub for_votes: u32,
    pub against_votes: u32,
    pub active: bool,
    /// strictly more FOR than AGAINST
    pub for_leading: bool,
}
