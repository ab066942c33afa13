use shared::vote_cost::VoteCost;
use soroban_sdk::{contracttype, Address, String, Vec};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ElectionConfig {
    /// Governance token consulted for balances (and burns)
    pub token: Address,
    /// Identity registry consulted for credentials
    pub citizen_id: Address,
    pub vote_cost: VoteCost,
}

/// An electable office. A stored record means the position exists; it is
/// never removed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Position {
    pub id: u64,
    pub name: String,
    /// true from creation until `close_position`, never reset
    pub active: bool,
    /// insertion order, no duplicates, never the null account
    pub candidates: Vec<Address>,
    /// number of accounts that voted; equals the sum of candidate tallies
    pub total_votes: u32,
}

/// Flat read of a position id. Unknown ids read as `exists = false`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PositionView {
    pub name: String,
    pub active: bool,
    pub exists: bool,
}
