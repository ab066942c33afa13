use soroban_sdk::{contracttype, Address, Env};

use shared::errors::ContractError;
use shared::storage::bump_persistent;

use crate::types::{Proposal, WelfareConfig};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    /// Id handed to the next `create_proposal`
    NextProposalId,
    Proposal(u64),
    /// (proposal, voter) -> voted flag
    Voted(u64, Address),
}

pub fn get_config(env: &Env) -> Result<WelfareConfig, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(ContractError::NotInitialized)
}

pub fn set_config(env: &Env, config: &WelfareConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_next_proposal_id(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::NextProposalId)
        .unwrap_or(0)
}

pub fn set_next_proposal_id(env: &Env, id: u64) {
    env.storage().instance().set(&DataKey::NextProposalId, &id);
}

pub fn get_proposal(env: &Env, id: u64) -> Result<Proposal, ContractError> {
    env.storage()
        .persistent()
        .get(&DataKey::Proposal(id))
        .ok_or(ContractError::NoSuchProposal)
}

pub fn save_proposal(env: &Env, proposal: &Proposal) {
    let key = DataKey::Proposal(proposal.id);
    env.storage().persistent().set(&key, proposal);
    bump_persistent(env, &key);
}

pub fn has_voted(env: &Env, id: u64, voter: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Voted(id, voter.clone()))
        .unwrap_or(false)
}

pub fn set_voted(env: &Env, id: u64, voter: &Address) {
    let key = DataKey::Voted(id, voter.clone());
    env.storage().persistent().set(&key, &true);
    bump_persistent(env, &key);
}
