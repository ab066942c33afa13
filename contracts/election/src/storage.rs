use soroban_sdk::{contracttype, Address, Env, Vec};

use shared::errors::ContractError;
use shared::storage::bump_persistent;

use crate::types::{ElectionConfig, Position};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    /// Append-only list of created position ids
    PositionIds,
    Position(u64),
    /// (position, candidate) -> tally
    Votes(u64, Address),
    /// (position, voter) -> voted flag
    Voted(u64, Address),
}

// ── Config ───────────────────────────────────────────────────────────────────

pub fn get_config(env: &Env) -> Result<ElectionConfig, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(ContractError::NotInitialized)
}

pub fn set_config(env: &Env, config: &ElectionConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

// ── Positions ────────────────────────────────────────────────────────────────

pub fn has_position(env: &Env, id: u64) -> bool {
    env.storage().persistent().has(&DataKey::Position(id))
}

pub fn get_position(env: &Env, id: u64) -> Result<Position, ContractError> {
    env.storage()
        .persistent()
        .get(&DataKey::Position(id))
        .ok_or(ContractError::NoSuchPosition)
}

pub fn save_position(env: &Env, position: &Position) {
    let key = DataKey::Position(position.id);
    env.storage().persistent().set(&key, position);
    bump_persistent(env, &key);
}

pub fn get_position_ids(env: &Env) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::PositionIds)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn push_position_id(env: &Env, id: u64) {
    let mut ids = get_position_ids(env);
    ids.push_back(id);
    env.storage().persistent().set(&DataKey::PositionIds, &ids);
    bump_persistent(env, &DataKey::PositionIds);
}

// ── Ballots ──────────────────────────────────────────────────────────────────

pub fn get_votes(env: &Env, id: u64, candidate: &Address) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::Votes(id, candidate.clone()))
        .unwrap_or(0)
}

pub fn set_votes(env: &Env, id: u64, candidate: &Address, count: u32) {
    let key = DataKey::Votes(id, candidate.clone());
    env.storage().persistent().set(&key, &count);
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
