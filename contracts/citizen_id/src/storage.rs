use soroban_sdk::{contracttype, Address, Env};

use shared::storage::bump_persistent;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Last issued credential id (ids start at 1)
    NextId,
    /// Credentials currently held
    Holders,
    /// account -> credential id
    CredentialOf(Address),
    /// credential id -> account
    HolderOf(u64),
}

pub fn get_next_id(env: &Env) -> u64 {
    env.storage().instance().get(&DataKey::NextId).unwrap_or(0)
}

pub fn set_next_id(env: &Env, id: u64) {
    env.storage().instance().set(&DataKey::NextId, &id);
}

pub fn get_holders(env: &Env) -> u64 {
    env.storage().instance().get(&DataKey::Holders).unwrap_or(0)
}

pub fn set_holders(env: &Env, count: u64) {
    env.storage().instance().set(&DataKey::Holders, &count);
}

pub fn get_credential_of(env: &Env, account: &Address) -> Option<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::CredentialOf(account.clone()))
}

pub fn get_holder_of(env: &Env, token_id: u64) -> Option<Address> {
    env.storage().persistent().get(&DataKey::HolderOf(token_id))
}

pub fn save_credential(env: &Env, account: &Address, token_id: u64) {
    let by_account = DataKey::CredentialOf(account.clone());
    let by_id = DataKey::HolderOf(token_id);

    env.storage().persistent().set(&by_account, &token_id);
    env.storage().persistent().set(&by_id, account);
    bump_persistent(env, &by_account);
    bump_persistent(env, &by_id);
}

pub fn remove_credential(env: &Env, account: &Address, token_id: u64) {
    env.storage()
        .persistent()
        .remove(&DataKey::CredentialOf(account.clone()));
    env.storage().persistent().remove(&DataKey::HolderOf(token_id));
}
