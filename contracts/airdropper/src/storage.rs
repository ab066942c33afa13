use soroban_sdk::{contracttype, Address, Env};

use shared::errors::ContractError;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AirdropConfig {
    pub token: Address,
    pub citizen_id: Address,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
}

pub fn get_config(env: &Env) -> Result<AirdropConfig, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(ContractError::NotInitialized)
}

pub fn set_config(env: &Env, config: &AirdropConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}
