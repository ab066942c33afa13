//! Election engine
//!
//! Positions are electable offices identified by caller-chosen ids. Each
//! position moves one way from open to closed. Citizens holding governance
//! tokens cast one vote per position for a listed candidate; the leader is
//! the candidate with the most votes, ties going to the earliest listed.
//!
//! Credentials and balances are read live from the identity registry and the
//! token on every vote. All validation happens before the first write, so a
//! rejected call leaves no trace.

#![no_std]

mod storage;
mod types;

use authorization::{get_owner, has_owner, initialize_owner, require_owner};
use shared::eligibility::check_eligibility;
use shared::errors::ContractError;
use shared::storage::bump_instance;
use shared::validation::{is_zero_account, require_account, zero_account};
use shared::vote_cost::{check_vote_cost, collect_vote_cost, validate_vote_cost};
use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Symbol, Vec};

pub use shared::vote_cost::VoteCost;
pub use types::{ElectionConfig, Position, PositionView};

#[contract]
pub struct ElectionContract;

/// Rebuild the candidate list, rejecting repeats and the null account.
fn dedup_candidates(env: &Env, initial: &Vec<Address>) -> Result<Vec<Address>, ContractError> {
    let mut candidates = Vec::new(env);
    for candidate in initial.iter() {
        if is_zero_account(env, &candidate) || candidates.contains(&candidate) {
            return Err(ContractError::DuplicateCandidate);
        }
        candidates.push_back(candidate);
    }
    Ok(candidates)
}

#[contractimpl]
impl ElectionContract {
    pub fn initialize(
        env: Env,
        owner: Address,
        token: Address,
        citizen_id: Address,
        vote_cost: VoteCost,
    ) -> Result<(), ContractError> {
        owner.require_auth();

        if has_owner(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        require_account(&env, &owner)?;
        validate_vote_cost(&vote_cost)?;

        initialize_owner(&env, &owner);
        storage::set_config(
            &env,
            &ElectionConfig {
                token,
                citizen_id,
                vote_cost,
            },
        );
        bump_instance(&env);
        Ok(())
    }

    // ── Administration ───────────────────────────────────────────────────────

    pub fn create_position(
        env: Env,
        caller: Address,
        position_id: u64,
        name: String,
        initial_candidates: Vec<Address>,
    ) -> Result<(), ContractError> {
        require_owner(&env, &caller)?;

        if storage::has_position(&env, position_id) {
            return Err(ContractError::AlreadyExists);
        }
        let candidates = dedup_candidates(&env, &initial_candidates)?;

        storage::save_position(
            &env,
            &Position {
                id: position_id,
                name: name.clone(),
                active: true,
                candidates: candidates.clone(),
                total_votes: 0,
            },
        );
        storage::push_position_id(&env, position_id);
        bump_instance(&env);

        env.events().publish(
            (Symbol::new(&env, "position_created"), position_id),
            name,
        );
        for candidate in candidates.iter() {
            env.events().publish(
                (Symbol::new(&env, "candidate_added"), position_id),
                candidate,
            );
        }

        Ok(())
    }

    pub fn add_candidate(
        env: Env,
        caller: Address,
        position_id: u64,
        candidate: Address,
    ) -> Result<(), ContractError> {
        require_owner(&env, &caller)?;

        let mut position = storage::get_position(&env, position_id)?;
        if !position.active {
            return Err(ContractError::PositionClosed);
        }
        require_account(&env, &candidate)?;
        if position.candidates.contains(&candidate) {
            return Err(ContractError::DuplicateCandidate);
        }

        position.candidates.push_back(candidate.clone());
        storage::save_position(&env, &position);

        env.events().publish(
            (Symbol::new(&env, "candidate_added"), position_id),
            candidate,
        );
        Ok(())
    }

    pub fn close_position(env: Env, caller: Address, position_id: u64) -> Result<(), ContractError> {
        require_owner(&env, &caller)?;

        let mut position = storage::get_position(&env, position_id)?;
        if !position.active {
            return Err(ContractError::AlreadyClosed);
        }

        position.active = false;
        storage::save_position(&env, &position);

        env.events().publish(
            (Symbol::new(&env, "position_closed"), position_id),
            position.total_votes,
        );
        Ok(())
    }

    pub fn set_vote_cost(env: Env, caller: Address, vote_cost: VoteCost) -> Result<(), ContractError> {
        require_owner(&env, &caller)?;
        validate_vote_cost(&vote_cost)?;

        let mut config = storage::get_config(&env)?;
        config.vote_cost = vote_cost.clone();
        storage::set_config(&env, &config);

        env.events()
            .publish((Symbol::new(&env, "vote_cost_set"),), vote_cost);
        Ok(())
    }

    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), ContractError> {
        authorization::transfer_ownership(&env, &caller, &new_owner)?;
        Ok(())
    }

    // ── Voting ───────────────────────────────────────────────────────────────

    /// Checks run in a fixed order and the first failure wins: position
    /// exists, position open, credential, balance, not yet voted, candidate
    /// listed.
    pub fn vote(
        env: Env,
        voter: Address,
        position_id: u64,
        candidate: Address,
    ) -> Result<(), ContractError> {
        voter.require_auth();

        let mut position = storage::get_position(&env, position_id)?;
        if !position.active {
            return Err(ContractError::PositionClosed);
        }

        let config = storage::get_config(&env)?;
        let balance = match check_eligibility(&env, &config.citizen_id, &config.token, &voter) {
            Ok(balance) => balance,
            Err(err) => {
                log!(&env, "vote rejected: ineligible voter", voter, position_id);
                return Err(err);
            }
        };

        if storage::has_voted(&env, position_id, &voter) {
            return Err(ContractError::AlreadyVoted);
        }
        if !position.candidates.contains(&candidate) {
            return Err(ContractError::NotACandidate);
        }
        if let Err(err) = check_vote_cost(&config.vote_cost, balance) {
            log!(&env, "vote rejected: balance below vote cost", voter, balance);
            return Err(err);
        }

        let tally = storage::get_votes(&env, position_id, &candidate)
            .checked_add(1)
            .ok_or(ContractError::Overflow)?;
        position.total_votes = position
            .total_votes
            .checked_add(1)
            .ok_or(ContractError::Overflow)?;

        storage::set_votes(&env, position_id, &candidate, tally);
        storage::set_voted(&env, position_id, &voter);
        storage::save_position(&env, &position);

        collect_vote_cost(&env, &config.token, &voter, &config.vote_cost);

        env.events().publish(
            (Symbol::new(&env, "voted"), position_id, voter),
            candidate,
        );
        Ok(())
    }

    // ── Reads ────────────────────────────────────────────────────────────────

    /// Leading candidate and its tally. Ties go to the earliest listed
    /// candidate; with no votes cast the null account and 0 are returned.
    pub fn current_winner(env: Env, position_id: u64) -> Result<(Address, u32), ContractError> {
        let position = storage::get_position(&env, position_id)?;

        let mut winner = zero_account(&env);
        let mut best = 0u32;
        for candidate in position.candidates.iter() {
            let count = storage::get_votes(&env, position_id, &candidate);
            if count > best {
                best = count;
                winner = candidate;
            }
        }

        Ok((winner, best))
    }

    pub fn positions(env: Env, position_id: u64) -> PositionView {
        match storage::get_position(&env, position_id) {
            Ok(position) => PositionView {
                name: position.name,
                active: position.active,
                exists: true,
            },
            Err(_) => PositionView {
                name: String::from_str(&env, ""),
                active: false,
                exists: false,
            },
        }
    }

    pub fn get_position(env: Env, position_id: u64) -> Result<Position, ContractError> {
        storage::get_position(&env, position_id)
    }

    pub fn get_candidates(env: Env, position_id: u64) -> Result<Vec<Address>, ContractError> {
        Ok(storage::get_position(&env, position_id)?.candidates)
    }

    pub fn is_candidate(env: Env, position_id: u64, candidate: Address) -> bool {
        storage::get_position(&env, position_id)
            .map(|position| position.candidates.contains(&candidate))
            .unwrap_or(false)
    }

    pub fn votes(env: Env, position_id: u64, candidate: Address) -> u32 {
        storage::get_votes(&env, position_id, &candidate)
    }

    pub fn total_votes(env: Env, position_id: u64) -> Result<u32, ContractError> {
        Ok(storage::get_position(&env, position_id)?.total_votes)
    }

    pub fn has_voted(env: Env, position_id: u64, voter: Address) -> bool {
        storage::has_voted(&env, position_id, &voter)
    }

    /// Every created position id, in creation order.
    pub fn list_position_ids(env: Env) -> Vec<u64> {
        storage::get_position_ids(&env)
    }

    pub fn position_count(env: Env) -> u32 {
        storage::get_position_ids(&env).len()
    }

    pub fn is_eligible(env: Env, account: Address) -> Result<bool, ContractError> {
        let config = storage::get_config(&env)?;
        Ok(shared::eligibility::is_eligible(&env, &config.citizen_id, &config.token, &account))
    }

    pub fn vote_cost(env: Env) -> Result<VoteCost, ContractError> {
        Ok(storage::get_config(&env)?.vote_cost)
    }

    pub fn nation_token(env: Env) -> Result<Address, ContractError> {
        Ok(storage::get_config(&env)?.token)
    }

    pub fn citizen_id(env: Env) -> Result<Address, ContractError> {
        Ok(storage::get_config(&env)?.citizen_id)
    }

    pub fn owner(env: Env) -> Result<Address, ContractError> {
        Ok(get_owner(&env)?)
    }
}
