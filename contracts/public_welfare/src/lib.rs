//! Public welfare board
//!
//! Owner-managed yes/no proposals. Proposal ids come from an internal
//! counter starting at 0. A proposal can be closed and opened again any
//! number of times; the record of who voted is kept across reopening, so a
//! citizen still votes at most once per proposal.

#![no_std]

mod storage;
mod types;

use authorization::{get_owner, has_owner, initialize_owner, require_owner};
use shared::eligibility::check_eligibility;
use shared::errors::ContractError;
use shared::storage::bump_instance;
use shared::validation::require_account;
use shared::vote_cost::{check_vote_cost, collect_vote_cost, validate_vote_cost};
use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Symbol};

pub use shared::vote_cost::VoteCost;
pub use types::{Proposal, ProposalResult, ProposalView, WelfareConfig};

#[contract]
pub struct PublicWelfareContract;

#[contractimpl]
impl PublicWelfareContract {
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
            &WelfareConfig {
                token,
                citizen_id,
                vote_cost,
            },
        );
        bump_instance(&env);
        Ok(())
    }

    // ── Administration ───────────────────────────────────────────────────────

    /// Create an active proposal and return its id.
    pub fn create_proposal(
        env: Env,
        caller: Address,
        title: String,
        details: String,
    ) -> Result<u64, ContractError> {
        require_owner(&env, &caller)?;

        let id = storage::get_next_proposal_id(&env);
        let next = id.checked_add(1).ok_or(ContractError::Overflow)?;

        storage::save_proposal(
            &env,
            &Proposal {
                id,
                title: title.clone(),
                details,
                active: true,
                for_votes: 0,
                against_votes: 0,
            },
        );
        storage::set_next_proposal_id(&env, next);
        bump_instance(&env);

        env.events()
            .publish((Symbol::new(&env, "proposal_created"), id), title);
        Ok(id)
    }

    pub fn open_proposal(env: Env, caller: Address, proposal_id: u64) -> Result<(), ContractError> {
        require_owner(&env, &caller)?;

        let mut proposal = storage::get_proposal(&env, proposal_id)?;
        if proposal.active {
            return Err(ContractError::AlreadyOpen);
        }

        proposal.active = true;
        storage::save_proposal(&env, &proposal);

        env.events()
            .publish((Symbol::new(&env, "proposal_opened"), proposal_id), caller);
        Ok(())
    }

    pub fn close_proposal(env: Env, caller: Address, proposal_id: u64) -> Result<(), ContractError> {
        require_owner(&env, &caller)?;

        let mut proposal = storage::get_proposal(&env, proposal_id)?;
        if !proposal.active {
            return Err(ContractError::AlreadyClosed);
        }

        proposal.active = false;
        storage::save_proposal(&env, &proposal);

        env.events().publish(
            (Symbol::new(&env, "proposal_closed"), proposal_id),
            (proposal.for_votes, proposal.against_votes),
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

    pub fn vote(
        env: Env,
        voter: Address,
        proposal_id: u64,
        support: bool,
    ) -> Result<(), ContractError> {
        voter.require_auth();

        let mut proposal = storage::get_proposal(&env, proposal_id)?;
        if !proposal.active {
            return Err(ContractError::ProposalClosed);
        }

        let config = storage::get_config(&env)?;
        let balance = match check_eligibility(&env, &config.citizen_id, &config.token, &voter) {
            Ok(balance) => balance,
            Err(err) => {
                log!(&env, "welfare vote rejected: ineligible voter", voter, proposal_id);
                return Err(err);
            }
        };

        if storage::has_voted(&env, proposal_id, &voter) {
            return Err(ContractError::AlreadyVoted);
        }
        if let Err(err) = check_vote_cost(&config.vote_cost, balance) {
            log!(&env, "welfare vote rejected: balance below vote cost", voter, balance);
            return Err(err);
        }

        if support {
            proposal.for_votes = proposal
                .for_votes
                .checked_add(1)
                .ok_or(ContractError::Overflow)?;
        } else {
            proposal.against_votes = proposal
                .against_votes
                .checked_add(1)
                .ok_or(ContractError::Overflow)?;
        }

        storage::save_proposal(&env, &proposal);
        storage::set_voted(&env, proposal_id, &voter);

        collect_vote_cost(&env, &config.token, &voter, &config.vote_cost);

        env.events().publish(
            (Symbol::new(&env, "voted"), proposal_id, voter),
            support,
        );
        Ok(())
    }

    // ── Reads ────────────────────────────────────────────────────────────────

    pub fn proposals(env: Env, proposal_id: u64) -> ProposalView {
        match storage::get_proposal(&env, proposal_id) {
            Ok(proposal) => ProposalView {
                title: proposal.title,
                details: proposal.details,
                active: proposal.active,
                exists: true,
                for_votes: proposal.for_votes,
                against_votes: proposal.against_votes,
            },
            Err(_) => ProposalView {
                title: String::from_str(&env, ""),
                details: String::from_str(&env, ""),
                active: false,
                exists: false,
                for_votes: 0,
                against_votes: 0,
            },
        }
    }

    /// `(for_votes, against_votes)`
    pub fn get_tally(env: Env, proposal_id: u64) -> Result<(u32, u32), ContractError> {
        let proposal = storage::get_proposal(&env, proposal_id)?;
        Ok((proposal.for_votes, proposal.against_votes))
    }

    pub fn current_result(env: Env, proposal_id: u64) -> Result<ProposalResult, ContractError> {
        let proposal = storage::get_proposal(&env, proposal_id)?;
        Ok(ProposalResult {
            title: proposal.title,
            for_votes: proposal.for_votes,
            against_votes: proposal.against_votes,
            active: proposal.active,
            for_leading: proposal.for_votes > proposal.against_votes,
        })
    }

    pub fn has_voted(env: Env, proposal_id: u64, voter: Address) -> bool {
        storage::has_voted(&env, proposal_id, &voter)
    }

    pub fn next_proposal_id(env: Env) -> u64 {
        storage::get_next_proposal_id(&env)
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
