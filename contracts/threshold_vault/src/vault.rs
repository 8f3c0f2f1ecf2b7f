use soroban_sdk::{contract, contractimpl, log, Address, Env, Vec};

use crate::errors::VaultError;
use crate::events;
use crate::ledger::Ledger;
use crate::storage;
use crate::types::{Config, Proposal};

#[contract]
pub struct ThresholdVault;

#[contractimpl]
impl ThresholdVault {
    /// Sets up the owner set, the approval threshold and the token the vault
    /// holds. Can only run once.
    pub fn initialize(
        env: Env,
        owners: Vec<Address>,
        threshold: u32,
        token: Address,
    ) -> Result<(), VaultError> {
        if storage::is_initialized(&env) {
            return Err(VaultError::AlreadyInitialized);
        }

        if owners.is_empty() {
            log!(&env, "must pass at least one owner");
            return Err(VaultError::InvalidConfiguration);
        }

        if threshold == 0 {
            log!(&env, "threshold cannot be 0");
            return Err(VaultError::InvalidConfiguration);
        }

        if threshold > owners.len() {
            log!(&env, "threshold cannot exceed number of owners", threshold);
            return Err(VaultError::InvalidConfiguration);
        }

        // A repeated owner would count twice towards quorum.
        for i in 0..owners.len() {
            for j in (i + 1)..owners.len() {
                if owners.get_unchecked(i) == owners.get_unchecked(j) {
                    log!(&env, "duplicate owner", owners.get_unchecked(i));
                    return Err(VaultError::InvalidConfiguration);
                }
            }
        }

        storage::write_config(
            &env,
            &Config {
                owners,
                threshold,
                token,
            },
        );
        log!(&env, "vault initialized", threshold);
        Ok(())
    }

    pub fn submit_proposal(
        env: Env,
        proposer: Address,
        amount: i128,
        destination: Address,
    ) -> Result<u64, VaultError> {
        storage::require_initialized(&env)?;
        proposer.require_auth();

        if !storage::is_owner(&env, &proposer) {
            return Err(VaultError::Unauthorized);
        }

        if amount < 0 {
            return Err(VaultError::InvalidAmount);
        }

        let proposal_id = storage::next_proposal_id(&env);
        storage::write_proposal(&env, &Proposal::new(proposal_id, destination, amount));

        events::proposal_created(&env, proposal_id);
        log!(&env, "proposal created", proposal_id, amount);
        Ok(proposal_id)
    }

    pub fn approve_proposal(env: Env, owner: Address, proposal_id: u64) -> Result<(), VaultError> {
        storage::require_initialized(&env)?;
        owner.require_auth();

        let mut proposal =
            storage::read_proposal(&env, proposal_id).ok_or(VaultError::NotFound)?;

        if !storage::is_owner(&env, &owner) {
            return Err(VaultError::Unauthorized);
        }

        if storage::has_approved(&env, proposal_id, &owner) {
            return Err(VaultError::AlreadyApproved);
        }

        if proposal.executed {
            return Err(VaultError::AlreadyExecuted);
        }

        storage::write_approval(&env, proposal_id, &owner);
        proposal.approval_count += 1;
        storage::write_proposal(&env, &proposal);

        events::proposal_approved(&env, &owner, proposal_id);
        log!(
            &env,
            "proposal approved",
            proposal_id,
            proposal.approval_count
        );
        Ok(())
    }

    /// Pays out a quorate proposal. The executed flag is persisted before
    /// the token transfer; if the transfer fails the host discards it along
    /// with the rest of the invocation.
    pub fn execute_proposal(
        env: Env,
        executor: Address,
        proposal_id: u64,
    ) -> Result<(), VaultError> {
        storage::require_initialized(&env)?;
        executor.require_auth();

        let mut proposal =
            storage::read_proposal(&env, proposal_id).ok_or(VaultError::NotFound)?;

        if !storage::is_owner(&env, &executor) {
            return Err(VaultError::Unauthorized);
        }

        if proposal.executed {
            return Err(VaultError::AlreadyExecuted);
        }

        let config = storage::read_config(&env)?;
        if !proposal.is_quorate(config.threshold) {
            log!(
                &env,
                "quorum not met",
                proposal_id,
                proposal.approval_count,
                config.threshold
            );
            return Err(VaultError::QuorumNotMet);
        }

        let ledger = Ledger::new(&env, &config.token);
        if ledger.available() < proposal.amount {
            log!(&env, "insufficient funds", proposal_id, proposal.amount);
            return Err(VaultError::InsufficientFunds);
        }

        proposal.executed = true;
        storage::write_proposal(&env, &proposal);

        ledger.pay(&proposal.destination, proposal.amount);

        events::proposal_executed(&env, proposal_id);
        log!(&env, "proposal executed", proposal_id);
        Ok(())
    }

    /// Funds the vault from any account.
    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<(), VaultError> {
        storage::require_initialized(&env)?;
        from.require_auth();

        if amount <= 0 {
            return Err(VaultError::InvalidAmount);
        }

        let config = storage::read_config(&env)?;
        Ledger::new(&env, &config.token).receive(&from, amount);

        events::deposited(&env, &from, amount);
        Ok(())
    }

    /// Never fails for an unknown id; the returned record has `exists` unset.
    pub fn get_proposal(env: Env, proposal_id: u64) -> Result<Proposal, VaultError> {
        storage::require_initialized(&env)?;
        Ok(storage::read_proposal(&env, proposal_id)
            .unwrap_or_else(|| Proposal::missing(&env, proposal_id)))
    }

    pub fn is_approved(env: Env, proposal_id: u64, owner: Address) -> Result<bool, VaultError> {
        storage::require_initialized(&env)?;
        Ok(storage::has_approved(&env, proposal_id, &owner))
    }

    pub fn is_owner(env: Env, address: Address) -> Result<bool, VaultError> {
        storage::require_initialized(&env)?;
        Ok(storage::is_owner(&env, &address))
    }

    pub fn owners(env: Env) -> Result<Vec<Address>, VaultError> {
        Ok(storage::read_config(&env)?.owners)
    }

    pub fn threshold(env: Env) -> Result<u32, VaultError> {
        Ok(storage::read_config(&env)?.threshold)
    }

    pub fn config(env: Env) -> Result<Config, VaultError> {
        storage::read_config(&env)
    }

    pub fn proposal_count(env: Env) -> Result<u64, VaultError> {
        storage::require_initialized(&env)?;
        Ok(storage::proposal_count(&env))
    }

    /// Funds currently held by the vault.
    pub fn balance(env: Env) -> Result<i128, VaultError> {
        let config = storage::read_config(&env)?;
        Ok(Ledger::new(&env, &config.token).available())
    }
}
