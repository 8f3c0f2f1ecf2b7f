use soroban_sdk::{Address, Env};

use crate::errors::VaultError;
use crate::types::{Config, DataKey, Proposal};

const INSTANCE_LIFETIME_THRESHOLD: u32 = 17_280;
const INSTANCE_BUMP_AMOUNT: u32 = 86_400;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 120_960;
const PERSISTENT_BUMP_AMOUNT: u32 = 1_051_200;

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Initialized)
}

pub fn require_initialized(env: &Env) -> Result<(), VaultError> {
    if !is_initialized(env) {
        return Err(VaultError::NotInitialized);
    }
    bump_instance(env);
    Ok(())
}

pub fn write_config(env: &Env, config: &Config) {
    let instance = env.storage().instance();
    instance.set(&DataKey::Initialized, &true);
    instance.set(&DataKey::Config, config);
    instance.set(&DataKey::ProposalCount, &0u64);
    for owner in config.owners.iter() {
        instance.set(&DataKey::Owner(owner), &true);
    }
    bump_instance(env);
}

pub fn read_config(env: &Env) -> Result<Config, VaultError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(VaultError::NotInitialized)
}

pub fn is_owner(env: &Env, address: &Address) -> bool {
    env.storage()
        .instance()
        .has(&DataKey::Owner(address.clone()))
}

pub fn proposal_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0u64)
}

/// Hands out the next proposal id and advances the counter.
pub fn next_proposal_id(env: &Env) -> u64 {
    let id = proposal_count(env);
    env.storage()
        .instance()
        .set(&DataKey::ProposalCount, &(id + 1));
    id
}

pub fn read_proposal(env: &Env, proposal_id: u64) -> Option<Proposal> {
    let key = DataKey::Proposal(proposal_id);
    let proposal = env.storage().persistent().get(&key);
    if proposal.is_some() {
        bump_persistent(env, &key);
    }
    proposal
}

pub fn write_proposal(env: &Env, proposal: &Proposal) {
    let key = DataKey::Proposal(proposal.index);
    env.storage().persistent().set(&key, proposal);
    bump_persistent(env, &key);
}

pub fn has_approved(env: &Env, proposal_id: u64, owner: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Approval(proposal_id, owner.clone()))
        .unwrap_or(false)
}

pub fn write_approval(env: &Env, proposal_id: u64, owner: &Address) {
    let key = DataKey::Approval(proposal_id, owner.clone());
    env.storage().persistent().set(&key, &true);
    bump_persistent(env, &key);
}
