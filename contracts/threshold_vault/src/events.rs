use soroban_sdk::{symbol_short, Address, Env};

#[allow(deprecated)]
pub fn proposal_created(env: &Env, proposal_id: u64) {
    env.events().publish(
        (symbol_short!("proposal"), symbol_short!("created")),
        proposal_id,
    );
}

#[allow(deprecated)]
pub fn proposal_approved(env: &Env, owner: &Address, proposal_id: u64) {
    env.events().publish(
        (symbol_short!("proposal"), symbol_short!("approved"), owner.clone()),
        proposal_id,
    );
}

#[allow(deprecated)]
pub fn proposal_executed(env: &Env, proposal_id: u64) {
    env.events().publish(
        (symbol_short!("proposal"), symbol_short!("executed")),
        proposal_id,
    );
}

#[allow(deprecated)]
pub fn deposited(env: &Env, from: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("vault"), symbol_short!("deposit"), from.clone()),
        amount,
    );
}
