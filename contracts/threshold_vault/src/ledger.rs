use soroban_sdk::{token, Address, Env};

/// The token contract holding the vault's funds. The vault's own contract
/// address is the account that gets debited.
pub struct Ledger<'a> {
    env: &'a Env,
    client: token::Client<'a>,
}

impl<'a> Ledger<'a> {
    pub fn new(env: &'a Env, token: &Address) -> Self {
        Ledger {
            env,
            client: token::Client::new(env, token),
        }
    }

    pub fn available(&self) -> i128 {
        self.client.balance(&self.env.current_contract_address())
    }

    /// Panics (and so aborts the whole invocation) if the token rejects the
    /// transfer.
    pub fn pay(&self, destination: &Address, amount: i128) {
        self.client
            .transfer(&self.env.current_contract_address(), destination, &amount);
    }

    pub fn receive(&self, from: &Address, amount: i128) {
        self.client
            .transfer(from, &self.env.current_contract_address(), &amount);
    }
}
