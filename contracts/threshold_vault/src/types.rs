use soroban_sdk::{contracttype, Address, Env, Vec};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Config,
    Owner(Address),
    ProposalCount,
    Proposal(u64),
    Approval(u64, Address),
}

/// Settings fixed at initialization.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub owners: Vec<Address>,
    pub threshold: u32,
    /// Token contract the vault keeps its funds in.
    pub token: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub index: u64,
    pub destination: Address,
    pub amount: i128,
    pub exists: bool,
    pub executed: bool,
    pub approval_count: u32,
}

impl Proposal {
    pub fn new(index: u64, destination: Address, amount: i128) -> Self {
        Proposal {
            index,
            destination,
            amount,
            exists: true,
            executed: false,
            approval_count: 0,
        }
    }

    /// Placeholder returned for ids that were never submitted. The
    /// destination points back at the vault itself.
    pub fn missing(env: &Env, index: u64) -> Self {
        Proposal {
            index,
            destination: env.current_contract_address(),
            amount: 0,
            exists: false,
            executed: false,
            approval_count: 0,
        }
    }

    pub fn is_quorate(&self, threshold: u32) -> bool {
        self.approval_count >= threshold
    }
}
