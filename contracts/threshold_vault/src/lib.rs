//! Threshold vault: a shared custody account whose outgoing transfers need a
//! quorum of owner approvals and execute exactly once.

#![no_std]

mod errors;
mod events;
mod ledger;
mod storage;
mod types;
mod vault;

pub use errors::VaultError;
pub use types::{Config, Proposal};
pub use vault::{ThresholdVault, ThresholdVaultClient};
