use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VaultError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    /// Empty owner list, zero threshold, threshold above owner count, or a
    /// repeated owner.
    InvalidConfiguration = 3,
    NotFound = 4,
    Unauthorized = 5,
    AlreadyApproved = 6,
    AlreadyExecuted = 7,
    QuorumNotMet = 8,
    InsufficientFunds = 9,
    InvalidAmount = 10,
}
