use thiserror::Error;

use cosmwasm_std::StdError;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Caller is not the owner")]
    NotOwner,

    #[error("Not valid address")]
    InvalidAddress,

    // Reentrancy
    #[error("Reentrant call")]
    ReentrantCall,

    #[error("Invalid reply id {id}")]
    UnknownReplyId { id: u64 },

    // Inventory
    #[error("Tokens array must include at least one item")]
    EmptyInput,

    #[error("Token has been already added: {token_id}")]
    DuplicateItem { token_id: String },

    #[error("Index {index} out of range for pool of {remaining} items")]
    IndexOutOfRange { index: u32, remaining: u32 },

    #[error("Cannot draw from an empty pool")]
    EmptyPool,

    #[error("Initial tokens length must be above 0")]
    InvalidInitialTokensLength,

    // Randomness
    #[error("Randomness has been already received and not consumed yet")]
    AlreadyPending,

    #[error("No pending randomness request with job ID {job_id}")]
    UnknownRequest { job_id: String },

    #[error("Unauthorized NoisReceive execution")]
    UnauthorizedReceive,

    #[error("Received invalid randomness")]
    InvalidRandomness,

    #[error("Invalid random number")]
    InvalidRandomNumber,

    #[error("Randomness was requested by another account")]
    RandomnessNotOwned,

    // Selection
    #[error("Cannot select {target} out of {candidates} candidates")]
    InsufficientCandidates { candidates: u32, target: u32 },

    // Sale window
    #[error("Presale start date must be in the future")]
    PastStartDate,

    #[error("Presale duration must be above 0")]
    InvalidDuration,

    #[error("Presale is not active")]
    PresaleWindowClosed,

    #[error("Sale has not started yet")]
    SaleNotStarted,

    // Allocation
    #[error("Invalid quantity")]
    InvalidQuantity,

    #[error("Insufficient available quantity: requested {requested}, remaining {remaining}")]
    InsufficientSupply { requested: u32, remaining: u32 },

    #[error("Price must be above 0")]
    InvalidPrice,

    #[error("Payment token, DAO wallet and strategy contract must be set")]
    PaymentNotConfigured,

    #[error("Insufficient funds")]
    InsufficientFunds,

    #[error("Item vault has not approved this contract as operator")]
    TransferNotApproved,

    #[error("Not whitelisted")]
    ClaimForbidden,

    #[error("Airdrop has been executed")]
    AlreadyExecuted,

    #[error("Invalid airdrop parameters")]
    InvalidAirdropParameters,

    #[error("Eligible members must be more than privileged: {eligible} eligible, {target} requested")]
    InsufficientEligible { eligible: u32, target: u32 },

    #[error("Array length must be in the bounds of 1 and 100, got {len}")]
    InvalidListLength { len: usize },
}
