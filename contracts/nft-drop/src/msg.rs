use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Timestamp, Uint128};
use nois::NoisCallback;

use crate::state::Config;
use crate::window::SalePhase;

#[cw_serde]
pub struct InstantiateMsg {
    /// The owner of the drop. Defaults to the instantiator.
    pub owner: Option<String>,
    /// The cw721 contract of the dropped items
    pub item_ledger: String,
    /// The account holding the items
    pub item_vault: String,
    /// Address of the Nois proxy contract
    pub nois_proxy: String,
    /// The cw20 contract in which items are paid
    pub payment_token: Option<String>,
    pub dao_wallet: Option<String>,
    pub strategy: Option<String>,
    /// Price per item in the smallest unit of the payment token
    pub price: Uint128,
    pub max_quantity: u32,
    /// Token IDs to put into the pool right away
    pub tokens: Option<Vec<String>>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Adds token IDs to the pool. Owner only.
    AddTokens { tokens: Vec<String> },
    /// Requests randomness from the proxy for the sender. Funds are forwarded to the proxy.
    RequestRandomness {},
    /// Called by the proxy to deliver the randomness
    NoisReceive { callback: NoisCallback },
    /// Drops pending or unconsumed randomness. Owner only.
    ResetRandomness {},
    BuyOnSale { quantity: u32 },
    BuyOnPresale {},
    /// Gives one item to every privileged address. Owner only, once.
    ExecuteAirdrop {},
    /// Randomly selects `target_count` eligible addresses as the new privileged list. Owner only.
    FilterEligible { target_count: u32 },
    SetPaymentToken { address: String },
    SetDaoWallet { address: String },
    SetStrategyContract { address: String },
    SetItemVault { address: String },
    SetPresaleStartDate { start: Timestamp },
    /// Duration of the presale in seconds
    SetPresaleDuration { seconds: u64 },
    SetWhitelisted { addresses: Vec<String> },
    SetPrivileged { addresses: Vec<String> },
    SetEligible { addresses: Vec<String> },
    SetInitialTokensLength { length: u32 },
    SetPrice { price: Uint128 },
    SetMaxQuantity { max_quantity: u32 },
    TransferOwnership { owner: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Get the config state
    #[returns(ConfigResponse)]
    Config {},
    /// Number of items left in the pool
    #[returns(TokensLeftResponse)]
    TokensLeft {},
    #[returns(IsAddedResponse)]
    IsAdded { token_id: String },
    #[returns(RandomnessResponse)]
    Randomness {},
    #[returns(SaleStateResponse)]
    SaleState {},
    #[returns(IsWhitelistedResponse)]
    IsWhitelisted { address: String },
    #[returns(AddressesResponse)]
    Privileged {},
    #[returns(AddressesResponse)]
    Eligible {},
    #[returns(AirdropExecutedResponse)]
    AirdropExecuted {},
    #[returns(InitialTokensLengthResponse)]
    InitialTokensLength {},
    #[returns(GuardResponse)]
    Guard {},
}

#[cw_serde]
pub struct MigrateMsg {}

// We define a custom struct for each query response
pub type ConfigResponse = Config;

#[cw_serde]
pub struct TokensLeftResponse {
    pub remaining: u32,
}

#[cw_serde]
pub struct IsAddedResponse {
    pub added: bool,
}

#[cw_serde]
pub enum RandomnessStatus {
    Idle,
    Requested,
    Fulfilled,
}

#[cw_serde]
pub struct RandomnessResponse {
    pub status: RandomnessStatus,
    pub job_id: Option<String>,
    pub requester: Option<Addr>,
}

#[cw_serde]
pub struct SaleStateResponse {
    pub phase: SalePhase,
    pub presale_start: Option<Timestamp>,
    /// Presale duration in seconds
    pub presale_duration: Option<u64>,
    pub presale_active: bool,
    pub sale_active: bool,
}

#[cw_serde]
pub struct IsWhitelistedResponse {
    pub whitelisted: bool,
}

#[cw_serde]
pub struct AddressesResponse {
    pub addresses: Vec<Addr>,
}

#[cw_serde]
pub struct AirdropExecutedResponse {
    pub executed: bool,
}

#[cw_serde]
pub struct InitialTokensLengthResponse {
    pub length: Option<u32>,
}

#[cw_serde]
pub struct GuardResponse {
    pub held: bool,
}

/// Set as response data of `FilterEligible`
#[cw_serde]
pub struct FilterEligibleResponse {
    pub selected: Vec<Addr>,
}
