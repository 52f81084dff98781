//! Stable event attributes
//!
//! The attributes here should only be changed very carefully as it is likely that clients rely on them.

/// Which entry point/message type was executed
pub const ATTR_ACTION: &str = "action";

pub const EVENT_TYPE_ITEMS_ADDED: &str = "items-added";
pub const EVENT_TYPE_RANDOMNESS_REQUESTED: &str = "randomness-requested";
pub const EVENT_TYPE_RANDOMNESS_SAVED: &str = "randomness-saved";
pub const EVENT_TYPE_TOKENS_BOUGHT: &str = "tokens-bought";
pub const EVENT_TYPE_AIRDROP_EXECUTED: &str = "airdrop-executed";
pub const EVENT_TYPE_SELECTED_USERS: &str = "selected-users";

/// Comma separated list of token IDs
pub const ATTR_TOKEN_IDS: &str = "token_ids";

/// Comma separated list of addresses
pub const ATTR_ADDRESSES: &str = "addresses";

/// The account that requested the randomness currently stored
pub const ATTR_REQUESTER: &str = "requester";

pub const ATTR_JOB_ID: &str = "job_id";

pub const ATTR_BUYER: &str = "buyer";

/// Total price paid, in the smallest unit of the payment token
pub const ATTR_PAID: &str = "paid";

pub const ATTR_DAO_SHARE: &str = "dao_share";

pub const ATTR_STRATEGY_SHARE: &str = "strategy_share";

/// Number of items left in the pool after the operation
pub const ATTR_REMAINING: &str = "remaining";
