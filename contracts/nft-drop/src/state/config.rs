use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::Item;

use crate::window::SaleWindow;

use super::TopKey;

#[cw_serde]
pub struct Config {
    /// The only account allowed to configure the drop, run the airdrop and filter eligible users
    pub owner: Addr,
    /// The cw721 contract of the items being dropped
    pub item_ledger: Addr,
    /// The account holding the items. It must approve this contract as operator for all of its tokens.
    pub item_vault: Addr,
    /// The address of the nois-proxy contract deployed on the same chain as this contract
    pub nois_proxy: Addr,
    /// The cw20 contract in which items are paid
    pub payment_token: Option<Addr>,
    /// Receives 1/5 of every payment
    pub dao_wallet: Option<Addr>,
    /// Receives the rest of every payment via a cw20 `Send`
    pub strategy: Option<Addr>,
    /// Price per item in the smallest unit of the payment token
    pub price: Uint128,
    /// Maximum number of items bought in a single `BuyOnSale`
    pub max_quantity: u32,
}

pub const CONFIG: Item<Config> = Item::new(TopKey::Config.as_str());

pub const SALE_WINDOW: Item<SaleWindow> = Item::new(TopKey::SaleWindow.as_str());

/// Set to true once. Absent means the airdrop has not been executed yet.
pub const AIRDROP_EXECUTED: Item<bool> = Item::new(TopKey::AirdropExecuted.as_str());

/// The size of the collection as announced by the owner. Informational only.
pub const INITIAL_TOKENS_LENGTH: Item<u32> = Item::new(TopKey::InitialTokensLength.as_str());
