// Testing utils. See tests folder for actual tests.

pub mod items;
pub mod proxy;
pub mod strategy;
mod suite;

pub use suite::{
    contract_cw20, contract_nft_drop, Suite, INITIAL_BALANCE, MAX_QUANTITY, PRICE, TOKEN_COUNT,
};

use cosmwasm_std::Attribute;

/// Gets the value of the first attribute with the given key
pub fn first_attr(data: impl AsRef<[Attribute]>, search_key: &str) -> Option<String> {
    data.as_ref().iter().find_map(|a| {
        if a.key == search_key {
            Some(a.value.clone())
        } else {
            None
        }
    })
}
