//! The live pool of token IDs that can still be allocated.
//!
//! Slots are dense: `0..len` always holds a token ID. Removing a slot moves the last
//! token into it, so every removal is O(1) and every index in `0..len` stays drawable.

use std::collections::BTreeSet;

use cosmwasm_std::{Empty, StdResult, Storage};
use cw_storage_plus::{Item, Map};

use crate::error::ContractError;

use super::TopKey;

const SLOTS: Map<u32, String> = Map::new(TopKey::PoolSlots.as_str());
const LENGTH: Item<u32> = Item::new(TopKey::PoolLength.as_str());
/// Every token ever added, including allocated ones. Think of this as a set.
const ADDED: Map<&str, Empty> = Map::new(TopKey::PoolAdded.as_str());

pub fn pool_remaining(storage: &dyn Storage) -> StdResult<u32> {
    Ok(LENGTH.may_load(storage)?.unwrap_or_default())
}

pub fn pool_is_added(storage: &dyn Storage, token_id: &str) -> bool {
    ADDED.has(storage, token_id)
}

/// Appends the given token IDs to the pool.
///
/// Fails without writing anything if the list is empty or any token was added before.
pub fn pool_add(storage: &mut dyn Storage, token_ids: &[String]) -> Result<(), ContractError> {
    if token_ids.is_empty() || token_ids.iter().any(|t| t.is_empty()) {
        return Err(ContractError::EmptyInput);
    }
    let mut seen = BTreeSet::new();
    for token_id in token_ids {
        if !seen.insert(token_id.as_str()) || ADDED.has(storage, token_id) {
            return Err(ContractError::DuplicateItem {
                token_id: token_id.clone(),
            });
        }
    }

    let mut len = pool_remaining(storage)?;
    for token_id in token_ids {
        ADDED.save(storage, token_id, &Empty {})?;
        SLOTS.save(storage, len, token_id)?;
        len += 1;
    }
    LENGTH.save(storage, &len)?;
    Ok(())
}

/// Removes and returns the token at `index` by swapping the last token into its slot.
pub fn pool_take_at(storage: &mut dyn Storage, index: u32) -> Result<String, ContractError> {
    let remaining = pool_remaining(storage)?;
    if index >= remaining {
        return Err(ContractError::IndexOutOfRange { index, remaining });
    }
    let last = remaining - 1;
    let taken = SLOTS.load(storage, index)?;
    if index != last {
        let moved = SLOTS.load(storage, last)?;
        SLOTS.save(storage, index, &moved)?;
    }
    SLOTS.remove(storage, last);
    LENGTH.save(storage, &last)?;
    Ok(taken)
}
