use cosmwasm_std::{Addr, StdResult, Storage};
use cw_storage_plus::{Item, Map};

use crate::error::ContractError;

use super::TopKey;

/// Maximum number of addresses accepted by a single list write
pub const MAX_LIST_LEN: usize = 100;

/// The ordered beneficiary lists of the drop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressList {
    /// Airdrop recipients
    Privileged,
    /// Candidates from which the privileged list is selected
    Eligible,
}

impl AddressList {
    const fn item(self) -> Item<Vec<Addr>> {
        match self {
            AddressList::Privileged => Item::new(TopKey::Privileged.as_str()),
            AddressList::Eligible => Item::new(TopKey::Eligible.as_str()),
        }
    }
}

/// Whitelisted addresses. A value of false means the presale claim was used.
const WHITELIST: Map<&Addr, bool> = Map::new(TopKey::Whitelist.as_str());

pub fn validate_list_len(len: usize) -> Result<(), ContractError> {
    if len == 0 || len > MAX_LIST_LEN {
        return Err(ContractError::InvalidListLength { len });
    }
    Ok(())
}

pub fn load_addresses(storage: &dyn Storage, list: AddressList) -> StdResult<Vec<Addr>> {
    Ok(list.item().may_load(storage)?.unwrap_or_default())
}

pub fn append_addresses(
    storage: &mut dyn Storage,
    list: AddressList,
    addresses: Vec<Addr>,
) -> StdResult<()> {
    let mut existing = load_addresses(storage, list)?;
    existing.extend(addresses);
    list.item().save(storage, &existing)
}

pub fn replace_addresses(
    storage: &mut dyn Storage,
    list: AddressList,
    addresses: &[Addr],
) -> StdResult<()> {
    list.item().save(storage, &addresses.to_vec())
}

pub fn whitelist_insert(storage: &mut dyn Storage, address: &Addr) -> StdResult<()> {
    WHITELIST.save(storage, address, &true)
}

pub fn whitelist_contains(storage: &dyn Storage, address: &Addr) -> StdResult<bool> {
    Ok(WHITELIST.may_load(storage, address)?.unwrap_or_default())
}

/// Uses up the presale claim of `address`
pub fn whitelist_consume(storage: &mut dyn Storage, address: &Addr) -> Result<(), ContractError> {
    if !whitelist_contains(storage, address)? {
        return Err(ContractError::ClaimForbidden);
    }
    WHITELIST.save(storage, address, &false)?;
    Ok(())
}
