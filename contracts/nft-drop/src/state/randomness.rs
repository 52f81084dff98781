use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, StdResult, Storage};
use cw_storage_plus::Item;

use crate::error::ContractError;

use super::TopKey;

/// The single randomness slot of the contract.
///
/// `Idle -> Requested -> Fulfilled -> Idle`, where the last transition is the consumption.
#[cw_serde]
pub enum RandomnessState {
    Idle,
    Requested {
        job_id: String,
        requester: Addr,
    },
    Fulfilled {
        job_id: String,
        requester: Addr,
        randomness: [u8; 32],
    },
}

impl RandomnessState {
    /// True if a usable value is stored. An all-zero value counts as empty.
    pub fn has_unconsumed_value(&self) -> bool {
        matches!(self, RandomnessState::Fulfilled { randomness, .. } if *randomness != [0u8; 32])
    }
}

const STATE: Item<RandomnessState> = Item::new(TopKey::Randomness.as_str());
const JOB_COUNTER: Item<u64> = Item::new(TopKey::RandomnessJobCounter.as_str());

pub fn randomness_load(storage: &dyn Storage) -> StdResult<RandomnessState> {
    Ok(STATE
        .may_load(storage)?
        .unwrap_or(RandomnessState::Idle))
}

/// Registers a new request and returns the job ID to send to the proxy.
///
/// A pending request that was never fulfilled can only be replaced by its own requester.
pub fn randomness_request(
    storage: &mut dyn Storage,
    requester: Addr,
) -> Result<String, ContractError> {
    let state = randomness_load(storage)?;
    if state.has_unconsumed_value() {
        return Err(ContractError::AlreadyPending);
    }
    if let RandomnessState::Requested {
        requester: pending, ..
    } = &state
    {
        if *pending != requester {
            return Err(ContractError::RandomnessNotOwned);
        }
    }
    let counter = JOB_COUNTER.may_load(storage)?.unwrap_or_default() + 1;
    JOB_COUNTER.save(storage, &counter)?;
    let job_id = format!("drop-{counter}");
    STATE.save(
        storage,
        &RandomnessState::Requested {
            job_id: job_id.clone(),
            requester,
        },
    )?;
    Ok(job_id)
}

/// Stores the randomness for the pending request and returns the requester.
pub fn randomness_fulfill(
    storage: &mut dyn Storage,
    job_id: &str,
    randomness: [u8; 32],
) -> Result<Addr, ContractError> {
    match randomness_load(storage)? {
        RandomnessState::Requested {
            job_id: pending,
            requester,
        } if pending == job_id => {
            STATE.save(
                storage,
                &RandomnessState::Fulfilled {
                    job_id: pending,
                    requester: requester.clone(),
                    randomness,
                },
            )?;
            Ok(requester)
        }
        _ => Err(ContractError::UnknownRequest {
            job_id: job_id.to_string(),
        }),
    }
}

/// Returns the stored randomness if `caller` may consume it, without consuming it.
pub fn randomness_peek(storage: &dyn Storage, caller: &Addr) -> Result<[u8; 32], ContractError> {
    match randomness_load(storage)? {
        state if !state.has_unconsumed_value() => Err(ContractError::InvalidRandomNumber),
        RandomnessState::Fulfilled {
            requester,
            randomness,
            ..
        } => {
            if requester != *caller {
                return Err(ContractError::RandomnessNotOwned);
            }
            Ok(randomness)
        }
        _ => Err(ContractError::InvalidRandomNumber),
    }
}

/// Takes the stored randomness out of the slot. Only the requester can consume it.
pub fn randomness_consume(
    storage: &mut dyn Storage,
    caller: &Addr,
) -> Result<[u8; 32], ContractError> {
    let randomness = randomness_peek(storage, caller)?;
    STATE.save(storage, &RandomnessState::Idle)?;
    Ok(randomness)
}

pub fn randomness_reset(storage: &mut dyn Storage) -> StdResult<()> {
    STATE.save(storage, &RandomnessState::Idle)
}
