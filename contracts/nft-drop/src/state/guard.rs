use cosmwasm_std::{DepsMut, Response, StdResult, Storage, SubMsg};
use cw_storage_plus::Item;

use crate::error::ContractError;

use super::TopKey;

/// Reply ID of the last message dispatched while the guard is held
pub const RELEASE_GUARD_REPLY_ID: u64 = 7331;

const GUARD: Item<bool> = Item::new(TopKey::Guard.as_str());

pub fn guard_is_held(storage: &dyn Storage) -> StdResult<bool> {
    Ok(GUARD.may_load(storage)?.unwrap_or_default())
}

/// Takes the guard. Fails if it is held already, i.e. when we are called
/// from one of the messages dispatched by a guarded entry point.
pub fn guard_acquire(storage: &mut dyn Storage) -> Result<(), ContractError> {
    if guard_is_held(storage)? {
        return Err(ContractError::ReentrantCall);
    }
    GUARD.save(storage, &true)?;
    Ok(())
}

pub fn guard_release(storage: &mut dyn Storage) -> StdResult<()> {
    GUARD.remove(storage);
    Ok(())
}

/// Releases the guard once everything `response` dispatches has been executed.
///
/// Without messages the guard is released right away. Otherwise the last message
/// gets a reply on success, which is where the guard is released (see `reply`).
/// Messages are executed in order and any error reverts the whole transaction,
/// including the acquisition, so no failure path leaves the guard held.
pub fn guard_release_after(
    storage: &mut dyn Storage,
    mut response: Response,
) -> StdResult<Response> {
    match response.messages.pop() {
        None => {
            guard_release(storage)?;
            Ok(response)
        }
        Some(last) => {
            response
                .messages
                .push(SubMsg::reply_on_success(last.msg, RELEASE_GUARD_REPLY_ID));
            Ok(response)
        }
    }
}

/// Runs `f` while holding the guard.
///
/// The guard is released on every error path. On success it stays held until the
/// messages of the response were executed (see [`guard_release_after`]).
pub fn with_guard<F>(mut deps: DepsMut, f: F) -> Result<Response, ContractError>
where
    F: FnOnce(DepsMut) -> Result<Response, ContractError>,
{
    guard_acquire(deps.storage)?;
    match f(deps.branch()) {
        Ok(response) => Ok(guard_release_after(deps.storage, response)?),
        Err(err) => {
            guard_release(deps.storage)?;
            Err(err)
        }
    }
}
