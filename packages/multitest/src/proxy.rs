//! Stands in for the nois proxy. Requests are queued and answered with `Deliver`.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Binary, Coin, Deps, DepsMut, Empty, Env, HexBinary, MessageInfo, Response,
    StdError, StdResult, WasmMsg,
};
use cw_multi_test::{Contract, ContractWrapper};
use cw_storage_plus::Item;
use nois::{NoisCallback, ReceiverExecuteMsg};

const PENDING: Item<Vec<PendingRequest>> = Item::new("pending");

#[cw_serde]
pub struct PendingRequest {
    /// The contract to call back
    pub origin: String,
    pub job_id: String,
    pub funds: Vec<Coin>,
}

#[cw_serde]
pub struct InstantiateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    GetNextRandomness { job_id: String },
    /// Answers the oldest pending request
    Deliver { randomness: HexBinary },
}

#[cw_serde]
pub enum QueryMsg {
    Pending {},
}

#[cw_serde]
pub struct PendingResponse {
    pub requests: Vec<PendingRequest>,
}

fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: InstantiateMsg,
) -> StdResult<Response> {
    PENDING.save(deps.storage, &vec![])?;
    Ok(Response::new())
}

fn execute(deps: DepsMut, env: Env, info: MessageInfo, msg: ExecuteMsg) -> StdResult<Response> {
    let mut pending = PENDING.load(deps.storage)?;
    match msg {
        ExecuteMsg::GetNextRandomness { job_id } => {
            pending.push(PendingRequest {
                origin: info.sender.into_string(),
                job_id: job_id.clone(),
                funds: info.funds,
            });
            PENDING.save(deps.storage, &pending)?;
            Ok(Response::new()
                .add_attribute("action", "get_next_randomness")
                .add_attribute("job_id", job_id))
        }
        ExecuteMsg::Deliver { randomness } => {
            if pending.is_empty() {
                return Err(StdError::generic_err("No pending request"));
            }
            let PendingRequest { origin, job_id, .. } = pending.remove(0);
            PENDING.save(deps.storage, &pending)?;
            let msg = WasmMsg::Execute {
                contract_addr: origin,
                msg: to_json_binary(&ReceiverExecuteMsg::NoisReceive {
                    callback: NoisCallback {
                        job_id,
                        published: env.block.time,
                        randomness,
                    },
                })?,
                funds: vec![],
            };
            Ok(Response::new()
                .add_message(msg)
                .add_attribute("action", "deliver"))
        }
    }
}

fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Pending {} => to_json_binary(&PendingResponse {
            requests: PENDING.load(deps.storage)?,
        }),
    }
}

pub fn contract_proxy() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(execute, instantiate, query))
}
