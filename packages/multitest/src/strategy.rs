//! Receivers of the strategy share.
//!
//! The honest strategy records every deposit. The reentrant one calls `BuyOnSale` on the drop
//! from within its `Receive` hook.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    from_json, to_json_binary, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Response,
    StdResult, Uint128, WasmMsg,
};
use cw20::Cw20ReceiveMsg;
use cw_multi_test::{Contract, ContractWrapper};
use cw_storage_plus::Item;
use nft_drop::ledgers::StrategyReceiveMsg;

const DEPOSITS: Item<Vec<Deposit>> = Item::new("deposits");
const REENTER: Item<Option<String>> = Item::new("reenter");

#[cw_serde]
pub struct Deposit {
    /// The cw20 contract that notified us
    pub token: String,
    pub buyer: String,
    pub amount: Uint128,
}

#[cw_serde]
pub struct InstantiateMsg {
    /// Drop contract to call `BuyOnSale` on when receiving a deposit
    pub reenter: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    Receive(Cw20ReceiveMsg),
}

#[cw_serde]
pub enum QueryMsg {
    Deposits {},
}

#[cw_serde]
pub struct DepositsResponse {
    pub deposits: Vec<Deposit>,
}

fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> StdResult<Response> {
    DEPOSITS.save(deps.storage, &vec![])?;
    REENTER.save(deps.storage, &msg.reenter)?;
    Ok(Response::new())
}

fn execute(deps: DepsMut, _env: Env, info: MessageInfo, msg: ExecuteMsg) -> StdResult<Response> {
    let ExecuteMsg::Receive(Cw20ReceiveMsg {
        amount, msg: inner, ..
    }) = msg;
    let StrategyReceiveMsg::Deposit { buyer } = from_json(&inner)?;

    let mut deposits = DEPOSITS.load(deps.storage)?;
    deposits.push(Deposit {
        token: info.sender.into_string(),
        buyer,
        amount,
    });
    DEPOSITS.save(deps.storage, &deposits)?;

    let mut response = Response::new().add_attribute("action", "deposit");
    if let Some(drop) = REENTER.load(deps.storage)? {
        response = response.add_message(WasmMsg::Execute {
            contract_addr: drop,
            msg: to_json_binary(&nft_drop::msg::ExecuteMsg::BuyOnSale { quantity: 1 })?,
            funds: vec![],
        });
    }
    Ok(response)
}

fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Deposits {} => to_json_binary(&DepositsResponse {
            deposits: DEPOSITS.load(deps.storage)?,
        }),
    }
}

pub fn contract_strategy() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(execute, instantiate, query))
}
