//! A minimal cw721 ledger: minting, operator approvals and transfers.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Order, Response,
    StdError, StdResult,
};
use cw_multi_test::{Contract, ContractWrapper};
use cw_storage_plus::Map;
use cw20::Expiration;

const OWNERS: Map<&str, Addr> = Map::new("owners");
/// (owner, operator)
const OPERATORS: Map<(&Addr, &Addr), Empty> = Map::new("operators");

#[cw_serde]
pub struct InstantiateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    Mint {
        owner: String,
        token_ids: Vec<String>,
    },
    ApproveAll {
        operator: String,
    },
    RevokeAll {
        operator: String,
    },
    TransferNft {
        recipient: String,
        token_id: String,
    },
}

#[cw_serde]
pub enum QueryMsg {
    OwnerOf {
        token_id: String,
    },
    Operator {
        owner: String,
        operator: String,
        include_expired: Option<bool>,
    },
    Tokens {
        owner: String,
    },
}

#[cw_serde]
pub struct OwnerOfResponse {
    pub owner: String,
}

#[cw_serde]
pub struct Approval {
    pub spender: String,
    pub expires: Expiration,
}

#[cw_serde]
pub struct OperatorResponse {
    pub approval: Approval,
}

#[cw_serde]
pub struct TokensResponse {
    pub tokens: Vec<String>,
}

fn instantiate(
    _deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: InstantiateMsg,
) -> StdResult<Response> {
    Ok(Response::new())
}

fn execute(deps: DepsMut, _env: Env, info: MessageInfo, msg: ExecuteMsg) -> StdResult<Response> {
    match msg {
        ExecuteMsg::Mint { owner, token_ids } => {
            let owner = deps.api.addr_validate(&owner)?;
            for token_id in &token_ids {
                if OWNERS.has(deps.storage, token_id) {
                    return Err(StdError::generic_err(format!("token {token_id} exists")));
                }
                OWNERS.save(deps.storage, token_id, &owner)?;
            }
            Ok(Response::new().add_attribute("action", "mint"))
        }
        ExecuteMsg::ApproveAll { operator } => {
            let operator = deps.api.addr_validate(&operator)?;
            OPERATORS.save(deps.storage, (&info.sender, &operator), &Empty {})?;
            Ok(Response::new().add_attribute("action", "approve_all"))
        }
        ExecuteMsg::RevokeAll { operator } => {
            let operator = deps.api.addr_validate(&operator)?;
            OPERATORS.remove(deps.storage, (&info.sender, &operator));
            Ok(Response::new().add_attribute("action", "revoke_all"))
        }
        ExecuteMsg::TransferNft {
            recipient,
            token_id,
        } => {
            let recipient = deps.api.addr_validate(&recipient)?;
            let owner = OWNERS.load(deps.storage, &token_id)?;
            if info.sender != owner && !OPERATORS.has(deps.storage, (&owner, &info.sender)) {
                return Err(StdError::generic_err("Unauthorized transfer"));
            }
            OWNERS.save(deps.storage, &token_id, &recipient)?;
            Ok(Response::new()
                .add_attribute("action", "transfer_nft")
                .add_attribute("token_id", token_id)
                .add_attribute("recipient", recipient))
        }
    }
}

fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::OwnerOf { token_id } => to_json_binary(&OwnerOfResponse {
            owner: OWNERS.load(deps.storage, &token_id)?.into_string(),
        }),
        QueryMsg::Operator {
            owner, operator, ..
        } => {
            let owner = deps.api.addr_validate(&owner)?;
            let operator = deps.api.addr_validate(&operator)?;
            if !OPERATORS.has(deps.storage, (&owner, &operator)) {
                return Err(StdError::not_found("Approval not found"));
            }
            to_json_binary(&OperatorResponse {
                approval: Approval {
                    spender: operator.into_string(),
                    expires: Expiration::Never {},
                },
            })
        }
        QueryMsg::Tokens { owner } => {
            let tokens = OWNERS
                .range(deps.storage, None, None, Order::Ascending)
                .filter_map(|item| match item {
                    Ok((token_id, holder)) if holder.as_str() == owner => Some(Ok(token_id)),
                    Ok(_) => None,
                    Err(err) => Some(Err(err)),
                })
                .collect::<StdResult<Vec<String>>>()?;
            to_json_binary(&TokensResponse { tokens })
        }
    }
}

pub fn contract_items() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(execute, instantiate, query))
}
