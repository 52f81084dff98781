//! Messages and queries towards the ledgers the drop moves assets on.
//!
//! Items live in a cw721 contract and are transferred out of the item vault, which approved
//! this contract as operator. Payments are cw20 tokens pulled from the buyer's allowance.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, BlockInfo, CosmosMsg, QuerierWrapper, StdResult, Uint128, WasmMsg,
};
use cw20::{AllowanceResponse, BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};
use serde::{Deserialize, Serialize};

use crate::error::ContractError;
use crate::split::PaymentSplit;

/// The part of the cw721 execute interface we use
#[cw_serde]
pub enum Cw721ExecuteMsg {
    TransferNft { recipient: String, token_id: String },
}

/// The part of the cw721 query interface we use
#[cw_serde]
pub enum Cw721QueryMsg {
    /// Returns the approval of `operator` for all tokens of `owner` and fails if there is none
    Operator {
        owner: String,
        operator: String,
        include_expired: Option<bool>,
    },
}

/// Only the fields we read. Unknown fields like `expires` are ignored.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct OperatorResponse {
    pub approval: Approval,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Approval {
    pub spender: String,
}

/// The payload of the cw20 `Send` that delivers the strategy share
#[cw_serde]
pub enum StrategyReceiveMsg {
    Deposit { buyer: String },
}

pub fn transfer_item(item_ledger: &Addr, recipient: &Addr, token_id: String) -> StdResult<CosmosMsg> {
    Ok(WasmMsg::Execute {
        contract_addr: item_ledger.to_string(),
        msg: to_json_binary(&Cw721ExecuteMsg::TransferNft {
            recipient: recipient.to_string(),
            token_id,
        })?,
        funds: vec![],
    }
    .into())
}

/// Makes sure `operator` may move every token of `owner`.
/// A failing query means there is no (unexpired) approval.
pub fn ensure_operator(
    querier: &QuerierWrapper,
    item_ledger: &Addr,
    owner: &Addr,
    operator: &Addr,
) -> Result<(), ContractError> {
    let response: StdResult<OperatorResponse> = querier.query_wasm_smart(
        item_ledger,
        &Cw721QueryMsg::Operator {
            owner: owner.to_string(),
            operator: operator.to_string(),
            include_expired: Some(false),
        },
    );
    match response {
        Ok(OperatorResponse { approval }) if approval.spender == operator.as_str() => Ok(()),
        _ => Err(ContractError::TransferNotApproved),
    }
}

/// Makes sure `payer` owns `amount` and allowed `spender` to pull it
pub fn ensure_payable(
    querier: &QuerierWrapper,
    block: &BlockInfo,
    token: &Addr,
    payer: &Addr,
    spender: &Addr,
    amount: Uint128,
) -> Result<(), ContractError> {
    let BalanceResponse { balance } = querier.query_wasm_smart(
        token,
        &Cw20QueryMsg::Balance {
            address: payer.to_string(),
        },
    )?;
    if balance < amount {
        return Err(ContractError::InsufficientFunds);
    }

    let AllowanceResponse { allowance, expires } = querier.query_wasm_smart(
        token,
        &Cw20QueryMsg::Allowance {
            owner: payer.to_string(),
            spender: spender.to_string(),
        },
    )?;
    if allowance < amount || expires.is_expired(block) {
        return Err(ContractError::InsufficientFunds);
    }
    Ok(())
}

/// Pulls the payment from `payer` and forwards it to the DAO wallet and the strategy contract.
///
/// Zero shares are skipped because cw20 rejects zero amount transfers.
pub fn collect_payment(
    token: &Addr,
    payer: &Addr,
    dao_wallet: &Addr,
    strategy: &Addr,
    split: &PaymentSplit,
) -> StdResult<Vec<CosmosMsg>> {
    let mut msgs: Vec<CosmosMsg> = Vec::with_capacity(2);

    if !split.dao.is_zero() {
        msgs.push(
            WasmMsg::Execute {
                contract_addr: token.to_string(),
                msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
                    owner: payer.to_string(),
                    recipient: dao_wallet.to_string(),
                    amount: split.dao,
                })?,
                funds: vec![],
            }
            .into(),
        );
    }

    if !split.strategy.is_zero() {
        msgs.push(
            WasmMsg::Execute {
                contract_addr: token.to_string(),
                msg: to_json_binary(&Cw20ExecuteMsg::SendFrom {
                    owner: payer.to_string(),
                    contract: strategy.to_string(),
                    amount: split.strategy,
                    msg: to_json_binary(&StrategyReceiveMsg::Deposit {
                        buyer: payer.to_string(),
                    })?,
                })?,
                funds: vec![],
            }
            .into(),
        );
    }

    Ok(msgs)
}
