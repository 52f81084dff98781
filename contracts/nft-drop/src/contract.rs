#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    ensure, ensure_eq, to_json_binary, Addr, Api, CosmosMsg, Deps, DepsMut, Env, Event,
    MessageInfo, QueryResponse, Reply, Response, StdResult, Storage, Timestamp, WasmMsg,
};
use cw2::set_contract_version;
use nois::{NoisCallback, ProxyExecuteMsg};

use crate::attributes::{
    ATTR_ACTION, ATTR_ADDRESSES, ATTR_BUYER, ATTR_DAO_SHARE, ATTR_JOB_ID, ATTR_PAID,
    ATTR_REMAINING, ATTR_REQUESTER, ATTR_STRATEGY_SHARE, ATTR_TOKEN_IDS,
    EVENT_TYPE_AIRDROP_EXECUTED, EVENT_TYPE_ITEMS_ADDED, EVENT_TYPE_RANDOMNESS_REQUESTED,
    EVENT_TYPE_RANDOMNESS_SAVED, EVENT_TYPE_SELECTED_USERS, EVENT_TYPE_TOKENS_BOUGHT,
};
use crate::error::ContractError;
use crate::ledgers::{collect_payment, ensure_operator, ensure_payable, transfer_item};
use crate::msg::{
    AddressesResponse, AirdropExecutedResponse, ConfigResponse, ExecuteMsg,
    FilterEligibleResponse, GuardResponse, InitialTokensLengthResponse, InstantiateMsg,
    IsAddedResponse, IsWhitelistedResponse, MigrateMsg, QueryMsg, RandomnessResponse,
    RandomnessStatus, SaleStateResponse, TokensLeftResponse,
};
use crate::selection::{draw_one, draw_subset};
use crate::split::split_payment;
use crate::state::{
    append_addresses, guard_is_held, guard_release, load_addresses, pool_add, pool_is_added,
    pool_remaining, pool_take_at, randomness_consume, randomness_fulfill, randomness_load,
    randomness_peek, randomness_request, randomness_reset, replace_addresses, validate_list_len,
    whitelist_consume, whitelist_contains, whitelist_insert, with_guard, AddressList, Config,
    RandomnessState, AIRDROP_EXECUTED, CONFIG, INITIAL_TOKENS_LENGTH, RELEASE_GUARD_REPLY_ID,
    SALE_WINDOW,
};
use crate::window::SaleWindow;

const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let InstantiateMsg {
        owner,
        item_ledger,
        item_vault,
        nois_proxy,
        payment_token,
        dao_wallet,
        strategy,
        price,
        max_quantity,
        tokens,
    } = msg;

    ensure!(!price.is_zero(), ContractError::InvalidPrice);
    ensure!(max_quantity > 0, ContractError::InvalidQuantity);

    let api = deps.api;
    let owner = match owner {
        Some(owner) => validate_addr(api, &owner)?,
        None => info.sender,
    };
    let config = Config {
        owner,
        item_ledger: validate_addr(api, &item_ledger)?,
        item_vault: validate_addr(api, &item_vault)?,
        nois_proxy: validate_addr(api, &nois_proxy)?,
        payment_token: validate_optional_addr(api, payment_token)?,
        dao_wallet: validate_optional_addr(api, dao_wallet)?,
        strategy: validate_optional_addr(api, strategy)?,
        price,
        max_quantity,
    };
    CONFIG.save(deps.storage, &config)?;
    SALE_WINDOW.save(deps.storage, &SaleWindow::default())?;
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let mut response = Response::new()
        .add_attribute(ATTR_ACTION, "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("item_ledger", config.item_ledger)
        .add_attribute("nois_proxy", config.nois_proxy);
    if let Some(tokens) = tokens.filter(|tokens| !tokens.is_empty()) {
        pool_add(deps.storage, &tokens)?;
        response = response.add_event(
            Event::new(EVENT_TYPE_ITEMS_ADDED)
                .add_attribute(ATTR_TOKEN_IDS, tokens.join(","))
                .add_attribute(ATTR_REMAINING, pool_remaining(deps.storage)?.to_string()),
        );
    }
    Ok(response)
}

// This no-op migrate implementation allows us to upgrade within the 0.1 series.
// No state changes expected.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::default())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::AddTokens { tokens } => execute_add_tokens(deps, info, tokens),
        ExecuteMsg::RequestRandomness {} => {
            with_guard(deps, |deps| execute_request_randomness(deps, info))
        }
        ExecuteMsg::NoisReceive { callback } => execute_nois_receive(deps, info, callback),
        ExecuteMsg::ResetRandomness {} => execute_reset_randomness(deps, info),
        ExecuteMsg::BuyOnSale { quantity } => {
            with_guard(deps, |deps| execute_buy_on_sale(deps, env, info, quantity))
        }
        ExecuteMsg::BuyOnPresale {} => {
            with_guard(deps, |deps| execute_buy_on_presale(deps, env, info))
        }
        ExecuteMsg::ExecuteAirdrop {} => {
            with_guard(deps, |deps| execute_airdrop(deps, env, info))
        }
        ExecuteMsg::FilterEligible { target_count } => {
            with_guard(deps, |deps| execute_filter_eligible(deps, info, target_count))
        }
        ExecuteMsg::SetPaymentToken { address } => {
            execute_update_config(deps, info, "set_payment_token", |api, config| {
                config.payment_token = Some(validate_addr(api, &address)?);
                Ok(address)
            })
        }
        ExecuteMsg::SetDaoWallet { address } => {
            execute_update_config(deps, info, "set_dao_wallet", |api, config| {
                config.dao_wallet = Some(validate_addr(api, &address)?);
                Ok(address)
            })
        }
        ExecuteMsg::SetStrategyContract { address } => {
            execute_update_config(deps, info, "set_strategy_contract", |api, config| {
                config.strategy = Some(validate_addr(api, &address)?);
                Ok(address)
            })
        }
        ExecuteMsg::SetItemVault { address } => {
            execute_update_config(deps, info, "set_item_vault", |api, config| {
                config.item_vault = validate_addr(api, &address)?;
                Ok(address)
            })
        }
        ExecuteMsg::SetPrice { price } => {
            execute_update_config(deps, info, "set_price", |_api, config| {
                ensure!(!price.is_zero(), ContractError::InvalidPrice);
                config.price = price;
                Ok(price.to_string())
            })
        }
        ExecuteMsg::SetMaxQuantity { max_quantity } => {
            execute_update_config(deps, info, "set_max_quantity", |_api, config| {
                ensure!(max_quantity > 0, ContractError::InvalidQuantity);
                config.max_quantity = max_quantity;
                Ok(max_quantity.to_string())
            })
        }
        ExecuteMsg::TransferOwnership { owner } => {
            execute_update_config(deps, info, "transfer_ownership", |api, config| {
                config.owner = validate_addr(api, &owner)?;
                Ok(owner)
            })
        }
        ExecuteMsg::SetPresaleStartDate { start } => {
            execute_set_presale_start(deps, env, info, start)
        }
        ExecuteMsg::SetPresaleDuration { seconds } => {
            execute_set_presale_duration(deps, info, seconds)
        }
        ExecuteMsg::SetWhitelisted { addresses } => {
            execute_set_whitelisted(deps, info, addresses)
        }
        ExecuteMsg::SetPrivileged { addresses } => {
            execute_append_addresses(deps, info, AddressList::Privileged, addresses)
        }
        ExecuteMsg::SetEligible { addresses } => {
            execute_append_addresses(deps, info, AddressList::Eligible, addresses)
        }
        ExecuteMsg::SetInitialTokensLength { length } => {
            execute_set_initial_tokens_length(deps, info, length)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<QueryResponse> {
    let response = match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?)?,
        QueryMsg::TokensLeft {} => to_json_binary(&TokensLeftResponse {
            remaining: pool_remaining(deps.storage)?,
        })?,
        QueryMsg::IsAdded { token_id } => to_json_binary(&IsAddedResponse {
            added: pool_is_added(deps.storage, &token_id),
        })?,
        QueryMsg::Randomness {} => to_json_binary(&query_randomness(deps)?)?,
        QueryMsg::SaleState {} => to_json_binary(&query_sale_state(deps, env)?)?,
        QueryMsg::IsWhitelisted { address } => {
            let address = deps.api.addr_validate(&address)?;
            to_json_binary(&IsWhitelistedResponse {
                whitelisted: whitelist_contains(deps.storage, &address)?,
            })?
        }
        QueryMsg::Privileged {} => to_json_binary(&AddressesResponse {
            addresses: load_addresses(deps.storage, AddressList::Privileged)?,
        })?,
        QueryMsg::Eligible {} => to_json_binary(&AddressesResponse {
            addresses: load_addresses(deps.storage, AddressList::Eligible)?,
        })?,
        QueryMsg::AirdropExecuted {} => to_json_binary(&AirdropExecutedResponse {
            executed: AIRDROP_EXECUTED.may_load(deps.storage)?.unwrap_or_default(),
        })?,
        QueryMsg::InitialTokensLength {} => to_json_binary(&InitialTokensLengthResponse {
            length: INITIAL_TOKENS_LENGTH.may_load(deps.storage)?,
        })?,
        QueryMsg::Guard {} => to_json_binary(&GuardResponse {
            held: guard_is_held(deps.storage)?,
        })?,
    };
    Ok(response)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, reply: Reply) -> Result<Response, ContractError> {
    match reply.id {
        RELEASE_GUARD_REPLY_ID => {
            guard_release(deps.storage)?;
            Ok(Response::new().add_attribute(ATTR_ACTION, "release_guard"))
        }
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

fn validate_addr(api: &dyn Api, address: &str) -> Result<Addr, ContractError> {
    api.addr_validate(address)
        .map_err(|_| ContractError::InvalidAddress)
}

fn validate_optional_addr(
    api: &dyn Api,
    address: Option<String>,
) -> Result<Option<Addr>, ContractError> {
    address.map(|a| validate_addr(api, &a)).transpose()
}

fn validate_addresses(api: &dyn Api, addresses: &[String]) -> Result<Vec<Addr>, ContractError> {
    validate_list_len(addresses.len())?;
    addresses.iter().map(|a| validate_addr(api, a)).collect()
}

fn load_owned_config(storage: &dyn Storage, sender: &Addr) -> Result<Config, ContractError> {
    let config = CONFIG.load(storage)?;
    ensure_eq!(*sender, config.owner, ContractError::NotOwner);
    Ok(config)
}

/// Fails unless the pool holds at least `quantity` items
fn ensure_supply(storage: &dyn Storage, quantity: u32) -> Result<(), ContractError> {
    let remaining = pool_remaining(storage)?;
    if remaining < quantity {
        return Err(ContractError::InsufficientSupply {
            requested: quantity,
            remaining,
        });
    }
    Ok(())
}

/// Takes one item out of the pool per recipient, using a single randomness value for all draws
fn draw_items(
    storage: &mut dyn Storage,
    seed: [u8; 32],
    count: usize,
) -> Result<Vec<String>, ContractError> {
    let mut token_ids = Vec::with_capacity(count);
    for _ in 0..count {
        let index = draw_one(seed, pool_remaining(storage)?)?;
        token_ids.push(pool_take_at(storage, index)?);
    }
    Ok(token_ids)
}

fn execute_add_tokens(
    deps: DepsMut,
    info: MessageInfo,
    tokens: Vec<String>,
) -> Result<Response, ContractError> {
    load_owned_config(deps.storage, &info.sender)?;
    pool_add(deps.storage, &tokens)?;
    Ok(Response::new()
        .add_attribute(ATTR_ACTION, "add_tokens")
        .add_event(
            Event::new(EVENT_TYPE_ITEMS_ADDED)
                .add_attribute(ATTR_TOKEN_IDS, tokens.join(","))
                .add_attribute(ATTR_REMAINING, pool_remaining(deps.storage)?.to_string()),
        ))
}

fn execute_request_randomness(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let job_id = randomness_request(deps.storage, info.sender.clone())?;

    let msg = WasmMsg::Execute {
        contract_addr: config.nois_proxy.into(),
        // GetNextRandomness requests the randomness from the proxy
        // The job id is needed to know what randomness we are referring to upon reception in the callback.
        msg: to_json_binary(&ProxyExecuteMsg::GetNextRandomness {
            job_id: job_id.clone(),
        })?,
        // We pay here the proxy contract with whatever the sender sends. The sender needs to check
        // the price in the proxy.
        funds: info.funds,
    };
    Ok(Response::new()
        .add_message(msg)
        .add_attribute(ATTR_ACTION, "request_randomness")
        .add_event(
            Event::new(EVENT_TYPE_RANDOMNESS_REQUESTED)
                .add_attribute(ATTR_REQUESTER, info.sender)
                .add_attribute(ATTR_JOB_ID, job_id),
        ))
}

fn execute_nois_receive(
    deps: DepsMut,
    info: MessageInfo,
    callback: NoisCallback,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    // Only the proxy may deliver randomness
    ensure_eq!(
        info.sender,
        config.nois_proxy,
        ContractError::UnauthorizedReceive
    );

    let NoisCallback {
        job_id, randomness, ..
    } = callback;
    let randomness: [u8; 32] = randomness
        .to_array()
        .map_err(|_| ContractError::InvalidRandomness)?;
    let requester = randomness_fulfill(deps.storage, &job_id, randomness)?;

    Ok(Response::new()
        .add_attribute(ATTR_ACTION, "receive_randomness")
        .add_event(
            Event::new(EVENT_TYPE_RANDOMNESS_SAVED)
                .add_attribute(ATTR_REQUESTER, requester)
                .add_attribute(ATTR_JOB_ID, job_id),
        ))
}

fn execute_reset_randomness(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    load_owned_config(deps.storage, &info.sender)?;
    randomness_reset(deps.storage)?;
    Ok(Response::new().add_attribute(ATTR_ACTION, "reset_randomness"))
}

fn execute_buy_on_sale(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    quantity: u32,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure!(
        quantity >= 1 && quantity <= config.max_quantity,
        ContractError::InvalidQuantity
    );
    ensure_supply(deps.storage, quantity)?;
    SALE_WINDOW
        .load(deps.storage)?
        .ensure_sale_active(env.block.time)?;

    sell_items(deps, &env, &info.sender, &config, quantity, "buy_on_sale")
}

fn execute_buy_on_presale(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    SALE_WINDOW
        .load(deps.storage)?
        .ensure_presale_active(env.block.time)?;
    ensure!(
        whitelist_contains(deps.storage, &info.sender)?,
        ContractError::ClaimForbidden
    );
    ensure_supply(deps.storage, 1)?;

    let response = sell_items(deps.branch(), &env, &info.sender, &config, 1, "buy_on_presale")?;
    whitelist_consume(deps.storage, &info.sender)?;
    Ok(response)
}

/// Sells `quantity` randomly drawn items to `buyer` and splits the payment.
///
/// Every check runs before the first write.
fn sell_items(
    deps: DepsMut,
    env: &Env,
    buyer: &Addr,
    config: &Config,
    quantity: u32,
    action: &str,
) -> Result<Response, ContractError> {
    let (Some(token), Some(dao_wallet), Some(strategy)) =
        (&config.payment_token, &config.dao_wallet, &config.strategy)
    else {
        return Err(ContractError::PaymentNotConfigured);
    };

    randomness_peek(deps.storage, buyer)?;
    let split = split_payment(config.price, quantity)?;
    ensure_payable(
        &deps.querier,
        &env.block,
        token,
        buyer,
        &env.contract.address,
        split.total,
    )?;
    ensure_operator(
        &deps.querier,
        &config.item_ledger,
        &config.item_vault,
        &env.contract.address,
    )?;

    let seed = randomness_consume(deps.storage, buyer)?;
    let token_ids = draw_items(deps.storage, seed, quantity as usize)?;

    let mut msgs = token_ids
        .iter()
        .map(|token_id| transfer_item(&config.item_ledger, buyer, token_id.clone()))
        .collect::<StdResult<Vec<CosmosMsg>>>()?;
    msgs.extend(collect_payment(token, buyer, dao_wallet, strategy, &split)?);

    let event = Event::new(EVENT_TYPE_TOKENS_BOUGHT)
        .add_attribute(ATTR_BUYER, buyer)
        .add_attribute(ATTR_TOKEN_IDS, token_ids.join(","))
        .add_attribute(ATTR_PAID, split.total)
        .add_attribute(ATTR_DAO_SHARE, split.dao)
        .add_attribute(ATTR_STRATEGY_SHARE, split.strategy)
        .add_attribute(ATTR_REMAINING, pool_remaining(deps.storage)?.to_string());
    Ok(Response::new()
        .add_messages(msgs)
        .add_attribute(ATTR_ACTION, action)
        .add_event(event))
}

fn execute_airdrop(deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    let config = load_owned_config(deps.storage, &info.sender)?;
    ensure!(
        !AIRDROP_EXECUTED.may_load(deps.storage)?.unwrap_or_default(),
        ContractError::AlreadyExecuted
    );
    let privileged = load_addresses(deps.storage, AddressList::Privileged)?;
    ensure!(
        !privileged.is_empty() && pool_remaining(deps.storage)? as usize >= privileged.len(),
        ContractError::InvalidAirdropParameters
    );
    randomness_peek(deps.storage, &info.sender)?;
    ensure_operator(
        &deps.querier,
        &config.item_ledger,
        &config.item_vault,
        &env.contract.address,
    )?;

    let seed = randomness_consume(deps.storage, &info.sender)?;
    let token_ids = draw_items(deps.storage, seed, privileged.len())?;
    AIRDROP_EXECUTED.save(deps.storage, &true)?;

    let msgs = privileged
        .iter()
        .zip(token_ids.iter())
        .map(|(recipient, token_id)| transfer_item(&config.item_ledger, recipient, token_id.clone()))
        .collect::<StdResult<Vec<CosmosMsg>>>()?;
    let addresses: Vec<&str> = privileged.iter().map(Addr::as_str).collect();
    Ok(Response::new()
        .add_messages(msgs)
        .add_attribute(ATTR_ACTION, "execute_airdrop")
        .add_event(
            Event::new(EVENT_TYPE_AIRDROP_EXECUTED)
                .add_attribute(ATTR_ADDRESSES, addresses.join(","))
                .add_attribute(ATTR_TOKEN_IDS, token_ids.join(","))
                .add_attribute(ATTR_REMAINING, pool_remaining(deps.storage)?.to_string()),
        ))
}

fn execute_filter_eligible(
    deps: DepsMut,
    info: MessageInfo,
    target_count: u32,
) -> Result<Response, ContractError> {
    load_owned_config(deps.storage, &info.sender)?;
    ensure!(target_count > 0, ContractError::InvalidQuantity);
    randomness_peek(deps.storage, &info.sender)?;
    let eligible = load_addresses(deps.storage, AddressList::Eligible)?;
    if eligible.len() <= target_count as usize {
        return Err(ContractError::InsufficientEligible {
            eligible: eligible.len() as u32,
            target: target_count,
        });
    }

    let seed = randomness_consume(deps.storage, &info.sender)?;
    let selected: Vec<Addr> = draw_subset(seed, eligible.len() as u32, target_count)?
        .into_iter()
        .map(|position| eligible[position as usize].clone())
        .collect();
    replace_addresses(deps.storage, AddressList::Privileged, &selected)?;

    let addresses: Vec<&str> = selected.iter().map(Addr::as_str).collect();
    let event = Event::new(EVENT_TYPE_SELECTED_USERS)
        .add_attribute(ATTR_ADDRESSES, addresses.join(","));
    Ok(Response::new()
        .set_data(to_json_binary(&FilterEligibleResponse { selected })?)
        .add_attribute(ATTR_ACTION, "filter_eligible")
        .add_event(event))
}

/// Applies an owner-only change of the config.
/// `update` returns the new value for the response attributes.
fn execute_update_config<F>(
    deps: DepsMut,
    info: MessageInfo,
    action: &str,
    update: F,
) -> Result<Response, ContractError>
where
    F: FnOnce(&dyn Api, &mut Config) -> Result<String, ContractError>,
{
    let mut config = load_owned_config(deps.storage, &info.sender)?;
    let value = update(deps.api, &mut config)?;
    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute(ATTR_ACTION, action)
        .add_attribute("value", value))
}

fn execute_set_presale_start(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    start: Timestamp,
) -> Result<Response, ContractError> {
    load_owned_config(deps.storage, &info.sender)?;
    let mut window = SALE_WINDOW.load(deps.storage)?;
    window.set_start(start, env.block.time)?;
    SALE_WINDOW.save(deps.storage, &window)?;
    Ok(Response::new()
        .add_attribute(ATTR_ACTION, "set_presale_start_date")
        .add_attribute("start", start.seconds().to_string()))
}

fn execute_set_presale_duration(
    deps: DepsMut,
    info: MessageInfo,
    seconds: u64,
) -> Result<Response, ContractError> {
    load_owned_config(deps.storage, &info.sender)?;
    let mut window = SALE_WINDOW.load(deps.storage)?;
    window.set_duration(seconds)?;
    SALE_WINDOW.save(deps.storage, &window)?;
    Ok(Response::new()
        .add_attribute(ATTR_ACTION, "set_presale_duration")
        .add_attribute("seconds", seconds.to_string()))
}

fn execute_set_whitelisted(
    deps: DepsMut,
    info: MessageInfo,
    addresses: Vec<String>,
) -> Result<Response, ContractError> {
    load_owned_config(deps.storage, &info.sender)?;
    let addresses = validate_addresses(deps.api, &addresses)?;
    for address in &addresses {
        whitelist_insert(deps.storage, address)?;
    }
    Ok(Response::new()
        .add_attribute(ATTR_ACTION, "set_whitelisted")
        .add_attribute("count", addresses.len().to_string()))
}

fn execute_append_addresses(
    deps: DepsMut,
    info: MessageInfo,
    list: AddressList,
    addresses: Vec<String>,
) -> Result<Response, ContractError> {
    load_owned_config(deps.storage, &info.sender)?;
    let addresses = validate_addresses(deps.api, &addresses)?;
    let count = addresses.len();
    append_addresses(deps.storage, list, addresses)?;
    let action = match list {
        AddressList::Privileged => "set_privileged",
        AddressList::Eligible => "set_eligible",
    };
    Ok(Response::new()
        .add_attribute(ATTR_ACTION, action)
        .add_attribute("count", count.to_string())
        .add_attribute(
            "total",
            load_addresses(deps.storage, list)?.len().to_string(),
        ))
}

fn execute_set_initial_tokens_length(
    deps: DepsMut,
    info: MessageInfo,
    length: u32,
) -> Result<Response, ContractError> {
    load_owned_config(deps.storage, &info.sender)?;
    ensure!(length > 0, ContractError::InvalidInitialTokensLength);
    INITIAL_TOKENS_LENGTH.save(deps.storage, &length)?;
    Ok(Response::new()
        .add_attribute(ATTR_ACTION, "set_initial_tokens_length")
        .add_attribute("length", length.to_string()))
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    CONFIG.load(deps.storage)
}

fn query_randomness(deps: Deps) -> StdResult<RandomnessResponse> {
    let response = match randomness_load(deps.storage)? {
        RandomnessState::Idle => RandomnessResponse {
            status: RandomnessStatus::Idle,
            job_id: None,
            requester: None,
        },
        RandomnessState::Requested { job_id, requester } => RandomnessResponse {
            status: RandomnessStatus::Requested,
            job_id: Some(job_id),
            requester: Some(requester),
        },
        RandomnessState::Fulfilled {
            job_id, requester, ..
        } => RandomnessResponse {
            status: RandomnessStatus::Fulfilled,
            job_id: Some(job_id),
            requester: Some(requester),
        },
    };
    Ok(response)
}

fn query_sale_state(deps: Deps, env: Env) -> StdResult<SaleStateResponse> {
    let window = SALE_WINDOW.load(deps.storage)?;
    let now = env.block.time;
    Ok(SaleStateResponse {
        phase: window.phase(now),
        presale_start: window.start,
        presale_duration: window.duration,
        presale_active: window.is_presale_active(now),
        sale_active: window.is_sale_active(now),
    })
}
