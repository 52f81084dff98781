use cosmwasm_std::{from_json, Addr, HexBinary, Uint128};
use cw20::Cw20ExecuteMsg;
use cw_multi_test::Executor;
use nft_drop::msg::{
    AddressesResponse, AirdropExecutedResponse, ExecuteMsg, FilterEligibleResponse,
    GuardResponse, QueryMsg, RandomnessResponse, RandomnessStatus, SaleStateResponse,
};
use nft_drop::window::SalePhase;
use nft_drop::ContractError;
use nft_drop_multitest::strategy::Deposit;
use nft_drop_multitest::{first_attr, items, proxy, Suite, INITIAL_BALANCE, TOKEN_COUNT};

const RANDOMNESS: [u8; 32] = [
    0x9e, 0x8b, 0x21, 0x6f, 0x03, 0xc7, 0x5a, 0x44, 0xd2, 0x18, 0x7b, 0xe0, 0x36, 0x91, 0x0c,
    0xaf, 0x52, 0x6d, 0xb8, 0x27, 0xf1, 0x4e, 0x83, 0x19, 0x65, 0xca, 0x0a, 0x7d, 0x3b, 0xe4,
    0x58, 0x12,
];

/// A distinct randomness value per round
fn randomness(round: u8) -> [u8; 32] {
    let mut randomness = RANDOMNESS;
    randomness[31] = round;
    randomness
}

fn assert_error(err: cw_multi_test::error::AnyError, expected: ContractError) {
    assert_eq!(err.root_cause().to_string(), expected.to_string());
}

fn guard_held(suite: &Suite) -> bool {
    suite.query::<GuardResponse>(&QueryMsg::Guard {}).held
}

#[test]
fn sale_allocates_items_and_splits_payment() {
    let mut suite = Suite::new();
    let buyer = suite.buyer.clone();

    suite
        .execute(&buyer, &ExecuteMsg::RequestRandomness {})
        .unwrap();
    let pending: proxy::PendingResponse = suite
        .app
        .wrap()
        .query_wasm_smart(&suite.proxy, &proxy::QueryMsg::Pending {})
        .unwrap();
    assert_eq!(pending.requests.len(), 1);
    assert_eq!(pending.requests[0].origin, suite.drop.to_string());
    assert_eq!(pending.requests[0].job_id, "drop-1");
    assert!(!guard_held(&suite));

    let relayer = suite.relayer.clone();
    let proxy_addr = suite.proxy.clone();
    suite
        .app
        .execute_contract(
            relayer,
            proxy_addr,
            &proxy::ExecuteMsg::Deliver {
                randomness: HexBinary::from(RANDOMNESS),
            },
            &[],
        )
        .unwrap();
    let randomness: RandomnessResponse = suite.query(&QueryMsg::Randomness {});
    assert_eq!(randomness.status, RandomnessStatus::Fulfilled);
    assert_eq!(randomness.requester, Some(buyer.clone()));

    let res = suite.buy(&buyer, 20).unwrap();

    let mut bought = suite.items_of(&buyer);
    assert_eq!(bought.len(), 20);
    assert_eq!(suite.items_of(&suite.vault).len(), 80);
    assert_eq!(suite.tokens_left(), 80);

    let event = res
        .events
        .iter()
        .find(|event| event.ty == "wasm-tokens-bought")
        .unwrap();
    let mut announced: Vec<String> = first_attr(&event.attributes, "token_ids")
        .unwrap()
        .split(',')
        .map(String::from)
        .collect();
    announced.sort();
    bought.sort();
    assert_eq!(announced, bought);

    // 100 paid, 1/5 to the DAO and the rest to the strategy
    assert_eq!(suite.balance(&buyer), Uint128::new(INITIAL_BALANCE - 100));
    assert_eq!(suite.balance(&suite.dao), Uint128::new(20));
    assert_eq!(suite.balance(&suite.strategy), Uint128::new(80));
    assert_eq!(suite.balance(&suite.drop), Uint128::zero());
    assert_eq!(
        suite.deposits().deposits,
        vec![Deposit {
            token: suite.token.to_string(),
            buyer: buyer.to_string(),
            amount: Uint128::new(80),
        }]
    );
    assert!(!guard_held(&suite));

    // The randomness is used up
    let err = suite.buy(&buyer, 1).unwrap_err();
    assert_error(err, ContractError::InvalidRandomNumber);
}

#[test]
fn reentrant_strategy_is_rejected() {
    let mut suite = Suite::new();
    let buyer = suite.buyer.clone();
    let owner = suite.owner.clone();
    let honest_strategy = suite.strategy.clone();
    suite.install_reentrant_strategy();

    suite.provide_randomness(&buyer, RANDOMNESS);
    let err = suite.buy(&buyer, 3).unwrap_err();
    assert_error(err, ContractError::ReentrantCall);

    // Nothing of the purchase remains
    assert_eq!(suite.tokens_left(), TOKEN_COUNT);
    assert!(suite.items_of(&buyer).is_empty());
    assert_eq!(suite.balance(&buyer), Uint128::new(INITIAL_BALANCE));
    assert_eq!(suite.balance(&suite.dao), Uint128::zero());
    let randomness: RandomnessResponse = suite.query(&QueryMsg::Randomness {});
    assert_eq!(randomness.status, RandomnessStatus::Fulfilled);
    assert!(!guard_held(&suite));

    suite
        .execute(
            &owner,
            &ExecuteMsg::SetStrategyContract {
                address: honest_strategy.to_string(),
            },
        )
        .unwrap();
    suite.buy(&buyer, 3).unwrap();
    assert_eq!(suite.items_of(&buyer).len(), 3);
    assert_eq!(suite.balance(&honest_strategy), Uint128::new(12));
    assert_eq!(suite.balance(&suite.dao), Uint128::new(3));
}

#[test]
fn presale_precedes_public_sale() {
    let mut suite = Suite::new();
    let buyer = suite.buyer.clone();
    let owner = suite.owner.clone();
    let start = suite.block_time().plus_seconds(60);

    for msg in [
        ExecuteMsg::SetPresaleStartDate { start },
        ExecuteMsg::SetPresaleDuration { seconds: 3600 },
        ExecuteMsg::SetWhitelisted {
            addresses: vec![buyer.to_string()],
        },
    ] {
        suite.execute(&owner, &msg).unwrap();
    }
    let state: SaleStateResponse = suite.query(&QueryMsg::SaleState {});
    assert_eq!(state.phase, SalePhase::PresalePending);

    suite.provide_randomness(&buyer, randomness(1));
    let err = suite
        .execute(&buyer, &ExecuteMsg::BuyOnPresale {})
        .unwrap_err();
    assert_error(err, ContractError::PresaleWindowClosed);
    let err = suite.buy(&buyer, 1).unwrap_err();
    assert_error(err, ContractError::SaleNotStarted);

    suite.advance_time(60);
    let state: SaleStateResponse = suite.query(&QueryMsg::SaleState {});
    assert_eq!(state.phase, SalePhase::PresaleActive);
    let err = suite.buy(&buyer, 1).unwrap_err();
    assert_error(err, ContractError::SaleNotStarted);

    suite
        .execute(&buyer, &ExecuteMsg::BuyOnPresale {})
        .unwrap();
    assert_eq!(suite.items_of(&buyer).len(), 1);
    // A price of 5 gives 1 to the DAO and 4 to the strategy
    assert_eq!(suite.balance(&suite.dao), Uint128::new(1));
    assert_eq!(suite.balance(&suite.strategy), Uint128::new(4));

    suite.provide_randomness(&buyer, randomness(2));
    let err = suite
        .execute(&buyer, &ExecuteMsg::BuyOnPresale {})
        .unwrap_err();
    assert_error(err, ContractError::ClaimForbidden);

    suite.advance_time(3600);
    let state: SaleStateResponse = suite.query(&QueryMsg::SaleState {});
    assert_eq!(state.phase, SalePhase::SaleOpen);
    suite.buy(&buyer, 2).unwrap();
    assert_eq!(suite.items_of(&buyer).len(), 3);
    assert_eq!(suite.tokens_left(), TOKEN_COUNT - 3);
}

#[test]
fn sale_requires_approval_and_funds() {
    let mut suite = Suite::new();
    let buyer = suite.buyer.clone();
    let vault = suite.vault.clone();
    let items_addr = suite.items.clone();
    let drop = suite.drop.to_string();

    suite
        .app
        .execute_contract(
            vault.clone(),
            items_addr.clone(),
            &items::ExecuteMsg::RevokeAll {
                operator: drop.clone(),
            },
            &[],
        )
        .unwrap();
    suite.provide_randomness(&buyer, randomness(1));
    let err = suite.buy(&buyer, 1).unwrap_err();
    assert_error(err, ContractError::TransferNotApproved);

    suite
        .app
        .execute_contract(
            vault,
            items_addr,
            &items::ExecuteMsg::ApproveAll { operator: drop },
            &[],
        )
        .unwrap();
    suite.buy(&buyer, 1).unwrap();

    // Owns 1000 but allowed only 10 to be pulled
    let frugal = suite.app.api().addr_make("frugal");
    let token = suite.token.clone();
    suite
        .app
        .execute_contract(
            buyer,
            token,
            &Cw20ExecuteMsg::Transfer {
                recipient: frugal.to_string(),
                amount: Uint128::new(1000),
            },
            &[],
        )
        .unwrap();
    suite.allow_payment(&frugal, 10);
    suite.provide_randomness(&frugal, randomness(2));
    let err = suite.buy(&frugal, 3).unwrap_err();
    assert_error(err, ContractError::InsufficientFunds);

    suite.allow_payment(&frugal, 5);
    suite.buy(&frugal, 3).unwrap();
    assert_eq!(suite.items_of(&frugal).len(), 3);
    assert_eq!(suite.balance(&frugal), Uint128::new(985));

    // Allowed but broke
    let broke = suite.app.api().addr_make("broke");
    suite.allow_payment(&broke, 1000);
    suite.provide_randomness(&broke, randomness(3));
    let err = suite.buy(&broke, 1).unwrap_err();
    assert_error(err, ContractError::InsufficientFunds);
}

#[test]
fn randomness_is_bound_to_requester() {
    let mut suite = Suite::new();
    let buyer = suite.buyer.clone();
    let other = suite.app.api().addr_make("other");

    suite.provide_randomness(&other, RANDOMNESS);
    let err = suite.buy(&buyer, 1).unwrap_err();
    assert_error(err, ContractError::RandomnessNotOwned);

    // Only one value can wait for consumption
    let err = suite
        .execute(&buyer, &ExecuteMsg::RequestRandomness {})
        .unwrap_err();
    assert_error(err, ContractError::AlreadyPending);

    let owner = suite.owner.clone();
    suite
        .execute(&owner, &ExecuteMsg::ResetRandomness {})
        .unwrap();
    suite.provide_randomness(&buyer, RANDOMNESS);
    suite.buy(&buyer, 1).unwrap();
}

#[test]
fn pending_request_stays_with_requester() {
    let mut suite = Suite::new();
    let buyer = suite.buyer.clone();
    let other = suite.app.api().addr_make("other");

    suite
        .execute(&buyer, &ExecuteMsg::RequestRandomness {})
        .unwrap();
    let err = suite
        .execute(&other, &ExecuteMsg::RequestRandomness {})
        .unwrap_err();
    assert_error(err, ContractError::RandomnessNotOwned);

    // The buyer's job is the only one queued and its callback lands
    let pending: proxy::PendingResponse = suite
        .app
        .wrap()
        .query_wasm_smart(&suite.proxy, &proxy::QueryMsg::Pending {})
        .unwrap();
    assert_eq!(pending.requests.len(), 1);
    assert_eq!(pending.requests[0].job_id, "drop-1");
    let relayer = suite.relayer.clone();
    let proxy_addr = suite.proxy.clone();
    suite
        .app
        .execute_contract(
            relayer,
            proxy_addr,
            &proxy::ExecuteMsg::Deliver {
                randomness: HexBinary::from(RANDOMNESS),
            },
            &[],
        )
        .unwrap();

    suite.buy(&buyer, 1).unwrap();
    assert_eq!(suite.items_of(&buyer).len(), 1);
}

#[test]
fn selling_out_never_allocates_twice() {
    let mut suite = Suite::new();
    let buyer = suite.buyer.clone();

    for round in 0..5 {
        suite.provide_randomness(&buyer, randomness(round));
        suite.buy(&buyer, 20).unwrap();
    }
    assert_eq!(suite.tokens_left(), 0);
    assert!(suite.items_of(&suite.vault).is_empty());

    let mut bought: Vec<u32> = suite
        .items_of(&buyer)
        .iter()
        .map(|id| id.parse().unwrap())
        .collect();
    bought.sort_unstable();
    assert_eq!(bought, (1..=TOKEN_COUNT).collect::<Vec<_>>());
    assert_eq!(suite.balance(&suite.dao), Uint128::new(100));
    assert_eq!(suite.balance(&suite.strategy), Uint128::new(400));

    suite.provide_randomness(&buyer, randomness(9));
    let err = suite.buy(&buyer, 1).unwrap_err();
    assert_error(
        err,
        ContractError::InsufficientSupply {
            requested: 1,
            remaining: 0,
        },
    );
}

#[test]
fn filter_eligible_then_airdrop() {
    let mut suite = Suite::new();
    let owner = suite.owner.clone();
    let eligible: Vec<Addr> = (0..12)
        .map(|i| suite.app.api().addr_make(&format!("fan{i}")))
        .collect();
    suite
        .execute(
            &owner,
            &ExecuteMsg::SetEligible {
                addresses: eligible.iter().map(Addr::to_string).collect(),
            },
        )
        .unwrap();

    suite.provide_randomness(&owner, randomness(1));
    let res = suite
        .execute(&owner, &ExecuteMsg::FilterEligible { target_count: 5 })
        .unwrap();
    let FilterEligibleResponse { selected } = from_json(res.data.unwrap()).unwrap();
    assert_eq!(selected.len(), 5);
    assert!(selected.iter().all(|addr| eligible.contains(addr)));
    let AddressesResponse { addresses } = suite.query(&QueryMsg::Privileged {});
    assert_eq!(addresses, selected);

    suite.provide_randomness(&owner, randomness(2));
    suite
        .execute(&owner, &ExecuteMsg::ExecuteAirdrop {})
        .unwrap();
    for winner in &selected {
        assert_eq!(suite.items_of(winner).len(), 1);
    }
    for loser in eligible.iter().filter(|addr| !selected.contains(addr)) {
        assert!(suite.items_of(loser).is_empty());
    }
    assert_eq!(suite.tokens_left(), TOKEN_COUNT - 5);
    let AirdropExecutedResponse { executed } = suite.query(&QueryMsg::AirdropExecuted {});
    assert!(executed);

    suite.provide_randomness(&owner, randomness(3));
    let err = suite
        .execute(&owner, &ExecuteMsg::ExecuteAirdrop {})
        .unwrap_err();
    assert_error(err, ContractError::AlreadyExecuted);
    assert_eq!(suite.tokens_left(), TOKEN_COUNT - 5);
}
