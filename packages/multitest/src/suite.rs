use cosmwasm_std::{Addr, Empty, HexBinary, Timestamp, Uint128};
use cw20::{BalanceResponse, Cw20Coin, Cw20ExecuteMsg, Cw20QueryMsg};
use cw_multi_test::error::AnyResult;
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};
use nft_drop::msg::{ExecuteMsg, InstantiateMsg, QueryMsg, TokensLeftResponse};

use crate::items::{self, contract_items, TokensResponse};
use crate::proxy::{self, contract_proxy};
use crate::strategy::{self, contract_strategy, DepositsResponse};

pub const PRICE: u128 = 5;
pub const MAX_QUANTITY: u32 = 20;
pub const TOKEN_COUNT: u32 = 100;
pub const INITIAL_BALANCE: u128 = 1_000_000;

pub fn contract_nft_drop() -> Box<dyn Contract<Empty>> {
    Box::new(
        ContractWrapper::new(
            nft_drop::contract::execute,
            nft_drop::contract::instantiate,
            nft_drop::contract::query,
        )
        .with_reply(nft_drop::contract::reply),
    )
}

pub fn contract_cw20() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    ))
}

/// A chain with a drop of `TOKEN_COUNT` items, the item vault approving the drop
/// and a funded buyer.
pub struct Suite {
    pub app: App,
    pub owner: Addr,
    pub buyer: Addr,
    pub vault: Addr,
    pub dao: Addr,
    pub relayer: Addr,
    pub drop: Addr,
    pub items: Addr,
    pub token: Addr,
    pub proxy: Addr,
    pub strategy: Addr,
}

impl Suite {
    pub fn new() -> Self {
        let mut app = App::default();
        let owner = app.api().addr_make("owner");
        let buyer = app.api().addr_make("buyer");
        let vault = app.api().addr_make("vault");
        let dao = app.api().addr_make("dao");
        let relayer = app.api().addr_make("relayer");

        let code_cw20 = app.store_code(contract_cw20());
        let token = app
            .instantiate_contract(
                code_cw20,
                owner.clone(),
                &cw20_base::msg::InstantiateMsg {
                    name: "Drop payment".to_string(),
                    symbol: "DROP".to_string(),
                    decimals: 6,
                    initial_balances: vec![Cw20Coin {
                        address: buyer.to_string(),
                        amount: Uint128::new(INITIAL_BALANCE),
                    }],
                    mint: None,
                    marketing: None,
                },
                &[],
                "Payment token",
                None,
            )
            .unwrap();

        let code_items = app.store_code(contract_items());
        let items = app
            .instantiate_contract(
                code_items,
                owner.clone(),
                &items::InstantiateMsg {},
                &[],
                "Items",
                None,
            )
            .unwrap();

        let code_proxy = app.store_code(contract_proxy());
        let proxy = app
            .instantiate_contract(
                code_proxy,
                owner.clone(),
                &proxy::InstantiateMsg {},
                &[],
                "Nois proxy",
                None,
            )
            .unwrap();

        let code_strategy = app.store_code(contract_strategy());
        let strategy = app
            .instantiate_contract(
                code_strategy,
                owner.clone(),
                &strategy::InstantiateMsg { reenter: None },
                &[],
                "Strategy",
                None,
            )
            .unwrap();

        let token_ids: Vec<String> = (1..=TOKEN_COUNT).map(|id| id.to_string()).collect();
        let code_drop = app.store_code(contract_nft_drop());
        let drop = app
            .instantiate_contract(
                code_drop,
                owner.clone(),
                &InstantiateMsg {
                    owner: None,
                    item_ledger: items.to_string(),
                    item_vault: vault.to_string(),
                    nois_proxy: proxy.to_string(),
                    payment_token: Some(token.to_string()),
                    dao_wallet: Some(dao.to_string()),
                    strategy: Some(strategy.to_string()),
                    price: Uint128::new(PRICE),
                    max_quantity: MAX_QUANTITY,
                    tokens: Some(token_ids.clone()),
                },
                &[],
                "NFT drop",
                None,
            )
            .unwrap();

        app.execute_contract(
            owner.clone(),
            items.clone(),
            &items::ExecuteMsg::Mint {
                owner: vault.to_string(),
                token_ids,
            },
            &[],
        )
        .unwrap();
        app.execute_contract(
            vault.clone(),
            items.clone(),
            &items::ExecuteMsg::ApproveAll {
                operator: drop.to_string(),
            },
            &[],
        )
        .unwrap();

        let mut suite = Suite {
            app,
            owner,
            buyer,
            vault,
            dao,
            relayer,
            drop,
            items,
            token,
            proxy,
            strategy,
        };
        let buyer = suite.buyer.clone();
        suite.allow_payment(&buyer, INITIAL_BALANCE);
        suite
    }

    /// Lets the drop pull up to `amount` from `payer`
    pub fn allow_payment(&mut self, payer: &Addr, amount: u128) {
        self.app
            .execute_contract(
                payer.clone(),
                self.token.clone(),
                &Cw20ExecuteMsg::IncreaseAllowance {
                    spender: self.drop.to_string(),
                    amount: Uint128::new(amount),
                    expires: None,
                },
                &[],
            )
            .unwrap();
    }

    pub fn execute(&mut self, sender: &Addr, msg: &ExecuteMsg) -> AnyResult<AppResponse> {
        self.app
            .execute_contract(sender.clone(), self.drop.clone(), msg, &[])
    }

    /// Requests randomness as `requester` and has the relayer deliver it through the proxy
    pub fn provide_randomness(&mut self, requester: &Addr, randomness: [u8; 32]) {
        self.execute(requester, &ExecuteMsg::RequestRandomness {})
            .unwrap();
        self.app
            .execute_contract(
                self.relayer.clone(),
                self.proxy.clone(),
                &proxy::ExecuteMsg::Deliver {
                    randomness: HexBinary::from(randomness),
                },
                &[],
            )
            .unwrap();
    }

    pub fn buy(&mut self, buyer: &Addr, quantity: u32) -> AnyResult<AppResponse> {
        self.execute(buyer, &ExecuteMsg::BuyOnSale { quantity })
    }

    pub fn query<T: serde::de::DeserializeOwned>(&self, msg: &QueryMsg) -> T {
        self.app
            .wrap()
            .query_wasm_smart(&self.drop, msg)
            .unwrap()
    }

    pub fn tokens_left(&self) -> u32 {
        self.query::<TokensLeftResponse>(&QueryMsg::TokensLeft {})
            .remaining
    }

    /// Items held by `owner`
    pub fn items_of(&self, owner: &Addr) -> Vec<String> {
        let TokensResponse { tokens } = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.items,
                &items::QueryMsg::Tokens {
                    owner: owner.to_string(),
                },
            )
            .unwrap();
        tokens
    }

    pub fn balance(&self, address: &Addr) -> Uint128 {
        let BalanceResponse { balance } = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.token,
                &Cw20QueryMsg::Balance {
                    address: address.to_string(),
                },
            )
            .unwrap();
        balance
    }

    pub fn deposits(&self) -> DepositsResponse {
        self.app
            .wrap()
            .query_wasm_smart(&self.strategy, &strategy::QueryMsg::Deposits {})
            .unwrap()
    }

    /// Replaces the strategy with one that calls `BuyOnSale` when receiving its share
    pub fn install_reentrant_strategy(&mut self) {
        let code_strategy = self.app.store_code(contract_strategy());
        let strategy = self
            .app
            .instantiate_contract(
                code_strategy,
                self.owner.clone(),
                &strategy::InstantiateMsg {
                    reenter: Some(self.drop.to_string()),
                },
                &[],
                "Reentrant strategy",
                None,
            )
            .unwrap();
        let owner = self.owner.clone();
        self.execute(
            &owner,
            &ExecuteMsg::SetStrategyContract {
                address: strategy.to_string(),
            },
        )
        .unwrap();
        self.strategy = strategy;
    }

    pub fn block_time(&self) -> Timestamp {
        self.app.block_info().time
    }

    pub fn advance_time(&mut self, seconds: u64) {
        self.app
            .update_block(|block| block.time = block.time.plus_seconds(seconds));
    }
}

impl Default for Suite {
    fn default() -> Self {
        Self::new()
    }
}
