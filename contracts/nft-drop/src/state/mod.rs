mod config;
mod guard;
mod lists;
mod pool;
mod randomness;

pub use config::{Config, AIRDROP_EXECUTED, CONFIG, INITIAL_TOKENS_LENGTH, SALE_WINDOW};
pub use guard::{
    guard_acquire, guard_is_held, guard_release, guard_release_after, with_guard,
    RELEASE_GUARD_REPLY_ID,
};
pub use lists::{
    append_addresses, load_addresses, replace_addresses, validate_list_len, whitelist_consume,
    whitelist_contains, whitelist_insert, AddressList, MAX_LIST_LEN,
};
pub use pool::{pool_add, pool_is_added, pool_remaining, pool_take_at};
pub use randomness::{
    randomness_consume, randomness_fulfill, randomness_load, randomness_peek, randomness_request,
    randomness_reset, RandomnessState,
};

/// Top level storage key. Values must not conflict.
/// Each key is only one byte long to ensure we use the smallest possible storage keys.
#[repr(u8)]
pub enum TopKey {
    Config = b'c',
    SaleWindow = b'w',
    AirdropExecuted = b'x',
    InitialTokensLength = b'i',
    Guard = b'g',
    PoolSlots = b'p',
    PoolLength = b'P',
    PoolAdded = b'a',
    Randomness = b'r',
    RandomnessJobCounter = b'R',
    Whitelist = b'W',
    Privileged = b'v',
    Eligible = b'e',
}

impl TopKey {
    const fn as_str(&self) -> &str {
        let array_ref = unsafe { std::mem::transmute::<_, &[u8; 1]>(self) };
        match core::str::from_utf8(array_ref) {
            Ok(a) => a,
            Err(_) => panic!("Non-utf8 enum value found. Use a-z, A-Z and 0-9"),
        }
    }
}
