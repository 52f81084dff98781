use cosmwasm_std::{StdResult, Uint128};

/// The DAO wallet receives `1 / DAO_SHARE_DIVISOR` of every payment
pub const DAO_SHARE_DIVISOR: u128 = 5;

/// A payment divided between the DAO wallet and the strategy contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentSplit {
    pub total: Uint128,
    pub dao: Uint128,
    pub strategy: Uint128,
}

/// Computes the price of `quantity` items and splits it.
///
/// The DAO share is rounded down. The strategy gets the rest rather than `total * 4 / 5`,
/// so a total of 7 pays 1 and 6. The shares always add up to the total and nothing remains
/// in the contract.
pub fn split_payment(price: Uint128, quantity: u32) -> StdResult<PaymentSplit> {
    let total = price.checked_mul(Uint128::from(quantity))?;
    let dao = total.checked_div(Uint128::new(DAO_SHARE_DIVISOR))?;
    let strategy = total.checked_sub(dao)?;
    Ok(PaymentSplit {
        total,
        dao,
        strategy,
    })
}
