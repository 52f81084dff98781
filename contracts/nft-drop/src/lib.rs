pub mod attributes;
pub mod contract;
pub mod error;
pub mod ledgers;
pub mod msg;
pub mod selection;
pub mod split;
pub mod state;
pub mod window;

pub use crate::error::ContractError;
