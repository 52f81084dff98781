//! Picks pool slots and candidate positions from a single randomness value.
//!
//! One randomness value backs every draw of a multi-item purchase. Each draw hashes the
//! value together with the current pool size, which shrinks by one after every draw,
//! so sequential draws from the same seed are independent.

use nois::int_in_range;
use sha2::{Digest, Sha256};

use crate::error::ContractError;

const DRAW_DOMAIN: &[u8] = b"draw";

fn mix(seed: [u8; 32], discriminator: u32) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(seed);
    hasher.update(DRAW_DOMAIN);
    hasher.update(discriminator.to_be_bytes());
    hasher.finalize().into()
}

/// Returns an index in `0..pool_size` for the next removal from a pool of `pool_size` items.
pub fn draw_one(seed: [u8; 32], pool_size: u32) -> Result<u32, ContractError> {
    if pool_size == 0 {
        return Err(ContractError::EmptyPool);
    }
    Ok(int_in_range(mix(seed, pool_size), 0, pool_size - 1))
}

/// Selects `target_count` distinct positions out of `0..candidate_count`, in draw order.
///
/// Selecting every candidate returns them in their original order.
pub fn draw_subset(
    seed: [u8; 32],
    candidate_count: u32,
    target_count: u32,
) -> Result<Vec<u32>, ContractError> {
    if target_count > candidate_count {
        return Err(ContractError::InsufficientCandidates {
            candidates: candidate_count,
            target: target_count,
        });
    }
    if target_count == candidate_count {
        return Ok((0..candidate_count).collect());
    }

    let mut remaining: Vec<u32> = (0..candidate_count).collect();
    let mut selected = Vec::with_capacity(target_count as usize);
    while selected.len() < target_count as usize {
        let index = draw_one(seed, remaining.len() as u32)?;
        selected.push(remaining.swap_remove(index as usize));
    }
    Ok(selected)
}
