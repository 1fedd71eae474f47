//! Epoch ledger.
//!
//! Epoch 0 is open from initialization. Each takeover credits the open epoch,
//! freezes it with the number of tokens in existence at that moment, and opens
//! the next id. Closed epochs live in `persistent()` storage and are never
//! rewritten except for their claim tallies.
//!
//! A token is eligible for a closed epoch iff `token_id < eligible_holders`,
//! i.e. it existed when the epoch closed. Every eligible token is entitled to
//! `total_collected / eligible_holders`; the truncated remainder stays in the
//! contract.

use adframe_errors::ContractError;
use soroban_sdk::Env;

use crate::events;
use crate::math::{add_i128, div_i128, mul_i128, next_u64, sub_i128};
use crate::membership;
use crate::types::{DataKey, Epoch};
use crate::{BUMP_TARGET, BUMP_THRESHOLD};

fn open_epoch() -> Epoch {
    Epoch {
        total_collected: 0,
        eligible_holders: 0,
        total_claimed: 0,
        claims: 0,
        closed: false,
        closed_at: 0,
    }
}

/// Id of the epoch currently accepting payments.
pub fn current_epoch(e: &Env) -> u64 {
    e.storage()
        .instance()
        .get(&DataKey::CurrentEpoch)
        .unwrap_or(0)
}

/// All-time sum of credited payments.
pub fn total_collected(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&DataKey::TotalCollected)
        .unwrap_or(0)
}

/// Loads a closed epoch, or `InvalidEpoch` if it is open or does not exist.
pub fn load_closed(e: &Env, epoch_id: u64) -> Result<Epoch, ContractError> {
    let key = DataKey::Epoch(epoch_id);
    let storage = e.storage().persistent();
    let epoch: Epoch = storage.get(&key).ok_or(ContractError::InvalidEpoch)?;
    storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
    Ok(epoch)
}

fn save(e: &Env, epoch_id: u64, epoch: &Epoch) {
    let key = DataKey::Epoch(epoch_id);
    e.storage().persistent().set(&key, epoch);
    e.storage()
        .persistent()
        .extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
}

/// Closed epochs come from storage; the open epoch is reported with zero totals.
pub fn get(e: &Env, epoch_id: u64) -> Result<Epoch, ContractError> {
    let current = current_epoch(e);
    if epoch_id > current {
        return Err(ContractError::InvalidEpoch);
    }
    if epoch_id == current {
        return Ok(open_epoch());
    }
    load_closed(e, epoch_id)
}

/// Credits `payment` to the open epoch, freezes it and opens the next one.
/// Returns `(closed_id, new_open_id)`.
pub fn credit_and_close(e: &Env, payment: i128, now: u64) -> Result<(u64, u64), ContractError> {
    let closed_id = current_epoch(e);
    let next_id = next_u64(closed_id)?;

    let mut epoch = open_epoch();
    epoch.total_collected = add_i128(epoch.total_collected, payment)?;
    epoch.eligible_holders = membership::total_supply(e);
    epoch.closed = true;
    epoch.closed_at = now;
    save(e, closed_id, &epoch);

    let all_time = add_i128(total_collected(e), payment)?;
    let storage = e.storage().instance();
    storage.set(&DataKey::TotalCollected, &all_time);
    storage.set(&DataKey::CurrentEpoch, &next_id);

    events::emit_epoch_closed(e, closed_id, epoch.total_collected, epoch.eligible_holders);
    Ok((closed_id, next_id))
}

/// Per-token share of a closed epoch.
pub fn entitlement(epoch: &Epoch) -> Result<i128, ContractError> {
    if epoch.eligible_holders == 0 {
        return Ok(0);
    }
    div_i128(epoch.total_collected, epoch.eligible_holders as i128)
}

/// Portion of a closed epoch that truncation leaves unassigned.
pub fn remainder(epoch: &Epoch) -> Result<i128, ContractError> {
    let share = entitlement(epoch)?;
    let assigned = mul_i128(share, epoch.eligible_holders as i128)?;
    sub_i128(epoch.total_collected, assigned)
}

pub fn is_eligible(epoch: &Epoch, token_id: u32) -> bool {
    epoch.closed && token_id < epoch.eligible_holders
}

/// Adds a withdrawal of `amount` to the epoch's claim tallies.
/// Truncated shares keep `total_claimed <= total_collected`; a breach fails
/// with `ClaimExceedsCollected`.
pub fn record_claim(
    e: &Env,
    epoch_id: u64,
    epoch: &mut Epoch,
    amount: i128,
) -> Result<(), ContractError> {
    let claimed = add_i128(epoch.total_claimed, amount)?;
    if claimed > epoch.total_collected {
        return Err(ContractError::ClaimExceedsCollected);
    }
    epoch.total_claimed = claimed;
    epoch.claims = epoch.claims.checked_add(1).ok_or(ContractError::Overflow)?;
    save(e, epoch_id, epoch);
    Ok(())
}
