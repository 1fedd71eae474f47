//! Share withdrawals.
//!
//! Claim records (`DataKey::Claim(token, epoch)`) are written before any
//! payout transfer. A (token, epoch) pair can be claimed once; the amount
//! stored is what was paid, which may be zero when an epoch's pot is smaller
//! than its holder count.
//!
//! `claim_all_shares` walks every closed epoch from a per-token cursor
//! starting at the epoch the token was minted in. The cursor moves to the
//! open epoch afterwards, so a repeat call with no new epochs pays nothing.

use adframe_errors::ContractError;
use soroban_sdk::{Address, Env};

use crate::epoch;
use crate::events;
use crate::math::add_i128;
use crate::membership;
use crate::pausable;
use crate::token_integration;
use crate::types::{DataKey, HolderToken};
use crate::{BUMP_TARGET, BUMP_THRESHOLD};

pub fn is_claimed(e: &Env, token_id: u32, epoch_id: u64) -> bool {
    e.storage()
        .persistent()
        .has(&DataKey::Claim(token_id, epoch_id))
}

fn mark_claimed(e: &Env, token_id: u32, epoch_id: u64, amount: i128) {
    let key = DataKey::Claim(token_id, epoch_id);
    e.storage().persistent().set(&key, &amount);
    e.storage()
        .persistent()
        .extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
}

fn claim_cursor(e: &Env, token_id: u32, token: &HolderToken) -> u64 {
    e.storage()
        .persistent()
        .get(&DataKey::ClaimCursor(token_id))
        .unwrap_or(token.minted_epoch)
}

fn set_claim_cursor(e: &Env, token_id: u32, cursor: u64) {
    let key = DataKey::ClaimCursor(token_id);
    e.storage().persistent().set(&key, &cursor);
    e.storage()
        .persistent()
        .extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
}

/// Loads the token and checks `caller` owns it.
fn require_owner(e: &Env, caller: &Address, token_id: u32) -> Result<HolderToken, ContractError> {
    let token = membership::load_token(e, token_id)?;
    if token.owner != *caller {
        return Err(ContractError::NotOwner);
    }
    Ok(token)
}

/// Withdraws the share of one closed epoch for `token_id`.
pub fn share_withdraw(
    e: &Env,
    caller: &Address,
    token_id: u32,
    epoch_id: u64,
) -> Result<i128, ContractError> {
    pausable::require_not_paused(e)?;
    require_owner(e, caller, token_id)?;

    let mut record = epoch::load_closed(e, epoch_id)?;
    if is_claimed(e, token_id, epoch_id) {
        return Err(ContractError::AlreadyClaimed);
    }
    if !epoch::is_eligible(&record, token_id) {
        return Err(ContractError::NotEligible);
    }

    let amount = epoch::entitlement(&record)?;
    mark_claimed(e, token_id, epoch_id, amount);
    epoch::record_claim(e, epoch_id, &mut record, amount)?;

    token_integration::pay_out(e, caller, amount)?;

    events::emit_share_withdrawn(e, token_id, caller, epoch_id, amount);
    Ok(amount)
}

/// Withdraws every pending share for `token_id` in one transfer.
/// Returns 0 when nothing is pending.
pub fn claim_all_shares(e: &Env, caller: &Address, token_id: u32) -> Result<i128, ContractError> {
    pausable::require_not_paused(e)?;
    let token = require_owner(e, caller, token_id)?;

    let start = claim_cursor(e, token_id, &token);
    let end = epoch::current_epoch(e);

    let mut total: i128 = 0;
    let mut claimed: u32 = 0;
    for epoch_id in start..end {
        if is_claimed(e, token_id, epoch_id) {
            continue;
        }
        let mut record = epoch::load_closed(e, epoch_id)?;
        if !epoch::is_eligible(&record, token_id) {
            continue;
        }
        let amount = epoch::entitlement(&record)?;
        mark_claimed(e, token_id, epoch_id, amount);
        epoch::record_claim(e, epoch_id, &mut record, amount)?;
        total = add_i128(total, amount)?;
        claimed += 1;
    }
    if end > start {
        set_claim_cursor(e, token_id, end);
    }

    token_integration::pay_out(e, caller, total)?;

    if claimed > 0 {
        events::emit_shares_claimed(e, token_id, caller, claimed, total);
    }
    Ok(total)
}

/// Amount `claim_all_shares` would pay right now.
pub fn pending_shares(e: &Env, token_id: u32) -> Result<i128, ContractError> {
    let token = membership::load_token(e, token_id)?;
    let start = claim_cursor(e, token_id, &token);
    let end = epoch::current_epoch(e);

    let mut total: i128 = 0;
    for epoch_id in start..end {
        if is_claimed(e, token_id, epoch_id) {
            continue;
        }
        let record = epoch::load_closed(e, epoch_id)?;
        if epoch::is_eligible(&record, token_id) {
            total = add_i128(total, epoch::entitlement(&record)?)?;
        }
    }
    Ok(total)
}
