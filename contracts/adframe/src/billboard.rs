//! The message slot and its paid takeover.
//!
//! `set_message` is the only path that advances the epoch counter. The whole
//! payment is credited to the closing epoch: anything above the quoted price
//! is a tip to the pot, not refunded.

use adframe_errors::ContractError;
use soroban_sdk::{Address, Env, String};

use crate::config;
use crate::epoch;
use crate::events;
use crate::membership;
use crate::pausable;
use crate::price::{self, DemandCurve, PriceOracle};
use crate::token_integration;
use crate::types::{Billboard, DataKey};

pub fn load(e: &Env) -> Option<Billboard> {
    e.storage().instance().get(&DataKey::Billboard)
}

/// Current message; empty before the first takeover.
pub fn message(e: &Env) -> String {
    load(e)
        .map(|b| b.message)
        .unwrap_or_else(|| String::from_str(e, ""))
}

/// Quote from the configured price curve at the current ledger time.
pub fn current_price(e: &Env) -> Result<i128, ContractError> {
    DemandCurve::load(e)?.quote(e.ledger().timestamp())
}

/// Validates a takeover against `oracle`, then mints, pulls the payment,
/// closes the epoch and stores the message. Returns the new epoch pointer.
pub fn take_over(
    e: &Env,
    oracle: &impl PriceOracle,
    payer: &Address,
    payment: i128,
    new_message: &String,
) -> Result<u64, ContractError> {
    pausable::require_not_paused(e)?;

    let now = e.ledger().timestamp();
    let price = oracle.quote(now)?;
    if payment < price {
        return Err(ContractError::InsufficientPayment);
    }

    let cfg = config::get_config(e)?;
    let len = new_message.len();
    if len > cfg.max_message_len {
        return Err(ContractError::MessageTooLong);
    }
    if len == 0 {
        return Err(ContractError::EmptyMessage);
    }

    // Pull the payment first; a failed transfer aborts before any write.
    token_integration::collect_payment(e, payer, payment)?;

    membership::mint(e, payer)?;
    let (_, new_epoch) = epoch::credit_and_close(e, payment, now)?;
    price::record_takeover(e, price, now)?;

    let board = Billboard {
        message: new_message.clone(),
        author: Some(payer.clone()),
        epoch: new_epoch,
        price,
        updated_at: now,
    };
    e.storage().instance().set(&DataKey::Billboard, &board);

    events::emit_message_set(e, payer, new_epoch, price, payment, len);
    Ok(new_epoch)
}
