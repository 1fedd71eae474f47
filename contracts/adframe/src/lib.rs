//! AdFrame Billboard Contract
//!
//! A single message slot whose right-to-write is sold at a demand-driven
//! price. Every payer receives a holder token, and every payment is split
//! pro-rata between all tokens that exist when the payment lands.
//!
//! ## Flow
//!
//! 1. `current_price` quotes the takeover price.
//! 2. `set_message` pulls the payment, mints the payer's token (once per
//!    address), credits the open epoch, freezes it and opens the next one.
//! 3. Holders look up their token with `token_of_owner_by_index` and withdraw
//!    with `share_withdraw` (one epoch) or `claim_all_shares` (all pending).
//!
//! ## Key design decisions
//!
//! - **Every invocation is atomic**: an `Err` return or a failed token
//!   transfer rolls back all storage writes of the call.
//! - **Checks-Effects-Interactions**: claim records are written before payouts.
//! - **Tips stay in the pot**: payment above the quote is credited in full.
//! - **Eligibility**: tokens in existence when an epoch closes share its pot,
//!   including the payer who closed it.
//!
//! ## Storage Layout
//!
//! | Key                                  | Tier           |
//! |--------------------------------------|----------------|
//! | Admin, PaymentToken, Config, Paused  | `instance()`   |
//! | Pricing, Billboard, counters         | `instance()`   |
//! | Token, Balance, OwnedToken           | `persistent()` |
//! | Epoch, Claim, ClaimCursor            | `persistent()` |

#![no_std]

mod billboard;
mod config;
mod distributor;
mod epoch;
mod events;
mod math;
mod membership;
mod metadata;
mod pausable;
mod price;
mod token_integration;
pub mod types;

pub use adframe_errors::ContractError;
pub use metadata::{MetadataProvider, OnChainMetadata};
pub use price::{DemandCurve, PriceOracle};
pub use types::{Billboard, BillboardConfig, Epoch, PricingState};

use soroban_sdk::{contract, contractimpl, Address, Env, String};

/// Minimum ledger TTL before a bump is requested (~1 day at 5 s/ledger).
pub(crate) const BUMP_THRESHOLD: u32 = 17_280;
/// Target TTL after a bump (~30 days).
pub(crate) const BUMP_TARGET: u32 = 518_400;


#[cfg(test)]
mod test_billboard;

#[cfg(test)]
mod test_membership;





// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct AdFrame;

#[contractimpl]
impl AdFrame {
    // ── Admin setup ────────────────────────────────────────────────────────

    /// One-time initialization. Stores `admin`, the payment `token` and the
    /// billboard configuration, and opens epoch 0.
    ///
    /// # Errors
    /// * `AlreadyInitialized` - called twice
    /// * `InvalidConfig` - configuration out of range
    pub fn initialize(
        e: Env,
        admin: Address,
        token: Address,
        config: BillboardConfig,
    ) -> Result<(), ContractError> {
        config::init(&e, &admin, &token, &config)?;
        events::emit_initialized(&e, &admin, &token);
        Ok(())
    }

    /// Replace the billboard configuration. Takes effect on the next quote.
    pub fn update_config(
        e: Env,
        admin: Address,
        config: BillboardConfig,
    ) -> Result<(), ContractError> {
        config::require_initialized(&e)?;
        config::require_admin(&e, &admin)?;
        config::set_config(&e, &config)?;
        events::emit_config_updated(&e, &admin, &config);
        Ok(())
    }

    /// Hand admin rights to `new_admin`.
    pub fn set_admin(e: Env, admin: Address, new_admin: Address) -> Result<(), ContractError> {
        config::require_initialized(&e)?;
        config::require_admin(&e, &admin)?;
        config::set_admin(&e, &new_admin);
        events::emit_admin_changed(&e, &admin, &new_admin);
        Ok(())
    }

    pub fn pause(e: Env, admin: Address) -> Result<(), ContractError> {
        config::require_initialized(&e)?;
        config::require_admin(&e, &admin)?;
        pausable::set_paused(&e, true);
        events::emit_pause_changed(&e, &admin, true);
        Ok(())
    }

    pub fn unpause(e: Env, admin: Address) -> Result<(), ContractError> {
        config::require_initialized(&e)?;
        config::require_admin(&e, &admin)?;
        pausable::set_paused(&e, false);
        events::emit_pause_changed(&e, &admin, false);
        Ok(())
    }

    pub fn is_paused(e: Env) -> bool {
        pausable::is_paused(&e)
    }

    pub fn get_admin(e: Env) -> Result<Address, ContractError> {
        config::get_admin(&e)
    }

    pub fn get_config(e: Env) -> Result<BillboardConfig, ContractError> {
        config::get_config(&e)
    }

    pub fn payment_token(e: Env) -> Result<Address, ContractError> {
        config::get_payment_token(&e)
    }

    // ── Billboard ──────────────────────────────────────────────────────────

    /// Current message. Empty before the first takeover.
    pub fn billboard(e: Env) -> String {
        billboard::message(&e)
    }

    /// Full billboard record, or `None` before the first takeover.
    pub fn billboard_state(e: Env) -> Option<Billboard> {
        billboard::load(&e)
    }

    /// Amount required to take over the billboard right now.
    pub fn current_price(e: Env) -> Result<i128, ContractError> {
        config::require_initialized(&e)?;
        billboard::current_price(&e)
    }

    /// Pay `payment` to replace the message. `payer` must have approved the
    /// contract for at least `payment`. Returns the new epoch pointer.
    ///
    /// # Errors
    /// * `InsufficientPayment` - `payment` below `current_price()`
    /// * `MessageTooLong` / `EmptyMessage` - message length out of bounds
    /// * `InsufficientAllowance` - payer approval below `payment`
    /// * `ContractPaused`
    pub fn set_message(
        e: Env,
        payer: Address,
        payment: i128,
        message: String,
    ) -> Result<u64, ContractError> {
        config::require_initialized(&e)?;
        payer.require_auth();
        let oracle = DemandCurve::load(&e)?;
        billboard::take_over(&e, &oracle, &payer, payment, &message)
    }

    // ── Holder tokens ──────────────────────────────────────────────────────

    /// Mint a holder token for `caller`, or return the one it already holds.
    pub fn mint_nft(e: Env, caller: Address) -> Result<u32, ContractError> {
        config::require_initialized(&e)?;
        caller.require_auth();
        pausable::require_not_paused(&e)?;
        membership::mint(&e, &caller)
    }

    pub fn balance_of(e: Env, owner: Address) -> u32 {
        membership::balance_of(&e, &owner)
    }

    pub fn owner_of(e: Env, token_id: u32) -> Result<Address, ContractError> {
        membership::owner_of(&e, token_id)
    }

    /// `owner`'s `index`-th token, or `IndexOutOfBounds`.
    pub fn token_of_owner_by_index(
        e: Env,
        owner: Address,
        index: u32,
    ) -> Result<u32, ContractError> {
        membership::token_of_owner_by_index(&e, &owner, index)
    }

    pub fn token_by_index(e: Env, index: u32) -> Result<u32, ContractError> {
        membership::token_by_index(&e, index)
    }

    pub fn total_supply(e: Env) -> u32 {
        membership::total_supply(&e)
    }

    /// Move a holder token. Pending shares move with it.
    pub fn transfer_token(
        e: Env,
        from: Address,
        to: Address,
        token_id: u32,
    ) -> Result<(), ContractError> {
        config::require_initialized(&e)?;
        from.require_auth();
        pausable::require_not_paused(&e)?;
        membership::transfer(&e, &from, &to, token_id)
    }

    /// Base64 JSON metadata document for `token_id`.
    pub fn token_uri(e: Env, token_id: u32) -> Result<String, ContractError> {
        let token = membership::load_token(&e, token_id)?;
        OnChainMetadata.token_uri(&e, token_id, &token)
    }

    // ── Epochs ─────────────────────────────────────────────────────────────

    /// Id of the epoch the next payment will be credited to.
    pub fn current_epoch(e: Env) -> u64 {
        epoch::current_epoch(&e)
    }

    /// Epoch record. The open epoch reports zero totals; ids beyond it fail
    /// with `InvalidEpoch`.
    pub fn get_epoch(e: Env, epoch_id: u64) -> Result<Epoch, ContractError> {
        epoch::get(&e, epoch_id)
    }

    /// Part of a closed epoch's pot that per-holder truncation leaves locked.
    pub fn epoch_remainder(e: Env, epoch_id: u64) -> Result<i128, ContractError> {
        let record = epoch::load_closed(&e, epoch_id)?;
        epoch::remainder(&record)
    }

    /// Sum of every accepted payment.
    pub fn total_collected(e: Env) -> i128 {
        epoch::total_collected(&e)
    }

    // ── Shares ─────────────────────────────────────────────────────────────

    /// Withdraw `token_id`'s share of one closed epoch.
    ///
    /// # Errors
    /// * `UnknownToken` / `NotOwner`
    /// * `InvalidEpoch` - epoch missing or still open
    /// * `AlreadyClaimed`
    /// * `NotEligible` - token minted after the epoch closed
    pub fn share_withdraw(
        e: Env,
        caller: Address,
        token_id: u32,
        epoch_id: u64,
    ) -> Result<i128, ContractError> {
        config::require_initialized(&e)?;
        caller.require_auth();
        distributor::share_withdraw(&e, &caller, token_id, epoch_id)
    }

    /// Withdraw all pending shares of `token_id` in a single transfer.
    /// Returns 0 when nothing is pending.
    pub fn claim_all_shares(e: Env, caller: Address, token_id: u32) -> Result<i128, ContractError> {
        config::require_initialized(&e)?;
        caller.require_auth();
        distributor::claim_all_shares(&e, &caller, token_id)
    }

    pub fn pending_shares(e: Env, token_id: u32) -> Result<i128, ContractError> {
        distributor::pending_shares(&e, token_id)
    }

    pub fn is_claimed(e: Env, token_id: u32, epoch_id: u64) -> bool {
        distributor::is_claimed(&e, token_id, epoch_id)
    }
}
