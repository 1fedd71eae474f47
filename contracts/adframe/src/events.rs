use soroban_sdk::{Address, Env, Symbol};

use crate::types::BillboardConfig;

/// Emitted once when the contract is initialized.
///
/// # Topics
/// * `Symbol` - "initialized"
///
/// # Data
/// * `Address` - The admin
/// * `Address` - The payment token
pub fn emit_initialized(e: &Env, admin: &Address, payment_token: &Address) {
    let topics = (Symbol::new(e, "initialized"),);
    e.events()
        .publish(topics, (admin.clone(), payment_token.clone()));
}

/// Emitted when the admin replaces the billboard configuration.
pub fn emit_config_updated(e: &Env, admin: &Address, config: &BillboardConfig) {
    let topics = (Symbol::new(e, "config_updated"), admin.clone());
    e.events().publish(topics, config.clone());
}

/// Emitted when admin rights move to a new address.
pub fn emit_admin_changed(e: &Env, previous: &Address, admin: &Address) {
    let topics = (Symbol::new(e, "admin_changed"), previous.clone());
    e.events().publish(topics, admin.clone());
}

/// Emitted on pause and unpause. Topic is "paused" or "unpaused".
pub fn emit_pause_changed(e: &Env, admin: &Address, paused: bool) {
    let name = if paused { "paused" } else { "unpaused" };
    e.events()
        .publish((Symbol::new(e, name), admin.clone()), ());
}

/// Emitted when a holder token is minted.
///
/// # Topics
/// * `Symbol` - "token_minted"
/// * `Address` - The new owner
///
/// # Data
/// * `u32` - Token id
/// * `u64` - Epoch open at mint time
pub fn emit_token_minted(e: &Env, owner: &Address, token_id: u32, epoch: u64) {
    let topics = (Symbol::new(e, "token_minted"), owner.clone());
    e.events().publish(topics, (token_id, epoch));
}

/// Emitted when a holder token changes owner.
pub fn emit_token_transferred(e: &Env, from: &Address, to: &Address, token_id: u32) {
    let topics = (Symbol::new(e, "token_transferred"), from.clone(), to.clone());
    e.events().publish(topics, token_id);
}

/// Emitted when a paid takeover replaces the billboard message.
///
/// # Topics
/// * `Symbol` - "message_set"
/// * `Address` - The payer
///
/// # Data
/// * `u64` - New epoch pointer
/// * `i128` - Quoted price
/// * `i128` - Payment credited (price plus tip)
/// * `u32` - Message length in bytes
pub fn emit_message_set(
    e: &Env,
    payer: &Address,
    epoch: u64,
    price: i128,
    payment: i128,
    message_len: u32,
) {
    let topics = (Symbol::new(e, "message_set"), payer.clone());
    e.events()
        .publish(topics, (epoch, price, payment, message_len));
}

/// Emitted when an epoch is frozen.
///
/// # Topics
/// * `Symbol` - "epoch_closed"
/// * `u64` - Epoch id
///
/// # Data
/// * `i128` - Total collected
/// * `u32` - Eligible holders
pub fn emit_epoch_closed(e: &Env, epoch_id: u64, total_collected: i128, eligible_holders: u32) {
    let topics = (Symbol::new(e, "epoch_closed"), epoch_id);
    e.events()
        .publish(topics, (total_collected, eligible_holders));
}

/// Emitted for a single-epoch withdrawal.
pub fn emit_share_withdrawn(e: &Env, token_id: u32, owner: &Address, epoch_id: u64, amount: i128) {
    let topics = (Symbol::new(e, "share_withdrawn"), token_id);
    e.events()
        .publish(topics, (owner.clone(), epoch_id, amount));
}

/// Emitted for a bulk claim that found at least one pending epoch.
///
/// # Data
/// * `Address` - Recipient
/// * `u32` - Number of epochs marked claimed
/// * `i128` - Amount transferred
pub fn emit_shares_claimed(e: &Env, token_id: u32, owner: &Address, epochs: u32, amount: i128) {
    let topics = (Symbol::new(e, "shares_claimed"), token_id);
    e.events()
        .publish(topics, (owner.clone(), epochs, amount));
}
