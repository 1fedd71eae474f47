//! Contract configuration and admin checks.
//!
//! Admin, payment token and `BillboardConfig` live in `instance()` storage:
//! a small, bounded set of values needed by almost every call.

use adframe_errors::ContractError;
use soroban_sdk::{Address, Env};

use crate::types::{BillboardConfig, DataKey};
use crate::{BUMP_TARGET, BUMP_THRESHOLD};

/// Upper bound on the per-takeover price step (1000%).
pub const MAX_STEP_BPS: u32 = 100_000;

pub fn validate(config: &BillboardConfig) -> Result<(), ContractError> {
    if config.base_price <= 0
        || config.decay_period == 0
        || config.max_message_len == 0
        || config.step_bps > MAX_STEP_BPS
    {
        return Err(ContractError::InvalidConfig);
    }
    Ok(())
}

pub fn is_initialized(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Admin)
}

pub fn require_initialized(e: &Env) -> Result<(), ContractError> {
    if !is_initialized(e) {
        return Err(ContractError::NotInitialized);
    }
    e.storage()
        .instance()
        .extend_ttl(BUMP_THRESHOLD, BUMP_TARGET);
    Ok(())
}

pub fn init(
    e: &Env,
    admin: &Address,
    payment_token: &Address,
    config: &BillboardConfig,
) -> Result<(), ContractError> {
    if is_initialized(e) {
        return Err(ContractError::AlreadyInitialized);
    }
    validate(config)?;
    let storage = e.storage().instance();
    storage.set(&DataKey::Admin, admin);
    storage.set(&DataKey::PaymentToken, payment_token);
    storage.set(&DataKey::Config, config);
    storage.set(&DataKey::Paused, &false);
    storage.set(&DataKey::CurrentEpoch, &0_u64);
    storage.set(&DataKey::TotalSupply, &0_u32);
    storage.set(&DataKey::TotalCollected, &0_i128);
    Ok(())
}

pub fn get_admin(e: &Env) -> Result<Address, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(ContractError::NotInitialized)
}

pub fn set_admin(e: &Env, admin: &Address) {
    e.storage().instance().set(&DataKey::Admin, admin);
}

/// Checks `caller` against the stored admin and requires its signature.
pub fn require_admin(e: &Env, caller: &Address) -> Result<(), ContractError> {
    let stored = get_admin(e)?;
    caller.require_auth();
    if stored != *caller {
        return Err(ContractError::NotAdmin);
    }
    Ok(())
}

pub fn get_config(e: &Env) -> Result<BillboardConfig, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(ContractError::NotInitialized)
}

pub fn set_config(e: &Env, config: &BillboardConfig) -> Result<(), ContractError> {
    validate(config)?;
    e.storage().instance().set(&DataKey::Config, config);
    Ok(())
}

pub fn get_payment_token(e: &Env) -> Result<Address, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::PaymentToken)
        .ok_or(ContractError::NotInitialized)
}
