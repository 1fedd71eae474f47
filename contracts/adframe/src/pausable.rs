use adframe_errors::ContractError;
use soroban_sdk::Env;

use crate::types::DataKey;

pub fn is_paused(e: &Env) -> bool {
    e.storage().instance().get(&DataKey::Paused).unwrap_or(false)
}

pub fn require_not_paused(e: &Env) -> Result<(), ContractError> {
    if is_paused(e) {
        return Err(ContractError::ContractPaused);
    }
    Ok(())
}

pub fn set_paused(e: &Env, paused: bool) {
    e.storage().instance().set(&DataKey::Paused, &paused);
}
