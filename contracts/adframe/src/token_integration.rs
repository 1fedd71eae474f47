//! Payment token plumbing: pulling takeover payments in and paying shares out.
//!
//! Both directions are plain token-contract calls. A failing call traps the
//! whole invocation, so any ledger writes made before it are rolled back.

use adframe_errors::ContractError;
use soroban_sdk::token::TokenClient;
use soroban_sdk::{Address, Env};

use crate::config;

fn token_client(e: &Env) -> Result<TokenClient<'_>, ContractError> {
    let token = config::get_payment_token(e)?;
    Ok(TokenClient::new(e, &token))
}

/// Checks that `payer` approved the contract to spend `amount`.
pub fn require_allowance(e: &Env, payer: &Address, amount: i128) -> Result<(), ContractError> {
    let contract = e.current_contract_address();
    let allowance = token_client(e)?.allowance(payer, &contract);
    if allowance < amount {
        return Err(ContractError::InsufficientAllowance);
    }
    Ok(())
}

/// Pulls `amount` from `payer` into the contract using the payer's allowance.
pub fn collect_payment(e: &Env, payer: &Address, amount: i128) -> Result<(), ContractError> {
    if amount <= 0 {
        return Err(ContractError::InsufficientPayment);
    }
    require_allowance(e, payer, amount)?;
    let contract = e.current_contract_address();
    token_client(e)?.transfer_from(&contract, payer, &contract, &amount);
    Ok(())
}

/// Sends `amount` from the contract to `recipient`. Zero is a no-op.
pub fn pay_out(e: &Env, recipient: &Address, amount: i128) -> Result<(), ContractError> {
    if amount < 0 {
        return Err(ContractError::Underflow);
    }
    if amount == 0 {
        return Ok(());
    }
    let contract = e.current_contract_address();
    token_client(e)?.transfer(&contract, recipient, &amount);
    Ok(())
}
