//! Overflow-safe arithmetic helpers for payment and share calculations.
//!
//! All functions use checked arithmetic and surface failures as a
//! `ContractError` so the enclosing invocation rolls back.

use adframe_errors::ContractError;

/// Basis-point denominator.
pub const BPS_DENOMINATOR: i128 = 10_000;

#[inline]
pub fn add_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_add(b).ok_or(ContractError::Overflow)
}

#[inline]
pub fn sub_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_sub(b).ok_or(ContractError::Underflow)
}

#[inline]
pub fn mul_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_mul(b).ok_or(ContractError::Overflow)
}

#[inline]
pub fn div_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    if b == 0 {
        return Err(ContractError::DivisionByZero);
    }
    a.checked_div(b).ok_or(ContractError::Overflow)
}

/// `amount * (10_000 + bps) / 10_000`, truncating.
#[inline]
pub fn increase_by_bps(amount: i128, bps: u32) -> Result<i128, ContractError> {
    let factor = add_i128(BPS_DENOMINATOR, bps as i128)?;
    div_i128(mul_i128(amount, factor)?, BPS_DENOMINATOR)
}

/// Next value of a `u64` counter.
#[inline]
pub fn next_u64(value: u64) -> Result<u64, ContractError> {
    value.checked_add(1).ok_or(ContractError::Overflow)
}

/// Next value of a `u32` counter.
#[inline]
pub fn next_u32(value: u32) -> Result<u32, ContractError> {
    value.checked_add(1).ok_or(ContractError::Overflow)
}
