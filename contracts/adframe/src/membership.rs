//! Enumerable holder-token registry.
//!
//! Token ids are assigned sequentially from 0 and tokens are never burned, so
//! `total_supply` doubles as the next id and `token_by_index(i) == i`.
//! Each owner's tokens form a dense list `OwnedToken(owner, 0..balance)`;
//! transfers keep it dense by moving the owner's last token into the gap.

use adframe_errors::ContractError;
use soroban_sdk::{Address, Env};

use crate::epoch;
use crate::events;
use crate::math::next_u32;
use crate::types::{DataKey, HolderToken};
use crate::{BUMP_TARGET, BUMP_THRESHOLD};

pub fn total_supply(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn balance_of(e: &Env, owner: &Address) -> u32 {
    e.storage()
        .persistent()
        .get(&DataKey::Balance(owner.clone()))
        .unwrap_or(0)
}

/// Loads a token record, or `UnknownToken` if `token_id` was never minted.
pub fn load_token(e: &Env, token_id: u32) -> Result<HolderToken, ContractError> {
    let key = DataKey::Token(token_id);
    let storage = e.storage().persistent();
    let token: HolderToken = storage.get(&key).ok_or(ContractError::UnknownToken)?;
    storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
    Ok(token)
}

fn save_token(e: &Env, token_id: u32, token: &HolderToken) {
    let key = DataKey::Token(token_id);
    e.storage().persistent().set(&key, token);
    e.storage()
        .persistent()
        .extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
}

fn set_balance(e: &Env, owner: &Address, balance: u32) {
    let key = DataKey::Balance(owner.clone());
    e.storage().persistent().set(&key, &balance);
    e.storage()
        .persistent()
        .extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
}

fn set_owned(e: &Env, owner: &Address, index: u32, token_id: u32) {
    let key = DataKey::OwnedToken(owner.clone(), index);
    e.storage().persistent().set(&key, &token_id);
    e.storage()
        .persistent()
        .extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
}

pub fn owner_of(e: &Env, token_id: u32) -> Result<Address, ContractError> {
    Ok(load_token(e, token_id)?.owner)
}

/// The `index`-th token held by `owner`.
pub fn token_of_owner_by_index(
    e: &Env,
    owner: &Address,
    index: u32,
) -> Result<u32, ContractError> {
    if index >= balance_of(e, owner) {
        return Err(ContractError::IndexOutOfBounds);
    }
    e.storage()
        .persistent()
        .get(&DataKey::OwnedToken(owner.clone(), index))
        .ok_or(ContractError::IndexOutOfBounds)
}

pub fn token_by_index(e: &Env, index: u32) -> Result<u32, ContractError> {
    if index >= total_supply(e) {
        return Err(ContractError::IndexOutOfBounds);
    }
    Ok(index)
}

/// Issues a token to `owner` unless it already holds one, in which case the
/// owner's first token is returned and nothing is written.
pub fn mint(e: &Env, owner: &Address) -> Result<u32, ContractError> {
    let balance = balance_of(e, owner);
    if balance > 0 {
        return token_of_owner_by_index(e, owner, 0);
    }

    let token_id = total_supply(e);
    let minted_epoch = epoch::current_epoch(e);
    let token = HolderToken {
        owner: owner.clone(),
        owner_index: 0,
        minted_epoch,
    };
    save_token(e, token_id, &token);
    set_owned(e, owner, 0, token_id);
    set_balance(e, owner, 1);
    e.storage()
        .instance()
        .set(&DataKey::TotalSupply, &next_u32(token_id)?);

    events::emit_token_minted(e, owner, token_id, minted_epoch);
    Ok(token_id)
}

/// Moves `token_id` from `from` to `to`. Unclaimed shares travel with the token.
pub fn transfer(e: &Env, from: &Address, to: &Address, token_id: u32) -> Result<(), ContractError> {
    let mut token = load_token(e, token_id)?;
    if token.owner != *from {
        return Err(ContractError::NotOwner);
    }
    if from == to {
        return Err(ContractError::SelfTransfer);
    }

    // Close the gap in the sender's list with its last entry.
    let from_balance = balance_of(e, from);
    let last_index = from_balance
        .checked_sub(1)
        .ok_or(ContractError::Underflow)?;
    if token.owner_index != last_index {
        let moved_id = token_of_owner_by_index(e, from, last_index)?;
        let mut moved = load_token(e, moved_id)?;
        moved.owner_index = token.owner_index;
        save_token(e, moved_id, &moved);
        set_owned(e, from, token.owner_index, moved_id);
    }
    e.storage()
        .persistent()
        .remove(&DataKey::OwnedToken(from.clone(), last_index));
    set_balance(e, from, last_index);

    let to_balance = balance_of(e, to);
    set_owned(e, to, to_balance, token_id);
    set_balance(e, to, next_u32(to_balance)?);

    token.owner = to.clone();
    token.owner_index = to_balance;
    save_token(e, token_id, &token);

    events::emit_token_transferred(e, from, to, token_id);
    Ok(())
}
