//! Holder-token registry tests: minting, enumeration and transfers.

#![cfg(test)]

use crate::test_helpers::*;
use crate::ContractError;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env};

#[test]
fn test_fresh_address_has_no_token() {
    let e = Env::default();
    let (client, _admin, _token, _cid) = setup(&e);
    let stranger = Address::generate(&e);

    assert_eq!(client.balance_of(&stranger), 0);
    assert_eq!(
        client.try_token_of_owner_by_index(&stranger, &0),
        Err(Ok(ContractError::IndexOutOfBounds))
    );
}

#[test]
fn test_mint_assigns_sequential_ids() {
    let e = Env::default();
    let (client, _admin, _token, _cid) = setup(&e);
    let a = Address::generate(&e);
    let b = Address::generate(&e);

    assert_eq!(client.mint_nft(&a), 0);
    assert_eq!(client.mint_nft(&b), 1);
    assert_eq!(client.total_supply(), 2);
    assert_eq!(client.owner_of(&0), a);
    assert_eq!(client.owner_of(&1), b);
    assert_eq!(client.token_of_owner_by_index(&b, &0), 1);
}

#[test]
fn test_mint_twice_returns_existing_token() {
    let e = Env::default();
    let (client, _admin, _token, _cid) = setup(&e);
    let a = Address::generate(&e);

    let first = client.mint_nft(&a);
    let second = client.mint_nft(&a);

    assert_eq!(first, second);
    assert_eq!(client.balance_of(&a), 1);
    assert_eq!(client.total_supply(), 1);
}

#[test]
fn test_set_message_mints_once_per_payer() {
    let e = Env::default();
    let (client, _admin, token, cid) = setup(&e);
    let a = funded_user(&e, &token, &cid);

    take_over(&client, &e, &a, "one");
    let id = client.token_of_owner_by_index(&a, &0);
    take_over(&client, &e, &a, "two");
    take_over(&client, &e, &a, "three");

    assert_eq!(client.balance_of(&a), 1);
    assert_eq!(client.total_supply(), 1);
    assert_eq!(client.token_of_owner_by_index(&a, &0), id);
}

#[test]
fn test_minted_epoch_recorded() {
    let e = Env::default();
    let (client, _admin, token, cid) = setup(&e);
    let a = funded_user(&e, &token, &cid);
    let late = Address::generate(&e);

    take_over(&client, &e, &a, "one");
    take_over(&client, &e, &a, "two");
    let id = client.mint_nft(&late);

    // Minted while epoch 2 is open.
    assert_eq!(client.current_epoch(), 2);
    assert_eq!(id, 1);
    assert_eq!(client.pending_shares(&id), 0);
}

#[test]
fn test_unknown_token_fails() {
    let e = Env::default();
    let (client, _admin, _token, _cid) = setup(&e);

    assert_eq!(client.try_owner_of(&0), Err(Ok(ContractError::UnknownToken)));
    assert_eq!(
        client.try_token_uri(&3),
        Err(Ok(ContractError::UnknownToken))
    );
}

#[test]
fn test_token_by_index_is_identity_within_supply() {
    let e = Env::default();
    let (client, _admin, _token, _cid) = setup(&e);
    for _ in 0..3 {
        client.mint_nft(&Address::generate(&e));
    }

    for i in 0..3_u32 {
        assert_eq!(client.token_by_index(&i), i);
    }
    assert_eq!(
        client.try_token_by_index(&3),
        Err(Ok(ContractError::IndexOutOfBounds))
    );
}

// ─── Transfers ─────────────────────────────────────────────────────────────

#[test]
fn test_transfer_moves_ownership() {
    let e = Env::default();
    let (client, _admin, _token, _cid) = setup(&e);
    let a = Address::generate(&e);
    let b = Address::generate(&e);
    let id = client.mint_nft(&a);

    client.transfer_token(&a, &b, &id);

    assert_eq!(client.owner_of(&id), b);
    assert_eq!(client.balance_of(&a), 0);
    assert_eq!(client.balance_of(&b), 1);
    assert_eq!(client.token_of_owner_by_index(&b, &0), id);
    assert_eq!(
        client.try_token_of_owner_by_index(&a, &0),
        Err(Ok(ContractError::IndexOutOfBounds))
    );
}

#[test]
fn test_transfer_keeps_owner_list_dense() {
    let e = Env::default();
    let (client, _admin, _token, _cid) = setup(&e);
    let a = Address::generate(&e);
    let b = Address::generate(&e);
    let c = Address::generate(&e);
    let d = Address::generate(&e);

    let t0 = client.mint_nft(&a);
    let t1 = client.mint_nft(&b);
    let t2 = client.mint_nft(&c);

    // Collect all three under d: d holds [t0, t1, t2].
    client.transfer_token(&a, &d, &t0);
    client.transfer_token(&b, &d, &t1);
    client.transfer_token(&c, &d, &t2);
    assert_eq!(client.balance_of(&d), 3);

    // Removing the first entry moves the last one into its slot.
    client.transfer_token(&d, &a, &t0);
    assert_eq!(client.balance_of(&d), 2);
    assert_eq!(client.token_of_owner_by_index(&d, &0), t2);
    assert_eq!(client.token_of_owner_by_index(&d, &1), t1);

    // Removing the last entry leaves the rest untouched.
    client.transfer_token(&d, &b, &t1);
    assert_eq!(client.balance_of(&d), 1);
    assert_eq!(client.token_of_owner_by_index(&d, &0), t2);
    assert_eq!(
        client.try_token_of_owner_by_index(&d, &1),
        Err(Ok(ContractError::IndexOutOfBounds))
    );

    assert_eq!(client.total_supply(), 3);
}

#[test]
fn test_transfer_by_non_owner_fails() {
    let e = Env::default();
    let (client, _admin, _token, _cid) = setup(&e);
    let a = Address::generate(&e);
    let mallory = Address::generate(&e);
    let id = client.mint_nft(&a);

    assert_eq!(
        client.try_transfer_token(&mallory, &mallory, &id),
        Err(Ok(ContractError::NotOwner))
    );
    assert_eq!(client.owner_of(&id), a);
}

#[test]
fn test_transfer_to_self_fails() {
    let e = Env::default();
    let (client, _admin, _token, _cid) = setup(&e);
    let a = Address::generate(&e);
    let id = client.mint_nft(&a);

    assert_eq!(
        client.try_transfer_token(&a, &a, &id),
        Err(Ok(ContractError::SelfTransfer))
    );
}

#[test]
fn test_transfer_unknown_token_fails() {
    let e = Env::default();
    let (client, _admin, _token, _cid) = setup(&e);
    let a = Address::generate(&e);
    let b = Address::generate(&e);

    assert_eq!(
        client.try_transfer_token(&a, &b, &9),
        Err(Ok(ContractError::UnknownToken))
    );
}

#[test]
fn test_sender_can_mint_again_after_transferring_away() {
    let e = Env::default();
    let (client, _admin, _token, _cid) = setup(&e);
    let a = Address::generate(&e);
    let b = Address::generate(&e);

    let first = client.mint_nft(&a);
    client.transfer_token(&a, &b, &first);
    let second = client.mint_nft(&a);

    assert_ne!(first, second);
    assert_eq!(client.owner_of(&second), a);
    assert_eq!(client.total_supply(), 2);
}
