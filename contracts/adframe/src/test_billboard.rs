//! Takeover protocol tests: pricing, payment checks and epoch advancement.

#![cfg(test)]

use crate::test_helpers::*;
use crate::{AdFrame, AdFrameClient, ContractError};
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{Address, Env, String};

// ═══════════════════════════════════════════════════════════════════
// 1. Price oracle
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_first_price_is_base_price() {
    let e = Env::default();
    let (client, _admin, _token, _cid) = setup(&e);
    assert_eq!(client.current_price(), BASE_PRICE);
}

#[test]
fn test_price_before_initialize_fails() {
    let e = Env::default();
    let contract_id = e.register(AdFrame, ());
    let client = AdFrameClient::new(&e, &contract_id);
    assert_eq!(
        client.try_current_price(),
        Err(Ok(ContractError::NotInitialized))
    );
}

#[test]
fn test_price_rises_after_takeover() {
    let e = Env::default();
    let (client, _admin, token, cid) = setup(&e);
    let a = funded_user(&e, &token, &cid);

    take_over(&client, &e, &a, "hello");
    assert_eq!(client.current_price(), 1_100);

    take_over(&client, &e, &a, "again");
    assert_eq!(client.current_price(), 1_210);
}

#[test]
fn test_price_decays_back_to_base() {
    let e = Env::default();
    e.ledger().with_mut(|li| li.timestamp = 10_000);
    let (client, _admin, token, cid) = setup(&e);
    let a = funded_user(&e, &token, &cid);

    take_over(&client, &e, &a, "hello");
    assert_eq!(client.current_price(), 1_100);

    e.ledger().with_mut(|li| li.timestamp = 10_000 + DECAY_PERIOD / 2);
    assert_eq!(client.current_price(), 1_050);

    e.ledger().with_mut(|li| li.timestamp = 10_000 + DECAY_PERIOD);
    assert_eq!(client.current_price(), BASE_PRICE);
}

// ═══════════════════════════════════════════════════════════════════
// 2. set_message - happy path
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_set_message_at_exact_price() {
    let e = Env::default();
    let (client, _admin, token, cid) = setup(&e);
    let a = funded_user(&e, &token, &cid);

    let price = client.current_price();
    let epoch = client.set_message(&a, &price, &msg(&e, "hello"));

    assert_eq!(epoch, 1);
    assert_eq!(client.billboard(), msg(&e, "hello"));
    assert_eq!(client.current_epoch(), 1);
    assert_eq!(balance(&e, &token, &cid), price);
    assert_eq!(balance(&e, &token, &a), DEFAULT_MINT - price);
}

#[test]
fn test_billboard_empty_before_first_takeover() {
    let e = Env::default();
    let (client, _admin, _token, _cid) = setup(&e);
    assert_eq!(client.billboard(), String::from_str(&e, ""));
    assert_eq!(client.billboard_state(), None);
}

#[test]
fn test_billboard_state_records_author_and_price() {
    let e = Env::default();
    e.ledger().with_mut(|li| li.timestamp = 777);
    let (client, _admin, token, cid) = setup(&e);
    let a = funded_user(&e, &token, &cid);

    let price = take_over(&client, &e, &a, "gm");
    let state = client.billboard_state().unwrap();

    assert_eq!(state.message, msg(&e, "gm"));
    assert_eq!(state.author, Some(a));
    assert_eq!(state.epoch, 1);
    assert_eq!(state.price, price);
    assert_eq!(state.updated_at, 777);
}

#[test]
fn test_billboard_epoch_is_one_past_the_paid_epoch() {
    let e = Env::default();
    let (client, _admin, token, cid) = setup(&e);
    let a = funded_user(&e, &token, &cid);
    let b = funded_user(&e, &token, &cid);
    take_over(&client, &e, &a, "first");

    let payment = client.current_price() + 3;
    client.set_message(&b, &payment, &msg(&e, "second"));
    let state = client.billboard_state().unwrap();

    assert_eq!(state.epoch, client.current_epoch());
    assert_eq!(client.get_epoch(&(state.epoch - 1)).total_collected, payment);
}

#[test]
fn test_message_overwritten_by_next_takeover() {
    let e = Env::default();
    let (client, _admin, token, cid) = setup(&e);
    let a = funded_user(&e, &token, &cid);
    let b = funded_user(&e, &token, &cid);

    take_over(&client, &e, &a, "hello");
    take_over(&client, &e, &b, "world");

    assert_eq!(client.billboard(), msg(&e, "world"));
    assert_eq!(client.billboard_state().unwrap().author, Some(b));
}

#[test]
fn test_message_at_max_length_accepted() {
    let e = Env::default();
    let (client, _admin, token, cid) = setup(&e);
    let a = funded_user(&e, &token, &cid);

    let text = String::from_bytes(&e, &[b'x'; MAX_MESSAGE_LEN as usize]);
    client.set_message(&a, &BASE_PRICE, &text);
    assert_eq!(client.billboard().len(), MAX_MESSAGE_LEN);
}

#[test]
fn test_excess_payment_is_credited_as_tip() {
    let e = Env::default();
    let (client, _admin, token, cid) = setup(&e);
    let a = funded_user(&e, &token, &cid);

    let payment = BASE_PRICE + 500;
    client.set_message(&a, &payment, &msg(&e, "tip"));

    assert_eq!(client.get_epoch(&0).total_collected, payment);
    assert_eq!(client.total_collected(), payment);
    assert_eq!(balance(&e, &token, &a), DEFAULT_MINT - payment);
    // Tips do not ratchet the curve.
    assert_eq!(client.current_price(), 1_100);
}

#[test]
fn test_epochs_advance_by_one_and_totals_match_payments() {
    let e = Env::default();
    let (client, _admin, token, cid) = setup(&e);
    let users = [
        funded_user(&e, &token, &cid),
        funded_user(&e, &token, &cid),
        funded_user(&e, &token, &cid),
    ];

    let mut paid: i128 = 0;
    for round in 0..9_u64 {
        let payer = &users[(round % 3) as usize];
        let payment = client.current_price() + (round as i128) * 7;
        e.ledger().with_mut(|li| li.timestamp += 600);
        let before = client.current_epoch();
        // Price only decays with time, so the earlier quote still covers it.
        let after = client.set_message(payer, &payment, &msg(&e, "round"));
        assert_eq!(after, before + 1);
        paid += payment;
    }

    let mut summed: i128 = 0;
    for id in 0..client.current_epoch() {
        summed += client.get_epoch(&id).total_collected;
    }
    assert_eq!(client.current_epoch(), 9);
    assert_eq!(summed, paid);
    assert_eq!(client.total_collected(), paid);
    assert_eq!(balance(&e, &token, &cid), paid);
}

// ═══════════════════════════════════════════════════════════════════
// 3. set_message - error paths
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_one_below_price_fails() {
    let e = Env::default();
    let (client, _admin, token, cid) = setup(&e);
    let a = funded_user(&e, &token, &cid);

    let price = client.current_price();
    assert_eq!(
        client.try_set_message(&a, &(price - 1), &msg(&e, "cheap")),
        Err(Ok(ContractError::InsufficientPayment))
    );
    assert!(client.try_set_message(&a, &price, &msg(&e, "fair")).is_ok());
}

#[test]
fn test_failed_takeover_leaves_no_state() {
    let e = Env::default();
    let (client, _admin, token, cid) = setup(&e);
    let a = funded_user(&e, &token, &cid);

    let _ = client.try_set_message(&a, &(BASE_PRICE - 1), &msg(&e, "cheap"));

    assert_eq!(client.current_epoch(), 0);
    assert_eq!(client.total_supply(), 0);
    assert_eq!(client.balance_of(&a), 0);
    assert_eq!(client.billboard_state(), None);
    assert_eq!(balance(&e, &token, &a), DEFAULT_MINT);
}

#[test]
fn test_message_too_long_fails() {
    let e = Env::default();
    let (client, _admin, token, cid) = setup(&e);
    let a = funded_user(&e, &token, &cid);

    let text = String::from_bytes(&e, &[b'x'; MAX_MESSAGE_LEN as usize + 1]);
    assert_eq!(
        client.try_set_message(&a, &BASE_PRICE, &text),
        Err(Ok(ContractError::MessageTooLong))
    );
    assert_eq!(client.current_epoch(), 0);
}

#[test]
fn test_empty_message_fails() {
    let e = Env::default();
    let (client, _admin, token, cid) = setup(&e);
    let a = funded_user(&e, &token, &cid);

    assert_eq!(
        client.try_set_message(&a, &BASE_PRICE, &msg(&e, "")),
        Err(Ok(ContractError::EmptyMessage))
    );
}

#[test]
fn test_missing_allowance_fails() {
    let e = Env::default();
    let (client, _admin, token, cid) = setup(&e);
    let a = funded_user_with(&e, &token, &cid, DEFAULT_MINT, BASE_PRICE - 1);

    assert_eq!(
        client.try_set_message(&a, &BASE_PRICE, &msg(&e, "hello")),
        Err(Ok(ContractError::InsufficientAllowance))
    );
    assert_eq!(client.total_supply(), 0);
}

#[test]
fn test_unfunded_payer_cannot_take_over() {
    let e = Env::default();
    let (client, _admin, token, cid) = setup(&e);
    let broke = funded_user_with(&e, &token, &cid, BASE_PRICE - 1, DEFAULT_MINT);

    assert!(client
        .try_set_message(&broke, &BASE_PRICE, &msg(&e, "hello"))
        .is_err());
    assert_eq!(client.current_epoch(), 0);
    assert_eq!(client.total_supply(), 0);
}

#[test]
fn test_set_message_before_initialize_fails() {
    let e = Env::default();
    e.mock_all_auths();
    let contract_id = e.register(AdFrame, ());
    let client = AdFrameClient::new(&e, &contract_id);
    let a = Address::generate(&e);
    assert_eq!(
        client.try_set_message(&a, &BASE_PRICE, &msg(&e, "hello")),
        Err(Ok(ContractError::NotInitialized))
    );
}
