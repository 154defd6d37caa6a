//! # Cross-Chain Relay Tests
//!
//! A payload on chain A emits a `TxQcp` for chain B. The test plays the
//! relayer: it carries the envelope to chain B and brings the outcome back
//! as a `QcpTxResult`.

mod common;

use common::*;
use qc_18_tx_envelope::{
    EnvelopeConfig, MemoryContext, QcpTxResult, TxEnvelopeApi, TxEnvelopeService, TxStd,
};
use shared_types::{BigInt, ErrorKind};

#[test]
fn test_cross_call_round_trip() {
    // Arrange
    let keypair = keypair(1);
    let alice = address_of(&keypair);
    let bob = address_of(&common::keypair(2));
    let chain_a = TxEnvelopeService::new(EnvelopeConfig::for_chain(CHAIN_A));
    let chain_b = TxEnvelopeService::new(EnvelopeConfig::for_chain(CHAIN_B));

    let mut ctx_a = MemoryContext::new(CHAIN_A).with_height(42);
    set_balance(&mut ctx_a, &alice, 100);
    let mut ctx_b = MemoryContext::new(CHAIN_B);
    set_balance(&mut ctx_b, &alice, 100);

    let mut tx = TxStd::new(
        DemoTx::CrossCall {
            transfer: Transfer {
                from: alice,
                to: bob,
                amount: 25,
                fee: 5,
            },
            destination: CHAIN_B.into(),
        },
        CHAIN_A,
        BigInt::from(5u64),
    );
    tx.sign_and_append(&keypair, 0).unwrap();

    // Act: deliver on chain A
    let outcome = chain_a.deliver_tx(&mut ctx_a, &tx).unwrap();

    // Assert: local debit happened and a message for chain B came out
    assert!(outcome.result.is_ok());
    assert_eq!(balance(&ctx_a, &alice), 75);
    let mut qcp = outcome.cross_tx.unwrap();
    assert_eq!(qcp.to, CHAIN_B);
    assert_eq!(qcp.txstd.chain_id, CHAIN_B);
    assert!(!qcp.is_result);
    assert!(qcp.txstd.signatures.is_empty());

    // The remote envelope is unsigned; chain B refuses it as is.
    let err = chain_b.check_tx(&ctx_b, &qcp.txstd).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unauthorized);

    // Act: the owner countersigns for chain B and the relayer delivers
    qcp.txstd.sign_and_append(&keypair, 1).unwrap();
    let remote = chain_b.deliver_tx(&mut ctx_b, &qcp.txstd).unwrap();
    assert!(remote.result.is_ok());
    assert_eq!(balance(&ctx_b, &bob), 25);

    // Act: the relayer reports back to chain A
    let report = QcpTxResult {
        code: remote.result.code,
        extends: String::new(),
        gas_used: remote.result.gas_used,
        qcp_original_sequence: qcp.sequence,
        qcp_original_extends: qcp.extends.clone(),
        info: "delivered".into(),
    };
    let result_tx = TxStd::new(DemoTx::QcpResult(report), CHAIN_A, BigInt::from(0u64));
    let echoed = chain_a.deliver_tx(&mut ctx_a, &result_tx).unwrap();

    // Assert
    assert!(echoed.result.is_ok());
    assert!(echoed
        .result
        .tags
        .contains(&("qcp.code".to_string(), "0".to_string())));
}

#[test]
fn test_replayed_cross_call_is_rejected() {
    // Enough for one call; the replay fails payload validation.
    let keypair = keypair(1);
    let alice = address_of(&keypair);
    let chain_a = TxEnvelopeService::new(EnvelopeConfig::for_chain(CHAIN_A));
    let mut ctx = MemoryContext::new(CHAIN_A);
    set_balance(&mut ctx, &alice, 30);

    let mut tx = TxStd::new(
        DemoTx::CrossCall {
            transfer: Transfer {
                from: alice,
                to: address_of(&common::keypair(2)),
                amount: 30,
                fee: 5,
            },
            destination: CHAIN_B.into(),
        },
        CHAIN_A,
        BigInt::from(5u64),
    );
    tx.sign_and_append(&keypair, 0).unwrap();

    chain_a.deliver_tx(&mut ctx, &tx).unwrap();
    let err = chain_a.deliver_tx(&mut ctx, &tx).unwrap_err();

    assert!(err.to_string().contains("ValidateData error"));
    assert_eq!(balance(&ctx, &alice), 0);
}
