//! # Cross-Chain Types
//!
//! `TxQcp` is what a payload hands back when its execution must continue on
//! another chain. `QcpTxResult` is the payload a relayer brings back with
//! the outcome; it was authenticated by the relay and carries no signers.

use super::envelope::TxStd;
use super::itx::ITx;
use crate::ports::outbound::TxContext;
use serde::{Deserialize, Serialize};
use shared_types::{Address, BigInt, TxError, TxResult, ZERO_ADDRESS};

/// Transaction addressed to another chain.
///
/// Payloads fill `to` and `txstd`; the transport fills the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TxQcp<T> {
    /// Originating chain.
    pub from: String,
    /// Destination chain.
    pub to: String,
    /// Per-route sequence number.
    pub sequence: u64,
    /// Envelope to run on the destination chain.
    pub txstd: TxStd<T>,
    /// Height at which the message was produced.
    pub block_height: u64,
    /// Index of the producing transaction within its block.
    pub tx_index: u64,
    /// True when this message carries a `QcpTxResult`.
    pub is_result: bool,
    /// Opaque transport data.
    pub extends: String,
}

impl<T> TxQcp<T> {
    /// Outgoing message as produced by a payload's `exec`.
    pub fn new(to: impl Into<String>, txstd: TxStd<T>) -> Self {
        Self {
            from: String::new(),
            to: to.into(),
            sequence: 0,
            txstd,
            block_height: 0,
            tx_index: 0,
            is_result: false,
            extends: String::new(),
        }
    }
}

/// Outcome of a previous cross-chain call, delivered back to its origin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QcpTxResult {
    /// Result code on the remote chain.
    pub code: u32,
    /// Opaque data from the remote execution.
    pub extends: String,
    /// Gas spent remotely.
    pub gas_used: BigInt,
    /// Sequence of the `TxQcp` this answers.
    pub qcp_original_sequence: u64,
    /// `extends` of the `TxQcp` this answers.
    pub qcp_original_extends: String,
    /// Remote log line.
    pub info: String,
}

impl QcpTxResult {
    /// Returns true if the remote execution succeeded.
    pub fn is_success(&self) -> bool {
        self.code == 0
    }
}

impl ITx for QcpTxResult {
    fn validate_data(&self, _ctx: &mut dyn TxContext) -> Result<(), TxError> {
        Ok(())
    }

    fn exec(&self, _ctx: &mut dyn TxContext) -> (TxResult, Option<TxQcp<Self>>) {
        let result = TxResult {
            log: self.info.clone(),
            ..TxResult::ok(BigInt::zero())
        }
        .with_tag("qcp.sequence", self.qcp_original_sequence.to_string())
        .with_tag("qcp.code", self.code.to_string());
        (result, None)
    }

    fn signers(&self) -> Vec<Address> {
        Vec::new()
    }

    fn calc_gas(&self) -> BigInt {
        BigInt::zero()
    }

    fn gas_payer(&self) -> Address {
        ZERO_ADDRESS
    }

    fn sign_data(&self) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(&i64::from(self.code).to_be_bytes());
        data.extend_from_slice(self.extends.as_bytes());
        data.extend_from_slice(&self.gas_used.to_fixed_bytes());
        data.extend_from_slice(&self.qcp_original_sequence.to_be_bytes());
        data.extend_from_slice(self.qcp_original_extends.as_bytes());
        data.extend_from_slice(self.info.as_bytes());
        data
    }

    fn is_qcp_result(&self) -> bool {
        true
    }
}
