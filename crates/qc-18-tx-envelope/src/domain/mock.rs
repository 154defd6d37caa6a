//! Configurable payload for unit tests.

use super::itx::ITx;
use super::qcp::TxQcp;
use crate::ports::outbound::TxContext;
use serde::{Deserialize, Serialize};
use shared_types::{Address, BigInt, TxError, TxResult, ZERO_ADDRESS};

pub const TOUCHED_KEY: &[u8] = b"mock/touched";
pub const EXECUTED_KEY: &[u8] = b"mock/executed";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MockTx {
    pub signers: Vec<Address>,
    pub gas: BigInt,
    pub payload: Vec<u8>,
    pub fail_validation: bool,
    pub write_on_validate: bool,
    pub qcp_result: bool,
}

impl MockTx {
    pub fn with_payload(payload: &[u8]) -> Self {
        Self {
            payload: payload.to_vec(),
            ..Default::default()
        }
    }

    pub fn with_signers(signers: Vec<Address>) -> Self {
        Self {
            signers,
            ..Default::default()
        }
    }

    pub fn with_gas(mut self, gas: u64) -> Self {
        self.gas = BigInt::from(gas);
        self
    }
}

impl ITx for MockTx {
    fn validate_data(&self, ctx: &mut dyn TxContext) -> Result<(), TxError> {
        if self.write_on_validate {
            ctx.set(TOUCHED_KEY.to_vec(), vec![1]);
        }
        if self.fail_validation {
            return Err(TxError::InsufficientFunds("balance too low".into()));
        }
        Ok(())
    }

    fn exec(&self, ctx: &mut dyn TxContext) -> (TxResult, Option<TxQcp<Self>>) {
        ctx.set(EXECUTED_KEY.to_vec(), self.payload.clone());
        (TxResult::ok(self.gas), None)
    }

    fn signers(&self) -> Vec<Address> {
        self.signers.clone()
    }

    fn calc_gas(&self) -> BigInt {
        self.gas
    }

    fn gas_payer(&self) -> Address {
        self.signers.first().copied().unwrap_or(ZERO_ADDRESS)
    }

    fn sign_data(&self) -> Vec<u8> {
        self.payload.clone()
    }

    fn is_qcp_result(&self) -> bool {
        self.qcp_result
    }
}
