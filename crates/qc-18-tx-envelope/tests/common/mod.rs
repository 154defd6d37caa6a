//! Demo payloads shared by the integration suites.

#![allow(dead_code)]

use qc_18_tx_envelope::{ITx, QcpTxResult, TxContext, TxQcp, TxStd};
use serde::{Deserialize, Serialize};
use shared_crypto::{Ed25519KeyPair, PublicKey};
use shared_types::{Address, BigInt, TxError, TxResult, ZERO_ADDRESS};

pub const CHAIN_A: &str = "chain-A";
pub const CHAIN_B: &str = "chain-B";

pub fn balance_key(address: &Address) -> Vec<u8> {
    let mut key = b"balance/".to_vec();
    key.extend_from_slice(address);
    key
}

pub fn balance(ctx: &dyn TxContext, address: &Address) -> u64 {
    ctx.get(&balance_key(address))
        .and_then(|raw| raw.try_into().ok())
        .map(u64::from_be_bytes)
        .unwrap_or(0)
}

pub fn set_balance(ctx: &mut dyn TxContext, address: &Address, amount: u64) {
    ctx.set(balance_key(address), amount.to_be_bytes().to_vec());
}

pub fn keypair(seed: u8) -> Ed25519KeyPair {
    Ed25519KeyPair::from_seed([seed; 32])
}

pub fn address_of(keypair: &Ed25519KeyPair) -> Address {
    PublicKey::from(keypair.public_key()).address()
}

/// Moves `amount` and charges `fee` as gas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    pub from: Address,
    pub to: Address,
    pub amount: u64,
    pub fee: u64,
}

impl Transfer {
    fn debit(&self, ctx: &mut dyn TxContext) -> Result<(), TxError> {
        let available = balance(ctx, &self.from);
        let remaining = available.checked_sub(self.amount).ok_or_else(|| {
            TxError::InsufficientFunds(format!("have {available}, need {}", self.amount))
        })?;
        set_balance(ctx, &self.from, remaining);
        Ok(())
    }
}

/// Payloads the demo chain accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DemoTx {
    Transfer(Transfer),
    /// Requires every owner's signature; does nothing.
    MultiSig { owners: Vec<Address>, memo: String },
    /// No signers, no effect.
    Ping,
    /// Debits locally and forwards a transfer to another chain.
    CrossCall {
        transfer: Transfer,
        destination: String,
    },
    /// Declares less gas than execution reports.
    Greedy { payer: Address, declared: u64, used: u64 },
    QcpResult(QcpTxResult),
}

impl ITx for DemoTx {
    fn validate_data(&self, ctx: &mut dyn TxContext) -> Result<(), TxError> {
        match self {
            // Simulate the debit to prove the payer can afford it.
            DemoTx::Transfer(transfer) | DemoTx::CrossCall { transfer, .. } => {
                transfer.debit(ctx)
            }
            DemoTx::MultiSig { owners, .. } if owners.is_empty() => {
                Err(TxError::Internal("multisig without owners".into()))
            }
            DemoTx::QcpResult(result) => result.validate_data(ctx),
            _ => Ok(()),
        }
    }

    fn exec(&self, ctx: &mut dyn TxContext) -> (TxResult, Option<TxQcp<Self>>) {
        match self {
            DemoTx::Transfer(transfer) => {
                if let Err(err) = transfer.debit(ctx) {
                    return (TxResult::from_error(&err), None);
                }
                let credited = balance(ctx, &transfer.to) + transfer.amount;
                set_balance(ctx, &transfer.to, credited);
                (TxResult::ok(BigInt::from(transfer.fee)), None)
            }
            DemoTx::CrossCall {
                transfer,
                destination,
            } => {
                if let Err(err) = transfer.debit(ctx) {
                    return (TxResult::from_error(&err), None);
                }
                let remote = TxStd::new(
                    DemoTx::Transfer(transfer.clone()),
                    destination.clone(),
                    BigInt::from(transfer.fee),
                );
                (
                    TxResult::ok(BigInt::from(transfer.fee)),
                    Some(TxQcp::new(destination.clone(), remote)),
                )
            }
            DemoTx::Greedy { payer, used, .. } => {
                set_balance(ctx, payer, 0);
                (TxResult::ok(BigInt::from(*used)), None)
            }
            DemoTx::QcpResult(result) => (result.exec(ctx).0, None),
            DemoTx::MultiSig { .. } | DemoTx::Ping => (TxResult::ok(BigInt::zero()), None),
        }
    }

    fn signers(&self) -> Vec<Address> {
        match self {
            DemoTx::Transfer(transfer) | DemoTx::CrossCall { transfer, .. } => {
                vec![transfer.from]
            }
            DemoTx::MultiSig { owners, .. } => owners.clone(),
            DemoTx::Greedy { payer, .. } => vec![*payer],
            DemoTx::Ping => Vec::new(),
            DemoTx::QcpResult(result) => result.signers(),
        }
    }

    fn calc_gas(&self) -> BigInt {
        match self {
            DemoTx::Transfer(transfer) | DemoTx::CrossCall { transfer, .. } => {
                BigInt::from(transfer.fee)
            }
            DemoTx::Greedy { declared, .. } => BigInt::from(*declared),
            DemoTx::QcpResult(result) => result.calc_gas(),
            DemoTx::MultiSig { .. } | DemoTx::Ping => BigInt::zero(),
        }
    }

    fn gas_payer(&self) -> Address {
        match self {
            DemoTx::Transfer(transfer) | DemoTx::CrossCall { transfer, .. } => transfer.from,
            DemoTx::MultiSig { owners, .. } => owners.first().copied().unwrap_or(ZERO_ADDRESS),
            DemoTx::Greedy { payer, .. } => *payer,
            DemoTx::Ping | DemoTx::QcpResult(_) => ZERO_ADDRESS,
        }
    }

    fn sign_data(&self) -> Vec<u8> {
        match self {
            DemoTx::Transfer(transfer) => {
                let mut data = b"transfer".to_vec();
                data.extend_from_slice(&transfer.from);
                data.extend_from_slice(&transfer.to);
                data.extend_from_slice(&transfer.amount.to_be_bytes());
                data.extend_from_slice(&transfer.fee.to_be_bytes());
                data
            }
            DemoTx::CrossCall {
                transfer,
                destination,
            } => {
                let mut data = DemoTx::Transfer(transfer.clone()).sign_data();
                data.extend_from_slice(destination.as_bytes());
                data
            }
            DemoTx::MultiSig { owners, memo } => {
                let mut data = owners.concat();
                data.extend_from_slice(memo.as_bytes());
                data
            }
            DemoTx::Greedy { payer, .. } => payer.to_vec(),
            DemoTx::Ping => b"ping".to_vec(),
            DemoTx::QcpResult(result) => result.sign_data(),
        }
    }

    fn is_qcp_result(&self) -> bool {
        matches!(self, DemoTx::QcpResult(_))
    }
}
