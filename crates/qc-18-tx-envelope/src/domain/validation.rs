//! # Validation Pipeline
//!
//! Ordered checks a node runs before admitting a `TxStd`. The first
//! failing check decides the error.
//!
//! | Step | Check | Error |
//! |------|-------|-------|
//! | 1 | itx present | Internal |
//! | 2 | `itx.validate_data` on a cache context | Internal |
//! | 3 | chain id non-empty | Internal |
//! | 4 | chain id == current chain | Internal |
//! | 5 | max gas >= 0 | Internal |
//! | 5a | max gas fits in `i64` | Internal |
//! | 6 | max gas >= `itx.calc_gas()` | Internal |
//! | 7 | cross-chain result: done | - |
//! | 8 | no required signers: done | - |
//! | 9 | no signature records | Unauthorized |
//! | 10 | record count != signer count | Unauthorized |
//!
//! Step 2 writes land in a throwaway view, so the pipeline can run any
//! number of times against the same context without changing it.

use super::envelope::TxStd;
use super::itx::ITx;
use crate::ports::outbound::TxContext;
use shared_types::{BigInt, TxError};
use tracing::debug;

/// Validate `tx` for execution on `current_chain_id`.
pub fn validate_basic_data<T: ITx>(
    tx: &TxStd<T>,
    ctx: &dyn TxContext,
    is_check_tx: bool,
    current_chain_id: &str,
) -> Result<(), TxError> {
    let itx = tx
        .itx
        .as_ref()
        .ok_or_else(|| TxError::Internal("TxStd's ITx is nil".to_string()))?;

    {
        let mut cache = ctx.cache_context();
        itx.validate_data(&mut cache).map_err(|err| {
            TxError::Internal(format!("TxStd's ITx ValidateData error: {err}"))
        })?;
        debug!(
            "[qc-18] validate_data discarded {} cached writes (check_tx={})",
            cache.write_count(),
            is_check_tx
        );
    }

    if tx.chain_id.is_empty() {
        return Err(TxError::Internal("TxStd's ChainID is empty".to_string()));
    }

    if tx.chain_id != current_chain_id {
        return Err(TxError::Internal(format!(
            "chainId not match. expect: {current_chain_id}, actual: {}",
            tx.chain_id
        )));
    }

    if tx.max_gas < BigInt::zero() {
        return Err(TxError::Internal(
            "TxStd's MaxGas is less than zero".to_string(),
        ));
    }

    // The ceiling is signed as 8 bytes; anything wider would not be bound.
    if tx.max_gas.checked_to_i64().is_none() {
        return Err(TxError::Internal(format!(
            "TxStd's MaxGas out of range: {}",
            tx.max_gas
        )));
    }

    let exec_gas = itx.calc_gas();
    if tx.max_gas < exec_gas {
        return Err(TxError::Internal(format!(
            "TxStd's MaxGas is less than itx exec gas. expect: {}, actual: {exec_gas}",
            tx.max_gas
        )));
    }

    if itx.is_qcp_result() {
        return Ok(());
    }

    check_signature_count(itx.signers().len(), tx.signatures.len())
}

fn check_signature_count(signers: usize, signatures: usize) -> Result<(), TxError> {
    if signers == 0 {
        return Ok(());
    }

    if signatures == 0 {
        return Err(TxError::Unauthorized(
            "no signatures in TxStd's ITx".to_string(),
        ));
    }

    if signatures != signers {
        return Err(TxError::Unauthorized(format!(
            "signatures and signers not match. signatures count: {signatures}, signers count: {signers}"
        )));
    }

    Ok(())
}
