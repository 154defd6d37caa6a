//! # Transaction Envelope Service
//!
//! Application service implementing `TxEnvelopeApi`.
//!
//! ## Flow
//!
//! ```text
//! check_tx:   validate_basic_data(is_check = true) -> [verify_signatures]
//! deliver_tx: validate_basic_data(is_check = false) -> [verify_signatures]
//!             -> exec on cache context -> commit iff ok and gas <= maxgas
//! ```

use crate::domain::{validate_basic_data, DeliverOutcome, EnvelopeConfig, ITx, TxStd};
use crate::ports::inbound::TxEnvelopeApi;
use crate::ports::outbound::TxContext;
use shared_types::{TxError, TxResult};
use tracing::{debug, info, warn};

/// Envelope service bound to one chain.
#[derive(Debug, Clone, Default)]
pub struct TxEnvelopeService {
    config: EnvelopeConfig,
}

impl TxEnvelopeService {
    /// Create a new envelope service.
    pub fn new(config: EnvelopeConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &EnvelopeConfig {
        &self.config
    }

    fn authenticate<T: ITx>(&self, tx: &TxStd<T>) -> Result<(), TxError> {
        if !self.config.verify_signatures {
            return Ok(());
        }
        tx.verify_signatures().map_err(|err| {
            warn!("[qc-18] Signature verification failed: {}", err);
            TxError::Unauthorized(err.to_string())
        })
    }
}

impl TxEnvelopeApi for TxEnvelopeService {
    fn check_tx<T: ITx>(&self, ctx: &dyn TxContext, tx: &TxStd<T>) -> Result<(), TxError> {
        validate_basic_data(tx, ctx, true, &self.config.chain_id)?;
        self.authenticate(tx)?;
        debug!(
            "[qc-18] check_tx accepted on {} ({} signatures)",
            self.config.chain_id,
            tx.signatures.len()
        );
        Ok(())
    }

    fn deliver_tx<T: ITx>(
        &self,
        ctx: &mut dyn TxContext,
        tx: &TxStd<T>,
    ) -> Result<DeliverOutcome<T>, TxError> {
        validate_basic_data(tx, &*ctx, false, &self.config.chain_id)?;
        self.authenticate(tx)?;

        let itx = tx
            .itx
            .as_ref()
            .ok_or_else(|| TxError::Internal("TxStd's ITx is nil".to_string()))?;

        let mut cache = ctx.cache_context();
        let (result, cross_tx) = itx.exec(&mut cache);

        if !result.is_ok() {
            debug!(
                "[qc-18] deliver_tx exec failed with code {}, discarding writes",
                result.code
            );
            return Ok(DeliverOutcome {
                result,
                cross_tx: None,
            });
        }

        if result.gas_used > tx.max_gas {
            let err = TxError::OutOfGas {
                limit: tx.max_gas.to_string(),
                used: result.gas_used.to_string(),
            };
            warn!("[qc-18] {}", err);
            return Ok(DeliverOutcome {
                result: TxResult {
                    gas_used: tx.max_gas,
                    ..TxResult::from_error(&err)
                },
                cross_tx: None,
            });
        }

        let writes = cache.into_writes();
        ctx.apply(writes);

        if let Some(qcp) = &cross_tx {
            info!(
                "[qc-18] deliver_tx emitted cross-chain tx {} -> {}",
                self.config.chain_id, qcp.to
            );
        }

        Ok(DeliverOutcome { result, cross_tx })
    }
}
