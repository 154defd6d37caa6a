//! # Inbound Ports (Driving Ports / API)
//!
//! What a node calls when a `TxStd` arrives.

use crate::domain::{DeliverOutcome, ITx, TxStd};
use crate::ports::outbound::TxContext;
use shared_types::TxError;

/// Transaction envelope API - inbound port.
pub trait TxEnvelopeApi: Send + Sync {
    /// Admission check (mempool path). Never mutates `ctx`.
    fn check_tx<T: ITx>(&self, ctx: &dyn TxContext, tx: &TxStd<T>) -> Result<(), TxError>;

    /// Validate and execute. Writes reach `ctx` only if execution succeeds
    /// within the envelope's gas ceiling.
    ///
    /// # Errors
    /// Validation failures are returned as `Err`. Execution failures are
    /// reported through the returned result's code.
    fn deliver_tx<T: ITx>(
        &self,
        ctx: &mut dyn TxContext,
        tx: &TxStd<T>,
    ) -> Result<DeliverOutcome<T>, TxError>;
}
