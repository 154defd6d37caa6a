//! # Inner Transaction Capability
//!
//! Every payload a `TxStd` can carry implements [`ITx`]. Hosts typically
//! define one enum over their payload structs and delegate each method.

use super::qcp::TxQcp;
use crate::ports::outbound::TxContext;
use shared_types::{Address, BigInt, TxError, TxResult};

/// Business payload wrapped by a [`TxStd`](super::TxStd).
pub trait ITx: Sized + Send + Sync {
    /// Payload-level checks (balances, formats).
    ///
    /// Called by the validation pipeline on a cache context: anything
    /// written here is discarded.
    fn validate_data(&self, ctx: &mut dyn TxContext) -> Result<(), TxError>;

    /// Apply the payload. May hand back a transaction for another chain;
    /// only `to` and `txstd` need to be filled.
    fn exec(&self, ctx: &mut dyn TxContext) -> (TxResult, Option<TxQcp<Self>>);

    /// Addresses that must sign, in signature order.
    fn signers(&self) -> Vec<Address>;

    /// Gas this payload costs. Must not depend on mutable state.
    fn calc_gas(&self) -> BigInt;

    /// Who pays for gas.
    fn gas_payer(&self) -> Address;

    /// Deterministic signable bytes.
    fn sign_data(&self) -> Vec<u8>;

    /// Returns true only for the inbound cross-chain result payload, which
    /// arrives already authenticated and skips signer checks.
    fn is_qcp_result(&self) -> bool {
        false
    }
}
