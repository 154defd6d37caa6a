//! # QC-18 Transaction Envelope
//!
//! The standard transaction container (`TxStd`): one inner payload bound to
//! a chain id and a gas ceiling, plus one signature per required signer.
//!
//! **Subsystem ID:** 18
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! - Deterministic sign data binding payload, chain and gas ceiling
//! - Multi-signer signing and verification
//! - A validation pipeline that runs payload checks on a discardable view
//! - A privileged cross-chain result payload exempt from signer checks
//!
//! ## Module Structure
//!
//! ```text
//! qc-18-tx-envelope/
//! ├── domain/          # TxStd, TxSignature, ITx, TxQcp, CacheContext, validation
//! ├── ports/           # TxEnvelopeApi, TxContext, TxSigner
//! ├── adapters/        # MemoryContext, key-pair signers
//! └── service.rs       # TxEnvelopeService (check_tx / deliver_tx)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::MemoryContext;
pub use domain::{
    validate_basic_data, CacheContext, DeliverOutcome, EnvelopeConfig, EnvelopeError, ITx,
    QcpTxResult, TxQcp, TxSignature, TxStd, WriteSet, DEFAULT_CHAIN_ID, TXSTD_TYPE,
};
pub use ports::{TxContext, TxEnvelopeApi, TxSigner};
pub use service::TxEnvelopeService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
