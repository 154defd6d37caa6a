//! # Domain Module
//!
//! Envelope, signature records, the payload capability, cross-chain types
//! and the validation pipeline. No I/O.

pub mod cache;
pub mod envelope;
pub mod errors;
pub mod itx;
pub mod qcp;
pub mod signature;
pub mod validation;
pub mod value_objects;

#[cfg(test)]
pub(crate) mod mock;

pub use cache::{CacheContext, WriteSet};
pub use envelope::TxStd;
pub use errors::EnvelopeError;
pub use itx::ITx;
pub use qcp::{QcpTxResult, TxQcp};
pub use signature::TxSignature;
pub use validation::validate_basic_data;
pub use value_objects::*;
