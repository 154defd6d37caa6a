//! # Envelope Errors
//!
//! Failures of the signing side of the envelope. Validation failures use
//! [`shared_types::TxError`] instead so they carry a wire code.

use shared_crypto::CryptoError;
use thiserror::Error;

/// Errors from sign-data computation, signing and signature verification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvelopeError {
    /// The envelope carries no inner transaction.
    #[error("Signature txstd err(itx is nil)")]
    MissingItx,

    /// The signing backend failed.
    #[error("Signing failed: {0}")]
    Signing(#[from] CryptoError),

    /// The gas ceiling does not fit the 8-byte signed encoding.
    #[error("Signature txstd err(maxgas {0} out of range)")]
    MaxGasOutOfRange(String),

    /// Signature records and required signers differ in number.
    #[error("Signature count mismatch: {signatures} signatures for {signers} signers")]
    SignatureCountMismatch {
        /// Number of signature records
        signatures: usize,
        /// Number of required signers
        signers: usize,
    },

    /// A record needed for verification has no public key.
    #[error("Signature {index} carries no public key")]
    MissingPublicKey {
        /// Position in the signature list
        index: usize,
    },

    /// The record's public key does not control the required signer address.
    #[error("Signature {index} public key does not match signer {expected}")]
    SignerMismatch {
        /// Position in the signature list
        index: usize,
        /// Hex of the required signer address
        expected: String,
    },

    /// The signature bytes do not verify.
    #[error("Signature {index} invalid: {source}")]
    InvalidSignature {
        /// Position in the signature list
        index: usize,
        /// Underlying verification failure
        source: CryptoError,
    },
}
