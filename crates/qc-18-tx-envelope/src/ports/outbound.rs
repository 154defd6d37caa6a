//! # Outbound Ports (Driven Ports / SPI)
//!
//! What the envelope needs from the host: a state context that can hand
//! out discardable views, and a signing capability.

use crate::domain::cache::{CacheContext, WriteSet};
use shared_crypto::{CryptoError, PublicKey};

/// Execution context a transaction reads and writes through.
///
/// Implementations must be cheap to view: `cache_context` returns an
/// overlay that never touches `self`, so concurrent views over the same
/// parent cannot observe each other's writes.
pub trait TxContext: Send + Sync {
    /// Identifier of the chain this node runs.
    fn chain_id(&self) -> &str;

    /// Height of the block being processed.
    fn block_height(&self) -> u64;

    /// Read a value.
    fn get(&self, key: &[u8]) -> Option<Vec<u8>>;

    /// Returns true if `key` holds a value.
    fn has(&self, key: &[u8]) -> bool {
        self.get(key).is_some()
    }

    /// Write a value.
    fn set(&mut self, key: Vec<u8>, value: Vec<u8>);

    /// Remove a value.
    fn delete(&mut self, key: &[u8]);

    /// Apply a batch of writes collected from a cache context.
    fn apply(&mut self, writes: WriteSet);

    /// Open an isolated view. Writes made through the view are dropped
    /// with it unless explicitly applied back.
    fn cache_context(&self) -> CacheContext<'_>;
}

/// Signing capability handed to [`TxStd::sign`](crate::TxStd::sign).
pub trait TxSigner: Send + Sync {
    /// Public key matching the signatures this signer produces.
    fn public_key(&self) -> PublicKey;

    /// Sign raw bytes.
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, CryptoError>;
}
