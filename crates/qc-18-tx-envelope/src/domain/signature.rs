//! # Signature Records
//!
//! One record per required signer, in signer order.

use serde::{Deserialize, Serialize};
use shared_crypto::PublicKey;

/// A signer's credential attached to a `TxStd`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxSignature {
    /// Signer public key. Absent for placeholder records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pubkey: Option<PublicKey>,
    /// Raw signature bytes.
    #[serde(with = "hex")]
    pub signature: Vec<u8>,
    /// Signer nonce, bound into the signed bytes.
    pub nonce: i64,
}

impl TxSignature {
    /// Record for a key.
    pub fn new(pubkey: PublicKey, signature: Vec<u8>, nonce: i64) -> Self {
        Self {
            pubkey: Some(pubkey),
            signature,
            nonce,
        }
    }

    /// Canonical encoding: `pubkey || signature || nonce (8 bytes BE)`.
    ///
    /// Placeholder records without a public key encode to nothing. The
    /// layout is shared with other implementations and must not change.
    pub fn to_bytes(&self) -> Vec<u8> {
        let Some(pubkey) = &self.pubkey else {
            return Vec::new();
        };
        let key = pubkey.to_bytes();
        let mut out = Vec::with_capacity(key.len() + self.signature.len() + 8);
        out.extend_from_slice(&key);
        out.extend_from_slice(&self.signature);
        out.extend_from_slice(&self.nonce.to_be_bytes());
        out
    }
}
