//! # Key Envelopes
//!
//! Algorithm-tagged public keys as they travel inside signature records.
//!
//! The canonical byte form of a key is its raw encoding (32 bytes for
//! Ed25519, 33 compressed bytes for secp256k1). Addresses are the first
//! 20 bytes of SHA-256 over that canonical form.

use crate::{CryptoError, Ed25519PublicKey, Secp256k1PublicKey};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};

/// Account address length in bytes.
pub const ADDRESS_LEN: usize = 20;

/// A signer's public key, tagged by algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PublicKey {
    /// Ed25519 verifying key.
    Ed25519(Ed25519PublicKey),
    /// Compressed secp256k1 verifying key.
    Secp256k1(Secp256k1PublicKey),
}

impl PublicKey {
    /// Canonical byte encoding (raw key bytes, no algorithm prefix).
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            PublicKey::Ed25519(key) => key.as_bytes().to_vec(),
            PublicKey::Secp256k1(key) => key.as_bytes().to_vec(),
        }
    }

    /// Algorithm name used as the serde tag.
    pub fn algorithm(&self) -> &'static str {
        match self {
            PublicKey::Ed25519(_) => "ed25519",
            PublicKey::Secp256k1(_) => "secp256k1",
        }
    }

    /// Verify a raw signature over `message`.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> Result<(), CryptoError> {
        match self {
            PublicKey::Ed25519(key) => key.verify(message, signature),
            PublicKey::Secp256k1(key) => key.verify(message, signature),
        }
    }

    /// Account address controlled by this key.
    pub fn address(&self) -> [u8; ADDRESS_LEN] {
        let digest = Sha256::digest(self.to_bytes());
        let mut address = [0u8; ADDRESS_LEN];
        address.copy_from_slice(&digest[..ADDRESS_LEN]);
        address
    }

    /// Rebuild a key from its algorithm tag and canonical bytes.
    pub fn from_parts(algorithm: &str, bytes: &[u8]) -> Result<Self, CryptoError> {
        match algorithm {
            "ed25519" => Ok(PublicKey::Ed25519(Ed25519PublicKey::from_slice(bytes)?)),
            "secp256k1" => Ok(PublicKey::Secp256k1(Secp256k1PublicKey::from_slice(bytes)?)),
            _ => Err(CryptoError::InvalidPublicKey),
        }
    }
}

impl From<Ed25519PublicKey> for PublicKey {
    fn from(key: Ed25519PublicKey) -> Self {
        PublicKey::Ed25519(key)
    }
}

impl From<Secp256k1PublicKey> for PublicKey {
    fn from(key: Secp256k1PublicKey) -> Self {
        PublicKey::Secp256k1(key)
    }
}

/// Wire form: `{ "type": "ed25519", "value": "<hex>" }`.
#[derive(Serialize, Deserialize)]
struct TaggedKey {
    #[serde(rename = "type")]
    algorithm: String,
    value: String,
}

impl Serialize for PublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        TaggedKey {
            algorithm: self.algorithm().to_string(),
            value: hex::encode(self.to_bytes()),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tagged = TaggedKey::deserialize(deserializer)?;
        let bytes = hex::decode(&tagged.value).map_err(de::Error::custom)?;
        PublicKey::from_parts(&tagged.algorithm, &bytes).map_err(de::Error::custom)
    }
}
