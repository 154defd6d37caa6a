//! `TxSigner` for the local key pairs in `shared-crypto`.

use crate::ports::outbound::TxSigner;
use shared_crypto::{CryptoError, Ed25519KeyPair, PublicKey, Secp256k1KeyPair};

impl TxSigner for Ed25519KeyPair {
    fn public_key(&self) -> PublicKey {
        Ed25519KeyPair::public_key(self).into()
    }

    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, CryptoError> {
        Ok(Ed25519KeyPair::sign(self, message).to_vec())
    }
}

impl TxSigner for Secp256k1KeyPair {
    fn public_key(&self) -> PublicKey {
        Secp256k1KeyPair::public_key(self).into()
    }

    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, CryptoError> {
        Ok(Secp256k1KeyPair::sign(self, message).to_vec())
    }
}
