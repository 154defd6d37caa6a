//! # TxStd Envelope
//!
//! Wraps one [`ITx`] with a chain id, a gas ceiling and one signature per
//! required signer.
//!
//! ## Sign Data
//!
//! ```text
//! sign_data    = itx.sign_data() || chain_id (UTF-8) || max_gas (8 bytes BE)
//! signed bytes = sign_data || nonce (8 bytes BE)
//! ```
//!
//! Both layouts are shared with other implementations byte for byte.

use super::errors::EnvelopeError;
use super::itx::ITx;
use super::signature::TxSignature;
use super::validation;
use super::value_objects::TXSTD_TYPE;
use crate::ports::outbound::{TxContext, TxSigner};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use shared_types::{BigInt, Hash, TxError};

/// The standard transaction envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TxStd<T> {
    /// Inner payload. `None` only for malformed envelopes off the wire.
    #[serde(rename = "itx")]
    pub itx: Option<T>,
    /// Signature records in signer order.
    #[serde(rename = "sigature", default)]
    pub signatures: Vec<TxSignature>,
    /// Chain that must execute the payload.
    #[serde(rename = "chainid")]
    pub chain_id: String,
    /// Gas ceiling.
    #[serde(rename = "maxgas")]
    pub max_gas: BigInt,
}

impl<T: ITx> TxStd<T> {
    /// Build an unsigned envelope. Sign once per required signer and
    /// append each record with [`TxStd::add_signature`] before submitting.
    pub fn new(itx: T, chain_id: impl Into<String>, max_gas: BigInt) -> Self {
        Self {
            itx: Some(itx),
            signatures: Vec::new(),
            chain_id: chain_id.into(),
            max_gas,
        }
    }

    /// Discriminator used by the transaction codec.
    pub fn type_tag(&self) -> &'static str {
        TXSTD_TYPE
    }

    /// Bytes every signer signs, before the nonce is appended.
    ///
    /// # Errors
    /// `MissingItx` if the envelope has no payload. Envelopes built with
    /// [`TxStd::new`] never hit this. `MaxGasOutOfRange` if the ceiling
    /// does not fit the 8-byte encoding.
    pub fn sign_data(&self) -> Result<Vec<u8>, EnvelopeError> {
        let itx = self.itx.as_ref().ok_or(EnvelopeError::MissingItx)?;
        compose_sign_data(itx, &self.chain_id, &self.max_gas)
    }

    /// Sign the envelope for one signer.
    pub fn sign(&self, signer: &dyn TxSigner, nonce: i64) -> Result<Vec<u8>, EnvelopeError> {
        let message = self.signed_bytes(nonce)?;
        Ok(signer.sign(&message)?)
    }

    /// Sign and append the resulting record in one step.
    pub fn sign_and_append(
        &mut self,
        signer: &dyn TxSigner,
        nonce: i64,
    ) -> Result<(), EnvelopeError> {
        let signature = self.sign(signer, nonce)?;
        self.add_signature(TxSignature::new(signer.public_key(), signature, nonce));
        Ok(())
    }

    /// Append a signature record. Order must follow `itx.signers()`.
    pub fn add_signature(&mut self, signature: TxSignature) {
        self.signatures.push(signature);
    }

    /// Envelope hash: SHA-256 over the sign data and every encoded record.
    pub fn hash(&self) -> Result<Hash, EnvelopeError> {
        let mut hasher = Sha256::new();
        hasher.update(self.sign_data()?);
        for signature in &self.signatures {
            hasher.update(signature.to_bytes());
        }
        Ok(hasher.finalize().into())
    }

    /// Check each record cryptographically against the signer at the same
    /// position. Cross-chain results and signerless payloads are exempt.
    pub fn verify_signatures(&self) -> Result<(), EnvelopeError> {
        let itx = self.itx.as_ref().ok_or(EnvelopeError::MissingItx)?;
        if itx.is_qcp_result() {
            return Ok(());
        }

        let signers = itx.signers();
        if signers.is_empty() {
            return Ok(());
        }
        if signers.len() != self.signatures.len() {
            return Err(EnvelopeError::SignatureCountMismatch {
                signatures: self.signatures.len(),
                signers: signers.len(),
            });
        }

        let sign_data = compose_sign_data(itx, &self.chain_id, &self.max_gas)?;
        for (index, (signer, record)) in signers.iter().zip(&self.signatures).enumerate() {
            let pubkey = record
                .pubkey
                .as_ref()
                .ok_or(EnvelopeError::MissingPublicKey { index })?;

            if pubkey.address() != *signer {
                return Err(EnvelopeError::SignerMismatch {
                    index,
                    expected: hex::encode(signer),
                });
            }

            let mut message = sign_data.clone();
            message.extend_from_slice(&record.nonce.to_be_bytes());
            pubkey
                .verify(&message, &record.signature)
                .map_err(|source| EnvelopeError::InvalidSignature { index, source })?;
        }
        Ok(())
    }

    /// Run the validation pipeline against `ctx`.
    pub fn validate_basic_data(
        &self,
        ctx: &dyn TxContext,
        is_check_tx: bool,
        current_chain_id: &str,
    ) -> Result<(), TxError> {
        validation::validate_basic_data(self, ctx, is_check_tx, current_chain_id)
    }

    fn signed_bytes(&self, nonce: i64) -> Result<Vec<u8>, EnvelopeError> {
        let mut message = self.sign_data()?;
        message.extend_from_slice(&nonce.to_be_bytes());
        Ok(message)
    }
}

fn compose_sign_data<T: ITx>(
    itx: &T,
    chain_id: &str,
    max_gas: &BigInt,
) -> Result<Vec<u8>, EnvelopeError> {
    let gas = max_gas
        .checked_to_i64()
        .ok_or_else(|| EnvelopeError::MaxGasOutOfRange(max_gas.to_string()))?;
    let mut data = itx.sign_data();
    data.extend_from_slice(chain_id.as_bytes());
    data.extend_from_slice(&gas.to_be_bytes());
    Ok(data)
}
