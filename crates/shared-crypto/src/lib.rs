//! # Shared Crypto - Signing Primitives
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `ed25519` | Ed25519 | Default transaction signer keys |
//! | `ecdsa` | secp256k1 | Wallet-compatible transaction signer keys |
//! | `keys` | - | Algorithm-tagged public keys carried in signature records |
//!
//! ## Security Properties
//!
//! - **Ed25519**: Deterministic nonces, no RNG dependency
//! - **secp256k1**: RFC 6979 deterministic, low-S normalization (EIP-2)
//! - Secret key material is zeroized on drop by the dalek/k256 signing keys

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ecdsa;
pub mod ed25519;
pub mod errors;
pub mod keys;

// Re-exports
pub use ecdsa::{Secp256k1KeyPair, Secp256k1PublicKey};
pub use ed25519::{Ed25519KeyPair, Ed25519PublicKey};
pub use errors::CryptoError;
pub use keys::{PublicKey, ADDRESS_LEN};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
