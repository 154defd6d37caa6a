//! # Shared Types Crate
//!
//! Value types every transaction payload crate agrees on: addresses,
//! signed big integers for gas and balances, the execution result record
//! and the typed transaction error.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: payload crates and the envelope subsystem
//!   import these instead of defining their own.
//! - **Wire Stability**: `BigInt` serializes as a decimal string and exposes
//!   the fixed-width encoding used inside signable bytes.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
