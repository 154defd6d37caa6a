//! # Error Types
//!
//! The typed transaction error shared by the envelope pipeline and payloads.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error category reported to clients alongside a numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Structural or precondition violation.
    Internal,
    /// Missing or mismatched signatures.
    Unauthorized,
    /// Payer cannot cover the requested amount.
    InsufficientFunds,
    /// Execution consumed more gas than the envelope allows.
    OutOfGas,
}

impl ErrorKind {
    /// Wire code for this kind.
    pub const fn code(self) -> u32 {
        match self {
            ErrorKind::Internal => 1,
            ErrorKind::Unauthorized => 4,
            ErrorKind::InsufficientFunds => 5,
            ErrorKind::OutOfGas => 12,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Internal => "internal",
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::InsufficientFunds => "insufficient funds",
            ErrorKind::OutOfGas => "out of gas",
        };
        f.write_str(name)
    }
}

/// Errors returned by transaction validation and execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TxError {
    /// Structural or precondition violation.
    #[error("internal error: {0}")]
    Internal(String),

    /// Missing or mismatched signatures.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Payer cannot cover the requested amount.
    #[error("insufficient funds: {0}")]
    InsufficientFunds(String),

    /// Execution consumed more gas than the envelope allows.
    #[error("out of gas: limit {limit}, used {used}")]
    OutOfGas {
        /// Gas ceiling of the envelope
        limit: String,
        /// Gas reported by execution
        used: String,
    },
}

impl TxError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TxError::Internal(_) => ErrorKind::Internal,
            TxError::Unauthorized(_) => ErrorKind::Unauthorized,
            TxError::InsufficientFunds(_) => ErrorKind::InsufficientFunds,
            TxError::OutOfGas { .. } => ErrorKind::OutOfGas,
        }
    }

    /// Wire code for this error.
    pub fn code(&self) -> u32 {
        self.kind().code()
    }
}
