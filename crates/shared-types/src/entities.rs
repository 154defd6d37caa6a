//! # Core Domain Entities
//!
//! Primitive value types shared by every transaction payload crate.
//!
//! ## Clusters
//!
//! - **Identity**: `Address`, `Hash`
//! - **Amounts**: `BigInt` (gas ceilings, gas costs, balances)
//! - **Execution**: `TxResult`

use crate::errors::TxError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

// Re-export U256 from primitive-types for use across all subsystems
pub use primitive_types::U256;

// =============================================================================
// CLUSTER A: IDENTITY
// =============================================================================

/// A 32-byte hash (SHA-256).
pub type Hash = [u8; 32];

/// A 20-byte account address.
pub type Address = [u8; 20];

/// The all-zero address, used by payloads that have no gas payer.
pub const ZERO_ADDRESS: Address = [0u8; 20];

// =============================================================================
// CLUSTER B: AMOUNTS
// =============================================================================

/// Signed integer with a 256-bit magnitude.
///
/// Gas ceilings arrive from the wire as decimal strings and may be negative,
/// so the sign is carried explicitly. Zero is never negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BigInt {
    negative: bool,
    magnitude: U256,
}

/// Failure to parse a decimal `BigInt`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid integer literal: {0:?}")]
pub struct ParseBigIntError(pub String);

impl BigInt {
    /// The value zero.
    pub fn zero() -> Self {
        Self {
            negative: false,
            magnitude: U256::zero(),
        }
    }

    fn from_parts(negative: bool, magnitude: U256) -> Self {
        Self {
            negative: negative && !magnitude.is_zero(),
            magnitude,
        }
    }

    /// Returns true for zero.
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    /// Returns true for values strictly below zero.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Absolute value.
    pub fn magnitude(&self) -> U256 {
        self.magnitude
    }

    /// Checked addition. `None` on magnitude overflow.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        if self.negative == rhs.negative {
            let magnitude = self.magnitude.checked_add(rhs.magnitude)?;
            return Some(Self::from_parts(self.negative, magnitude));
        }
        // Opposite signs: subtract the smaller magnitude from the larger.
        match self.magnitude.cmp(&rhs.magnitude) {
            Ordering::Less => Some(Self::from_parts(
                rhs.negative,
                rhs.magnitude - self.magnitude,
            )),
            _ => Some(Self::from_parts(
                self.negative,
                self.magnitude - rhs.magnitude,
            )),
        }
    }

    /// Checked subtraction. `None` on magnitude overflow.
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.checked_add(Self::from_parts(!rhs.negative, rhs.magnitude))
    }

    /// Low 64 bits as a two's complement `i64`, sign applied.
    ///
    /// Values outside the `i64` range wrap.
    pub fn to_i64(&self) -> i64 {
        let low = self.magnitude.low_u64() as i64;
        if self.negative {
            low.wrapping_neg()
        } else {
            low
        }
    }

    /// Exact `i64` value, or `None` outside `i64::MIN..=i64::MAX`.
    pub fn checked_to_i64(&self) -> Option<i64> {
        if self.magnitude.bits() > 64 {
            return None;
        }
        let low = self.magnitude.low_u64();
        if self.negative {
            (low <= 1u64 << 63).then(|| (low as i64).wrapping_neg())
        } else {
            i64::try_from(low).ok()
        }
    }

    /// Fixed-width encoding used inside signable byte strings:
    /// big-endian bytes of [`BigInt::to_i64`]. Only injective for values
    /// where [`BigInt::checked_to_i64`] is `Some`.
    pub fn to_fixed_bytes(&self) -> [u8; 8] {
        self.to_i64().to_be_bytes()
    }
}

impl From<u64> for BigInt {
    fn from(value: u64) -> Self {
        Self::from_parts(false, U256::from(value))
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        Self::from_parts(value < 0, U256::from(value.unsigned_abs()))
    }
}

impl From<U256> for BigInt {
    fn from(value: U256) -> Self {
        Self::from_parts(false, value)
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.magnitude.cmp(&other.magnitude),
            (true, true) => other.magnitude.cmp(&self.magnitude),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-{}", self.magnitude)
        } else {
            write!(f, "{}", self.magnitude)
        }
    }
}

impl FromStr for BigInt {
    type Err = ParseBigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseBigIntError(s.to_string()));
        }
        let magnitude =
            U256::from_dec_str(digits).map_err(|_| ParseBigIntError(s.to_string()))?;
        Ok(Self::from_parts(negative, magnitude))
    }
}

impl Serialize for BigInt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BigInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

// =============================================================================
// CLUSTER C: EXECUTION
// =============================================================================

/// Outcome of executing a transaction payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxResult {
    /// Zero on success, otherwise the `ErrorKind` code.
    pub code: u32,
    /// Payload-defined output bytes.
    pub data: Vec<u8>,
    /// Human-readable log line.
    pub log: String,
    /// Gas consumed by execution.
    pub gas_used: BigInt,
    /// Indexable key/value tags.
    pub tags: Vec<(String, String)>,
}

impl TxResult {
    /// A successful result with the given gas usage.
    pub fn ok(gas_used: BigInt) -> Self {
        Self {
            gas_used,
            ..Default::default()
        }
    }

    /// A failed result carrying the error's code and message.
    pub fn from_error(err: &TxError) -> Self {
        Self {
            code: err.code(),
            log: err.to_string(),
            ..Default::default()
        }
    }

    /// Returns true if execution succeeded.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.code == 0
    }

    /// Attach a tag.
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.push((key.into(), value.into()));
        self
    }
}
