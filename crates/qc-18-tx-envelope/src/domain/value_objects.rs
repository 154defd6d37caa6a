//! # Domain Value Objects
//!
//! Configuration and outcome types for the envelope subsystem.

use super::qcp::TxQcp;
use serde::{Deserialize, Serialize};
use shared_types::TxResult;
use tracing::warn;

/// Type discriminator for `TxStd` in the transaction codec.
pub const TXSTD_TYPE: &str = "txstd";

/// Default chain id when none is configured.
pub const DEFAULT_CHAIN_ID: &str = "quantum-chain";

/// Envelope subsystem configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvelopeConfig {
    /// Chain id this node executes for.
    pub chain_id: String,
    /// Verify signature bytes, not just their count.
    pub verify_signatures: bool,
}

impl Default for EnvelopeConfig {
    fn default() -> Self {
        Self {
            chain_id: DEFAULT_CHAIN_ID.to_string(),
            verify_signatures: true,
        }
    }
}

impl EnvelopeConfig {
    /// Config for a given chain with defaults elsewhere.
    pub fn for_chain(chain_id: impl Into<String>) -> Self {
        Self {
            chain_id: chain_id.into(),
            ..Default::default()
        }
    }

    /// Load from environment variables.
    ///
    /// - `QC_CHAIN_ID`
    /// - `QC_VERIFY_SIGNATURES` (`1`/`true`/`0`/`false`)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(chain_id) = std::env::var("QC_CHAIN_ID") {
            if !chain_id.is_empty() {
                config.chain_id = chain_id;
            }
        }

        if let Ok(val) = std::env::var("QC_VERIFY_SIGNATURES") {
            match val.to_lowercase().as_str() {
                "1" | "true" => config.verify_signatures = true,
                "0" | "false" => config.verify_signatures = false,
                other => warn!("[qc-18] Ignoring QC_VERIFY_SIGNATURES={other:?}"),
            }
        }

        config
    }
}

/// What `deliver_tx` hands back to the node.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliverOutcome<T> {
    /// Execution result.
    pub result: TxResult,
    /// Message for another chain, if execution produced one.
    pub cross_tx: Option<TxQcp<T>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EnvelopeConfig::default();
        assert_eq!(config.chain_id, DEFAULT_CHAIN_ID);
        assert!(config.verify_signatures);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: EnvelopeConfig = serde_json::from_str(r#"{"chain_id":"qos"}"#).unwrap();
        assert_eq!(config.chain_id, "qos");
        assert!(config.verify_signatures);
    }

    // Single test so no other test races on the process environment.
    #[test]
    fn test_from_env() {
        std::env::set_var("QC_CHAIN_ID", "chain-env");
        std::env::set_var("QC_VERIFY_SIGNATURES", "FALSE");
        let config = EnvelopeConfig::from_env();
        assert_eq!(config.chain_id, "chain-env");
        assert!(!config.verify_signatures);

        std::env::set_var("QC_CHAIN_ID", "");
        std::env::set_var("QC_VERIFY_SIGNATURES", "maybe");
        let config = EnvelopeConfig::from_env();
        assert_eq!(config.chain_id, DEFAULT_CHAIN_ID);
        assert!(config.verify_signatures);

        std::env::remove_var("QC_CHAIN_ID");
        std::env::remove_var("QC_VERIFY_SIGNATURES");
        assert_eq!(EnvelopeConfig::from_env(), EnvelopeConfig::default());
    }

    #[test]
    fn test_for_chain() {
        assert_eq!(EnvelopeConfig::for_chain("chain-A").chain_id, "chain-A");
    }
}
