//! In-memory `TxContext` for tests and hosts without a persistent store.
//!
//! The key space lives behind an `Arc`; `snapshot()` shares it and the
//! first write after a snapshot copies it (`Arc::make_mut`).

use crate::domain::cache::{CacheContext, WriteSet};
use crate::ports::outbound::TxContext;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Copy-on-write key/value context.
#[derive(Debug, Clone, Default)]
pub struct MemoryContext {
    chain_id: String,
    block_height: u64,
    store: Arc<BTreeMap<Vec<u8>, Vec<u8>>>,
}

impl MemoryContext {
    /// Empty context for `chain_id` at height 0.
    pub fn new(chain_id: impl Into<String>) -> Self {
        Self {
            chain_id: chain_id.into(),
            ..Default::default()
        }
    }

    /// Set the block height.
    pub fn with_height(mut self, block_height: u64) -> Self {
        self.block_height = block_height;
        self
    }

    /// Cheap copy sharing the current state.
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    /// Committed key space.
    pub fn state(&self) -> &BTreeMap<Vec<u8>, Vec<u8>> {
        &self.store
    }

    /// Number of committed keys.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns true if nothing is committed.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl TxContext for MemoryContext {
    fn chain_id(&self) -> &str {
        &self.chain_id
    }

    fn block_height(&self) -> u64 {
        self.block_height
    }

    fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        self.store.get(key).cloned()
    }

    fn set(&mut self, key: Vec<u8>, value: Vec<u8>) {
        Arc::make_mut(&mut self.store).insert(key, value);
    }

    fn delete(&mut self, key: &[u8]) {
        Arc::make_mut(&mut self.store).remove(key);
    }

    fn apply(&mut self, writes: WriteSet) {
        if writes.is_empty() {
            return;
        }
        debug!(
            "[qc-18] Committing {} writes at height {}",
            writes.len(),
            self.block_height
        );
        let store = Arc::make_mut(&mut self.store);
        for (key, value) in writes {
            match value {
                Some(value) => {
                    store.insert(key, value);
                }
                None => {
                    store.remove(&key);
                }
            }
        }
    }

    fn cache_context(&self) -> CacheContext<'_> {
        CacheContext::new(self)
    }
}
