//! # Cache Context
//!
//! A discardable overlay over any [`TxContext`].
//!
//! ## Semantics
//!
//! - Read: overlay first, then the parent
//! - Write/Delete: recorded in the overlay only (`None` is a tombstone)
//! - Drop: overlay is gone, parent untouched
//! - Commit: `into_writes()` then `parent.apply(writes)`
//!
//! Opening a view allocates an empty map and borrows the parent; nothing
//! is copied.

use crate::ports::outbound::TxContext;
use std::collections::BTreeMap;

/// Pending writes keyed by storage key. `None` deletes the key.
pub type WriteSet = BTreeMap<Vec<u8>, Option<Vec<u8>>>;

/// Isolated view over a parent context.
pub struct CacheContext<'a> {
    parent: &'a dyn TxContext,
    writes: WriteSet,
}

impl<'a> CacheContext<'a> {
    /// Open a view over `parent`.
    pub fn new(parent: &'a dyn TxContext) -> Self {
        Self {
            parent,
            writes: WriteSet::new(),
        }
    }

    /// Returns true if anything was written through this view.
    pub fn is_dirty(&self) -> bool {
        !self.writes.is_empty()
    }

    /// Number of keys touched through this view.
    pub fn write_count(&self) -> usize {
        self.writes.len()
    }

    /// Consume the view and hand back its writes for committing.
    pub fn into_writes(self) -> WriteSet {
        self.writes
    }
}

impl TxContext for CacheContext<'_> {
    fn chain_id(&self) -> &str {
        self.parent.chain_id()
    }

    fn block_height(&self) -> u64 {
        self.parent.block_height()
    }

    fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        match self.writes.get(key) {
            Some(Some(value)) => Some(value.clone()),
            Some(None) => None,
            None => self.parent.get(key),
        }
    }

    fn set(&mut self, key: Vec<u8>, value: Vec<u8>) {
        self.writes.insert(key, Some(value));
    }

    fn delete(&mut self, key: &[u8]) {
        self.writes.insert(key.to_vec(), None);
    }

    fn apply(&mut self, writes: WriteSet) {
        self.writes.extend(writes);
    }

    fn cache_context(&self) -> CacheContext<'_> {
        CacheContext::new(self)
    }
}
