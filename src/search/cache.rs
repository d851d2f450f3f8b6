//! Content-addressed tardiness cache.
//!
//! One capability, two interchangeable backends picked when the cache is
//! built: a hash map keyed by the sequence contents, or an ordered tree
//! map. Both compare keys by full value equality. The cache grows for the
//! lifetime of one solve and is dropped with it.

use std::collections::{BTreeMap, HashMap};

use super::config::MemoryMode;
use crate::instance::Instance;
use crate::sequence::Sequence;

/// Storage backend for memoized objective values.
trait CacheStore: Send {
    fn lookup(&self, key: &Sequence) -> Option<i64>;
    fn store(&mut self, key: Sequence, value: i64);
    fn len(&self) -> usize;
}

impl CacheStore for HashMap<Sequence, i64> {
    fn lookup(&self, key: &Sequence) -> Option<i64> {
        self.get(key).copied()
    }

    fn store(&mut self, key: Sequence, value: i64) {
        self.insert(key, value);
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

impl CacheStore for BTreeMap<Sequence, i64> {
    fn lookup(&self, key: &Sequence) -> Option<i64> {
        self.get(key).copied()
    }

    fn store(&mut self, key: Sequence, value: i64) {
        self.insert(key, value);
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}

/// Tardiness evaluator with optional memoization.
pub struct EvaluationCache {
    mode: MemoryMode,
    store: Option<Box<dyn CacheStore>>,
    hits: u64,
}

impl EvaluationCache {
    pub fn new(mode: MemoryMode) -> Self {
        let store: Option<Box<dyn CacheStore>> = match mode {
            MemoryMode::None => None,
            MemoryMode::HashMap => Some(Box::new(HashMap::<Sequence, i64>::new())),
            MemoryMode::OrderedMap => Some(Box::new(BTreeMap::<Sequence, i64>::new())),
        };
        Self {
            mode,
            store,
            hits: 0,
        }
    }

    /// Tardiness of `sequence`, served from the cache when possible.
    pub fn tardiness(&mut self, instance: &Instance, sequence: &Sequence) -> i64 {
        let Some(store) = self.store.as_mut() else {
            return instance.tardiness(sequence);
        };
        if let Some(value) = store.lookup(sequence) {
            self.hits += 1;
            return value;
        }
        let value = instance.tardiness(sequence);
        store.store(sequence.clone(), value);
        value
    }

    pub fn mode(&self) -> MemoryMode {
        self.mode
    }

    /// Number of stored sequences.
    pub fn len(&self) -> usize {
        self.store.as_ref().map_or(0, |s| s.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of evaluations answered from the cache.
    pub fn hits(&self) -> u64 {
        self.hits
    }
}

impl std::fmt::Debug for EvaluationCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvaluationCache")
            .field("mode", &self.mode)
            .field("len", &self.len())
            .field("hits", &self.hits)
            .finish()
    }
}
