// 🗃️ Score Store - receipt id -> points, process lifetime only
// Write-once, read-many. Nothing is ever updated or removed.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

// ============================================================================
// SCORE STORE
// ============================================================================

/// In-memory mapping from generated receipt ids to their points.
///
/// Ids are random v4 UUIDs in hyphenated form, so they are neither sequential
/// nor guessable. A single mutex serializes access to the map.
#[derive(Debug, Default)]
pub struct ScoreStore {
    records: Mutex<HashMap<String, u64>>,
}

impl ScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record points under a fresh id and return the id
    pub fn insert(&self, points: u64) -> String {
        let mut records = self.lock();

        loop {
            let id = Uuid::new_v4().to_string();
            if let Entry::Vacant(slot) = records.entry(id.clone()) {
                slot.insert(points);
                return id;
            }
        }
    }

    /// Points recorded for `id`, if any
    pub fn get(&self, id: &str) -> Option<u64> {
        self.lock().get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, u64>> {
        // Every insert completes before the guard drops, so a poisoned map is still whole
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

// ============================================================================
// TESTS
// ============================================================================
