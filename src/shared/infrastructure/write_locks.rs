// In-process write serialisation keyed by (employee, date).
//
// A write that reads the daily aggregate and then persists must hold the guard for
// every (employee, date) pair it touches until the persist has completed. Keys are
// acquired in sorted order so two writers touching the same pairs cannot deadlock.

use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::shared::core::primitives::EntityId;

pub type DailyKey = (EntityId, NaiveDate);

#[derive(Default)]
pub struct DailyWriteLocks {
    slots: Mutex<HashMap<DailyKey, Arc<Mutex<()>>>>,
}

#[must_use = "the lock is released as soon as the guard is dropped"]
pub struct DailyWriteGuard {
    _held: Vec<OwnedMutexGuard<()>>,
}

impl DailyWriteLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self, keys: impl IntoIterator<Item = DailyKey>) -> DailyWriteGuard {
        let mut keys: Vec<DailyKey> = keys.into_iter().collect();
        keys.sort();
        keys.dedup();

        let slots: Vec<Arc<Mutex<()>>> = {
            let mut guard = self.slots.lock().await;
            // Slots only referenced by the map are idle.
            guard.retain(|_, slot| Arc::strong_count(slot) > 1);
            keys.iter()
                .map(|key| guard.entry(*key).or_default().clone())
                .collect()
        };

        let mut held = Vec::with_capacity(slots.len());
        for slot in slots {
            held.push(slot.lock_owned().await);
        }
        DailyWriteGuard { _held: held }
    }
}
