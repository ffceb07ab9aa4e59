use std::sync::Arc;

use crate::modules::time_entries::adapters::outbound::time_entry_store::TimeEntryStore;
use crate::shared::core::errors::{ApplicationError, EntityKind};
use crate::shared::core::primitives::EntityId;

pub struct DeleteTimeEntryHandler {
    entries: Arc<dyn TimeEntryStore>,
}

impl DeleteTimeEntryHandler {
    pub fn new(entries: Arc<dyn TimeEntryStore>) -> Self {
        Self { entries }
    }

    pub async fn handle(&self, id: EntityId) -> Result<(), ApplicationError> {
        let exists = self
            .entries
            .exists_by_id(id)
            .await
            .map_err(|e| ApplicationError::from_store(EntityKind::TimeEntry, e))?;
        if !exists {
            return Err(ApplicationError::NotFound {
                entity: EntityKind::TimeEntry,
                id,
            });
        }
        self.entries
            .delete_by_id(id)
            .await
            .map_err(|e| ApplicationError::from_store(EntityKind::TimeEntry, e))?;
        tracing::info!(time_entry_id = id, "time entry deleted");
        Ok(())
    }
}
