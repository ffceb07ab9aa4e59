use std::sync::Arc;

use crate::modules::time_entries::adapters::outbound::time_entry_store::TimeEntryStore;
use crate::modules::time_entries::core::projection::TimeEntryView;
use crate::modules::time_entries::use_cases::entry_projector::EntryProjector;
use crate::shared::core::errors::{ApplicationError, EntityKind};
use crate::shared::core::primitives::EntityId;

pub struct GetTimeEntryHandler {
    entries: Arc<dyn TimeEntryStore>,
    projector: Arc<EntryProjector>,
}

impl GetTimeEntryHandler {
    pub fn new(entries: Arc<dyn TimeEntryStore>, projector: Arc<EntryProjector>) -> Self {
        Self { entries, projector }
    }

    pub async fn handle(&self, id: EntityId) -> Result<TimeEntryView, ApplicationError> {
        let entry = self
            .entries
            .find_by_id(id)
            .await
            .map_err(|e| ApplicationError::from_store(EntityKind::TimeEntry, e))?
            .ok_or(ApplicationError::NotFound {
                entity: EntityKind::TimeEntry,
                id,
            })?;
        self.projector.view(entry).await
    }
}
