use std::sync::Arc;

use crate::modules::time_entries::adapters::outbound::time_entry_store::TimeEntryStore;
use crate::modules::time_entries::core::projection::TimeEntryView;
use crate::modules::time_entries::core::time_entry::RecordTimeEntry;
use crate::modules::time_entries::use_cases::entry_projector::EntryProjector;
use crate::modules::time_entries::use_cases::validation::validate;
use crate::shared::core::errors::{ApplicationError, EntityKind};
use crate::shared::core::primitives::{Clock, EntityId};
use crate::shared::infrastructure::write_locks::DailyWriteLocks;

pub struct UpdateTimeEntryHandler {
    entries: Arc<dyn TimeEntryStore>,
    projector: Arc<EntryProjector>,
    clock: Arc<dyn Clock>,
    locks: Arc<DailyWriteLocks>,
}

impl UpdateTimeEntryHandler {
    pub fn new(
        entries: Arc<dyn TimeEntryStore>,
        projector: Arc<EntryProjector>,
        clock: Arc<dyn Clock>,
        locks: Arc<DailyWriteLocks>,
    ) -> Self {
        Self {
            entries,
            projector,
            clock,
            locks,
        }
    }

    /// Replaces every mutable field of entry `id`.
    ///
    /// When the update moves the entry to another employee or day, the pair it
    /// leaves is not re-checked.
    pub async fn handle(
        &self,
        id: EntityId,
        command: RecordTimeEntry,
    ) -> Result<TimeEntryView, ApplicationError> {
        let _guard = self.locks.acquire([command.daily_key()]).await;

        let mut entry = self
            .entries
            .find_by_id(id)
            .await
            .map_err(|e| ApplicationError::from_store(EntityKind::TimeEntry, e))?
            .ok_or(ApplicationError::NotFound {
                entity: EntityKind::TimeEntry,
                id,
            })?;

        validate(&*self.entries, &*self.clock, &command, Some(&entry))
            .await
            .inspect_err(|e| {
                tracing::warn!(time_entry_id = id, error = %e, "time entry update rejected")
            })?;
        let (employee, project) = self
            .projector
            .resolve(command.employee_id, command.project_id)
            .await?;

        entry.apply(command);
        let saved = self
            .entries
            .save(entry)
            .await
            .map_err(|e| ApplicationError::from_store(EntityKind::TimeEntry, e))?;
        tracing::info!(
            time_entry_id = saved.id,
            employee_id = saved.employee_id,
            date = %saved.date,
            hours = %saved.hours,
            "time entry updated"
        );
        Ok(TimeEntryView::project(saved, &employee, &project))
    }
}
