use std::sync::Arc;

use crate::modules::time_entries::adapters::outbound::time_entry_store::TimeEntryStore;
use crate::modules::time_entries::core::projection::TimeEntryView;
use crate::modules::time_entries::core::time_entry::RecordTimeEntry;
use crate::modules::time_entries::use_cases::entry_projector::EntryProjector;
use crate::modules::time_entries::use_cases::validation::validate;
use crate::shared::core::errors::{ApplicationError, EntityKind};
use crate::shared::core::primitives::Clock;
use crate::shared::infrastructure::write_locks::DailyWriteLocks;

pub struct RecordTimeEntryHandler {
    entries: Arc<dyn TimeEntryStore>,
    projector: Arc<EntryProjector>,
    clock: Arc<dyn Clock>,
    locks: Arc<DailyWriteLocks>,
}

impl RecordTimeEntryHandler {
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

    pub async fn handle(&self, command: RecordTimeEntry) -> Result<TimeEntryView, ApplicationError> {
        let _guard = self.locks.acquire([command.daily_key()]).await;

        validate(&*self.entries, &*self.clock, &command, None)
            .await
            .inspect_err(|e| {
                tracing::warn!(
                    employee_id = command.employee_id,
                    date = %command.date,
                    error = %e,
                    "time entry rejected"
                )
            })?;
        let (employee, project) = self
            .projector
            .resolve(command.employee_id, command.project_id)
            .await?;

        let entry = self
            .entries
            .insert(command)
            .await
            .map_err(|e| ApplicationError::from_store(EntityKind::TimeEntry, e))?;
        tracing::info!(
            time_entry_id = entry.id,
            employee_id = entry.employee_id,
            date = %entry.date,
            hours = %entry.hours,
            "time entry recorded"
        );
        Ok(TimeEntryView::project(entry, &employee, &project))
    }
}
