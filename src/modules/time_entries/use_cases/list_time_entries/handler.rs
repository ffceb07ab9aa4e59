use std::sync::Arc;

use crate::modules::time_entries::adapters::outbound::time_entry_store::TimeEntryStore;
use crate::modules::time_entries::core::projection::TimeEntryView;
use crate::modules::time_entries::core::query_plan::{QueryPlan, TimeEntryFilter};
use crate::modules::time_entries::use_cases::entry_projector::EntryProjector;
use crate::shared::core::errors::{ApplicationError, EntityKind};

pub struct ListTimeEntriesHandler {
    entries: Arc<dyn TimeEntryStore>,
    projector: Arc<EntryProjector>,
}

impl ListTimeEntriesHandler {
    pub fn new(entries: Arc<dyn TimeEntryStore>, projector: Arc<EntryProjector>) -> Self {
        Self { entries, projector }
    }

    /// Runs exactly one store lookup, chosen by `TimeEntryFilter::plan`, and keeps
    /// the store's order.
    pub async fn handle(
        &self,
        filter: TimeEntryFilter,
    ) -> Result<Vec<TimeEntryView>, ApplicationError> {
        let plan = filter.plan();
        tracing::debug!(?plan, "listing time entries");
        let entries = match plan {
            QueryPlan::ByEmployeeInRange {
                employee_id,
                start_date,
                end_date,
            } => {
                self.entries
                    .find_by_employee_and_date_range(employee_id, start_date, end_date)
                    .await
            }
            QueryPlan::ByEmployee(employee_id) => self.entries.find_by_employee(employee_id).await,
            QueryPlan::ByProject(project_id) => self.entries.find_by_project(project_id).await,
            QueryPlan::All => self.entries.find_all().await,
        }
        .map_err(|e| ApplicationError::from_store(EntityKind::TimeEntry, e))?;
        self.projector.view_all(entries).await
    }
}
