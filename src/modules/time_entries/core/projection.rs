use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::modules::employees::core::employee::Employee;
use crate::modules::projects::core::project::Project;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::shared::core::primitives::EntityId;

/// Externally visible shape of a time entry, with display names resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntryView {
    pub id: EntityId,
    pub employee_id: EntityId,
    pub employee_name: String,
    pub project_id: EntityId,
    pub project_name: String,
    pub date: NaiveDate,
    pub hours: Decimal,
    pub description: Option<String>,
}

impl TimeEntryView {
    pub fn project(entry: TimeEntry, employee: &Employee, project: &Project) -> Self {
        Self {
            id: entry.id,
            employee_id: entry.employee_id,
            employee_name: employee.full_name(),
            project_id: entry.project_id,
            project_name: project.name.clone(),
            date: entry.date,
            hours: entry.hours,
            description: entry.description,
        }
    }
}
