use chrono::NaiveDate;
use serde::Deserialize;

use crate::shared::core::primitives::EntityId;

/// Optional filters accepted when listing time entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntryFilter {
    pub employee_id: Option<EntityId>,
    pub project_id: Option<EntityId>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// The single store lookup a filter resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryPlan {
    ByEmployeeInRange {
        employee_id: EntityId,
        start_date: NaiveDate,
        end_date: NaiveDate,
    },
    ByEmployee(EntityId),
    ByProject(EntityId),
    All,
}

impl TimeEntryFilter {
    /// First match wins. A date range only narrows an employee lookup; combined with
    /// a project alone it is ignored.
    pub fn plan(&self) -> QueryPlan {
        match (self.employee_id, self.project_id, self.start_date, self.end_date) {
            (Some(employee_id), _, Some(start_date), Some(end_date)) => {
                QueryPlan::ByEmployeeInRange {
                    employee_id,
                    start_date,
                    end_date,
                }
            }
            (Some(employee_id), _, _, _) => QueryPlan::ByEmployee(employee_id),
            (None, Some(project_id), _, _) => QueryPlan::ByProject(project_id),
            (None, None, _, _) => QueryPlan::All,
        }
    }
}
