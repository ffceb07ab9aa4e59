use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::shared::core::primitives::EntityId;
use crate::shared::infrastructure::write_locks::DailyKey;

/// Decimal places hours are persisted and reported with.
pub const HOURS_SCALE: u32 = 2;

/// Brings validated hours to the persisted scale. Exact for every quarter hour, so
/// it must never run before the rules have accepted the value.
pub fn at_hours_scale(hours: Decimal) -> Decimal {
    let mut hours = hours;
    hours.rescale(HOURS_SCALE);
    hours
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeEntry {
    pub id: EntityId,
    pub employee_id: EntityId,
    pub project_id: EntityId,
    pub date: NaiveDate,
    pub hours: Decimal,
    pub description: Option<String>,
}

impl TimeEntry {
    /// Full replacement of the mutable fields; the id is kept.
    pub fn apply(&mut self, command: RecordTimeEntry) {
        self.employee_id = command.employee_id;
        self.project_id = command.project_id;
        self.date = command.date;
        self.hours = command.hours;
        self.description = command.description;
    }

    pub fn daily_key(&self) -> DailyKey {
        (self.employee_id, self.date)
    }
}

/// Create-or-update request for a time entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordTimeEntry {
    pub employee_id: EntityId,
    pub project_id: EntityId,
    pub date: NaiveDate,
    pub hours: Decimal,
    #[serde(default)]
    pub description: Option<String>,
}

impl RecordTimeEntry {
    pub fn daily_key(&self) -> DailyKey {
        (self.employee_id, self.date)
    }
}
