// Store port for time entries.
//
// Reads must observe every completed write: the daily-cap rule reads the current
// aggregate right before deciding on a write.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::modules::time_entries::core::time_entry::{RecordTimeEntry, TimeEntry};
use crate::shared::core::primitives::EntityId;
use crate::shared::infrastructure::store::StoreError;

#[async_trait]
pub trait TimeEntryStore: Send + Sync {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<TimeEntry>, StoreError>;

    async fn find_all(&self) -> Result<Vec<TimeEntry>, StoreError>;

    async fn find_by_employee(&self, employee_id: EntityId) -> Result<Vec<TimeEntry>, StoreError>;

    async fn find_by_project(&self, project_id: EntityId) -> Result<Vec<TimeEntry>, StoreError>;

    /// Both bounds are inclusive.
    async fn find_by_employee_and_date_range(
        &self,
        employee_id: EntityId,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<TimeEntry>, StoreError>;

    /// Zero when the employee has nothing recorded on that date.
    async fn sum_hours_for_employee_on_date(
        &self,
        employee_id: EntityId,
        date: NaiveDate,
    ) -> Result<Decimal, StoreError>;

    /// Persists a new entry and assigns its id.
    async fn insert(&self, command: RecordTimeEntry) -> Result<TimeEntry, StoreError>;

    /// Overwrites an existing entry, keeping its id.
    async fn save(&self, entry: TimeEntry) -> Result<TimeEntry, StoreError>;

    async fn exists_by_id(&self, id: EntityId) -> Result<bool, StoreError>;

    async fn delete_by_id(&self, id: EntityId) -> Result<(), StoreError>;
}
