use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use rstest::fixture;
use rust_decimal::Decimal;

use crate::modules::employees::adapters::outbound::employee_store_in_memory::InMemoryEmployeeStore;
use crate::modules::projects::adapters::outbound::project_store_in_memory::InMemoryProjectStore;
use crate::modules::time_entries::adapters::outbound::time_entry_store::TimeEntryStore;
use crate::modules::time_entries::adapters::outbound::time_entry_store_in_memory::InMemoryTimeEntryStore;
use crate::modules::time_entries::core::time_entry::{RecordTimeEntry, TimeEntry};
use crate::shared::core::primitives::{EntityId, FixedClock};
use crate::shared::infrastructure::store::StoreError;
use crate::shell::seed::seed_demo_data;
use crate::shell::state::AppState;

pub struct SeededStores {
    pub employees: Arc<InMemoryEmployeeStore>,
    pub projects: Arc<InMemoryProjectStore>,
    pub entries: Arc<InMemoryTimeEntryStore>,
}

/// Friday after the seeded week; every seeded date lies in the past.
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()
}

#[fixture]
pub async fn seeded_stores() -> SeededStores {
    let stores = SeededStores {
        employees: Arc::new(InMemoryEmployeeStore::new()),
        projects: Arc::new(InMemoryProjectStore::new()),
        entries: Arc::new(InMemoryTimeEntryStore::new()),
    };
    seed_demo_data(
        stores.employees.as_ref(),
        stores.projects.as_ref(),
        stores.entries.as_ref(),
    )
    .await
    .unwrap();
    stores
}

pub async fn seeded_state() -> AppState {
    let stores = seeded_stores().await;
    AppState::new(
        stores.employees,
        stores.projects,
        stores.entries,
        Arc::new(FixedClock(fixed_today())),
    )
}

/// Hands control back to the runtime after reading a daily total, so concurrent
/// writers interleave between the read and their persist unless something
/// serialises them.
pub struct YieldingTimeEntryStore {
    inner: Arc<InMemoryTimeEntryStore>,
}

impl YieldingTimeEntryStore {
    pub fn new(inner: Arc<InMemoryTimeEntryStore>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl TimeEntryStore for YieldingTimeEntryStore {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<TimeEntry>, StoreError> {
        self.inner.find_by_id(id).await
    }

    async fn find_all(&self) -> Result<Vec<TimeEntry>, StoreError> {
        self.inner.find_all().await
    }

    async fn find_by_employee(&self, employee_id: EntityId) -> Result<Vec<TimeEntry>, StoreError> {
        self.inner.find_by_employee(employee_id).await
    }

    async fn find_by_project(&self, project_id: EntityId) -> Result<Vec<TimeEntry>, StoreError> {
        self.inner.find_by_project(project_id).await
    }

    async fn find_by_employee_and_date_range(
        &self,
        employee_id: EntityId,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<TimeEntry>, StoreError> {
        self.inner
            .find_by_employee_and_date_range(employee_id, start_date, end_date)
            .await
    }

    async fn sum_hours_for_employee_on_date(
        &self,
        employee_id: EntityId,
        date: NaiveDate,
    ) -> Result<Decimal, StoreError> {
        let total = self
            .inner
            .sum_hours_for_employee_on_date(employee_id, date)
            .await;
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
        total
    }

    async fn insert(&self, command: RecordTimeEntry) -> Result<TimeEntry, StoreError> {
        self.inner.insert(command).await
    }

    async fn save(&self, entry: TimeEntry) -> Result<TimeEntry, StoreError> {
        self.inner.save(entry).await
    }

    async fn exists_by_id(&self, id: EntityId) -> Result<bool, StoreError> {
        self.inner.exists_by_id(id).await
    }

    async fn delete_by_id(&self, id: EntityId) -> Result<(), StoreError> {
        self.inner.delete_by_id(id).await
    }
}
