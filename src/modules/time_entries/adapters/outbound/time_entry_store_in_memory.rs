// In memory time entry store.
//
// Rows live in a map ordered by id, so every lookup returns entries in insertion
// order. Ids are assigned sequentially from 1 and never reused, even after a delete.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::modules::time_entries::adapters::outbound::time_entry_store::TimeEntryStore;
use crate::modules::time_entries::core::time_entry::{RecordTimeEntry, TimeEntry, at_hours_scale};
use crate::shared::core::primitives::EntityId;
use crate::shared::infrastructure::store::StoreError;

#[derive(Default)]
struct Table {
    rows: BTreeMap<EntityId, TimeEntry>,
    last_id: EntityId,
}

#[derive(Default)]
pub struct InMemoryTimeEntryStore {
    table: RwLock<Table>,
    is_offline: bool,
}

impl InMemoryTimeEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Time entry store offline".into()));
        }
        Ok(())
    }

    async fn select(&self, predicate: impl Fn(&TimeEntry) -> bool) -> Result<Vec<TimeEntry>, StoreError> {
        self.ensure_online()?;
        Ok(self
            .table
            .read()
            .await
            .rows
            .values()
            .filter(|entry| predicate(entry))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl TimeEntryStore for InMemoryTimeEntryStore {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<TimeEntry>, StoreError> {
        self.ensure_online()?;
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<TimeEntry>, StoreError> {
        self.select(|_| true).await
    }

    async fn find_by_employee(&self, employee_id: EntityId) -> Result<Vec<TimeEntry>, StoreError> {
        self.select(|entry| entry.employee_id == employee_id).await
    }

    async fn find_by_project(&self, project_id: EntityId) -> Result<Vec<TimeEntry>, StoreError> {
        self.select(|entry| entry.project_id == project_id).await
    }

    async fn find_by_employee_and_date_range(
        &self,
        employee_id: EntityId,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<TimeEntry>, StoreError> {
        self.select(|entry| {
            entry.employee_id == employee_id && start_date <= entry.date && entry.date <= end_date
        })
        .await
    }

    async fn sum_hours_for_employee_on_date(
        &self,
        employee_id: EntityId,
        date: NaiveDate,
    ) -> Result<Decimal, StoreError> {
        self.ensure_online()?;
        Ok(self
            .table
            .read()
            .await
            .rows
            .values()
            .filter(|entry| entry.employee_id == employee_id && entry.date == date)
            .map(|entry| entry.hours)
            .sum())
    }

    async fn insert(&self, command: RecordTimeEntry) -> Result<TimeEntry, StoreError> {
        self.ensure_online()?;
        let mut table = self.table.write().await;
        table.last_id += 1;
        let entry = TimeEntry {
            id: table.last_id,
            employee_id: command.employee_id,
            project_id: command.project_id,
            date: command.date,
            hours: at_hours_scale(command.hours),
            description: command.description,
        };
        table.rows.insert(entry.id, entry.clone());
        Ok(entry)
    }

    async fn save(&self, entry: TimeEntry) -> Result<TimeEntry, StoreError> {
        self.ensure_online()?;
        let mut table = self.table.write().await;
        if !table.rows.contains_key(&entry.id) {
            return Err(StoreError::NotFound { id: entry.id });
        }
        let entry = TimeEntry {
            hours: at_hours_scale(entry.hours),
            ..entry
        };
        table.rows.insert(entry.id, entry.clone());
        Ok(entry)
    }

    async fn exists_by_id(&self, id: EntityId) -> Result<bool, StoreError> {
        self.ensure_online()?;
        Ok(self.table.read().await.rows.contains_key(&id))
    }

    async fn delete_by_id(&self, id: EntityId) -> Result<(), StoreError> {
        self.ensure_online()?;
        match self.table.write().await.rows.remove(&id) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound { id }),
        }
    }
}
