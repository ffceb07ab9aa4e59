// In memory employee store.
//
// Ids are assigned sequentially from 1 and never reused.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::modules::employees::adapters::outbound::employee_store::EmployeeStore;
use crate::modules::employees::core::employee::{Employee, EmployeeDetails};
use crate::shared::core::primitives::EntityId;
use crate::shared::infrastructure::store::StoreError;

#[derive(Default)]
struct Table {
    rows: BTreeMap<EntityId, Employee>,
    last_id: EntityId,
}

#[derive(Default)]
pub struct InMemoryEmployeeStore {
    table: RwLock<Table>,
    is_offline: bool,
}

impl InMemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Employee store offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl EmployeeStore for InMemoryEmployeeStore {
    async fn find_all(&self) -> Result<Vec<Employee>, StoreError> {
        self.ensure_online()?;
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<Employee>, StoreError> {
        self.ensure_online()?;
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn insert(&self, details: EmployeeDetails) -> Result<Employee, StoreError> {
        self.ensure_online()?;
        let mut table = self.table.write().await;
        table.last_id += 1;
        let employee = Employee {
            id: table.last_id,
            first_name: details.first_name,
            last_name: details.last_name,
            email: details.email,
            department: details.department,
        };
        table.rows.insert(employee.id, employee.clone());
        Ok(employee)
    }

    async fn save(&self, employee: Employee) -> Result<Employee, StoreError> {
        self.ensure_online()?;
        let mut table = self.table.write().await;
        if !table.rows.contains_key(&employee.id) {
            return Err(StoreError::NotFound { id: employee.id });
        }
        table.rows.insert(employee.id, employee.clone());
        Ok(employee)
    }
}
