use async_trait::async_trait;

use crate::modules::employees::core::employee::{Employee, EmployeeDetails};
use crate::shared::core::primitives::EntityId;
use crate::shared::infrastructure::store::StoreError;

#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Employee>, StoreError>;
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Employee>, StoreError>;
    async fn insert(&self, details: EmployeeDetails) -> Result<Employee, StoreError>;
    async fn save(&self, employee: Employee) -> Result<Employee, StoreError>;
}
