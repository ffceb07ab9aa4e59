use std::sync::Arc;

use crate::modules::employees::adapters::outbound::employee_store::EmployeeStore;
use crate::modules::employees::core::employee::{EmployeeDetails, EmployeeView};
use crate::shared::core::errors::{ApplicationError, EntityKind};
use crate::shared::core::primitives::EntityId;

pub struct EmployeesHandler {
    employees: Arc<dyn EmployeeStore>,
}

impl EmployeesHandler {
    pub fn new(employees: Arc<dyn EmployeeStore>) -> Self {
        Self { employees }
    }

    pub async fn list(&self) -> Result<Vec<EmployeeView>, ApplicationError> {
        let employees = self
            .employees
            .find_all()
            .await
            .map_err(|e| ApplicationError::from_store(EntityKind::Employee, e))?;
        Ok(employees.into_iter().map(EmployeeView::from).collect())
    }

    pub async fn get(&self, id: EntityId) -> Result<EmployeeView, ApplicationError> {
        self.employees
            .find_by_id(id)
            .await
            .map_err(|e| ApplicationError::from_store(EntityKind::Employee, e))?
            .map(EmployeeView::from)
            .ok_or(ApplicationError::NotFound {
                entity: EntityKind::Employee,
                id,
            })
    }

    pub async fn create(&self, details: EmployeeDetails) -> Result<EmployeeView, ApplicationError> {
        details.check()?;
        let employee = self
            .employees
            .insert(details)
            .await
            .map_err(|e| ApplicationError::from_store(EntityKind::Employee, e))?;
        tracing::info!(employee_id = employee.id, "employee created");
        Ok(employee.into())
    }

    pub async fn update(
        &self,
        id: EntityId,
        details: EmployeeDetails,
    ) -> Result<EmployeeView, ApplicationError> {
        let mut employee = self
            .employees
            .find_by_id(id)
            .await
            .map_err(|e| ApplicationError::from_store(EntityKind::Employee, e))?
            .ok_or(ApplicationError::NotFound {
                entity: EntityKind::Employee,
                id,
            })?;
        details.check()?;
        employee.apply(details);
        let saved = self
            .employees
            .save(employee)
            .await
            .map_err(|e| ApplicationError::from_store(EntityKind::Employee, e))?;
        tracing::info!(employee_id = saved.id, "employee updated");
        Ok(saved.into())
    }
}
