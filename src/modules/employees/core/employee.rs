use serde::{Deserialize, Serialize};

use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::EntityId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: EntityId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: Option<String>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Replaces every mutable field, keeping the identity.
    pub fn apply(&mut self, details: EmployeeDetails) {
        self.first_name = details.first_name;
        self.last_name = details.last_name;
        self.email = details.email;
        self.department = details.department;
    }
}

/// The mutable fields of an employee, as submitted by a caller.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub department: Option<String>,
}

impl EmployeeDetails {
    pub fn check(&self) -> Result<(), ApplicationError> {
        if self.first_name.trim().is_empty() {
            return Err(ApplicationError::InvalidRequest("first name is required".into()));
        }
        if self.last_name.trim().is_empty() {
            return Err(ApplicationError::InvalidRequest("last name is required".into()));
        }
        if self.email.trim().is_empty() {
            return Err(ApplicationError::InvalidRequest("email is required".into()));
        }
        if !self.email.contains('@') {
            return Err(ApplicationError::InvalidRequest("email must be valid".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeView {
    pub id: EntityId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: Option<String>,
}

impl From<Employee> for EmployeeView {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            first_name: employee.first_name,
            last_name: employee.last_name,
            email: employee.email,
            department: employee.department,
        }
    }
}
