// Resolves the employee and project an entry refers to and maps the entry to its
// externally visible view.

use std::collections::HashMap;
use std::sync::Arc;

use crate::modules::employees::adapters::outbound::employee_store::EmployeeStore;
use crate::modules::employees::core::employee::Employee;
use crate::modules::projects::adapters::outbound::project_store::ProjectStore;
use crate::modules::projects::core::project::Project;
use crate::modules::time_entries::core::projection::TimeEntryView;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::shared::core::errors::{ApplicationError, EntityKind};
use crate::shared::core::primitives::EntityId;

pub struct EntryProjector {
    employees: Arc<dyn EmployeeStore>,
    projects: Arc<dyn ProjectStore>,
}

impl EntryProjector {
    pub fn new(employees: Arc<dyn EmployeeStore>, projects: Arc<dyn ProjectStore>) -> Self {
        Self {
            employees,
            projects,
        }
    }

    pub async fn employee(&self, id: EntityId) -> Result<Employee, ApplicationError> {
        self.employees
            .find_by_id(id)
            .await
            .map_err(|e| ApplicationError::from_store(EntityKind::Employee, e))?
            .ok_or(ApplicationError::NotFound {
                entity: EntityKind::Employee,
                id,
            })
    }

    pub async fn project(&self, id: EntityId) -> Result<Project, ApplicationError> {
        self.projects
            .find_by_id(id)
            .await
            .map_err(|e| ApplicationError::from_store(EntityKind::Project, e))?
            .ok_or(ApplicationError::NotFound {
                entity: EntityKind::Project,
                id,
            })
    }

    /// Employee first, then project; the first missing reference is reported.
    pub async fn resolve(
        &self,
        employee_id: EntityId,
        project_id: EntityId,
    ) -> Result<(Employee, Project), ApplicationError> {
        let employee = self.employee(employee_id).await?;
        let project = self.project(project_id).await?;
        Ok((employee, project))
    }

    pub async fn view(&self, entry: TimeEntry) -> Result<TimeEntryView, ApplicationError> {
        let (employee, project) = self.resolve(entry.employee_id, entry.project_id).await?;
        Ok(TimeEntryView::project(entry, &employee, &project))
    }

    /// Maps entries in order, looking each referenced employee and project up once.
    pub async fn view_all(
        &self,
        entries: Vec<TimeEntry>,
    ) -> Result<Vec<TimeEntryView>, ApplicationError> {
        let mut employees: HashMap<EntityId, Employee> = HashMap::new();
        let mut projects: HashMap<EntityId, Project> = HashMap::new();
        let mut views = Vec::with_capacity(entries.len());
        for entry in entries {
            if !employees.contains_key(&entry.employee_id) {
                let employee = self.employee(entry.employee_id).await?;
                employees.insert(employee.id, employee);
            }
            if !projects.contains_key(&entry.project_id) {
                let project = self.project(entry.project_id).await?;
                projects.insert(project.id, project);
            }
            let employee = &employees[&entry.employee_id];
            let project = &projects[&entry.project_id];
            views.push(TimeEntryView::project(entry, employee, project));
        }
        Ok(views)
    }
}
