use std::sync::Arc;

use crate::modules::projects::adapters::outbound::project_store::ProjectStore;
use crate::modules::projects::core::project::{ProjectDetails, ProjectView};
use crate::shared::core::errors::{ApplicationError, EntityKind};
use crate::shared::core::primitives::EntityId;

pub struct ProjectsHandler {
    projects: Arc<dyn ProjectStore>,
}

impl ProjectsHandler {
    pub fn new(projects: Arc<dyn ProjectStore>) -> Self {
        Self { projects }
    }

    /// Lists every project, or only those matching `active` when it is given.
    pub async fn list(&self, active: Option<bool>) -> Result<Vec<ProjectView>, ApplicationError> {
        let projects = match active {
            Some(active) => self.projects.find_by_active(active).await,
            None => self.projects.find_all().await,
        }
        .map_err(|e| ApplicationError::from_store(EntityKind::Project, e))?;
        Ok(projects.into_iter().map(ProjectView::from).collect())
    }

    pub async fn get(&self, id: EntityId) -> Result<ProjectView, ApplicationError> {
        self.projects
            .find_by_id(id)
            .await
            .map_err(|e| ApplicationError::from_store(EntityKind::Project, e))?
            .map(ProjectView::from)
            .ok_or(ApplicationError::NotFound {
                entity: EntityKind::Project,
                id,
            })
    }

    pub async fn create(&self, details: ProjectDetails) -> Result<ProjectView, ApplicationError> {
        details.check()?;
        let project = self
            .projects
            .insert(details)
            .await
            .map_err(|e| ApplicationError::from_store(EntityKind::Project, e))?;
        tracing::info!(project_id = project.id, code = %project.code, "project created");
        Ok(project.into())
    }

    pub async fn update(
        &self,
        id: EntityId,
        details: ProjectDetails,
    ) -> Result<ProjectView, ApplicationError> {
        let mut project = self
            .projects
            .find_by_id(id)
            .await
            .map_err(|e| ApplicationError::from_store(EntityKind::Project, e))?
            .ok_or(ApplicationError::NotFound {
                entity: EntityKind::Project,
                id,
            })?;
        details.check()?;
        project.apply(details);
        let saved = self
            .projects
            .save(project)
            .await
            .map_err(|e| ApplicationError::from_store(EntityKind::Project, e))?;
        tracing::info!(project_id = saved.id, "project updated");
        Ok(saved.into())
    }
}
