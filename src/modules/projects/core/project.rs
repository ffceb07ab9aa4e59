use serde::{Deserialize, Serialize};

use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::EntityId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: EntityId,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub active: bool,
}

impl Project {
    /// Replaces every mutable field, keeping the identity.
    pub fn apply(&mut self, details: ProjectDetails) {
        self.name = details.name;
        self.code = details.code;
        self.description = details.description;
        self.active = details.active;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetails {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
    pub active: bool,
}

impl ProjectDetails {
    pub fn check(&self) -> Result<(), ApplicationError> {
        if self.name.trim().is_empty() {
            return Err(ApplicationError::InvalidRequest("name is required".into()));
        }
        if self.code.trim().is_empty() {
            return Err(ApplicationError::InvalidRequest("code is required".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    pub id: EntityId,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub active: bool,
}

impl From<Project> for ProjectView {
    fn from(project: Project) -> Self {
        Self {
            id: project.id,
            name: project.name,
            code: project.code,
            description: project.description,
            active: project.active,
        }
    }
}
