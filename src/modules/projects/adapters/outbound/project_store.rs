use async_trait::async_trait;

use crate::modules::projects::core::project::{Project, ProjectDetails};
use crate::shared::core::primitives::EntityId;
use crate::shared::infrastructure::store::StoreError;

#[async_trait]
pub trait ProjectStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Project>, StoreError>;
    async fn find_by_active(&self, active: bool) -> Result<Vec<Project>, StoreError>;
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Project>, StoreError>;
    async fn insert(&self, details: ProjectDetails) -> Result<Project, StoreError>;
    async fn save(&self, project: Project) -> Result<Project, StoreError>;
}
