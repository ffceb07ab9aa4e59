use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::modules::projects::adapters::outbound::project_store::ProjectStore;
use crate::modules::projects::core::project::{Project, ProjectDetails};
use crate::shared::core::primitives::EntityId;
use crate::shared::infrastructure::store::StoreError;

#[derive(Default)]
struct Table {
    rows: BTreeMap<EntityId, Project>,
    last_id: EntityId,
}

#[derive(Default)]
pub struct InMemoryProjectStore {
    table: RwLock<Table>,
    is_offline: bool,
}

impl InMemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Project store offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ProjectStore for InMemoryProjectStore {
    async fn find_all(&self) -> Result<Vec<Project>, StoreError> {
        self.ensure_online()?;
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn find_by_active(&self, active: bool) -> Result<Vec<Project>, StoreError> {
        self.ensure_online()?;
        Ok(self
            .table
            .read()
            .await
            .rows
            .values()
            .filter(|p| p.active == active)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<Project>, StoreError> {
        self.ensure_online()?;
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn insert(&self, details: ProjectDetails) -> Result<Project, StoreError> {
        self.ensure_online()?;
        let mut table = self.table.write().await;
        table.last_id += 1;
        let project = Project {
            id: table.last_id,
            name: details.name,
            code: details.code,
            description: details.description,
            active: details.active,
        };
        table.rows.insert(project.id, project.clone());
        Ok(project)
    }

    async fn save(&self, project: Project) -> Result<Project, StoreError> {
        self.ensure_online()?;
        let mut table = self.table.write().await;
        if !table.rows.contains_key(&project.id) {
            return Err(StoreError::NotFound { id: project.id });
        }
        table.rows.insert(project.id, project.clone());
        Ok(project)
    }
}
