use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::projects::core::project::ProjectView;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
#[graphql(name = "Project")]
pub struct GqlProject {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub active: bool,
}

impl From<ProjectView> for GqlProject {
    fn from(v: ProjectView) -> Self {
        Self {
            id: v.id,
            name: v.name,
            code: v.code,
            description: v.description,
            active: v.active,
        }
    }
}

#[derive(Default)]
pub struct ProjectQuery;

#[Object]
impl ProjectQuery {
    async fn projects(
        &self,
        context: &Context<'_>,
        active: Option<bool>,
    ) -> GqlResult<Vec<GqlProject>> {
        let state = context.data_unchecked::<AppState>();
        let list = state
            .projects
            .list(active)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}
