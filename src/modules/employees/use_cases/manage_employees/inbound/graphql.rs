use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::employees::core::employee::EmployeeView;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
#[graphql(name = "Employee")]
pub struct GqlEmployee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: Option<String>,
}

impl From<EmployeeView> for GqlEmployee {
    fn from(v: EmployeeView) -> Self {
        Self {
            id: v.id,
            first_name: v.first_name,
            last_name: v.last_name,
            email: v.email,
            department: v.department,
        }
    }
}

#[derive(Default)]
pub struct EmployeeQuery;

#[Object]
impl EmployeeQuery {
    async fn employees(&self, context: &Context<'_>) -> GqlResult<Vec<GqlEmployee>> {
        let state = context.data_unchecked::<AppState>();
        let list = state
            .employees
            .list()
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}
