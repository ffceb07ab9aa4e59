use async_graphql::{Context, InputObject, Object, Result as GqlResult, SimpleObject};
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::modules::time_entries::core::projection::TimeEntryView;
use crate::modules::time_entries::core::query_plan::TimeEntryFilter;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
#[graphql(name = "TimeEntry")]
pub struct GqlTimeEntry {
    pub id: i64,
    pub employee_id: i64,
    pub employee_name: String,
    pub project_id: i64,
    pub project_name: String,
    pub date: NaiveDate,
    pub hours: Decimal,
    pub description: Option<String>,
}

impl From<TimeEntryView> for GqlTimeEntry {
    fn from(v: TimeEntryView) -> Self {
        Self {
            id: v.id,
            employee_id: v.employee_id,
            employee_name: v.employee_name,
            project_id: v.project_id,
            project_name: v.project_name,
            date: v.date,
            hours: v.hours,
            description: v.description,
        }
    }
}

#[derive(InputObject, Default)]
#[graphql(name = "TimeEntryFilter")]
pub struct GqlTimeEntryFilter {
    pub employee_id: Option<i64>,
    pub project_id: Option<i64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl From<GqlTimeEntryFilter> for TimeEntryFilter {
    fn from(f: GqlTimeEntryFilter) -> Self {
        Self {
            employee_id: f.employee_id,
            project_id: f.project_id,
            start_date: f.start_date,
            end_date: f.end_date,
        }
    }
}

#[derive(Default)]
pub struct TimeEntryQuery;

#[Object]
impl TimeEntryQuery {
    async fn time_entries(
        &self,
        context: &Context<'_>,
        filter: Option<GqlTimeEntryFilter>,
    ) -> GqlResult<Vec<GqlTimeEntry>> {
        let state = context.data_unchecked::<AppState>();
        let list = state
            .list_time_entries
            .handle(filter.unwrap_or_default().into())
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    async fn time_entry(&self, context: &Context<'_>, id: i64) -> GqlResult<GqlTimeEntry> {
        let state = context.data_unchecked::<AppState>();
        let view = state
            .get_time_entry
            .handle(id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(view.into())
    }
}
