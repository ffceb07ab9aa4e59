use async_graphql::{Context, InputObject, Object, Result as GqlResult};
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::modules::time_entries::core::time_entry::RecordTimeEntry;
use crate::modules::time_entries::use_cases::list_time_entries::inbound::graphql::GqlTimeEntry;
use crate::shell::state::AppState;

#[derive(InputObject)]
#[graphql(name = "TimeEntryInput")]
pub struct GqlTimeEntryInput {
    pub employee_id: i64,
    pub project_id: i64,
    pub date: NaiveDate,
    pub hours: Decimal,
    pub description: Option<String>,
}

impl From<GqlTimeEntryInput> for RecordTimeEntry {
    fn from(input: GqlTimeEntryInput) -> Self {
        Self {
            employee_id: input.employee_id,
            project_id: input.project_id,
            date: input.date,
            hours: input.hours,
            description: input.description,
        }
    }
}

#[derive(Default)]
pub struct TimeEntryMutation;

#[Object]
impl TimeEntryMutation {
    async fn record_time_entry(
        &self,
        context: &Context<'_>,
        input: GqlTimeEntryInput,
    ) -> GqlResult<GqlTimeEntry> {
        let state = context.data_unchecked::<AppState>();
        let view = state
            .record_time_entry
            .handle(input.into())
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(view.into())
    }

    async fn update_time_entry(
        &self,
        context: &Context<'_>,
        id: i64,
        input: GqlTimeEntryInput,
    ) -> GqlResult<GqlTimeEntry> {
        let state = context.data_unchecked::<AppState>();
        let view = state
            .update_time_entry
            .handle(id, input.into())
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(view.into())
    }

    async fn delete_time_entry(&self, context: &Context<'_>, id: i64) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        state
            .delete_time_entry
            .handle(id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(true)
    }
}
