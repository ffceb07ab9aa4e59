use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::modules::employees::use_cases::manage_employees::inbound::graphql::EmployeeQuery;
use crate::modules::projects::use_cases::manage_projects::inbound::graphql::ProjectQuery;
use crate::modules::time_entries::use_cases::list_time_entries::inbound::graphql::TimeEntryQuery;
pub use crate::modules::time_entries::use_cases::record_time_entry::inbound::graphql::TimeEntryMutation as MutationRoot;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(TimeEntryQuery, EmployeeQuery, ProjectQuery);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}
