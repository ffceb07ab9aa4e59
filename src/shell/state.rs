use std::sync::Arc;

use crate::modules::employees::adapters::outbound::employee_store::EmployeeStore;
use crate::modules::employees::use_cases::manage_employees::handler::EmployeesHandler;
use crate::modules::projects::adapters::outbound::project_store::ProjectStore;
use crate::modules::projects::use_cases::manage_projects::handler::ProjectsHandler;
use crate::modules::time_entries::adapters::outbound::time_entry_store::TimeEntryStore;
use crate::modules::time_entries::use_cases::delete_time_entry::handler::DeleteTimeEntryHandler;
use crate::modules::time_entries::use_cases::entry_projector::EntryProjector;
use crate::modules::time_entries::use_cases::get_time_entry::handler::GetTimeEntryHandler;
use crate::modules::time_entries::use_cases::list_time_entries::handler::ListTimeEntriesHandler;
use crate::modules::time_entries::use_cases::record_time_entry::handler::RecordTimeEntryHandler;
use crate::modules::time_entries::use_cases::update_time_entry::handler::UpdateTimeEntryHandler;
use crate::shared::core::primitives::Clock;
use crate::shared::infrastructure::write_locks::DailyWriteLocks;

#[derive(Clone)]
pub struct AppState {
    pub employees: Arc<EmployeesHandler>,
    pub projects: Arc<ProjectsHandler>,
    pub record_time_entry: Arc<RecordTimeEntryHandler>,
    pub update_time_entry: Arc<UpdateTimeEntryHandler>,
    pub delete_time_entry: Arc<DeleteTimeEntryHandler>,
    pub get_time_entry: Arc<GetTimeEntryHandler>,
    pub list_time_entries: Arc<ListTimeEntriesHandler>,
}

impl AppState {
    pub fn new(
        employees: Arc<dyn EmployeeStore>,
        projects: Arc<dyn ProjectStore>,
        entries: Arc<dyn TimeEntryStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let projector = Arc::new(EntryProjector::new(employees.clone(), projects.clone()));
        let locks = Arc::new(DailyWriteLocks::new());
        Self {
            employees: Arc::new(EmployeesHandler::new(employees)),
            projects: Arc::new(ProjectsHandler::new(projects)),
            record_time_entry: Arc::new(RecordTimeEntryHandler::new(
                entries.clone(),
                projector.clone(),
                clock.clone(),
                locks.clone(),
            )),
            update_time_entry: Arc::new(UpdateTimeEntryHandler::new(
                entries.clone(),
                projector.clone(),
                clock,
                locks,
            )),
            delete_time_entry: Arc::new(DeleteTimeEntryHandler::new(entries.clone())),
            get_time_entry: Arc::new(GetTimeEntryHandler::new(entries.clone(), projector.clone())),
            list_time_entries: Arc::new(ListTimeEntriesHandler::new(entries, projector)),
        }
    }
}
