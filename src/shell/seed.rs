use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::modules::employees::adapters::outbound::employee_store::EmployeeStore;
use crate::modules::employees::core::employee::EmployeeDetails;
use crate::modules::projects::adapters::outbound::project_store::ProjectStore;
use crate::modules::projects::core::project::ProjectDetails;
use crate::modules::time_entries::adapters::outbound::time_entry_store::TimeEntryStore;
use crate::modules::time_entries::core::time_entry::RecordTimeEntry;
use crate::shared::infrastructure::store::StoreError;

fn employee(first: &str, last: &str, department: &str) -> EmployeeDetails {
    EmployeeDetails {
        first_name: first.into(),
        last_name: last.into(),
        email: format!("{}.{}@keyhole.com", first, last).to_lowercase(),
        department: Some(department.into()),
    }
}

fn project(name: &str, code: &str, description: &str, active: bool) -> ProjectDetails {
    ProjectDetails {
        name: name.into(),
        code: code.into(),
        description: Some(description.into()),
        active,
    }
}

fn entry(
    employee_id: i64,
    project_id: i64,
    (y, m, d): (i32, u32, u32),
    hours: i64,
    description: &str,
) -> Result<RecordTimeEntry, StoreError> {
    let date = NaiveDate::from_ymd_opt(y, m, d)
        .ok_or_else(|| StoreError::Backend(format!("invalid seed date {y}-{m}-{d}")))?;
    Ok(RecordTimeEntry {
        employee_id,
        project_id,
        date,
        hours: Decimal::new(hours, 2),
        description: Some(description.into()),
    })
}

/// Populates empty stores with a small demo dataset. Ids are assigned by the
/// stores, so seeding must happen before any other write.
pub async fn seed_demo_data(
    employees: &dyn EmployeeStore,
    projects: &dyn ProjectStore,
    entries: &dyn TimeEntryStore,
) -> Result<(), StoreError> {
    for details in [
        employee("John", "Doe", "Engineering"),
        employee("Jane", "Smith", "Engineering"),
        employee("Bob", "Johnson", "Marketing"),
    ] {
        employees.insert(details).await?;
    }

    for details in [
        project("Timesheet App", "TSA", "Internal time tracking application", true),
        project("Mobile Redesign", "MOB", "Customer mobile app refresh", true),
        project("Legacy Migration", "LEG", "Retired data center migration", false),
    ] {
        projects.insert(details).await?;
    }

    for command in [
        entry(1, 1, (2025, 1, 6), 800, "Sprint planning")?,
        entry(1, 2, (2025, 1, 7), 650, "Wireframes review")?,
        entry(2, 1, (2025, 1, 6), 700, "API development")?,
        entry(3, 2, (2025, 1, 7), 400, "Campaign assets")?,
    ] {
        entries.insert(command).await?;
    }

    tracing::info!("demo data seeded");
    Ok(())
}
