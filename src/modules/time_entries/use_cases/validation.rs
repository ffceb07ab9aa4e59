use crate::modules::time_entries::adapters::outbound::time_entry_store::TimeEntryStore;
use crate::modules::time_entries::core::time_entry::{RecordTimeEntry, TimeEntry};
use crate::modules::time_entries::core::validate::{check_daily_cap, check_date, check_hours};
use crate::shared::core::errors::{ApplicationError, EntityKind};
use crate::shared::core::primitives::Clock;

/// Checks a candidate entry against every rule, in order, stopping at the first
/// violation. `replaced` is the stored entry an update overwrites.
///
/// Reads the daily aggregate from `entries` and writes nothing. Callers that go on
/// to persist must hold the daily write lock for the candidate's (employee, date).
pub async fn validate(
    entries: &dyn TimeEntryStore,
    clock: &dyn Clock,
    candidate: &RecordTimeEntry,
    replaced: Option<&TimeEntry>,
) -> Result<(), ApplicationError> {
    check_hours(candidate.hours)?;
    check_date(candidate.date, clock.today())?;
    let recorded = entries
        .sum_hours_for_employee_on_date(candidate.employee_id, candidate.date)
        .await
        .map_err(|e| ApplicationError::from_store(EntityKind::TimeEntry, e))?;
    check_daily_cap(candidate, replaced, recorded)?;
    Ok(())
}
