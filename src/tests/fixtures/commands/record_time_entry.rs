// Shared test fixture for the RecordTimeEntry command.
// Defaults are read from json/record_time_entry.json so every test starts from
// the same valid command and overrides only what it exercises.

use std::fs;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::modules::time_entries::core::time_entry::RecordTimeEntry;
use crate::shared::core::primitives::EntityId;

pub struct RecordTimeEntryBuilder {
    inner: RecordTimeEntry,
}

impl Default for RecordTimeEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RecordTimeEntryBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/tests/fixtures/commands/json/record_time_entry.json").unwrap();
        let inner: RecordTimeEntry = serde_json::from_str(&json_str).unwrap();
        Self { inner }
    }

    pub fn employee_id(mut self, v: EntityId) -> Self {
        self.inner.employee_id = v;
        self
    }

    pub fn project_id(mut self, v: EntityId) -> Self {
        self.inner.project_id = v;
        self
    }

    pub fn date(mut self, v: NaiveDate) -> Self {
        self.inner.date = v;
        self
    }

    pub fn date_str(mut self, v: &str) -> Self {
        self.inner.date = NaiveDate::from_str(v).unwrap();
        self
    }

    pub fn hours(mut self, v: &str) -> Self {
        self.inner.hours = Decimal::from_str(v).unwrap();
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = Some(v.into());
        self
    }

    pub fn build(self) -> RecordTimeEntry {
        self.inner
    }
}

#[cfg(test)]
mod record_time_entry_builder_tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = RecordTimeEntryBuilder::default().build();
        assert_eq!(built.employee_id, 1);
        assert_eq!(built.project_id, 1);
        assert_eq!(built.date, NaiveDate::from_ymd_opt(2025, 1, 6).unwrap());
        assert_eq!(built.hours, Decimal::new(400, 2));
        assert_eq!(built.description.as_deref(), Some("Testing"));
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = RecordTimeEntryBuilder::new()
            .employee_id(2)
            .project_id(3)
            .date_str("2025-01-09")
            .hours("7.75")
            .description("desc")
            .build();

        assert_eq!(custom.employee_id, 2);
        assert_eq!(custom.project_id, 3);
        assert_eq!(custom.date, NaiveDate::from_ymd_opt(2025, 1, 9).unwrap());
        assert_eq!(custom.hours, Decimal::new(775, 2));
        assert_eq!(custom.description.as_deref(), Some("desc"));
    }
}
