use std::fmt;

use thiserror::Error;

use crate::modules::time_entries::core::validate::ValidationError;
use crate::shared::core::primitives::EntityId;
use crate::shared::infrastructure::store::StoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Employee,
    Project,
    TimeEntry,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Employee => "Employee",
            EntityKind::Project => "Project",
            EntityKind::TimeEntry => "Time entry",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ApplicationError {
    #[error("{entity} not found with id: {id}")]
    NotFound { entity: EntityKind, id: EntityId },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Store(StoreError),
}

impl ApplicationError {
    /// Lifts a store failure, turning a missing row into a typed `NotFound`.
    pub fn from_store(entity: EntityKind, error: StoreError) -> Self {
        match error {
            StoreError::NotFound { id } => ApplicationError::NotFound { entity, id },
            other => ApplicationError::Store(other),
        }
    }
}
