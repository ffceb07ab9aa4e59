// Errors shared by every store port.
//
// Adapters report a missing row as `NotFound` only where the port contract says
// the operation fails on absence (for example deleting by id). Lookups return
// `Option` instead.

use thiserror::Error;

use crate::shared::core::primitives::EntityId;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("no row with id: {id}")]
    NotFound { id: EntityId },

    #[error("backend error: {0}")]
    Backend(String),
}
