//! Generic repository error types.
//!
//! Read operations (find, find_max, find_min, count) re-signal storage failures as
//! [`RepositoryError::QueryFailed`] and reject malformed query options before touching the
//! database. Write operations propagate [`sea_orm::DbErr`] unchanged.

use sea_orm::DbErr;
use thiserror::Error;

/// Repository read error type.
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// The database failed while executing a read query.
    ///
    /// # Fields
    /// - `message` - Message of the underlying storage failure
    /// - `source` - The original database error
    #[error("It was not possible to find the data: {message}")]
    QueryFailed {
        message: String,
        #[source]
        source: DbErr,
    },

    /// A sort or include property does not exist on the entity.
    ///
    /// # Fields
    /// - `entity` - Table name of the queried entity
    /// - `property` - The property name that could not be resolved
    #[error("Unknown property `{property}` on {entity}")]
    UnknownProperty { entity: String, property: String },

    /// Page number or page size was zero.
    #[error("Invalid page (number {number}, size {size}): both must be at least 1")]
    InvalidPage { number: u64, size: u64 },
}

impl From<DbErr> for RepositoryError {
    fn from(source: DbErr) -> Self {
        Self::QueryFailed {
            message: source.to_string(),
            source,
        }
    }
}
