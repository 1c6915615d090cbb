//! Error types for the roster application.
//!
//! Each concern owns a `thiserror` enum (configuration, repository queries, document store),
//! and [`Error`] aggregates them together with external library errors so callers can rely
//! on the `?` operator across layers.

pub mod config;
pub mod document;
pub mod repository;

use thiserror::Error;
use uuid::Uuid;

use crate::error::{config::ConfigError, document::DocumentError, repository::RepositoryError};

/// Main error type for the roster application.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Repository errors (query failures, unknown properties, invalid pages)
/// - Document store errors (missing/duplicate documents, driver failures)
/// - Aggregate errors (office not found for a notification)
/// - External library errors (relational database)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Repository read error (query failure, unknown sort/include property, invalid page).
    #[error(transparent)]
    RepositoryError(#[from] RepositoryError),
    /// Document store error (driver failure, missing or duplicate document).
    #[error(transparent)]
    DocumentError(#[from] DocumentError),
    /// A notification referenced an office document that does not exist.
    #[error("Office {0} was not found in the document store")]
    OfficeNotFound(Uuid),
    /// Internal error indicating a bug in roster's code.
    #[error("Internal error with roster's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
