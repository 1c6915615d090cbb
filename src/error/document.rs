//! Document store error types.

use thiserror::Error;
use uuid::Uuid;

/// Document store error type.
///
/// Raised while loading or committing documents. When a commit fails none of its writes
/// are applied.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// An insert targeted an id that already exists in the collection.
    #[error("Document {id} already exists in collection `{collection}`")]
    Duplicate { collection: &'static str, id: Uuid },
    /// A replace or delete targeted an id that does not exist in the collection.
    #[error("Document {id} does not exist in collection `{collection}`")]
    Missing { collection: &'static str, id: Uuid },
    /// MongoDB driver error (connection, session, transaction or serialization failure).
    #[error(transparent)]
    MongoError(#[from] mongodb::error::Error),
}
