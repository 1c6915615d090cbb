//! Document store access.
//!
//! Aggregates that live outside the relational database (offices) are read by id and written
//! through a unit of work: a list of [`DocumentWrite`]s committed in one transaction, so a
//! failed commit leaves every document untouched.

pub mod memory;
pub mod mongo;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

use crate::error::document::DocumentError;

pub use memory::MemoryDocumentRepository;
pub use mongo::MongoDocumentRepository;

/// Type stored as a document in its own collection.
pub trait Document: Serialize + DeserializeOwned + Clone + Send + Sync + Unpin + 'static {
    /// Name of the collection holding documents of this type.
    const COLLECTION: &'static str;

    /// Identifier stored as the document's `_id`.
    fn id(&self) -> Uuid;
}

/// A single write queued in a unit of work.
#[derive(Clone, Debug, PartialEq)]
pub enum DocumentWrite<D> {
    /// Insert a new document, the id must not exist.
    Insert(D),
    /// Replace an existing document with the same id.
    Replace(D),
    /// Delete the document with the given id.
    Delete(Uuid),
}

/// Document store for one document type.
#[async_trait]
pub trait DocumentRepository<D: Document>: Send + Sync {
    /// Loads a document by id.
    ///
    /// # Returns
    /// - `Ok(Some(D))` - The stored document
    /// - `Ok(None)` - No document exists with the given id
    /// - `Err(DocumentError)` - The store could not be queried
    async fn find(&self, id: Uuid) -> Result<Option<D>, DocumentError>;

    /// Applies every write in one transaction, either all of them take effect or none.
    async fn commit(&self, writes: Vec<DocumentWrite<D>>) -> Result<(), DocumentError>;

    async fn insert(&self, document: D) -> Result<(), DocumentError> {
        self.commit(vec![DocumentWrite::Insert(document)]).await
    }

    async fn replace(&self, document: D) -> Result<(), DocumentError> {
        self.commit(vec![DocumentWrite::Replace(document)]).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), DocumentError> {
        self.commit(vec![DocumentWrite::Delete(id)]).await
    }
}
