use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::{
    data::document::{Document, DocumentRepository, DocumentWrite},
    error::document::DocumentError,
};

/// In-process document repository for tests and local runs.
///
/// Clones share the same storage. A commit stages its writes on a copy of the collection
/// and only swaps it in when every write succeeded.
#[derive(Clone)]
pub struct MemoryDocumentRepository<D: Document> {
    documents: Arc<Mutex<HashMap<Uuid, D>>>,
}

impl<D: Document> MemoryDocumentRepository<D> {
    pub fn new() -> Self {
        Self {
            documents: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Number of stored documents.
    pub async fn len(&self) -> usize {
        self.documents.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.lock().await.is_empty()
    }
}

impl<D: Document> Default for MemoryDocumentRepository<D> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<D: Document> DocumentRepository<D> for MemoryDocumentRepository<D> {
    async fn find(&self, id: Uuid) -> Result<Option<D>, DocumentError> {
        Ok(self.documents.lock().await.get(&id).cloned())
    }

    async fn commit(&self, writes: Vec<DocumentWrite<D>>) -> Result<(), DocumentError> {
        let mut documents = self.documents.lock().await;
        let mut staged = documents.clone();

        for write in writes {
            match write {
                DocumentWrite::Insert(document) => {
                    let id = document.id();
                    if staged.contains_key(&id) {
                        return Err(DocumentError::Duplicate {
                            collection: D::COLLECTION,
                            id,
                        });
                    }
                    staged.insert(id, document);
                }
                DocumentWrite::Replace(document) => {
                    let id = document.id();
                    match staged.get_mut(&id) {
                        Some(stored) => *stored = document,
                        None => {
                            return Err(DocumentError::Missing {
                                collection: D::COLLECTION,
                                id,
                            })
                        }
                    }
                }
                DocumentWrite::Delete(id) => {
                    if staged.remove(&id).is_none() {
                        return Err(DocumentError::Missing {
                            collection: D::COLLECTION,
                            id,
                        });
                    }
                }
            }
        }

        *documents = staged;

        Ok(())
    }
}
