use async_trait::async_trait;
use bson::doc;
use mongodb::{Client, Collection, Database};
use uuid::Uuid;

use crate::{
    data::document::{Document, DocumentRepository, DocumentWrite},
    error::document::DocumentError,
};

/// MongoDB backed document repository.
///
/// Commits run inside a client session transaction, which requires the server to run as a
/// replica set or sharded cluster.
pub struct MongoDocumentRepository<D: Document> {
    client: Client,
    collection: Collection<D>,
}

impl<D: Document> MongoDocumentRepository<D> {
    /// Creates a new instance of [`MongoDocumentRepository`] over `D::COLLECTION`
    pub fn new(client: Client, database: &Database) -> Self {
        Self {
            client,
            collection: database.collection::<D>(D::COLLECTION),
        }
    }
}

fn id_filter(id: Uuid) -> bson::Document {
    doc! { "_id": bson::Uuid::from(id) }
}

#[async_trait]
impl<D: Document> DocumentRepository<D> for MongoDocumentRepository<D> {
    async fn find(&self, id: Uuid) -> Result<Option<D>, DocumentError> {
        Ok(self.collection.find_one(id_filter(id)).await?)
    }

    async fn commit(&self, writes: Vec<DocumentWrite<D>>) -> Result<(), DocumentError> {
        if writes.is_empty() {
            return Ok(());
        }

        let mut session = self.client.start_session().await?;
        session.start_transaction().await?;

        // Returning early drops the session, which aborts the open transaction
        for write in writes {
            match write {
                DocumentWrite::Insert(document) => {
                    self.collection
                        .insert_one(&document)
                        .session(&mut session)
                        .await?;
                }
                DocumentWrite::Replace(document) => {
                    let id = document.id();
                    let result = self
                        .collection
                        .replace_one(id_filter(id), &document)
                        .session(&mut session)
                        .await?;

                    if result.matched_count == 0 {
                        return Err(DocumentError::Missing {
                            collection: D::COLLECTION,
                            id,
                        });
                    }
                }
                DocumentWrite::Delete(id) => {
                    let result = self
                        .collection
                        .delete_one(id_filter(id))
                        .session(&mut session)
                        .await?;

                    if result.deleted_count == 0 {
                        return Err(DocumentError::Missing {
                            collection: D::COLLECTION,
                            id,
                        });
                    }
                }
            }
        }

        session.commit_transaction().await?;

        tracing::debug!("Committed document writes to {}", D::COLLECTION);

        Ok(())
    }
}
