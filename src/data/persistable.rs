use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, FromQueryResult};
use uuid::Uuid;

/// Domain type stored through the generic [`EntityRepository`](super::EntityRepository).
///
/// Implementors describe how to move between the domain value and its SeaORM row, which of
/// their fields are nested navigation properties, and how those properties are written and
/// loaded. The identifier is never touched by the field mappers.
#[async_trait]
pub trait Persistable: Clone + Send + Sync + Sized + 'static {
    /// SeaORM entity backing the domain type.
    type Entity: EntityTrait<Model = Self::Model>;
    /// Row model of [`Self::Entity`].
    type Model: FromQueryResult + Send + Sync + 'static;
    /// Active model of [`Self::Entity`].
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + Send + 'static;

    /// Names of the navigation properties that can be included in reads and writes.
    const NESTED_PROPERTIES: &'static [&'static str] = &[];

    /// Identifier of the entity.
    fn id(&self) -> Uuid;

    /// Primary key column of [`Self::Entity`].
    fn id_column() -> <Self::Entity as EntityTrait>::Column;

    /// Builds the domain value from a row, with nested properties not loaded.
    fn from_model(model: Self::Model) -> Self;

    /// Active model with every scalar column set, including the identifier.
    fn to_active_model(&self) -> Self::ActiveModel;

    /// Copies every scalar field except the identifier from `source`.
    fn map_scalars(&mut self, source: &Self);

    /// Copies every nested property from `source`.
    fn map_nested(&mut self, _source: &Self) {}

    /// Clears every nested property.
    fn strip_nested(&mut self) {}

    /// Inserts the nested property rows owned by this entity.
    async fn insert_nested<C>(&self, _db: &C) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        Ok(())
    }

    /// Replaces the stored nested property rows with the ones held by this entity.
    async fn replace_nested<C>(&self, _db: &C) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        Ok(())
    }

    /// Loads one nested property for a batch of entities.
    ///
    /// `property` is always one of [`Self::NESTED_PROPERTIES`]. Implementations fetch the rows
    /// for the whole batch in one query.
    async fn load_nested<C>(
        _entities: &mut [Self],
        _db: &C,
        _property: &str,
    ) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        Ok(())
    }
}
