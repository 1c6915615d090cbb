//! Data access layer.
//!
//! [`EntityRepository`] implements every relational persistence operation once, for any
//! domain type implementing [`Persistable`]. The document store used for office aggregates
//! lives in [`document`].

pub mod customer;
pub mod document;
pub mod employee;
pub mod options;
pub mod persistable;
pub mod user;

#[cfg(test)]
mod tests;

use std::{marker::PhantomData, str::FromStr};

use sea_orm::{
    sea_query::Order, ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityName,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select, TransactionTrait,
};
use uuid::Uuid;

use crate::error::repository::RepositoryError;

pub use options::{Direction, Filter, FindOptions, OrderBy, Page, QueryLimits};
pub use persistable::Persistable;

use options::to_condition;

type ColumnOf<T> = <<T as Persistable>::Entity as EntityTrait>::Column;

/// Generic repository over any [`Persistable`] entity.
///
/// Writes strip nested properties unless a `*_with_nested` variant is used. Operations
/// touching more than one row run inside a transaction scoped to the call; dropping the
/// returned future before it completes rolls that transaction back.
pub struct EntityRepository<'a, T: Persistable, C: ConnectionTrait + TransactionTrait> {
    db: &'a C,
    entity: PhantomData<T>,
}

impl<'a, T: Persistable, C: ConnectionTrait + TransactionTrait> EntityRepository<'a, T, C> {
    /// Creates a new instance of [`EntityRepository`]
    pub fn new(db: &'a C) -> Self {
        Self {
            db,
            entity: PhantomData,
        }
    }

    /// Inserts an entity without its nested properties.
    ///
    /// # Returns
    /// - `Ok(T)` - The stored entity with nested properties cleared
    /// - `Err(DbErr)` - The insert failed
    pub async fn add(&self, mut entity: T) -> Result<T, DbErr> {
        entity.strip_nested();

        T::Entity::insert(entity.to_active_model())
            .exec(self.db)
            .await?;

        tracing::debug!("Inserted {} entity {}", table_name::<T>(), entity.id());

        Ok(entity)
    }

    /// Inserts an entity together with its nested properties in one transaction.
    pub async fn add_with_nested(&self, entity: T) -> Result<T, DbErr> {
        let txn = self.db.begin().await?;

        T::Entity::insert(entity.to_active_model())
            .exec(&txn)
            .await?;
        entity.insert_nested(&txn).await?;

        txn.commit().await?;

        tracing::debug!(
            "Inserted {} entity {} with nested properties",
            table_name::<T>(),
            entity.id()
        );

        Ok(entity)
    }

    /// Inserts a batch of entities without their nested properties in one transaction.
    pub async fn add_range(&self, mut entities: Vec<T>) -> Result<Vec<T>, DbErr> {
        for entity in entities.iter_mut() {
            entity.strip_nested();
        }

        let txn = self.db.begin().await?;
        insert_rows(&txn, &entities).await?;
        txn.commit().await?;

        tracing::debug!("Inserted {} {} entities", entities.len(), table_name::<T>());

        Ok(entities)
    }

    /// Inserts a batch of entities and their nested properties in one transaction.
    pub async fn add_range_with_nested(&self, entities: Vec<T>) -> Result<Vec<T>, DbErr> {
        let txn = self.db.begin().await?;

        insert_rows(&txn, &entities).await?;
        for entity in &entities {
            entity.insert_nested(&txn).await?;
        }

        txn.commit().await?;

        tracing::debug!(
            "Inserted {} {} entities with nested properties",
            entities.len(),
            table_name::<T>()
        );

        Ok(entities)
    }

    /// Deletes an entity by reference.
    ///
    /// Returns the entity regardless of a matching row existing.
    pub async fn remove(&self, entity: T) -> Result<T, DbErr> {
        T::Entity::delete_many()
            .filter(T::id_column().eq(entity.id()))
            .exec(self.db)
            .await?;

        tracing::debug!("Removed {} entity {}", table_name::<T>(), entity.id());

        Ok(entity)
    }

    /// Deletes an entity by id.
    ///
    /// # Returns
    /// - `Ok(Some(T))` - The entity as it was stored before deletion
    /// - `Ok(None)` - No entity exists with the given id
    /// - `Err(DbErr)` - The lookup or delete failed
    pub async fn remove_by_id(&self, id: Uuid) -> Result<Option<T>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(entity) = find_row::<T, _>(&txn, id).await? else {
            return Ok(None);
        };

        T::Entity::delete_many()
            .filter(T::id_column().eq(id))
            .exec(&txn)
            .await?;

        txn.commit().await?;

        tracing::debug!("Removed {} entity {}", table_name::<T>(), id);

        Ok(Some(entity))
    }

    /// Deletes a batch of entities in one statement.
    pub async fn remove_range(&self, entities: Vec<T>) -> Result<Vec<T>, DbErr> {
        if entities.is_empty() {
            return Ok(entities);
        }

        let ids: Vec<Uuid> = entities.iter().map(|entity| entity.id()).collect();
        let result = T::Entity::delete_many()
            .filter(T::id_column().is_in(ids))
            .exec(self.db)
            .await?;

        tracing::debug!(
            "Removed {} {} entities",
            result.rows_affected,
            table_name::<T>()
        );

        Ok(entities)
    }

    /// Deletes every row matching the filters without loading them.
    ///
    /// An empty filter set deletes every row of the table.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted
    /// - `Err(DbErr)` - The delete failed
    pub async fn remove_where(&self, filters: &[Filter]) -> Result<u64, DbErr> {
        let mut delete = T::Entity::delete_many();
        if !filters.is_empty() {
            delete = delete.filter(to_condition(filters));
        }

        let result = delete.exec(self.db).await?;

        tracing::debug!(
            "Removed {} {} entities matching filters",
            result.rows_affected,
            table_name::<T>()
        );

        Ok(result.rows_affected)
    }

    /// Copies the scalar fields of `entity` onto the stored row with the same id.
    ///
    /// # Returns
    /// - `Ok(Some(T))` - The updated entity as stored
    /// - `Ok(None)` - No entity exists with the given id, nothing was written
    /// - `Err(DbErr)` - The lookup or update failed
    pub async fn update(&self, entity: T) -> Result<Option<T>, DbErr> {
        let txn = self.db.begin().await?;
        let updated = update_row(&txn, &entity, false).await?;
        txn.commit().await?;

        Ok(updated)
    }

    /// Copies the scalar and nested fields of `entity` onto the stored row with the same id.
    ///
    /// A nested property that is not loaded on `entity` leaves the stored rows untouched.
    pub async fn update_with_nested(&self, entity: T) -> Result<Option<T>, DbErr> {
        let txn = self.db.begin().await?;
        let updated = update_row(&txn, &entity, true).await?;
        txn.commit().await?;

        Ok(updated)
    }

    /// Updates a batch of entities in one transaction.
    ///
    /// Returns one result per input in input order, `None` for ids that do not exist.
    pub async fn update_range(&self, entities: Vec<T>) -> Result<Vec<Option<T>>, DbErr> {
        let txn = self.db.begin().await?;

        let mut updated = Vec::with_capacity(entities.len());
        for entity in &entities {
            updated.push(update_row(&txn, entity, false).await?);
        }

        txn.commit().await?;

        Ok(updated)
    }

    /// Updates a batch of entities and their nested properties in one transaction.
    pub async fn update_range_with_nested(
        &self,
        entities: Vec<T>,
    ) -> Result<Vec<Option<T>>, DbErr> {
        let txn = self.db.begin().await?;

        let mut updated = Vec::with_capacity(entities.len());
        for entity in &entities {
            updated.push(update_row(&txn, entity, true).await?);
        }

        txn.commit().await?;

        Ok(updated)
    }

    /// Finds entities matching the options.
    ///
    /// # Arguments
    /// - `options` - Filters, sort, page and included nested properties, all optional
    ///
    /// # Returns
    /// - `Ok(Vec<T>)` - Matching entities, possibly empty
    /// - `Err(RepositoryError::UnknownProperty)` - Sort or include property does not exist
    /// - `Err(RepositoryError::InvalidPage)` - Page number or size is zero
    /// - `Err(RepositoryError::QueryFailed)` - The query failed
    pub async fn find_all(&self, options: FindOptions) -> Result<Vec<T>, RepositoryError> {
        let select = build_select::<T>(&options)?;
        let models = select.all(self.db).await?;

        self.hydrate(models, &options.include).await
    }

    /// Finds the entity holding the largest value of `property`.
    ///
    /// Filters and includes of `options` apply, its sort and page are ignored.
    pub async fn find_max(
        &self,
        property: &str,
        options: FindOptions,
    ) -> Result<Option<T>, RepositoryError> {
        self.find_first_by(property, Direction::Descending, options)
            .await
    }

    /// Finds the entity holding the smallest value of `property`.
    ///
    /// Filters and includes of `options` apply, its sort and page are ignored.
    pub async fn find_min(
        &self,
        property: &str,
        options: FindOptions,
    ) -> Result<Option<T>, RepositoryError> {
        self.find_first_by(property, Direction::Ascending, options)
            .await
    }

    /// Finds an entity by id, without nested properties.
    pub async fn find(&self, id: Uuid) -> Result<Option<T>, RepositoryError> {
        Ok(find_row::<T, _>(self.db, id).await?)
    }

    /// Counts rows matching every filter, or all rows for an empty filter set.
    pub async fn count(&self, filters: &[Filter]) -> Result<u64, RepositoryError> {
        let mut select = T::Entity::find();
        if !filters.is_empty() {
            select = select.filter(to_condition(filters));
        }

        Ok(select.count(self.db).await?)
    }

    /// Executes a raw SQL statement.
    ///
    /// Only pass trusted input, the statement is not parameterized.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows affected
    /// - `Err(DbErr)` - The statement failed
    pub async fn execute_query(&self, sql: &str) -> Result<u64, DbErr> {
        let result = self.db.execute_unprepared(sql).await?;

        tracing::debug!("Raw query affected {} rows", result.rows_affected());

        Ok(result.rows_affected())
    }

    async fn find_first_by(
        &self,
        property: &str,
        direction: Direction,
        options: FindOptions,
    ) -> Result<Option<T>, RepositoryError> {
        let options = FindOptions {
            order_by: Some(OrderBy {
                property: property.to_string(),
                direction,
            }),
            page: None,
            ..options
        };

        let select = build_select::<T>(&options)?;
        let Some(model) = select.one(self.db).await? else {
            return Ok(None);
        };

        Ok(self
            .hydrate(vec![model], &options.include)
            .await?
            .pop())
    }

    async fn hydrate(
        &self,
        models: Vec<T::Model>,
        include: &[String],
    ) -> Result<Vec<T>, RepositoryError> {
        let mut entities: Vec<T> = models.into_iter().map(T::from_model).collect();

        for property in include {
            T::load_nested(&mut entities, self.db, property).await?;
        }

        Ok(entities)
    }
}

fn table_name<T: Persistable>() -> String {
    T::Entity::default().table_name().to_string()
}

fn resolve_column<T: Persistable>(property: &str) -> Result<ColumnOf<T>, RepositoryError> {
    ColumnOf::<T>::from_str(property).map_err(|_| RepositoryError::UnknownProperty {
        entity: table_name::<T>(),
        property: property.to_string(),
    })
}

fn build_select<T: Persistable>(
    options: &FindOptions,
) -> Result<Select<T::Entity>, RepositoryError> {
    if let Some(property) = options
        .include
        .iter()
        .find(|property| !T::NESTED_PROPERTIES.contains(&property.as_str()))
    {
        return Err(RepositoryError::UnknownProperty {
            entity: table_name::<T>(),
            property: property.clone(),
        });
    }

    let mut select = T::Entity::find();

    if !options.filters.is_empty() {
        select = select.filter(to_condition(&options.filters));
    }

    if let Some(order_by) = &options.order_by {
        let order = match order_by.direction {
            Direction::Ascending => Order::Asc,
            Direction::Descending => Order::Desc,
        };
        select = select.order_by(resolve_column::<T>(&order_by.property)?, order);
    }

    if let Some(page) = options.page {
        if page.number == 0 || page.size == 0 {
            return Err(RepositoryError::InvalidPage {
                number: page.number,
                size: page.size,
            });
        }

        // Ties on the sort column must not move rows between pages
        select = select
            .order_by(T::id_column(), Order::Asc)
            .offset(page.offset())
            .limit(page.size);
    }

    Ok(select)
}

async fn find_row<T: Persistable, D: ConnectionTrait>(
    db: &D,
    id: Uuid,
) -> Result<Option<T>, DbErr> {
    let model = T::Entity::find()
        .filter(T::id_column().eq(id))
        .one(db)
        .await?;

    Ok(model.map(T::from_model))
}

async fn insert_rows<T: Persistable, D: ConnectionTrait>(
    db: &D,
    entities: &[T],
) -> Result<(), DbErr> {
    if entities.is_empty() {
        return Ok(());
    }

    T::Entity::insert_many(entities.iter().map(|entity| entity.to_active_model()))
        .exec(db)
        .await?;

    Ok(())
}

async fn update_row<T: Persistable, D: ConnectionTrait>(
    db: &D,
    incoming: &T,
    with_nested: bool,
) -> Result<Option<T>, DbErr> {
    let id = incoming.id();
    let Some(mut stored) = find_row::<T, _>(db, id).await? else {
        tracing::debug!("No {} entity {} to update", table_name::<T>(), id);
        return Ok(None);
    };

    stored.map_scalars(incoming);
    if with_nested {
        stored.map_nested(incoming);
    }

    let mut active_model = stored.to_active_model();
    active_model.not_set(T::id_column());

    T::Entity::update_many()
        .set(active_model)
        .filter(T::id_column().eq(id))
        .exec(db)
        .await?;

    if with_nested {
        stored.replace_nested(db).await?;
    }

    tracing::debug!("Updated {} entity {}", table_name::<T>(), id);

    Ok(Some(stored))
}
