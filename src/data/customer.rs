use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::{
    data::persistable::Persistable,
    model::customer::{Address, Customer},
};

#[async_trait]
impl Persistable for Customer {
    type Entity = entity::customer::Entity;
    type Model = entity::customer::Model;
    type ActiveModel = entity::customer::ActiveModel;

    const NESTED_PROPERTIES: &'static [&'static str] = &[Customer::ADDRESSES];

    fn id(&self) -> Uuid {
        self.id
    }

    fn id_column() -> entity::customer::Column {
        entity::customer::Column::Id
    }

    fn from_model(model: entity::customer::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            phone: model.phone,
            addresses: None,
        }
    }

    fn to_active_model(&self) -> entity::customer::ActiveModel {
        entity::customer::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name.clone()),
            email: ActiveValue::Set(self.email.clone()),
            phone: ActiveValue::Set(self.phone.clone()),
        }
    }

    fn map_scalars(&mut self, source: &Self) {
        self.name = source.name.clone();
        self.email = source.email.clone();
        self.phone = source.phone.clone();
    }

    fn map_nested(&mut self, source: &Self) {
        self.addresses = source.addresses.clone();
    }

    fn strip_nested(&mut self) {
        self.addresses = None;
    }

    async fn insert_nested<C>(&self, db: &C) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        let addresses = match &self.addresses {
            Some(addresses) if !addresses.is_empty() => addresses,
            _ => return Ok(()),
        };

        entity::prelude::CustomerAddress::insert_many(
            addresses
                .iter()
                .map(|address| address_active_model(self.id, address)),
        )
        .exec(db)
        .await?;

        Ok(())
    }

    async fn replace_nested<C>(&self, db: &C) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        if self.addresses.is_none() {
            return Ok(());
        }

        entity::prelude::CustomerAddress::delete_many()
            .filter(entity::customer_address::Column::CustomerId.eq(self.id))
            .exec(db)
            .await?;

        self.insert_nested(db).await
    }

    async fn load_nested<C>(customers: &mut [Self], db: &C, property: &str) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        if property != Customer::ADDRESSES || customers.is_empty() {
            return Ok(());
        }

        let customer_ids: Vec<Uuid> = customers.iter().map(|customer| customer.id).collect();
        let rows = entity::prelude::CustomerAddress::find()
            .filter(entity::customer_address::Column::CustomerId.is_in(customer_ids))
            .order_by_asc(entity::customer_address::Column::Street)
            .all(db)
            .await?;

        let mut addresses: HashMap<Uuid, Vec<Address>> = HashMap::new();
        for row in rows {
            addresses.entry(row.customer_id).or_default().push(Address {
                id: row.id,
                street: row.street,
                city: row.city,
                postal_code: row.postal_code,
            });
        }

        for customer in customers.iter_mut() {
            customer.addresses = Some(addresses.remove(&customer.id).unwrap_or_default());
        }

        Ok(())
    }
}

fn address_active_model(
    customer_id: Uuid,
    address: &Address,
) -> entity::customer_address::ActiveModel {
    entity::customer_address::ActiveModel {
        id: ActiveValue::Set(address.id),
        customer_id: ActiveValue::Set(customer_id),
        street: ActiveValue::Set(address.street.clone()),
        city: ActiveValue::Set(address.city.clone()),
        postal_code: ActiveValue::Set(address.postal_code.clone()),
    }
}
