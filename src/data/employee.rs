use sea_orm::ActiveValue;

use crate::{data::persistable::Persistable, model::employee::Employee};

impl Persistable for Employee {
    type Entity = entity::employee::Entity;
    type Model = entity::employee::Model;
    type ActiveModel = entity::employee::ActiveModel;

    fn id(&self) -> uuid::Uuid {
        self.id
    }

    fn id_column() -> entity::employee::Column {
        entity::employee::Column::Id
    }

    fn from_model(model: entity::employee::Model) -> Self {
        Self {
            id: model.id,
            office_id: model.office_id,
            name: model.name,
            email: model.email,
            phone: model.phone,
            salary: model.salary,
        }
    }

    fn to_active_model(&self) -> entity::employee::ActiveModel {
        entity::employee::ActiveModel {
            id: ActiveValue::Set(self.id),
            office_id: ActiveValue::Set(self.office_id),
            name: ActiveValue::Set(self.name.clone()),
            email: ActiveValue::Set(self.email.clone()),
            phone: ActiveValue::Set(self.phone.clone()),
            salary: ActiveValue::Set(self.salary),
        }
    }

    fn map_scalars(&mut self, source: &Self) {
        self.office_id = source.office_id;
        self.name = source.name.clone();
        self.email = source.email.clone();
        self.phone = source.phone.clone();
        self.salary = source.salary;
    }
}
