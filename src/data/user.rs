use sea_orm::ActiveValue;

use crate::{data::persistable::Persistable, model::user::User};

impl Persistable for User {
    type Entity = entity::user::Entity;
    type Model = entity::user::Model;
    type ActiveModel = entity::user::ActiveModel;

    fn id(&self) -> uuid::Uuid {
        self.id
    }

    fn id_column() -> entity::user::Column {
        entity::user::Column::Id
    }

    fn from_model(model: entity::user::Model) -> Self {
        Self {
            id: model.id,
            cpf: model.cpf,
            name: model.name,
            email: model.email,
            phone: model.phone,
        }
    }

    fn to_active_model(&self) -> entity::user::ActiveModel {
        entity::user::ActiveModel {
            id: ActiveValue::Set(self.id),
            cpf: ActiveValue::Set(self.cpf.clone()),
            name: ActiveValue::Set(self.name.clone()),
            email: ActiveValue::Set(self.email.clone()),
            phone: ActiveValue::Set(self.phone.clone()),
        }
    }

    fn map_scalars(&mut self, source: &Self) {
        self.cpf = source.cpf.clone();
        self.name = source.name.clone();
        self.email = source.email.clone();
        self.phone = source.phone.clone();
    }
}
