use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::{animal, employee, errors};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "zoo")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub zoo_id: i32,
    pub name: String,
    pub location: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Animal,
    Employee,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Animal => Entity::has_many(animal::Entity).into(),
            Relation::Employee => Entity::has_many(employee::Entity).into(),
        }
    }
}

impl Related<animal::Entity> for Entity {
    fn to() -> RelationDef { Relation::Animal.def() }
}

impl Related<employee::Entity> for Entity {
    fn to() -> RelationDef { Relation::Employee.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create<C: ConnectionTrait>(db: &C, name: &str, location: &str) -> Result<Model, errors::ModelError> {
    if name.trim().is_empty() { return Err(errors::ModelError::Validation("name required".into())); }
    let am = ActiveModel {
        name: Set(name.to_string()),
        location: Set(location.to_string()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
