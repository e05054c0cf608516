use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{animal, habitat};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "species")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub species_name: String,
    pub food: String,
    /// Key of the owning `habitat` row.
    pub habitat: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Habitat,
    Animal,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Habitat => Entity::belongs_to(habitat::Entity)
                .from(Column::Habitat)
                .to(habitat::Column::Habitat)
                .into(),
            Relation::Animal => Entity::has_many(animal::Entity).into(),
        }
    }
}

impl Related<habitat::Entity> for Entity {
    fn to() -> RelationDef { Relation::Habitat.def() }
}

impl Related<animal::Entity> for Entity {
    fn to() -> RelationDef { Relation::Animal.def() }
}

impl ActiveModelBehavior for ActiveModel {}
