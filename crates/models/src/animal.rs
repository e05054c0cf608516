use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{species, zoo};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "animal")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub animal_id: i32,
    pub species_name: String,
    pub zoo_id: i32,
    pub name: String,
    pub age: f64,
    pub gender: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Species,
    Zoo,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Species => Entity::belongs_to(species::Entity)
                .from(Column::SpeciesName)
                .to(species::Column::SpeciesName)
                .into(),
            Relation::Zoo => Entity::belongs_to(zoo::Entity)
                .from(Column::ZooId)
                .to(zoo::Column::ZooId)
                .into(),
        }
    }
}

impl Related<species::Entity> for Entity {
    fn to() -> RelationDef { Relation::Species.def() }
}

impl Related<zoo::Entity> for Entity {
    fn to() -> RelationDef { Relation::Zoo.def() }
}

impl ActiveModelBehavior for ActiveModel {}
