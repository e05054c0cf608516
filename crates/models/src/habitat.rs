use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::species;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "habitat")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub habitat: String,
    pub temperature: f64,
    pub humidity: f64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Species,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Species => Entity::has_many(species::Entity).into() }
    }
}

impl Related<species::Entity> for Entity {
    fn to() -> RelationDef { Relation::Species.def() }
}

impl ActiveModelBehavior for ActiveModel {}
