use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::zoo;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employee")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub emp_id: i32,
    pub zoo_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub job_title: String,
    pub job_description: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Zoo,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Zoo => Entity::belongs_to(zoo::Entity).from(Column::ZooId).to(zoo::Column::ZooId).into() }
    }
}

impl Related<zoo::Entity> for Entity {
    fn to() -> RelationDef { Relation::Zoo.def() }
}

impl ActiveModelBehavior for ActiveModel {}
