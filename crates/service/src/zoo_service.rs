use sea_orm::{ConnectionTrait, EntityTrait, FromQueryResult, QueryOrder, QuerySelect};
use serde::{Deserialize, Serialize};

use models::zoo;
use crate::errors::{db_err, ServiceError};

/// Row of the zoo listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromQueryResult)]
pub struct ZooSummary {
    pub zoo_id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZooDetail {
    pub name: String,
    pub location: String,
}

impl From<zoo::Model> for ZooDetail {
    fn from(z: zoo::Model) -> Self {
        Self { name: z.name, location: z.location }
    }
}

/// List all zoos as `(zoo_id, name)`.
pub async fn list_zoos<C: ConnectionTrait>(db: &C) -> Result<Vec<ZooSummary>, ServiceError> {
    zoo::Entity::find()
        .select_only()
        .columns([zoo::Column::ZooId, zoo::Column::Name])
        .order_by_asc(zoo::Column::ZooId)
        .into_model::<ZooSummary>()
        .all(db)
        .await
        .map_err(db_err)
}

/// Get zoo name and location.
pub async fn get_zoo<C: ConnectionTrait>(db: &C, zoo_id: i32) -> Result<ZooDetail, ServiceError> {
    zoo::Entity::find_by_id(zoo_id)
        .one(db)
        .await
        .map_err(db_err)?
        .map(ZooDetail::from)
        .ok_or_else(|| ServiceError::not_found("Zoo"))
}
