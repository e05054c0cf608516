use sea_orm::{ConnectionTrait, EntityTrait, QueryOrder, QuerySelect};
use serde::{Deserialize, Serialize};

use models::{habitat, species};
use crate::errors::{db_err, ServiceError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesDetail {
    pub species_name: String,
    pub food: String,
    /// `None` when the referenced habitat row is missing.
    pub habitat: Option<habitat::Model>,
}

/// All species names.
pub async fn list_species_names<C: ConnectionTrait>(db: &C) -> Result<Vec<String>, ServiceError> {
    species::Entity::find()
        .select_only()
        .column(species::Column::SpeciesName)
        .order_by_asc(species::Column::SpeciesName)
        .into_tuple::<String>()
        .all(db)
        .await
        .map_err(db_err)
}

/// Species diet plus the climate of its habitat.
pub async fn get_species_detail<C: ConnectionTrait>(db: &C, species_name: &str) -> Result<SpeciesDetail, ServiceError> {
    let found = species::Entity::find_by_id(species_name.to_string())
        .one(db)
        .await
        .map_err(db_err)?
        .ok_or_else(|| ServiceError::not_found("Species"))?;

    let habitat = habitat::Entity::find_by_id(found.habitat.clone())
        .one(db)
        .await
        .map_err(db_err)?;

    Ok(SpeciesDetail { species_name: found.species_name, food: found.food, habitat })
}
