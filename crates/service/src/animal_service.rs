use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use models::{animal, zoo};
use crate::{
    de::{number_or_string, opt_number_or_string},
    errors::{db_err, ServiceError},
    query::AnimalFilter,
};

/// Animal row as returned by the listing.
///
/// `zoo_name` is only filled when the listing is not scoped to a single zoo;
/// it is left out of the JSON entirely otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalView {
    pub animal_id: i32,
    pub name: String,
    pub age: f64,
    pub gender: String,
    pub species_name: String,
    pub zoo_id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoo_name: Option<String>,
}

impl AnimalView {
    fn new(a: animal::Model, zoo_name: Option<String>) -> Self {
        Self {
            animal_id: a.animal_id,
            name: a.name,
            age: a.age,
            gender: a.gender,
            species_name: a.species_name,
            zoo_id: a.zoo_id,
            zoo_name,
        }
    }
}

/// Create payload. Nothing is checked up front: absent fields and dangling
/// references are rejected by the store's constraints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateAnimalInput {
    #[serde(default, deserialize_with = "opt_number_or_string")]
    pub animal_id: Option<i32>,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "opt_number_or_string")]
    pub age: Option<f64>,
    pub gender: Option<String>,
    pub species_name: Option<String>,
    #[serde(default, deserialize_with = "opt_number_or_string")]
    pub zoo_id: Option<i32>,
}

/// Full replacement of an animal's mutable fields.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAnimalInput {
    pub name: String,
    #[serde(deserialize_with = "number_or_string")]
    pub age: f64,
    pub gender: String,
    pub species_name: String,
    #[serde(deserialize_with = "number_or_string")]
    pub zoo_id: i32,
}

fn set_or_skip<T>(v: Option<T>) -> ActiveValue<T>
where
    T: Into<sea_orm::Value>,
{
    match v {
        Some(v) => Set(v),
        None => ActiveValue::NotSet,
    }
}

/// List animals matching `filter`, sorted when a sort is given.
///
/// Rows carry the zoo's name unless the filter is scoped to one zoo.
pub async fn list_animals<C: ConnectionTrait>(db: &C, filter: &AnimalFilter) -> Result<Vec<AnimalView>, ServiceError> {
    let mut select = animal::Entity::find();
    if let Some(s) = &filter.species_name {
        select = select.filter(animal::Column::SpeciesName.eq(s.as_str()));
    }
    if let Some(z) = filter.zoo_id {
        select = select.filter(animal::Column::ZooId.eq(z));
    }
    if let Some(min) = filter.min_age {
        select = select.filter(animal::Column::Age.gte(min));
    }
    if let Some(max) = filter.max_age {
        select = select.filter(animal::Column::Age.lte(max));
    }
    if let Some(g) = &filter.gender {
        select = select.filter(animal::Column::Gender.eq(g.as_str()));
    }
    if let Some(sort) = filter.sort {
        select = select.order_by(sort.key.column(), sort.order.into());
    }

    let rows = if filter.zoo_id.is_some() {
        select
            .all(db)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(|a| AnimalView::new(a, None))
            .collect::<Vec<_>>()
    } else {
        select
            .find_also_related(zoo::Entity)
            .all(db)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(|(a, z)| AnimalView::new(a, z.map(|z| z.name)))
            .collect::<Vec<_>>()
    };
    debug!(count = rows.len(), ?filter, "listed animals");
    Ok(rows)
}

/// Get one animal by id.
pub async fn get_animal<C: ConnectionTrait>(db: &C, animal_id: i32) -> Result<Option<animal::Model>, ServiceError> {
    animal::Entity::find_by_id(animal_id).one(db).await.map_err(db_err)
}

/// Insert a new animal.
#[instrument(skip(db, input), fields(species = ?input.species_name, zoo_id = ?input.zoo_id))]
pub async fn create_animal<C: ConnectionTrait>(db: &C, input: CreateAnimalInput) -> Result<animal::Model, ServiceError> {
    let am = animal::ActiveModel {
        animal_id: set_or_skip(input.animal_id),
        species_name: set_or_skip(input.species_name),
        zoo_id: set_or_skip(input.zoo_id),
        name: set_or_skip(input.name),
        age: set_or_skip(input.age),
        gender: set_or_skip(input.gender),
    };
    let created = am.insert(db).await.map_err(db_err)?;
    info!(animal_id = created.animal_id, "animal created");
    Ok(created)
}

/// Replace name, age, gender, species and zoo of an existing animal.
#[instrument(skip(db, input))]
pub async fn update_animal<C: ConnectionTrait>(db: &C, animal_id: i32, input: UpdateAnimalInput) -> Result<animal::Model, ServiceError> {
    let existing = get_animal(db, animal_id).await?.ok_or_else(|| ServiceError::not_found("Animal"))?;
    let mut am: animal::ActiveModel = existing.into();
    am.name = Set(input.name);
    am.age = Set(input.age);
    am.gender = Set(input.gender);
    am.species_name = Set(input.species_name);
    am.zoo_id = Set(input.zoo_id);
    let updated = am.update(db).await.map_err(db_err)?;
    info!(animal_id, "animal updated");
    Ok(updated)
}

/// Delete an animal; not-found when no row has `animal_id`.
#[instrument(skip(db))]
pub async fn delete_animal<C: ConnectionTrait>(db: &C, animal_id: i32) -> Result<(), ServiceError> {
    let res = animal::Entity::delete_by_id(animal_id).exec(db).await.map_err(db_err)?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("Animal"));
    }
    info!(animal_id, "animal deleted");
    Ok(())
}
