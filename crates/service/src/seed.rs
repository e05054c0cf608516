//! Demo data set: four habitats, four species, three zoos (the third with
//! no staff), seven animals and three employees.

use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set, TransactionTrait};
use tracing::info;

use models::{animal, employee, habitat, species, zoo};
use crate::errors::{db_err, ServiceError};

const HABITATS: &[(&str, f64, f64)] = &[
    ("Savannah", 30.0, 20.0),
    ("Rainforest", 27.0, 85.0),
    ("Arctic", -10.0, 60.0),
    ("Grassland", 22.0, 40.0),
];

const SPECIES: &[(&str, &str, &str)] = &[
    ("Lion", "Meat", "Savannah"),
    ("Elephant", "Vegetation", "Savannah"),
    ("Tiger", "Meat", "Rainforest"),
    ("Penguin", "Fish", "Arctic"),
];

const ZOOS: &[(&str, &str)] = &[
    ("San Diego Zoo", "San Diego"),
    ("Bronx Zoo", "New York"),
    ("Berlin Zoo", "Berlin"),
];

/// (name, species, age, gender, index into ZOOS)
const ANIMALS: &[(&str, &str, f64, &str, usize)] = &[
    ("Simba", "Lion", 5.0, "Male", 0),
    ("Nala", "Lion", 4.0, "Female", 1),
    ("Dumbo", "Elephant", 10.0, "Male", 0),
    ("Rajah", "Tiger", 3.0, "Male", 1),
    ("Pingu", "Penguin", 2.0, "Female", 0),
    ("Kiara", "Lion", 1.5, "Female", 0),
    ("Ellie", "Elephant", 7.0, "Female", 1),
];

/// (first, last, title, description, index into ZOOS)
const EMPLOYEES: &[(&str, &str, &str, &str, usize)] = &[
    ("Ada", "Moreno", "Zookeeper", "Feeds and monitors the big cats", 0),
    ("Ben", "Okafor", "Veterinarian", "Provides medical care for all animals", 0),
    ("Chloe", "Schmidt", "Curator", "Plans exhibits and acquisitions", 1),
];

/// Insert the demo data set when the store holds no zoo yet.
///
/// Returns `true` when rows were inserted.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<bool, ServiceError> {
    if zoo::Entity::find().count(db).await.map_err(db_err)? > 0 {
        info!("store already populated; skipping demo seed");
        return Ok(false);
    }

    let txn = db.begin().await.map_err(db_err)?;

    habitat::Entity::insert_many(HABITATS.iter().map(|&(name, temperature, humidity)| habitat::ActiveModel {
        habitat: Set(name.to_string()),
        temperature: Set(temperature),
        humidity: Set(humidity),
    }))
    .exec(&txn)
    .await
    .map_err(db_err)?;

    species::Entity::insert_many(SPECIES.iter().map(|&(name, food, habitat)| species::ActiveModel {
        species_name: Set(name.to_string()),
        food: Set(food.to_string()),
        habitat: Set(habitat.to_string()),
    }))
    .exec(&txn)
    .await
    .map_err(db_err)?;

    let mut zoo_ids = Vec::with_capacity(ZOOS.len());
    for &(name, location) in ZOOS {
        zoo_ids.push(zoo::create(&txn, name, location).await?.zoo_id);
    }

    for &(name, species_name, age, gender, zoo_idx) in ANIMALS {
        animal::ActiveModel {
            species_name: Set(species_name.to_string()),
            zoo_id: Set(zoo_ids[zoo_idx]),
            name: Set(name.to_string()),
            age: Set(age),
            gender: Set(gender.to_string()),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(db_err)?;
    }

    for &(first, last, title, description, zoo_idx) in EMPLOYEES {
        employee::ActiveModel {
            zoo_id: Set(zoo_ids[zoo_idx]),
            first_name: Set(first.to_string()),
            last_name: Set(last.to_string()),
            job_title: Set(title.to_string()),
            job_description: Set(description.to_string()),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(db_err)?;
    }

    txn.commit().await.map_err(db_err)?;
    info!(zoos = ZOOS.len(), animals = ANIMALS.len(), employees = EMPLOYEES.len(), "demo data seeded");
    Ok(true)
}
