use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct ZooSummaryDoc { pub zoo_id: i32, pub name: String }

#[derive(ToSchema)]
pub struct ZooDetailDoc { pub name: String, pub location: String }

#[derive(ToSchema)]
pub struct EmployeeDoc {
    pub emp_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub job_title: String,
    pub job_description: String,
}

#[derive(ToSchema)]
pub struct HabitatDoc { pub habitat: String, pub temperature: f64, pub humidity: f64 }

#[derive(ToSchema)]
pub struct SpeciesDetailDoc {
    pub species_name: String,
    pub food: String,
    pub habitat: Option<HabitatDoc>,
}

/// `zoo_name` is absent when the listing was filtered by `zoo_id`.
#[derive(ToSchema)]
pub struct AnimalDoc {
    pub animal_id: i32,
    pub name: String,
    pub age: f64,
    pub gender: String,
    pub species_name: String,
    pub zoo_id: i32,
    pub zoo_name: Option<String>,
}

/// Numeric fields also accept numeric strings.
#[derive(ToSchema)]
pub struct CreateAnimalDoc {
    pub animal_id: Option<i32>,
    pub name: String,
    pub age: f64,
    pub gender: String,
    pub species_name: String,
    pub zoo_id: i32,
}

#[derive(ToSchema)]
pub struct UpdateAnimalDoc {
    pub name: String,
    pub age: f64,
    pub gender: String,
    pub species_name: String,
    pub zoo_id: i32,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::zoos::list,
        crate::routes::zoos::detail,
        crate::routes::zoos::employees,
        crate::routes::animals::list,
        crate::routes::animals::create,
        crate::routes::animals::update,
        crate::routes::animals::delete,
        crate::routes::species::list,
        crate::routes::species::detail,
    ),
    components(
        schemas(
            HealthResponse,
            MessageDoc,
            ZooSummaryDoc,
            ZooDetailDoc,
            EmployeeDoc,
            HabitatDoc,
            SpeciesDetailDoc,
            AnimalDoc,
            CreateAnimalDoc,
            UpdateAnimalDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "zoos"),
        (name = "animals"),
        (name = "species")
    )
)]
pub struct ApiDoc;
