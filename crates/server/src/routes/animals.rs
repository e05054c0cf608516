use axum::{extract::{Path, Query, State}, http::StatusCode, Json};
use axum_extra::extract::WithRejection;
use common::types::Message;
use service::{
    animal_service::{self, AnimalView, CreateAnimalInput, UpdateAnimalInput},
    query::{AnimalFilter, AnimalQuery},
};
use tracing::info;

use crate::{errors::ApiError, routes::ServerState};

#[utoipa::path(
    get, path = "/animals", tag = "animals",
    params(
        ("species_name" = Option<String>, Query, description = "Exact species name"),
        ("zoo_id" = Option<i32>, Query, description = "Exact zoo id; rows then omit zoo_name"),
        ("minAge" = Option<f64>, Query, description = "Minimum age, inclusive"),
        ("maxAge" = Option<f64>, Query, description = "Maximum age, inclusive"),
        ("gender" = Option<String>, Query, description = "Exact gender"),
        ("sort_by" = Option<String>, Query, description = "animal_id | name | age | gender | species_name | zoo_id"),
        ("sort_order" = Option<String>, Query, description = "asc (default) | desc")
    ),
    responses(
        (status = 200, description = "Matching animals", body = [crate::openapi::AnimalDoc]),
        (status = 400, description = "Unparseable numeric parameter", body = crate::openapi::MessageDoc)
    )
)]
pub async fn list(State(state): State<ServerState>, WithRejection(Query(q), _): WithRejection<Query<AnimalQuery>, ApiError>) -> Result<Json<Vec<AnimalView>>, ApiError> {
    let filter = AnimalFilter::try_from(q)?;
    Ok(Json(animal_service::list_animals(&state.db, &filter).await?))
}

#[utoipa::path(
    post, path = "/animals", tag = "animals",
    request_body = crate::openapi::CreateAnimalDoc,
    responses(
        (status = 201, description = "Animal added", body = crate::openapi::MessageDoc),
        (status = 500, description = "Rejected by the store", body = crate::openapi::MessageDoc)
    )
)]
pub async fn create(State(state): State<ServerState>, WithRejection(Json(input), _): WithRejection<Json<CreateAnimalInput>, ApiError>) -> Result<(StatusCode, Json<Message>), ApiError> {
    let created = animal_service::create_animal(&state.db, input).await?;
    info!(animal_id = created.animal_id, "animal_create_request");
    Ok((StatusCode::CREATED, Json(Message::new("Animal added"))))
}

#[utoipa::path(
    put, path = "/animals/{id}", tag = "animals",
    params(("id" = i32, Path, description = "Animal id")),
    request_body = crate::openapi::UpdateAnimalDoc,
    responses(
        (status = 200, description = "Animal updated", body = crate::openapi::MessageDoc),
        (status = 404, description = "Animal not found", body = crate::openapi::MessageDoc),
        (status = 500, description = "Rejected by the store", body = crate::openapi::MessageDoc)
    )
)]
pub async fn update(State(state): State<ServerState>, WithRejection(Path(id), _): WithRejection<Path<i32>, ApiError>, WithRejection(Json(input), _): WithRejection<Json<UpdateAnimalInput>, ApiError>) -> Result<Json<Message>, ApiError> {
    animal_service::update_animal(&state.db, id, input).await?;
    Ok(Json(Message::new("Animal updated")))
}

#[utoipa::path(
    delete, path = "/animals/{id}", tag = "animals",
    params(("id" = i32, Path, description = "Animal id")),
    responses(
        (status = 200, description = "Animal deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "Animal not found", body = crate::openapi::MessageDoc)
    )
)]
pub async fn delete(State(state): State<ServerState>, WithRejection(Path(id), _): WithRejection<Path<i32>, ApiError>) -> Result<Json<Message>, ApiError> {
    animal_service::delete_animal(&state.db, id).await?;
    Ok(Json(Message::new("Animal deleted")))
}
