use axum::{extract::{Path, State}, Json};
use service::species_service::{self, SpeciesDetail};

use crate::{errors::ApiError, routes::ServerState};

#[utoipa::path(
    get, path = "/species", tag = "species",
    responses((status = 200, description = "Species names", body = [String]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(species_service::list_species_names(&state.db).await?))
}

#[utoipa::path(
    get, path = "/species/{name}", tag = "species",
    params(("name" = String, Path, description = "Species name")),
    responses(
        (status = 200, description = "Diet and habitat", body = crate::openapi::SpeciesDetailDoc),
        (status = 404, description = "Species not found", body = crate::openapi::MessageDoc)
    )
)]
pub async fn detail(State(state): State<ServerState>, Path(name): Path<String>) -> Result<Json<SpeciesDetail>, ApiError> {
    Ok(Json(species_service::get_species_detail(&state.db, &name).await?))
}
