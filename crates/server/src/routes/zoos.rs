use axum::{extract::{Path, State}, Json};
use axum_extra::extract::WithRejection;
use service::{
    employee_service::{self, EmployeeView},
    zoo_service::{self, ZooDetail, ZooSummary},
};

use crate::{errors::ApiError, routes::ServerState};

#[utoipa::path(
    get, path = "/zoos", tag = "zoos",
    responses((status = 200, description = "All zoos", body = [crate::openapi::ZooSummaryDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<ZooSummary>>, ApiError> {
    Ok(Json(zoo_service::list_zoos(&state.db).await?))
}

#[utoipa::path(
    get, path = "/zoos/{id}", tag = "zoos",
    params(("id" = i32, Path, description = "Zoo id")),
    responses(
        (status = 200, description = "Zoo name and location", body = crate::openapi::ZooDetailDoc),
        (status = 404, description = "Zoo not found", body = crate::openapi::MessageDoc)
    )
)]
pub async fn detail(State(state): State<ServerState>, WithRejection(Path(id), _): WithRejection<Path<i32>, ApiError>) -> Result<Json<ZooDetail>, ApiError> {
    Ok(Json(zoo_service::get_zoo(&state.db, id).await?))
}

#[utoipa::path(
    get, path = "/zoos/{id}/employees", tag = "zoos",
    params(("id" = i32, Path, description = "Zoo id")),
    responses(
        (status = 200, description = "Employees of the zoo", body = [crate::openapi::EmployeeDoc]),
        (status = 404, description = "Zoo not found", body = crate::openapi::MessageDoc)
    )
)]
pub async fn employees(State(state): State<ServerState>, WithRejection(Path(id), _): WithRejection<Path<i32>, ApiError>) -> Result<Json<Vec<EmployeeView>>, ApiError> {
    Ok(Json(employee_service::list_employees_for_zoo(&state.db, id).await?))
}
