//! Library (bibliotecas) endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        library::{CreateLibrary, UpdateLibrary},
        Library,
    },
    AppState,
};

use super::{DeleteResponse, JsonBody};

/// List all libraries
#[utoipa::path(
    get,
    path = "/bibliotecas",
    tag = "bibliotecas",
    responses(
        (status = 200, description = "Library list", body = Vec<Library>)
    )
)]
pub async fn list_libraries(State(state): State<AppState>) -> Json<Vec<Library>> {
    Json(state.services.libraries.list())
}

/// Get library by ID
#[utoipa::path(
    get,
    path = "/bibliotecas/{id}",
    tag = "bibliotecas",
    params(("id" = u32, Path, description = "Library ID")),
    responses(
        (status = 200, description = "Library details", body = Library),
        (status = 404, description = "Library not found")
    )
)]
pub async fn get_library(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> AppResult<Json<Library>> {
    let library = state.services.libraries.get_by_id(id)?;
    Ok(Json(library))
}

/// Create library
#[utoipa::path(
    post,
    path = "/bibliotecas",
    tag = "bibliotecas",
    request_body = CreateLibrary,
    responses(
        (status = 201, description = "Library created", body = Library),
        (status = 400, description = "Missing or invalid fields")
    )
)]
pub async fn create_library(
    State(state): State<AppState>,
    JsonBody(data): JsonBody<CreateLibrary>,
) -> AppResult<(StatusCode, Json<Library>)> {
    let library = state.services.libraries.create(data)?;
    Ok((StatusCode::CREATED, Json(library)))
}

/// Update library
#[utoipa::path(
    put,
    path = "/bibliotecas/{id}",
    tag = "bibliotecas",
    params(("id" = u32, Path, description = "Library ID")),
    request_body = UpdateLibrary,
    responses(
        (status = 200, description = "Library updated", body = Library),
        (status = 404, description = "Library not found")
    )
)]
pub async fn update_library(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    JsonBody(data): JsonBody<UpdateLibrary>,
) -> AppResult<Json<Library>> {
    let library = state.services.libraries.update(id, data)?;
    Ok(Json(library))
}

/// Delete library
#[utoipa::path(
    delete,
    path = "/bibliotecas/{id}",
    tag = "bibliotecas",
    params(("id" = u32, Path, description = "Library ID")),
    responses(
        (status = 200, description = "Library deleted", body = DeleteResponse),
        (status = 404, description = "Library not found")
    )
)]
pub async fn delete_library(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> AppResult<Json<DeleteResponse>> {
    state.services.libraries.delete(id)?;
    Ok(Json(DeleteResponse::new("Deletada")))
}
