//! Title (livros) endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        title::{CreateTitle, DeletedTitle, UpdateTitle},
        Title, TitleDetail,
    },
    AppState,
};

use super::JsonBody;

/// List all titles
#[utoipa::path(
    get,
    path = "/livros",
    tag = "livros",
    responses(
        (status = 200, description = "List of titles", body = Vec<Title>)
    )
)]
pub async fn list_titles(State(state): State<AppState>) -> Json<Vec<Title>> {
    Json(state.services.catalog.list_titles())
}

/// Get title details by ID
#[utoipa::path(
    get,
    path = "/livros/{id}",
    tag = "livros",
    params(("id" = u32, Path, description = "Title ID")),
    responses(
        (status = 200, description = "Title details", body = TitleDetail),
        (status = 404, description = "Title not found")
    )
)]
pub async fn get_title(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> AppResult<Json<TitleDetail>> {
    let title = state.services.catalog.get_title(id)?;
    Ok(Json(title))
}

/// Create a title and its copies
#[utoipa::path(
    post,
    path = "/livros/new",
    tag = "livros",
    request_body = CreateTitle,
    responses(
        (status = 201, description = "Title created", body = Title),
        (status = 400, description = "Missing or invalid fields")
    )
)]
pub async fn create_title(
    State(state): State<AppState>,
    JsonBody(data): JsonBody<CreateTitle>,
) -> AppResult<(StatusCode, Json<Title>)> {
    let created = state.services.catalog.create_title(data)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a title, reconciling copies with the new quantity
#[utoipa::path(
    put,
    path = "/livros/{id}",
    tag = "livros",
    params(("id" = u32, Path, description = "Title ID")),
    request_body = UpdateTitle,
    responses(
        (status = 200, description = "Title updated", body = Title),
        (status = 400, description = "Not enough available copies to remove"),
        (status = 404, description = "Title not found")
    )
)]
pub async fn update_title(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    JsonBody(data): JsonBody<UpdateTitle>,
) -> AppResult<Json<Title>> {
    let updated = state.services.catalog.update_title(id, data)?;
    Ok(Json(updated))
}

/// Delete a title and all of its copies
#[utoipa::path(
    delete,
    path = "/livros/{id}",
    tag = "livros",
    params(("id" = u32, Path, description = "Title ID")),
    responses(
        (status = 200, description = "Title deleted", body = DeletedTitle),
        (status = 404, description = "Title not found")
    )
)]
pub async fn delete_title(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> AppResult<Json<DeletedTitle>> {
    let deleted = state.services.catalog.delete_title(id)?;
    Ok(Json(deleted))
}
