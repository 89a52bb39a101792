//! User management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        user::{AccessLevelEntry, CreateUser, UpdateUser},
        User, UserView,
    },
    AppState,
};

use super::{DeleteResponse, JsonBody};

/// List users with their access level labels
#[utoipa::path(
    get,
    path = "/usuarios",
    tag = "usuarios",
    responses(
        (status = 200, description = "List of users", body = Vec<UserView>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<UserView>> {
    Json(state.services.users.list_users())
}

/// Get user details by ID
#[utoipa::path(
    get,
    path = "/usuarios/{id}",
    tag = "usuarios",
    params(("id" = u32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> AppResult<Json<User>> {
    let user = state.services.users.get_by_id(id)?;
    Ok(Json(user))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/usuarios",
    tag = "usuarios",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Missing or invalid fields")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(data): JsonBody<CreateUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    let created = state.services.users.create_user(data)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing user
#[utoipa::path(
    put,
    path = "/usuarios/{id}",
    tag = "usuarios",
    params(("id" = u32, Path, description = "User ID")),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    JsonBody(data): JsonBody<UpdateUser>,
) -> AppResult<Json<User>> {
    let updated = state.services.users.update_user(id, data)?;
    Ok(Json(updated))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/usuarios/{id}",
    tag = "usuarios",
    params(("id" = u32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = DeleteResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> AppResult<Json<DeleteResponse>> {
    state.services.users.delete_user(id)?;
    Ok(Json(DeleteResponse::new("Deletado")))
}

/// List access levels
#[utoipa::path(
    get,
    path = "/niveis",
    tag = "usuarios",
    responses(
        (status = 200, description = "Access levels", body = Vec<AccessLevelEntry>)
    )
)]
pub async fn list_access_levels(State(state): State<AppState>) -> Json<Vec<AccessLevelEntry>> {
    Json(state.services.users.access_levels())
}
