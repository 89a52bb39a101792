//! Copy (acervo) endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::{copy::UpdateCopyStatus, BookCopy, CopyDetail, CopyView},
    AppState,
};

use super::JsonBody;

/// List all copies with title, library and loan status
#[utoipa::path(
    get,
    path = "/acervo",
    tag = "acervo",
    responses(
        (status = 200, description = "List of copies", body = Vec<CopyView>)
    )
)]
pub async fn list_copies(State(state): State<AppState>) -> Json<Vec<CopyView>> {
    Json(state.services.catalog.list_copies())
}

/// Get a copy by ID
#[utoipa::path(
    get,
    path = "/acervo/{id}",
    tag = "acervo",
    params(("id" = u32, Path, description = "Copy ID")),
    responses(
        (status = 200, description = "Copy details", body = CopyDetail),
        (status = 404, description = "Copy not found")
    )
)]
pub async fn get_copy(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> AppResult<Json<CopyDetail>> {
    let copy = state.services.catalog.get_copy(id)?;
    Ok(Json(copy))
}

/// Lend a copy to a user, or return it with `idUsuario: -1`
#[utoipa::path(
    put,
    path = "/acervo/status/{id}",
    tag = "acervo",
    params(("id" = u32, Path, description = "Copy ID")),
    request_body = UpdateCopyStatus,
    responses(
        (status = 200, description = "Copy updated", body = BookCopy),
        (status = 400, description = "Missing or invalid user id"),
        (status = 404, description = "Copy or user not found")
    )
)]
pub async fn update_copy_status(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    JsonBody(data): JsonBody<UpdateCopyStatus>,
) -> AppResult<Json<BookCopy>> {
    let copy = state.services.loans.set_borrower(id, data)?;
    Ok(Json(copy))
}
