//! API handlers for the Acervo HTTP endpoints

pub mod copies;
pub mod health;
pub mod libraries;
pub mod openapi;
pub mod titles;
pub mod users;

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    routing::{get, post, put},
    Json, Router,
};
use serde::{de::DeserializeOwned, Serialize};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::ToSchema;

use crate::{error::AppError, AppState};

/// JSON request body whose decoding failures are reported as validation errors
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(value))
    }
}

/// Confirmation body for deletions
#[derive(Serialize, ToSchema)]
pub struct DeleteResponse {
    pub mensagem: String,
}

impl DeleteResponse {
    pub fn new(message: &str) -> Self {
        Self {
            mensagem: message.to_string(),
        }
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        .route("/health", get(health::health_check))
        // Titles (livros)
        .route("/livros", get(titles::list_titles))
        .route("/livros/new", post(titles::create_title))
        .route(
            "/livros/:id",
            get(titles::get_title)
                .put(titles::update_title)
                .delete(titles::delete_title),
        )
        // Users
        .route("/usuarios", get(users::list_users).post(users::create_user))
        .route(
            "/usuarios/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/niveis", get(users::list_access_levels))
        // Libraries
        .route(
            "/bibliotecas",
            get(libraries::list_libraries).post(libraries::create_library),
        )
        .route(
            "/bibliotecas/:id",
            get(libraries::get_library)
                .put(libraries::update_library)
                .delete(libraries::delete_library),
        )
        // Copies (acervo)
        .route("/acervo", get(copies::list_copies))
        .route("/acervo/:id", get(copies::get_copy))
        .route("/acervo/status/:id", put(copies::update_copy_status))
        .with_state(state);

    Router::new()
        .merge(routes)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
