//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{copies, health, libraries, titles, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Acervo API",
        version = "0.1.0",
        description = "In-memory library inventory API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        // Titles
        titles::list_titles,
        titles::get_title,
        titles::create_title,
        titles::update_title,
        titles::delete_title,
        // Users
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
        users::list_access_levels,
        // Libraries
        libraries::list_libraries,
        libraries::get_library,
        libraries::create_library,
        libraries::update_library,
        libraries::delete_library,
        // Copies
        copies::list_copies,
        copies::get_copy,
        copies::update_copy_status,
    ),
    components(
        schemas(
            // Titles
            crate::models::title::Title,
            crate::models::title::TitleDetail,
            crate::models::title::CreateTitle,
            crate::models::title::UpdateTitle,
            crate::models::title::DeletedTitle,
            crate::models::input::TagsInput,
            // Users
            crate::models::user::User,
            crate::models::user::UserView,
            crate::models::user::CreateUser,
            crate::models::user::UpdateUser,
            crate::models::user::AccessLevelEntry,
            // Libraries
            crate::models::library::Library,
            crate::models::library::CreateLibrary,
            crate::models::library::UpdateLibrary,
            // Copies
            crate::models::copy::BookCopy,
            crate::models::copy::CopyView,
            crate::models::copy::CopyDetail,
            crate::models::copy::UpdateCopyStatus,
            // Common
            crate::api::DeleteResponse,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "livros", description = "Titles and copy reconciliation"),
        (name = "usuarios", description = "User management"),
        (name = "bibliotecas", description = "Library management"),
        (name = "acervo", description = "Copies and loans")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
