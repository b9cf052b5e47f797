//! HTTP routing and OpenAPI documentation configuration.
//!
//! All endpoints are registered here with their OpenAPI documentation. Swagger UI for the
//! collected document is served under the RPC prefix, and every unmatched path gets a plain
//! 404.

use axum::{http::StatusCode, response::IntoResponse, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

pub static API_REFERENCE_PATH: &str = "/api/rpc/api-reference";
pub static OPENAPI_JSON_PATH: &str = "/api/rpc/api-reference/openapi.json";

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /api/rpc/healthCheck` - Public health check
/// - `POST /api/rpc/privateData` - Private data of the signed in user
/// - `POST /api/auth/sign-up/email` - Create an account with email and password
/// - `POST /api/auth/sign-in/email` - Sign in with email and password
/// - `POST /api/auth/sign-out` - Sign out
/// - `GET /api/auth/get-session` - Current session or `null`
///
/// The session layer is not part of the returned router; the caller adds it after
/// attaching the state.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(app_state).layer(session_layer);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Homepage", description = "Homepage API"), tags(
        (name = controller::rpc::RPC_TAG, description = "RPC procedures"),
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::rpc::health_check))
        .routes(routes!(controller::rpc::private_data))
        .routes(routes!(controller::auth::sign_up))
        .routes(routes!(controller::auth::sign_in))
        .routes(routes!(controller::auth::sign_out))
        .routes(routes!(controller::auth::get_session))
        .split_for_parts();

    routes
        .merge(SwaggerUi::new(API_REFERENCE_PATH).url(OPENAPI_JSON_PATH, api))
        .fallback(not_found)
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not found")
}
