use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::{ErrorDto, PrivateDataDto},
    server::{
        model::context::{AuthenticatedContext, RequestContext},
        rpc,
    },
};

pub static RPC_TAG: &str = "rpc";

/// Health check
///
/// Public, answers `"OK"` whether or not the caller is signed in.
#[utoipa::path(
    post,
    path = "/api/rpc/healthCheck",
    tag = RPC_TAG,
    responses(
        (status = 200, description = "Server is up", body = String),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn health_check(ctx: RequestContext) -> impl IntoResponse {
    (StatusCode::OK, Json(rpc::health_check(&ctx)))
}

/// Private data of the signed in user
///
/// Requests without a valid session are rejected before the procedure runs.
#[utoipa::path(
    post,
    path = "/api/rpc/privateData",
    tag = RPC_TAG,
    responses(
        (status = 200, description = "Private data of the signed in user", body = PrivateDataDto),
        (status = 401, description = "No valid session", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn private_data(ctx: AuthenticatedContext) -> impl IntoResponse {
    (StatusCode::OK, Json(rpc::private_data(&ctx)))
}
