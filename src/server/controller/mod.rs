//! HTTP controller endpoints.
//!
//! Axum handlers for the credential auth flow and the RPC procedures. Handlers validate the
//! request, call into services or procedures and turn the result into a response. They are
//! annotated with utoipa so the router can publish an OpenAPI document.

pub mod auth;
pub mod rpc;
pub mod util;
