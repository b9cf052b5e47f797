//! Tests for authentication controller endpoints.

mod sign_out;
mod sign_up;

use super::*;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use homepage::{
    model::auth::{SignInDto, SignUpDto},
    server::model::session::user::SessionUserId,
};

use crate::util::{json_body, origin_headers};
