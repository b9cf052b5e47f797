use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        auth::{AuthSession, SignInDto, SignUpDto, SignedInDto},
    },
    server::{
        controller::util::origin::validate_origin,
        error::Error,
        model::{app::AppState, db::UserModel, session::user::SessionUserId},
        service::auth::AuthService,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Binds the user to the cookie session under a fresh session ID
async fn start_session(session: &Session, user: &UserModel) -> Result<(), Error> {
    session.cycle_id().await?;
    SessionUserId::insert(session, user.id).await?;

    Ok(())
}

/// Create an account with email and password
///
/// Creates the user and their credential account, then signs them in.
///
/// # Responses
/// - 200 (Success): Account created, session cookie set
/// - 400 (Bad Request): Invalid email, blank name or password length out of bounds
/// - 403 (Forbidden): Request origin is not trusted
/// - 422 (Unprocessable Entity): A user with this email already exists
/// - 500 (Internal Server Error): Database, hashing or session error
#[utoipa::path(
    post,
    path = "/api/auth/sign-up/email",
    tag = AUTH_TAG,
    request_body = SignUpDto,
    responses(
        (status = 200, description = "Account created and signed in", body = SignedInDto),
        (status = 400, description = "Invalid sign up details", body = ErrorDto),
        (status = 403, description = "Untrusted request origin", body = ErrorDto),
        (status = 422, description = "User already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sign_up(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Json(body): Json<SignUpDto>,
) -> Result<impl IntoResponse, Error> {
    validate_origin(&headers, &state.trusted_origin)?;

    let user = AuthService::new(&state.api.db)
        .sign_up(&body.name, &body.email, &body.password)
        .await?;

    start_session(&session, &user).await?;

    Ok((StatusCode::OK, Json(SignedInDto { user: user.into() })))
}

/// Sign in with email and password
///
/// # Responses
/// - 200 (Success): Signed in, session cookie set
/// - 401 (Unauthorized): Email or password is wrong
/// - 403 (Forbidden): Request origin is not trusted
/// - 500 (Internal Server Error): Database, hashing or session error
#[utoipa::path(
    post,
    path = "/api/auth/sign-in/email",
    tag = AUTH_TAG,
    request_body = SignInDto,
    responses(
        (status = 200, description = "Signed in", body = SignedInDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 403, description = "Untrusted request origin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sign_in(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Json(body): Json<SignInDto>,
) -> Result<impl IntoResponse, Error> {
    validate_origin(&headers, &state.trusted_origin)?;

    let user = AuthService::new(&state.api.db)
        .sign_in(&body.email, &body.password)
        .await?;

    start_session(&session, &user).await?;

    Ok((StatusCode::OK, Json(SignedInDto { user: user.into() })))
}

/// Signs the user out by clearing their session
///
/// # Responses
/// - 200 (Success): Signed out, or there was no user in session
/// - 403 (Forbidden): Request origin is not trusted
/// - 500 (Internal Server Error): There was an issue reading the session
#[utoipa::path(
    post,
    path = "/api/auth/sign-out",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Signed out", body = SuccessDto),
        (status = 403, description = "Untrusted request origin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sign_out(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
) -> Result<impl IntoResponse, Error> {
    validate_origin(&headers, &state.trusted_origin)?;

    let maybe_user_id = SessionUserId::get(&session).await?;

    // Only flush session if there is actually a user in session
    if maybe_user_id.is_some() {
        session.flush().await?;
    }

    Ok((StatusCode::OK, Json(SuccessDto { success: true })))
}

/// Get the caller's session
///
/// # Responses
/// - 200 (Success): The session, or `null` when the caller is not signed in
/// - 500 (Internal Server Error): Session store or database error
#[utoipa::path(
    get,
    path = "/api/auth/get-session",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The caller's session or null", body = AuthSession),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_session(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let auth_session = AuthService::new(&state.api.db)
        .get_session(&session)
        .await?;

    Ok((StatusCode::OK, Json(auth_session)))
}
