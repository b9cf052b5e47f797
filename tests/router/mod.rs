//! Tests driving the full router with a cookie session layer.


use axum::{
    body::Body,
    http::{
        header::{CONTENT_TYPE, COOKIE, SET_COOKIE},
        Method, Request, StatusCode,
    },
    response::Response,
    Router,
};
use homepage::server::router::{routes, OPENAPI_JSON_PATH};
use homepage_test_utils::prelude::*;
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::util::{json_body, TestContextExt};

fn app(test: &TestContext) -> Router {
    let session_layer = SessionManagerLayer::new(MemoryStore::default()).with_secure(false);

    routes()
        .with_state(test.into_app_state())
        .layer(session_layer)
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    cookie: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut request = Request::builder().method(method).uri(uri);

    if let Some(cookie) = cookie {
        request = request.header(COOKIE, cookie);
    }

    let body = match body {
        Some(json) => {
            request = request.header(CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    app.clone().oneshot(request.body(body).unwrap()).await.unwrap()
}

/// Returns the `name=value` pair of the session cookie set by the response
fn session_cookie(resp: &Response) -> String {
    let header = resp.headers().get(SET_COOKIE).unwrap().to_str().unwrap();

    header.split(';').next().unwrap().to_string()
}

async fn sign_up(app: &Router, email: &str) -> (Response, String) {
    let resp = send(
        app,
        Method::POST,
        "/api/auth/sign-up/email",
        None,
        Some(serde_json::json!({
            "name": "Ada Lovelace",
            "email": email,
            "password": TEST_PASSWORD,
        })),
    )
    .await;
    let cookie = session_cookie(&resp);

    (resp, cookie)
}

#[tokio::test]
/// Expect "OK" from the health check without a session
async fn health_check_is_public() -> Result<(), TestError> {
    let test = TestBuilder::new().with_auth_tables().build().await?;
    let app = app(&test);

    let resp = send(&app, Method::POST, "/api/rpc/healthCheck", None, None).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await, "OK");

    Ok(())
}

#[tokio::test]
/// Expect 401 from private data without a session cookie
async fn private_data_requires_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_auth_tables().build().await?;
    let app = app(&test);

    let resp = send(&app, Method::POST, "/api/rpc/privateData", None, None).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json_body(resp).await["error"], "Unauthorized");

    Ok(())
}

#[tokio::test]
/// Expect 401 for a cookie naming a session the store does not know
async fn private_data_rejects_unknown_cookie() -> Result<(), TestError> {
    let test = TestBuilder::new().with_auth_tables().build().await?;
    let app = app(&test);

    let resp = send(
        &app,
        Method::POST,
        "/api/rpc/privateData",
        Some("id=AAAAAAAAAAAAAAAAAAAAAA"),
        None,
    )
    .await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect the cookie from sign up to unlock private data for the new user
async fn sign_up_cookie_reaches_private_data() -> Result<(), TestError> {
    let test = TestBuilder::new().with_auth_tables().build().await?;
    let app = app(&test);

    let (resp, cookie) = sign_up(&app, "ada@example.com").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let user_id = json_body(resp).await["user"]["id"].clone();

    let resp = send(
        &app,
        Method::POST,
        "/api/rpc/privateData",
        Some(&cookie),
        None,
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["message"], "This is private");
    assert_eq!(body["user"]["id"], user_id);

    Ok(())
}

#[tokio::test]
/// Expect the health check to stay "OK" for a signed in caller
async fn health_check_with_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_auth_tables().build().await?;
    let app = app(&test);

    let (_, cookie) = sign_up(&app, "ada@example.com").await;

    let resp = send(
        &app,
        Method::POST,
        "/api/rpc/healthCheck",
        Some(&cookie),
        None,
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await, "OK");

    Ok(())
}

#[tokio::test]
/// Expect get-session to return the user for the cookie and null without it
async fn get_session_follows_cookie() -> Result<(), TestError> {
    let test = TestBuilder::new().with_auth_tables().build().await?;
    let app = app(&test);

    let (_, cookie) = sign_up(&app, "ada@example.com").await;

    let resp = send(
        &app,
        Method::GET,
        "/api/auth/get-session",
        Some(&cookie),
        None,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["user"]["email"], "ada@example.com");

    let resp = send(&app, Method::GET, "/api/auth/get-session", None, None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(json_body(resp).await.is_null());

    Ok(())
}

#[tokio::test]
/// Expect the old cookie to stop working after sign out
async fn sign_out_revokes_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_auth_tables().build().await?;
    let app = app(&test);

    let (_, cookie) = sign_up(&app, "ada@example.com").await;

    let resp = send(&app, Method::POST, "/api/auth/sign-out", Some(&cookie), None).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = send(
        &app,
        Method::POST,
        "/api/rpc/privateData",
        Some(&cookie),
        None,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect sign in with the sign up password to issue a working cookie
async fn sign_in_cookie_reaches_private_data() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await?;
    let (user, _) = test
        .user()
        .insert_credential_user("ada@example.com", TEST_PASSWORD)
        .await?;
    let app = app(&test);

    let resp = send(
        &app,
        Method::POST,
        "/api/auth/sign-in/email",
        None,
        Some(serde_json::json!({
            "email": "ada@example.com",
            "password": TEST_PASSWORD,
        })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = session_cookie(&resp);

    let resp = send(
        &app,
        Method::POST,
        "/api/rpc/privateData",
        Some(&cookie),
        None,
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["user"]["id"], user.id);

    Ok(())
}

#[tokio::test]
/// Expect 404 "Not found" for unknown procedures and paths
async fn unknown_paths_are_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_auth_tables().build().await?;
    let app = app(&test);

    for uri in ["/api/rpc/unknownProcedure", "/does/not/exist"] {
        let resp = send(&app, Method::POST, uri, None, None).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"Not found");
    }

    Ok(())
}

#[tokio::test]
/// Expect the OpenAPI document to list the RPC procedures
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().with_auth_tables().build().await?;
    let app = app(&test);

    let resp = send(&app, Method::GET, OPENAPI_JSON_PATH, None, None).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert!(body["paths"]["/api/rpc/healthCheck"].is_object());
    assert!(body["paths"]["/api/rpc/privateData"].is_object());

    Ok(())
}
