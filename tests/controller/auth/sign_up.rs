use homepage::server::controller::auth::sign_up;

use super::*;

fn sign_up_body(email: &str) -> Json<SignUpDto> {
    Json(SignUpDto {
        name: "Ada Lovelace".to_string(),
        email: email.to_string(),
        password: TEST_PASSWORD.to_string(),
    })
}

#[tokio::test]
/// Expect 200 with the new user and the user bound to the session
async fn signs_up_and_starts_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_auth_tables().build().await?;

    let result = sign_up(
        State(test.into_app_state()),
        test.session.clone(),
        origin_headers(TEST_TRUSTED_ORIGIN),
        sign_up_body("ada@example.com"),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    assert_eq!(body["user"]["email"], "ada@example.com");
    assert_eq!(body["user"]["name"], "Ada Lovelace");

    let session_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(session_user_id.is_some());
    assert_eq!(body["user"]["id"], session_user_id.unwrap());

    Ok(())
}

#[tokio::test]
/// Expect 200 from clients that send no Origin header
async fn accepts_request_without_origin() -> Result<(), TestError> {
    let test = TestBuilder::new().with_auth_tables().build().await?;

    let result = sign_up(
        State(test.into_app_state()),
        test.session.clone(),
        HeaderMap::new(),
        sign_up_body("ada@example.com"),
    )
    .await;

    assert!(result.is_ok());

    Ok(())
}

#[tokio::test]
/// Expect 403 when the Origin header names another site
async fn rejects_untrusted_origin() -> Result<(), TestError> {
    let test = TestBuilder::new().with_auth_tables().build().await?;

    let result = sign_up(
        State(test.into_app_state()),
        test.session.clone(),
        origin_headers("https://attacker.example"),
        sign_up_body("ada@example.com"),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // Nothing may be created for a rejected origin
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

#[tokio::test]
/// Expect 422 when the email is already registered
async fn rejects_duplicate_email() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .with_user("ada@example.com")
        .build()
        .await?;

    let result = sign_up(
        State(test.into_app_state()),
        test.session.clone(),
        origin_headers(TEST_TRUSTED_ORIGIN),
        sign_up_body("ada@example.com"),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

#[tokio::test]
/// Expect 400 for a password shorter than the minimum
async fn rejects_short_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_auth_tables().build().await?;

    let result = sign_up(
        State(test.into_app_state()),
        test.session.clone(),
        origin_headers(TEST_TRUSTED_ORIGIN),
        Json(SignUpDto {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "short".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 500 when the user tables do not exist
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = sign_up(
        State(test.into_app_state()),
        test.session.clone(),
        origin_headers(TEST_TRUSTED_ORIGIN),
        sign_up_body("ada@example.com"),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
