use homepage::server::controller::auth::sign_out;

use super::*;

#[tokio::test]
/// Expect 200 and the user cleared from the session
async fn signs_out_user_in_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_auth_tables().build().await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = sign_out(
        State(test.into_app_state()),
        test.session.clone(),
        origin_headers(TEST_TRUSTED_ORIGIN),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["success"], true);

    let maybe_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(maybe_user_id.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 200 even without session data
///
/// Flushing a session that was never stored fails, so the endpoint only flushes when
/// there is a user ID in session.
async fn succeeds_with_no_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_auth_tables().build().await?;

    let result = sign_out(
        State(test.into_app_state()),
        test.session.clone(),
        HeaderMap::new(),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 403 and the session kept when the Origin header names another site
async fn rejects_untrusted_origin() -> Result<(), TestError> {
    let test = TestBuilder::new().with_auth_tables().build().await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = sign_out(
        State(test.into_app_state()),
        test.session.clone(),
        origin_headers("https://attacker.example"),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(SessionUserId::get(&test.session).await.unwrap(), Some(1));

    Ok(())
}
