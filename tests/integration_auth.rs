mod common;

use axum::body::Body;
use axum::http::{HeaderValue, Request, StatusCode, header};
use chirpy::chirpy_auth::{ACCESS_TOKEN_MAX_TTL, issue_access_token, verify_access_token};
use chirpy::chirpy_config::JwtConfig;
use chrono::{Duration, Utc};
use common::{
    assert_error, authorized_request, create_test_user, json_request, jwt_config, read_json,
    send, setup_test_app,
};
use serde_json::json;
use uuid::Uuid;

async fn login(app: &common::TestApp, email: &str, password: &str) -> serde_json::Value {
    let response = send(
        &app.router,
        json_request(
            "POST",
            "/api/login",
            json!({ "email": email, "password": password }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    read_json(response).await
}

#[tokio::test]
async fn test_login_success() {
    let app = setup_test_app();
    let user = create_test_user(&app.store).await;

    let body = login(&app, &user.email, &user.password).await;

    assert_eq!(body["id"], user.id.to_string());
    assert_eq!(body["email"], user.email);
    assert_eq!(body["is_chirpy_red"], false);
    assert!(body.get("created_at").is_some());
    assert!(body.get("hashed_password").is_none());
    assert_eq!(body["refresh_token"].as_str().unwrap().len(), 64);

    let token = body["token"].as_str().unwrap();
    assert_eq!(verify_access_token(token, &jwt_config()).unwrap(), user.id);
}

#[tokio::test]
async fn test_login_failures_share_one_response() {
    let app = setup_test_app();
    let user = create_test_user(&app.store).await;

    let wrong_password = send(
        &app.router,
        json_request(
            "POST",
            "/api/login",
            json!({ "email": user.email, "password": "definitely-wrong" }),
        ),
    )
    .await;
    assert_error(
        wrong_password,
        StatusCode::UNAUTHORIZED,
        "Incorrect email or password",
    )
    .await;

    let unknown_email = send(
        &app.router,
        json_request(
            "POST",
            "/api/login",
            json!({ "email": "nobody@example.com", "password": user.password }),
        ),
    )
    .await;
    assert_error(
        unknown_email,
        StatusCode::UNAUTHORIZED,
        "Incorrect email or password",
    )
    .await;
}

#[tokio::test]
async fn test_login_with_empty_email_is_unauthorized() {
    let app = setup_test_app();

    let response = send(
        &app.router,
        json_request("POST", "/api/login", json!({ "email": "", "password": "pw" })),
    )
    .await;
    assert_error(response, StatusCode::UNAUTHORIZED, "Incorrect email or password").await;
}

#[tokio::test]
async fn test_login_missing_password_is_bad_request() {
    let app = setup_test_app();

    let response = send(
        &app.router,
        json_request("POST", "/api/login", json!({ "email": "walt@example.com" })),
    )
    .await;
    assert_error(response, StatusCode::BAD_REQUEST, "password is required").await;
}

#[tokio::test]
async fn test_login_with_requested_ttl() {
    let app = setup_test_app();
    let user = create_test_user(&app.store).await;

    let response = send(
        &app.router,
        json_request(
            "POST",
            "/api/login",
            json!({ "email": user.email, "password": user.password, "expires_in_seconds": 7200 }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    let token = body["token"].as_str().unwrap();

    // Clamped to one hour: still valid just inside the hour, expired at it.
    let config = jwt_config();
    let almost = Utc::now() + ACCESS_TOKEN_MAX_TTL - Duration::seconds(5);
    let beyond = Utc::now() + ACCESS_TOKEN_MAX_TTL + Duration::seconds(5);
    assert!(chirpy::chirpy_auth::jwt::verify_access_token_at(token, &config, almost).is_ok());
    assert!(chirpy::chirpy_auth::jwt::verify_access_token_at(token, &config, beyond).is_err());
}

#[tokio::test]
async fn test_refresh_and_revoke_flow() {
    let app = setup_test_app();
    let user = create_test_user(&app.store).await;
    let body = login(&app, &user.email, &user.password).await;
    let bearer = format!("Bearer {}", body["refresh_token"].as_str().unwrap());

    let response = send(&app.router, authorized_request("POST", "/api/refresh", &bearer)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let refreshed = read_json(response).await;
    let token = refreshed["token"].as_str().unwrap();
    assert_eq!(verify_access_token(token, &jwt_config()).unwrap(), user.id);

    let response = send(&app.router, authorized_request("POST", "/api/revoke", &bearer)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(&app.router, authorized_request("POST", "/api/refresh", &bearer)).await;
    assert_error(
        response,
        StatusCode::UNAUTHORIZED,
        "Couldn't get user for refresh token",
    )
    .await;
}

#[tokio::test]
async fn test_refresh_keeps_refresh_token() {
    let app = setup_test_app();
    let user = create_test_user(&app.store).await;
    let body = login(&app, &user.email, &user.password).await;
    let refresh_token = body["refresh_token"].as_str().unwrap();
    let bearer = format!("Bearer {refresh_token}");

    for _ in 0..2 {
        let response = send(&app.router, authorized_request("POST", "/api/refresh", &bearer)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let record = app.store.refresh_token(refresh_token).await.unwrap();
    assert!(record.revoked_at.is_none());
    assert_eq!(app.store.refresh_token_count().await, 1);
}

#[tokio::test]
async fn test_refresh_with_expired_refresh_token() {
    let app = setup_test_app();
    let user = create_test_user(&app.store).await;
    let body = login(&app, &user.email, &user.password).await;
    let refresh_token = body["refresh_token"].as_str().unwrap();

    app.store
        .set_refresh_expiry(refresh_token, Utc::now() - Duration::days(1))
        .await;

    let response = send(
        &app.router,
        authorized_request("POST", "/api/refresh", &format!("Bearer {refresh_token}")),
    )
    .await;
    assert_error(
        response,
        StatusCode::UNAUTHORIZED,
        "Couldn't get user for refresh token",
    )
    .await;
}

#[tokio::test]
async fn test_refresh_rejects_access_token() {
    let app = setup_test_app();
    let user = create_test_user(&app.store).await;
    let body = login(&app, &user.email, &user.password).await;
    let access_token = body["token"].as_str().unwrap();

    let response = send(
        &app.router,
        authorized_request("POST", "/api/refresh", &format!("Bearer {access_token}")),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_header_errors() {
    let app = setup_test_app();

    let missing = Request::builder()
        .method("POST")
        .uri("/api/refresh")
        .body(Body::empty())
        .unwrap();
    assert_error(
        send(&app.router, missing).await,
        StatusCode::UNAUTHORIZED,
        "Missing authorization header",
    )
    .await;

    let empty_token = authorized_request("POST", "/api/refresh", "Bearer ");
    assert_error(
        send(&app.router, empty_token).await,
        StatusCode::UNAUTHORIZED,
        "Malformed authorization header",
    )
    .await;

    let mut not_utf8 = authorized_request("POST", "/api/refresh", "Bearer x");
    not_utf8.headers_mut().insert(
        header::AUTHORIZATION,
        HeaderValue::from_bytes(b"Bearer \xfe\xff").unwrap(),
    );
    assert_error(
        send(&app.router, not_utf8).await,
        StatusCode::UNAUTHORIZED,
        "Malformed authorization header",
    )
    .await;
}

#[tokio::test]
async fn test_revoke_unknown_token() {
    let app = setup_test_app();

    let response = send(
        &app.router,
        authorized_request("POST", "/api/revoke", "Bearer deadbeef"),
    )
    .await;
    assert_error(response, StatusCode::UNAUTHORIZED, "Couldn't revoke token").await;
}

#[tokio::test]
async fn test_revoke_twice_succeeds() {
    let app = setup_test_app();
    let user = create_test_user(&app.store).await;
    let body = login(&app, &user.email, &user.password).await;
    let bearer = format!("Bearer {}", body["refresh_token"].as_str().unwrap());

    for _ in 0..2 {
        let response = send(&app.router, authorized_request("POST", "/api/revoke", &bearer)).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
}

#[tokio::test]
async fn test_protected_route_rejects_bad_access_tokens() {
    let app = setup_test_app();
    let user_id = Uuid::new_v4();

    let forged = issue_access_token(
        user_id,
        &JwtConfig::new("some-other-secret"),
        ACCESS_TOKEN_MAX_TTL,
    )
    .unwrap();
    let expired = issue_access_token(user_id, &jwt_config(), Duration::seconds(-1)).unwrap();

    let uri = format!("/api/chirps/{}", Uuid::new_v4());

    for token in [forged, expired, "not.a.jwt".to_string()] {
        let response = send(
            &app.router,
            authorized_request("DELETE", &uri, &format!("Bearer {token}")),
        )
        .await;
        assert_error(response, StatusCode::UNAUTHORIZED, "Couldn't validate JWT").await;
    }

    let api_key_scheme = send(
        &app.router,
        authorized_request("DELETE", &uri, "ApiKey k1"),
    )
    .await;
    assert_error(
        api_key_scheme,
        StatusCode::UNAUTHORIZED,
        "Malformed authorization header",
    )
    .await;
}
