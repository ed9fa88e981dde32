mod common;

use chirpy::chirpy_auth::refresh::new_refresh_token;
use chirpy::chirpy_auth::store::AuthStore;
use chirpy::chirpy_auth::{AuthError, AuthService, REFRESH_TOKEN_LIFETIME, StoreError};
use chirpy::chirpy_models::{LoginRequest, UpsertUserRequest};
use chirpy::modules::auth::repository::PgAuthRepository;
use chirpy::modules::users::service::UserService;
use chrono::{Duration, SubsecRound, Utc};
use common::{generate_unique_email, jwt_config};
use sqlx::PgPool;
use uuid::Uuid;

async fn insert_user(pool: &PgPool, password: &str) -> (Uuid, String) {
    let email = generate_unique_email();
    let user = UserService::create_user(
        pool,
        UpsertUserRequest {
            email: email.clone(),
            password: password.to_string(),
        },
    )
    .await
    .unwrap();
    (user.id, email)
}

#[sqlx::test(migrations = "./migrations")]
async fn test_find_user_by_email(pool: PgPool) {
    let repo = PgAuthRepository::new(pool.clone());
    let (user_id, email) = insert_user(&pool, "04234").await;

    let found = repo.find_user_by_email(&email).await.unwrap().unwrap();
    assert_eq!(found.user.id, user_id);
    assert_ne!(found.hashed_password, "04234");

    assert!(repo.find_user_by_email("nobody@example.com").await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_insert_and_find_refresh_token(pool: PgPool) {
    let repo = PgAuthRepository::new(pool.clone());
    let (user_id, _) = insert_user(&pool, "pw").await;
    let created = Utc::now().trunc_subsecs(6);

    let record = repo
        .insert_refresh_token(new_refresh_token(user_id, created).unwrap())
        .await
        .unwrap();

    assert_eq!(record.user_id, user_id);
    assert_eq!(record.created_at, created);
    assert_eq!(record.updated_at, created);
    assert_eq!(record.expires_at - record.created_at, REFRESH_TOKEN_LIFETIME);
    assert!(record.revoked_at.is_none());

    let found = repo.find_refresh_token(&record.token).await.unwrap().unwrap();
    assert_eq!(found, record);

    assert!(repo.find_refresh_token("missing").await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_refresh_token_conflicts(pool: PgPool) {
    let repo = PgAuthRepository::new(pool.clone());
    let (user_id, _) = insert_user(&pool, "pw").await;
    let new_token = new_refresh_token(user_id, Utc::now()).unwrap();

    repo.insert_refresh_token(new_token.clone()).await.unwrap();
    let result = repo.insert_refresh_token(new_token).await;

    assert!(matches!(result, Err(StoreError::Conflict(_))));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_revoke_twice_keeps_first_instant(pool: PgPool) {
    let repo = PgAuthRepository::new(pool.clone());
    let (user_id, _) = insert_user(&pool, "pw").await;
    let record = repo
        .insert_refresh_token(new_refresh_token(user_id, Utc::now()).unwrap())
        .await
        .unwrap();

    let first = Utc::now().trunc_subsecs(6);
    let second = first + Duration::seconds(30);

    let once = repo.revoke_refresh_token(&record.token, first).await.unwrap().unwrap();
    assert_eq!(once.revoked_at, Some(first));

    let twice = repo.revoke_refresh_token(&record.token, second).await.unwrap().unwrap();
    assert_eq!(twice.revoked_at, Some(first));
    assert_eq!(twice.updated_at, second);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_revoke_unknown_token_is_none(pool: PgPool) {
    let repo = PgAuthRepository::new(pool);
    let result = repo.revoke_refresh_token("missing", Utc::now()).await.unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_refresh_revoke_over_postgres(pool: PgPool) {
    let repo = PgAuthRepository::new(pool.clone());
    let config = jwt_config();
    let (user_id, email) = insert_user(&pool, "04234").await;

    let login = AuthService::login(
        &repo,
        &config,
        &LoginRequest {
            email,
            password: "04234".to_string(),
            expires_in_seconds: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(login.user.id, user_id);

    let bearer = format!("Bearer {}", login.refresh_token);

    let refreshed = AuthService::refresh(&repo, &config, Some(&bearer)).await.unwrap();
    assert_eq!(
        chirpy::chirpy_auth::verify_access_token(&refreshed.token, &config).unwrap(),
        user_id
    );

    AuthService::revoke(&repo, Some(&bearer)).await.unwrap();
    AuthService::revoke(&repo, Some(&bearer)).await.unwrap();

    let result = AuthService::refresh(&repo, &config, Some(&bearer)).await;
    assert!(matches!(result, Err(AuthError::RefreshTokenNotUsable)));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_deleting_user_removes_refresh_tokens(pool: PgPool) {
    let repo = PgAuthRepository::new(pool.clone());
    let (user_id, _) = insert_user(&pool, "pw").await;
    let record = repo
        .insert_refresh_token(new_refresh_token(user_id, Utc::now()).unwrap())
        .await
        .unwrap();

    assert_eq!(UserService::delete_all(&pool).await.unwrap(), 1);
    assert!(repo.find_refresh_token(&record.token).await.unwrap().is_none());
}
