//! Handler tests for the Users domain: register, login, and /me over a mock
//! repository, including the auth guard behavior on /me.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum_helpers::{JwtAuth, JwtConfig};
use domain_users::{auth_handlers, User, UserRepository, UserResult, UserService};
use http_body_util::BodyExt;
use mockall::mock;
use serde_json::{json, Value};
use tower::ServiceExt; // for oneshot()
use uuid::Uuid;

const SECRET: &str = "users-handler-test-secret-32-chars!!!";

mock! {
    pub Repo {}

    #[async_trait]
    impl UserRepository for Repo {
        async fn create(&self, user: User) -> UserResult<User>;
        async fn get_by_id(&self, id: Uuid) -> UserResult<Option<User>>;
        async fn get_by_email(&self, email: &str) -> UserResult<Option<User>>;
        async fn email_exists(&self, email: &str) -> UserResult<bool>;
    }
}

fn jwt() -> JwtAuth {
    JwtAuth::new(&JwtConfig::new(SECRET))
}

fn app(repo: MockRepo) -> axum::Router {
    auth_handlers::router(UserService::new(repo), jwt())
}

fn hash(password: &str) -> String {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .unwrap()
        .to_string()
}

fn stored_user(email: &str, password: &str) -> User {
    User::new(email.to_string(), hash(password))
}

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_register_returns_user_and_token() {
    let mut repo = MockRepo::new();
    repo.expect_email_exists().returning(|_| Ok(false));
    repo.expect_create().returning(Ok);

    let response = app(repo)
        .oneshot(post_json(
            "/register",
            json!({"email": "Alice@Example.com", "password": "secret123"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let value = json_body(response.into_body()).await;

    assert_eq!(value["success"], true);
    assert_eq!(value["data"]["user"]["email"], "alice@example.com");
    assert_eq!(value["data"]["user"]["role"], "user");
    assert!(value["data"]["user"].get("passwordHash").is_none());

    // The issued token verifies against the same secret
    let token = value["data"]["token"].as_str().unwrap();
    let claims = jwt().verify_token(token).unwrap();
    assert_eq!(claims.email, "alice@example.com");
}

#[tokio::test]
async fn test_register_duplicate_email_is_duplicate_field() {
    let mut repo = MockRepo::new();
    repo.expect_email_exists().returning(|_| Ok(true));

    let response = app(repo)
        .oneshot(post_json(
            "/register",
            json!({"email": "taken@example.com", "password": "secret123"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let value = json_body(response.into_body()).await;
    assert_eq!(value["success"], false);
    assert_eq!(value["error"]["code"], "DUPLICATE_FIELD");
}

#[tokio::test]
async fn test_register_validates_email_and_password() {
    let response = app(MockRepo::new())
        .oneshot(post_json(
            "/register",
            json!({"email": "not-an-email", "password": "short"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let value = json_body(response.into_body()).await;
    assert_eq!(value["error"]["code"], "VALIDATION_ERROR");
    let details = value["error"]["details"].as_object().unwrap();
    assert!(details.contains_key("email"));
    assert!(details.contains_key("password"));
}

#[tokio::test]
async fn test_login_success() {
    let user = stored_user("bob@example.com", "hunter2-ok");
    let mut repo = MockRepo::new();
    {
        let user = user.clone();
        repo.expect_get_by_email()
            .withf(|email| email == "bob@example.com")
            .returning(move |_| Ok(Some(user.clone())));
    }

    let response = app(repo)
        .oneshot(post_json(
            "/login",
            json!({"email": "Bob@Example.com", "password": "hunter2-ok"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let value = json_body(response.into_body()).await;
    assert_eq!(value["data"]["user"]["email"], "bob@example.com");
    assert!(value["data"]["token"].is_string());
}

#[tokio::test]
async fn test_login_wrong_password_is_invalid_credentials() {
    let user = stored_user("bob@example.com", "correct-password");
    let mut repo = MockRepo::new();
    repo.expect_get_by_email()
        .returning(move |_| Ok(Some(user.clone())));

    let response = app(repo)
        .oneshot(post_json(
            "/login",
            json!({"email": "bob@example.com", "password": "wrong-password"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let value = json_body(response.into_body()).await;
    assert_eq!(value["error"]["code"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_login_unknown_email_is_same_generic_error() {
    let mut repo = MockRepo::new();
    repo.expect_get_by_email().returning(|_| Ok(None));

    let response = app(repo)
        .oneshot(post_json(
            "/login",
            json!({"email": "nobody@example.com", "password": "whatever"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let value = json_body(response.into_body()).await;
    // Indistinguishable from the wrong-password case
    assert_eq!(value["error"]["code"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_me_returns_profile_for_valid_token() {
    let user = stored_user("carol@example.com", "secret123");
    let token = jwt()
        .create_token(user.id, &user.email, "user")
        .unwrap();

    let mut repo = MockRepo::new();
    {
        let user = user.clone();
        repo.expect_get_by_id()
            .withf(move |id| *id == user.id)
            .returning(move |_| Ok(Some(user.clone())));
    }

    let response = app(repo)
        .oneshot(
            Request::builder()
                .uri("/me")
                .header("authorization", format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let value = json_body(response.into_body()).await;
    assert_eq!(value["data"]["email"], "carol@example.com");
    assert!(value["data"].get("passwordHash").is_none());
}

#[tokio::test]
async fn test_me_without_token_is_no_token() {
    let response = app(MockRepo::new())
        .oneshot(Request::builder().uri("/me").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let value = json_body(response.into_body()).await;
    assert_eq!(value["error"]["code"], "NO_TOKEN");
}

#[tokio::test]
async fn test_me_for_deleted_user_is_invalid_token() {
    let token = jwt()
        .create_token(Uuid::now_v7(), "ghost@example.com", "user")
        .unwrap();

    let mut repo = MockRepo::new();
    repo.expect_get_by_id().returning(|_| Ok(None));

    let response = app(repo)
        .oneshot(
            Request::builder()
                .uri("/me")
                .header("authorization", format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let value = json_body(response.into_body()).await;
    assert_eq!(value["error"]["code"], "INVALID_TOKEN");
}
