//! End-to-end router tests against the in-memory repository.

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use users::{InMemoryUserRepository, UsersConfig, users_router_generic};

fn app() -> Router {
    users_router_generic(InMemoryUserRepository::new(), UsersConfig::development())
}

fn registration_body() -> Value {
    json!({
        "username": "alice99",
        "email": "alice@example.com",
        "password": "secret1",
        "firstName": "Alice",
        "familyName": "Smith",
        "bio": "Learning Japanese",
        "profileOptions": {
            "nativeLanguage": "English",
            "practicingLanguage": {
                "language": "Japanese",
                "proficiency": "Beginner"
            },
            "country": "Canada",
            "city": "Toronto",
            "gender": "Female",
            "age": 30
        }
    })
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn register(app: &Router) -> String {
    let (status, body) = send(app, "POST", "/register", None, Some(registration_body())).await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn register_returns_user_and_token() {
    let app = app();
    let (status, body) = send(&app, "POST", "/register", None, Some(registration_body())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "User registered successfully!");
    assert_eq!(body["data"]["user"]["username"], "alice99");
    assert_eq!(
        body["data"]["user"]["profilePictureUrl"],
        "default_profile.png"
    );
    assert!(!body["data"]["token"].as_str().unwrap().is_empty());

    // The hash must not appear anywhere in the response, under any key
    let rendered = body.to_string();
    assert!(!rendered.contains("passwordHash"));
    assert!(!rendered.contains("password"));
    assert!(!rendered.contains("secret1"));
    assert!(!rendered.contains("argon2"));
}

#[tokio::test]
async fn register_rejects_duplicate_email() {
    let app = app();
    register(&app).await;

    let mut body = registration_body();
    body["username"] = json!("bob42");
    let (status, body) = send(&app, "POST", "/register", None, Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "User with that email already exists.");
}

#[tokio::test]
async fn register_rejects_duplicate_username() {
    let app = app();
    register(&app).await;

    let mut body = registration_body();
    body["email"] = json!("bob@example.com");
    let (status, body) = send(&app, "POST", "/register", None, Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Username is already taken.");
}

#[tokio::test]
async fn register_validation_failure_lists_fields() {
    let app = app();
    let (status, body) = send(&app, "POST", "/register", None, Some(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Validation failed");
    let errors = body["errors"].as_array().unwrap();
    assert!(errors.iter().any(|e| e["field"] == "username"));
    assert!(errors.iter().any(|e| e["field"] == "profileOptions.age"));
}

#[tokio::test]
async fn register_coerces_stringly_typed_age() {
    let app = app();
    let mut body = registration_body();
    body["profileOptions"]["age"] = json!("30");
    let (status, body) = send(&app, "POST", "/register", None, Some(body)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["user"]["profileOptions"]["age"], 30);
}

#[tokio::test]
async fn login_succeeds_and_records_last_login() {
    let app = app();
    register(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        "/login",
        None,
        Some(json!({"email": "alice@example.com", "password": "secret1"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Login successful!");
    assert!(!body["data"]["token"].as_str().unwrap().is_empty());
    assert!(body["data"]["user"]["lastLoginDate"].is_string());
}

#[tokio::test]
async fn login_failures_share_one_message() {
    let app = app();
    register(&app).await;

    // Wrong password for a real account
    let (status, wrong_pw) = send(
        &app,
        "POST",
        "/login",
        None,
        Some(json!({"email": "alice@example.com", "password": "wrongpw"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Account that does not exist at all
    let (status, no_user) = send(
        &app,
        "POST",
        "/login",
        None,
        Some(json!({"email": "ghost@example.com", "password": "secret1"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    assert_eq!(wrong_pw["message"], "Invalid email or password.");
    assert_eq!(wrong_pw["message"], no_user["message"]);
}

#[tokio::test]
async fn profile_requires_token() {
    let app = app();
    let (status, body) = send(&app, "GET", "/profile", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "No token provided");
}

#[tokio::test]
async fn profile_rejects_garbage_token() {
    let app = app();
    let (status, body) = send(&app, "GET", "/profile", Some("not.a.jwt"), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid token");
}

#[tokio::test]
async fn bearer_scheme_is_case_sensitive() {
    let app = app();
    let token = register(&app).await;

    let request = Request::builder()
        .method("GET")
        .uri("/profile")
        .header(header::AUTHORIZATION, format!("bearer {token}"))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn profile_fetch_returns_owner() {
    let app = app();
    let token = register(&app).await;

    let (status, body) = send(&app, "GET", "/profile", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User profile fetched successfully!");
    assert_eq!(body["data"]["email"], "alice@example.com");
}

#[tokio::test]
async fn partial_update_preserves_untouched_fields() {
    let app = app();
    let token = register(&app).await;

    let (status, body) = send(
        &app,
        "PUT",
        "/profile",
        Some(&token),
        Some(json!({
            "bio": "New bio",
            "profileOptions": { "city": "Vancouver" }
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["bio"], "New bio");
    assert_eq!(body["data"]["profileOptions"]["city"], "Vancouver");
    // nested fields not named in the payload survive
    assert_eq!(body["data"]["profileOptions"]["country"], "Canada");
    assert_eq!(
        body["data"]["profileOptions"]["practicingLanguage"]["language"],
        "Japanese"
    );
    assert_eq!(body["data"]["username"], "alice99");
}

#[tokio::test]
async fn update_rejects_invalid_fields() {
    let app = app();
    let token = register(&app).await;

    let (status, body) = send(
        &app,
        "PUT",
        "/profile",
        Some(&token),
        Some(json!({"profileOptions": {"age": 7}})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["field"], "profileOptions.age");
    assert_eq!(body["errors"][0]["message"], "Age must be between 13 and 120");
}

#[tokio::test]
async fn update_rejects_email_taken_by_other_account() {
    let app = app();
    let token = register(&app).await;

    let mut second = registration_body();
    second["username"] = json!("bob42");
    second["email"] = json!("bob@example.com");
    let (status, _) = send(&app, "POST", "/register", None, Some(second)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        &app,
        "PUT",
        "/profile",
        Some(&token),
        Some(json!({"email": "bob@example.com"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "User with that email already exists.");
}

#[tokio::test]
async fn update_rejects_username_taken_by_other_account() {
    let app = app();
    let token = register(&app).await;

    let mut second = registration_body();
    second["username"] = json!("bob42");
    second["email"] = json!("bob@example.com");
    let (status, _) = send(&app, "POST", "/register", None, Some(second)).await;
    assert_eq!(status, StatusCode::CREATED);

    // Username collides while the email stays untouched
    let (status, body) = send(
        &app,
        "PUT",
        "/profile",
        Some(&token),
        Some(json!({"username": "bob42"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Username is already taken.");
}

#[tokio::test]
async fn malformed_body_still_uses_envelope() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/register",
        None,
        Some(json!({"username": 5})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(!body["message"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn delete_then_fetch_reports_not_found() {
    let app = app();
    let token = register(&app).await;

    let (status, body) = send(&app, "DELETE", "/profile", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User profile deleted successfully.");
    assert!(body.get("data").is_none());

    // Token is still cryptographically valid but the account is gone
    let (status, body) = send(&app, "GET", "/profile", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found.");
}

#[tokio::test]
async fn login_after_delete_is_unauthorized() {
    let app = app();
    let token = register(&app).await;
    send(&app, "DELETE", "/profile", Some(&token), None).await;

    let (status, body) = send(
        &app,
        "POST",
        "/login",
        None,
        Some(json!({"email": "alice@example.com", "password": "secret1"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid email or password.");
}
