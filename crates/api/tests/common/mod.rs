//! Shared helpers for HTTP-level integration tests.
//!
//! Builds the real application router (same middleware stack as `main.rs`)
//! over a per-test database, and provides request/response conveniences for
//! driving it with `tower::ServiceExt::oneshot`.

use axum::body::Body;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use evermore_api::auth::jwt::JwtConfig;
use evermore_api::auth::password::hash_password;
use evermore_api::config::ServerConfig;
use evermore_api::router::build_app_router;
use evermore_api::state::AppState;
use evermore_db::models::admin_user::{AdminUser, CreateAdminUser};
use evermore_db::repositories::AdminUserRepo;

/// Fixed signing secret so tests can craft tokens deterministically.
pub const TEST_JWT_SECRET: &str = "integration-test-secret-with-plenty-of-length";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        cookie_secure: false,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
            refresh_threshold_secs: 120,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool. Mirrors the router construction in `main.rs`.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState::new(pool, config.clone());
    build_app_router(state, &config)
}

/// Seed an active admin user directly in the database and return the row
/// plus the plaintext password used.
pub async fn create_admin(pool: &PgPool, username: &str) -> (AdminUser, String) {
    let password = "test_password_123!";
    let hashed = hash_password(password).expect("hashing should succeed");
    let input = CreateAdminUser {
        username: username.to_string(),
        password_hash: hashed,
        role: "admin".to_string(),
    };
    let user = AdminUserRepo::create(pool, &input)
        .await
        .expect("admin creation should succeed");
    (user, password.to_string())
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    request(app, Method::GET, uri, None, None).await
}

/// Send a GET request with a `Cookie` header.
pub async fn get_with_cookies(app: Router, uri: &str, cookies: &str) -> Response<Body> {
    request(app, Method::GET, uri, None, Some(cookies)).await
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    request(app, Method::POST, uri, Some(body), None).await
}

/// Send a POST request with a JSON body and a `Cookie` header.
pub async fn post_json_with_cookies(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    cookies: &str,
) -> Response<Body> {
    request(app, Method::POST, uri, Some(body), Some(cookies)).await
}

/// Send a bodyless POST request with a `Cookie` header.
pub async fn post_with_cookies(app: Router, uri: &str, cookies: &str) -> Response<Body> {
    request(app, Method::POST, uri, None, Some(cookies)).await
}

/// Send a PUT request with a JSON body and a `Cookie` header.
pub async fn put_json_with_cookies(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    cookies: &str,
) -> Response<Body> {
    request(app, Method::PUT, uri, Some(body), Some(cookies)).await
}

/// Send a PATCH request with a JSON body and a `Cookie` header.
pub async fn patch_json_with_cookies(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    cookies: &str,
) -> Response<Body> {
    request(app, Method::PATCH, uri, Some(body), Some(cookies)).await
}

/// Send a DELETE request with a `Cookie` header.
pub async fn delete_with_cookies(app: Router, uri: &str, cookies: &str) -> Response<Body> {
    request(app, Method::DELETE, uri, None, Some(cookies)).await
}

async fn request(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
    cookies: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookies) = cookies {
        builder = builder.header(COOKIE, cookies);
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .expect("request should build"),
        None => builder.body(Body::empty()).expect("request should build"),
    };
    app.oneshot(request).await.expect("request should not fail")
}

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// All `Set-Cookie` header values of a response.
pub fn set_cookie_headers(response: &Response<Body>) -> Vec<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .map(|v| v.to_str().expect("header should be ASCII").to_string())
        .collect()
}

/// Build a `Cookie` request header from a response's `Set-Cookie` headers
/// (drops attributes, keeps `name=value` pairs).
pub fn cookies_from_response(response: &Response<Body>) -> String {
    set_cookie_headers(response)
        .iter()
        .filter_map(|h| h.split(';').next())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Log in via the API, asserting success, and return the response cookies
/// as a `Cookie` header value.
pub async fn login_cookies(app: Router, username: &str, password: &str) -> String {
    let body = serde_json::json!({ "username": username, "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    cookies_from_response(&response)
}
