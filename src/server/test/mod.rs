//! Router-level test helpers.

use axum::{
    body::Body,
    http::{header, HeaderMap, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;

use crate::server::{
    config::CookieConfig,
    error::AppError,
    middleware::session::ACCESS_TOKEN_COOKIE,
    model::user::User,
    router,
    service::auth::token::TokenService,
    state::AppState,
};


pub(crate) const TEST_SECRET: &str = "test-secret";

/// Application state over a test database, with development cookie attributes.
pub(crate) fn test_state(db: DatabaseConnection) -> AppState {
    AppState::new(
        db,
        TokenService::new(TEST_SECRET),
        CookieConfig::new(false),
        chrono_tz::Asia::Dhaka,
    )
}

pub(crate) fn test_router(db: DatabaseConnection) -> Router {
    router::router(test_state(db))
}

/// Cookie header value carrying a freshly issued token for `user`.
pub(crate) fn auth_cookie_for(user: entity::user::Model) -> Result<String, AppError> {
    let user = User::from_entity(user)?;
    let token = TokenService::new(TEST_SECRET).issue(&user)?;

    Ok(format!("{}={}", ACCESS_TOKEN_COOKIE, token))
}

/// Builds a request with an optional cookie and JSON body.
pub(crate) fn request(method: &str, uri: &str, cookie: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub(crate) struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    /// The `name=value` pair of the first Set-Cookie header, ready to send back.
    pub fn cookie(&self) -> Option<String> {
        self.headers
            .get(header::SET_COOKIE)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(';').next())
            .map(str::to_string)
    }

    pub fn set_cookie(&self) -> Option<&str> {
        self.headers
            .get(header::SET_COOKIE)
            .and_then(|value| value.to_str().ok())
    }
}

/// Sends one request through the router and decodes the JSON body.
pub(crate) async fn send(router: &Router, request: Request<Body>) -> TestResponse {
    let response = router.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    TestResponse {
        status,
        headers,
        body,
    }
}
