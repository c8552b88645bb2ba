#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use skripsi::router::init_router;
use skripsi::skripsi_auth::TokenService;
use skripsi::skripsi_config::CorsConfig;
use skripsi::skripsi_core::Role;
use skripsi::skripsi_models::NewUser;
use skripsi::state::AppState;
use skripsi::store::{MemoryStore, UserStore};
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_SECRET: &str = "integration-test-secret-at-least-32-chars";
pub const TEST_PASSWORD: &str = "testpass123";

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
    pub tokens: Arc<TokenService>,
}

pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub token: String,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// `Value::Null` when the body is empty.
    pub body: Value,
}

pub fn setup_test_app() -> TestApp {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(
        store.clone(),
        TokenService::new(Some(TEST_SECRET), 3600),
        CorsConfig::default(),
        Duration::from_secs(30),
    );

    TestApp {
        router: init_router(state.clone()),
        store,
        tokens: state.tokens,
    }
}

pub fn generate_unique_email() -> String {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    format!(
        "user{}-{}@test.com",
        COUNTER.fetch_add(1, Ordering::SeqCst),
        Uuid::new_v4().simple()
    )
}

impl TestApp {
    /// Inserts a user straight into the store and signs a token for them.
    pub async fn create_user(&self, role: Role) -> TestUser {
        let email = generate_unique_email();
        let id = self
            .store
            .create_user(
                NewUser {
                    nama_lengkap: format!("Test {}", role),
                    username: None,
                    email: email.clone(),
                    password: TEST_PASSWORD.to_string(),
                },
                role,
            )
            .await
            .unwrap();

        TestUser {
            id,
            email,
            password: TEST_PASSWORD.to_string(),
            role,
            token: self.tokens.issue(id, role).unwrap(),
        }
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
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

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        self.send(json_request(method, uri, token, body)).await
    }
}

pub fn json_request(
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}
