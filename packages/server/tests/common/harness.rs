//! Router-level test harness.
//!
//! Builds the full Axum app on top of mock transports so tests can exercise
//! the HTTP surface without a network. The mock handles stay accessible for
//! spying on what each channel actually sent.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use server_core::kernel::test_dependencies::{
    MockMailService, MockSmsService, TestDependencies,
};
use server_core::server::app::build_app;

use super::fixtures::seeded_store;

pub struct TestApp {
    router: Router,
    pub sms: Arc<MockSmsService>,
    pub mailer: Arc<MockMailService>,
}

impl TestApp {
    /// App over the seeded store with both channels configured
    pub fn new() -> Self {
        Self::from_dependencies(TestDependencies::new().mock_store(seeded_store()))
    }

    /// App with no SMS transport configured
    pub fn without_sms() -> Self {
        let deps = TestDependencies::new().mock_store(seeded_store());
        let sms = deps.sms.clone();
        let mailer = deps.mailer.clone();
        let router = build_app(Arc::new(deps.into_deps_without_sms()));

        Self {
            router,
            sms,
            mailer,
        }
    }

    /// App whose SMS transport rejects every send
    pub fn with_failing_sms() -> Self {
        Self::from_dependencies(
            TestDependencies::new()
                .mock_store(seeded_store())
                .mock_sms(MockSmsService::failing()),
        )
    }

    /// App whose mail provider rejects every send
    pub fn with_failing_mailer() -> Self {
        Self::from_dependencies(
            TestDependencies::new()
                .mock_store(seeded_store())
                .mock_mailer(MockMailService::failing()),
        )
    }

    /// App over custom dependencies, with the SMS channel configured
    pub fn from_dependencies(deps: TestDependencies) -> Self {
        let sms = deps.sms.clone();
        let mailer = deps.mailer.clone();
        let router = build_app(Arc::new(deps.into_deps()));

        Self {
            router,
            sms,
            mailer,
        }
    }

    /// POST a JSON body, returning the status and parsed response body
    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    /// GET a path, returning the status and parsed response body
    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, json)
    }
}
