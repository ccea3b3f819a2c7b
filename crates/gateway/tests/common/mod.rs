#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, Response};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use papercat_common::config::DatabaseConfig;
use papercat_common::db::models::{ConditionSet, ConditionSets, Paper};
use papercat_common::db::{DbPool, PaperRepository, SeaOrmPaperRepository};
use papercat_gateway::{create_router, AppState};

/// Router over a fresh in-memory database, plus the repository for direct checks
pub struct TestApp {
    pub router: Router,
    pub repo: SeaOrmPaperRepository,
}

/// Build the full application router over in-memory SQLite seeded with `papers`.
pub async fn build_test_app(papers: Vec<Paper>) -> TestApp {
    let pool = DbPool::new(&DatabaseConfig::in_memory()).await.unwrap();
    let repo = SeaOrmPaperRepository::new(pool);
    repo.upsert_many(papers).await.unwrap();

    TestApp {
        router: router_over(Arc::new(repo.clone())),
        repo,
    }
}

/// Full application router over any repository implementation.
pub fn router_over(papers: Arc<dyn PaperRepository>) -> Router {
    create_router(AppState::new(papers))
}

pub fn paper(id: i32, title: &str, authors: &str) -> Paper {
    Paper {
        id,
        title: title.to_string(),
        authors: authors.to_string(),
        journal: "Journal of Experimental Neuropharmacology".to_string(),
        invivo_model: "formalin pain model".to_string(),
        abstract_text: format!("{} was studied across three cohorts.", title),
        condition_sets: ConditionSets(vec![
            ConditionSet { kind: "species".to_string(), value: "rat".to_string() },
            ConditionSet { kind: "age".to_string(), value: "8 weeks".to_string() },
        ]),
        is_important: false,
    }
}

/// The three papers most API tests run against.
pub fn catalog() -> Vec<Paper> {
    vec![
        paper(1, "Analgesic Effects in Rats", "J. Smith, A. Lee"),
        paper(2, "Spatial Memory in the Morris Water Maze", "K. Okafor, J. Smithers"),
        paper(3, "Tumour Regression in Xenograft Mice", "R. Haddad"),
    ]
}

pub async fn send(app: &TestApp, method: Method, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    app.router.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &TestApp, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri).await
}

pub async fn post(app: &TestApp, uri: &str) -> Response<Body> {
    send(app, Method::POST, uri).await
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
