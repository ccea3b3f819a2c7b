//! Integration tests for the paper catalog endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, catalog, get, paper, post};
use papercat_common::db::PaperRepository;
use serde_json::json;

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn search_matches_title_case_insensitively() {
    let app = build_test_app(catalog()).await;
    let response = get(&app, "/papers/?search=rats").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!([{"id": 1, "title": "Analgesic Effects in Rats", "authors": "J. Smith, A. Lee"}])
    );
}

#[tokio::test]
async fn search_without_match_returns_empty_array() {
    let app = build_test_app(catalog()).await;
    let response = get(&app, "/papers/?search=xyz").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn search_matches_authors_or_title() {
    let app = build_test_app(catalog()).await;

    // "smith" hits paper 1's and paper 2's authors, never paper 3
    let json = body_json(get(&app, "/papers/?search=SMITH").await).await;
    let ids: Vec<i64> = json.as_array().unwrap().iter().map(|p| p["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2]);

    // "mice" only appears in a title
    let json = body_json(get(&app, "/papers/?search=Mice").await).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["id"], 3);
}

#[tokio::test]
async fn search_is_url_decoded() {
    let app = build_test_app(catalog()).await;
    let json = body_json(get(&app, "/papers/?search=water%20maze").await).await;

    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["id"], 2);
}

#[tokio::test]
async fn search_matches_exact_non_ascii_substrings() {
    let mut papers = catalog();
    papers.push(paper(4, "Étude of Nociception", "Ö. Çelik"));
    let app = build_test_app(papers).await;

    for uri in [
        "/papers/?search=%C3%89tude",
        "/papers/?search=%C3%96.%20%C3%87elik",
        "/papers/?search=NOCICEPTION",
    ] {
        let response = get(&app, uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        assert_eq!(
            body_json(response).await,
            json!([{"id": 4, "title": "Étude of Nociception", "authors": "Ö. Çelik"}]),
            "{uri}"
        );
    }
}

#[tokio::test]
async fn empty_or_absent_search_returns_all_papers_in_id_order() {
    let app = build_test_app(vec![
        paper(5, "Late Entry", "Z. Zed"),
        paper(2, "Early Entry", "A. Aa"),
        paper(9, "Last Entry", "M. Em"),
    ])
    .await;

    for uri in ["/papers/", "/papers/?search=", "/papers"] {
        let response = get(&app, uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");

        let json = body_json(response).await;
        let ids: Vec<i64> = json.as_array().unwrap().iter().map(|p| p["id"].as_i64().unwrap()).collect();
        assert_eq!(ids, vec![2, 5, 9], "{uri}");
    }
}

#[tokio::test]
async fn listing_only_exposes_summary_fields() {
    let app = build_test_app(catalog()).await;
    let json = body_json(get(&app, "/papers/").await).await;

    for entry in json.as_array().unwrap() {
        let mut keys: Vec<&str> = entry.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["authors", "id", "title"]);
    }
}

#[tokio::test]
async fn listing_an_empty_catalog_is_ok() {
    let app = build_test_app(Vec::new()).await;
    let response = get(&app, "/papers/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

// ---------------------------------------------------------------------------
// Detail
// ---------------------------------------------------------------------------

#[tokio::test]
async fn detail_returns_every_field() {
    let app = build_test_app(catalog()).await;
    let response = get(&app, "/papers/1/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({
            "id": 1,
            "title": "Analgesic Effects in Rats",
            "authors": "J. Smith, A. Lee",
            "journal": "Journal of Experimental Neuropharmacology",
            "invivo_model": "formalin pain model",
            "abstract": "Analgesic Effects in Rats was studied across three cohorts.",
            "condition_sets": [
                {"type": "species", "value": "rat"},
                {"type": "age", "value": "8 weeks"}
            ],
            "is_important": false
        })
    );
}

#[tokio::test]
async fn detail_of_missing_paper_is_404() {
    let app = build_test_app(catalog()).await;
    let response = get(&app, "/papers/999/").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({"detail": "Not found."}));
}

#[tokio::test]
async fn detail_with_non_integer_id_is_400() {
    let app = build_test_app(catalog()).await;
    let response = get(&app, "/papers/abc/").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["detail"].is_string());
}

// ---------------------------------------------------------------------------
// Importance toggle
// ---------------------------------------------------------------------------

#[tokio::test]
async fn toggle_flips_and_persists() {
    let app = build_test_app(catalog()).await;

    let response = post(&app, "/papers/1/important/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"is_important": true}));

    let detail = body_json(get(&app, "/papers/1/").await).await;
    assert_eq!(detail["is_important"], true);
}

#[tokio::test]
async fn toggling_twice_restores_original_value() {
    let mut starts_important = paper(4, "Already Flagged", "F. Lag");
    starts_important.is_important = true;
    let app = build_test_app(vec![starts_important]).await;

    let first = body_json(post(&app, "/papers/4/important/").await).await;
    assert_eq!(first, json!({"is_important": false}));

    let second = body_json(post(&app, "/papers/4/important/").await).await;
    assert_eq!(second, json!({"is_important": true}));

    assert!(app.repo.get_by_id(4).await.unwrap().unwrap().is_important);
}

#[tokio::test]
async fn toggle_only_touches_the_target_paper() {
    let app = build_test_app(catalog()).await;
    post(&app, "/papers/2/important/").await;

    let papers = app.repo.list_all(None).await.unwrap();
    let flags: Vec<bool> = papers.iter().map(|p| p.is_important).collect();
    assert_eq!(flags, vec![false, true, false]);
}

#[tokio::test]
async fn toggle_missing_paper_is_404_and_writes_nothing() {
    let app = build_test_app(catalog()).await;
    let before = app.repo.list_all(None).await.unwrap();

    let response = post(&app, "/papers/999/important/").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({"error": "Paper not found."}));

    assert_eq!(app.repo.list_all(None).await.unwrap(), before);
    assert!(app.repo.get_by_id(999).await.unwrap().is_none());
}

#[tokio::test]
async fn toggle_with_non_integer_id_is_400() {
    let app = build_test_app(catalog()).await;
    let response = post(&app, "/papers/one/important/").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn toggle_rejects_get() {
    let app = build_test_app(catalog()).await;
    let response = get(&app, "/papers/1/important/").await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert!(!app.repo.get_by_id(1).await.unwrap().unwrap().is_important);
}

#[tokio::test]
async fn toggle_accepts_path_without_trailing_slash() {
    let app = build_test_app(catalog()).await;
    let response = post(&app, "/papers/3/important").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"is_important": true}));
}
