//! Paper catalog handlers
//!
//! Each handler parses its own inputs and performs its own existence check,
//! so every error body is produced here rather than by framework defaults.

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::{Deserialize, Serialize};

use crate::AppState;
use papercat_common::{
    db::{
        models::{ConditionSets, Paper},
        TextFilter,
    },
    errors::{AppError, Result},
    metrics,
};

/// Query parameters for the paper listing
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
}

/// Summary projection returned by the listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperSummary {
    pub id: i32,
    pub title: String,
    pub authors: String,
}

/// Full projection returned by the detail endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperDetail {
    pub id: i32,
    pub title: String,
    pub authors: String,
    pub journal: String,
    pub invivo_model: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub condition_sets: ConditionSets,
    pub is_important: bool,
}

/// Response after flipping the importance flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportanceResponse {
    pub is_important: bool,
}

impl From<Paper> for PaperSummary {
    fn from(paper: Paper) -> Self {
        Self {
            id: paper.id,
            title: paper.title,
            authors: paper.authors,
        }
    }
}

impl From<Paper> for PaperDetail {
    fn from(paper: Paper) -> Self {
        Self {
            id: paper.id,
            title: paper.title,
            authors: paper.authors,
            journal: paper.journal,
            invivo_model: paper.invivo_model,
            abstract_text: paper.abstract_text,
            condition_sets: paper.condition_sets,
            is_important: paper.is_important,
        }
    }
}

/// List papers, optionally filtered by `search` over title and authors
pub async fn list_papers(
    State(state): State<AppState>,
    params: std::result::Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<PaperSummary>>> {
    let Query(params) = params?;
    let filter = TextFilter::from_query(params.search);

    let papers = state.papers.list_all(filter.as_ref()).await?;
    metrics::record_listing(filter.is_some(), papers.len());

    tracing::debug!(
        search = filter.as_ref().map(TextFilter::needle),
        result_count = papers.len(),
        "Papers listed"
    );

    Ok(Json(papers.into_iter().map(PaperSummary::from).collect()))
}

/// Get a paper by ID
pub async fn get_paper(
    State(state): State<AppState>,
    path: std::result::Result<Path<i32>, PathRejection>,
) -> Result<Json<PaperDetail>> {
    let Path(paper_id) = path?;

    let paper = state
        .papers
        .get_by_id(paper_id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(PaperDetail::from(paper)))
}

/// Flip the importance flag of a paper and persist it
pub async fn toggle_important(
    State(state): State<AppState>,
    path: std::result::Result<Path<i32>, PathRejection>,
) -> Result<Json<ImportanceResponse>> {
    let Path(paper_id) = path?;

    let mut paper = state
        .papers
        .get_by_id(paper_id)
        .await?
        .ok_or(AppError::PaperNotFound { id: paper_id })?;

    paper.is_important = !paper.is_important;
    let paper = state.papers.save(paper).await?;

    metrics::record_importance_toggle(paper.is_important);
    tracing::info!(
        paper_id = paper.id,
        is_important = paper.is_important,
        "Paper importance toggled"
    );

    Ok(Json(ImportanceResponse {
        is_important: paper.is_important,
    }))
}
