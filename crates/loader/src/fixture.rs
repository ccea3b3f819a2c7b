//! Django `loaddata` fixture parsing and validation
//!
//! A fixture file is a JSON array of `{"model": "papers.paper", "pk": N, "fields": {...}}`.

use crate::errors::{FixtureError, Result};
use papercat_common::db::models::{ConditionSet, ConditionSets, Paper};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use validator::Validate;

/// Model label the catalog accepts
pub const PAPER_MODEL: &str = "papers.paper";

#[derive(Debug, Deserialize)]
pub struct FixtureEntry {
    pub model: String,
    pub pk: i32,
    pub fields: PaperFields,
}

#[derive(Debug, Deserialize, Validate)]
pub struct PaperFields {
    #[validate(length(min = 1, max = 255))]
    pub title: String,

    #[validate(length(min = 1, max = 255))]
    pub authors: String,

    #[validate(length(min = 1, max = 255))]
    pub journal: String,

    #[validate(length(min = 1, max = 255))]
    pub invivo_model: String,

    #[serde(rename = "abstract")]
    #[validate(length(min = 1))]
    pub abstract_text: String,

    #[serde(default)]
    #[validate(nested)]
    pub condition_sets: Vec<ConditionInput>,

    #[serde(default)]
    pub is_important: bool,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ConditionInput {
    #[serde(rename = "type")]
    #[validate(length(min = 1))]
    pub kind: String,

    pub value: String,
}

impl FixtureEntry {
    /// Validate the entry and turn it into a storable paper
    pub fn into_paper(self, path: &Path) -> Result<Paper> {
        if self.model != PAPER_MODEL {
            return Err(FixtureError::UnknownModel {
                path: path.to_path_buf(),
                pk: self.pk,
                model: self.model,
            });
        }

        self.fields.validate().map_err(|source| FixtureError::Invalid {
            path: path.to_path_buf(),
            pk: self.pk,
            source,
        })?;

        let fields = self.fields;
        let condition_sets = fields
            .condition_sets
            .into_iter()
            .map(|c| ConditionSet { kind: c.kind, value: c.value })
            .collect::<Vec<_>>();

        Ok(Paper {
            id: self.pk,
            title: fields.title,
            authors: fields.authors,
            journal: fields.journal,
            invivo_model: fields.invivo_model,
            abstract_text: fields.abstract_text,
            condition_sets: ConditionSets(condition_sets),
            is_important: fields.is_important,
        })
    }
}

/// Parse and validate one fixture document
pub fn parse_fixture(path: &Path, contents: &str) -> Result<Vec<Paper>> {
    let entries: Vec<FixtureEntry> =
        serde_json::from_str(contents).map_err(|source| FixtureError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    entries.into_iter().map(|entry| entry.into_paper(path)).collect()
}

/// Read every fixture file; a later record with the same pk replaces an earlier one.
///
/// Nothing is returned unless every file parses and validates.
pub fn read_fixtures(paths: &[PathBuf]) -> Result<Vec<Paper>> {
    let mut papers = BTreeMap::new();

    for path in paths {
        let contents = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.clone(),
            source,
        })?;

        let parsed = parse_fixture(path, &contents)?;
        tracing::info!(path = %path.display(), records = parsed.len(), "Fixture parsed");

        for paper in parsed {
            papers.insert(paper.id, paper);
        }
    }

    Ok(papers.into_values().collect())
}
