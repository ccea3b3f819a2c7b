//! Paper entity

use sea_orm::entity::prelude::*;
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "papers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub title: String,

    /// Comma-separated author names
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub authors: String,

    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub journal: String,

    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub invivo_model: String,

    #[sea_orm(column_name = "abstract", column_type = "Text")]
    #[serde(rename = "abstract")]
    pub abstract_text: String,

    /// Experimental conditions, stored as a JSON array
    #[sea_orm(column_type = "Json")]
    #[serde(default)]
    pub condition_sets: ConditionSets,

    #[serde(default)]
    pub is_important: bool,
}

/// A single `{type, value}` experimental-condition descriptor
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionSet {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

/// Ordered list of conditions attached to a paper
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct ConditionSets(pub Vec<ConditionSet>);

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
