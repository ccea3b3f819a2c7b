//! Repository pattern for paper storage
//!
//! Handlers depend on the [`PaperRepository`] trait; [`SeaOrmPaperRepository`]
//! is the implementation backed by a [`DbPool`].

use crate::db::models::*;
use crate::db::{DbPool, TextFilter};
use crate::errors::{AppError, Result};
use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};

/// Rows per multi-row INSERT, kept under SQLite's bound-parameter limit
const UPSERT_CHUNK: usize = 100;

/// Storage contract for paper records
#[async_trait]
pub trait PaperRepository: Send + Sync {
    /// Find paper by ID
    async fn get_by_id(&self, id: i32) -> Result<Option<Paper>>;

    /// List papers ordered by id, optionally narrowed by a text filter
    async fn list_all(&self, filter: Option<&TextFilter>) -> Result<Vec<Paper>>;

    /// Persist every column of an existing paper
    async fn save(&self, paper: Paper) -> Result<Paper>;

    /// Check storage connectivity
    async fn ping(&self) -> Result<()>;
}

/// SeaORM-backed paper repository
#[derive(Clone)]
pub struct SeaOrmPaperRepository {
    pool: DbPool,
}

impl SeaOrmPaperRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> &DatabaseConnection {
        self.pool.conn()
    }

    /// Insert fixture papers with their explicit ids, overwriting existing rows.
    ///
    /// All chunks share one transaction: either every paper is written or none is.
    pub async fn upsert_many(&self, papers: Vec<Paper>) -> Result<u64> {
        let txn = self.conn().begin().await?;
        let mut written = 0;

        for chunk in papers.chunks(UPSERT_CHUNK) {
            let models = chunk
                .iter()
                .cloned()
                .map(|paper| PaperActiveModel::from(paper).reset_all());

            let on_conflict = OnConflict::column(PaperColumn::Id)
                .update_columns([
                    PaperColumn::Title,
                    PaperColumn::Authors,
                    PaperColumn::Journal,
                    PaperColumn::InvivoModel,
                    PaperColumn::AbstractText,
                    PaperColumn::ConditionSets,
                    PaperColumn::IsImportant,
                ])
                .to_owned();

            let result = PaperEntity::insert_many(models)
                .on_conflict(on_conflict)
                .exec_without_returning(&txn)
                .await;

            match result {
                Ok(rows) => written += rows,
                Err(e) => {
                    txn.rollback().await?;
                    return Err(e.into());
                }
            }
        }

        txn.commit().await?;
        Ok(written)
    }
}

#[async_trait]
impl PaperRepository for SeaOrmPaperRepository {
    async fn get_by_id(&self, id: i32) -> Result<Option<Paper>> {
        PaperEntity::find_by_id(id)
            .one(self.conn())
            .await
            .map_err(Into::into)
    }

    async fn list_all(&self, filter: Option<&TextFilter>) -> Result<Vec<Paper>> {
        let mut query = PaperEntity::find();

        if let Some(filter) = filter {
            query = query.filter(filter.condition());
        }

        query
            .order_by_asc(PaperColumn::Id)
            .all(self.conn())
            .await
            .map_err(Into::into)
    }

    async fn save(&self, paper: Paper) -> Result<Paper> {
        let id = paper.id;

        PaperActiveModel::from(paper)
            .reset_all()
            .update(self.conn())
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => AppError::PaperNotFound { id },
                other => other.into(),
            })
    }

    async fn ping(&self) -> Result<()> {
        self.pool.ping().await
    }
}
