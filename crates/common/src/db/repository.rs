//! Repository pattern for database operations
//!
//! Provides a clean interface for all data access operations
//! with proper error handling and transaction support.

use crate::db::models::*;
use crate::db::DbPool;
use crate::errors::{AppError, Result};
use crate::store::{HadithStore, NewHadith, ResolvedHadith};
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, LoaderTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

/// Repository for data access operations
#[derive(Clone)]
pub struct Repository {
    pool: DbPool,
}

impl Repository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get the read connection
    fn read_conn(&self) -> &DatabaseConnection {
        self.pool.read()
    }

    /// Get the write connection
    fn write_conn(&self) -> &DatabaseConnection {
        self.pool.write()
    }

    // ========================================================================
    // Association loading
    // ========================================================================

    /// Attach companions and sources to each hadith, preserving input order
    async fn resolve<C: ConnectionTrait>(
        conn: &C,
        hadiths: Vec<Hadith>,
    ) -> Result<Vec<ResolvedHadith>> {
        if hadiths.is_empty() {
            return Ok(Vec::new());
        }

        let companions = hadiths
            .load_many_to_many(CompanionEntity, HadithCompanionEntity, conn)
            .await?;
        let sources = hadiths
            .load_many_to_many(SourceEntity, HadithSourceEntity, conn)
            .await?;

        let resolved = hadiths
            .into_iter()
            .zip(companions)
            .zip(sources)
            .map(|((hadith, mut companions), mut sources)| {
                companions.sort_by_key(|c| c.id);
                sources.sort_by_key(|s| s.id);
                ResolvedHadith {
                    id: hadith.id,
                    text: hadith.text,
                    companions,
                    sources,
                }
            })
            .collect();

        Ok(resolved)
    }
}

#[async_trait]
impl HadithStore for Repository {
    // ========================================================================
    // Hadith Operations
    // ========================================================================

    async fn list_hadiths(&self) -> Result<Vec<ResolvedHadith>> {
        let hadiths = HadithEntity::find()
            .order_by_asc(HadithColumn::Id)
            .all(self.read_conn())
            .await?;

        Self::resolve(self.read_conn(), hadiths).await
    }

    async fn find_hadith(&self, id: i32) -> Result<Option<ResolvedHadith>> {
        let Some(hadith) = HadithEntity::find_by_id(id).one(self.read_conn()).await? else {
            return Ok(None);
        };

        Ok(Self::resolve(self.read_conn(), vec![hadith]).await?.pop())
    }

    async fn create_hadith(&self, new: NewHadith) -> Result<ResolvedHadith> {
        // Unknown attribute ids drop out here
        let companions = self.find_companions(&new.companion_ids).await?;
        let sources = self.find_sources(&new.source_ids).await?;

        let txn = self.write_conn().begin().await?;

        let hadith = HadithActiveModel {
            id: NotSet,
            text: Set(new.text),
        }
        .insert(&txn)
        .await?;

        if !companions.is_empty() {
            HadithCompanionEntity::insert_many(companions.iter().map(|c| {
                HadithCompanionActiveModel {
                    hadith_id: Set(hadith.id),
                    companion_id: Set(c.id),
                }
            }))
            .exec_without_returning(&txn)
            .await?;
        }

        if !sources.is_empty() {
            HadithSourceEntity::insert_many(sources.iter().map(|s| {
                HadithSourceActiveModel {
                    hadith_id: Set(hadith.id),
                    source_id: Set(s.id),
                }
            }))
            .exec_without_returning(&txn)
            .await?;
        }

        let resolved = Self::resolve(&txn, vec![hadith])
            .await?
            .pop()
            .ok_or_else(|| AppError::Internal {
                message: "Created hadith vanished before commit".to_string(),
            })?;

        txn.commit().await?;

        tracing::debug!(
            hadith_id = resolved.id,
            companions = resolved.companions.len(),
            sources = resolved.sources.len(),
            "Hadith row inserted"
        );

        Ok(resolved)
    }

    // ========================================================================
    // Companion Operations
    // ========================================================================

    async fn list_companions(&self) -> Result<Vec<Companion>> {
        CompanionEntity::find()
            .order_by_asc(CompanionColumn::Id)
            .all(self.read_conn())
            .await
            .map_err(Into::into)
    }

    async fn find_companions(&self, ids: &[i32]) -> Result<Vec<Companion>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        CompanionEntity::find()
            .filter(CompanionColumn::Id.is_in(ids.iter().copied()))
            .order_by_asc(CompanionColumn::Id)
            .all(self.read_conn())
            .await
            .map_err(Into::into)
    }

    async fn create_companion(&self, name: String) -> Result<Companion> {
        CompanionActiveModel {
            id: NotSet,
            name: Set(name),
        }
        .insert(self.write_conn())
        .await
        .map_err(|e| AppError::from_insert(e, "Companion"))
    }

    // ========================================================================
    // Source Operations
    // ========================================================================

    async fn list_sources(&self) -> Result<Vec<Source>> {
        SourceEntity::find()
            .order_by_asc(SourceColumn::Id)
            .all(self.read_conn())
            .await
            .map_err(Into::into)
    }

    async fn find_sources(&self, ids: &[i32]) -> Result<Vec<Source>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        SourceEntity::find()
            .filter(SourceColumn::Id.is_in(ids.iter().copied()))
            .order_by_asc(SourceColumn::Id)
            .all(self.read_conn())
            .await
            .map_err(Into::into)
    }

    async fn create_source(&self, name: String) -> Result<Source> {
        SourceActiveModel {
            id: NotSet,
            name: Set(name),
        }
        .insert(self.write_conn())
        .await
        .map_err(|e| AppError::from_insert(e, "Source"))
    }
}
