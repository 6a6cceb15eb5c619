//! Entity store abstraction
//!
//! The quiz engine never talks to the database directly. It consumes
//! hadiths through [`HadithStore`], which hands back fully materialized
//! [`ResolvedHadith`] values with both attribute lists already loaded.

use crate::db::models::{Companion, Source};
use crate::errors::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A hadith together with its resolved companion and source lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedHadith {
    pub id: i32,
    pub text: String,
    /// Always present, possibly empty
    pub companions: Vec<Companion>,
    /// Always present, possibly empty
    pub sources: Vec<Source>,
}

impl ResolvedHadith {
    pub fn companion_ids(&self) -> impl Iterator<Item = i32> + '_ {
        self.companions.iter().map(|c| c.id)
    }

    pub fn source_ids(&self) -> impl Iterator<Item = i32> + '_ {
        self.sources.iter().map(|s| s.id)
    }
}

/// Input for creating a hadith
#[derive(Debug, Clone, Default)]
pub struct NewHadith {
    pub text: String,
    pub companion_ids: Vec<i32>,
    pub source_ids: Vec<i32>,
}

/// Record store for hadiths and their two attribute vocabularies
#[async_trait]
pub trait HadithStore: Send + Sync {
    /// All hadiths with attributes resolved, ordered by id
    async fn list_hadiths(&self) -> Result<Vec<ResolvedHadith>>;

    /// One hadith with attributes resolved
    async fn find_hadith(&self, id: i32) -> Result<Option<ResolvedHadith>>;

    /// Insert a hadith and link it to the given attributes.
    /// Attribute ids that do not exist are ignored.
    async fn create_hadith(&self, hadith: NewHadith) -> Result<ResolvedHadith>;

    async fn list_companions(&self) -> Result<Vec<Companion>>;

    async fn find_companions(&self, ids: &[i32]) -> Result<Vec<Companion>>;

    /// Fails with `Duplicate` when the name is taken
    async fn create_companion(&self, name: String) -> Result<Companion>;

    async fn list_sources(&self) -> Result<Vec<Source>>;

    async fn find_sources(&self, ids: &[i32]) -> Result<Vec<Source>>;

    /// Fails with `Duplicate` when the name is taken
    async fn create_source(&self, name: String) -> Result<Source>;
}
