//! Hadith Quiz Common Library
//!
//! Shared code for the hadith quiz services including:
//! - Database models and repository patterns
//! - The entity store abstraction consumed by the quiz engine
//! - Quiz generation, answer verification and answer reveal
//! - Error types and handling
//! - Configuration management
//! - Metrics and observability

pub mod config;
pub mod db;
pub mod errors;
pub mod metrics;
pub mod quiz;
pub mod store;

// Re-export commonly used types
pub use config::AppConfig;
pub use db::{DbPool, Repository};
pub use errors::{AppError, Result};
pub use quiz::{QuestionKind, QuizQuestion, QuizService};
pub use store::{HadithStore, NewHadith, ResolvedHadith};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
