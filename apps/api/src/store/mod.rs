//! Document store — the `users/{id}` and `users/{id}/roadmaps/{slug}` documents.
//!
//! Handlers and generators only see `DocumentStore`. `AppState` carries an
//! `Arc<dyn DocumentStore>` chosen at startup: PostgreSQL when `DATABASE_URL` is set,
//! the in-memory store otherwise.
//!
//! Writes are last-write-wins. Nothing here locks, versions or detects conflicts.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::{CareerRecommendationSet, RoadmapDocument, UserProfile};

pub mod memory;
pub mod postgres;

pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Document encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("Document not found: {0}")]
    NotFound(String),
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get_profile(&self, user_id: &str) -> Result<Option<UserProfile>, StoreError>;

    /// Creates or fully replaces the profile document.
    async fn put_profile(&self, profile: &UserProfile) -> Result<(), StoreError>;

    /// Partial update of an existing profile: sets `careerRecommendations`,
    /// flips `hasGeneratedRecommendations` and stamps `lastRecommendationUpdate`
    /// and `updatedAt` with `at`. Fails with `NotFound` if the profile is absent.
    async fn save_recommendations(
        &self,
        user_id: &str,
        recommendations: &CareerRecommendationSet,
        at: DateTime<Utc>,
    ) -> Result<(), StoreError>;

    /// Overwrites whatever is cached at `(user_id, career_slug)`.
    async fn put_roadmap(
        &self,
        user_id: &str,
        career_slug: &str,
        roadmap: &RoadmapDocument,
    ) -> Result<(), StoreError>;

    async fn get_roadmap(
        &self,
        user_id: &str,
        career_slug: &str,
    ) -> Result<Option<RoadmapDocument>, StoreError>;
}

/// Document path, used in log lines and `NotFound` messages.
pub fn profile_path(user_id: &str) -> String {
    format!("users/{user_id}")
}

pub fn roadmap_path(user_id: &str, career_slug: &str) -> String {
    format!("users/{user_id}/roadmaps/{career_slug}")
}
