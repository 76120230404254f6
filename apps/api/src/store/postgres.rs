use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use sqlx::PgPool;
use tracing::debug;

use crate::models::{CareerRecommendationSet, RoadmapDocument, UserProfile};
use crate::store::{profile_path, roadmap_path, DocumentStore, StoreError};

/// Documents as JSONB rows: `users(id, doc)` and `roadmaps(user_id, career_slug, doc)`.
#[derive(Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn get_profile(&self, user_id: &str) -> Result<Option<UserProfile>, StoreError> {
        let doc: Option<Value> = sqlx::query_scalar("SELECT doc FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(doc.map(serde_json::from_value).transpose()?)
    }

    async fn put_profile(&self, profile: &UserProfile) -> Result<(), StoreError> {
        let doc = serde_json::to_value(profile)?;

        sqlx::query(
            r#"
            INSERT INTO users (id, doc, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (id) DO UPDATE SET doc = EXCLUDED.doc, updated_at = NOW()
            "#,
        )
        .bind(&profile.id)
        .bind(&doc)
        .execute(&self.pool)
        .await?;

        debug!("Wrote {}", profile_path(&profile.id));
        Ok(())
    }

    async fn save_recommendations(
        &self,
        user_id: &str,
        recommendations: &CareerRecommendationSet,
        at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        // Merge into the existing document; other profile fields stay untouched.
        let patch = json!({
            "careerRecommendations": recommendations,
            "hasGeneratedRecommendations": true,
            "lastRecommendationUpdate": at,
            "updatedAt": at,
        });

        let result = sqlx::query("UPDATE users SET doc = doc || $2, updated_at = NOW() WHERE id = $1")
            .bind(user_id)
            .bind(&patch)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(profile_path(user_id)));
        }
        Ok(())
    }

    async fn put_roadmap(
        &self,
        user_id: &str,
        career_slug: &str,
        roadmap: &RoadmapDocument,
    ) -> Result<(), StoreError> {
        let doc = serde_json::to_value(roadmap)?;

        sqlx::query(
            r#"
            INSERT INTO roadmaps (user_id, career_slug, doc, updated_at)
            VALUES ($1, $2, $3, NOW())
            ON CONFLICT (user_id, career_slug)
            DO UPDATE SET doc = EXCLUDED.doc, updated_at = NOW()
            "#,
        )
        .bind(user_id)
        .bind(career_slug)
        .bind(&doc)
        .execute(&self.pool)
        .await?;

        debug!("Wrote {}", roadmap_path(user_id, career_slug));
        Ok(())
    }

    async fn get_roadmap(
        &self,
        user_id: &str,
        career_slug: &str,
    ) -> Result<Option<RoadmapDocument>, StoreError> {
        let doc: Option<Value> = sqlx::query_scalar(
            "SELECT doc FROM roadmaps WHERE user_id = $1 AND career_slug = $2",
        )
        .bind(user_id)
        .bind(career_slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(doc.map(serde_json::from_value).transpose()?)
    }
}
