use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::models::{CareerRecommendationSet, RoadmapDocument, UserProfile};
use crate::store::{profile_path, DocumentStore, StoreError};

/// Process-local store for demo mode and tests. Contents die with the process.
#[derive(Default)]
pub struct MemoryDocumentStore {
    profiles: RwLock<HashMap<String, UserProfile>>,
    roadmaps: RwLock<HashMap<(String, String), RoadmapDocument>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn get_profile(&self, user_id: &str) -> Result<Option<UserProfile>, StoreError> {
        Ok(self.profiles.read().await.get(user_id).cloned())
    }

    async fn put_profile(&self, profile: &UserProfile) -> Result<(), StoreError> {
        self.profiles
            .write()
            .await
            .insert(profile.id.clone(), profile.clone());
        Ok(())
    }

    async fn save_recommendations(
        &self,
        user_id: &str,
        recommendations: &CareerRecommendationSet,
        at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        let mut profiles = self.profiles.write().await;
        let profile = profiles
            .get_mut(user_id)
            .ok_or_else(|| StoreError::NotFound(profile_path(user_id)))?;

        profile.career_recommendations = Some(recommendations.clone());
        profile.has_generated_recommendations = true;
        profile.last_recommendation_update = Some(at);
        profile.updated_at = Some(at);
        Ok(())
    }

    async fn put_roadmap(
        &self,
        user_id: &str,
        career_slug: &str,
        roadmap: &RoadmapDocument,
    ) -> Result<(), StoreError> {
        self.roadmaps.write().await.insert(
            (user_id.to_string(), career_slug.to_string()),
            roadmap.clone(),
        );
        Ok(())
    }

    async fn get_roadmap(
        &self,
        user_id: &str,
        career_slug: &str,
    ) -> Result<Option<RoadmapDocument>, StoreError> {
        Ok(self
            .roadmaps
            .read()
            .await
            .get(&(user_id.to_string(), career_slug.to_string()))
            .cloned())
    }
}

#[cfg(test)]
impl MemoryDocumentStore {
    pub async fn roadmap_count(&self) -> usize {
        self.roadmaps.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CareerRecommendation;

    fn sample_set() -> CareerRecommendationSet {
        CareerRecommendationSet {
            careers: vec![CareerRecommendation {
                title: "Data Scientist".to_string(),
                description: "Works with data.".to_string(),
                reasoning: "You like statistics.".to_string(),
                required_skills: vec!["Python".to_string()],
            }],
            generated_at: None,
        }
    }

    #[tokio::test]
    async fn test_save_recommendations_requires_profile() {
        let store = MemoryDocumentStore::new();
        let err = store
            .save_recommendations("ghost", &sample_set(), Utc::now())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(path) if path == "users/ghost"));
    }

    #[tokio::test]
    async fn test_save_recommendations_updates_flags() {
        let store = MemoryDocumentStore::new();
        store.put_profile(&UserProfile::new("u1")).await.unwrap();

        let at = Utc::now();
        store
            .save_recommendations("u1", &sample_set(), at)
            .await
            .unwrap();

        let profile = store.get_profile("u1").await.unwrap().unwrap();
        assert!(profile.has_generated_recommendations);
        assert_eq!(profile.career_recommendations, Some(sample_set()));
        assert_eq!(profile.last_recommendation_update, Some(at));
    }

    #[tokio::test]
    async fn test_put_roadmap_overwrites_same_key() {
        let store = MemoryDocumentStore::new();
        for text in ["first", "second"] {
            let doc = RoadmapDocument {
                career_title: "Designer".to_string(),
                roadmap: text.to_string(),
                generated_at: Utc::now(),
            };
            store.put_roadmap("u1", "designer", &doc).await.unwrap();
        }

        assert_eq!(store.roadmap_count().await, 1);
        let cached = store.get_roadmap("u1", "designer").await.unwrap().unwrap();
        assert_eq!(cached.roadmap, "second");
        assert!(store.get_roadmap("u2", "designer").await.unwrap().is_none());
    }
}
