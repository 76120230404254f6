use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::career::CareerRecommendationSet;

/// Starting balances for a profile that has never been written.
pub const DEFAULT_LEVEL: u32 = 1;
pub const DEFAULT_SKILL_COINS: u32 = 100;

/// The `users/{id}` document.
///
/// Stored and served in camelCase. Every field other than `id` tolerates being
/// absent so documents written by older clients still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    #[serde(default)]
    pub interests: String,
    #[serde(default)]
    pub academics: String,
    /// Insertion order is kept for display; matching ignores it.
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub career_recommendations: Option<CareerRecommendationSet>,
    #[serde(default)]
    pub has_generated_recommendations: bool,
    #[serde(default)]
    pub onboarding_completed: bool,

    #[serde(default)]
    pub xp: u32,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default = "default_skill_coins")]
    pub skill_coins: u32,
    #[serde(default)]
    pub streak: u32,
    #[serde(default)]
    pub achievements: Vec<String>,

    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_recommendation_update: Option<DateTime<Utc>>,
}

fn default_level() -> u32 {
    DEFAULT_LEVEL
}

fn default_skill_coins() -> u32 {
    DEFAULT_SKILL_COINS
}

impl UserProfile {
    /// A blank profile with the same defaults a missing document would load with.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            interests: String::new(),
            academics: String::new(),
            skills: Vec::new(),
            career_recommendations: None,
            has_generated_recommendations: false,
            onboarding_completed: false,
            xp: 0,
            level: DEFAULT_LEVEL,
            skill_coins: DEFAULT_SKILL_COINS,
            streak: 0,
            achievements: Vec::new(),
            created_at: None,
            updated_at: None,
            last_recommendation_update: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_document_loads_with_defaults() {
        let profile: UserProfile = serde_json::from_value(serde_json::json!({
            "id": "u1",
            "interests": "AI",
            "skills": ["Python"]
        }))
        .unwrap();

        assert_eq!(profile.level, 1);
        assert_eq!(profile.skill_coins, 100);
        assert_eq!(profile.xp, 0);
        assert!(profile.academics.is_empty());
        assert!(!profile.onboarding_completed);
        assert!(profile.career_recommendations.is_none());
    }

    #[test]
    fn test_serializes_camel_case() {
        let mut profile = UserProfile::new("u1");
        profile.onboarding_completed = true;
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["onboardingCompleted"], true);
        assert_eq!(value["skillCoins"], 100);
        assert!(value.get("careerRecommendations").is_none());
    }
}
