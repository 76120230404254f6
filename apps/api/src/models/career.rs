use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One AI-recommended career path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerRecommendation {
    pub title: String,
    pub description: String,
    pub reasoning: String,
    /// Usually ten entries; the count is not enforced.
    pub required_skills: Vec<String>,
}

/// The most recent successful recommendation run for a user. Regeneration
/// overwrites it; earlier sets are not kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerRecommendationSet {
    pub careers: Vec<CareerRecommendation>,
    /// Stamped by the server, never taken from the model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
}

/// The `users/{id}/roadmaps/{slug}` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapDocument {
    pub career_title: String,
    /// Markdown, exactly as the model produced it.
    pub roadmap: String,
    pub generated_at: DateTime<Utc>,
}
