//! Recommendation Generator.
//!
//! Flow: validate → load profile → build prompt → one LLM call →
//!       parse JSON → validate shape → write to profile → return.
//!
//! No retries and no partial recovery. Every failure after validation surfaces to
//! the caller as INTERNAL; the distinct causes only show up in the logs.

use chrono::Utc;
use serde::Deserialize;
use serde_json::Value;
use tracing::{error, info, warn};

use crate::careers::prompts::{RECOMMENDATION_PROMPT_TEMPLATE, RECOMMENDATION_SYSTEM};
use crate::careers::require_field;
use crate::errors::AppError;
use crate::llm_client::prompts::{combine, fill_template, JSON_ONLY_INSTRUCTION};
use crate::llm_client::{strip_json_fences, CompletionProvider, GenerationConfig};
use crate::models::{CareerRecommendationSet, UserProfile};
use crate::store::DocumentStore;

/// Careers requested per generation. Logged when the model returns a different
/// count, never rejected.
pub const CAREER_COUNT: usize = 4;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRecommendationsRequest {
    #[serde(default)]
    pub user_id: Option<String>,
}

pub async fn generate_recommendations(
    store: &dyn DocumentStore,
    llm: &dyn CompletionProvider,
    request: &GenerateRecommendationsRequest,
) -> Result<CareerRecommendationSet, AppError> {
    let result = run(store, llm, request).await;
    match &result {
        Ok(set) => info!(
            "Generated {} career recommendations for user {}",
            set.careers.len(),
            request.user_id.as_deref().unwrap_or_default()
        ),
        Err(e) => error!("Error in generate_recommendations: {e}"),
    }
    result
}

async fn run(
    store: &dyn DocumentStore,
    llm: &dyn CompletionProvider,
    request: &GenerateRecommendationsRequest,
) -> Result<CareerRecommendationSet, AppError> {
    let user_id = require_field(request.user_id.as_deref(), "userId is required")?;

    let profile = store
        .get_profile(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User profile not found".to_string()))?;

    let prompt = combine(RECOMMENDATION_SYSTEM, &build_recommendation_prompt(&profile));
    let raw = llm.complete(&prompt, &GenerationConfig::default()).await?;

    let mut recommendations = parse_recommendations(&raw)?;

    let now = Utc::now();
    recommendations.generated_at = Some(now);
    store
        .save_recommendations(user_id, &recommendations, now)
        .await?;

    Ok(recommendations)
}

/// Fills the recommendation template from the profile.
pub fn build_recommendation_prompt(profile: &UserProfile) -> String {
    let skills = if profile.skills.is_empty() {
        "None specified".to_string()
    } else {
        profile.skills.join(", ")
    };

    let career_count = CAREER_COUNT.to_string();

    fill_template(
        RECOMMENDATION_PROMPT_TEMPLATE,
        &[
            ("interests", or_not_specified(&profile.interests)),
            ("academics", or_not_specified(&profile.academics)),
            ("skills", skills.as_str()),
            ("career_count", career_count.as_str()),
            ("json_only_instruction", JSON_ONLY_INSTRUCTION),
        ],
    )
}

fn or_not_specified(value: &str) -> &str {
    if value.trim().is_empty() {
        "Not specified"
    } else {
        value
    }
}

/// Parse-then-validate. Not JSON → `MalformedJson`; JSON of the wrong shape →
/// `SchemaMismatch`. The raw text is logged on either failure.
pub fn parse_recommendations(raw: &str) -> Result<CareerRecommendationSet, AppError> {
    let value: Value = serde_json::from_str(strip_json_fences(raw)).map_err(|e| {
        error!("Failed to parse AI response: {e}");
        error!("Raw response: {raw}");
        AppError::MalformedJson(e.to_string())
    })?;

    let mut set: CareerRecommendationSet = serde_json::from_value(value).map_err(|e| {
        error!("AI response has unexpected shape: {e}");
        error!("Raw response: {raw}");
        AppError::SchemaMismatch(e.to_string())
    })?;

    validate_shape(&set).map_err(|reason| {
        error!("AI response failed validation: {reason}");
        error!("Raw response: {raw}");
        AppError::SchemaMismatch(reason)
    })?;

    if set.careers.len() != CAREER_COUNT {
        warn!(
            "Expected {CAREER_COUNT} careers, model returned {}",
            set.careers.len()
        );
    }

    // The timestamp is ours to stamp.
    set.generated_at = None;
    Ok(set)
}

fn validate_shape(set: &CareerRecommendationSet) -> Result<(), String> {
    if set.careers.is_empty() {
        return Err("careers list is empty".to_string());
    }
    for (i, career) in set.careers.iter().enumerate() {
        if career.title.trim().is_empty() {
            return Err(format!("career {i} has an empty title"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::llm_client::testing::ScriptedProvider;
    use crate::llm_client::LlmError;
    use crate::store::MemoryDocumentStore;
    use serde_json::json;

    fn four_careers() -> Value {
        let career = |title: &str| {
            json!({
                "title": title,
                "description": format!("{title} build things. They ship often."),
                "reasoning": "Matches your interest in AI.",
                "requiredSkills": ["Python", "Statistics", "SQL", "Communication"]
            })
        };
        json!({
            "careers": [
                career("Machine Learning Engineer"),
                career("Data Scientist"),
                career("AI Product Manager"),
                career("Research Assistant")
            ]
        })
    }

    async fn store_with_profile() -> MemoryDocumentStore {
        let store = MemoryDocumentStore::new();
        let mut profile = UserProfile::new("u1");
        profile.interests = "AI".to_string();
        profile.academics = "CS".to_string();
        profile.skills = vec!["Python".to_string()];
        store.put_profile(&profile).await.unwrap();
        store
    }

    fn request(user_id: Option<&str>) -> GenerateRecommendationsRequest {
        GenerateRecommendationsRequest {
            user_id: user_id.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_end_to_end_stores_model_output() {
        let store = store_with_profile().await;
        let llm = ScriptedProvider::replying(vec![Ok(four_careers().to_string())]);

        let set = generate_recommendations(&store, &llm, &request(Some("u1")))
            .await
            .unwrap();
        assert_eq!(set.careers.len(), 4);
        assert!(set.generated_at.is_some());

        let profile = store.get_profile("u1").await.unwrap().unwrap();
        assert!(profile.has_generated_recommendations);
        let stored = profile.career_recommendations.unwrap();
        assert_eq!(
            serde_json::to_value(&stored.careers).unwrap(),
            four_careers()["careers"]
        );
        assert_eq!(stored.generated_at, profile.last_recommendation_update);
    }

    #[tokio::test]
    async fn test_prompt_embeds_profile() {
        let store = store_with_profile().await;
        let llm = ScriptedProvider::replying(vec![Ok(four_careers().to_string())]);

        generate_recommendations(&store, &llm, &request(Some("u1")))
            .await
            .unwrap();

        let calls = llm.calls.lock().unwrap();
        let (prompt, config) = &calls[0];
        assert!(prompt.starts_with(RECOMMENDATION_SYSTEM));
        assert!(prompt.contains("- Interests: AI"));
        assert!(prompt.contains("- Academic Strengths: CS"));
        assert!(prompt.contains("- Existing Skills: Python"));
        assert!(prompt.contains("Recommend exactly 4 diverse"));
        assert_eq!(*config, GenerationConfig::default());
    }

    #[tokio::test]
    async fn test_missing_user_id_fails_before_any_call() {
        let store = store_with_profile().await;
        let llm = ScriptedProvider::replying(vec![Ok(four_careers().to_string())]);

        for user_id in [None, Some(""), Some("   ")] {
            let err = generate_recommendations(&store, &llm, &request(user_id))
                .await
                .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        }
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_profile_is_not_found() {
        let store = MemoryDocumentStore::new();
        let llm = ScriptedProvider::replying(vec![Ok(four_careers().to_string())]);

        let err = generate_recommendations(&store, &llm, &request(Some("ghost")))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_non_json_response_is_internal_and_writes_nothing() {
        let store = store_with_profile().await;
        let llm = ScriptedProvider::replying(vec![Ok(
            "Sure! Here are four careers you might enjoy...".to_string()
        )]);

        let err = generate_recommendations(&store, &llm, &request(Some("u1")))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::MalformedJson(_)));
        assert_eq!(err.kind(), ErrorKind::Internal);

        let profile = store.get_profile("u1").await.unwrap().unwrap();
        assert!(profile.career_recommendations.is_none());
        assert!(!profile.has_generated_recommendations);
    }

    #[tokio::test]
    async fn test_provider_failure_is_internal() {
        let store = store_with_profile().await;
        let llm = ScriptedProvider::replying(vec![Err(LlmError::Api {
            status: 503,
            message: "overloaded".to_string(),
        })]);

        let err = generate_recommendations(&store, &llm, &request(Some("u1")))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert_eq!(llm.call_count(), 1);
    }

    #[test]
    fn test_wrong_shape_is_schema_mismatch() {
        let err = parse_recommendations(r#"{"jobs": []}"#).unwrap_err();
        assert!(matches!(err, AppError::SchemaMismatch(_)));

        let err = parse_recommendations(r#"{"careers": []}"#).unwrap_err();
        assert!(matches!(err, AppError::SchemaMismatch(_)));

        let err = parse_recommendations(
            r#"{"careers": [{"title": " ", "description": "", "reasoning": "", "requiredSkills": []}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::SchemaMismatch(_)));
    }

    #[test]
    fn test_fenced_json_is_accepted() {
        let raw = format!("```json\n{}\n```", four_careers());
        let set = parse_recommendations(&raw).unwrap();
        assert_eq!(set.careers[1].title, "Data Scientist");
    }

    #[test]
    fn test_model_supplied_timestamp_is_dropped() {
        let mut value = four_careers();
        value["generatedAt"] = json!("1999-01-01T00:00:00Z");
        let set = parse_recommendations(&value.to_string()).unwrap();
        assert!(set.generated_at.is_none());
    }

    #[test]
    fn test_profile_text_is_not_expanded_as_placeholders() {
        let mut profile = UserProfile::new("u1");
        profile.interests = "coding {skills} and {career_count}".to_string();
        profile.skills = vec!["Rust".to_string()];

        let prompt = build_recommendation_prompt(&profile);
        assert!(prompt.contains("- Interests: coding {skills} and {career_count}"));
        assert!(prompt.contains("- Existing Skills: Rust"));
        assert!(prompt.contains("Recommend exactly 4 diverse"));
    }

    #[tokio::test]
    async fn test_other_career_counts_are_accepted_and_stored() {
        let store = store_with_profile().await;
        let mut reply = four_careers();
        reply["careers"].as_array_mut().unwrap().pop();
        let llm = ScriptedProvider::replying(vec![Ok(reply.to_string())]);

        let set = generate_recommendations(&store, &llm, &request(Some("u1")))
            .await
            .unwrap();
        assert_eq!(set.careers.len(), 3);

        let profile = store.get_profile("u1").await.unwrap().unwrap();
        assert!(profile.has_generated_recommendations);
        assert_eq!(profile.career_recommendations.unwrap().careers.len(), 3);
    }

    #[test]
    fn test_prompt_placeholders_for_empty_profile() {
        let prompt = build_recommendation_prompt(&UserProfile::new("u1"));
        assert!(prompt.contains("- Interests: Not specified"));
        assert!(prompt.contains("- Academic Strengths: Not specified"));
        assert!(prompt.contains("- Existing Skills: None specified"));
        assert!(!prompt.contains("{interests}"));
        assert!(!prompt.contains("{json_only_instruction}"));
    }
}
