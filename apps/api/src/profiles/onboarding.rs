//! Onboarding and profile edits.
//!
//! The onboarding wizard has three steps (interests, academics, skills) and each
//! must be filled before the profile is written. Completing onboarding merges
//! into any existing document: cached recommendations survive, the starter
//! balances are reset.

use chrono::Utc;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::UserProfile;
use crate::profiles::progress::level_for_xp;
use crate::store::DocumentStore;

pub const ONBOARDING_XP: u32 = 500;
pub const ONBOARDING_SKILL_COINS: u32 = 100;
pub const ONBOARDING_STREAK: u32 = 1;
pub const ONBOARDING_ACHIEVEMENT: &str = "onboarding_complete";
pub const DEMO_USER_PREFIX: &str = "demo-user-";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingRequest {
    #[serde(default)]
    pub interests: Option<String>,
    #[serde(default)]
    pub academics: Option<String>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(default)]
    pub interests: Option<String>,
    #[serde(default)]
    pub academics: Option<String>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
}

/// Trims, drops blanks and exact duplicates. First occurrence keeps its place.
pub fn normalize_skills(skills: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(skills.len());
    for skill in skills {
        let skill = skill.trim();
        if !skill.is_empty() && !out.iter().any(|s| s == skill) {
            out.push(skill.to_string());
        }
    }
    out
}

/// Validated wizard answers.
struct WizardAnswers {
    interests: String,
    academics: String,
    skills: Vec<String>,
}

fn validate_wizard(request: &OnboardingRequest) -> Result<WizardAnswers, AppError> {
    let interests = request
        .interests
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::InvalidArgument("interests is required".to_string()))?;

    let academics = request
        .academics
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::InvalidArgument("academics is required".to_string()))?;

    let skills = normalize_skills(request.skills.as_deref().unwrap_or_default());
    if skills.is_empty() {
        return Err(AppError::InvalidArgument(
            "at least one skill is required".to_string(),
        ));
    }

    Ok(WizardAnswers {
        interests: interests.to_string(),
        academics: academics.to_string(),
        skills,
    })
}

pub async fn complete_onboarding(
    store: &dyn DocumentStore,
    user_id: &str,
    request: &OnboardingRequest,
) -> Result<UserProfile, AppError> {
    if user_id.trim().is_empty() {
        return Err(AppError::InvalidArgument("userId is required".to_string()));
    }
    let answers = validate_wizard(request)?;

    let now = Utc::now();
    let mut profile = store
        .get_profile(user_id)
        .await?
        .unwrap_or_else(|| UserProfile::new(user_id));

    profile.interests = answers.interests;
    profile.academics = answers.academics;
    profile.skills = answers.skills;
    profile.onboarding_completed = true;
    profile.has_generated_recommendations = false;
    profile.xp = ONBOARDING_XP;
    profile.level = level_for_xp(ONBOARDING_XP);
    profile.skill_coins = ONBOARDING_SKILL_COINS;
    profile.streak = ONBOARDING_STREAK;
    profile.achievements = vec![ONBOARDING_ACHIEVEMENT.to_string()];
    profile.created_at = profile.created_at.or(Some(now));
    profile.updated_at = Some(now);

    store.put_profile(&profile).await?;
    info!("Onboarding completed for user {user_id}");

    Ok(profile)
}

/// Demo-mode bootstrap: onboards a fresh `demo-user-<uuid>` profile.
pub async fn complete_demo_onboarding(
    store: &dyn DocumentStore,
    request: &OnboardingRequest,
) -> Result<UserProfile, AppError> {
    let user_id = format!("{DEMO_USER_PREFIX}{}", Uuid::new_v4());
    complete_onboarding(store, &user_id, request).await
}

pub async fn update_profile(
    store: &dyn DocumentStore,
    user_id: &str,
    update: &ProfileUpdate,
) -> Result<UserProfile, AppError> {
    let mut profile = store
        .get_profile(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User profile not found".to_string()))?;

    if let Some(interests) = &update.interests {
        profile.interests = interests.trim().to_string();
    }
    if let Some(academics) = &update.academics {
        profile.academics = academics.trim().to_string();
    }
    if let Some(skills) = &update.skills {
        profile.skills = normalize_skills(skills);
    }
    profile.updated_at = Some(Utc::now());

    store.put_profile(&profile).await?;
    Ok(profile)
}
