//! Axum route handlers for the career endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::Serialize;

use crate::auth::Caller;
use crate::careers::recommendations::{generate_recommendations, GenerateRecommendationsRequest};
use crate::careers::roadmap::{career_slug, generate_roadmap, GenerateRoadmapRequest};
use crate::careers::skill_gap::{match_skills, SkillGapResult};
use crate::errors::AppError;
use crate::models::{ApiResponse, CareerRecommendationSet, RoadmapDocument};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerSkillGap {
    pub title: String,
    pub gap: SkillGapResult,
}

/// POST /api/v1/recommendations
///
/// Regenerates the caller's career recommendations and overwrites the cached set.
pub async fn handle_generate_recommendations(
    _caller: Caller,
    State(state): State<AppState>,
    payload: Result<Json<GenerateRecommendationsRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<CareerRecommendationSet>>, AppError> {
    let Json(request) = payload?;
    let set = generate_recommendations(state.store.as_ref(), state.llm.as_ref(), &request).await?;
    Ok(Json(ApiResponse::ok(set)))
}

/// POST /api/v1/roadmaps
pub async fn handle_generate_roadmap(
    _caller: Caller,
    State(state): State<AppState>,
    payload: Result<Json<GenerateRoadmapRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<RoadmapDocument>>, AppError> {
    let Json(request) = payload?;
    let doc = generate_roadmap(state.store.as_ref(), state.llm.as_ref(), &request).await?;
    Ok(Json(ApiResponse::ok(doc)))
}

/// GET /api/v1/users/:user_id/roadmaps/:career
///
/// Reads a cached roadmap. `career` may be the slug or the original title; slugs
/// are stable under `career_slug`.
pub async fn handle_get_roadmap(
    _caller: Caller,
    State(state): State<AppState>,
    Path((user_id, career)): Path<(String, String)>,
) -> Result<Json<ApiResponse<RoadmapDocument>>, AppError> {
    let slug = career_slug(&career);
    let doc = state
        .store
        .get_roadmap(&user_id, &slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No roadmap cached for '{career}'")))?;
    Ok(Json(ApiResponse::ok(doc)))
}

/// GET /api/v1/users/:user_id/skill-gaps
///
/// Skill gap for every cached recommendation, in recommendation order. Empty when
/// nothing has been generated yet.
pub async fn handle_skill_gaps(
    _caller: Caller,
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<CareerSkillGap>>>, AppError> {
    let profile = state
        .store
        .get_profile(&user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User profile not found".to_string()))?;

    let gaps = profile
        .career_recommendations
        .iter()
        .flat_map(|set| set.careers.iter())
        .map(|career| CareerSkillGap {
            title: career.title.clone(),
            gap: match_skills(career.required_skills.as_slice(), profile.skills.as_slice()),
        })
        .collect();

    Ok(Json(ApiResponse::ok(gaps)))
}
