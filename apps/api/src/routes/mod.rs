pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::careers::handlers as careers;
use crate::chat::handlers as chat;
use crate::profiles::handlers as profiles;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Generators
        .route(
            "/api/v1/recommendations",
            post(careers::handle_generate_recommendations),
        )
        .route("/api/v1/roadmaps", post(careers::handle_generate_roadmap))
        // Cached career data
        .route(
            "/api/v1/users/:user_id/roadmaps/:career",
            get(careers::handle_get_roadmap),
        )
        .route(
            "/api/v1/users/:user_id/skill-gaps",
            get(careers::handle_skill_gaps),
        )
        // Profiles
        .route(
            "/api/v1/users/:user_id/profile",
            get(profiles::handle_get_profile).patch(profiles::handle_update_profile),
        )
        .route(
            "/api/v1/users/:user_id/onboarding",
            post(profiles::handle_onboarding),
        )
        .route("/api/v1/users/:user_id/xp", post(profiles::handle_award_xp))
        .route(
            "/api/v1/demo/onboarding",
            post(profiles::handle_demo_onboarding),
        )
        // Chat
        .route("/api/v1/chat", post(chat::handle_chat))
        .with_state(state)
}
