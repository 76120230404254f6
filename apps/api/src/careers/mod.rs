// Career guidance: AI recommendations, skill roadmaps and skill-gap analysis.
// All LLM calls go through llm_client::CompletionProvider.

pub mod handlers;
pub mod prompts;
pub mod recommendations;
pub mod roadmap;
pub mod skill_gap;

use crate::errors::AppError;

/// Treats absent and blank values alike: both are a missing argument.
pub(crate) fn require_field<'a>(value: Option<&'a str>, message: &str) -> Result<&'a str, AppError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::InvalidArgument(message.to_string()))
}
