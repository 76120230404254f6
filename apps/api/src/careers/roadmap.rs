//! Roadmap Generator.
//!
//! Flow: validate → build prompt → one LLM call → wrap the Markdown in a
//!       `RoadmapDocument` → overwrite `users/{id}/roadmaps/{slug}` → return.
//!
//! Every call regenerates. The cached document is written here but never read back
//! by the generator; only the read endpoint serves it.

use chrono::Utc;
use serde::Deserialize;
use tracing::{debug, error, info};

use crate::careers::prompts::{ROADMAP_PROMPT_TEMPLATE, ROADMAP_SYSTEM};
use crate::careers::require_field;
use crate::errors::AppError;
use crate::llm_client::prompts::{combine, fill_template};
use crate::llm_client::{CompletionProvider, GenerationConfig};
use crate::models::RoadmapDocument;
use crate::store::{roadmap_path, DocumentStore};

/// Sampling parameters for roadmap generation.
pub fn roadmap_generation_config() -> GenerationConfig {
    GenerationConfig {
        temperature: Some(0.7),
        top_k: Some(1),
        top_p: Some(1.0),
        max_output_tokens: Some(3000),
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRoadmapRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub career_title: Option<String>,
}

/// Cache key for a career title: lowercased, every character outside `[a-z0-9]`
/// replaced by `_`.
///
/// Distinct titles can share a slug ("Data Scientist" / "Data-Scientist") and then
/// overwrite each other's cached roadmap.
pub fn career_slug(career_title: &str) -> String {
    career_title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

pub async fn generate_roadmap(
    store: &dyn DocumentStore,
    llm: &dyn CompletionProvider,
    request: &GenerateRoadmapRequest,
) -> Result<RoadmapDocument, AppError> {
    let result = run(store, llm, request).await;
    match &result {
        Ok(doc) => info!(
            "Generated skill roadmap for {} for user {}",
            doc.career_title,
            request.user_id.as_deref().unwrap_or_default()
        ),
        Err(e) => error!("Error in generate_roadmap: {e}"),
    }
    result
}

async fn run(
    store: &dyn DocumentStore,
    llm: &dyn CompletionProvider,
    request: &GenerateRoadmapRequest,
) -> Result<RoadmapDocument, AppError> {
    const MISSING: &str = "userId and careerTitle are required";
    let user_id = require_field(request.user_id.as_deref(), MISSING)?;
    let career_title = require_field(request.career_title.as_deref(), MISSING)?;

    let prompt = combine(ROADMAP_SYSTEM, &build_roadmap_prompt(career_title));
    let roadmap = llm.complete(&prompt, &roadmap_generation_config()).await?;

    let doc = RoadmapDocument {
        career_title: career_title.to_string(),
        roadmap,
        generated_at: Utc::now(),
    };

    let slug = career_slug(career_title);
    store.put_roadmap(user_id, &slug, &doc).await?;
    debug!("Cached roadmap at {}", roadmap_path(user_id, &slug));

    Ok(doc)
}

pub fn build_roadmap_prompt(career_title: &str) -> String {
    fill_template(ROADMAP_PROMPT_TEMPLATE, &[("career_title", career_title)])
}
