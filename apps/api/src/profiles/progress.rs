use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::store::DocumentStore;

pub const XP_PER_LEVEL: u32 = 100;

/// Levels start at 1 and go up every `XP_PER_LEVEL` XP.
pub fn level_for_xp(xp: u32) -> u32 {
    xp / XP_PER_LEVEL + 1
}

#[derive(Debug, Clone, Deserialize)]
pub struct AwardXpRequest {
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub xp: u32,
    pub level: u32,
    pub leveled_up: bool,
}

pub async fn award_xp(
    store: &dyn DocumentStore,
    user_id: &str,
    amount: i64,
) -> Result<Progress, AppError> {
    if amount <= 0 {
        return Err(AppError::InvalidArgument(
            "amount must be a positive number of XP".to_string(),
        ));
    }
    let amount = u32::try_from(amount).unwrap_or(u32::MAX);

    let mut profile = store
        .get_profile(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User profile not found".to_string()))?;

    let previous_level = profile.level;
    profile.xp = profile.xp.saturating_add(amount);
    profile.level = level_for_xp(profile.xp);
    profile.updated_at = Some(Utc::now());
    store.put_profile(&profile).await?;

    Ok(Progress {
        xp: profile.xp,
        level: profile.level,
        leveled_up: profile.level > previous_level,
    })
}
