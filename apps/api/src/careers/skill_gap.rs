//! Skill-gap matching — which of a career's required skills the user already has.
//!
//! Pure and deterministic, no I/O.
//!
//! Matching is a case-insensitive substring test in BOTH directions, so
//! "React" ↔ "React Native" matches either way round. Abbreviations that are not
//! substrings do not: "JS" and "JavaScript" never match.
//! Short tokens over-match: a required "C" is owned by anyone listing
//! "Communication". Known limitation; tokenized or exact matching would change
//! the percentages users already see, so it is not done here.

use serde::{Deserialize, Serialize};

/// Required skills split into owned / needed, both in the order they were required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGapResult {
    pub owned: Vec<String>,
    pub needed: Vec<String>,
    /// `round(100 * owned / required)`, 0 when nothing is required.
    pub completion_percentage: u32,
}

pub fn match_skills<R, U>(required_skills: &[R], user_skills: &[U]) -> SkillGapResult
where
    R: AsRef<str>,
    U: AsRef<str>,
{
    let user_lower: Vec<String> = user_skills
        .iter()
        .map(|s| s.as_ref().to_lowercase())
        .collect();

    let (owned, needed): (Vec<String>, Vec<String>) = required_skills
        .iter()
        .map(|s| s.as_ref().to_string())
        .partition(|skill| is_owned(&skill.to_lowercase(), &user_lower));

    let completion_percentage = completion_percentage(owned.len(), required_skills.len());

    SkillGapResult {
        owned,
        needed,
        completion_percentage,
    }
}

fn is_owned(required_lower: &str, user_lower: &[String]) -> bool {
    user_lower
        .iter()
        .any(|u| u.contains(required_lower) || required_lower.contains(u.as_str()))
}

fn completion_percentage(owned: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((owned as f64 / total as f64) * 100.0).round() as u32
}
