// User profiles: onboarding, edits and gamified progress.

pub mod handlers;
pub mod onboarding;
pub mod progress;
