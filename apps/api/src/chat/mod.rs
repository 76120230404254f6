// Chat assistant: keyword topic detection with templated, profile-aware replies.

pub mod handlers;
pub mod selector;
pub mod templates;
