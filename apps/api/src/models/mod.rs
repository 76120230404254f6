pub mod career;
pub mod response;
pub mod user;

pub use career::{CareerRecommendation, CareerRecommendationSet, RoadmapDocument};
pub use response::ApiResponse;
pub use user::UserProfile;
