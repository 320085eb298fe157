// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{UserProfile, MatchResult, MatchLimits};
pub use requests::MatchRequest;
pub use responses::{MatchResponse, HealthResponse, HelloResponse, ErrorResponse};
