//! Research Match - interest-tag matching service for the Research Network
//!
//! This library ranks candidate researcher profiles against a requesting
//! user's interest tags using Jaccard similarity, and exposes the ranking
//! over a small actix-web HTTP surface.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{rank_candidates, Matcher, TagSet};
pub use models::{UserProfile, MatchRequest, MatchResult, MatchResponse, MatchLimits};
