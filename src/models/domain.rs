use serde::{Deserialize, Serialize};

/// Researcher profile as supplied by the calling backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    #[serde(rename = "interestTags")]
    pub interest_tags: Vec<String>,
    #[serde(default)]
    pub institution: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
}

/// Scored recommendation for a single candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub score: f64,
    #[serde(rename = "matchedTags")]
    pub matched_tags: Vec<String>,
}

/// Result-count limits applied by the matcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchLimits {
    /// Used when a request omits `topN`
    pub default_top_n: i64,
    /// Upper bound on `topN`; `None` means unbounded
    pub max_top_n: Option<i64>,
}

impl Default for MatchLimits {
    fn default() -> Self {
        Self {
            default_top_n: 5,
            max_top_n: None,
        }
    }
}
