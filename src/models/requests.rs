use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::UserProfile;

/// Request to rank candidates for a user
///
/// `topN` is optional; when absent the matcher's configured default applies.
/// Zero or negative values are accepted and produce an empty list.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[serde(alias = "user_profile", rename = "userProfile")]
    pub user_profile: UserProfile,
    #[serde(alias = "all_users", rename = "allUsers")]
    pub all_users: Vec<UserProfile>,
    #[serde(default, alias = "top_n", rename = "topN")]
    pub top_n: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let req: MatchRequest = serde_json::from_str(r#"{
            "userId": "u1",
            "userProfile": {"id": "u1", "fullName": "Ada", "interestTags": ["ML"]},
            "allUsers": [],
            "topN": 3
        }"#).unwrap();

        assert_eq!(req.user_id, "u1");
        assert_eq!(req.user_profile.full_name, "Ada");
        assert_eq!(req.user_profile.institution, None);
        assert_eq!(req.top_n, Some(3));
    }

    #[test]
    fn test_top_n_optional() {
        let req: MatchRequest = serde_json::from_str(r#"{
            "userId": "u1",
            "userProfile": {"id": "u1", "fullName": "Ada", "interestTags": []},
            "allUsers": []
        }"#).unwrap();

        assert_eq!(req.top_n, None);
    }

    #[test]
    fn test_missing_tags_rejected() {
        let res = serde_json::from_str::<MatchRequest>(r#"{
            "userId": "u1",
            "userProfile": {"id": "u1", "fullName": "Ada"},
            "allUsers": []
        }"#);

        assert!(res.is_err());
    }

    #[test]
    fn test_empty_user_id_fails_validation() {
        let req: MatchRequest = serde_json::from_str(r#"{
            "userId": "",
            "userProfile": {"id": "", "fullName": "Ada", "interestTags": []},
            "allUsers": []
        }"#).unwrap();

        assert!(req.validate().is_err());
    }
}
