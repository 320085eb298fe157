use std::cmp::Ordering;

use crate::models::{MatchLimits, MatchRequest, MatchResponse, MatchResult, UserProfile};
use crate::core::{
    similarity::{jaccard, round_score},
    tags::TagSet,
};

/// Result of the matching process
#[derive(Debug)]
pub struct MatchOutcome {
    pub response: MatchResponse,
    pub total_candidates: usize,
    pub top_n: i64,
}

/// Rank candidates against a requester's interest tags
///
/// # Pipeline Stages
/// 1. Normalize the requester's tags once
/// 2. Skip the requester itself (by id) and candidates with no shared tag
/// 3. Score survivors by Jaccard index, rounded to 3 places
/// 4. Sort by score descending, then by input position
/// 5. Keep the first `top_n`
///
/// A `top_n` of zero or below yields an empty list.
pub fn rank_candidates(
    requester_id: &str,
    requester: &UserProfile,
    candidates: &[UserProfile],
    top_n: i64,
) -> Vec<MatchResult> {
    let requester_tags = TagSet::from_tags(&requester.interest_tags);

    let mut scored: Vec<(usize, MatchResult)> = candidates
        .iter()
        .enumerate()
        .filter(|(_, candidate)| candidate.id != requester_id)
        .filter_map(|(index, candidate)| {
            let candidate_tags = TagSet::from_tags(&candidate.interest_tags);
            let similarity = jaccard(&requester_tags, &candidate_tags);

            if similarity.matched_tags.is_empty() {
                return None;
            }

            Some((
                index,
                MatchResult {
                    user_id: candidate.id.clone(),
                    full_name: candidate.full_name.clone(),
                    score: round_score(similarity.score),
                    matched_tags: similarity.matched_tags,
                },
            ))
        })
        .collect();

    // Score descending, then input position ascending
    scored.sort_by(|(ia, a), (ib, b)| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| ia.cmp(ib))
    });

    let keep = if top_n <= 0 {
        0
    } else {
        usize::try_from(top_n).unwrap_or(usize::MAX)
    };
    scored.truncate(keep);

    scored.into_iter().map(|(_, result)| result).collect()
}

/// Request-level orchestrator around [`rank_candidates`]
///
/// Resolves the effective `topN` from the request and the configured limits,
/// then stamps the response once with the current UTC time.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    limits: MatchLimits,
}

impl Matcher {
    pub fn new(limits: MatchLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> MatchLimits {
        self.limits
    }

    /// Effective result cap for a requested `topN`
    pub fn resolve_top_n(&self, requested: Option<i64>) -> i64 {
        let top_n = requested.unwrap_or(self.limits.default_top_n);
        match self.limits.max_top_n {
            Some(max) => top_n.min(max),
            None => top_n,
        }
    }

    /// Find recommendations for the requesting user
    pub fn find_matches(&self, request: &MatchRequest) -> MatchOutcome {
        let top_n = self.resolve_top_n(request.top_n);

        let recommendations = rank_candidates(
            &request.user_id,
            &request.user_profile,
            &request.all_users,
            top_n,
        );

        MatchOutcome {
            response: MatchResponse {
                user_id: request.user_id.clone(),
                recommendations,
                timestamp: chrono::Utc::now(),
            },
            total_candidates: request.all_users.len(),
            top_n,
        }
    }
}
