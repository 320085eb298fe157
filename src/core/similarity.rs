use crate::core::tags::TagSet;

/// Number of decimal places kept in reported scores
pub const SCORE_DECIMALS: i32 = 3;

/// Jaccard comparison of two tag sets
#[derive(Debug, Clone, PartialEq)]
pub struct Similarity {
    /// |a ∩ b| / |a ∪ b|, unrounded
    pub score: f64,
    /// Shared tags, ascending
    pub matched_tags: Vec<String>,
}

/// Calculate the Jaccard index of two tag sets
///
/// An empty union scores 0.0. Symmetric in its arguments.
pub fn jaccard(a: &TagSet, b: &TagSet) -> Similarity {
    let matched_tags = a.intersection(b);
    let union = a.union_len(b);

    let score = if union == 0 {
        0.0
    } else {
        matched_tags.len() as f64 / union as f64
    };

    Similarity { score, matched_tags }
}

/// Round a score to [`SCORE_DECIMALS`] places
///
/// Ties round half away from zero, which for the non-negative scores produced
/// here is round-half-up.
#[inline]
pub fn round_score(score: f64) -> f64 {
    let factor = 10f64.powi(SCORE_DECIMALS);
    (score * factor).round() / factor
}
