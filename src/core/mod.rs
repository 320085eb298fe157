// Core algorithm exports
pub mod matcher;
pub mod similarity;
pub mod tags;

pub use matcher::{rank_candidates, Matcher, MatchOutcome};
pub use similarity::{jaccard, round_score, Similarity, SCORE_DECIMALS};
pub use tags::TagSet;
