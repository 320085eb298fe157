use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::error::ApiError;
use crate::models::MatchRequest;
use crate::routes::AppState;

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/match", web::post().to(find_matches));
}

/// Find matches endpoint
///
/// POST /api/match
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "userProfile": { "id": "string", "fullName": "string", "interestTags": ["string"] },
///   "allUsers": [ { "id": "string", "fullName": "string", "interestTags": ["string"] } ],
///   "topN": 5
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<MatchRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for match request: field_errors={:?}", errors);
        return Err(ApiError::from(errors));
    }

    let outcome = state.matcher.find_matches(&req);

    tracing::debug!("Resolved topN={} for user {}", outcome.top_n, req.user_id);
    tracing::info!(
        "Returning {} recommendations for user {} (from {} candidates)",
        outcome.response.recommendations.len(),
        req.user_id,
        outcome.total_candidates
    );

    Ok(HttpResponse::Ok().json(outcome.response))
}
