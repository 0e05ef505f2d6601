use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::core::{all_matches, matching_stats, MatchOptions};
use crate::display::showcase_pair;
use crate::error::ApiError;
use crate::models::{ShowcasePair, ShowcaseQuery, ShowcaseResponse};
use crate::routes::AppState;

/// Configure match routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/matches", web::get().to(showcase));
}

/// All-pairs showcase endpoint
///
/// GET /api/v1/matches?minScore=60
///
/// Scores every unordered pair in the store, keeps pairs at or above the
/// threshold, and returns them ranked with pool statistics.
async fn showcase(
    state: web::Data<AppState>,
    query: web::Query<ShowcaseQuery>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = query.validate() {
        tracing::info!("Validation failed for showcase query: {}", errors);
        return Err(ApiError::Validation(errors.to_string()));
    }

    let min_score = query.min_score.unwrap_or(state.matching.showcase_min_score);
    let options = MatchOptions {
        min_score,
        ..MatchOptions::showcase()
    };

    let pool = state.store.list_all();
    let results = all_matches(pool, options);
    let stats = matching_stats(pool);

    tracing::info!(
        "Showcase: {} pairs at or above {} (of {} total)",
        results.len(),
        min_score,
        stats.total_pairs
    );

    let matches: Vec<ShowcasePair> = results.iter().map(showcase_pair).collect();
    Ok(HttpResponse::Ok().json(ShowcaseResponse { matches, stats }))
}
