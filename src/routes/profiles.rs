use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::core::{best_matches, MatchOptions};
use crate::display::{match_card, profile_card};
use crate::error::ApiError;
use crate::models::{
    BrowseResponse, HealthResponse, LookupResponse, MatchCard, Profile, ProfileLookupQuery,
};
use crate::routes::AppState;

/// Configure profile routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/profiles", web::get().to(browse_or_lookup));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        profiles: state.store.len(),
    })
}

/// Browse and lookup endpoint
///
/// GET /api/v1/profiles              -> every profile as an obfuscated card
/// GET /api/v1/profiles?id=...       -> one profile plus its ranked matches
/// GET /api/v1/profiles?contact=...  -> same lookup, addressed by contact
/// GET /api/v1/profiles?location=... -> cards filtered by location
async fn browse_or_lookup(
    state: web::Data<AppState>,
    query: web::Query<ProfileLookupQuery>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = query.validate() {
        tracing::info!("Validation failed for profile query: {}", errors);
        return Err(ApiError::Validation(errors.to_string()));
    }

    if let Some(id) = query.id.as_deref() {
        let profile = state
            .store
            .get_by_id(id)
            .ok_or_else(|| lookup_miss("id", id))?;
        return Ok(lookup_response(&state, profile));
    }

    if let Some(contact) = query.contact.as_deref() {
        let profile = state
            .store
            .get_by_contact(contact)
            .ok_or_else(|| lookup_miss("contact", contact))?;
        return Ok(lookup_response(&state, profile));
    }

    let profiles: Vec<&Profile> = match query.location.as_deref() {
        Some(location) => state.store.by_location(location),
        None => state.store.list_all().iter().collect(),
    };

    tracing::debug!("Browsing {} profiles", profiles.len());

    let cards: Vec<_> = profiles.into_iter().map(profile_card).collect();
    Ok(HttpResponse::Ok().json(BrowseResponse {
        total: cards.len(),
        profiles: cards,
    }))
}

/// 404 for a lookup that addressed no stored profile.
fn lookup_miss(field: &str, value: &str) -> ApiError {
    tracing::warn!("Lookup miss: no profile with {} '{}'", field, value);
    ApiError::NotFound(format!("no profile with {field} '{value}'"))
}

/// One profile in full, plus its ranked matches as obfuscated cards.
fn lookup_response(state: &AppState, profile: &Profile) -> HttpResponse {
    let options = MatchOptions {
        top_n: Some(state.matching.lookup_top_n),
        ..MatchOptions::default()
    };
    let ranked = best_matches(profile, state.store.list_all(), options);

    tracing::info!(
        "Lookup for {}: {} matches from {} candidates",
        profile.profile_id,
        ranked.matches.len(),
        ranked.total_candidates
    );

    // The candidate id sits in profile_b; the target is always profile_a.
    let matches: Vec<MatchCard> = ranked
        .matches
        .iter()
        .filter_map(|result| {
            state
                .store
                .get_by_id(&result.profile_b)
                .map(|candidate| match_card(result, candidate))
        })
        .collect();

    HttpResponse::Ok().json(LookupResponse {
        profile: profile.clone(),
        matches,
        total_candidates: ranked.total_candidates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
            profiles: 9,
        };

        assert_eq!(response.status, "healthy");
        assert_eq!(response.profiles, 9);
    }

    #[test]
    fn test_lookup_miss_maps_to_not_found() {
        let err = lookup_miss("id", "ghost");
        assert!(matches!(err, ApiError::NotFound(_)));
        assert_eq!(err.to_string(), "Not found: no profile with id 'ghost'");

        let err = lookup_miss("contact", "ghost@example.com");
        assert_eq!(
            err.to_string(),
            "Not found: no profile with contact 'ghost@example.com'"
        );
    }
}
