//! Roomio - rule-based roommate matching service
//!
//! This library implements the matching pipeline behind the Roomio demo
//! app: hard compatibility filters, a four-factor pair score, batch
//! ranking operations, and the presentation transformers served by the
//! HTTP layer.

pub mod config;
pub mod core;
pub mod display;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;

// Re-export commonly used types
pub use crate::core::{
    all_matches, best_matches, matching_stats, score_pair, MatchOptions, MatchingStats,
    RankedMatches,
};
pub use crate::display::{display_tag, obfuscate_contact, preference_bullets, profile_card};
pub use crate::error::ApiError;
pub use crate::models::{MatchResult, Profile, ScoreBreakdown};
pub use crate::store::{demo_profiles, ProfileStore};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work together
        let store = ProfileStore::new(demo_profiles());
        assert!(!store.is_empty());

        let pool = store.list_all();
        let ranked = best_matches(&pool[0], pool, MatchOptions::default());
        assert_eq!(ranked.total_candidates, pool.len() - 1);
    }
}
