// Core algorithm exports
pub mod filters;
pub mod lifestyle;
pub mod matcher;
pub mod scoring;

pub use filters::{
    budgets_aligned, location_overlap_count, passes_hard_filters, preference_compatible,
};
pub use lifestyle::{habit_closeness, scale_closeness, MAX_HABIT_CLOSENESS};
pub use matcher::{all_matches, best_matches, matching_stats, MatchOptions, MatchingStats, RankedMatches};
pub use scoring::{score_breakdown, score_pair};
