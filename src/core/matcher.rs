use serde::{Deserialize, Serialize};

use crate::core::scoring::score_pair;
use crate::models::{MatchResult, Profile};

/// Knobs for the batch operations.
#[derive(Debug, Clone, Copy)]
pub struct MatchOptions {
    /// Drop results scoring below this.
    pub min_score: u8,
    /// Keep only the first N after ranking; `None` keeps everything.
    pub top_n: Option<usize>,
    /// Also return pairs that failed the hard filters (their score is 0).
    pub include_ineligible: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            min_score: 0,
            top_n: Some(10),
            include_ineligible: false,
        }
    }
}

impl MatchOptions {
    /// Defaults for the all-pairs showcase view.
    pub fn showcase() -> Self {
        Self {
            min_score: 60,
            top_n: None,
            include_ineligible: false,
        }
    }

    pub fn top(n: usize) -> Self {
        Self {
            top_n: Some(n),
            ..Self::default()
        }
    }

    fn keeps(&self, result: &MatchResult) -> bool {
        (result.passes_filters || self.include_ineligible) && result.score >= self.min_score
    }
}

/// Ranked matches for one target profile.
#[derive(Debug)]
pub struct RankedMatches {
    pub matches: Vec<MatchResult>,
    /// Pool size the ranking ran over, excluding the target itself.
    pub total_candidates: usize,
}

/// Score `target` against every other profile in `pool`, rank descending.
///
/// The target is excluded by id. Ties keep the pool's original order, so
/// the store's insertion order is the published tie-break.
pub fn best_matches(target: &Profile, pool: &[Profile], options: MatchOptions) -> RankedMatches {
    let mut total_candidates = 0usize;
    let mut matches: Vec<MatchResult> = pool
        .iter()
        .filter(|candidate| candidate.profile_id != target.profile_id)
        .inspect(|_| total_candidates += 1)
        .map(|candidate| score_pair(target, candidate))
        .filter(|result| options.keeps(result))
        .collect();

    matches.sort_by(|x, y| y.score.cmp(&x.score));
    if let Some(n) = options.top_n {
        matches.truncate(n);
    }

    RankedMatches {
        matches,
        total_candidates,
    }
}

/// Score every unordered pair in `pool`, rank descending.
///
/// Quadratic over the pool, which stays small by design.
pub fn all_matches(pool: &[Profile], options: MatchOptions) -> Vec<MatchResult> {
    let mut results = Vec::new();
    for (i, a) in pool.iter().enumerate() {
        for b in &pool[i + 1..] {
            let result = score_pair(a, b);
            if options.keeps(&result) {
                results.push(result);
            }
        }
    }

    results.sort_by(|x, y| y.score.cmp(&x.score));
    if let Some(n) = options.top_n {
        results.truncate(n);
    }
    results
}

/// Aggregate pair statistics over a pool.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MatchingStats {
    #[serde(rename = "totalPairs")]
    pub total_pairs: usize,
    #[serde(rename = "passingHardFilters")]
    pub passing_hard_filters: usize,
    /// Mean score of the pairs that pass the hard filters.
    #[serde(rename = "averageScore")]
    pub average_score: f64,
    /// Passing pairs scoring 80 or above.
    #[serde(rename = "highScorePairs")]
    pub high_score_pairs: usize,
}

/// Stats over every unordered pair, unfiltered.
pub fn matching_stats(pool: &[Profile]) -> MatchingStats {
    let mut total_pairs = 0usize;
    let mut passing = 0usize;
    let mut score_sum = 0u64;
    let mut high = 0usize;

    for (i, a) in pool.iter().enumerate() {
        for b in &pool[i + 1..] {
            total_pairs += 1;
            let result = score_pair(a, b);
            if result.passes_filters {
                passing += 1;
                score_sum += u64::from(result.score);
                if result.score >= 80 {
                    high += 1;
                }
            }
        }
    }

    let average_score = if passing > 0 {
        score_sum as f64 / passing as f64
    } else {
        0.0
    };

    MatchingStats {
        total_pairs,
        passing_hard_filters: passing,
        average_score,
        high_score_pairs: high,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Allergy, BudgetBand, GenderIdentity, LifestyleScales, RoommatePreference,
        SexAssignedAtBirth, SmokingHabit,
    };

    fn profile(id: &str, cleaning: u8) -> Profile {
        Profile {
            profile_id: id.to_string(),
            contact_address: None,
            sex_assigned_at_birth: SexAssignedAtBirth::Female,
            gender_identity: GenderIdentity::Female,
            visibility_flags: None,
            roommate_preference: RoommatePreference::Any,
            budget_band: BudgetBand::From10kTo12k,
            location_preferences: vec!["Downtown".to_string()],
            allergies: vec![Allergy::None],
            smoking_habit: SmokingHabit::None,
            scales: LifestyleScales {
                cleaning: Some(cleaning),
                visitors: Some(3),
                pets: Some(3),
                schedule: Some(3),
                interaction: Some(3),
                ..Default::default()
            },
            bio: String::new(),
            roommate_experience: None,
            move_in_date: None,
        }
    }

    #[test]
    fn test_best_matches_excludes_self() {
        let target = profile("me", 3);
        let pool = vec![profile("me", 3), profile("other", 3)];

        let ranked = best_matches(&target, &pool, MatchOptions::default());
        assert_eq!(ranked.total_candidates, 1);
        assert_eq!(ranked.matches.len(), 1);
        assert_eq!(ranked.matches[0].profile_b, "other");
    }

    #[test]
    fn test_best_matches_ranked_descending() {
        let target = profile("me", 3);
        // Cleaning answers 3, 1, 2 give lifestyle 25, 23, 24.
        let pool = vec![profile("a", 3), profile("b", 1), profile("c", 2)];

        let ranked = best_matches(&target, &pool, MatchOptions::default());
        let ids: Vec<&str> = ranked.matches.iter().map(|m| m.profile_b.as_str()).collect();
        assert_eq!(ids, vec!["a", "c", "b"]);
        assert_eq!(ranked.matches[0].score, 100);
        assert_eq!(ranked.matches[2].score, 98);
    }

    #[test]
    fn test_ties_keep_pool_order() {
        let target = profile("me", 3);
        let pool = vec![profile("first", 2), profile("second", 2)];

        let ranked = best_matches(&target, &pool, MatchOptions::default());
        assert_eq!(ranked.matches[0].profile_b, "first");
        assert_eq!(ranked.matches[1].profile_b, "second");
        assert_eq!(ranked.matches[0].score, ranked.matches[1].score);
    }

    #[test]
    fn test_top_n_truncates() {
        let target = profile("me", 3);
        let pool: Vec<Profile> = (0..8).map(|i| profile(&format!("p{i}"), 3)).collect();

        let ranked = best_matches(&target, &pool, MatchOptions::top(5));
        assert_eq!(ranked.matches.len(), 5);
        assert_eq!(ranked.total_candidates, 8);
    }

    #[test]
    fn test_min_score_drops_low_pairs() {
        let target = profile("me", 3);
        let pool = vec![profile("close", 3), profile("far", 1)];

        let options = MatchOptions {
            min_score: 99,
            ..MatchOptions::default()
        };
        let ranked = best_matches(&target, &pool, options);
        assert_eq!(ranked.matches.len(), 1);
        assert_eq!(ranked.matches[0].profile_b, "close");
    }

    #[test]
    fn test_ineligible_pairs_hidden_unless_requested() {
        let target = profile("me", 3);
        let mut stranger = profile("stranger", 3);
        stranger.budget_band = BudgetBand::Over22k;
        let pool = vec![stranger];

        let ranked = best_matches(&target, &pool, MatchOptions::default());
        assert!(ranked.matches.is_empty());

        let options = MatchOptions {
            include_ineligible: true,
            ..MatchOptions::default()
        };
        let ranked = best_matches(&target, &pool, options);
        assert_eq!(ranked.matches.len(), 1);
        assert_eq!(ranked.matches[0].score, 0);
    }

    #[test]
    fn test_all_matches_covers_unordered_pairs() {
        let pool = vec![profile("a", 3), profile("b", 3), profile("c", 3)];
        let results = all_matches(&pool, MatchOptions { min_score: 0, top_n: None, include_ineligible: false });
        assert_eq!(results.len(), 3);
        // No pair appears twice in either direction.
        let mut seen: Vec<(String, String)> = results
            .iter()
            .map(|r| (r.profile_a.clone(), r.profile_b.clone()))
            .collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_showcase_threshold() {
        let pool = vec![profile("a", 3), profile("b", 3)];
        let results = all_matches(&pool, MatchOptions::showcase());
        assert_eq!(results.len(), 1);
        assert!(results[0].score >= 60);
    }

    #[test]
    fn test_stats_over_pool() {
        let mut loner = profile("loner", 3);
        loner.budget_band = BudgetBand::Under8k;
        let pool = vec![profile("a", 3), profile("b", 3), loner];

        let stats = matching_stats(&pool);
        assert_eq!(stats.total_pairs, 3);
        assert_eq!(stats.passing_hard_filters, 1);
        assert_eq!(stats.average_score, 100.0);
        assert_eq!(stats.high_score_pairs, 1);
    }

    #[test]
    fn test_stats_empty_pool() {
        let stats = matching_stats(&[]);
        assert_eq!(stats.total_pairs, 0);
        assert_eq!(stats.average_score, 0.0);
    }
}
