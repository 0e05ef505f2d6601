use crate::core::filters::{
    allergy_compatible, budgets_aligned, location_overlap_count, passes_hard_filters,
    preference_compatible, smoking_compatible,
};
use crate::core::lifestyle::habit_closeness;
use crate::models::{BudgetBand, MatchResult, Profile, ScoreBreakdown};

/// Points awarded when gender/sex preferences match in both directions.
pub const GENDER_POINTS: u8 = 40;
/// Points awarded for any location overlap.
pub const LOCATION_POINTS: u8 = 20;
/// Points awarded for identical budget bands.
pub const BUDGET_POINTS_EQUAL: u8 = 15;
/// Maximum lifestyle points, reached when all five primary scales agree.
pub const LIFESTYLE_POINTS_MAX: u8 = 25;

/// Compute the 0-100 compatibility score for a pair.
///
/// Scoring formula (points, max 100):
///   gender preference  40  all-or-nothing, both directions
///   location overlap   20  all-or-nothing
///   budget band        15  equal, 10/5 by label distance otherwise
///   lifestyle          25  closeness over the five primary scales
///
/// Any hard-filter failure zeroes the score; the breakdown still carries
/// the per-factor values so callers can explain the rejection.
pub fn score_pair(a: &Profile, b: &Profile) -> MatchResult {
    let breakdown = score_breakdown(a, b);
    let passes_filters = passes_hard_filters(a, b);
    let score = if passes_filters { breakdown.total() } else { 0 };

    MatchResult {
        profile_a: a.profile_id.clone(),
        profile_b: b.profile_id.clone(),
        score,
        breakdown,
        passes_filters,
    }
}

/// Per-factor sub-scores for a pair, computed without the hard-filter
/// veto.
pub fn score_breakdown(a: &Profile, b: &Profile) -> ScoreBreakdown {
    let location_overlap = location_overlap_count(a, b);

    ScoreBreakdown {
        gender_preference: if preference_compatible(a, b) { GENDER_POINTS } else { 0 },
        location: if location_overlap > 0 { LOCATION_POINTS } else { 0 },
        budget: budget_points(a.budget_band, b.budget_band),
        lifestyle: habit_closeness(&a.scales, &b.scales),
        location_overlap,
        allergy_compatible: allergy_compatible(a, b),
        smoking_compatible: smoking_compatible(a, b),
    }
}

/// Budget sub-score. Equal bands take full points; otherwise the distance
/// between the leading numeric tokens of the band labels picks the tier.
/// The labels carry thousands as single digits, so every unequal band
/// pair lands in the first tier; kept as the historical convention.
#[inline]
fn budget_points(a: BudgetBand, b: BudgetBand) -> u8 {
    if budgets_aligned(a, b) {
        return BUDGET_POINTS_EQUAL;
    }
    let diff = a.leading_amount().abs_diff(b.leading_amount());
    if diff <= 2000 {
        10
    } else if diff <= 4000 {
        5
    } else {
        0
    }
}
