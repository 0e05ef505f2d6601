use crate::models::{
    GenderIdentity, Profile, RoommatePreference, ScaleKind, SexAssignedAtBirth, SmokingHabit,
    Allergy, BudgetBand,
};

/// Whether `preference` accepts `candidate`. Candidates with a gated
/// gender identity (non-binary, undisclosed, other) are matched through
/// their visibility flags instead of the identity itself.
#[inline]
pub fn accepts_candidate(preference: RoommatePreference, candidate: &Profile) -> bool {
    match preference {
        RoommatePreference::Any => true,
        RoommatePreference::GenderMaleOnly => {
            if candidate.gender_identity == GenderIdentity::Male {
                true
            } else if candidate.gender_identity.visibility_gated() {
                candidate.visibility().visible_to_gim_pref
            } else {
                false
            }
        }
        RoommatePreference::GenderFemaleOnly => {
            if candidate.gender_identity == GenderIdentity::Female {
                true
            } else if candidate.gender_identity.visibility_gated() {
                candidate.visibility().visible_to_gif_pref
            } else {
                false
            }
        }
        RoommatePreference::SexMaleOnly => {
            if candidate.sex_assigned_at_birth == SexAssignedAtBirth::Male {
                true
            } else if candidate.gender_identity.visibility_gated() {
                candidate.visibility().visible_to_sam_pref
            } else {
                false
            }
        }
        RoommatePreference::SexFemaleOnly => {
            if candidate.sex_assigned_at_birth == SexAssignedAtBirth::Female {
                true
            } else if candidate.gender_identity.visibility_gated() {
                candidate.visibility().visible_to_saf_pref
            } else {
                false
            }
        }
    }
}

/// Both sides accept each other's gender/sex class.
#[inline]
pub fn preference_compatible(a: &Profile, b: &Profile) -> bool {
    accepts_candidate(a.roommate_preference, b) && accepts_candidate(b.roommate_preference, a)
}

/// Number of area-string pairs where one side contains the other.
/// Case-sensitive; "Daan" overlaps "Taipei Daan District".
#[inline]
pub fn location_overlap_count(a: &Profile, b: &Profile) -> usize {
    a.location_preferences
        .iter()
        .flat_map(|mine| {
            b.location_preferences
                .iter()
                .filter(move |theirs| mine.contains(theirs.as_str()) || theirs.contains(mine.as_str()))
        })
        .count()
}

/// Budget bands must be identical to share a lease. Near-band tolerance
/// only affects scoring, never eligibility.
#[inline]
pub fn budgets_aligned(a: BudgetBand, b: BudgetBand) -> bool {
    a == b
}

/// Fails when one side reports a pet-dander allergy and the other maxes
/// the pet scale (owns or definitely wants pets). Checked both ways.
#[inline]
pub fn allergy_compatible(a: &Profile, b: &Profile) -> bool {
    let a_blocked = a.allergic_to(Allergy::PetDander) && b.scales.get(ScaleKind::Pets) == 5;
    let b_blocked = b.allergic_to(Allergy::PetDander) && a.scales.get(ScaleKind::Pets) == 5;
    !a_blocked && !b_blocked
}

/// An indoor smoker cannot live with a non-smoker.
#[inline]
pub fn smoking_compatible(a: &Profile, b: &Profile) -> bool {
    if a.smoking_habit == SmokingHabit::SometimesIndoors && b.smoking_habit == SmokingHabit::None {
        return false;
    }
    if b.smoking_habit == SmokingHabit::SometimesIndoors && a.smoking_habit == SmokingHabit::None {
        return false;
    }
    true
}

/// All five hard filters. Any failure makes the pair ineligible and
/// forces its score to zero.
pub fn passes_hard_filters(a: &Profile, b: &Profile) -> bool {
    if !preference_compatible(a, b) {
        return false;
    }
    if location_overlap_count(a, b) == 0 {
        return false;
    }
    if !budgets_aligned(a.budget_band, b.budget_band) {
        return false;
    }
    if !allergy_compatible(a, b) {
        return false;
    }
    if !smoking_compatible(a, b) {
        return false;
    }
    true
}
