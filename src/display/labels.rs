use crate::models::{Allergy, BudgetBand, RoommatePreference, SmokingHabit};

/// Human label for a roommate preference.
pub fn preference_label(preference: RoommatePreference) -> &'static str {
    match preference {
        RoommatePreference::Any => "No preference",
        RoommatePreference::GenderFemaleOnly => "Female-identifying only",
        RoommatePreference::GenderMaleOnly => "Male-identifying only",
        RoommatePreference::SexFemaleOnly => "Female (sex at birth) only",
        RoommatePreference::SexMaleOnly => "Male (sex at birth) only",
    }
}

/// Human label for a rent share band.
pub fn budget_label(band: BudgetBand) -> &'static str {
    match band {
        BudgetBand::Under8k => "Under $8,000",
        BudgetBand::From8kTo10k => "$8,000 - $10,000",
        BudgetBand::From10kTo12k => "$10,000 - $12,000",
        BudgetBand::From12kTo15k => "$12,000 - $15,000",
        BudgetBand::From15kTo18k => "$15,000 - $18,000",
        BudgetBand::From18kTo22k => "$18,000 - $22,000",
        BudgetBand::Over22k => "Over $22,000",
    }
}

pub fn allergy_label(allergy: Allergy) -> &'static str {
    match allergy {
        Allergy::None => "None",
        Allergy::Food => "Certain foods",
        Allergy::PetDander => "Pet dander",
        Allergy::Dust => "Dust mites",
        Allergy::Pollen => "Pollen",
        Allergy::Chemicals => "Cleaning products",
        Allergy::Other => "Other",
    }
}

/// Joined allergy list. The `None` sentinel wins over anything else
/// listed alongside it.
pub fn allergies_display(allergies: &[Allergy]) -> String {
    if allergies.is_empty() || allergies.contains(&Allergy::None) {
        return "None".to_string();
    }
    allergies
        .iter()
        .map(|a| allergy_label(*a))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn smoking_label(habit: SmokingHabit) -> &'static str {
    match habit {
        SmokingHabit::None => "Non-smoker",
        SmokingHabit::OutdoorOnly => "Smokes (outdoors only)",
        SmokingHabit::SometimesIndoors => "Smokes (sometimes indoors)",
    }
}

/// Rating word for a pair score.
pub fn score_rating(score: u8) -> &'static str {
    if score >= 90 {
        "Perfect match"
    } else if score >= 80 {
        "Excellent"
    } else if score >= 70 {
        "Great"
    } else if score >= 60 {
        "Good"
    } else if score >= 50 {
        "Fair"
    } else {
        "Low"
    }
}
