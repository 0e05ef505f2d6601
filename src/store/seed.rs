use chrono::NaiveDate;

use crate::models::{
    Allergy, BudgetBand, GenderIdentity, LifestyleScales, Profile, RoommateExperience,
    RoommatePreference, SexAssignedAtBirth, SmokingHabit, VisibilityFlags,
};

fn scales(
    cleaning: u8,
    visitors: u8,
    pets: u8,
    schedule: u8,
    interaction: u8,
    noise: u8,
    bathroom: u8,
) -> LifestyleScales {
    LifestyleScales {
        cleaning: Some(cleaning),
        visitors: Some(visitors),
        pets: Some(pets),
        schedule: Some(schedule),
        interaction: Some(interaction),
        noise_sensitivity: Some(noise),
        bathroom: Some(bathroom),
    }
}

/// Built-in demo roster.
///
/// Nine profiles covering every preference and smoking variant, partial
/// visibility flags, an allergy conflict, and one deliberately
/// unmatchable profile. Insertion order here is the order the store
/// serves, so ranked ties resolve top to bottom of this list.
pub fn demo_profiles() -> Vec<Profile> {
    vec![
        Profile {
            profile_id: "han".to_string(),
            contact_address: Some("han@example.com".to_string()),
            sex_assigned_at_birth: SexAssignedAtBirth::Female,
            gender_identity: GenderIdentity::Female,
            visibility_flags: None,
            roommate_preference: RoommatePreference::Any,
            budget_band: BudgetBand::From10kTo12k,
            location_preferences: vec!["Daan".to_string(), "Xinyi".to_string()],
            allergies: vec![Allergy::None],
            smoking_habit: SmokingHabit::None,
            scales: scales(2, 2, 5, 4, 3, 2, 3),
            bio: "Graphic designer with two cats, looking for a calm flat to share."
                .to_string(),
            roommate_experience: Some(RoommateExperience::ExtendedExperience),
            move_in_date: NaiveDate::from_ymd_opt(2026, 9, 1),
        },
        Profile {
            profile_id: "ruby".to_string(),
            contact_address: Some("ruby@example.com".to_string()),
            sex_assigned_at_birth: SexAssignedAtBirth::Female,
            gender_identity: GenderIdentity::Female,
            visibility_flags: None,
            roommate_preference: RoommatePreference::GenderFemaleOnly,
            budget_band: BudgetBand::From10kTo12k,
            location_preferences: vec!["Xinyi".to_string(), "Songshan".to_string()],
            allergies: vec![Allergy::None],
            smoking_habit: SmokingHabit::None,
            scales: scales(1, 2, 2, 2, 2, 1, 2),
            bio: "Office worker with early meetings. I keep shared spaces spotless."
                .to_string(),
            roommate_experience: Some(RoommateExperience::BriefExperience),
            move_in_date: NaiveDate::from_ymd_opt(2026, 10, 1),
        },
        Profile {
            profile_id: "yuchun".to_string(),
            contact_address: Some("yuchun@example.com".to_string()),
            sex_assigned_at_birth: SexAssignedAtBirth::Female,
            gender_identity: GenderIdentity::Female,
            visibility_flags: None,
            roommate_preference: RoommatePreference::SexFemaleOnly,
            budget_band: BudgetBand::From10kTo12k,
            location_preferences: vec!["Zhongshan".to_string(), "Daan".to_string()],
            allergies: vec![Allergy::None],
            smoking_habit: SmokingHabit::None,
            // No scale answers; every axis reads as the midpoint.
            scales: LifestyleScales::default(),
            bio: "Software engineer working remote most days, quiet in the evenings."
                .to_string(),
            roommate_experience: Some(RoommateExperience::NoExperience),
            move_in_date: None,
        },
        Profile {
            profile_id: "pomelo".to_string(),
            contact_address: Some("pomelo@example.com".to_string()),
            sex_assigned_at_birth: SexAssignedAtBirth::Female,
            gender_identity: GenderIdentity::Female,
            visibility_flags: None,
            roommate_preference: RoommatePreference::GenderFemaleOnly,
            budget_band: BudgetBand::From10kTo12k,
            location_preferences: vec!["Songshan".to_string(), "Neihu".to_string()],
            allergies: vec![Allergy::None],
            smoking_habit: SmokingHabit::None,
            scales: scales(2, 1, 5, 5, 2, 3, 4),
            bio: "Night-shift nurse with a cat named Pomelo. Home mostly at odd hours."
                .to_string(),
            roommate_experience: None,
            move_in_date: None,
        },
        Profile {
            profile_id: "vivian".to_string(),
            contact_address: Some("vivian@example.com".to_string()),
            sex_assigned_at_birth: SexAssignedAtBirth::Female,
            gender_identity: GenderIdentity::Female,
            visibility_flags: None,
            roommate_preference: RoommatePreference::SexFemaleOnly,
            budget_band: BudgetBand::From10kTo12k,
            location_preferences: vec!["Songshan".to_string(), "Xinyi".to_string()],
            allergies: vec![Allergy::PetDander],
            smoking_habit: SmokingHabit::None,
            scales: scales(1, 2, 1, 2, 3, 1, 2),
            bio: "Allergic to pet dander, so a fur-free home please. Tidy, up early for runs."
                .to_string(),
            roommate_experience: None,
            move_in_date: NaiveDate::from_ymd_opt(2026, 9, 15),
        },
        Profile {
            profile_id: "vivi".to_string(),
            contact_address: Some("vivi@example.com".to_string()),
            sex_assigned_at_birth: SexAssignedAtBirth::Male,
            gender_identity: GenderIdentity::Male,
            visibility_flags: None,
            roommate_preference: RoommatePreference::GenderFemaleOnly,
            budget_band: BudgetBand::From15kTo18k,
            location_preferences: vec!["Daan".to_string()],
            allergies: vec![Allergy::None],
            smoking_habit: SmokingHabit::OutdoorOnly,
            scales: scales(3, 4, 3, 4, 4, 3, 3),
            bio: "Freelancer who dog-sits a golden retriever most weekends.".to_string(),
            roommate_experience: None,
            move_in_date: None,
        },
        Profile {
            profile_id: "willy".to_string(),
            contact_address: Some("willy@example.com".to_string()),
            sex_assigned_at_birth: SexAssignedAtBirth::Male,
            gender_identity: GenderIdentity::Nonbinary,
            visibility_flags: Some(VisibilityFlags {
                visible_to_gim_pref: true,
                visible_to_gif_pref: false,
                visible_to_sam_pref: true,
                visible_to_saf_pref: false,
            }),
            roommate_preference: RoommatePreference::Any,
            budget_band: BudgetBand::From8kTo10k,
            location_preferences: vec!["Banqiao".to_string(), "Zhonghe".to_string()],
            allergies: vec![Allergy::Dust],
            smoking_habit: SmokingHabit::OutdoorOnly,
            scales: scales(2, 3, 3, 3, 3, 2, 3),
            bio: "Spare room in my place near the river park. Out at the studio most days."
                .to_string(),
            roommate_experience: Some(RoommateExperience::CurrentlyLivingSeekingNew),
            move_in_date: None,
        },
        Profile {
            profile_id: "mochi".to_string(),
            contact_address: Some("mochi@example.com".to_string()),
            sex_assigned_at_birth: SexAssignedAtBirth::Undisclosed,
            gender_identity: GenderIdentity::Undisclosed,
            visibility_flags: None,
            roommate_preference: RoommatePreference::SexMaleOnly,
            budget_band: BudgetBand::Under8k,
            location_preferences: vec!["Keelung".to_string()],
            allergies: vec![Allergy::None],
            smoking_habit: SmokingHabit::SometimesIndoors,
            scales: LifestyleScales {
                cleaning: Some(1),
                visitors: Some(1),
                pets: Some(1),
                schedule: Some(1),
                interaction: Some(1),
                noise_sensitivity: Some(5),
                bathroom: None,
            },
            bio: String::new(),
            roommate_experience: None,
            move_in_date: None,
        },
        Profile {
            profile_id: "leo".to_string(),
            contact_address: Some("leo@example.com".to_string()),
            sex_assigned_at_birth: SexAssignedAtBirth::Male,
            gender_identity: GenderIdentity::Male,
            visibility_flags: None,
            roommate_preference: RoommatePreference::GenderMaleOnly,
            budget_band: BudgetBand::From8kTo10k,
            location_preferences: vec!["Banqiao".to_string(), "Shulin".to_string()],
            allergies: vec![Allergy::None],
            smoking_habit: SmokingHabit::None,
            scales: scales(2, 2, 3, 3, 2, 2, 3),
            bio: "Grad student at NTU. Library days, gym evenings.".to_string(),
            roommate_experience: None,
            move_in_date: None,
        },
    ]
}
