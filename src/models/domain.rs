use serde::{Deserialize, Serialize};

/// Sex assigned at birth, as captured by the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SexAssignedAtBirth {
    #[serde(rename = "SAM")]
    Male,
    #[serde(rename = "SAF")]
    Female,
    #[serde(rename = "PNTS_SAAB")]
    Undisclosed,
}

/// Self-reported gender identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenderIdentity {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "NB")]
    Nonbinary,
    #[serde(rename = "PNTS_GI")]
    Undisclosed,
    #[serde(rename = "OTHER_GI")]
    Other,
}

impl GenderIdentity {
    /// Whether preference-gated searches consult the visibility flags for
    /// this identity instead of matching it directly.
    pub fn visibility_gated(self) -> bool {
        matches!(
            self,
            GenderIdentity::Nonbinary | GenderIdentity::Undisclosed | GenderIdentity::Other
        )
    }
}

/// Opt-in discoverability for profiles whose gender identity is
/// non-binary, undisclosed or other. Absent flags mean not visible to any
/// preference-gated search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityFlags {
    #[serde(rename = "visibleToGimPref", default)]
    pub visible_to_gim_pref: bool,
    #[serde(rename = "visibleToGifPref", default)]
    pub visible_to_gif_pref: bool,
    #[serde(rename = "visibleToSamPref", default)]
    pub visible_to_sam_pref: bool,
    #[serde(rename = "visibleToSafPref", default)]
    pub visible_to_saf_pref: bool,
}

/// The gender/sex class a profile requires in a roommate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoommatePreference {
    #[serde(rename = "ANY")]
    Any,
    #[serde(rename = "GIF_ONLY")]
    GenderFemaleOnly,
    #[serde(rename = "GIM_ONLY")]
    GenderMaleOnly,
    #[serde(rename = "SAF_ONLY")]
    SexFemaleOnly,
    #[serde(rename = "SAM_ONLY")]
    SexMaleOnly,
}

/// Monthly rent share band. Ordered low to high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BudgetBand {
    #[serde(rename = "SHARE_LT8K")]
    Under8k,
    #[serde(rename = "SHARE_8K_10K")]
    From8kTo10k,
    #[serde(rename = "SHARE_10K_12K")]
    From10kTo12k,
    #[serde(rename = "SHARE_12K_15K")]
    From12kTo15k,
    #[serde(rename = "SHARE_15K_18K")]
    From15kTo18k,
    #[serde(rename = "SHARE_18K_22K")]
    From18kTo22k,
    #[serde(rename = "SHARE_GT22K")]
    Over22k,
}

impl BudgetBand {
    /// Wire label for the band, also the input to `leading_amount`.
    pub fn label(self) -> &'static str {
        match self {
            BudgetBand::Under8k => "SHARE_LT8K",
            BudgetBand::From8kTo10k => "SHARE_8K_10K",
            BudgetBand::From10kTo12k => "SHARE_10K_12K",
            BudgetBand::From12kTo15k => "SHARE_12K_15K",
            BudgetBand::From15kTo18k => "SHARE_15K_18K",
            BudgetBand::From18kTo22k => "SHARE_18K_22K",
            BudgetBand::Over22k => "SHARE_GT22K",
        }
    }

    /// First run of digits in the band label. This is the historical
    /// convention for band distance; the hundreds cancel, so adjacent
    /// bands differ by single digits.
    pub fn leading_amount(self) -> u32 {
        let mut amount = 0u32;
        let mut seen_digit = false;
        for c in self.label().chars() {
            if let Some(d) = c.to_digit(10) {
                amount = amount * 10 + d;
                seen_digit = true;
            } else if seen_digit {
                break;
            }
        }
        amount
    }
}

/// Allergy tags. `None` is a sentinel meaning no allergies were reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Allergy {
    #[serde(rename = "ALLERGY_NONE")]
    None,
    #[serde(rename = "ALLERGY_FOOD")]
    Food,
    #[serde(rename = "ALLERGY_PET_DANDER")]
    PetDander,
    #[serde(rename = "ALLERGY_DUST")]
    Dust,
    #[serde(rename = "ALLERGY_POLLEN")]
    Pollen,
    #[serde(rename = "ALLERGY_CHEMICALS")]
    Chemicals,
    #[serde(rename = "ALLERGY_OTHER")]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SmokingHabit {
    #[serde(rename = "SMOKING_NONE")]
    None,
    #[serde(rename = "SMOKING_COMPLIANT_OUTDOORS")]
    OutdoorOnly,
    #[serde(rename = "SMOKING_SOMETIMES_INDOORS")]
    SometimesIndoors,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoommateExperience {
    #[serde(rename = "NO_EXPERIENCE")]
    NoExperience,
    #[serde(rename = "BRIEF_EXPERIENCE")]
    BriefExperience,
    #[serde(rename = "EXTENDED_EXPERIENCE")]
    ExtendedExperience,
    #[serde(rename = "CURRENTLY_LIVING_SEEKING_NEW")]
    CurrentlyLivingSeekingNew,
}

/// The seven bipolar habit scales. Low end is the structured pole
/// (cleans right away, early riser, noise-sensitive), high end the
/// relaxed pole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScaleKind {
    Cleaning,
    Visitors,
    Pets,
    Schedule,
    Interaction,
    NoiseSensitivity,
    Bathroom,
}

impl ScaleKind {
    /// The five scales that feed the lifestyle sub-score.
    pub const PRIMARY: [ScaleKind; 5] = [
        ScaleKind::Cleaning,
        ScaleKind::Visitors,
        ScaleKind::Pets,
        ScaleKind::Schedule,
        ScaleKind::Interaction,
    ];

    pub const ALL: [ScaleKind; 7] = [
        ScaleKind::Cleaning,
        ScaleKind::Visitors,
        ScaleKind::Pets,
        ScaleKind::Schedule,
        ScaleKind::Interaction,
        ScaleKind::NoiseSensitivity,
        ScaleKind::Bathroom,
    ];
}

/// Questionnaire answers on the 1-5 habit scales. Unanswered questions
/// deserialize as `None` and read back as the midpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifestyleScales {
    #[serde(default)]
    pub cleaning: Option<u8>,
    #[serde(default)]
    pub visitors: Option<u8>,
    #[serde(default)]
    pub pets: Option<u8>,
    #[serde(default)]
    pub schedule: Option<u8>,
    #[serde(default)]
    pub interaction: Option<u8>,
    #[serde(rename = "noiseSensitivity", default)]
    pub noise_sensitivity: Option<u8>,
    #[serde(default)]
    pub bathroom: Option<u8>,
}

impl LifestyleScales {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;
    pub const MIDPOINT: u8 = 3;

    /// Value for one scale, clamped to 1-5, midpoint when unanswered.
    pub fn get(&self, kind: ScaleKind) -> u8 {
        let raw = match kind {
            ScaleKind::Cleaning => self.cleaning,
            ScaleKind::Visitors => self.visitors,
            ScaleKind::Pets => self.pets,
            ScaleKind::Schedule => self.schedule,
            ScaleKind::Interaction => self.interaction,
            ScaleKind::NoiseSensitivity => self.noise_sensitivity,
            ScaleKind::Bathroom => self.bathroom,
        };
        raw.unwrap_or(Self::MIDPOINT).clamp(Self::MIN, Self::MAX)
    }
}

/// One user's questionnaire response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "profileId")]
    pub profile_id: String,
    #[serde(rename = "contactAddress", default)]
    pub contact_address: Option<String>,
    #[serde(rename = "sexAssignedAtBirth")]
    pub sex_assigned_at_birth: SexAssignedAtBirth,
    #[serde(rename = "genderIdentity")]
    pub gender_identity: GenderIdentity,
    #[serde(rename = "visibilityFlags", default)]
    pub visibility_flags: Option<VisibilityFlags>,
    #[serde(rename = "roommatePreference")]
    pub roommate_preference: RoommatePreference,
    #[serde(rename = "budgetBand")]
    pub budget_band: BudgetBand,
    #[serde(rename = "locationPreferences")]
    pub location_preferences: Vec<String>,
    #[serde(default)]
    pub allergies: Vec<Allergy>,
    #[serde(rename = "smokingHabit")]
    pub smoking_habit: SmokingHabit,
    #[serde(rename = "lifestyleScales", default)]
    pub scales: LifestyleScales,
    #[serde(default)]
    pub bio: String,
    #[serde(rename = "roommateExperience", default)]
    pub roommate_experience: Option<RoommateExperience>,
    #[serde(rename = "moveInDate", default)]
    pub move_in_date: Option<chrono::NaiveDate>,
}

impl Profile {
    /// Visibility flags with absent treated as all-false.
    pub fn visibility(&self) -> VisibilityFlags {
        self.visibility_flags.unwrap_or_default()
    }

    pub fn allergic_to(&self, allergy: Allergy) -> bool {
        self.allergies.contains(&allergy)
    }
}

/// Per-factor decomposition of a pair score. The four point fields are
/// the wire contract for breakdown bar charts and stay separate from the
/// total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    #[serde(rename = "genderPreference")]
    pub gender_preference: u8,
    pub location: u8,
    pub budget: u8,
    pub lifestyle: u8,
    #[serde(rename = "locationOverlap")]
    pub location_overlap: usize,
    #[serde(rename = "allergyCompatible")]
    pub allergy_compatible: bool,
    #[serde(rename = "smokingCompatible")]
    pub smoking_compatible: bool,
}

impl ScoreBreakdown {
    /// Sum of the four sub-scores; equals the pair score when the pair is
    /// eligible.
    pub fn total(&self) -> u8 {
        self.gender_preference + self.location + self.budget + self.lifestyle
    }
}

/// Outcome of scoring one pair. Constructed on demand, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "profileA")]
    pub profile_a: String,
    #[serde(rename = "profileB")]
    pub profile_b: String,
    pub score: u8,
    pub breakdown: ScoreBreakdown,
    #[serde(rename = "passesFilters")]
    pub passes_filters: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_scales_read_as_midpoint() {
        let scales = LifestyleScales::default();
        for kind in ScaleKind::ALL {
            assert_eq!(scales.get(kind), 3);
        }
    }

    #[test]
    fn test_out_of_range_scale_clamped() {
        let scales = LifestyleScales {
            cleaning: Some(0),
            visitors: Some(9),
            ..Default::default()
        };
        assert_eq!(scales.get(ScaleKind::Cleaning), 1);
        assert_eq!(scales.get(ScaleKind::Visitors), 5);
    }

    #[test]
    fn test_leading_amount_parses_band_labels() {
        assert_eq!(BudgetBand::Under8k.leading_amount(), 8);
        assert_eq!(BudgetBand::From8kTo10k.leading_amount(), 8);
        assert_eq!(BudgetBand::From10kTo12k.leading_amount(), 10);
        assert_eq!(BudgetBand::From12kTo15k.leading_amount(), 12);
        assert_eq!(BudgetBand::From15kTo18k.leading_amount(), 15);
        assert_eq!(BudgetBand::From18kTo22k.leading_amount(), 18);
        assert_eq!(BudgetBand::Over22k.leading_amount(), 22);
    }

    #[test]
    fn test_budget_bands_ordered_by_rent() {
        assert!(BudgetBand::Under8k < BudgetBand::From8kTo10k);
        assert!(BudgetBand::From18kTo22k < BudgetBand::Over22k);
    }

    #[test]
    fn test_visibility_defaults_to_all_false() {
        let profile = Profile {
            profile_id: "p1".to_string(),
            contact_address: None,
            sex_assigned_at_birth: SexAssignedAtBirth::Undisclosed,
            gender_identity: GenderIdentity::Nonbinary,
            visibility_flags: None,
            roommate_preference: RoommatePreference::Any,
            budget_band: BudgetBand::Under8k,
            location_preferences: vec!["Keelung".to_string()],
            allergies: vec![Allergy::None],
            smoking_habit: SmokingHabit::None,
            scales: LifestyleScales::default(),
            bio: String::new(),
            roommate_experience: None,
            move_in_date: None,
        };
        assert_eq!(profile.visibility(), VisibilityFlags::default());
        assert!(!profile.visibility().visible_to_gim_pref);
    }

    #[test]
    fn test_profile_serde_round_trip_uses_wire_tokens() {
        let json = r#"{
            "profileId": "p9",
            "contactAddress": "p9@example.com",
            "sexAssignedAtBirth": "SAF",
            "genderIdentity": "NB",
            "visibilityFlags": { "visibleToGifPref": true },
            "roommatePreference": "ANY",
            "budgetBand": "SHARE_10K_12K",
            "locationPreferences": ["Daan"],
            "allergies": ["ALLERGY_PET_DANDER"],
            "smokingHabit": "SMOKING_COMPLIANT_OUTDOORS",
            "lifestyleScales": { "cleaning": 2, "noiseSensitivity": 4 },
            "bio": "hello",
            "roommateExperience": "BRIEF_EXPERIENCE",
            "moveInDate": "2024-09-01"
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.gender_identity, GenderIdentity::Nonbinary);
        assert!(profile.visibility().visible_to_gif_pref);
        assert!(!profile.visibility().visible_to_sam_pref);
        assert_eq!(profile.budget_band, BudgetBand::From10kTo12k);
        assert!(profile.allergic_to(Allergy::PetDander));
        assert_eq!(profile.scales.get(ScaleKind::Cleaning), 2);
        assert_eq!(profile.scales.get(ScaleKind::Pets), 3);

        let back = serde_json::to_value(&profile).unwrap();
        assert_eq!(back["budgetBand"], "SHARE_10K_12K");
        assert_eq!(back["smokingHabit"], "SMOKING_COMPLIANT_OUTDOORS");
    }

    #[test]
    fn test_breakdown_total() {
        let breakdown = ScoreBreakdown {
            gender_preference: 40,
            location: 20,
            budget: 15,
            lifestyle: 25,
            location_overlap: 1,
            allergy_compatible: true,
            smoking_compatible: true,
        };
        assert_eq!(breakdown.total(), 100);
    }
}
