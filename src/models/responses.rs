use serde::{Deserialize, Serialize};

use crate::core::matcher::MatchingStats;
use crate::models::domain::{Profile, ScoreBreakdown};

/// Obfuscated summary card for the browse view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileCard {
    #[serde(rename = "profileId")]
    pub profile_id: String,
    pub tag: String,
    pub seeking: String,
    pub bullets: Vec<String>,
    pub budget: String,
    pub locations: Vec<String>,
    pub smoking: String,
    pub allergies: String,
    pub contact: String,
}

/// Response for the browse endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowseResponse {
    pub profiles: Vec<ProfileCard>,
    pub total: usize,
}

/// One ranked match inside a lookup response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchCard {
    #[serde(rename = "profileId")]
    pub profile_id: String,
    pub tag: String,
    pub contact: String,
    pub score: u8,
    pub rating: String,
    pub breakdown: ScoreBreakdown,
}

/// Response for a single-profile lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupResponse {
    pub profile: Profile,
    pub matches: Vec<MatchCard>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// One pair in the all-pairs showcase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowcasePair {
    #[serde(rename = "profileA")]
    pub profile_a: String,
    #[serde(rename = "profileB")]
    pub profile_b: String,
    pub score: u8,
    pub rating: String,
    pub breakdown: ScoreBreakdown,
}

/// Response for the showcase endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowcaseResponse {
    pub matches: Vec<ShowcasePair>,
    pub stats: MatchingStats,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub profiles: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::{
        Allergy, BudgetBand, GenderIdentity, LifestyleScales, RoommatePreference,
        SexAssignedAtBirth, SmokingHabit,
    };

    #[test]
    fn test_lookup_response_serializes_camel_case_keys() {
        let profile = Profile {
            profile_id: "han".to_string(),
            contact_address: Some("han@example.com".to_string()),
            sex_assigned_at_birth: SexAssignedAtBirth::Female,
            gender_identity: GenderIdentity::Female,
            visibility_flags: None,
            roommate_preference: RoommatePreference::Any,
            budget_band: BudgetBand::From10kTo12k,
            location_preferences: vec!["Daan".to_string()],
            allergies: vec![Allergy::None],
            smoking_habit: SmokingHabit::None,
            scales: LifestyleScales::default(),
            bio: String::new(),
            roommate_experience: None,
            move_in_date: None,
        };
        let response = LookupResponse {
            profile,
            matches: Vec::new(),
            total_candidates: 8,
        };

        let value = serde_json::to_value(&response).unwrap();
        let mut keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["matches", "profile", "totalCandidates"]);
        assert_eq!(value["totalCandidates"], 8);
    }
}
