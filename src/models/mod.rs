// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Allergy, BudgetBand, GenderIdentity, LifestyleScales, MatchResult, Profile,
    RoommateExperience, RoommatePreference, ScaleKind, ScoreBreakdown, SexAssignedAtBirth,
    SmokingHabit, VisibilityFlags,
};
pub use requests::{ProfileLookupQuery, ShowcaseQuery};
pub use responses::{
    BrowseResponse, ErrorResponse, HealthResponse, LookupResponse, MatchCard, ProfileCard,
    ShowcasePair, ShowcaseResponse,
};
