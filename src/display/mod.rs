// Presentation exports
pub mod cards;
pub mod labels;

pub use cards::{
    display_tag, match_card, obfuscate_contact, preference_bullets, profile_card, showcase_pair,
};
pub use labels::{
    allergies_display, allergy_label, budget_label, preference_label, score_rating, smoking_label,
};
