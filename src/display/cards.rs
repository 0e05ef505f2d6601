use crate::display::labels::{
    allergies_display, budget_label, preference_label, score_rating, smoking_label,
};
use crate::models::{
    MatchCard, MatchResult, Profile, ProfileCard, ScaleKind, SexAssignedAtBirth, ShowcasePair,
};

/// Card tag: a gender word plus one highlight feature.
///
/// Highlight priority: strong pet score, then a pet mention in the bio,
/// then an occupation keyword, then an advertised spare room, then the
/// generic fallback.
pub fn display_tag(profile: &Profile) -> String {
    let gender = match profile.sex_assigned_at_birth {
        SexAssignedAtBirth::Female => "Female",
        SexAssignedAtBirth::Male => "Male",
        SexAssignedAtBirth::Undisclosed => "Non-binary",
    };
    format!("{gender} · {}", highlight_feature(profile))
}

fn highlight_feature(profile: &Profile) -> &'static str {
    let bio = profile.bio.to_lowercase();
    if profile.scales.get(ScaleKind::Pets) >= 4 {
        "Pet lover"
    } else if bio_mentions(&bio, "cat") {
        "Cat owner"
    } else if bio_mentions(&bio, "dog") {
        "Dog owner"
    } else if bio.contains("engineer") {
        "Software engineer"
    } else if bio.contains("office") {
        "Office worker"
    } else if bio.contains("student") {
        "Student"
    } else if bio.contains("spare room") || bio.contains("room to share") {
        "Has a room to share"
    } else {
        "Looking for a roommate"
    }
}

// Whole-word match so "location" never reads as a cat.
fn bio_mentions(bio_lower: &str, word: &str) -> bool {
    bio_lower
        .split(|c: char| !c.is_ascii_alphanumeric())
        .any(|token| token == word || token.strip_suffix('s') == Some(word))
}

/// Up to five natural-language bullets from the primary scale answers,
/// topped up with a bio snippet when the answers alone say little.
pub fn preference_bullets(profile: &Profile) -> Vec<String> {
    let mut bullets: Vec<String> = Vec::new();
    let scales = &profile.scales;
    let tag_mentions_pets = matches!(
        highlight_feature(profile),
        "Pet lover" | "Cat owner" | "Dog owner"
    );

    let schedule = scales.get(ScaleKind::Schedule);
    if schedule <= 2 {
        bullets.push("Early to bed, early to rise".to_string());
    } else if schedule >= 4 {
        bullets.push("Night owl".to_string());
    }

    let cleaning = scales.get(ScaleKind::Cleaning);
    if cleaning <= 2 {
        bullets.push("Cleans up the moment it's needed".to_string());
    } else if cleaning >= 4 {
        bullets.push("Laid back about chores".to_string());
    }

    let visitors = scales.get(ScaleKind::Visitors);
    if visitors <= 2 {
        bullets.push("Prefers a quiet home with few visitors".to_string());
    } else if visitors >= 4 {
        bullets.push("Happy to have friends over".to_string());
    }

    // The tag already covers a strong pet stance.
    if !tag_mentions_pets {
        let pets = scales.get(ScaleKind::Pets);
        if pets >= 4 {
            bullets.push("Loves animals, hopes you do too".to_string());
        } else if pets <= 2 {
            bullets.push("Not keen on pets".to_string());
        }
    }

    let interaction = scales.get(ScaleKind::Interaction);
    if interaction >= 4 {
        bullets.push("Enjoys hanging out with roommates".to_string());
    } else if interaction <= 2 {
        bullets.push("Keeps a comfortable distance".to_string());
    }

    if profile.bio.chars().count() > 10 && bullets.len() < 4 {
        bullets.push(bio_snippet(&profile.bio));
    }

    bullets.truncate(5);
    bullets
}

fn bio_snippet(bio: &str) -> String {
    let mut snippet: String = bio.chars().take(30).collect();
    if bio.chars().count() > 30 {
        snippet.push_str("...");
    }
    snippet
}

/// Obfuscated contact for cards. Everything before the first `@` is the
/// visible part; at most three characters of it survive.
pub fn obfuscate_contact(contact: Option<&str>) -> String {
    let Some(address) = contact else {
        return "***".to_string();
    };
    let local = address.split_once('@').map_or(address, |(local, _)| local);
    let head: String = local.chars().take(3).collect();
    format!("{head}***")
}

/// Browse card for one profile.
pub fn profile_card(profile: &Profile) -> ProfileCard {
    ProfileCard {
        profile_id: profile.profile_id.clone(),
        tag: display_tag(profile),
        seeking: preference_label(profile.roommate_preference).to_string(),
        bullets: preference_bullets(profile),
        budget: budget_label(profile.budget_band).to_string(),
        locations: profile.location_preferences.clone(),
        smoking: smoking_label(profile.smoking_habit).to_string(),
        allergies: allergies_display(&profile.allergies),
        contact: obfuscate_contact(profile.contact_address.as_deref()),
    }
}

/// Ranked-match card shown under a lookup.
pub fn match_card(result: &MatchResult, candidate: &Profile) -> MatchCard {
    MatchCard {
        profile_id: candidate.profile_id.clone(),
        tag: display_tag(candidate),
        contact: obfuscate_contact(candidate.contact_address.as_deref()),
        score: result.score,
        rating: score_rating(result.score).to_string(),
        breakdown: result.breakdown,
    }
}

/// Showcase row for one scored pair.
pub fn showcase_pair(result: &MatchResult) -> ShowcasePair {
    ShowcasePair {
        profile_a: result.profile_a.clone(),
        profile_b: result.profile_b.clone(),
        score: result.score,
        rating: score_rating(result.score).to_string(),
        breakdown: result.breakdown,
    }
}
