use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query params for profile browse and lookup
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProfileLookupQuery {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub id: Option<String>,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub contact: Option<String>,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub location: Option<String>,
}

/// Query params for the all-pairs showcase
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ShowcaseQuery {
    #[validate(range(min = 0, max = 100))]
    #[serde(default)]
    #[serde(alias = "min_score", rename = "minScore")]
    pub min_score: Option<u8>,
}
