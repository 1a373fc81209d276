use serde::{Deserialize, Serialize};

/// A user record as supplied by the user directory.
///
/// Users are read-only inputs to the engine: scoring and ranking never
/// mutate a `User`, they only read it and produce derived output records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    /// Missing location disables proximity scoring and distance filtering
    /// for this user; it is a data condition, not an error.
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(rename = "profilePhotoUrl", default)]
    pub profile_photo_url: Option<String>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    /// Interest labels; compared case-insensitively, original casing kept
    /// for display.
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub seeking: Vec<SeekingItem>,
    #[serde(rename = "verificationStatus", default)]
    pub verification_status: VerificationStatus,
}

impl User {
    /// Helper to check whether proximity logic can apply to this user.
    pub fn has_location(&self) -> bool {
        self.location.is_some()
    }
}

/// Geographic position plus a human-readable place name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    #[serde(rename = "displayName")]
    pub display_name: String,
}

/// A capability a user can offer. Matching is performed on `specific` only,
/// case-insensitively; the remaining fields are display metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub category: String,
    pub specific: String,
    pub proficiency: Proficiency,
    #[serde(default)]
    pub availability: String,
    #[serde(default)]
    pub description: String,
}

/// Self-reported proficiency in an offered skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Expert,
}

impl std::fmt::Display for Proficiency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Proficiency::Beginner => write!(f, "beginner"),
            Proficiency::Intermediate => write!(f, "intermediate"),
            Proficiency::Expert => write!(f, "expert"),
        }
    }
}

/// A capability a user wants to learn. `skill` is matched against
/// `Skill.specific`; `experience_level` is free text used only for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeekingItem {
    pub skill: String,
    #[serde(rename = "experienceLevel", default)]
    pub experience_level: String,
}

/// Profile verification state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    Verified,
    Pending,
    Unverified,
}

impl Default for VerificationStatus {
    fn default() -> Self {
        VerificationStatus::Unverified
    }
}

/// Scoring weights for the compatibility heuristic.
///
/// Defaults reproduce the production scoring rule: 20 points per skill
/// exchange pair, 5 per shared interest, and a proximity bonus of 15 at one
/// mile falling off by 3 points per mile.
#[derive(Debug, Clone, Copy)]
pub struct MatchWeights {
    /// Points per (skill, seeking) name pair, counted in both directions.
    pub skill_exchange: f64,
    /// Points per candidate interest also present in the viewer's set.
    pub shared_interest: f64,
    /// Proximity bonus at exactly one mile.
    pub proximity_max: f64,
    /// Bonus points lost per mile beyond the first.
    pub proximity_falloff: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            skill_exchange: 20.0,
            shared_interest: 5.0,
            proximity_max: 15.0,
            proximity_falloff: 3.0,
        }
    }
}
