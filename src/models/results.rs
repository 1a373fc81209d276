use serde::{Deserialize, Serialize};

use crate::models::domain::{Proficiency, User};

/// A scored candidate: the user record plus the derived match fields.
///
/// Created fresh per ranking or lookup call and never persisted; the
/// embedded user is a copy, so the caller's population stays untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(flatten)]
    pub user: User,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    #[serde(rename = "matchDetails")]
    pub match_details: Rationale,
    /// Miles from the viewer; present only when both sides have a location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

/// The explainable breakdown of why two users matched.
///
/// Every entry corresponds to an actual case-insensitive name match found by
/// the scorer; the builder never reports a pairing the scorer did not count.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rationale {
    /// Skills the viewer has that the candidate is seeking.
    #[serde(rename = "skillsYouOffer", default)]
    pub skills_you_offer: Vec<OfferedSkill>,
    /// Skills the candidate has that the viewer is seeking.
    #[serde(rename = "skillsTheyOffer", default)]
    pub skills_they_offer: Vec<RequestedSkill>,
    /// Interest labels present in both sets, in the viewer's casing.
    #[serde(rename = "sharedInterests", default)]
    pub shared_interests: Vec<String>,
}

impl Rationale {
    pub fn is_empty(&self) -> bool {
        self.skills_you_offer.is_empty()
            && self.skills_they_offer.is_empty()
            && self.shared_interests.is_empty()
    }
}

/// A skill the viewer could teach the candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferedSkill {
    pub skill: String,
    pub category: String,
    #[serde(rename = "yourLevel")]
    pub your_level: Proficiency,
    /// The candidate's stated experience level for this skill.
    #[serde(rename = "theirInterest")]
    pub their_interest: String,
}

/// A skill the candidate could teach the viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestedSkill {
    pub skill: String,
    pub category: String,
    #[serde(rename = "theirLevel")]
    pub their_level: Proficiency,
    /// The viewer's stated experience level for this skill.
    #[serde(rename = "yourInterest")]
    pub your_interest: String,
}
