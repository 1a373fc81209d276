use serde::{Deserialize, Serialize};
use validator::Validate;

/// Filter options for a ranking request.
///
/// Each option is an independent predicate; setting several applies them as
/// a logical AND. An unset option means "do not filter on this dimension."
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct MatchOptions {
    /// Keep only candidates seeking at least one skill the viewer offers.
    #[serde(alias = "skills_only", rename = "skillsOnly", default)]
    pub skills_only: bool,
    /// Keep only candidates sharing at least one interest with the viewer.
    #[serde(alias = "interests_only", rename = "interestsOnly", default)]
    pub interests_only: bool,
    /// Keep only candidates within this many miles of the viewer.
    /// Candidates whose distance is unknown are excluded by this filter.
    #[validate(range(min = 0.0))]
    #[serde(alias = "max_distance", rename = "maxDistance", default)]
    pub max_distance: Option<f64>,
}
