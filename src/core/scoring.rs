use std::collections::HashSet;

use crate::core::distance::distance_between_users;
use crate::models::{MatchWeights, User};

/// Case-insensitive skill name equality, the single matching predicate shared
/// by the scorer, the rationale builder, and the candidate filters.
#[inline]
pub(crate) fn skill_names_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Lowercased interest labels for membership checks.
#[inline]
pub(crate) fn interest_set(user: &User) -> HashSet<String> {
    user.interests.iter().map(|i| i.to_lowercase()).collect()
}

/// Calculate a match score (0-100) between a viewer and one candidate
///
/// Scoring rule, additive before capping:
/// - +20 per (viewer skill, candidate seeking) name pair
/// - +20 per (viewer seeking, candidate skill) name pair
/// - +5 per candidate interest shared with the viewer
/// - proximity bonus `max(0, 15 - (miles - 1) * 3)` when both locations
///   are known; exceeds 15 below one mile, the final cap handles that
///
/// Deterministic and pure, but not symmetric: the two directional skill
/// rules carry different rationale semantics per side.
pub fn calculate_match_score(viewer: &User, candidate: &User, weights: &MatchWeights) -> u8 {
    let mut score = 0.0;

    // Viewer skills the candidate is seeking. Deliberately counted per pair:
    // duplicate names on either side each add points, which is observable
    // production scoring behavior.
    for skill in &viewer.skills {
        for item in &candidate.seeking {
            if skill_names_match(&skill.specific, &item.skill) {
                score += weights.skill_exchange;
            }
        }
    }

    // Candidate skills the viewer is seeking
    for item in &viewer.seeking {
        for skill in &candidate.skills {
            if skill_names_match(&item.skill, &skill.specific) {
                score += weights.skill_exchange;
            }
        }
    }

    // Shared interests, driven by a viewer-interest membership set so each
    // candidate interest is checked exactly once
    let viewer_interests = interest_set(viewer);
    for interest in &candidate.interests {
        if viewer_interests.contains(&interest.to_lowercase()) {
            score += weights.shared_interest;
        }
    }

    // Proximity bonus only applies when the distance is known
    if let Some(miles) = distance_between_users(viewer, candidate) {
        score += proximity_bonus(miles, weights);
    }

    score.min(100.0).round() as u8
}

/// Distance-derived scoring contribution.
///
/// Exactly `proximity_max` at one mile, decreasing linearly to zero at six
/// miles (with default weights) and floored there. Sub-mile distances yield
/// more than `proximity_max`; the overall score cap is the only ceiling.
#[inline]
pub fn proximity_bonus(distance_miles: f64, weights: &MatchWeights) -> f64 {
    (weights.proximity_max - (distance_miles - 1.0) * weights.proximity_falloff).max(0.0)
}
