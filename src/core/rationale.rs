use std::collections::HashMap;

use crate::core::scoring::skill_names_match;
use crate::models::{OfferedSkill, Rationale, RequestedSkill, User};

/// Build the human-readable rationale for a viewer/candidate pairing
///
/// Walks the same skill and interest pairings the scorer counts, using the
/// same case-insensitive predicate, so the rationale and the score always
/// describe the same set of matches. One entry is recorded per matched pair,
/// duplicates included.
pub fn build_rationale(viewer: &User, candidate: &User) -> Rationale {
    let mut details = Rationale::default();

    // Skills the viewer offers that the candidate is seeking
    for skill in &viewer.skills {
        for item in &candidate.seeking {
            if skill_names_match(&skill.specific, &item.skill) {
                details.skills_you_offer.push(OfferedSkill {
                    skill: skill.specific.clone(),
                    category: skill.category.clone(),
                    your_level: skill.proficiency,
                    their_interest: item.experience_level.clone(),
                });
            }
        }
    }

    // Skills the candidate offers that the viewer is seeking
    for item in &viewer.seeking {
        for skill in &candidate.skills {
            if skill_names_match(&item.skill, &skill.specific) {
                details.skills_they_offer.push(RequestedSkill {
                    skill: skill.specific.clone(),
                    category: skill.category.clone(),
                    their_level: skill.proficiency,
                    your_interest: item.experience_level.clone(),
                });
            }
        }
    }

    // Shared interests, reported in the viewer's original casing. First
    // occurrence wins if the viewer lists the same label twice.
    let mut viewer_labels: HashMap<String, &str> = HashMap::new();
    for interest in &viewer.interests {
        viewer_labels
            .entry(interest.to_lowercase())
            .or_insert(interest.as_str());
    }
    for interest in &candidate.interests {
        if let Some(label) = viewer_labels.get(&interest.to_lowercase()) {
            details.shared_interests.push((*label).to_string());
        }
    }

    details
}
