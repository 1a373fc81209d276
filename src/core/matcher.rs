use tracing::debug;

use crate::core::{
    distance::distance_between_users, filters::filter_candidates, rationale::build_rationale,
    scoring::calculate_match_score,
};
use crate::directory::UserDirectory;
use crate::error::MatchError;
use crate::models::{Candidate, MatchOptions, MatchWeights, User};

/// Ranking pipeline orchestrator
///
/// # Pipeline Stages
/// 1. Exclude the viewer from the population
/// 2. Apply the candidate filters
/// 3. Score each survivor and build its rationale
/// 4. Stable sort descending by match score
///
/// Every operation is a pure computation over the arguments: no shared
/// state, no I/O, nothing mutated. Truncation ("top 5") is left to callers.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    weights: MatchWeights,
}

impl Matcher {
    pub fn new(weights: MatchWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: MatchWeights::default(),
        }
    }

    /// Score one user against the viewer, producing a fresh candidate record.
    fn evaluate(&self, viewer: &User, user: &User) -> Candidate {
        Candidate {
            user: user.clone(),
            match_score: calculate_match_score(viewer, user, &self.weights),
            match_details: build_rationale(viewer, user),
            distance: distance_between_users(viewer, user),
        }
    }

    /// Rank a candidate population for a viewer
    ///
    /// Returns the full ordered sequence, highest score first. Ties keep the
    /// relative order candidates had in the input population (stable sort),
    /// so identical inputs always yield identical output.
    pub fn rank_candidates(
        &self,
        viewer: &User,
        population: &[User],
        options: &MatchOptions,
    ) -> Vec<Candidate> {
        let kept = filter_candidates(viewer, population, options);
        debug!(
            viewer = %viewer.id,
            population = population.len(),
            kept = kept.len(),
            "filtered candidate population"
        );

        let mut candidates: Vec<Candidate> = kept
            .into_iter()
            .map(|user| self.evaluate(viewer, user))
            .collect();

        // Vec::sort_by is stable; equal scores preserve input order
        candidates.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        candidates
    }

    /// Score a single identified candidate, without filtering
    ///
    /// Used when the caller already knows which candidate it wants details
    /// for. Absence from the population is a distinct not-found outcome.
    pub fn lookup_candidate(
        &self,
        viewer: &User,
        population: &[User],
        candidate_id: &str,
    ) -> Result<Candidate, MatchError> {
        let user = population
            .iter()
            .find(|user| user.id == candidate_id)
            .ok_or_else(|| MatchError::CandidateNotFound(candidate_id.to_string()))?;

        Ok(self.evaluate(viewer, user))
    }

    /// Rank candidates for a viewer known only by id, resolving both the
    /// viewer record and the population through a user directory.
    pub fn rank_for<D: UserDirectory>(
        &self,
        viewer_id: &str,
        directory: &D,
        options: &MatchOptions,
    ) -> Result<Vec<Candidate>, MatchError> {
        let viewer = directory
            .user(viewer_id)
            .ok_or_else(|| MatchError::ViewerNotFound(viewer_id.to_string()))?;

        Ok(self.rank_candidates(viewer, directory.users(), options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::InMemoryDirectory;
    use crate::models::{Location, Proficiency, SeekingItem, Skill};

    fn user(id: &str) -> User {
        User {
            id: id.to_string(),
            name: format!("User {}", id),
            location: None,
            bio: None,
            profile_photo_url: None,
            skills: vec![],
            interests: vec![],
            seeking: vec![],
            verification_status: Default::default(),
        }
    }

    fn skill(specific: &str) -> Skill {
        Skill {
            category: "General".to_string(),
            specific: specific.to_string(),
            proficiency: Proficiency::Expert,
            availability: String::new(),
            description: String::new(),
        }
    }

    fn seeking(name: &str) -> SeekingItem {
        SeekingItem {
            skill: name.to_string(),
            experience_level: "Any".to_string(),
        }
    }

    fn located(mut u: User, lat: f64, lng: f64) -> User {
        u.location = Some(Location {
            lat,
            lng,
            display_name: "Seattle, WA".to_string(),
        });
        u
    }

    #[test]
    fn test_rank_excludes_viewer_and_sorts_descending() {
        let matcher = Matcher::with_default_weights();
        let mut viewer = user("viewer");
        viewer.skills = vec![skill("Guitar")];
        viewer.interests = vec!["Hiking".to_string()];

        let mut strong = user("strong");
        strong.seeking = vec![seeking("Guitar")];
        strong.interests = vec!["Hiking".to_string()];
        let mut weak = user("weak");
        weak.interests = vec!["Hiking".to_string()];
        let viewer_copy = viewer.clone();

        let population = vec![weak, viewer_copy, strong];
        let ranked = matcher.rank_candidates(&viewer, &population, &MatchOptions::default());

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].user.id, "strong");
        assert_eq!(ranked[0].match_score, 25);
        assert_eq!(ranked[1].user.id, "weak");
        assert_eq!(ranked[1].match_score, 5);
        assert!(!ranked.iter().any(|c| c.user.id == "viewer"));
    }

    #[test]
    fn test_ties_preserve_population_order() {
        let matcher = Matcher::with_default_weights();
        let mut viewer = user("viewer");
        viewer.interests = vec!["Hiking".to_string()];

        // All three score 5; input order must survive the sort
        let population: Vec<User> = ["first", "second", "third"]
            .iter()
            .map(|id| {
                let mut u = user(id);
                u.interests = vec!["hiking".to_string()];
                u
            })
            .collect();

        let ranked = matcher.rank_candidates(&viewer, &population, &MatchOptions::default());
        let ids: Vec<&str> = ranked.iter().map(|c| c.user.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_rank_is_idempotent() {
        let matcher = Matcher::with_default_weights();
        let mut viewer = located(user("viewer"), 47.6062, -122.3321);
        viewer.skills = vec![skill("Guitar")];

        let mut a = located(user("a"), 47.6080, -122.3360);
        a.seeking = vec![seeking("guitar")];
        let b = located(user("b"), 47.6092, -122.3360);

        let population = vec![a, b];
        let options = MatchOptions::default();
        let first = matcher.rank_candidates(&viewer, &population, &options);
        let second = matcher.rank_candidates(&viewer, &population, &options);
        assert_eq!(first, second);
    }

    #[test]
    fn test_distance_injected_only_when_known() {
        let matcher = Matcher::with_default_weights();
        let viewer = located(user("viewer"), 47.6062, -122.3321);

        let near = located(user("near"), 47.6080, -122.3360);
        let unlocated = user("unlocated");

        let ranked =
            matcher.rank_candidates(&viewer, &[near, unlocated], &MatchOptions::default());
        let near_entry = ranked.iter().find(|c| c.user.id == "near").unwrap();
        let unlocated_entry = ranked.iter().find(|c| c.user.id == "unlocated").unwrap();

        assert!(near_entry.distance.unwrap() < 0.5);
        assert!(unlocated_entry.distance.is_none());
    }

    #[test]
    fn test_lookup_skips_filtering() {
        let matcher = Matcher::with_default_weights();
        let mut viewer = located(user("viewer"), 47.6062, -122.3321);
        viewer.skills = vec![skill("Guitar")];

        // Would fail a skills_only filter, but lookup never filters
        let far_stranger = user("stranger");
        let population = vec![far_stranger];

        let candidate = matcher
            .lookup_candidate(&viewer, &population, "stranger")
            .unwrap();
        assert_eq!(candidate.user.id, "stranger");
        assert_eq!(candidate.match_score, 0);
        assert!(candidate.match_details.is_empty());
    }

    #[test]
    fn test_custom_weights_change_scores() {
        let mut weights = MatchWeights::default();
        weights.skill_exchange = 30.0;
        let matcher = Matcher::new(weights);

        let mut viewer = user("viewer");
        viewer.skills = vec![skill("Guitar")];
        let mut candidate = user("candidate");
        candidate.seeking = vec![seeking("guitar")];

        let result = matcher
            .lookup_candidate(&viewer, &[candidate], "candidate")
            .unwrap();
        assert_eq!(result.match_score, 30);
    }

    #[test]
    fn test_lookup_missing_candidate() {
        let matcher = Matcher::with_default_weights();
        let viewer = user("viewer");
        let population = vec![user("present")];

        let err = matcher
            .lookup_candidate(&viewer, &population, "absent")
            .unwrap_err();
        assert_eq!(err, MatchError::CandidateNotFound("absent".to_string()));
    }

    #[test]
    fn test_rank_for_resolves_viewer_through_directory() {
        let matcher = Matcher::with_default_weights();
        let mut viewer = user("viewer");
        viewer.interests = vec!["Hiking".to_string()];
        let mut other = user("other");
        other.interests = vec!["hiking".to_string()];

        let directory = InMemoryDirectory::new(vec![viewer, other]);

        let ranked = matcher
            .rank_for("viewer", &directory, &MatchOptions::default())
            .unwrap();
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].user.id, "other");

        let err = matcher
            .rank_for("ghost", &directory, &MatchOptions::default())
            .unwrap_err();
        assert_eq!(err, MatchError::ViewerNotFound("ghost".to_string()));
    }
}
