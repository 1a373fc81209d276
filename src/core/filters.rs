use crate::core::distance::distance_between_users;
use crate::core::scoring::{interest_set, skill_names_match};
use crate::models::{MatchOptions, User};

/// Does the candidate seek at least one skill the viewer offers?
#[inline]
pub fn offers_sought_skill(viewer: &User, candidate: &User) -> bool {
    candidate.seeking.iter().any(|item| {
        viewer
            .skills
            .iter()
            .any(|skill| skill_names_match(&skill.specific, &item.skill))
    })
}

/// Do the two users share at least one interest label?
#[inline]
pub fn shares_interest(viewer: &User, candidate: &User) -> bool {
    let viewer_interests = interest_set(viewer);
    candidate
        .interests
        .iter()
        .any(|interest| viewer_interests.contains(&interest.to_lowercase()))
}

/// Is the candidate provably within `max_miles` of the viewer?
///
/// A pair with unknown distance fails this predicate: inclusion cannot be
/// proven without both locations.
#[inline]
pub fn within_distance(viewer: &User, candidate: &User, max_miles: f64) -> bool {
    match distance_between_users(viewer, candidate) {
        Some(miles) => miles <= max_miles,
        None => false,
    }
}

/// Narrow the candidate population for a viewer
///
/// The viewer's own record is excluded unconditionally first. The option
/// predicates are independent and compose as a logical AND; an unset option
/// does not filter on that dimension.
pub fn filter_candidates<'a>(
    viewer: &User,
    population: &'a [User],
    options: &MatchOptions,
) -> Vec<&'a User> {
    population
        .iter()
        .filter(|candidate| candidate.id != viewer.id)
        .filter(|candidate| !options.skills_only || offers_sought_skill(viewer, candidate))
        .filter(|candidate| !options.interests_only || shares_interest(viewer, candidate))
        .filter(|candidate| match options.max_distance {
            Some(max_miles) => within_distance(viewer, candidate, max_miles),
            None => true,
        })
        .collect()
}
