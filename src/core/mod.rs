// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod matcher;
pub mod rationale;
pub mod scoring;

pub use distance::{distance_between, distance_between_users, haversine_miles};
pub use filters::{filter_candidates, offers_sought_skill, shares_interest, within_distance};
pub use matcher::Matcher;
pub use rationale::build_rationale;
pub use scoring::{calculate_match_score, proximity_bonus};
