//! Tandem Match - match scoring and ranking engine for the Tandem skill-exchange app
//!
//! This library computes bounded compatibility scores (0-100) between a
//! viewer and candidate users, explains each score with a rationale, and
//! produces filtered, ranked result sets. It is a pure, synchronous engine:
//! callers pass in-memory user records and consume derived candidates;
//! persistence, transport, and rendering live elsewhere.

pub mod config;
pub mod core;
pub mod directory;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use crate::core::{calculate_match_score, haversine_miles, Matcher};
pub use directory::{InMemoryDirectory, UserDirectory};
pub use error::MatchError;
pub use models::{
    Candidate, MatchOptions, MatchWeights, Proficiency, Rationale, SeekingItem, Skill, User,
};
