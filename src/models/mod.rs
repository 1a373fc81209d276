// Model exports
pub mod domain;
pub mod options;
pub mod results;

pub use domain::{Location, MatchWeights, Proficiency, SeekingItem, Skill, User, VerificationStatus};
pub use options::MatchOptions;
pub use results::{Candidate, OfferedSkill, Rationale, RequestedSkill};
