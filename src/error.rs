use thiserror::Error;

/// Errors the matching engine can signal.
///
/// The taxonomy is narrow because the engine is a pure function over typed
/// input. Missing locations and empty skill/interest/seeking collections are
/// data conditions handled by the scoring rules, never errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    /// The requested candidate id is absent from the population.
    #[error("candidate `{0}` not found in population")]
    CandidateNotFound(String),

    /// The viewer id is absent from the user directory.
    #[error("viewer `{0}` not found in directory")]
    ViewerNotFound(String),
}
