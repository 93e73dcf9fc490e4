use std::path::PathBuf;

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// Crate-wide error type. Core computations never substitute a default for
/// an undefined value; they return one of these instead.
#[derive(Debug, Error)]
pub enum AppError {
    /// A reducer or constructor was given zero elements to work with.
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// A ratio's denominator is an empty set or a zero trial count.
    /// Distinct from a true 0.0 result; callers decide how to surface it.
    #[error("Division undefined: {0}")]
    DivisionUndefined(String),

    /// A referenced approach name is not present in the campaign.
    #[error("Approach {0:?} not found in campaign")]
    MissingApproach(String),

    /// A corpus-style reference must consist of exactly one trial.
    #[error("Corpus approach {name:?} has {trials} trials, expected exactly 1")]
    InvalidCorpus { name: String, trials: usize },

    /// A coverage file line that does not parse as `<edge_id>:<count>`.
    #[error("Malformed coverage record at {}:{line}: {reason}", path.display())]
    MalformedRecord {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// An include/exclude approach filter that is not a valid regex.
    #[error("Invalid regex for {flag} {pattern:?}: {source}")]
    InvalidPattern {
        flag: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Unexpected entry in campaign directory: {}", .0.display())]
    UnexpectedEntry(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("{0}")]
    Custom(String),
}
