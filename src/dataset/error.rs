//! Dataset error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The dataset file could not be read
    #[error("Failed to read dataset {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    /// The JSON did not match the dataset shape
    #[error("Failed to parse dataset: {0}")]
    Parse(String),

    /// Integrity check found problems
    #[error("Dataset has {} problem(s): {}", .0.len(), summarize(.0))]
    Invalid(Vec<DatasetIssue>),
}

impl From<serde_json::Error> for DatasetError {
    fn from(err: serde_json::Error) -> Self {
        DatasetError::Parse(err.to_string())
    }
}

fn summarize(issues: &[DatasetIssue]) -> String {
    issues
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// One integrity problem in a dataset
///
/// The mock records reference each other by number only, so nothing stops a
/// hand-edited file from pointing at records that do not exist.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DatasetIssue {
    #[error("duplicate {kind} id {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("provider {provider} references unknown category {category}")]
    UnknownCategory { provider: u32, category: u32 },

    #[error("pet {pet} references unknown owner {owner}")]
    UnknownOwner { pet: u32, owner: u32 },

    #[error("user {user} lists unknown pet {pet}")]
    UnknownPet { user: u32, pet: u32 },

    #[error("provider {provider} has rating {rating} outside 0-5")]
    RatingOutOfRange { provider: u32, rating: f32 },

    #[error("testimonial {testimonial} has {rating} stars, expected 1-5")]
    StarsOutOfRange { testimonial: String, rating: u8 },

    #[error("no default {kind} (entries without a city)")]
    MissingDefault { kind: &'static str },
}

/// Result type alias for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DatasetError::Invalid(vec![
            DatasetIssue::UnknownCategory { provider: 3, category: 9 },
            DatasetIssue::UnknownOwner { pet: 2, owner: 7 },
        ]);
        assert_eq!(
            err.to_string(),
            "Dataset has 2 problem(s): provider 3 references unknown category 9; \
             pet 2 references unknown owner 7"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: DatasetError = json_err.into();
        assert!(matches!(err, DatasetError::Parse(_)));
    }
}
