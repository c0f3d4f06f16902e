use thiserror::Error;

use crate::parse::ParseError;

/// Errors raised while mapping a [`WireCondition`](crate::WireCondition) to a
/// concrete condition.
#[derive(Debug, Error)]
pub enum ConditionError {
    #[error("condition is missing its 'type' discriminator")]
    MissingType,

    #[error("unknown condition type '{kind}'")]
    UnknownType { kind: String },

    #[error("{kind} condition is missing required field '{field}'")]
    MissingField {
        kind: &'static str,
        field: &'static str,
    },

    #[error("unknown dimension '{name}'")]
    UnknownDimension { name: String },

    #[error("{kind} condition does not support dimension '{dimension}'")]
    UnsupportedDimension {
        kind: &'static str,
        dimension: String,
    },

    #[error("relational condition rejected: {source}")]
    InvalidPredicate {
        predicate: String,
        #[source]
        source: ParseError,
    },
}

/// Errors raised while turning JSON into a [`RawFlag`](crate::RawFlag).
#[derive(Debug, Error)]
pub enum RawFlagError {
    #[error("value {json} is not a valid {expected}: {reason}")]
    Shape {
        json: String,
        expected: &'static str,
        reason: String,
    },

    #[error("failed to parse flag value: {0}")]
    Json(#[from] serde_json::Error),
}
