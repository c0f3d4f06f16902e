use thiserror::Error;

use crate::{ConditionError, RawFlagError};

/// Unified error type covering condition decoding, value decoding, and JSON text.
///
/// Returned by [`Rule::from_wire()`](crate::Rule::from_wire),
/// [`Rule::from_json()`](crate::Rule::from_json) and friends. A rule never
/// raises errors of its own; every variant wraps a collaborator's error unchanged.
#[derive(Debug, Error)]
pub enum FlagError {
    #[error(transparent)]
    Condition(#[from] ConditionError),

    #[error(transparent)]
    Value(#[from] RawFlagError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
