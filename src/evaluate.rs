use std::sync::Arc;

use crate::{Condition, FetchVector};

/// Left-to-right conjunction. An empty slice is vacuously true and evaluation
/// stops at the first condition that fails.
pub(crate) fn matches_all(conditions: &[Arc<dyn Condition>], vector: &FetchVector) -> bool {
    conditions.iter().all(|condition| condition.test(vector))
}
