use std::collections::HashMap;

use super::Dimension;

/// The context a rule is matched against: one string value per [`Dimension`].
///
/// Rules never inspect the vector themselves; they only pass it through to
/// each condition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchVector {
    values: HashMap<Dimension, String>,
}

impl FetchVector {
    /// Create an empty fetch vector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value of a dimension, replacing any previous value.
    #[must_use]
    pub fn with(mut self, dimension: Dimension, value: impl Into<String>) -> Self {
        self.insert(dimension, value);
        self
    }

    /// Set the value of a dimension (mutable reference version).
    pub fn insert(&mut self, dimension: Dimension, value: impl Into<String>) {
        self.values.insert(dimension, value.into());
    }

    /// Returns a copy of this vector where every dimension set in `other`
    /// overrides the value held here.
    #[must_use]
    pub fn with_all(&self, other: &FetchVector) -> Self {
        let mut merged = self.clone();
        merged
            .values
            .extend(other.values.iter().map(|(d, v)| (*d, v.clone())));
        merged
    }

    #[must_use]
    pub fn get(&self, dimension: Dimension) -> Option<&str> {
        self.values.get(&dimension).map(String::as_str)
    }

    #[must_use]
    pub fn has_dimension(&self, dimension: Dimension) -> bool {
        self.values.contains_key(&dimension)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
