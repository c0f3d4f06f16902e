use super::condition::{Condition, ConditionType};
use super::{Dimension, FetchVector};
use crate::WireCondition;

/// Shared state of the whitelist and blacklist conditions.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ListCondition {
    dimension: Dimension,
    values: Vec<String>,
}

impl ListCondition {
    fn new<I, S>(dimension: Dimension, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            dimension,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// `None` when the vector lacks the dimension.
    fn contains(&self, vector: &FetchVector) -> Option<bool> {
        vector
            .get(self.dimension)
            .map(|value| self.values.iter().any(|v| v == value))
    }

    fn to_wire(&self, kind: ConditionType) -> WireCondition {
        WireCondition {
            kind: Some(kind.wire_name().to_owned()),
            dimension: Some(self.dimension.wire_name().to_owned()),
            values: (!self.values.is_empty()).then(|| self.values.clone()),
            predicate: None,
        }
    }
}

/// Holds when the vector's value for `dimension` is one of `values`.
/// A vector without the dimension never matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhitelistCondition(ListCondition);

impl WhitelistCondition {
    #[must_use]
    pub fn new<I, S>(dimension: Dimension, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(ListCondition::new(dimension, values))
    }

    #[must_use]
    pub fn dimension(&self) -> Dimension {
        self.0.dimension
    }

    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.0.values
    }
}

impl Condition for WhitelistCondition {
    fn test(&self, vector: &FetchVector) -> bool {
        self.0.contains(vector).unwrap_or(false)
    }

    fn to_wire(&self) -> WireCondition {
        self.0.to_wire(ConditionType::Whitelist)
    }
}

/// Holds unless the vector's value for `dimension` is one of `values`.
/// A vector without the dimension always matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlacklistCondition(ListCondition);

impl BlacklistCondition {
    #[must_use]
    pub fn new<I, S>(dimension: Dimension, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(ListCondition::new(dimension, values))
    }

    #[must_use]
    pub fn dimension(&self) -> Dimension {
        self.0.dimension
    }

    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.0.values
    }
}

impl Condition for BlacklistCondition {
    fn test(&self, vector: &FetchVector) -> bool {
        !self.0.contains(vector).unwrap_or(false)
    }

    fn to_wire(&self) -> WireCondition {
        self.0.to_wire(ConditionType::Blacklist)
    }
}
