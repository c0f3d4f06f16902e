use std::sync::Arc;

use tracing::{debug, trace};

use super::condition::{Condition, condition_from_wire};
use super::raw_flag::{JsonNodeDecoder, RawFlag, RawFlagDecoder};
use super::FetchVector;
use crate::{FlagError, WireRule};

/// A conjunction of conditions plus an optional value to apply when all of
/// them hold.
///
/// Rules are immutable once built. A rule without conditions matches every
/// fetch vector, which makes it a catch-all. A rule without a value still
/// matches; it just has nothing to apply.
///
/// # Example
///
/// ```
/// use flagrules::{Dimension, FetchVector, RawFlag, Rule, WhitelistCondition};
///
/// let rule = Rule::builder()
///     .when(WhitelistCondition::new(Dimension::Zone, ["prod"]))
///     .value(RawFlag::from(true))
///     .build();
///
/// assert!(rule.matches(&FetchVector::new().with(Dimension::Zone, "prod")));
/// assert!(!rule.matches(&FetchVector::new().with(Dimension::Zone, "dev")));
/// ```
#[derive(Debug, Clone)]
pub struct Rule {
    conditions: Vec<Arc<dyn Condition>>,
    value_to_apply: Option<RawFlag>,
}

impl Rule {
    /// Create a rule from a value and any list of conditions, evaluated in
    /// iteration order. A JSON `null` value is stored as no value.
    pub fn new(
        value_to_apply: Option<RawFlag>,
        conditions: impl IntoIterator<Item = Arc<dyn Condition>>,
    ) -> Self {
        Self {
            conditions: conditions.into_iter().collect(),
            value_to_apply: non_null(value_to_apply),
        }
    }

    /// A rule without conditions.
    #[must_use]
    pub fn catch_all(value_to_apply: Option<RawFlag>) -> Self {
        Self::new(value_to_apply, Vec::new())
    }

    /// Start building a rule one condition at a time.
    #[must_use]
    pub fn builder() -> RuleBuilder {
        RuleBuilder::default()
    }

    /// True iff every condition holds for `vector`. Stops at the first
    /// condition that does not.
    #[must_use]
    pub fn matches(&self, vector: &FetchVector) -> bool {
        crate::evaluate::matches_all(&self.conditions, vector)
    }

    /// The value to apply when this rule matches, if any.
    #[must_use]
    pub fn value_to_apply(&self) -> Option<&RawFlag> {
        self.value_to_apply.as_ref()
    }

    /// The conditions in evaluation order.
    #[must_use]
    pub fn conditions(&self) -> &[Arc<dyn Condition>] {
        &self.conditions
    }

    /// The wire form of this rule. Empty conditions and an absent value are
    /// left unset rather than written as `[]` or `null`.
    #[must_use]
    pub fn to_wire(&self) -> WireRule {
        WireRule {
            and_conditions: (!self.conditions.is_empty())
                .then(|| self.conditions.iter().map(|c| c.to_wire()).collect()),
            value: self.value_to_apply.as_ref().map(RawFlag::as_json_node),
        }
    }

    /// Decode a wire rule, accepting any JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::Condition`] if any condition cannot be decoded.
    pub fn from_wire(wire: WireRule) -> Result<Self, FlagError> {
        Self::from_wire_with(wire, &JsonNodeDecoder)
    }

    /// Decode a wire rule, checking its value with `decoder`.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::Condition`] if any condition cannot be decoded, or
    /// [`FlagError::Value`] if `decoder` rejects the value.
    pub fn from_wire_with<D>(wire: WireRule, decoder: &D) -> Result<Self, FlagError>
    where
        D: RawFlagDecoder + ?Sized,
    {
        let conditions = wire
            .and_conditions
            .unwrap_or_default()
            .iter()
            .map(condition_from_wire)
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|e| debug!(error = %e, "failed to decode rule conditions"))?;

        let value_to_apply = wire
            .value
            .filter(|node| !node.is_null())
            .map(|node| decoder.from_json_node(node))
            .transpose()
            .inspect_err(|e| debug!(error = %e, "failed to decode rule value"))?;

        trace!(
            conditions = conditions.len(),
            has_value = value_to_apply.is_some(),
            "decoded rule"
        );
        Ok(Self {
            conditions,
            value_to_apply,
        })
    }

    /// Serialize the wire form to JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, FlagError> {
        Ok(serde_json::to_string(&self.to_wire())?)
    }

    /// Parse JSON text in wire form.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::Json`] for malformed JSON, otherwise the same
    /// errors as [`Rule::from_wire()`].
    pub fn from_json(json: &str) -> Result<Self, FlagError> {
        let wire: WireRule = serde_json::from_str(json)?;
        Self::from_wire(wire)
    }
}

/// Collects conditions one at a time before producing an immutable [`Rule`].
#[derive(Debug, Default)]
pub struct RuleBuilder {
    conditions: Vec<Arc<dyn Condition>>,
    value_to_apply: Option<RawFlag>,
}

impl RuleBuilder {
    /// Add a condition. Conditions are evaluated in the order they are added.
    #[must_use]
    pub fn when(mut self, condition: impl Condition + 'static) -> Self {
        self.conditions.push(Arc::new(condition));
        self
    }

    /// Set the value applied on a match. Replaces any earlier value.
    #[must_use]
    pub fn value(mut self, value: impl Into<RawFlag>) -> Self {
        self.value_to_apply = Some(value.into());
        self
    }

    /// Finish the rule.
    #[must_use]
    pub fn build(self) -> Rule {
        Rule::new(self.value_to_apply, self.conditions)
    }
}

fn non_null(value: Option<RawFlag>) -> Option<RawFlag> {
    value.filter(|v| !v.is_null())
}
