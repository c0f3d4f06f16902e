use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use tracing::{debug, trace};

use super::error::ConditionError;
use super::list_condition::{BlacklistCondition, WhitelistCondition};
use super::relational::RelationalCondition;
use super::{Dimension, FetchVector};
use crate::WireCondition;

/// A single predicate over a [`FetchVector`].
///
/// Implementations must be free of side effects and independent of each
/// other, since a rule may stop evaluating after the first condition that
/// fails.
pub trait Condition: fmt::Debug + Send + Sync {
    fn test(&self, vector: &FetchVector) -> bool;

    /// The wire fragment for this condition, including its `type` discriminator.
    fn to_wire(&self) -> WireCondition;
}

/// Discriminator carried in the `type` field of a [`WireCondition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionType {
    Whitelist,
    Blacklist,
    Relational,
}

impl ConditionType {
    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            ConditionType::Whitelist => "whitelist",
            ConditionType::Blacklist => "blacklist",
            ConditionType::Relational => "relational",
        }
    }
}

impl FromStr for ConditionType {
    type Err = ConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "whitelist" => Ok(ConditionType::Whitelist),
            "blacklist" => Ok(ConditionType::Blacklist),
            "relational" => Ok(ConditionType::Relational),
            other => Err(ConditionError::UnknownType {
                kind: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for ConditionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Map a wire fragment to the condition variant named by its `type` field.
///
/// # Errors
///
/// Returns [`ConditionError`] if the discriminator is missing or unknown, or
/// if the fields required by that variant are missing or invalid.
pub fn condition_from_wire(wire: &WireCondition) -> Result<Arc<dyn Condition>, ConditionError> {
    let kind: ConditionType = wire
        .kind
        .as_deref()
        .ok_or(ConditionError::MissingType)?
        .parse::<ConditionType>()
        .inspect_err(|e| debug!(error = %e, "rejecting wire condition"))?;
    trace!(%kind, dimension = ?wire.dimension, "decoding condition");

    let condition: Arc<dyn Condition> = match kind {
        ConditionType::Whitelist => Arc::new(WhitelistCondition::new(
            required_dimension(wire, kind)?,
            list_values(wire),
        )),
        ConditionType::Blacklist => Arc::new(BlacklistCondition::new(
            required_dimension(wire, kind)?,
            list_values(wire),
        )),
        ConditionType::Relational => Arc::new(RelationalCondition::from_wire(wire)?),
    };
    Ok(condition)
}

pub(crate) fn required_dimension(
    wire: &WireCondition,
    kind: ConditionType,
) -> Result<Dimension, ConditionError> {
    wire.dimension
        .as_deref()
        .ok_or(ConditionError::MissingField {
            kind: kind.wire_name(),
            field: "dimension",
        })?
        .parse()
}

fn list_values(wire: &WireCondition) -> Vec<String> {
    wire.values.clone().unwrap_or_default()
}
