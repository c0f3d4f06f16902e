use std::cmp::Ordering;
use std::fmt;

use tracing::debug;

use super::condition::{Condition, ConditionType, required_dimension};
use super::error::ConditionError;
use super::{Dimension, FetchVector, Version};
use crate::WireCondition;
use crate::parse::{ParseError, parse_predicate};

/// Operators accepted in a relational predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationalOp {
    Lt,
    Lte,
    Gt,
    Gte,
}

impl RelationalOp {
    /// Whether `ordering` (of the vector value relative to the operand)
    /// satisfies this operator.
    #[must_use]
    pub fn accepts(self, ordering: Ordering) -> bool {
        match self {
            RelationalOp::Lt => ordering == Ordering::Less,
            RelationalOp::Lte => ordering != Ordering::Greater,
            RelationalOp::Gt => ordering == Ordering::Greater,
            RelationalOp::Gte => ordering != Ordering::Less,
        }
    }
}

impl fmt::Display for RelationalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelationalOp::Lt => write!(f, "<"),
            RelationalOp::Lte => write!(f, "<="),
            RelationalOp::Gt => write!(f, ">"),
            RelationalOp::Gte => write!(f, ">="),
        }
    }
}

/// Compares the `vespa-version` dimension against a fixed version, e.g. `>=7.1.2`.
///
/// A vector without a version, or with one that does not parse, never matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationalCondition {
    predicate: String,
    op: RelationalOp,
    operand: Version,
}

impl RelationalCondition {
    pub const DIMENSION: Dimension = Dimension::VespaVersion;

    /// Build a condition from predicate text like `"<8"` or `">= 7.1.2"`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the predicate is not an operator followed by a version.
    pub fn new(predicate: &str) -> Result<Self, ParseError> {
        let (op, operand) = parse_predicate(predicate)?;
        Ok(Self {
            predicate: predicate.to_owned(),
            op,
            operand,
        })
    }

    #[must_use]
    pub fn op(&self) -> RelationalOp {
        self.op
    }

    #[must_use]
    pub fn operand(&self) -> &Version {
        &self.operand
    }

    pub(crate) fn from_wire(wire: &WireCondition) -> Result<Self, ConditionError> {
        let kind = ConditionType::Relational;
        let dimension = required_dimension(wire, kind)?;
        if dimension != Self::DIMENSION {
            return Err(ConditionError::UnsupportedDimension {
                kind: kind.wire_name(),
                dimension: dimension.wire_name().to_owned(),
            });
        }
        let predicate = wire
            .predicate
            .as_deref()
            .ok_or(ConditionError::MissingField {
                kind: kind.wire_name(),
                field: "predicate",
            })?;
        Self::new(predicate).map_err(|source| ConditionError::InvalidPredicate {
            predicate: predicate.to_owned(),
            source,
        })
    }
}

impl Condition for RelationalCondition {
    fn test(&self, vector: &FetchVector) -> bool {
        let Some(raw) = vector.get(Self::DIMENSION) else {
            return false;
        };
        match raw.parse::<Version>() {
            Ok(version) => self.op.accepts(version.cmp(&self.operand)),
            Err(e) => {
                debug!(value = raw, error = %e, "unparseable version in fetch vector");
                false
            }
        }
    }

    fn to_wire(&self) -> WireCondition {
        WireCondition {
            kind: Some(ConditionType::Relational.wire_name().to_owned()),
            dimension: Some(Self::DIMENSION.wire_name().to_owned()),
            values: None,
            predicate: Some(self.predicate.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(version: &str) -> FetchVector {
        FetchVector::new().with(Dimension::VespaVersion, version)
    }

    #[test]
    fn gte_boundary() {
        let cond = RelationalCondition::new(">=7.1.2").unwrap();
        assert!(cond.test(&at("7.1.2")));
        assert!(cond.test(&at("7.2")));
        assert!(!cond.test(&at("7.1.1")));
    }

    #[test]
    fn strict_operators() {
        let lt = RelationalCondition::new("<8").unwrap();
        assert!(lt.test(&at("7.999.0")));
        assert!(!lt.test(&at("8.0.0")));

        let gt = RelationalCondition::new(">8").unwrap();
        assert!(gt.test(&at("8.0.1")));
        assert!(!gt.test(&at("8")));
    }

    #[test]
    fn lte_includes_equal() {
        let cond = RelationalCondition::new("<= 6.5").unwrap();
        assert!(cond.test(&at("6.5.0")));
        assert!(!cond.test(&at("6.5.1")));
    }

    #[test]
    fn missing_version_never_matches() {
        let cond = RelationalCondition::new("<100").unwrap();
        assert!(!cond.test(&FetchVector::new().with(Dimension::Zone, "prod")));
    }

    #[test]
    fn unparseable_version_never_matches() {
        let cond = RelationalCondition::new("<100").unwrap();
        assert!(!cond.test(&at("latest")));
    }

    #[test]
    fn invalid_predicate_is_rejected() {
        assert!(RelationalCondition::new("7.1").is_err());
        assert!(RelationalCondition::new(">=seven").is_err());
    }

    #[test]
    fn to_wire_keeps_predicate_text() {
        let wire = RelationalCondition::new(">= 7.1").unwrap().to_wire();
        assert_eq!(wire.kind.as_deref(), Some("relational"));
        assert_eq!(wire.dimension.as_deref(), Some("vespa-version"));
        assert_eq!(wire.predicate.as_deref(), Some(">= 7.1"));
        assert_eq!(wire.values, None);
    }

    #[test]
    fn accessors_expose_parsed_predicate() {
        let cond = RelationalCondition::new(" < 8.0.1.rc1").unwrap();
        assert_eq!(cond.op(), RelationalOp::Lt);
        assert_eq!(cond.operand(), &Version::new(8, 0, 1).with_qualifier("rc1"));
        assert_eq!(cond.to_wire().predicate.as_deref(), Some(" < 8.0.1.rc1"));
    }

    #[test]
    fn from_wire_requires_version_dimension() {
        let wire = WireCondition {
            kind: Some("relational".into()),
            dimension: Some("zone".into()),
            values: None,
            predicate: Some(">=1".into()),
        };
        let err = RelationalCondition::from_wire(&wire).unwrap_err();
        assert!(matches!(err, ConditionError::UnsupportedDimension { dimension, .. } if dimension == "zone"));
    }

    #[test]
    fn from_wire_requires_predicate() {
        let wire = WireCondition {
            kind: Some("relational".into()),
            dimension: Some("vespa-version".into()),
            values: None,
            predicate: None,
        };
        let err = RelationalCondition::from_wire(&wire).unwrap_err();
        assert!(matches!(
            err,
            ConditionError::MissingField {
                field: "predicate",
                ..
            }
        ));
    }

    #[test]
    fn from_wire_reports_bad_predicate() {
        let wire = WireCondition {
            kind: Some("relational".into()),
            dimension: Some("vespa-version".into()),
            values: None,
            predicate: Some("==7".into()),
        };
        let err = RelationalCondition::from_wire(&wire).unwrap_err();
        assert!(matches!(err, ConditionError::InvalidPredicate { predicate, .. } if predicate == "==7"));
    }

    #[test]
    fn op_display() {
        assert_eq!(RelationalOp::Lt.to_string(), "<");
        assert_eq!(RelationalOp::Lte.to_string(), "<=");
        assert_eq!(RelationalOp::Gt.to_string(), ">");
        assert_eq!(RelationalOp::Gte.to_string(), ">=");
    }
}
