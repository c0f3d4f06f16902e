//! Wire shapes for rules and conditions.
//!
//! These are plain serde DTOs. Every field is optional and absent fields are
//! skipped on output, so an empty rule serializes to `{}`.
//!
//! ```text
//! {
//!   "conditions": [ { "type": "whitelist", "dimension": "zone", "values": ["prod"] } ],
//!   "value": true
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Wire form of a [`Rule`](crate::Rule).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WireRule {
    /// Omitted when the rule has no conditions.
    #[serde(
        rename = "conditions",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub and_conditions: Option<Vec<WireCondition>>,

    /// Omitted when the rule has no value. A JSON `null` reads as absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

/// Wire form of a single condition. Which fields are required depends on `type`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireCondition {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicate: Option<String>,
}
