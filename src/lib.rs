//! Rule matching and wire serialization for feature-flag values.
//!
//! A flag's value comes from an ordered list of [`Rule`]s. Each rule is a
//! conjunction of [`Condition`]s over a [`FetchVector`] plus an optional
//! [`RawFlag`] to apply when every condition holds. Rules convert to and from
//! a compact [`WireRule`] that omits empty condition lists and absent values.

mod error;
mod evaluate;
pub mod parse;
mod types;
pub mod wire;

pub use error::FlagError;
pub use types::{
    BlacklistCondition, Condition, ConditionError, ConditionType, Dimension, FetchVector,
    JsonNodeDecoder, RawFlag, RawFlagDecoder, RawFlagError, RelationalCondition, RelationalOp,
    Rule, RuleBuilder, TypedDecoder, Version, WhitelistCondition, condition_from_wire,
};
pub use wire::{WireCondition, WireRule};
