mod condition;
mod dimension;
mod error;
mod fetch_vector;
mod list_condition;
mod raw_flag;
mod relational;
mod rule;
mod version;

pub use condition::{Condition, ConditionType, condition_from_wire};
pub use dimension::Dimension;
pub use error::{ConditionError, RawFlagError};
pub use fetch_vector::FetchVector;
pub use list_condition::{BlacklistCondition, WhitelistCondition};
pub use raw_flag::{JsonNodeDecoder, RawFlag, RawFlagDecoder, TypedDecoder};
pub use relational::{RelationalCondition, RelationalOp};
pub use rule::{Rule, RuleBuilder};
pub use version::Version;
