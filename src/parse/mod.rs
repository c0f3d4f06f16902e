mod error;
mod grammar;

pub use error::ParseError;

use crate::{RelationalOp, Version};

/// Parse a relational predicate such as `">=7.1.2"` into its operator and operand.
///
/// # Errors
///
/// Returns [`ParseError`] if the input is not an operator followed by a version.
pub fn parse_predicate(input: &str) -> Result<(RelationalOp, Version), ParseError> {
    use winnow::Parser;
    grammar::predicate
        .parse(input)
        .map_err(|e| ParseError::new("predicate", input, e.offset(), e.inner().to_string()))
}

/// Parse a version string such as `"7.1.2"` or `"8.0.0.rc1"`.
///
/// # Errors
///
/// Returns [`ParseError`] if the input is not a valid version.
pub fn parse_version(input: &str) -> Result<Version, ParseError> {
    use winnow::Parser;
    grammar::standalone_version
        .parse(input)
        .map_err(|e| ParseError::new("version", input, e.offset(), e.inner().to_string()))
}
