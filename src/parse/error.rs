use thiserror::Error;

/// A predicate or version string that does not parse. Carries the rejected
/// input and the byte offset where parsing stopped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {what} '{input}' at offset {offset}: {reason}")]
pub struct ParseError {
    what: &'static str,
    input: String,
    offset: usize,
    reason: String,
}

impl ParseError {
    pub(crate) fn new(
        what: &'static str,
        input: &str,
        offset: usize,
        reason: impl Into<String>,
    ) -> Self {
        let reason = reason.into();
        Self {
            what,
            input: input.to_owned(),
            offset,
            reason: if reason.is_empty() {
                "unexpected input".to_owned()
            } else {
                reason
            },
        }
    }

    /// The full text that was rejected.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Byte offset into [`input`](Self::input) of the first character that
    /// could not be consumed.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }
}
