use thiserror::Error;

/// Parse error types. Positions are indices into the comment-filtered
/// token sequence; end-of-input errors carry the sequence length.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Expected {expected} but found {found} at token {position}")]
    UnexpectedToken {
        expected: String,
        found: String,
        position: usize,
    },

    #[error("Expected {expected} but reached the end of input at token {position}")]
    UnexpectedEndOfInput { expected: String, position: usize },

    #[error("Nesting deeper than {limit} levels at token {position}")]
    NestingTooDeep { limit: usize, position: usize },
}
