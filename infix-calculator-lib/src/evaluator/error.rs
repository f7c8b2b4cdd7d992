use thiserror::Error;

/// The ways an evaluation can fail, classified by pipeline stage.
///
/// The messages are terse classifications; how a failure is presented to the
/// user is up to the caller.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The tokenizer met a character that is not part of any token.
    #[error("invalid character '{0}' in expression")]
    InvalidCharacter(char),
    /// The input contains no tokens at all.
    #[error("expression is empty")]
    EmptyExpression,
    /// A parenthesis could not be matched up during conversion.
    #[error("unbalanced parentheses in expression")]
    UnbalancedParentheses,
    /// The postfix sequence did not reduce to exactly one value.
    #[error("malformed expression")]
    MalformedPostfix,
    /// The right-hand operand of a division was exactly zero.
    #[error("division by zero")]
    DivisionByZero,
}
