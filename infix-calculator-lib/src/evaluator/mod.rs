pub mod error;
pub mod infix_converter;
pub mod lexer;
pub mod operator;
pub mod postfix_evaluator;
pub mod token;

use crate::debug;
use crate::evaluator::error::EvalError;
use crate::evaluator::operator::Operator;
use crate::evaluator::token::Token;
use anyhow::{Context, Result};
use string_builder::Builder;

/// Evaluates the given infix arithmetic expression.
///
/// The expression is tokenized, converted to postfix order and reduced to a
/// value, stopping at the first failing stage. The result carries full
/// double precision; rounding for display is up to the caller.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The numeric value of the expression.
///
/// # Examples
///
/// ```
/// use infix_calculator::evaluator::evaluate;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let result = evaluate("3+4*2".to_string())?;
/// assert_eq!(result, 11.0);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn evaluate(expression: String) -> Result<f64, EvalError> {
    let infix_tokens = lexer::tokenize(expression)?;
    debug!(&infix_tokens);
    let postfix_tokens = infix_converter::infix_to_postfix(infix_tokens)?;
    debug!(&postfix_tokens);
    postfix_evaluator::evaluate_postfix(postfix_tokens)
}

/// Pretty-prints the given tokens with conventional spacing.
///
/// Binary operators are surrounded by spaces, except `^` which binds its
/// operands tightly, as do parentheses.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A pretty-printed text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use infix_calculator::evaluator::lexer::tokenize;
/// use infix_calculator::evaluator::tokens_to_string;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = tokenize("3+4^2".to_string())?;
/// assert_eq!(tokens_to_string(&tokens)?, "3 + 4^2");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> Result<String> {
    let mut builder = Builder::new(tokens.len());

    for token in tokens {
        match token {
            Token::Operator(operator) if *operator != Operator::Exponentiate => {
                builder.append(" ");
                builder.append(token.to_string());
                builder.append(" ");
            }
            _ => builder.append(token.to_string()),
        }
    }

    builder.string().context("Failed to build token string")
}

#[macro_export]
#[cfg(debug_assertions)]
macro_rules! debug {
    ($( $args:expr ),*) => { dbg!( $( $args ),* ); }
}

#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! debug {
    ($( $args:expr ),*) => {()}
}
