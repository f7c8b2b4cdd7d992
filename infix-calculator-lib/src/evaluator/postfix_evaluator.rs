use crate::evaluator::error::EvalError;
use crate::evaluator::token::Token;

/// Reduces the given postfix token sequence to a single numeric value.
///
/// Numbers are pushed onto a working stack; an operator pops its right
/// operand first, then its left, and pushes the applied result. The sequence
/// is malformed unless exactly one value remains at the end.
///
/// # Arguments
///
/// * `postfix_tokens`: The tokens to evaluate, in postfix format.
///
/// returns: The numeric value of the expression.
pub fn evaluate_postfix(postfix_tokens: Vec<Token>) -> Result<f64, EvalError> {
    let mut operands: Vec<f64> = Vec::new();

    for token in postfix_tokens {
        match token {
            Token::Number(value) => operands.push(value),
            Token::Operator(operator) => {
                let right_operand = operands.pop().ok_or(EvalError::MalformedPostfix)?;
                let left_operand = operands.pop().ok_or(EvalError::MalformedPostfix)?;
                operands.push(operator.apply(left_operand, right_operand)?);
            }
            Token::OpenParenthesis | Token::CloseParenthesis => {
                return Err(EvalError::MalformedPostfix);
            }
        }
    }

    match operands.pop() {
        Some(result) if operands.is_empty() => Ok(result),
        _ => Err(EvalError::MalformedPostfix),
    }
}
