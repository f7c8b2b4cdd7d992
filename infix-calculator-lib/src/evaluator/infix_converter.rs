use crate::evaluator::error::EvalError;
use crate::evaluator::operator::{Associativity, Operator};
use crate::evaluator::token::Token;
use std::collections::VecDeque;

/// Converts the given infix token sequence into postfix (Reverse Polish)
/// order using the shunting-yard algorithm.
///
/// # Arguments
///
/// * `original_tokens`: The tokens to convert, in infix format.
///
/// returns: The same tokens in postfix format, parentheses resolved away.
///
/// # Examples
///
/// ```
/// use infix_calculator::evaluator::infix_converter::infix_to_postfix;
/// use infix_calculator::evaluator::token::Token;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let infix_tokens = vec![
///     Token::Number(3.0),
///     "+".parse().unwrap(),
///     Token::Number(4.0),
/// ];
/// let postfix_tokens = infix_to_postfix(infix_tokens)?;
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn infix_to_postfix(original_tokens: Vec<Token>) -> Result<Vec<Token>, EvalError> {
    let mut tokens: VecDeque<Token> = VecDeque::from(original_tokens);
    let mut operators: VecDeque<Token> = VecDeque::new();
    let mut output: Vec<Token> = vec![];
    while let Some(token) = tokens.pop_front() {
        match token {
            Token::Number(_) => output.push(token),
            Token::OpenParenthesis => operators.push_front(token),
            Token::Operator(operator) => push_operator(&mut operators, &mut output, operator),
            Token::CloseParenthesis => resolve_closing_parenthesis(&mut operators, &mut output)?,
        };
    }

    transfer_leftover_operators(&mut operators, &mut output)?;

    Ok(output)
}

fn push_operator(operators: &mut VecDeque<Token>, output: &mut Vec<Token>, operator: Operator) {
    while let Some(top_of_operator_stack) = operators.front() {
        let top_operator = match top_of_operator_stack {
            Token::Operator(top_operator) => *top_operator,
            // An opening parenthesis fences off the operators below it.
            _ => break,
        };

        let pops = top_operator.precedence() > operator.precedence()
            || (top_operator.precedence() == operator.precedence()
                && operator.associativity() == Associativity::Left);
        if !pops {
            break;
        }

        operators.pop_front();
        output.push(Token::Operator(top_operator));
    }

    operators.push_front(Token::Operator(operator));
}

fn resolve_closing_parenthesis(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
) -> Result<(), EvalError> {
    loop {
        match operators.pop_front() {
            None => return Err(EvalError::UnbalancedParentheses),
            // Discard the open parenthesis.
            Some(Token::OpenParenthesis) => return Ok(()),
            Some(operator) => output.push(operator),
        }
    }
}

fn transfer_leftover_operators(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
) -> Result<(), EvalError> {
    while let Some(operator) = operators.pop_front() {
        match operator {
            Token::OpenParenthesis | Token::CloseParenthesis => {
                return Err(EvalError::UnbalancedParentheses);
            }
            operator => output.push(operator),
        }
    }
    Ok(())
}
