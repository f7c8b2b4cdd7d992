use crate::evaluator::error::EvalError;
use crate::evaluator::operator::Operator;
use crate::evaluator::token::Token;
use itertools::{Itertools, PeekingNext};
use std::iter::Peekable;
use std::str::Chars;

/// Scans the given expression text into a sequence of tokens.
///
/// Numbers are recognised together with their sign when the minus can not be
/// a binary subtraction: at the start of the expression, or directly after an
/// operator or an opening parenthesis. Whitespace is skipped. Any other
/// unmatched character is an error rather than being dropped.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The tokens in left-to-right textual order.
///
/// # Examples
///
/// ```
/// use infix_calculator::evaluator::lexer::tokenize;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = tokenize("3*-4".to_string())?;
/// assert_eq!(tokens.len(), 3);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokenize(expression: String) -> Result<Vec<Token>, EvalError> {
    let mut characters = expression.chars().peekable();
    let mut tokens: Vec<Token> = Vec::new();

    while let Some(&character) = characters.peek() {
        match character {
            character if character.is_whitespace() => {
                characters.next();
            }
            '(' => {
                characters.next();
                tokens.push(Token::OpenParenthesis);
            }
            ')' => {
                characters.next();
                tokens.push(Token::CloseParenthesis);
            }
            character if character.is_ascii_digit() => {
                let number =
                    scan_number(&mut characters).ok_or(EvalError::InvalidCharacter(character))?;
                tokens.push(number);
            }
            '-' if minus_begins_number(&tokens) && digit_follows_sign(&characters) => {
                let number =
                    scan_number(&mut characters).ok_or(EvalError::InvalidCharacter('-'))?;
                tokens.push(number);
            }
            character => match Operator::from_symbol(character) {
                Some(operator) => {
                    characters.next();
                    tokens.push(Token::Operator(operator));
                }
                None => return Err(EvalError::InvalidCharacter(character)),
            },
        }
    }

    if tokens.is_empty() {
        return Err(EvalError::EmptyExpression);
    }
    Ok(tokens)
}

/// Scans a numeric literal: an optional minus sign, digits, and at most one
/// decimal point with optional further digits.
fn scan_number(characters: &mut Peekable<Chars<'_>>) -> Option<Token> {
    let mut literal = String::new();
    if let Some(sign) = characters.peeking_next(|&character| character == '-') {
        literal.push(sign);
    }
    literal.extend(characters.peeking_take_while(|character| character.is_ascii_digit()));
    if let Some(point) = characters.peeking_next(|&character| character == '.') {
        literal.push(point);
        literal.extend(characters.peeking_take_while(|character| character.is_ascii_digit()));
    }
    literal.parse().ok().map(Token::Number)
}

/// A minus sign belongs to the following number only where no left operand
/// for a subtraction exists: at the start of the expression, or right after
/// an operator or an opening parenthesis.
fn minus_begins_number(tokens: &[Token]) -> bool {
    match tokens.last() {
        None => true,
        Some(Token::Operator(_)) | Some(Token::OpenParenthesis) => true,
        Some(_) => false,
    }
}

fn digit_follows_sign(characters: &Peekable<Chars<'_>>) -> bool {
    let mut lookahead = characters.clone();
    lookahead.next();
    matches!(lookahead.next(), Some(character) if character.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tokenize_splits_expression_into_token_sequence() {
        // 3+4*2/(1-5)^2^3
        let expected = [
            Token::Number(3.0),
            "+".parse().unwrap(),
            Token::Number(4.0),
            "*".parse().unwrap(),
            Token::Number(2.0),
            "/".parse().unwrap(),
            Token::OpenParenthesis,
            Token::Number(1.0),
            "-".parse().unwrap(),
            Token::Number(5.0),
            Token::CloseParenthesis,
            "^".parse().unwrap(),
            Token::Number(2.0),
            "^".parse().unwrap(),
            Token::Number(3.0),
        ]
        .to_vec();

        let actual = tokenize("3+4*2/(1-5)^2^3".to_string()).unwrap();

        assert_eq!(actual, expected)
    }

    #[test]
    fn minus_at_start_signs_the_number() {
        let expected = [
            Token::Number(-3.0),
            "+".parse().unwrap(),
            Token::Number(4.0),
        ]
        .to_vec();

        let actual = tokenize("-3+4".to_string()).unwrap();

        assert_eq!(actual, expected)
    }

    #[test]
    fn minus_after_operator_signs_the_number() {
        let expected = [
            Token::Number(3.0),
            "*".parse().unwrap(),
            Token::Number(-4.0),
        ]
        .to_vec();

        let actual = tokenize("3*-4".to_string()).unwrap();

        assert_eq!(actual, expected)
    }

    #[test]
    fn minus_between_numbers_is_subtraction() {
        let expected = [
            Token::Number(3.0),
            "-".parse().unwrap(),
            Token::Number(4.0),
        ]
        .to_vec();

        let actual = tokenize("3-4".to_string()).unwrap();

        assert_eq!(actual, expected)
    }

    #[test]
    fn consecutive_minus_signs_subtract_a_negative() {
        let expected = [
            Token::Number(3.0),
            "-".parse().unwrap(),
            Token::Number(-4.0),
        ]
        .to_vec();

        let actual = tokenize("3--4".to_string()).unwrap();

        assert_eq!(actual, expected)
    }

    #[test]
    fn minus_after_opening_parenthesis_signs_the_number() {
        let expected = [
            Token::OpenParenthesis,
            Token::Number(-3.0),
            "+".parse().unwrap(),
            Token::Number(4.0),
            Token::CloseParenthesis,
        ]
        .to_vec();

        let actual = tokenize("(-3+4)".to_string()).unwrap();

        assert_eq!(actual, expected)
    }

    #[test]
    fn minus_after_closing_parenthesis_is_subtraction() {
        let expected = [
            Token::OpenParenthesis,
            Token::Number(1.0),
            "+".parse().unwrap(),
            Token::Number(2.0),
            Token::CloseParenthesis,
            "-".parse().unwrap(),
            Token::Number(3.0),
        ]
        .to_vec();

        let actual = tokenize("(1+2)-3".to_string()).unwrap();

        assert_eq!(actual, expected)
    }

    #[test]
    fn minus_not_followed_by_digit_is_an_operator() {
        let expected = [
            "-".parse().unwrap(),
            Token::OpenParenthesis,
            Token::Number(3.0),
            Token::CloseParenthesis,
        ]
        .to_vec();

        let actual = tokenize("-(3)".to_string()).unwrap();

        assert_eq!(actual, expected)
    }

    #[test]
    fn whitespace_is_skipped() {
        let expected = [
            Token::Number(3.0),
            "+".parse().unwrap(),
            Token::Number(4.0),
        ]
        .to_vec();

        let actual = tokenize(" 3 + 4 ".to_string()).unwrap();

        assert_eq!(actual, expected)
    }

    #[test]
    fn decimal_numbers_are_single_tokens() {
        let expected = [
            Token::Number(2.5),
            "+".parse().unwrap(),
            Token::Number(0.25),
        ]
        .to_vec();

        let actual = tokenize("2.5+0.25".to_string()).unwrap();

        assert_eq!(actual, expected)
    }

    #[test]
    fn trailing_decimal_point_stays_part_of_the_number() {
        let expected = [
            Token::Number(5.0),
            "+".parse().unwrap(),
            Token::Number(1.0),
        ]
        .to_vec();

        let actual = tokenize("5.+1".to_string()).unwrap();

        assert_eq!(actual, expected)
    }

    #[test]
    fn second_decimal_point_is_invalid() {
        let actual = tokenize("1.2.3".to_string()).unwrap_err();

        assert_eq!(actual, EvalError::InvalidCharacter('.'))
    }

    #[test]
    fn unknown_character_is_invalid() {
        let actual = tokenize("3+a".to_string()).unwrap_err();

        assert_eq!(actual, EvalError::InvalidCharacter('a'))
    }

    #[test]
    fn empty_expression_fails() {
        let actual = tokenize("".to_string()).unwrap_err();

        assert_eq!(actual, EvalError::EmptyExpression)
    }

    #[test]
    fn blank_expression_fails() {
        let actual = tokenize("   ".to_string()).unwrap_err();

        assert_eq!(actual, EvalError::EmptyExpression)
    }
}
