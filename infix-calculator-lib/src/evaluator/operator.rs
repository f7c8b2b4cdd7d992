use crate::evaluator::error::EvalError;
use std::fmt;
use std::fmt::Formatter;

/// A binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Exponentiate,
}

/// Grouping direction for chains of equal-precedence operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

impl Operator {
    pub fn from_symbol(symbol: char) -> Option<Operator> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            '^' => Some(Operator::Exponentiate),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Exponentiate => '^',
        }
    }

    pub(crate) fn precedence(&self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => 1,
            Operator::Multiply | Operator::Divide => 2,
            Operator::Exponentiate => 3,
        }
    }

    pub(crate) fn associativity(&self) -> Associativity {
        match self {
            Operator::Add | Operator::Subtract | Operator::Multiply | Operator::Divide => {
                Associativity::Left
            }
            Operator::Exponentiate => Associativity::Right,
        }
    }

    /// Applies the operator to the given operands.
    ///
    /// Division by exactly zero is reported as an error instead of producing
    /// an IEEE-754 infinity.
    pub fn apply(&self, left_operand: f64, right_operand: f64) -> Result<f64, EvalError> {
        match self {
            Operator::Add => Ok(left_operand + right_operand),
            Operator::Subtract => Ok(left_operand - right_operand),
            Operator::Multiply => Ok(left_operand * right_operand),
            Operator::Divide => {
                if right_operand == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(left_operand / right_operand)
            }
            Operator::Exponentiate => Ok(f64::powf(left_operand, right_operand)),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
