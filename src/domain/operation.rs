use std::fmt;

use crate::domain::errors::CalcError;

// Validated operands for a single binary operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperandPair {
    pub a: f64,
    pub b: f64,
}

// Supported binary operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    // Apply the operation; only divide has a failure mode of its own.
    pub fn apply(self, operands: OperandPair) -> Result<f64, CalcError> {
        let OperandPair { a, b } = operands;
        let value = match self {
            Operation::Add => a + b,
            Operation::Subtract => a - b,
            Operation::Multiply => a * b,
            Operation::Divide => {
                // `-0.0 == 0.0`, so a negative zero divisor is rejected too.
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                a / b
            }
        };

        if !value.is_finite() {
            return Err(CalcError::NonFiniteResult);
        }

        Ok(value)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
