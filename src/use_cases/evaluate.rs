use serde_json::Value;

use crate::domain::errors::CalcError;
use crate::domain::operation::{OperandPair, Operation};

// Evaluation use case bound to one operation.
pub struct EvaluateUseCase {
    pub operation: Operation,
}

impl EvaluateUseCase {
    // Validate the raw payload, then run the operation on the operands.
    pub fn execute(&self, payload: &Value) -> Result<f64, CalcError> {
        let operands = parse_operands(payload)?;
        self.operation.apply(operands)
    }
}

// Both operands must be JSON numbers; booleans, strings and nulls are rejected.
fn parse_operands(payload: &Value) -> Result<OperandPair, CalcError> {
    let a = numeric_field(payload, "a")?;
    let b = numeric_field(payload, "b")?;

    Ok(OperandPair { a, b })
}

fn numeric_field(payload: &Value, field: &str) -> Result<f64, CalcError> {
    match payload.get(field) {
        Some(Value::Number(number)) => number.as_f64().ok_or(CalcError::InvalidOperands),
        _ => Err(CalcError::InvalidOperands),
    }
}
