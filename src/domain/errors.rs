// Domain-level errors for arithmetic evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    // An operand is missing or is not a JSON number.
    InvalidOperands,
    DivisionByZero,
    // The result overflowed to infinity or became NaN.
    NonFiniteResult,
}
