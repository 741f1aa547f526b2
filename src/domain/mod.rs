// Domain layer: arithmetic rules and error taxonomy.

pub mod errors;
pub mod operation;

pub use errors::CalcError;
pub use operation::{OperandPair, Operation};
