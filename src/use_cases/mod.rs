// Use cases layer: request validation and evaluation workflow.

pub mod evaluate;

pub use evaluate::EvaluateUseCase;
