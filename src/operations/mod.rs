pub mod arithmetic;
pub mod comparison;
pub mod functions;

pub use arithmetic::BinaryOperation;
