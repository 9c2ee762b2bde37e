//! Decorators that adapt kiln processors to a single contract and control when they run

mod benchmark;
pub use benchmark::*;

mod decorator;
pub use decorator::*;

pub mod eligibility;

mod failure_tolerant;
pub use failure_tolerant::*;

pub mod options;
pub use options::DecoratorOptions;

mod patterns;
pub use patterns::*;

#[cfg(test)]
mod test_utils;
