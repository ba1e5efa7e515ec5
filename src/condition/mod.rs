//! Condition tags and their evaluation
//!
//! Events list the conditions that must hold for them to be eligible. The
//! evaluator maps each tag onto a query of a [`ConditionContext`], which is
//! whatever world/player snapshot the caller supplies.

mod context;
mod evaluator;
mod tag;

#[cfg(test)]
mod property_tests;

pub use context::*;
pub use evaluator::*;
pub use tag::*;
