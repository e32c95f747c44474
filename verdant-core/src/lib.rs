pub mod catalog;
pub mod engine;
pub mod error;
pub mod tuning;

#[cfg(test)]
pub(crate) mod testkit;

pub use engine::assemble::{analyze, analyze_with_tuning};
